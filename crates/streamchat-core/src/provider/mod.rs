mod chat_stream;

pub use chat_stream::*;
