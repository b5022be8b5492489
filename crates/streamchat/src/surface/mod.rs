//! Terminal chat surface: reads user input, keeps the conversation and
//! settings, and renders replies as they stream in.
mod command;
mod render;
mod repl;
mod session;

pub use command::{Command, HELP};
pub use render::{Renderer, TerminalRenderer};
pub use repl::{TITLE, run};
pub use session::{ChatSession, TurnOutcome};
