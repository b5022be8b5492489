//! Provider-agnostic building blocks for **streamchat**.
//!
//! * [`generic`] – turns, history and wire messages.
//! * [`model`] – the fixed set of served models.
//! * [`parameters`] – per-call generation settings and their UI bounds.
//! * [`provider`] – the backend seam ([`provider::StreamingChatProvider`]).
//! * [`accumulate`] – folds raw deltas into ever-growing partial responses.
//! * [`ChatClient`] – ties the above together behind a single `respond` call.
pub mod accumulate;
pub mod client;
pub mod error;
pub mod generic;
pub mod model;
pub mod parameters;
pub mod provider;

pub use client::ChatClient;
