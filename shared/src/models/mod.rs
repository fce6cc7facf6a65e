//! Domain models for the Assistant Agricole Madagascar

mod chat;
mod language;
mod weather;

pub use chat::*;
pub use language::*;
pub use weather::*;
