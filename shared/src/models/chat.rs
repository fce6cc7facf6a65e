//! Conversation models

use serde::{Deserialize, Serialize};

/// One question/reply exchange shown back to the user.
///
/// The stored reply is the raw model text (or the substituted error line);
/// markdown-to-HTML conversion happens at render time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatTurn {
    pub question: String,
    pub reply: String,
}
