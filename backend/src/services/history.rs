//! Conversation history storage
//!
//! The store is injected behind a trait so that synchronization and
//! persistence choices stay pluggable; the default implementation keeps
//! turns in process memory for the lifetime of the server.

use std::sync::{Mutex, PoisonError};

use shared::ChatTurn;

/// Append-only, insertion-ordered conversation store
pub trait ConversationStore: Send + Sync {
    /// Record a completed turn
    fn append(&self, turn: ChatTurn);

    /// All recorded turns, oldest first
    fn list(&self) -> Vec<ChatTurn>;
}

/// In-memory store; contents are lost on restart
#[derive(Default)]
pub struct InMemoryHistory {
    turns: Mutex<Vec<ChatTurn>>,
}

impl InMemoryHistory {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConversationStore for InMemoryHistory {
    fn append(&self, turn: ChatTurn) {
        self.turns
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(turn);
    }

    fn list(&self) -> Vec<ChatTurn> {
        self.turns
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
