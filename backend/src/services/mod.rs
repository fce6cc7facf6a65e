//! Business logic services for the Assistant Agricole

pub mod assistant;
pub mod history;

pub use assistant::AssistantService;
pub use history::{ConversationStore, InMemoryHistory};
