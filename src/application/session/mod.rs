//! Visitor sessions and the workflow's working memory

mod store;
mod working_memory;

pub use store::{start_session_sweeper, InMemorySessionStore, SessionStore, SharedSessionStore};
pub use working_memory::{WorkingMemory, ERROR_KEY, RESERVATION_KEY};
