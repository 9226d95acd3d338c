//! In-memory repository provider and its canned fixtures

pub mod fixtures;
mod memory;

pub use memory::{FaultPlan, InMemoryRepositoryProvider};
