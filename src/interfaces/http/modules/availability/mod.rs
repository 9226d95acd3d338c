//! Availability search (page flow) and the JSON availability probe

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
