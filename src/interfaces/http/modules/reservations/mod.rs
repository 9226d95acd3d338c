//! Reservation flow: choose or book a room, enter guest details, commit, summary

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
