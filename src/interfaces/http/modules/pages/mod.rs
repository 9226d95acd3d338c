//! Static pages

pub mod handlers;

pub use handlers::*;
