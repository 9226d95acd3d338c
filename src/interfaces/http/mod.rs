//! HTTP interface
//!
//! - `common`: response envelope and JSON page views
//! - `modules`: handlers and middleware per concern
//! - `router`: route table and middleware stack

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_router, AppState, RouterDeps};
