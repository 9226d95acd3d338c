//! # Bookings
//!
//! Room reservation service: search availability over a date range, pick a
//! room, enter guest details, commit the reservation and its room
//! restriction.
//!
//! ## Architecture
//!
//! - **shared**: error taxonomy, form validation, shutdown signal
//! - **domain**: rooms, reservations, restrictions, stay periods, repository traits
//! - **application**: availability engine, session working memory, reservation workflow
//! - **infrastructure**: SeaORM store and migrations, in-memory store with fixtures
//! - **interfaces**: axum router, page-flow and probe handlers
//! - **server**: process lifecycle

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

pub use interfaces::http::create_router;
