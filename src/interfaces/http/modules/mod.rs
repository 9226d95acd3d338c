pub mod availability;
pub mod health;
pub mod metrics;
pub mod pages;
pub mod request_id;
pub mod reservations;
pub mod session;
