//! Reservation aggregate
//!
//! Contains the Reservation entity (draft and committed) and its repository interface.

pub mod model;
pub mod repository;

pub use model::{GuestDetails, Reservation};
pub use repository::ReservationRepository;
