//! Room restriction aggregate
//!
//! A restriction blocks a room for a stay period. Committing a reservation
//! creates one; owner blocks exist without a reservation.

pub mod model;
pub mod repository;

pub use model::{RestrictionKind, RoomRestriction};
pub use repository::RoomRestrictionRepository;
