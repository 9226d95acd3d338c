//! Room aggregate
//!
//! Rooms are reference data: created by administration, read-only here.

pub mod model;
pub mod repository;

pub use model::Room;
pub use repository::RoomRepository;
