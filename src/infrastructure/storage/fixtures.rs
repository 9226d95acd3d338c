//! Canned in-memory store with documented room IDs
//!
//! Tests and local runs share these IDs instead of scattering magic
//! numbers through assertions.

use super::memory::{FaultPlan, InMemoryRepositoryProvider};
use crate::domain::Room;

/// Seeded, always resolvable
pub const GENERALS_QUARTERS: i32 = 1;
/// Seeded, always resolvable
pub const MAJORS_SUITE: i32 = 2;
/// Not seeded; every ID from here up is not found
pub const UNKNOWN_ROOM: i32 = 3;

/// Reservation inserts for this room fail
pub const RESERVATION_INSERT_FAILS: i32 = MAJORS_SUITE;
/// Restriction inserts for this room fail after the reservation insert succeeds
pub const RESTRICTION_INSERT_FAILS: i32 = 1000;
/// Overlap counts for this room fail
pub const STORE_UNREACHABLE: i32 = 1001;

pub const GENERALS_QUARTERS_NAME: &str = "General's Quarters";
pub const MAJORS_SUITE_NAME: &str = "Major's Suite";

pub fn rooms() -> Vec<Room> {
    vec![
        Room::new(GENERALS_QUARTERS, GENERALS_QUARTERS_NAME),
        Room::new(MAJORS_SUITE, MAJORS_SUITE_NAME),
    ]
}

/// Faults tied to the IDs above
pub fn canned_faults() -> FaultPlan {
    FaultPlan::none()
        .fail_reservation_insert(RESERVATION_INSERT_FAILS)
        .fail_restriction_insert(RESTRICTION_INSERT_FAILS)
        .fail_availability(STORE_UNREACHABLE)
}

/// Seeded rooms with the canned faults
pub fn seeded_store() -> InMemoryRepositoryProvider {
    InMemoryRepositoryProvider::new()
        .with_rooms(rooms())
        .with_faults(canned_faults())
}

/// Seeded rooms, no faults
pub fn healthy_store() -> InMemoryRepositoryProvider {
    InMemoryRepositoryProvider::new().with_rooms(rooms())
}

/// Seeded rooms, every call fails
pub fn offline_store() -> InMemoryRepositoryProvider {
    InMemoryRepositoryProvider::new()
        .with_rooms(rooms())
        .with_faults(FaultPlan::offline())
}
