//! Room restriction repository interface

use async_trait::async_trait;

use super::model::RoomRestriction;
use crate::domain::stay::StayPeriod;
use crate::domain::DomainResult;

#[async_trait]
pub trait RoomRestrictionRepository: Send + Sync {
    /// Insert a restriction.
    ///
    /// Implementations refuse an insert that would overlap an existing
    /// restriction on the same room with `ConstraintViolation`.
    async fn insert(&self, restriction: &RoomRestriction) -> DomainResult<()>;

    /// Number of restrictions on `room_id` overlapping `stay`
    async fn count_overlapping(&self, room_id: i32, stay: StayPeriod) -> DomainResult<u64>;

    /// All restrictions on a room, ordered by start date
    async fn find_for_room(&self, room_id: i32) -> DomainResult<Vec<RoomRestriction>>;
}
