//! Room repository interface

use async_trait::async_trait;

use super::model::Room;
use crate::domain::stay::StayPeriod;
use crate::domain::DomainResult;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Find room by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>>;

    /// Rooms with no restriction overlapping `stay`, ordered by ID
    async fn find_available(&self, stay: StayPeriod) -> DomainResult<Vec<Room>>;

    /// All rooms, ordered by ID
    async fn find_all(&self) -> DomainResult<Vec<Room>>;
}
