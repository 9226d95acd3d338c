//! Repository access for the domain layer
//!
//! `RepositoryProvider` bundles the per-aggregate repositories so services
//! take one dependency and ask for only what they need:
//!
//! ```ignore
//! async fn handle(repos: &dyn RepositoryProvider) {
//!     let room = repos.rooms().find_by_id(1).await?;
//!     let n = repos.restrictions().count_overlapping(1, stay).await?;
//! }
//! ```

use super::reservation::ReservationRepository;
use super::restriction::RoomRestrictionRepository;
use super::room::RoomRepository;

pub trait RepositoryProvider: Send + Sync {
    fn rooms(&self) -> &dyn RoomRepository;
    fn reservations(&self) -> &dyn ReservationRepository;
    fn restrictions(&self) -> &dyn RoomRestrictionRepository;
}
