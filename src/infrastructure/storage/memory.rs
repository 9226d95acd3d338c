//! In-memory repository provider for development and testing
//!
//! Implements the full repository contract with real overlap semantics.
//! A [`FaultPlan`] makes chosen operations fail with `StoreUnavailable`
//! so error paths can be driven deterministically.

use std::collections::HashSet;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::domain::{
    DomainError, DomainResult, RepositoryProvider, Reservation, ReservationRepository, Room,
    RoomRepository, RoomRestriction, RoomRestrictionRepository, StayPeriod, StoreOp,
};

const INJECTED: &str = "injected fault";

/// Which operations fail, keyed by room ID
#[derive(Debug, Clone, Default)]
pub struct FaultPlan {
    /// Every operation fails
    pub offline: bool,
    pub reservation_insert: HashSet<i32>,
    pub restriction_insert: HashSet<i32>,
    /// Overlap counts for these rooms fail
    pub availability: HashSet<i32>,
    /// Room listing fails for every stay
    pub listing: bool,
}

impl FaultPlan {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn fail_reservation_insert(mut self, room_id: i32) -> Self {
        self.reservation_insert.insert(room_id);
        self
    }

    pub fn fail_restriction_insert(mut self, room_id: i32) -> Self {
        self.restriction_insert.insert(room_id);
        self
    }

    pub fn fail_availability(mut self, room_id: i32) -> Self {
        self.availability.insert(room_id);
        self
    }

    pub fn fail_listing(mut self) -> Self {
        self.listing = true;
        self
    }

    fn check(&self, op: StoreOp, room_id: Option<i32>) -> DomainResult<()> {
        let hit = self.offline
            || match (op, room_id) {
                (StoreOp::InsertReservation, Some(id)) => self.reservation_insert.contains(&id),
                (StoreOp::InsertRestriction, Some(id)) => self.restriction_insert.contains(&id),
                (StoreOp::CountOverlapping, Some(id)) => self.availability.contains(&id),
                (StoreOp::ListAvailable, _) => self.listing,
                _ => false,
            };
        if hit {
            return Err(DomainError::store(op, INJECTED));
        }
        Ok(())
    }
}

/// In-memory store for development and testing
pub struct InMemoryRepositoryProvider {
    rooms: DashMap<i32, Room>,
    reservations: DashMap<i32, Reservation>,
    /// Restrictions grouped by room; the per-room entry lock makes
    /// the overlap re-check and insert atomic.
    restrictions: DashMap<i32, Vec<RoomRestriction>>,
    reservation_counter: AtomicI32,
    restriction_counter: AtomicI32,
    faults: FaultPlan,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
            reservations: DashMap::new(),
            restrictions: DashMap::new(),
            reservation_counter: AtomicI32::new(1),
            restriction_counter: AtomicI32::new(1),
            faults: FaultPlan::none(),
        }
    }

    pub fn with_rooms(self, rooms: impl IntoIterator<Item = Room>) -> Self {
        for room in rooms {
            self.rooms.insert(room.id, room);
        }
        self
    }

    pub fn with_faults(mut self, faults: FaultPlan) -> Self {
        self.faults = faults;
        self
    }

    /// Block a room outright, bypassing fault injection
    pub fn block(&self, room_id: i32, stay: StayPeriod) {
        let mut restriction = RoomRestriction::owner_block(room_id, stay);
        restriction.id = self.restriction_counter.fetch_add(1, Ordering::SeqCst);
        self.restrictions
            .entry(room_id)
            .or_default()
            .push(restriction);
    }

    pub fn reservation_count(&self) -> usize {
        self.reservations.len()
    }

    pub fn restriction_count(&self) -> usize {
        self.restrictions.iter().map(|e| e.value().len()).sum()
    }

    fn overlapping(&self, room_id: i32, stay: &StayPeriod) -> u64 {
        self.restrictions
            .get(&room_id)
            .map(|list| list.iter().filter(|r| r.stay().overlaps(stay)).count() as u64)
            .unwrap_or(0)
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn rooms(&self) -> &dyn RoomRepository {
        self
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        self
    }

    fn restrictions(&self) -> &dyn RoomRestrictionRepository {
        self
    }
}

#[async_trait]
impl RoomRepository for InMemoryRepositoryProvider {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>> {
        self.faults.check(StoreOp::GetRoom, Some(id))?;
        Ok(self.rooms.get(&id).map(|r| r.clone()))
    }

    async fn find_available(&self, stay: StayPeriod) -> DomainResult<Vec<Room>> {
        self.faults.check(StoreOp::ListAvailable, None)?;
        let mut rooms: Vec<Room> = self
            .rooms
            .iter()
            .filter(|r| self.overlapping(r.id, &stay) == 0)
            .map(|r| r.value().clone())
            .collect();
        rooms.sort_by_key(|r| r.id);
        Ok(rooms)
    }

    async fn find_all(&self) -> DomainResult<Vec<Room>> {
        self.faults.check(StoreOp::ListAvailable, None)?;
        let mut rooms: Vec<Room> = self.rooms.iter().map(|r| r.value().clone()).collect();
        rooms.sort_by_key(|r| r.id);
        Ok(rooms)
    }
}

#[async_trait]
impl ReservationRepository for InMemoryRepositoryProvider {
    async fn insert(&self, reservation: &Reservation) -> DomainResult<i32> {
        self.faults
            .check(StoreOp::InsertReservation, Some(reservation.room_id))?;

        let id = self.reservation_counter.fetch_add(1, Ordering::SeqCst);
        let mut stored = reservation.clone();
        stored.mark_committed(id, Utc::now());
        self.reservations.insert(id, stored);
        Ok(id)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>> {
        self.faults.check(StoreOp::GetRoom, None)?;
        Ok(self.reservations.get(&id).map(|r| r.clone()))
    }
}

#[async_trait]
impl RoomRestrictionRepository for InMemoryRepositoryProvider {
    async fn insert(&self, restriction: &RoomRestriction) -> DomainResult<()> {
        self.faults
            .check(StoreOp::InsertRestriction, Some(restriction.room_id))?;

        let stay = restriction.stay();
        let mut list = self.restrictions.entry(restriction.room_id).or_default();
        if list.iter().any(|r| r.stay().overlaps(&stay)) {
            return Err(DomainError::room_taken(restriction.room_id));
        }

        let mut stored = restriction.clone();
        stored.id = self.restriction_counter.fetch_add(1, Ordering::SeqCst);
        list.push(stored);
        Ok(())
    }

    async fn count_overlapping(&self, room_id: i32, stay: StayPeriod) -> DomainResult<u64> {
        self.faults.check(StoreOp::CountOverlapping, Some(room_id))?;
        Ok(self.overlapping(room_id, &stay))
    }

    async fn find_for_room(&self, room_id: i32) -> DomainResult<Vec<RoomRestriction>> {
        self.faults.check(StoreOp::CountOverlapping, Some(room_id))?;
        let mut list = self
            .restrictions
            .get(&room_id)
            .map(|l| l.clone())
            .unwrap_or_default();
        list.sort_by_key(|r| r.start_date);
        Ok(list)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn stay(s: &str, e: &str) -> StayPeriod {
        StayPeriod::parse(s, e).unwrap()
    }

    fn store() -> InMemoryRepositoryProvider {
        InMemoryRepositoryProvider::new().with_rooms([
            Room::new(1, "General's Quarters"),
            Room::new(2, "Major's Suite"),
        ])
    }

    #[tokio::test]
    async fn counts_only_overlapping_restrictions() {
        let repos = store();
        repos.block(1, stay("2050-01-10", "2050-01-15"));

        let cases = [
            (1, "2050-01-12", "2050-01-13", 1),
            (1, "2050-01-15", "2050-01-20", 0),
            (1, "2050-01-01", "2050-01-10", 0),
            (2, "2050-01-12", "2050-01-13", 0),
        ];
        for (room_id, s, e, expected) in cases {
            let count = repos
                .restrictions()
                .count_overlapping(room_id, stay(s, e))
                .await
                .unwrap();
            assert_eq!(count, expected, "room {room_id} {s}..{e}");
        }
    }

    #[tokio::test]
    async fn find_available_excludes_blocked_rooms() {
        let repos = store();
        repos.block(2, stay("2050-01-01", "2050-01-05"));

        let rooms = repos
            .rooms()
            .find_available(stay("2050-01-02", "2050-01-03"))
            .await
            .unwrap();
        assert_eq!(rooms, vec![Room::new(1, "General's Quarters")]);

        let rooms = repos
            .rooms()
            .find_available(stay("2050-01-05", "2050-01-06"))
            .await
            .unwrap();
        assert_eq!(rooms.len(), 2);
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let repos = store();
        let mut draft = Reservation::draft(stay("2050-01-01", "2050-01-02"));
        draft.choose_room(Room::new(1, "General's Quarters"));

        let first = repos.reservations().insert(&draft).await.unwrap();
        let second = repos.reservations().insert(&draft).await.unwrap();
        assert!(second > first);

        let stored = repos.reservations().find_by_id(first).await.unwrap().unwrap();
        assert_eq!(stored.id, first);
        assert!(stored.created_at.is_some());
    }

    #[tokio::test]
    async fn restriction_insert_rechecks_overlap() {
        let repos = store();
        let s = stay("2050-02-01", "2050-02-03");
        repos
            .restrictions()
            .insert(&RoomRestriction::owner_block(1, s))
            .await
            .unwrap();

        let err = repos
            .restrictions()
            .insert(&RoomRestriction::owner_block(1, stay("2050-02-02", "2050-02-04")))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ConstraintViolation(_)));
        assert_eq!(repos.restriction_count(), 1);

        let listed = repos.restrictions().find_for_room(1).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].stay(), s);
    }

    #[tokio::test]
    async fn faults_surface_as_store_unavailable() {
        let repos = store().with_faults(FaultPlan::none().fail_reservation_insert(2).fail_listing());

        let mut draft = Reservation::draft(stay("2050-01-01", "2050-01-02"));
        draft.choose_room(Room::new(2, "Major's Suite"));
        let err = repos.reservations().insert(&draft).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::StoreUnavailable { op: StoreOp::InsertReservation, .. }
        ));
        assert_eq!(repos.reservation_count(), 0);

        let err = repos
            .rooms()
            .find_available(stay("2050-01-01", "2050-01-02"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::StoreUnavailable { op: StoreOp::ListAvailable, .. }
        ));
    }

    #[tokio::test]
    async fn offline_store_fails_everything() {
        let repos = store().with_faults(FaultPlan::offline());
        assert!(repos.rooms().find_by_id(1).await.is_err());
        assert!(repos
            .restrictions()
            .count_overlapping(1, stay("2050-01-01", "2050-01-02"))
            .await
            .is_err());
    }
}
