//! Availability queries over the restriction store

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{DomainResult, RepositoryProvider, Room, StayPeriod};

/// Answers "is this room free" and "which rooms are free" for a stay
#[derive(Clone)]
pub struct AvailabilityService {
    repos: Arc<dyn RepositoryProvider>,
}

impl AvailabilityService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// True iff no restriction on `room_id` overlaps `[start, end)`.
    ///
    /// Zero-length and inverted ranges are a `ConstraintViolation`.
    pub async fn is_room_available(
        &self,
        room_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<bool> {
        let stay = StayPeriod::new(start, end)?;
        let overlapping = self
            .repos
            .restrictions()
            .count_overlapping(room_id, stay)
            .await?;
        debug!(room_id, %start, %end, overlapping, "Checked room availability");
        Ok(overlapping == 0)
    }

    /// Every room with no restriction overlapping `[start, end)`.
    ///
    /// An empty list means nothing is free, not that the query failed.
    pub async fn search_available_rooms(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Vec<Room>> {
        let stay = StayPeriod::new(start, end)?;
        let rooms = self.repos.rooms().find_available(stay).await?;
        debug!(%start, %end, found = rooms.len(), "Searched available rooms");
        Ok(rooms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, StoreOp};
    use crate::infrastructure::storage::fixtures::{
        healthy_store, offline_store, seeded_store, GENERALS_QUARTERS, MAJORS_SUITE,
        STORE_UNREACHABLE,
    };
    use crate::infrastructure::storage::InMemoryRepositoryProvider;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn service(store: InMemoryRepositoryProvider) -> (AvailabilityService, Arc<InMemoryRepositoryProvider>) {
        let store = Arc::new(store);
        (AvailabilityService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn empty_store_lists_every_room() {
        let (svc, _) = service(healthy_store());
        let rooms = svc
            .search_available_rooms(d("2050-01-01"), d("2050-01-02"))
            .await
            .unwrap();
        assert_eq!(rooms.len(), 2);
    }

    #[tokio::test]
    async fn fully_covered_room_is_unavailable() {
        let (svc, store) = service(seeded_store());
        store.block(
            MAJORS_SUITE,
            StayPeriod::new(d("2050-01-01"), d("2050-01-31")).unwrap(),
        );

        let available = svc
            .is_room_available(MAJORS_SUITE, d("2050-01-10"), d("2050-01-12"))
            .await
            .unwrap();
        assert!(!available);

        let available = svc
            .is_room_available(GENERALS_QUARTERS, d("2050-01-10"), d("2050-01-12"))
            .await
            .unwrap();
        assert!(available);
    }

    #[tokio::test]
    async fn departure_day_is_bookable() {
        let (svc, store) = service(healthy_store());
        store.block(
            GENERALS_QUARTERS,
            StayPeriod::new(d("2050-01-01"), d("2050-01-05")).unwrap(),
        );
        assert!(svc
            .is_room_available(GENERALS_QUARTERS, d("2050-01-05"), d("2050-01-06"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn inverted_range_is_rejected() {
        let (svc, _) = service(healthy_store());
        let err = svc
            .is_room_available(GENERALS_QUARTERS, d("2050-01-05"), d("2050-01-05"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ConstraintViolation(_)));

        let err = svc
            .search_available_rooms(d("2050-01-05"), d("2050-01-01"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn store_failure_is_never_an_answer() {
        let (svc, _) = service(seeded_store());
        let err = svc
            .is_room_available(STORE_UNREACHABLE, d("2050-01-01"), d("2050-01-02"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::StoreUnavailable { op: StoreOp::CountOverlapping, .. }
        ));

        let (svc, _) = service(offline_store());
        assert!(svc
            .search_available_rooms(d("2050-01-01"), d("2050-01-02"))
            .await
            .is_err());
    }
}
