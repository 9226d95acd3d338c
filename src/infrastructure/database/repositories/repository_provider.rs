//! SeaORM implementation of RepositoryProvider

use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::ReservationRepository;
use crate::domain::restriction::RoomRestrictionRepository;
use crate::domain::room::RoomRepository;

use super::reservation_repository::SeaOrmReservationRepository;
use super::room_repository::SeaOrmRoomRepository;
use super::room_restriction_repository::SeaOrmRoomRestrictionRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors,
/// each bounded by the same per-call timeout.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone(), Duration::from_secs(3));
/// let room = repos.rooms().find_by_id(1).await?;
/// let n = repos.restrictions().count_overlapping(1, stay).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    rooms: SeaOrmRoomRepository,
    reservations: SeaOrmReservationRepository,
    restrictions: SeaOrmRoomRestrictionRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection, query_timeout: Duration) -> Self {
        Self {
            rooms: SeaOrmRoomRepository::new(db.clone(), query_timeout),
            reservations: SeaOrmReservationRepository::new(db.clone(), query_timeout),
            restrictions: SeaOrmRoomRestrictionRepository::new(db, query_timeout),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn rooms(&self) -> &dyn RoomRepository {
        &self.rooms
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }

    fn restrictions(&self) -> &dyn RoomRestrictionRepository {
        &self.restrictions
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        DomainError, Reservation, Room, RoomRestriction, StayPeriod, RestrictionKind,
    };
    use crate::infrastructure::database::migrator::Migrator;
    use chrono::Utc;
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;

    async fn provider() -> SeaOrmRepositoryProvider {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeaOrmRepositoryProvider::new(db, Duration::from_secs(3))
    }

    fn stay(s: &str, e: &str) -> StayPeriod {
        StayPeriod::parse(s, e).unwrap()
    }

    fn guest_draft(room_id: i32, s: &str, e: &str) -> Reservation {
        let mut r = Reservation::draft(stay(s, e));
        r.room_id = room_id;
        r.first_name = "John".into();
        r.last_name = "Smith".into();
        r.email = "john@smith.com".into();
        r.phone = "555".into();
        r
    }

    #[tokio::test]
    async fn migrations_seed_rooms() {
        let repos = provider().await;
        let rooms = repos.rooms().find_all().await.unwrap();
        assert_eq!(
            rooms,
            vec![
                Room::new(1, "General's Quarters"),
                Room::new(2, "Major's Suite"),
            ]
        );
        assert!(repos.rooms().find_by_id(3).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn reservation_round_trips_with_room() {
        let repos = provider().await;
        let id = repos
            .reservations()
            .insert(&guest_draft(2, "2050-01-01", "2050-01-03"))
            .await
            .unwrap();
        assert!(id > 0);

        let stored = repos.reservations().find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.room_name(), "Major's Suite");
        assert_eq!(stored.stay(), stay("2050-01-01", "2050-01-03"));
        assert_eq!(stored.email, "john@smith.com");
    }

    #[tokio::test]
    async fn restriction_blocks_room_for_overlapping_stays() {
        let repos = provider().await;
        let mut reservation = guest_draft(1, "2050-01-10", "2050-01-15");
        let id = repos.reservations().insert(&reservation).await.unwrap();
        reservation.mark_committed(id, Utc::now());
        repos
            .restrictions()
            .insert(&RoomRestriction::for_reservation(&reservation))
            .await
            .unwrap();

        let count = repos
            .restrictions()
            .count_overlapping(1, stay("2050-01-14", "2050-01-20"))
            .await
            .unwrap();
        assert_eq!(count, 1);
        let count = repos
            .restrictions()
            .count_overlapping(1, stay("2050-01-15", "2050-01-20"))
            .await
            .unwrap();
        assert_eq!(count, 0);

        let free = repos
            .rooms()
            .find_available(stay("2050-01-11", "2050-01-12"))
            .await
            .unwrap();
        assert_eq!(free, vec![Room::new(2, "Major's Suite")]);

        let listed = repos.restrictions().find_for_room(1).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].reservation_id, Some(id));
        assert_eq!(listed[0].kind, RestrictionKind::Reservation);
    }

    #[tokio::test]
    async fn overlapping_restriction_insert_is_refused() {
        let repos = provider().await;
        repos
            .restrictions()
            .insert(&RoomRestriction::owner_block(2, stay("2050-03-01", "2050-03-05")))
            .await
            .unwrap();

        let err = repos
            .restrictions()
            .insert(&RoomRestriction::owner_block(2, stay("2050-03-04", "2050-03-06")))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ConstraintViolation(_)));

        repos
            .restrictions()
            .insert(&RoomRestriction::owner_block(2, stay("2050-03-05", "2050-03-06")))
            .await
            .unwrap();
        assert_eq!(repos.restrictions().find_for_room(2).await.unwrap().len(), 2);
    }
}
