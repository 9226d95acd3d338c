//! SeaORM implementation of RoomRestrictionRepository
//!
//! Inserts re-count overlapping rows inside the same transaction, so two
//! commits racing for one room cannot both land (SQLite serializes writers).

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, NotSet, TransactionTrait,
};

use super::{bounded, db_err};
use crate::domain::{
    DomainError, DomainResult, RestrictionKind, RoomRestriction, RoomRestrictionRepository,
    StayPeriod, StoreOp,
};
use crate::infrastructure::database::entities::room_restriction;

pub struct SeaOrmRoomRestrictionRepository {
    db: DatabaseConnection,
    timeout: Duration,
}

impl SeaOrmRoomRestrictionRepository {
    pub fn new(db: DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: room_restriction::Model) -> RoomRestriction {
    RoomRestriction {
        id: m.id,
        room_id: m.room_id,
        start_date: m.start_date,
        end_date: m.end_date,
        reservation_id: m.reservation_id,
        kind: RestrictionKind::from_id(m.restriction_id).unwrap_or(RestrictionKind::OwnerBlock),
    }
}

/// Restrictions on `room_id` intersecting `[stay.start, stay.end)`
async fn count_overlapping_on<C: ConnectionTrait>(
    conn: &C,
    room_id: i32,
    stay: StayPeriod,
) -> Result<u64, sea_orm::DbErr> {
    room_restriction::Entity::find()
        .filter(room_restriction::Column::RoomId.eq(room_id))
        .filter(room_restriction::Column::StartDate.lt(stay.end))
        .filter(room_restriction::Column::EndDate.gt(stay.start))
        .count(conn)
        .await
}

// ── RoomRestrictionRepository impl ──────────────────────────────

#[async_trait]
impl RoomRestrictionRepository for SeaOrmRoomRestrictionRepository {
    async fn insert(&self, r: &RoomRestriction) -> DomainResult<()> {
        debug!(
            "Inserting {} restriction for room {}",
            r.kind.name(),
            r.room_id
        );
        let op = StoreOp::InsertRestriction;
        bounded(op, self.timeout, async {
            let txn = self.db.begin().await.map_err(db_err(op))?;

            let clashes = count_overlapping_on(&txn, r.room_id, r.stay())
                .await
                .map_err(db_err(op))?;
            if clashes > 0 {
                warn!("Refusing overlapping restriction for room {}", r.room_id);
                txn.rollback().await.map_err(db_err(op))?;
                return Err(DomainError::room_taken(r.room_id));
            }

            let now = Utc::now();
            let model = room_restriction::ActiveModel {
                id: NotSet,
                start_date: Set(r.start_date),
                end_date: Set(r.end_date),
                room_id: Set(r.room_id),
                reservation_id: Set(r.reservation_id),
                restriction_id: Set(r.kind.id()),
                created_at: Set(now),
                updated_at: Set(now),
            };
            model.insert(&txn).await.map_err(db_err(op))?;
            txn.commit().await.map_err(db_err(op))?;
            Ok(())
        })
        .await
    }

    async fn count_overlapping(&self, room_id: i32, stay: StayPeriod) -> DomainResult<u64> {
        let op = StoreOp::CountOverlapping;
        bounded(op, self.timeout, async {
            count_overlapping_on(&self.db, room_id, stay)
                .await
                .map_err(db_err(op))
        })
        .await
    }

    async fn find_for_room(&self, room_id: i32) -> DomainResult<Vec<RoomRestriction>> {
        let op = StoreOp::CountOverlapping;
        bounded(op, self.timeout, async {
            let models = room_restriction::Entity::find()
                .filter(room_restriction::Column::RoomId.eq(room_id))
                .order_by_asc(room_restriction::Column::StartDate)
                .all(&self.db)
                .await
                .map_err(db_err(op))?;
            Ok(models.into_iter().map(model_to_domain).collect())
        })
        .await
    }
}
