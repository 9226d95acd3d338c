//! SeaORM implementation of RoomRepository

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use sea_orm::sea_query::Query;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::{bounded, db_err};
use crate::domain::{DomainResult, Room, RoomRepository, StayPeriod, StoreOp};
use crate::infrastructure::database::entities::{room, room_restriction};

pub struct SeaOrmRoomRepository {
    db: DatabaseConnection,
    timeout: Duration,
}

impl SeaOrmRoomRepository {
    pub fn new(db: DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

pub(super) fn model_to_domain(m: room::Model) -> Room {
    Room {
        id: m.id,
        name: m.room_name,
    }
}

// ── RoomRepository impl ─────────────────────────────────────────

#[async_trait]
impl RoomRepository for SeaOrmRoomRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>> {
        let op = StoreOp::GetRoom;
        bounded(op, self.timeout, async {
            let model = room::Entity::find_by_id(id)
                .one(&self.db)
                .await
                .map_err(db_err(op))?;
            Ok(model.map(model_to_domain))
        })
        .await
    }

    async fn find_available(&self, stay: StayPeriod) -> DomainResult<Vec<Room>> {
        debug!("Listing rooms free for {} .. {}", stay.start, stay.end);
        let op = StoreOp::ListAvailable;
        bounded(op, self.timeout, async {
            let blocked = Query::select()
                .column(room_restriction::Column::RoomId)
                .from(room_restriction::Entity)
                .and_where(room_restriction::Column::StartDate.lt(stay.end))
                .and_where(room_restriction::Column::EndDate.gt(stay.start))
                .to_owned();

            let models = room::Entity::find()
                .filter(room::Column::Id.not_in_subquery(blocked))
                .order_by_asc(room::Column::Id)
                .all(&self.db)
                .await
                .map_err(db_err(op))?;
            Ok(models.into_iter().map(model_to_domain).collect())
        })
        .await
    }

    async fn find_all(&self) -> DomainResult<Vec<Room>> {
        let op = StoreOp::ListAvailable;
        bounded(op, self.timeout, async {
            let models = room::Entity::find()
                .order_by_asc(room::Column::Id)
                .all(&self.db)
                .await
                .map_err(db_err(op))?;
            Ok(models.into_iter().map(model_to_domain).collect())
        })
        .await
    }
}
