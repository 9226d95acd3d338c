//! SeaORM implementation of ReservationRepository

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, Set};

use super::room_repository;
use super::{bounded, db_err};
use crate::domain::{DomainResult, Reservation, ReservationRepository, StoreOp};
use crate::infrastructure::database::entities::{reservation, room};

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
    timeout: Duration,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: reservation::Model, room: Option<room::Model>) -> Reservation {
    Reservation {
        id: m.id,
        room_id: m.room_id,
        room: room.map(room_repository::model_to_domain),
        start_date: m.start_date,
        end_date: m.end_date,
        first_name: m.first_name,
        last_name: m.last_name,
        email: m.email,
        phone: m.phone,
        created_at: Some(m.created_at),
        updated_at: Some(m.updated_at),
    }
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn insert(&self, r: &Reservation) -> DomainResult<i32> {
        debug!("Inserting reservation for room {}", r.room_id);
        let op = StoreOp::InsertReservation;
        bounded(op, self.timeout, async {
            let now = Utc::now();
            let model = reservation::ActiveModel {
                id: NotSet,
                first_name: Set(r.first_name.clone()),
                last_name: Set(r.last_name.clone()),
                email: Set(r.email.clone()),
                phone: Set(r.phone.clone()),
                start_date: Set(r.start_date),
                end_date: Set(r.end_date),
                room_id: Set(r.room_id),
                created_at: Set(now),
                updated_at: Set(now),
            };
            let inserted = model.insert(&self.db).await.map_err(db_err(op))?;
            Ok(inserted.id)
        })
        .await
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>> {
        let op = StoreOp::GetRoom;
        bounded(op, self.timeout, async {
            let found = reservation::Entity::find_by_id(id)
                .find_also_related(room::Entity)
                .one(&self.db)
                .await
                .map_err(db_err(op))?;
            Ok(found.map(|(m, room)| model_to_domain(m, room)))
        })
        .await
    }
}
