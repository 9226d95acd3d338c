//! Room restriction domain entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::reservation::Reservation;
use crate::domain::stay::StayPeriod;

/// Why a room is blocked. Stored as its numeric ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestrictionKind {
    /// Blocked by a guest reservation
    Reservation,
    /// Blocked by the owner
    OwnerBlock,
}

impl RestrictionKind {
    pub fn id(&self) -> i32 {
        match self {
            Self::Reservation => 1,
            Self::OwnerBlock => 2,
        }
    }

    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(Self::Reservation),
            2 => Some(Self::OwnerBlock),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Reservation => "Reservation",
            Self::OwnerBlock => "Owner Block",
        }
    }
}

/// A block on a room for `[start_date, end_date)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRestriction {
    pub id: i32,
    pub room_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Set only for `RestrictionKind::Reservation`
    pub reservation_id: Option<i32>,
    pub kind: RestrictionKind,
}

impl RoomRestriction {
    /// Restriction covering a committed reservation
    pub fn for_reservation(reservation: &Reservation) -> Self {
        Self {
            id: 0,
            room_id: reservation.room_id,
            start_date: reservation.start_date,
            end_date: reservation.end_date,
            reservation_id: Some(reservation.id),
            kind: RestrictionKind::Reservation,
        }
    }

    pub fn owner_block(room_id: i32, stay: StayPeriod) -> Self {
        Self {
            id: 0,
            room_id,
            start_date: stay.start,
            end_date: stay.end,
            reservation_id: None,
            kind: RestrictionKind::OwnerBlock,
        }
    }

    pub fn stay(&self) -> StayPeriod {
        StayPeriod {
            start: self.start_date,
            end: self.end_date,
        }
    }
}
