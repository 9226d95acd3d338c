//! Reservation domain entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::room::Room;
use crate::domain::stay::StayPeriod;
use crate::shared::validations::Form;

/// Guest contact fields captured on the reservation form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl GuestDetails {
    pub const FIELDS: [&'static str; 4] = ["first_name", "last_name", "email", "phone"];

    /// Copy the guest fields out of a submitted form, valid or not
    pub fn from_form(form: &Form) -> Self {
        Self {
            first_name: form.get("first_name").to_string(),
            last_name: form.get("last_name").to_string(),
            email: form.get("email").to_string(),
            phone: form.get("phone").to_string(),
        }
    }
}

/// A reservation, either a draft held in working memory or a committed record.
///
/// `id == 0` until the store assigns one; `room_id == 0` until a room is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i32,
    pub room_id: i32,
    /// Denormalized copy of the chosen room for display
    pub room: Option<Room>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Reservation {
    /// Start a draft for a searched stay, no room chosen yet
    pub fn draft(stay: StayPeriod) -> Self {
        Self {
            id: 0,
            room_id: 0,
            room: None,
            start_date: stay.start,
            end_date: stay.end,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn stay(&self) -> StayPeriod {
        StayPeriod {
            start: self.start_date,
            end: self.end_date,
        }
    }

    pub fn choose_room(&mut self, room: Room) {
        self.room_id = room.id;
        self.room = Some(room);
    }

    pub fn has_room(&self) -> bool {
        self.room_id > 0
    }

    pub fn guest(&self) -> GuestDetails {
        GuestDetails {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }

    pub fn apply_guest(&mut self, guest: GuestDetails) {
        self.first_name = guest.first_name;
        self.last_name = guest.last_name;
        self.email = guest.email;
        self.phone = guest.phone;
    }

    /// Record the store-assigned ID
    pub fn mark_committed(&mut self, id: i32, at: DateTime<Utc>) {
        self.id = id;
        self.created_at = Some(at);
        self.updated_at = Some(at);
    }

    pub fn is_committed(&self) -> bool {
        self.id > 0
    }

    pub fn room_name(&self) -> &str {
        self.room.as_ref().map(|r| r.name.as_str()).unwrap_or("")
    }
}

// ── Tests ──────────────────────────────────────────────────────
