//! Per-visitor working memory for the reservation workflow
//!
//! Loaded from the session store at the start of a request, handed to the
//! workflow by `&mut`, and saved back before responding.

use tracing::warn;

use super::store::SessionStore;
use crate::domain::Reservation;

pub const RESERVATION_KEY: &str = "reservation";
pub const ERROR_KEY: &str = "error";

/// At most one reservation snapshot and at most one pending error
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkingMemory {
    pub reservation: Option<Reservation>,
    pub error: Option<String>,
}

impl WorkingMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read both keys for a session. An unreadable snapshot reads as absent.
    pub fn load(store: &dyn SessionStore, session_id: &str) -> Self {
        let reservation = store.get(session_id, RESERVATION_KEY).and_then(|value| {
            serde_json::from_value(value)
                .map_err(|e| warn!(session_id, error = %e, "Discarding unreadable reservation snapshot"))
                .ok()
        });
        let error = store
            .get(session_id, ERROR_KEY)
            .and_then(|value| value.as_str().map(String::from));

        Self { reservation, error }
    }

    /// Write both keys back, removing the ones that are empty
    pub fn save(&self, store: &dyn SessionStore, session_id: &str) {
        match &self.reservation {
            Some(reservation) => match serde_json::to_value(reservation) {
                Ok(value) => store.put(session_id, RESERVATION_KEY, value),
                Err(e) => warn!(session_id, error = %e, "Could not snapshot reservation"),
            },
            None => store.remove(session_id, RESERVATION_KEY),
        }
        match &self.error {
            Some(error) => store.put(session_id, ERROR_KEY, error.clone().into()),
            None => store.remove(session_id, ERROR_KEY),
        }
    }

    /// Replace any pending error
    pub fn stage_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Pop the pending error for display
    pub fn take_error(&mut self) -> Option<String> {
        self.error.take()
    }

    pub fn stage_reservation(&mut self, reservation: Reservation) {
        self.reservation = Some(reservation);
    }

    pub fn take_reservation(&mut self) -> Option<Reservation> {
        self.reservation.take()
    }

    pub fn clear(&mut self) {
        self.reservation = None;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session::InMemorySessionStore;
    use crate::domain::{Room, StayPeriod};
    use serde_json::json;
    use std::time::Duration;

    fn draft() -> Reservation {
        let mut r = Reservation::draft(StayPeriod::parse("2050-01-01", "2050-01-02").unwrap());
        r.choose_room(Room::new(1, "General's Quarters"));
        r
    }

    #[test]
    fn save_then_load_restores_memory() {
        let store = InMemorySessionStore::new(Duration::from_secs(60));
        let mut memory = WorkingMemory::new();
        memory.stage_reservation(draft());
        memory.stage_error("No Availability");
        memory.save(&store, "s1");

        let loaded = WorkingMemory::load(&store, "s1");
        assert_eq!(loaded, memory);
        assert_eq!(WorkingMemory::load(&store, "s2"), WorkingMemory::new());
    }

    #[test]
    fn saving_empty_slots_removes_keys() {
        let store = InMemorySessionStore::new(Duration::from_secs(60));
        let mut memory = WorkingMemory::new();
        memory.stage_reservation(draft());
        memory.stage_error("x");
        memory.save(&store, "s1");

        memory.clear();
        memory.save(&store, "s1");
        assert!(store.get("s1", RESERVATION_KEY).is_none());
        assert!(store.get("s1", ERROR_KEY).is_none());
    }

    #[test]
    fn take_error_is_a_flash() {
        let mut memory = WorkingMemory::new();
        memory.stage_error("first");
        memory.stage_error("second");
        assert_eq!(memory.take_error().as_deref(), Some("second"));
        assert_eq!(memory.take_error(), None);
    }

    #[test]
    fn unreadable_snapshot_reads_as_absent() {
        let store = InMemorySessionStore::new(Duration::from_secs(60));
        store.put("s1", RESERVATION_KEY, json!({"garbage": true}));
        assert!(WorkingMemory::load(&store, "s1").reservation.is_none());
    }
}
