//! Reservation workflow
//!
//! Each public method is one transition. Working memory is passed in by
//! `&mut` and left describing the visitor's next state. On failure the
//! method stages a flash message in memory and returns the error; the
//! caller sends the visitor back to the entry page.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use super::state::WorkflowState;
use crate::application::services::AvailabilityService;
use crate::application::session::{WorkingMemory, RESERVATION_KEY};
use crate::domain::{
    DomainError, DomainResult, GuestDetails, InputField, RepositoryProvider, Reservation, Room,
    RoomRestriction, StayPeriod,
};
use crate::shared::validations::Form;

pub const NO_AVAILABILITY: &str = "No Availability";

/// Result of a date search
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Free rooms; a draft for the stay is staged
    RoomsListed(Vec<Room>),
    /// Nothing free; "No Availability" is staged
    NoAvailability,
}

/// Result of submitting guest details
#[derive(Debug, Clone)]
pub enum DetailsOutcome {
    /// Redisplay the form with these errors and the typed values
    Invalid { reservation: Reservation, form: Form },
    /// Ready to commit
    Valid(Reservation),
}

/// Run the guest-detail rules over submitted values
pub fn validate_guest_form(values: HashMap<String, String>) -> Form {
    let mut form = Form::new(values);
    form.required(&GuestDetails::FIELDS)
        .min_length("first_name", 3)
        .is_email("email");
    form
}

fn guest_values(guest: &GuestDetails) -> HashMap<String, String> {
    [
        ("first_name", &guest.first_name),
        ("last_name", &guest.last_name),
        ("email", &guest.email),
        ("phone", &guest.phone),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.clone()))
    .collect()
}

fn parse_room_id(value: &str) -> DomainResult<i32> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| DomainError::parse(InputField::RoomId, value))
}

/// Booking flow over a repository provider
#[derive(Clone)]
pub struct ReservationWorkflow {
    repos: Arc<dyn RepositoryProvider>,
    availability: AvailabilityService,
}

impl ReservationWorkflow {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            availability: AvailabilityService::new(repos.clone()),
            repos,
        }
    }

    pub fn availability(&self) -> &AvailabilityService {
        &self.availability
    }

    /// Browsing → RoomsListed
    pub async fn search(
        &self,
        memory: &mut WorkingMemory,
        start: &str,
        end: &str,
    ) -> DomainResult<SearchOutcome> {
        let result: DomainResult<_> = async {
            let stay = StayPeriod::parse(start, end)?;
            let rooms = self
                .availability
                .search_available_rooms(stay.start, stay.end)
                .await?;
            Ok((stay, rooms))
        }
        .await;

        let (stay, rooms) = match result {
            Ok(found) => found,
            Err(e) => {
                metrics::counter!("bookings_searches_total", "outcome" => "error").increment(1);
                return Err(self.fail(memory, "search", e));
            }
        };

        if rooms.is_empty() {
            metrics::counter!("bookings_searches_total", "outcome" => "none").increment(1);
            info!(start, end, "No rooms available");
            memory.clear();
            memory.stage_error(NO_AVAILABILITY);
            return Ok(SearchOutcome::NoAvailability);
        }

        metrics::counter!("bookings_searches_total", "outcome" => "rooms").increment(1);
        memory.stage_reservation(Reservation::draft(stay));
        Ok(SearchOutcome::RoomsListed(rooms))
    }

    /// RoomsListed → RoomChosen
    pub async fn choose_room(
        &self,
        memory: &mut WorkingMemory,
        room_id: &str,
    ) -> DomainResult<Reservation> {
        let result: DomainResult<_> = async {
            let room_id = parse_room_id(room_id)?;
            let mut draft = memory
                .reservation
                .clone()
                .ok_or(DomainError::MissingWorkflowState(RESERVATION_KEY))?;
            let room = self.find_room(room_id).await?;
            draft.choose_room(room);
            Ok(draft)
        }
        .await;

        match result {
            Ok(draft) => {
                debug!(room_id = draft.room_id, "Room chosen");
                memory.stage_reservation(draft.clone());
                Ok(draft)
            }
            Err(e) => Err(self.fail(memory, "choose_room", e)),
        }
    }

    /// Browsing → RoomChosen in one step, skipping the search
    pub async fn book_room(
        &self,
        memory: &mut WorkingMemory,
        room_id: &str,
        start: &str,
        end: &str,
    ) -> DomainResult<Reservation> {
        let result: DomainResult<_> = async {
            let room_id = parse_room_id(room_id)?;
            let stay = StayPeriod::parse(start, end)?;
            let room = self.find_room(room_id).await?;
            let mut draft = Reservation::draft(stay);
            draft.choose_room(room);
            Ok(draft)
        }
        .await;

        match result {
            Ok(draft) => {
                debug!(room_id = draft.room_id, start, end, "Room booked directly");
                memory.stage_reservation(draft.clone());
                Ok(draft)
            }
            Err(e) => Err(self.fail(memory, "book_room", e)),
        }
    }

    /// RoomChosen → RoomChosen, refreshing the room from the store
    pub async fn view_form(&self, memory: &mut WorkingMemory) -> DomainResult<Reservation> {
        let result: DomainResult<_> = async {
            let mut draft = memory
                .reservation
                .clone()
                .ok_or(DomainError::MissingWorkflowState(RESERVATION_KEY))?;
            let room = self.find_room(draft.room_id).await?;
            draft.choose_room(room);
            Ok(draft)
        }
        .await;

        match result {
            Ok(draft) => {
                memory.stage_reservation(draft.clone());
                Ok(draft)
            }
            Err(e) => Err(self.fail(memory, "view_form", e)),
        }
    }

    /// RoomChosen → DetailsEntered.
    ///
    /// Typed values are merged onto the draft whether or not they pass.
    pub async fn submit_details(
        &self,
        memory: &mut WorkingMemory,
        values: HashMap<String, String>,
    ) -> DomainResult<DetailsOutcome> {
        let Some(mut draft) = memory.reservation.clone() else {
            let e = DomainError::MissingWorkflowState(RESERVATION_KEY);
            return Err(self.fail(memory, "submit_details", e));
        };

        let form = validate_guest_form(values);
        draft.apply_guest(GuestDetails::from_form(&form));
        memory.stage_reservation(draft.clone());

        if !form.valid() {
            debug!(
                state = %WorkflowState::DetailsInvalid,
                errors = form.errors().count(),
                "Guest details rejected"
            );
            return Ok(DetailsOutcome::Invalid {
                reservation: draft,
                form,
            });
        }

        debug!(state = %WorkflowState::DetailsValid, "Guest details accepted");
        Ok(DetailsOutcome::Valid(draft))
    }

    /// DetailsEntered(Valid) → Committed.
    ///
    /// Inserts the reservation, then its blocking restriction. The two
    /// inserts are separate calls: if the second fails the reservation
    /// stays in the store without a restriction and the failure is logged.
    pub async fn commit(&self, memory: &mut WorkingMemory) -> DomainResult<Reservation> {
        let Some(mut reservation) = memory.take_reservation() else {
            let e = DomainError::MissingWorkflowState(RESERVATION_KEY);
            return Err(self.fail(memory, "commit", e));
        };

        let form = validate_guest_form(guest_values(&reservation.guest()));
        if !form.valid() {
            let e = DomainError::ValidationFailed(form.into_errors());
            return Err(self.fail_commit(memory, "validation", e));
        }

        let stay = reservation.stay();
        match self
            .availability
            .is_room_available(reservation.room_id, stay.start, stay.end)
            .await
        {
            Ok(true) => {}
            Ok(false) => {
                let e = DomainError::room_taken(reservation.room_id);
                return Err(self.fail_commit(memory, "availability", e));
            }
            Err(e) => return Err(self.fail_commit(memory, "availability", e)),
        }

        let id = match self.repos.reservations().insert(&reservation).await {
            Ok(id) => id,
            Err(e) => return Err(self.fail_commit(memory, "reservation", e)),
        };
        reservation.mark_committed(id, Utc::now());

        let restriction = RoomRestriction::for_reservation(&reservation);
        if let Err(e) = self.repos.restrictions().insert(&restriction).await {
            error!(
                reservation_id = id,
                room_id = reservation.room_id,
                error = %e,
                "Reservation stored without its room restriction"
            );
            return Err(self.fail_commit(memory, "restriction", e));
        }

        metrics::counter!("bookings_reservations_committed_total").increment(1);
        info!(
            reservation_id = id,
            room_id = reservation.room_id,
            start = %stay.start,
            end = %stay.end,
            "Reservation committed"
        );
        memory.stage_reservation(reservation.clone());
        Ok(reservation)
    }

    /// Committed → SummaryShown. Clears the reservation from memory.
    pub async fn summary(&self, memory: &mut WorkingMemory) -> DomainResult<Reservation> {
        match memory.take_reservation() {
            Some(reservation) if reservation.is_committed() => {
                debug!(
                    reservation_id = reservation.id,
                    state = %WorkflowState::SummaryShown,
                    "Showing reservation summary"
                );
                Ok(reservation)
            }
            Some(draft) => {
                warn!(room_id = draft.room_id, "Summary requested before commit");
                let e = DomainError::MissingWorkflowState(RESERVATION_KEY);
                Err(self.fail(memory, "summary", e))
            }
            None => {
                warn!("Cannot get reservation from session");
                let e = DomainError::MissingWorkflowState(RESERVATION_KEY);
                Err(self.fail(memory, "summary", e))
            }
        }
    }

    async fn find_room(&self, room_id: i32) -> DomainResult<Room> {
        self.repos
            .rooms()
            .find_by_id(room_id)
            .await?
            .ok_or(DomainError::RoomNotFound(room_id))
    }

    /// Back to `Browsing`: the draft is dropped and the error staged
    fn fail(&self, memory: &mut WorkingMemory, step: &'static str, e: DomainError) -> DomainError {
        warn!(step, error = %e, "Workflow transition failed");
        memory.clear();
        memory.stage_error(e.flash_message());
        e
    }

    fn fail_commit(
        &self,
        memory: &mut WorkingMemory,
        stage: &'static str,
        e: DomainError,
    ) -> DomainError {
        metrics::counter!("bookings_commit_failures_total", "stage" => stage).increment(1);
        self.fail(memory, "commit", e)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StoreOp, StayPeriod};
    use crate::infrastructure::storage::fixtures::{
        healthy_store, seeded_store, GENERALS_QUARTERS, MAJORS_SUITE, MAJORS_SUITE_NAME,
        RESERVATION_INSERT_FAILS, RESTRICTION_INSERT_FAILS, UNKNOWN_ROOM,
    };
    use crate::infrastructure::storage::InMemoryRepositoryProvider;
    use crate::shared::validations::BLANK_FIELD;

    fn workflow(store: InMemoryRepositoryProvider) -> (ReservationWorkflow, Arc<InMemoryRepositoryProvider>) {
        let store = Arc::new(store);
        (ReservationWorkflow::new(store.clone()), store)
    }

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn valid_guest() -> HashMap<String, String> {
        values(&[
            ("first_name", "John"),
            ("last_name", "Smith"),
            ("email", "john@smith.com"),
            ("phone", "555-555-5555"),
        ])
    }

    fn draft_for(room_id: i32) -> Reservation {
        let mut r = Reservation::draft(StayPeriod::parse("2050-01-01", "2050-01-02").unwrap());
        r.room_id = room_id;
        r.apply_guest(GuestDetails::from_form(&Form::new(valid_guest())));
        r
    }

    #[tokio::test]
    async fn search_with_free_rooms_stages_draft() {
        let (wf, _) = workflow(healthy_store());
        let mut memory = WorkingMemory::new();

        let outcome = wf.search(&mut memory, "2050-01-01", "2050-01-02").await.unwrap();
        match outcome {
            SearchOutcome::RoomsListed(rooms) => assert!(!rooms.is_empty()),
            other => panic!("expected rooms, got {other:?}"),
        }
        assert_eq!(WorkflowState::of(&memory), WorkflowState::RoomsListed);
        assert!(memory.error.is_none());
    }

    #[tokio::test]
    async fn search_with_nothing_free_stages_no_availability() {
        let (wf, store) = workflow(healthy_store());
        let stay = StayPeriod::parse("2050-01-01", "2050-01-10").unwrap();
        store.block(GENERALS_QUARTERS, stay);
        store.block(MAJORS_SUITE, stay);
        let mut memory = WorkingMemory::new();

        let outcome = wf.search(&mut memory, "2050-01-02", "2050-01-03").await.unwrap();
        assert_eq!(outcome, SearchOutcome::NoAvailability);
        assert_eq!(memory.take_error().as_deref(), Some(NO_AVAILABILITY));
        assert!(memory.reservation.is_none());
    }

    #[tokio::test]
    async fn search_with_bad_date_stages_parse_error() {
        let (wf, _) = workflow(healthy_store());
        let mut memory = WorkingMemory::new();

        let err = wf.search(&mut memory, "invalid", "2050-01-02").await.unwrap_err();
        assert!(matches!(err, DomainError::Parse { field: InputField::StartDate, .. }));
        assert_eq!(memory.take_error().as_deref(), Some("Can't parse start date!"));
        assert_eq!(WorkflowState::of(&memory), WorkflowState::Browsing);
    }

    #[tokio::test]
    async fn choose_room_requires_a_staged_draft() {
        let (wf, _) = workflow(seeded_store());
        let mut memory = WorkingMemory::new();

        let err = wf.choose_room(&mut memory, "1").await.unwrap_err();
        assert!(matches!(err, DomainError::MissingWorkflowState(_)));
        assert!(memory.error.is_some());
    }

    #[tokio::test]
    async fn choose_room_stages_room_on_draft() {
        let (wf, _) = workflow(seeded_store());
        let mut memory = WorkingMemory::new();
        wf.search(&mut memory, "2050-01-01", "2050-01-02").await.unwrap();

        let draft = wf.choose_room(&mut memory, "1").await.unwrap();
        assert_eq!(draft.room_id, GENERALS_QUARTERS);
        assert_eq!(memory.reservation.as_ref(), Some(&draft));
        assert_eq!(WorkflowState::of(&memory), WorkflowState::RoomChosen);
    }

    #[tokio::test]
    async fn choose_room_rejects_unknown_and_malformed_ids() {
        let (wf, _) = workflow(seeded_store());
        let mut memory = WorkingMemory::new();
        wf.search(&mut memory, "2050-01-01", "2050-01-02").await.unwrap();

        let err = wf
            .choose_room(&mut memory, &UNKNOWN_ROOM.to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::RoomNotFound(UNKNOWN_ROOM)));
        assert_eq!(memory.take_error().as_deref(), Some("Can't find room!"));

        let err = wf.choose_room(&mut memory, "fish").await.unwrap_err();
        assert!(matches!(err, DomainError::Parse { field: InputField::RoomId, .. }));
    }

    #[tokio::test]
    async fn book_room_stages_matching_draft() {
        let (wf, _) = workflow(seeded_store());
        let mut memory = WorkingMemory::new();

        let draft = wf
            .book_room(&mut memory, "2", "2050-01-01", "2050-01-02")
            .await
            .unwrap();
        assert_eq!(draft.room_id, MAJORS_SUITE);
        assert_eq!(draft.room_name(), MAJORS_SUITE_NAME);
        assert_eq!(draft.stay(), StayPeriod::parse("2050-01-01", "2050-01-02").unwrap());
        assert_eq!(memory.reservation, Some(draft));
        assert_eq!(WorkflowState::of(&memory), WorkflowState::RoomChosen);
    }

    #[tokio::test]
    async fn book_room_failures_stage_errors() {
        let (wf, _) = workflow(seeded_store());
        let mut memory = WorkingMemory::new();

        assert!(wf
            .book_room(&mut memory, "2", "2050-01-01", "nope")
            .await
            .is_err());
        assert_eq!(memory.take_error().as_deref(), Some("Can't parse end date!"));

        assert!(wf
            .book_room(&mut memory, "4", "2050-01-01", "2050-01-02")
            .await
            .is_err());
        assert_eq!(memory.take_error().as_deref(), Some("Can't find room!"));
        assert!(memory.reservation.is_none());
    }

    #[tokio::test]
    async fn view_form_refreshes_room() {
        let (wf, _) = workflow(seeded_store());
        let mut memory = WorkingMemory::new();
        let mut draft = draft_for(GENERALS_QUARTERS);
        draft.room = None;
        memory.stage_reservation(draft);

        let refreshed = wf.view_form(&mut memory).await.unwrap();
        assert_eq!(refreshed.room_name(), "General's Quarters");
        assert_eq!(memory.reservation, Some(refreshed));
    }

    #[tokio::test]
    async fn view_form_without_room_fails() {
        let (wf, _) = workflow(seeded_store());
        let mut memory = WorkingMemory::new();
        assert!(matches!(
            wf.view_form(&mut memory).await,
            Err(DomainError::MissingWorkflowState(_))
        ));

        memory.stage_reservation(draft_for(UNKNOWN_ROOM));
        assert!(matches!(
            wf.view_form(&mut memory).await,
            Err(DomainError::RoomNotFound(UNKNOWN_ROOM))
        ));
    }

    #[tokio::test]
    async fn short_first_name_is_invalid_and_kept() {
        let (wf, _) = workflow(seeded_store());
        let mut memory = WorkingMemory::new();
        wf.book_room(&mut memory, "1", "2050-01-01", "2050-01-02")
            .await
            .unwrap();

        let mut submitted = valid_guest();
        submitted.insert("first_name".into(), "J".into());
        let outcome = wf.submit_details(&mut memory, submitted).await.unwrap();

        match outcome {
            DetailsOutcome::Invalid { reservation, form } => {
                assert!(!form.valid());
                assert_eq!(
                    form.errors().get("first_name"),
                    "This field must be at least 3 characters long"
                );
                assert_eq!(reservation.first_name, "J");
            }
            DetailsOutcome::Valid(_) => panic!("expected invalid details"),
        }
        assert_eq!(memory.reservation.as_ref().map(|r| r.first_name.as_str()), Some("J"));
        assert_eq!(WorkflowState::of(&memory), WorkflowState::RoomChosen);
    }

    #[tokio::test]
    async fn resubmitting_invalid_details_yields_same_errors() {
        let (wf, _) = workflow(seeded_store());
        let mut memory = WorkingMemory::new();
        wf.book_room(&mut memory, "1", "2050-01-01", "2050-01-02")
            .await
            .unwrap();
        let payload = values(&[("first_name", "J"), ("email", "not-an-email")]);

        let first = wf.submit_details(&mut memory, payload.clone()).await.unwrap();
        let second = wf.submit_details(&mut memory, payload).await.unwrap();
        match (first, second) {
            (
                DetailsOutcome::Invalid { form: a, .. },
                DetailsOutcome::Invalid { form: b, .. },
            ) => {
                assert_eq!(a.errors(), b.errors());
                assert_eq!(a.errors().get("last_name"), BLANK_FIELD);
            }
            _ => panic!("expected invalid details twice"),
        }
    }

    #[tokio::test]
    async fn full_flow_commits_and_shows_summary() {
        let (wf, store) = workflow(seeded_store());
        let mut memory = WorkingMemory::new();

        wf.search(&mut memory, "2050-01-01", "2050-01-02").await.unwrap();
        wf.choose_room(&mut memory, "1").await.unwrap();
        wf.view_form(&mut memory).await.unwrap();
        let outcome = wf.submit_details(&mut memory, valid_guest()).await.unwrap();
        assert!(matches!(outcome, DetailsOutcome::Valid(_)));

        let committed = wf.commit(&mut memory).await.unwrap();
        assert!(committed.is_committed());
        assert_eq!(WorkflowState::of(&memory), WorkflowState::Committed);
        assert_eq!(store.reservation_count(), 1);
        assert_eq!(store.restriction_count(), 1);

        let shown = wf.summary(&mut memory).await.unwrap();
        assert_eq!(shown, committed);
        assert_eq!(WorkflowState::of(&memory), WorkflowState::Browsing);

        let available = wf
            .availability()
            .is_room_available(GENERALS_QUARTERS, shown.start_date, shown.end_date)
            .await
            .unwrap();
        assert!(!available);
    }

    #[tokio::test]
    async fn reservation_insert_failure_abandons_draft() {
        let (wf, store) = workflow(seeded_store());
        let mut memory = WorkingMemory::new();
        memory.stage_reservation(draft_for(RESERVATION_INSERT_FAILS));

        let err = wf.commit(&mut memory).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::StoreUnavailable { op: StoreOp::InsertReservation, .. }
        ));
        assert_eq!(
            memory.take_error().as_deref(),
            Some("Can't insert reservation into database!")
        );
        assert!(memory.reservation.is_none());
        assert_eq!(store.reservation_count(), 0);
    }

    #[tokio::test]
    async fn restriction_insert_failure_leaves_orphan_reservation() {
        let (wf, store) = workflow(seeded_store());
        let mut memory = WorkingMemory::new();
        memory.stage_reservation(draft_for(RESTRICTION_INSERT_FAILS));

        let err = wf.commit(&mut memory).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::StoreUnavailable { op: StoreOp::InsertRestriction, .. }
        ));
        assert_eq!(WorkflowState::of(&memory), WorkflowState::Browsing);
        assert_eq!(
            memory.take_error().as_deref(),
            Some("Can't insert room restriction!")
        );
        assert_eq!(store.reservation_count(), 1);
        assert_eq!(store.restriction_count(), 0);
    }

    #[tokio::test]
    async fn commit_refuses_taken_dates() {
        let (wf, store) = workflow(seeded_store());
        store.block(
            GENERALS_QUARTERS,
            StayPeriod::parse("2050-01-01", "2050-01-05").unwrap(),
        );
        let mut memory = WorkingMemory::new();
        memory.stage_reservation(draft_for(GENERALS_QUARTERS));

        let err = wf.commit(&mut memory).await.unwrap_err();
        assert!(matches!(err, DomainError::ConstraintViolation(_)));
        assert_eq!(store.reservation_count(), 0);
        assert!(memory.error.is_some());
    }

    #[tokio::test]
    async fn commit_rejects_incomplete_guest_details() {
        let (wf, store) = workflow(seeded_store());
        let mut memory = WorkingMemory::new();
        let mut draft = draft_for(GENERALS_QUARTERS);
        draft.email.clear();
        memory.stage_reservation(draft);

        let err = wf.commit(&mut memory).await.unwrap_err();
        match err {
            DomainError::ValidationFailed(errors) => assert_eq!(errors.get("email"), BLANK_FIELD),
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert_eq!(store.reservation_count(), 0);
    }

    #[tokio::test]
    async fn summary_without_reservation_stages_error() {
        let (wf, _) = workflow(seeded_store());
        let mut memory = WorkingMemory::new();

        let err = wf.summary(&mut memory).await.unwrap_err();
        assert!(matches!(err, DomainError::MissingWorkflowState(_)));
        assert_eq!(
            memory.take_error().as_deref(),
            Some("Can't get reservation from session")
        );
    }

    #[tokio::test]
    async fn summary_before_commit_returns_to_browsing() {
        let (wf, _) = workflow(seeded_store());
        let mut memory = WorkingMemory::new();
        memory.stage_reservation(draft_for(GENERALS_QUARTERS));

        assert!(wf.summary(&mut memory).await.is_err());
        assert!(memory.reservation.is_none());
        assert!(memory.error.is_some());
    }

    #[tokio::test]
    async fn failed_transitions_drop_the_earlier_draft() {
        let (wf, store) = workflow(seeded_store());
        let june = StayPeriod::parse("2050-06-01", "2050-06-10").unwrap();
        store.block(GENERALS_QUARTERS, june);
        store.block(MAJORS_SUITE, june);

        let mut memory = WorkingMemory::new();
        wf.book_room(&mut memory, "1", "2050-01-01", "2050-01-02")
            .await
            .unwrap();
        let outcome = wf.search(&mut memory, "2050-06-02", "2050-06-03").await.unwrap();
        assert_eq!(outcome, SearchOutcome::NoAvailability);
        assert_eq!(WorkflowState::of(&memory), WorkflowState::Browsing);
        assert_eq!(memory.take_error().as_deref(), Some(NO_AVAILABILITY));
        assert!(wf.view_form(&mut memory).await.is_err());

        wf.book_room(&mut memory, "1", "2050-01-01", "2050-01-02")
            .await
            .unwrap();
        assert!(wf.search(&mut memory, "invalid", "2050-01-02").await.is_err());
        assert_eq!(WorkflowState::of(&memory), WorkflowState::Browsing);

        wf.search(&mut memory, "2050-01-01", "2050-01-02").await.unwrap();
        assert!(wf
            .choose_room(&mut memory, &UNKNOWN_ROOM.to_string())
            .await
            .is_err());
        assert_eq!(WorkflowState::of(&memory), WorkflowState::Browsing);
        assert_eq!(memory.take_error().as_deref(), Some("Can't find room!"));
    }
}
