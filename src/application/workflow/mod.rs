//! Reservation workflow: the booking state machine

mod service;
mod state;

pub use service::{validate_guest_form, DetailsOutcome, ReservationWorkflow, SearchOutcome, NO_AVAILABILITY};
pub use state::WorkflowState;
