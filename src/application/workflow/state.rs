//! Reservation workflow states

use std::fmt;

use crate::application::session::WorkingMemory;

/// Where a visitor stands in the booking flow.
///
/// `Browsing` is the entry state and the target of every failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Browsing,
    RoomsListed,
    RoomChosen,
    DetailsInvalid,
    DetailsValid,
    Committed,
    SummaryShown,
}

impl WorkflowState {
    /// Resting state implied by the contents of working memory.
    ///
    /// Transient states (`DetailsInvalid`, `DetailsValid`, `SummaryShown`)
    /// only exist within a single transition and are never inferred.
    pub fn of(memory: &WorkingMemory) -> Self {
        match &memory.reservation {
            None => Self::Browsing,
            Some(r) if r.is_committed() => Self::Committed,
            Some(r) if r.has_room() => Self::RoomChosen,
            Some(_) => Self::RoomsListed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Browsing => "browsing",
            Self::RoomsListed => "rooms_listed",
            Self::RoomChosen => "room_chosen",
            Self::DetailsInvalid => "details_invalid",
            Self::DetailsValid => "details_valid",
            Self::Committed => "committed",
            Self::SummaryShown => "summary_shown",
        }
    }
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
