use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use crate::shared::validations::FormErrors;

/// Gateway operation that failed or timed out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    GetRoom,
    InsertReservation,
    InsertRestriction,
    CountOverlapping,
    ListAvailable,
}

impl fmt::Display for StoreOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::GetRoom => "get room",
            Self::InsertReservation => "insert reservation",
            Self::InsertRestriction => "insert room restriction",
            Self::CountOverlapping => "count overlapping restrictions",
            Self::ListAvailable => "list available rooms",
        };
        f.write_str(name)
    }
}

/// Visitor input that failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    StartDate,
    EndDate,
    RoomId,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::StartDate => "start date",
            Self::EndDate => "end date",
            Self::RoomId => "room id",
        };
        f.write_str(name)
    }
}

/// Business rule a request broke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Stay ends on or before the day it starts
    EmptyStay { start: NaiveDate, end: NaiveDate },
    /// Room already restricted for an overlapping stay
    RoomTaken { room_id: i32 },
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStay { start, end } => {
                write!(f, "stay must end after it starts ({start} .. {end})")
            }
            Self::RoomTaken { room_id } => {
                write!(f, "room {room_id} already restricted for an overlapping stay")
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Parse error: invalid {field} {value:?}")]
    Parse { field: InputField, value: String },

    #[error("Missing workflow state: {0}")]
    MissingWorkflowState(&'static str),

    #[error("Room not found: {0}")]
    RoomNotFound(i32),

    #[error("Store unavailable ({op}): {reason}")]
    StoreUnavailable { op: StoreOp, reason: String },

    #[error("Validation failed with {} error(s)", .0.count())]
    ValidationFailed(FormErrors),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(Constraint),
}

impl DomainError {
    pub fn empty_stay(start: NaiveDate, end: NaiveDate) -> Self {
        Self::ConstraintViolation(Constraint::EmptyStay { start, end })
    }

    pub fn room_taken(room_id: i32) -> Self {
        Self::ConstraintViolation(Constraint::RoomTaken { room_id })
    }

    pub fn parse(field: InputField, value: impl Into<String>) -> Self {
        Self::Parse {
            field,
            value: value.into(),
        }
    }

    pub fn store(op: StoreOp, reason: impl fmt::Display) -> Self {
        Self::StoreUnavailable {
            op,
            reason: reason.to_string(),
        }
    }

    /// Short text staged in working memory and shown to the visitor
    /// after the page flow falls back to the entry state.
    pub fn flash_message(&self) -> String {
        match self {
            Self::Parse { field, .. } => format!("Can't parse {}!", field),
            Self::MissingWorkflowState(_) => "Can't get reservation from session".to_string(),
            Self::RoomNotFound(_) => "Can't find room!".to_string(),
            Self::StoreUnavailable { op, .. } => match op {
                StoreOp::InsertReservation => "Can't insert reservation into database!".to_string(),
                StoreOp::InsertRestriction => "Can't insert room restriction!".to_string(),
                StoreOp::GetRoom => "Can't find room!".to_string(),
                StoreOp::CountOverlapping | StoreOp::ListAvailable => {
                    "Can't get availability for rooms".to_string()
                }
            },
            Self::ValidationFailed(_) => "Please correct the highlighted fields".to_string(),
            Self::ConstraintViolation(Constraint::EmptyStay { .. }) => {
                "End date must be after start date".to_string()
            }
            Self::ConstraintViolation(Constraint::RoomTaken { .. }) => {
                "Those dates are not available for this room".to_string()
            }
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
