pub mod repositories;
pub mod reservation;
pub mod restriction;
pub mod room;
pub mod stay;

// Re-export commonly used types
pub use repositories::RepositoryProvider;
pub use reservation::{GuestDetails, Reservation, ReservationRepository};
pub use restriction::{RestrictionKind, RoomRestriction, RoomRestrictionRepository};
pub use room::{Room, RoomRepository};
pub use stay::{format_date, overlaps, parse_date, StayPeriod, DATE_FORMAT};

pub use crate::shared::errors::{Constraint, DomainError, DomainResult, InputField, StoreOp};
