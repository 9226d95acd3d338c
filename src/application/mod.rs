pub mod services;
pub mod session;
pub mod workflow;

// Re-export key types for convenience
pub use services::AvailabilityService;
pub use session::{
    start_session_sweeper, InMemorySessionStore, SessionStore, SharedSessionStore, WorkingMemory,
};
pub use workflow::{DetailsOutcome, ReservationWorkflow, SearchOutcome, WorkflowState};
