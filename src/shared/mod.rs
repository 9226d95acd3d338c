pub mod errors;
pub mod shutdown;
pub mod validations;

pub use errors::{Constraint, DomainError, DomainResult, InputField, StoreOp};
pub use shutdown::{ShutdownCoordinator, ShutdownSignal};
pub use validations::{Form, FormErrors};
