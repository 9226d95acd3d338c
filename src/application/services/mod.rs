//! Application services

mod availability;

pub use availability::AvailabilityService;
