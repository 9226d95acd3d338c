//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.
//! Every call is bounded by the configured query timeout; a timeout or
//! `DbErr` surfaces as `StoreUnavailable` tagged with the operation.

pub mod repository_provider;
pub mod reservation_repository;
pub mod room_repository;
pub mod room_restriction_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use std::future::Future;
use std::time::Duration;

use crate::domain::{DomainError, DomainResult, StoreOp};

fn db_err(op: StoreOp) -> impl Fn(sea_orm::DbErr) -> DomainError {
    move |e| DomainError::store(op, e)
}

/// Run a store call under `limit`
async fn bounded<T, F>(op: StoreOp, limit: Duration, call: F) -> DomainResult<T>
where
    F: Future<Output = DomainResult<T>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(DomainError::store(
            op,
            format!("timed out after {}ms", limit.as_millis()),
        )),
    }
}

// ── Tests ──────────────────────────────────────────────────────
