//! Visitor session cookie and per-request working memory

pub mod extractor;
pub mod middleware;

pub use extractor::Visit;
pub use middleware::{session_middleware, SessionCookieConfig, SessionId};
