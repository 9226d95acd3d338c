//! Session cookie middleware
//!
//! Reads the session cookie, or mints a UUID v4 session ID when the visitor
//! has none, and stores it in request extensions as [`SessionId`]. A freshly
//! minted ID is sent back with `Set-Cookie`.

use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};
use uuid::Uuid;

/// Cookie settings shared by every request
#[derive(Debug, Clone)]
pub struct SessionCookieConfig {
    pub cookie_name: String,
    pub lifetime: Duration,
}

impl Default for SessionCookieConfig {
    fn default() -> Self {
        Self {
            cookie_name: "bookings_session".to_string(),
            lifetime: Duration::from_secs(24 * 60 * 60),
        }
    }
}

/// Session ID for the current request, stored in request extensions.
///
/// Handlers read it through the [`Visit`](super::Visit) extractor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionId(pub String);

/// Value of cookie `name` in a `Cookie` header, if present and non-empty
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

pub async fn session_middleware(
    State(config): State<SessionCookieConfig>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let existing = request
        .headers()
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|h| cookie_value(h, &config.cookie_name))
        .map(String::from);

    let (session_id, minted) = match existing {
        Some(id) => (id, false),
        None => (Uuid::new_v4().to_string(), true),
    };
    if minted {
        debug!(session_id = %session_id, "Starting new visitor session");
    }

    request
        .extensions_mut()
        .insert(SessionId(session_id.clone()));

    let mut response = next.run(request).await;

    if minted {
        let cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            config.cookie_name,
            session_id,
            config.lifetime.as_secs()
        );
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => warn!(error = %e, "Could not build session cookie"),
        }
    }

    response
}
