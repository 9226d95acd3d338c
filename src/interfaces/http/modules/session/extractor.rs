//! `Visit` extractor: the visitor's session ID and working memory

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::middleware::SessionId;
use crate::application::session::{SharedSessionStore, WorkingMemory};
use crate::interfaces::http::common::ApiResponse;

/// Working memory loaded for this request.
///
/// Handlers mutate `memory` through the workflow, then call
/// [`Visit::finish`] to persist it alongside the response.
pub struct Visit {
    pub session_id: String,
    pub memory: WorkingMemory,
    store: SharedSessionStore,
}

impl Visit {
    /// Save working memory and pass the response through
    pub fn finish(self, response: impl IntoResponse) -> Response {
        self.memory.save(self.store.as_ref(), &self.session_id);
        response.into_response()
    }
}

impl<S> FromRequestParts<S> for Visit
where
    S: Send + Sync,
    SharedSessionStore: FromRef<S>,
{
    type Rejection = (StatusCode, Json<ApiResponse<()>>);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(SessionId(session_id)) = parts.extensions.get::<SessionId>().cloned() else {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Session middleware is not installed")),
            ));
        };

        let store = SharedSessionStore::from_ref(state);
        let memory = WorkingMemory::load(store.as_ref(), &session_id);
        Ok(Self {
            session_id,
            memory,
            store,
        })
    }
}
