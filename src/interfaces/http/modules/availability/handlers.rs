//! Availability handlers

use axum::{
    extract::{rejection::FormRejection, State},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use tracing::{debug, warn};

use super::dto::{
    ProbeForm, ProbeResponse, SearchForm, PROBE_BAD_END, PROBE_BAD_ROOM, PROBE_BAD_START,
    PROBE_EMPTY_STAY, PROBE_MALFORMED, PROBE_STORE_DOWN,
};
use crate::application::SearchOutcome;
use crate::domain::{parse_date, Constraint, DomainError, InputField};
use crate::interfaces::http::common::View;
use crate::interfaces::http::modules::session::Visit;
use crate::interfaces::http::router::AppState;

/// `POST /search-availability`
///
/// Rooms found: choose-room page. None free: 303 back to the search page.
/// Anything else: 307 to `/` with the error staged.
pub async fn post_search(
    State(state): State<AppState>,
    mut visit: Visit,
    Form(input): Form<SearchForm>,
) -> Response {
    let start = input.start.unwrap_or_default();
    let end = input.end.unwrap_or_default();

    match state.workflow.search(&mut visit.memory, &start, &end).await {
        Ok(SearchOutcome::RoomsListed(rooms)) => {
            visit.finish(View::new("choose-room").data("rooms", &rooms))
        }
        Ok(SearchOutcome::NoAvailability) => visit.finish(Redirect::to("/search-availability")),
        Err(_) => visit.finish(Redirect::temporary("/")),
    }
}

/// `POST /search-availability-json`
///
/// Never redirects; every failure is reported in `message` with `ok = false`.
pub async fn availability_json(
    State(state): State<AppState>,
    input: Result<Form<ProbeForm>, FormRejection>,
) -> Response {
    let input = match input {
        Ok(Form(input)) => input,
        Err(rejection) => {
            debug!(error = %rejection, "Unreadable availability probe");
            let reply = ProbeResponse::echo(&ProbeForm::default()).failed(PROBE_MALFORMED);
            return Json(reply).into_response();
        }
    };
    Json(probe(&state, &input).await).into_response()
}

async fn probe(state: &AppState, input: &ProbeForm) -> ProbeResponse {
    let reply = ProbeResponse::echo(input);

    let (Some(start), Some(end), Some(room_id)) = (&input.start, &input.end, &input.room_id) else {
        return reply.failed(PROBE_MALFORMED);
    };
    let Ok(start) = parse_date(start, InputField::StartDate) else {
        return reply.failed(PROBE_BAD_START);
    };
    let Ok(end) = parse_date(end, InputField::EndDate) else {
        return reply.failed(PROBE_BAD_END);
    };
    let Ok(room_id) = room_id.trim().parse::<i32>() else {
        return reply.failed(PROBE_BAD_ROOM);
    };

    match state
        .workflow
        .availability()
        .is_room_available(room_id, start, end)
        .await
    {
        Ok(available) => reply.answered(available),
        Err(DomainError::StoreUnavailable { op, reason }) => {
            warn!(room_id, %op, reason, "Availability probe could not reach the store");
            reply.failed(PROBE_STORE_DOWN)
        }
        Err(DomainError::ConstraintViolation(Constraint::EmptyStay { .. })) => {
            reply.failed(PROBE_EMPTY_STAY)
        }
        Err(e) => {
            debug!(room_id, error = %e, "Availability probe rejected");
            reply.answered(false)
        }
    }
}
