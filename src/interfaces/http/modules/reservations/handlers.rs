//! Reservation handlers
//!
//! Workflow failures have already staged their flash message, so every
//! error arm here is the same 307 back to `/`.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    response::{Redirect, Response},
    Form,
};

use super::dto::BookRoomQuery;
use crate::application::DetailsOutcome;
use crate::interfaces::http::common::{FormView, View};
use crate::interfaces::http::modules::session::Visit;
use crate::interfaces::http::router::AppState;

fn back_home(visit: Visit) -> Response {
    visit.finish(Redirect::temporary("/"))
}

/// `GET /choose-room/{id}`
pub async fn choose_room(
    State(state): State<AppState>,
    mut visit: Visit,
    Path(room_id): Path<String>,
) -> Response {
    match state.workflow.choose_room(&mut visit.memory, &room_id).await {
        Ok(_) => visit.finish(Redirect::to("/make-reservation")),
        Err(_) => back_home(visit),
    }
}

/// `GET /book-room?id&s&e`
pub async fn book_room(
    State(state): State<AppState>,
    mut visit: Visit,
    Query(query): Query<BookRoomQuery>,
) -> Response {
    match state
        .workflow
        .book_room(&mut visit.memory, &query.id, &query.s, &query.e)
        .await
    {
        Ok(_) => visit.finish(Redirect::to("/make-reservation")),
        Err(_) => back_home(visit),
    }
}

/// `GET /make-reservation`
pub async fn make_reservation(State(state): State<AppState>, mut visit: Visit) -> Response {
    match state.workflow.view_form(&mut visit.memory).await {
        Ok(reservation) => {
            let flash = visit.memory.take_error();
            let view = View::new("make-reservation")
                .reservation(&reservation)
                .form(FormView::default())
                .flash(flash);
            visit.finish(view)
        }
        Err(_) => back_home(visit),
    }
}

/// `POST /make-reservation`
///
/// Invalid details redisplay the form (200) with errors and typed values.
/// Valid details are committed and redirect to the summary.
pub async fn post_make_reservation(
    State(state): State<AppState>,
    mut visit: Visit,
    Form(values): Form<HashMap<String, String>>,
) -> Response {
    let outcome = match state.workflow.submit_details(&mut visit.memory, values).await {
        Ok(outcome) => outcome,
        Err(_) => return back_home(visit),
    };

    match outcome {
        DetailsOutcome::Invalid { reservation, form } => {
            let view = View::new("make-reservation")
                .reservation(&reservation)
                .form(&form);
            visit.finish(view)
        }
        DetailsOutcome::Valid(_) => match state.workflow.commit(&mut visit.memory).await {
            Ok(_) => visit.finish(Redirect::to("/reservation-summary")),
            Err(_) => back_home(visit),
        },
    }
}

/// `GET /reservation-summary`
pub async fn reservation_summary(State(state): State<AppState>, mut visit: Visit) -> Response {
    match state.workflow.summary(&mut visit.memory).await {
        Ok(reservation) => {
            let flash = visit.memory.take_error();
            let view = View::new("reservation-summary")
                .reservation(&reservation)
                .flash(flash);
            visit.finish(view)
        }
        Err(_) => back_home(visit),
    }
}
