//! HTTP router: page flow, availability probe, health and metrics

use std::sync::Arc;

use axum::{
    extract::FromRef,
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::{ReservationWorkflow, SharedSessionStore};
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::{
    availability, health, metrics, pages, request_id, reservations, session,
};

/// State shared by the page-flow and probe handlers
#[derive(Clone)]
pub struct AppState {
    pub workflow: ReservationWorkflow,
    pub sessions: SharedSessionStore,
}

impl FromRef<AppState> for SharedSessionStore {
    fn from_ref(s: &AppState) -> Self {
        s.sessions.clone()
    }
}

/// Everything the router needs from the running process
pub struct RouterDeps {
    pub repos: Arc<dyn RepositoryProvider>,
    pub sessions: SharedSessionStore,
    pub session_cookie: session::SessionCookieConfig,
    /// Pinged by `/health`; `None` on the in-memory store
    pub db: Option<DatabaseConnection>,
    /// `/metrics` is only mounted when a recorder is installed
    pub prometheus: Option<PrometheusHandle>,
}

pub fn create_router(deps: RouterDeps) -> Router {
    let state = AppState {
        workflow: ReservationWorkflow::new(deps.repos),
        sessions: deps.sessions,
    };

    // Pages and the booking flow share the session cookie
    let page_routes = Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact))
        .route("/generals-quarters", get(pages::generals_quarters))
        .route("/majors-suite", get(pages::majors_suite))
        .route(
            "/search-availability",
            get(pages::search_availability).post(availability::post_search),
        )
        .route("/choose-room/{id}", get(reservations::choose_room))
        .route("/book-room", get(reservations::book_room))
        .route(
            "/make-reservation",
            get(reservations::make_reservation).post(reservations::post_make_reservation),
        )
        .route("/reservation-summary", get(reservations::reservation_summary))
        .layer(middleware::from_fn_with_state(
            deps.session_cookie,
            session::session_middleware,
        ))
        .with_state(state.clone());

    let probe_routes = Router::new()
        .route(
            "/search-availability-json",
            post(availability::availability_json),
        )
        .with_state(state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState::new(deps.db));

    let mut router = Router::new()
        .merge(page_routes)
        .merge(probe_routes)
        .merge(health_routes);

    if let Some(handle) = deps.prometheus {
        router = router.merge(
            Router::new()
                .route("/metrics", get(metrics::prometheus_metrics))
                .with_state(metrics::MetricsState { handle }),
        );
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .fallback(not_found)
        .route_layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> (StatusCode, Json<ApiResponse<()>>) {
    (StatusCode::NOT_FOUND, Json(ApiResponse::error("Not found")))
}

// ── Tests ──────────────────────────────────────────────────────
