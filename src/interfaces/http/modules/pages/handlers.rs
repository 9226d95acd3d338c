//! Static page handlers
//!
//! Each page pops any staged flash error so it is shown exactly once.

use axum::response::Response;

use crate::interfaces::http::common::View;
use crate::interfaces::http::modules::session::Visit;

fn page(mut visit: Visit, view: &'static str) -> Response {
    let flash = visit.memory.take_error();
    visit.finish(View::new(view).flash(flash))
}

/// `GET /`
pub async fn home(visit: Visit) -> Response {
    page(visit, "home")
}

/// `GET /about`
pub async fn about(visit: Visit) -> Response {
    page(visit, "about")
}

/// `GET /contact`
pub async fn contact(visit: Visit) -> Response {
    page(visit, "contact")
}

/// `GET /generals-quarters`
pub async fn generals_quarters(visit: Visit) -> Response {
    page(visit, "generals")
}

/// `GET /majors-suite`
pub async fn majors_suite(visit: Visit) -> Response {
    page(visit, "majors")
}

/// `GET /search-availability`
pub async fn search_availability(visit: Visit) -> Response {
    page(visit, "search-availability")
}
