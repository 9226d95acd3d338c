//! JSON page views
//!
//! Pages render as a JSON document naming the page template and carrying
//! the data it would be filled with:
//!
//! ```json
//! {"view": "choose-room", "data": {"rooms": [...]}, "string_map": {}, "form": null, "flash": null}
//! ```

use std::collections::{BTreeMap, HashMap};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::domain::{format_date, Reservation};
use crate::shared::validations::{Form, FormErrors};

/// Submitted values and their field errors, for redisplay
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormView {
    pub values: HashMap<String, String>,
    pub errors: FormErrors,
}

impl From<&Form> for FormView {
    fn from(form: &Form) -> Self {
        Self {
            values: form.values().clone(),
            errors: form.errors().clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct View {
    pub view: &'static str,
    pub data: BTreeMap<String, Value>,
    pub string_map: BTreeMap<String, String>,
    pub form: Option<FormView>,
    pub flash: Option<String>,
}

impl View {
    pub fn new(view: &'static str) -> Self {
        Self {
            view,
            data: BTreeMap::new(),
            string_map: BTreeMap::new(),
            form: None,
            flash: None,
        }
    }

    pub fn data(mut self, key: &str, value: impl Serialize) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.data.insert(key.to_string(), value);
            }
            Err(e) => warn!(view = self.view, key, error = %e, "Could not serialize view data"),
        }
        self
    }

    pub fn string(mut self, key: &str, value: impl Into<String>) -> Self {
        self.string_map.insert(key.to_string(), value.into());
        self
    }

    /// Reservation under `data.reservation` plus its dates as strings
    pub fn reservation(self, reservation: &Reservation) -> Self {
        self.data("reservation", reservation)
            .string("start_date", format_date(reservation.start_date))
            .string("end_date", format_date(reservation.end_date))
    }

    pub fn form(mut self, form: impl Into<FormView>) -> Self {
        self.form = Some(form.into());
        self
    }

    pub fn flash(mut self, flash: Option<String>) -> Self {
        self.flash = flash;
        self
    }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
