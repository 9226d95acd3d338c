//! Availability DTOs

use serde::{Deserialize, Serialize};

/// Search form: `start`, `end` as `YYYY-MM-DD`
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

/// Probe form: `start`, `end`, `room_id`
#[derive(Debug, Default, Deserialize)]
pub struct ProbeForm {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub room_id: Option<String>,
}

pub const PROBE_MALFORMED: &str = "Internal server error";
pub const PROBE_BAD_START: &str = "Invalid start date format";
pub const PROBE_BAD_END: &str = "Invalid end date format";
pub const PROBE_BAD_ROOM: &str = "Invalid room id format";
pub const PROBE_STORE_DOWN: &str = "Error connecting to database";
pub const PROBE_EMPTY_STAY: &str = "End date must be after start date";

/// Probe answer. Inputs are echoed back as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResponse {
    pub ok: bool,
    pub message: String,
    pub start_date: String,
    pub end_date: String,
    pub room_id: String,
}

impl ProbeResponse {
    pub fn echo(input: &ProbeForm) -> Self {
        Self {
            ok: false,
            message: String::new(),
            start_date: input.start.clone().unwrap_or_default(),
            end_date: input.end.clone().unwrap_or_default(),
            room_id: input.room_id.clone().unwrap_or_default(),
        }
    }

    pub fn failed(mut self, message: &str) -> Self {
        self.ok = false;
        self.message = message.to_string();
        self
    }

    pub fn answered(mut self, available: bool) -> Self {
        self.ok = available;
        self.message = String::new();
        self
    }
}
