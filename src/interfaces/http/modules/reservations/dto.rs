//! Reservation DTOs

use serde::Deserialize;

/// `GET /book-room?id=..&s=..&e=..`
#[derive(Debug, Default, Deserialize)]
pub struct BookRoomQuery {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub s: String,
    #[serde(default)]
    pub e: String,
}
