use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One reserved (seat, date, slot) triple. A seat's booked/available status
/// is always evaluated against the bookings of one selected slot, never
/// stored on the seat itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub seat_id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub slot: String,
    pub created_at: NaiveDateTime,
}

impl Booking {
    pub fn new(seat_id: impl Into<String>, user_id: impl Into<String>, date: NaiveDate, slot: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            seat_id: seat_id.into(),
            user_id: user_id.into(),
            date,
            slot: slot.into(),
            created_at: Utc::now().naive_utc(),
        }
    }
}
