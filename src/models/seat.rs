use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatType {
    #[serde(rename = "STANDARD")]
    Standard,
    #[serde(rename = "PC")]
    Pc,
    #[serde(rename = "QUIET")]
    Quiet,
}

/// Derived classification of a seat for one selected slot. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatStatus {
    #[serde(rename = "AVAILABLE")]
    Available,
    #[serde(rename = "BOOKED")]
    Booked,
    #[serde(rename = "MAINTENANCE")]
    Maintenance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: String,
    pub seat_type: SeatType,
    pub x: u16,
    pub y: u16,
    pub label: String,
    /// Degrees; rendering transform only, never part of status or click logic
    pub rotation: i32,
    pub is_maintenance: bool,
}

impl Seat {
    pub fn new(seat_type: SeatType, x: u16, y: u16, label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            seat_type,
            x,
            y,
            label: label.into(),
            rotation: 0,
            is_maintenance: false,
        }
    }

    /// Status relative to the booked-id set of the currently selected slot.
    /// Maintenance takes precedence over booked, booked over available.
    pub fn status(&self, booked_ids: &HashSet<String>) -> SeatStatus {
        if self.is_maintenance {
            return SeatStatus::Maintenance;
        }
        if booked_ids.contains(&self.id) {
            return SeatStatus::Booked;
        }
        SeatStatus::Available
    }
}
