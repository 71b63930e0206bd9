use std::collections::HashMap;
use thiserror::Error;

use crate::models::Seat;

/// Fixed room width.
pub const COLS: u16 = 15;
/// The layout always shows at least this many row indices, even when empty.
pub const MIN_ROW: u16 = 8;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({0}, {1}) is already occupied by another seat")]
    CellOccupied(u16, u16),
    #[error("column {0} is outside the room width")]
    ColumnOutOfRange(u16),
}

/// Logical row count for a layout. Edit mode reserves one extra growth row
/// at the bottom so a new bottom row can be appended.
pub fn row_count(seats: &[Seat], edit_mode: bool) -> u16 {
    let max_y = seats.iter().map(|s| s.y).max().unwrap_or(0).max(MIN_ROW);
    max_y + if edit_mode { 2 } else { 1 }
}

/// Sparse 2D arrangement of seats with an O(1) coordinate lookup.
///
/// Construction is where the one-seat-per-cell invariant is enforced: a
/// layout holding two seats on the same (x, y) is a data-integrity violation
/// and is rejected outright rather than patched up at render time.
#[derive(Debug)]
pub struct SeatGrid<'a> {
    seats: &'a [Seat],
    index: HashMap<(u16, u16), usize>,
}

impl<'a> SeatGrid<'a> {
    pub fn build(seats: &'a [Seat]) -> Result<Self, GridError> {
        let mut index = HashMap::with_capacity(seats.len());
        for (i, seat) in seats.iter().enumerate() {
            if seat.x >= COLS {
                return Err(GridError::ColumnOutOfRange(seat.x));
            }
            if index.insert((seat.x, seat.y), i).is_some() {
                return Err(GridError::CellOccupied(seat.x, seat.y));
            }
        }
        Ok(Self { seats, index })
    }

    pub fn seat_at(&self, x: u16, y: u16) -> Option<&'a Seat> {
        self.index.get(&(x, y)).map(|&i| &self.seats[i])
    }

    pub fn is_occupied(&self, x: u16, y: u16) -> bool {
        self.index.contains_key(&(x, y))
    }

    pub fn seats(&self) -> &'a [Seat] {
        self.seats
    }

    pub fn row_count(&self, edit_mode: bool) -> u16 {
        row_count(self.seats, edit_mode)
    }
}
