//! Seat map view-model.
//!
//! Pure function of (seats, booked ids for the selected slot, selected seat,
//! admin flag, edit-mode flag) to a grid of cells plus interaction routing.
//! The view-model owns no booking state and does no I/O; the host dashboard
//! persists whatever an emitted event implies.

use std::collections::HashSet;

use crate::grid::{GridError, SeatGrid, COLS};
use crate::models::{Seat, SeatStatus, SeatType};

/// Inputs supplied by the host dashboard.
#[derive(Debug, Clone, Copy)]
pub struct SeatMapProps<'a> {
    pub seats: &'a [Seat],
    /// Seat ids booked in the currently selected slot
    pub booked_ids: &'a HashSet<String>,
    pub selected_seat_id: Option<&'a str>,
    pub is_admin: bool,
    pub is_edit_mode: bool,
}

/// Exclusive visual state of a seat cell, evaluated in order: selection
/// overrides everything, then maintenance, then booked (outside edit mode),
/// then available subtyped by seat kind for distinct styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatAppearance {
    Selected,
    Maintenance,
    Booked,
    Available(SeatType),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    Seat {
        seat: &'a Seat,
        status: SeatStatus,
        appearance: SeatAppearance,
        clickable: bool,
    },
    /// Unoccupied cell. In edit mode it is an "add seat here" affordance;
    /// otherwise an inert spacer that preserves grid alignment.
    Empty { addable: bool },
}

/// What a click on a cell means to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeatMapEvent<'a> {
    SeatClicked(&'a Seat),
    EmptySlotClicked { x: u16, y: u16 },
}

/// Stage 2 of the derivation pipeline: status to appearance.
pub fn seat_appearance(
    seat_type: SeatType,
    status: SeatStatus,
    is_selected: bool,
    is_edit_mode: bool,
) -> SeatAppearance {
    if is_selected {
        return SeatAppearance::Selected;
    }
    if status == SeatStatus::Maintenance {
        return SeatAppearance::Maintenance;
    }
    // Edit mode keeps booked seats in their type styling so they read as movable
    if status == SeatStatus::Booked && !is_edit_mode {
        return SeatAppearance::Booked;
    }
    SeatAppearance::Available(seat_type)
}

/// Stage 3: students can only click available seats, admins can click anything.
pub fn seat_clickable(status: SeatStatus, is_admin: bool) -> bool {
    is_admin || status == SeatStatus::Available
}

pub struct SeatMapView<'a> {
    props: SeatMapProps<'a>,
    grid: SeatGrid<'a>,
    rows: u16,
}

impl<'a> SeatMapView<'a> {
    /// Fails only on a layout that violates the one-seat-per-cell invariant,
    /// which the edit-mode services are required to prevent upstream.
    pub fn build(props: SeatMapProps<'a>) -> Result<Self, GridError> {
        let grid = SeatGrid::build(props.seats)?;
        let rows = grid.row_count(props.is_edit_mode);
        Ok(Self { props, grid, rows })
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        COLS
    }

    /// Derived render state for one cell; `None` outside the grid.
    pub fn cell(&self, x: u16, y: u16) -> Option<Cell<'a>> {
        if x >= COLS || y >= self.rows {
            return None;
        }
        let cell = match self.grid.seat_at(x, y) {
            Some(seat) => {
                let status = seat.status(self.props.booked_ids);
                let is_selected = self.props.selected_seat_id == Some(seat.id.as_str());
                Cell::Seat {
                    seat,
                    status,
                    appearance: seat_appearance(
                        seat.seat_type,
                        status,
                        is_selected,
                        self.props.is_edit_mode,
                    ),
                    clickable: seat_clickable(status, self.props.is_admin),
                }
            }
            None => Cell::Empty {
                addable: self.props.is_edit_mode,
            },
        };
        Some(cell)
    }

    /// All cells in row-major order, one per (x, y) in the grid rectangle.
    pub fn cells(&self) -> Vec<Cell<'a>> {
        let mut out = Vec::with_capacity(self.rows as usize * COLS as usize);
        for y in 0..self.rows {
            for x in 0..COLS {
                // Bounds were just checked
                if let Some(cell) = self.cell(x, y) {
                    out.push(cell);
                }
            }
        }
        out
    }

    /// Routes a click. Non-clickable seats and inert spacers swallow the
    /// click; out-of-grid coordinates do too.
    pub fn click(&self, x: u16, y: u16) -> Option<SeatMapEvent<'a>> {
        match self.cell(x, y)? {
            Cell::Seat {
                seat,
                clickable: true,
                ..
            } => Some(SeatMapEvent::SeatClicked(seat)),
            Cell::Empty { addable: true } => Some(SeatMapEvent::EmptySlotClicked { x, y }),
            _ => None,
        }
    }
}
