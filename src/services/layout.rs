//! Admin edit-mode operations on the room layout.
//!
//! Every mutation re-validates against a freshly built grid before anything
//! is persisted, so the one-seat-per-cell invariant is enforced at placement
//! time rather than patched at render time. Moving a seat onto an occupied
//! cell is rejected, never swapped or overwritten.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::grid::{GridError, SeatGrid, COLS};
use crate::models::{Seat, SeatType};
use crate::storage::{StorageError, StorageService};

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("seat {0} not found")]
    SeatNotFound(String),
    #[error("Connection error. Please try again.")]
    Connection(#[from] StorageError),
}

pub struct LayoutService {
    storage: Arc<dyn StorageService>,
}

impl LayoutService {
    pub fn new(storage: Arc<dyn StorageService>) -> Self {
        Self { storage }
    }

    pub async fn place_seat(
        &self,
        x: u16,
        y: u16,
        seat_type: SeatType,
        label: impl Into<String>,
    ) -> Result<Seat, LayoutError> {
        let mut seats = self.storage.get_seats().await?;
        {
            let grid = SeatGrid::build(&seats)?;
            if x >= COLS {
                return Err(GridError::ColumnOutOfRange(x).into());
            }
            if grid.is_occupied(x, y) {
                return Err(GridError::CellOccupied(x, y).into());
            }
        }
        let seat = Seat::new(seat_type, x, y, label);
        seats.push(seat.clone());
        self.storage.save_seats(&seats).await?;
        info!(label = %seat.label, x, y, "seat placed");
        Ok(seat)
    }

    pub async fn move_seat(&self, seat_id: &str, x: u16, y: u16) -> Result<Seat, LayoutError> {
        let mut seats = self.storage.get_seats().await?;
        {
            let grid = SeatGrid::build(&seats)?;
            if x >= COLS {
                return Err(GridError::ColumnOutOfRange(x).into());
            }
            if let Some(other) = grid.seat_at(x, y) {
                if other.id != seat_id {
                    return Err(GridError::CellOccupied(x, y).into());
                }
            }
        }
        let seat = seats
            .iter_mut()
            .find(|s| s.id == seat_id)
            .ok_or_else(|| LayoutError::SeatNotFound(seat_id.to_string()))?;
        seat.x = x;
        seat.y = y;
        let moved = seat.clone();
        self.storage.save_seats(&seats).await?;
        info!(label = %moved.label, x, y, "seat moved");
        Ok(moved)
    }

    pub async fn remove_seat(&self, seat_id: &str) -> Result<(), LayoutError> {
        let mut seats = self.storage.get_seats().await?;
        let before = seats.len();
        seats.retain(|s| s.id != seat_id);
        if seats.len() == before {
            return Err(LayoutError::SeatNotFound(seat_id.to_string()));
        }
        self.storage.save_seats(&seats).await?;
        info!(seat_id, "seat removed");
        Ok(())
    }

    /// Returns the new maintenance flag.
    pub async fn toggle_maintenance(&self, seat_id: &str) -> Result<bool, LayoutError> {
        let mut seats = self.storage.get_seats().await?;
        let seat = seats
            .iter_mut()
            .find(|s| s.id == seat_id)
            .ok_or_else(|| LayoutError::SeatNotFound(seat_id.to_string()))?;
        seat.is_maintenance = !seat.is_maintenance;
        let flag = seat.is_maintenance;
        self.storage.save_seats(&seats).await?;
        info!(seat_id, maintenance = flag, "maintenance flag toggled");
        Ok(flag)
    }

    /// Rotation is cosmetic only, so no grid re-validation is needed.
    pub async fn rotate_seat(&self, seat_id: &str, rotation: i32) -> Result<(), LayoutError> {
        let mut seats = self.storage.get_seats().await?;
        let seat = seats
            .iter_mut()
            .find(|s| s.id == seat_id)
            .ok_or_else(|| LayoutError::SeatNotFound(seat_id.to_string()))?;
        seat.rotation = rotation;
        self.storage.save_seats(&seats).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn service() -> (LayoutService, Arc<MemoryStorage>) {
        let store = Arc::new(MemoryStorage::new());
        (LayoutService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn placing_on_an_occupied_cell_is_rejected() {
        let (layout, store) = service();
        layout.place_seat(3, 2, SeatType::Standard, "A1").await.unwrap();
        let err = layout.place_seat(3, 2, SeatType::Pc, "P1").await.unwrap_err();
        assert!(matches!(err, LayoutError::Grid(GridError::CellOccupied(3, 2))));
        // The losing placement must not have been persisted
        assert_eq!(store.get_seats().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn placing_outside_the_room_width_is_rejected() {
        let (layout, _) = service();
        let err = layout.place_seat(COLS, 0, SeatType::Standard, "A1").await.unwrap_err();
        assert!(matches!(
            err,
            LayoutError::Grid(GridError::ColumnOutOfRange(_))
        ));
    }

    #[tokio::test]
    async fn moving_onto_another_seat_is_rejected_not_swapped() {
        let (layout, store) = service();
        let a = layout.place_seat(0, 0, SeatType::Standard, "A1").await.unwrap();
        let b = layout.place_seat(1, 0, SeatType::Standard, "A2").await.unwrap();

        let err = layout.move_seat(&a.id, 1, 0).await.unwrap_err();
        assert!(matches!(err, LayoutError::Grid(GridError::CellOccupied(1, 0))));

        let seats = store.get_seats().await.unwrap();
        let stored_a = seats.iter().find(|s| s.id == a.id).unwrap();
        let stored_b = seats.iter().find(|s| s.id == b.id).unwrap();
        assert_eq!((stored_a.x, stored_a.y), (0, 0));
        assert_eq!((stored_b.x, stored_b.y), (1, 0));
    }

    #[tokio::test]
    async fn moving_within_its_own_cell_is_allowed() {
        let (layout, _) = service();
        let a = layout.place_seat(0, 0, SeatType::Standard, "A1").await.unwrap();
        // Re-dropping a seat where it already sits is a no-op move
        let moved = layout.move_seat(&a.id, 0, 0).await.unwrap();
        assert_eq!((moved.x, moved.y), (0, 0));
    }

    #[tokio::test]
    async fn move_to_a_free_cell_updates_coordinates() {
        let (layout, store) = service();
        let a = layout.place_seat(0, 0, SeatType::Quiet, "Q1").await.unwrap();
        layout.move_seat(&a.id, 7, 4).await.unwrap();
        let seats = store.get_seats().await.unwrap();
        assert_eq!((seats[0].x, seats[0].y), (7, 4));
        // Invariant holds after every mutation
        assert!(SeatGrid::build(&seats).is_ok());
    }

    #[tokio::test]
    async fn remove_and_unknown_ids() {
        let (layout, store) = service();
        let a = layout.place_seat(0, 0, SeatType::Standard, "A1").await.unwrap();
        layout.remove_seat(&a.id).await.unwrap();
        assert!(store.get_seats().await.unwrap().is_empty());
        assert!(matches!(
            layout.remove_seat(&a.id).await.unwrap_err(),
            LayoutError::SeatNotFound(_)
        ));
        assert!(matches!(
            layout.move_seat("ghost", 1, 1).await.unwrap_err(),
            LayoutError::SeatNotFound(_)
        ));
    }

    #[tokio::test]
    async fn maintenance_toggle_flips_and_persists() {
        let (layout, store) = service();
        let a = layout.place_seat(2, 2, SeatType::Pc, "P1").await.unwrap();
        assert!(layout.toggle_maintenance(&a.id).await.unwrap());
        assert!(store.get_seats().await.unwrap()[0].is_maintenance);
        assert!(!layout.toggle_maintenance(&a.id).await.unwrap());
    }

    #[tokio::test]
    async fn rotation_persists_without_layout_checks() {
        let (layout, store) = service();
        let a = layout.place_seat(2, 2, SeatType::Standard, "A1").await.unwrap();
        layout.rotate_seat(&a.id, 180).await.unwrap();
        assert_eq!(store.get_seats().await.unwrap()[0].rotation, 180);
    }
}
