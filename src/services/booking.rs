//! Slot bookings on top of the storage contract.
//!
//! The per-slot booked-id set produced here is the external input the seat
//! grid derives statuses from; it is never cached on the seats themselves.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use crate::models::{Booking, Seat, SeatStatus, User};
use crate::storage::{StorageError, StorageService};

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("This seat is under maintenance.")]
    SeatUnderMaintenance,
    #[error("This seat is already booked for the selected slot.")]
    SlotTaken,
    #[error("Your account has been blocked by the administrator.")]
    AccountBlocked,
    #[error("booking {0} not found")]
    NotFound(String),
    #[error("booking belongs to another user")]
    NotOwner,
    #[error("Connection error. Please try again.")]
    Connection(#[from] StorageError),
}

pub struct BookingService {
    storage: Arc<dyn StorageService>,
}

impl BookingService {
    pub fn new(storage: Arc<dyn StorageService>) -> Self {
        Self { storage }
    }

    /// Seat ids booked for one (date, slot) pair.
    pub async fn booked_seat_ids(
        &self,
        date: NaiveDate,
        slot: &str,
    ) -> Result<HashSet<String>, BookingError> {
        let bookings = self.storage.get_bookings().await?;
        Ok(bookings
            .into_iter()
            .filter(|b| b.date == date && b.slot == slot)
            .map(|b| b.seat_id)
            .collect())
    }

    pub async fn book_seat(
        &self,
        user: &User,
        seat: &Seat,
        date: NaiveDate,
        slot: &str,
    ) -> Result<Booking, BookingError> {
        if user.is_blocked {
            return Err(BookingError::AccountBlocked);
        }
        let booked = self.booked_seat_ids(date, slot).await?;
        match seat.status(&booked) {
            SeatStatus::Maintenance => Err(BookingError::SeatUnderMaintenance),
            SeatStatus::Booked => Err(BookingError::SlotTaken),
            SeatStatus::Available => {
                let booking = Booking::new(seat.id.clone(), user.id.clone(), date, slot);
                self.storage.save_booking(&booking).await?;
                info!(seat = %seat.label, %date, slot, "seat booked");
                Ok(booking)
            }
        }
    }

    /// Students may cancel only their own bookings; admins may cancel any.
    pub async fn cancel_booking(&self, user: &User, booking_id: &str) -> Result<(), BookingError> {
        let bookings = self.storage.get_bookings().await?;
        let booking = bookings
            .iter()
            .find(|b| b.id == booking_id)
            .ok_or_else(|| BookingError::NotFound(booking_id.to_string()))?;
        if booking.user_id != user.id && !user.is_admin() {
            return Err(BookingError::NotOwner);
        }
        self.storage.delete_booking(booking_id).await?;
        info!(booking_id, "booking cancelled");
        Ok(())
    }

    pub async fn bookings_for_user(&self, user_id: &str) -> Result<Vec<Booking>, BookingError> {
        let bookings = self.storage.get_bookings().await?;
        Ok(bookings.into_iter().filter(|b| b.user_id == user_id).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SeatType, UserRole};
    use crate::storage::MemoryStorage;

    fn student(id: &str) -> User {
        User {
            id: id.into(),
            role: UserRole::Student,
            is_blocked: false,
            name: "John".into(),
            email: format!("{id}@student.edu"),
            password: "pass".into(),
            student_id: "S-100".into(),
            department: "CS".into(),
            year_section: "3-A".into(),
            mobile: "0123456789".into(),
        }
    }

    fn slot_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn service() -> BookingService {
        BookingService::new(Arc::new(MemoryStorage::new()))
    }

    #[tokio::test]
    async fn booked_set_is_slot_relative() {
        let svc = service();
        let seat = Seat::new(SeatType::Standard, 0, 0, "A1");
        let user = student("u-1");
        svc.book_seat(&user, &seat, slot_date(), "09:00 - 11:00").await.unwrap();

        let morning = svc.booked_seat_ids(slot_date(), "09:00 - 11:00").await.unwrap();
        assert!(morning.contains(&seat.id));
        let evening = svc.booked_seat_ids(slot_date(), "17:00 - 19:00").await.unwrap();
        assert!(evening.is_empty());
        let next_day = svc
            .booked_seat_ids(slot_date().succ_opt().unwrap(), "09:00 - 11:00")
            .await
            .unwrap();
        assert!(next_day.is_empty());
    }

    #[tokio::test]
    async fn double_booking_one_slot_is_rejected() {
        let svc = service();
        let seat = Seat::new(SeatType::Pc, 1, 1, "P1");
        svc.book_seat(&student("u-1"), &seat, slot_date(), "09:00 - 11:00").await.unwrap();
        let err = svc
            .book_seat(&student("u-2"), &seat, slot_date(), "09:00 - 11:00")
            .await
            .unwrap_err();
        assert!(matches!(err, BookingError::SlotTaken));
        // A different slot on the same day is fine
        svc.book_seat(&student("u-2"), &seat, slot_date(), "11:00 - 13:00").await.unwrap();
    }

    #[tokio::test]
    async fn maintenance_seats_cannot_be_booked() {
        let svc = service();
        let mut seat = Seat::new(SeatType::Quiet, 2, 2, "Q1");
        seat.is_maintenance = true;
        let err = svc
            .book_seat(&student("u-1"), &seat, slot_date(), "09:00 - 11:00")
            .await
            .unwrap_err();
        assert!(matches!(err, BookingError::SeatUnderMaintenance));
    }

    #[tokio::test]
    async fn blocked_users_cannot_book() {
        let svc = service();
        let seat = Seat::new(SeatType::Standard, 0, 0, "A1");
        let mut user = student("u-1");
        user.is_blocked = true;
        let err = svc
            .book_seat(&user, &seat, slot_date(), "09:00 - 11:00")
            .await
            .unwrap_err();
        assert!(matches!(err, BookingError::AccountBlocked));
    }

    #[tokio::test]
    async fn cancellation_requires_ownership_or_admin() {
        let svc = service();
        let seat = Seat::new(SeatType::Standard, 0, 0, "A1");
        let owner = student("u-1");
        let booking = svc.book_seat(&owner, &seat, slot_date(), "09:00 - 11:00").await.unwrap();

        let err = svc.cancel_booking(&student("u-2"), &booking.id).await.unwrap_err();
        assert!(matches!(err, BookingError::NotOwner));

        let mut admin = student("u-admin");
        admin.role = UserRole::Admin;
        svc.cancel_booking(&admin, &booking.id).await.unwrap();
        assert!(svc.bookings_for_user("u-1").await.unwrap().is_empty());

        let err = svc.cancel_booking(&owner, &booking.id).await.unwrap_err();
        assert!(matches!(err, BookingError::NotFound(_)));
    }
}
