use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{Booking, Seat, User};

use super::{StorageResult, StorageService};

#[derive(Debug, Default)]
struct MemoryState {
    session: Option<User>,
    users: Vec<User>,
    seats: Vec<Seat>,
    bookings: Vec<Booking>,
}

/// In-memory store; the default for tests and the demo binary.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    inner: RwLock<MemoryState>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageService for MemoryStorage {
    async fn get_session(&self) -> StorageResult<Option<User>> {
        Ok(self.inner.read().await.session.clone())
    }

    async fn set_session(&self, user: &User) -> StorageResult<()> {
        self.inner.write().await.session = Some(user.clone());
        Ok(())
    }

    async fn clear_session(&self) -> StorageResult<()> {
        self.inner.write().await.session = None;
        Ok(())
    }

    async fn get_stored_users(&self) -> StorageResult<Vec<User>> {
        Ok(self.inner.read().await.users.clone())
    }

    async fn save_user(&self, user: &User) -> StorageResult<()> {
        self.inner.write().await.users.push(user.clone());
        Ok(())
    }

    async fn update_user(&self, user: &User) -> StorageResult<()> {
        let mut state = self.inner.write().await;
        if let Some(stored) = state.users.iter_mut().find(|u| u.id == user.id) {
            *stored = user.clone();
        }
        Ok(())
    }

    async fn get_seats(&self) -> StorageResult<Vec<Seat>> {
        Ok(self.inner.read().await.seats.clone())
    }

    async fn save_seats(&self, seats: &[Seat]) -> StorageResult<()> {
        self.inner.write().await.seats = seats.to_vec();
        Ok(())
    }

    async fn get_bookings(&self) -> StorageResult<Vec<Booking>> {
        Ok(self.inner.read().await.bookings.clone())
    }

    async fn save_booking(&self, booking: &Booking) -> StorageResult<()> {
        self.inner.write().await.bookings.push(booking.clone());
        Ok(())
    }

    async fn delete_booking(&self, booking_id: &str) -> StorageResult<()> {
        self.inner.write().await.bookings.retain(|b| b.id != booking_id);
        Ok(())
    }
}
