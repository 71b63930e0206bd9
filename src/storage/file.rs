use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use crate::models::{Booking, Seat, User};

use super::{StorageResult, StorageService};

#[derive(Debug, Default, Serialize, Deserialize)]
struct FileState {
    session: Option<User>,
    users: Vec<User>,
    seats: Vec<Seat>,
    bookings: Vec<Booking>,
}

/// JSON-file store: the whole state is one document, kept in memory and
/// rewritten on every mutation. Fine for a single actor and room-sized data.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    inner: RwLock<FileState>,
}

impl FileStorage {
    pub async fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let state = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => FileState::default(),
            Err(e) => return Err(e.into()),
        };
        info!(path = %path.display(), "file storage opened");
        Ok(Self {
            path,
            inner: RwLock::new(state),
        })
    }

    async fn persist(&self, state: &FileState) -> StorageResult<()> {
        let bytes = serde_json::to_vec_pretty(state)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl StorageService for FileStorage {
    async fn get_session(&self) -> StorageResult<Option<User>> {
        Ok(self.inner.read().await.session.clone())
    }

    async fn set_session(&self, user: &User) -> StorageResult<()> {
        let mut state = self.inner.write().await;
        state.session = Some(user.clone());
        self.persist(&state).await
    }

    async fn clear_session(&self) -> StorageResult<()> {
        let mut state = self.inner.write().await;
        state.session = None;
        self.persist(&state).await
    }

    async fn get_stored_users(&self) -> StorageResult<Vec<User>> {
        Ok(self.inner.read().await.users.clone())
    }

    async fn save_user(&self, user: &User) -> StorageResult<()> {
        let mut state = self.inner.write().await;
        state.users.push(user.clone());
        self.persist(&state).await
    }

    async fn update_user(&self, user: &User) -> StorageResult<()> {
        let mut state = self.inner.write().await;
        if let Some(stored) = state.users.iter_mut().find(|u| u.id == user.id) {
            *stored = user.clone();
        }
        self.persist(&state).await
    }

    async fn get_seats(&self) -> StorageResult<Vec<Seat>> {
        Ok(self.inner.read().await.seats.clone())
    }

    async fn save_seats(&self, seats: &[Seat]) -> StorageResult<()> {
        let mut state = self.inner.write().await;
        state.seats = seats.to_vec();
        self.persist(&state).await
    }

    async fn get_bookings(&self) -> StorageResult<Vec<Booking>> {
        Ok(self.inner.read().await.bookings.clone())
    }

    async fn save_booking(&self, booking: &Booking) -> StorageResult<()> {
        let mut state = self.inner.write().await;
        state.bookings.push(booking.clone());
        self.persist(&state).await
    }

    async fn delete_booking(&self, booking_id: &str) -> StorageResult<()> {
        let mut state = self.inner.write().await;
        state.bookings.retain(|b| b.id != booking_id);
        self.persist(&state).await
    }
}
