//! Client-local persistence behind an injected service interface.
//!
//! The core treats storage as a black box: async calls, awaited to
//! completion, with no transactional semantics assumed across them. There is
//! exactly one logical actor mutating state, so no locking discipline beyond
//! each store's own interior mutability is required.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Booking, Seat, User};

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored data is corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

#[async_trait]
pub trait StorageService: Send + Sync {
    async fn get_session(&self) -> StorageResult<Option<User>>;
    /// Idempotent overwrite.
    async fn set_session(&self, user: &User) -> StorageResult<()>;
    async fn clear_session(&self) -> StorageResult<()>;

    async fn get_stored_users(&self) -> StorageResult<Vec<User>>;
    /// Append; the caller has already checked email uniqueness.
    async fn save_user(&self, user: &User) -> StorageResult<()>;
    /// Replace the stored user with the same id; unknown ids are a no-op.
    async fn update_user(&self, user: &User) -> StorageResult<()>;

    async fn get_seats(&self) -> StorageResult<Vec<Seat>>;
    async fn save_seats(&self, seats: &[Seat]) -> StorageResult<()>;

    async fn get_bookings(&self) -> StorageResult<Vec<Booking>>;
    async fn save_booking(&self, booking: &Booking) -> StorageResult<()>;
    async fn delete_booking(&self, booking_id: &str) -> StorageResult<()>;
}
