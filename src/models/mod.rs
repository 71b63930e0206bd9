pub mod booking;
pub mod seat;
pub mod user;

pub use booking::Booking;
pub use seat::{Seat, SeatStatus, SeatType};
pub use user::{User, UserRole};
