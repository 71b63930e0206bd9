pub mod auth;
pub mod booking;
pub mod layout;

pub use auth::AuthService;
pub use booking::BookingService;
pub use layout::LayoutService;
