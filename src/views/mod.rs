pub mod seat_map;

pub use seat_map::{Cell, SeatAppearance, SeatMapEvent, SeatMapProps, SeatMapView};
