//! Demo data: the two demo accounts the login screen advertises and a
//! default room layout. Applied only to an empty store.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::models::{Seat, SeatType, User, UserRole};
use crate::storage::{StorageResult, StorageService};

pub async fn ensure_demo_data(storage: &Arc<dyn StorageService>) -> StorageResult<()> {
    if storage.get_stored_users().await?.is_empty() {
        for user in demo_users() {
            storage.save_user(&user).await?;
        }
        info!("seeded demo accounts");
    }
    if storage.get_seats().await?.is_empty() {
        storage.save_seats(&default_layout()).await?;
        info!("seeded default room layout");
    }
    Ok(())
}

fn demo_users() -> Vec<User> {
    vec![
        User {
            id: Uuid::new_v4().to_string(),
            role: UserRole::Admin,
            is_blocked: false,
            name: "Librarian".into(),
            email: "admin@library.edu".into(),
            password: "admin".into(),
            student_id: String::new(),
            department: String::new(),
            year_section: String::new(),
            mobile: String::new(),
        },
        User {
            id: Uuid::new_v4().to_string(),
            role: UserRole::Student,
            is_blocked: false,
            name: "John Reyes".into(),
            email: "john@student.edu".into(),
            password: "pass".into(),
            student_id: "2021-00123".into(),
            department: "CS".into(),
            year_section: "3-A".into(),
            mobile: "0912345678".into(),
        },
    ]
}

/// Two banks of standard desks, a PC row along the wall and a quiet corner.
fn default_layout() -> Vec<Seat> {
    let mut seats = Vec::new();
    for (row, y) in [2u16, 3].iter().enumerate() {
        for x in 1u16..7 {
            seats.push(Seat::new(
                SeatType::Standard,
                x,
                *y,
                format!("{}{}", (b'A' + row as u8) as char, x),
            ));
        }
    }
    for x in 1u16..9 {
        seats.push(Seat::new(SeatType::Pc, x, 5, format!("P{x}")));
    }
    for x in 10u16..14 {
        seats.push(Seat::new(SeatType::Quiet, x, 7, format!("Q{}", x - 9)));
    }
    seats
}
