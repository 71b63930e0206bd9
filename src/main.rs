use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use libbook::{
    app::AppShell,
    config::Config,
    services::{auth::Credentials, BookingService},
    views::{Cell, SeatAppearance, SeatMapProps, SeatMapView},
    AppState,
};

/// One character per cell: seat types S/P/Q, booked x, maintenance M,
/// selected *, empty cells are dots (or + for edit-mode add slots).
fn render_map(view: &SeatMapView) -> String {
    let mut out = String::new();
    for y in 0..view.rows() {
        for x in 0..view.cols() {
            let ch = match view.cell(x, y) {
                Some(Cell::Seat { appearance, .. }) => match appearance {
                    SeatAppearance::Selected => '*',
                    SeatAppearance::Maintenance => 'M',
                    SeatAppearance::Booked => 'x',
                    SeatAppearance::Available(t) => match t {
                        libbook::models::SeatType::Standard => 'S',
                        libbook::models::SeatType::Pc => 'P',
                        libbook::models::SeatType::Quiet => 'Q',
                    },
                },
                Some(Cell::Empty { addable: true }) => '+',
                _ => '.',
            };
            out.push(ch);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting LibBook seat reservation demo");

    let state = AppState::new(config).await?;
    let bookings = BookingService::new(state.storage.clone());

    let mut shell = AppShell::new(state.storage.clone());
    shell.start().await?;

    let user = shell
        .login(&Credentials {
            email: "john@student.edu".into(),
            password: "pass".into(),
        })
        .await?;
    info!(name = %user.name, "signed in");

    let date = chrono::Local::now().date_naive();
    let slot = "09:00 - 11:00";
    let seats = state.storage.get_seats().await?;
    let booked = bookings.booked_seat_ids(date, slot).await?;

    let view = SeatMapView::build(SeatMapProps {
        seats: &seats,
        booked_ids: &booked,
        selected_seat_id: None,
        is_admin: user.is_admin(),
        is_edit_mode: false,
    })?;
    println!("Room layout for {date} {slot}:\n{}", render_map(&view));

    // Book the first free seat, the way a dashboard would after a click
    let chosen = seats
        .iter()
        .find(|s| view.click(s.x, s.y).is_some())
        .expect("demo layout always has a free seat");
    let booking = bookings.book_seat(&user, chosen, date, slot).await?;
    info!(seat = %chosen.label, booking = %booking.id, "booked");

    let booked = bookings.booked_seat_ids(date, slot).await?;
    let view = SeatMapView::build(SeatMapProps {
        seats: &seats,
        booked_ids: &booked,
        selected_seat_id: Some(chosen.id.as_str()),
        is_admin: user.is_admin(),
        is_edit_mode: false,
    })?;
    println!("After booking {}:\n{}", chosen.label, render_map(&view));

    shell.logout().await?;
    info!("demo finished");
    Ok(())
}
