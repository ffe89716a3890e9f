//! Binary entry point that glues the seeded booking stores to the TUI. The
//! bootstrapping pipeline is deliberately short: seed the seat map and the
//! partner roster in memory, hydrate the app state, and drive the Ratatui
//! event loop until the user exits. Nothing persists past the session.
use event_seat_manager::{run_app, App, PartnerDirectory, SeatMap};

/// Seed the in-memory stores and launch the Ratatui event loop.
///
/// Returning a `Result` bubbles up fatal terminal initialization problems
/// (for example an unusable TTY) to the caller instead of crashing silently.
fn main() -> anyhow::Result<()> {
    let seats = SeatMap::seeded();
    let partners = PartnerDirectory::seeded();

    let mut app = App::new(seats, partners);
    run_app(&mut app)
}
