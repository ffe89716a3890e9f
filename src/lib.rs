//! Core library surface for the Event Seat Manager TUI application.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as potential external tooling can reuse the same
//! pieces: the seeded in-memory booking stores, the domain types, and the
//! interactive front-end.
pub mod booking;
pub mod models;
pub mod ui;

/// Convenience re-exports for the booking state layer. `main.rs` uses the
/// factories to seed the session stores; the error type is part of the
/// selection API contract.
pub use booking::{seat_color, PartnerDirectory, SeatMap, SelectError};

/// The primary domain types that other layers manipulate.
pub use models::{BookingData, Partner, Seat, SeatStatus, Side, Table, TimeOption, TimeSlot};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
