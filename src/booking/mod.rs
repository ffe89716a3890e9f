//! In-memory booking state split across logical submodules.

mod partners;
mod seats;

pub use partners::PartnerDirectory;
pub use seats::{seat_color, SeatMap, SelectError};
