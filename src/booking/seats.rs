use ratatui::style::Color;
use thiserror::Error;

use crate::models::{Seat, SeatStatus, Side, Table};

/// Purple shown on the seat the user is currently choosing.
const SELECTED_COLOR: Color = Color::Rgb(0xA7, 0x8B, 0xFA);
/// Green shown on seats that can still be picked.
const AVAILABLE_COLOR: Color = Color::Rgb(0x38, 0xD8, 0x7B);
/// Gray shown on seats somebody already holds.
const OCCUPIED_COLOR: Color = Color::Rgb(0xEA, 0xEA, 0xEA);

/// Fixed room layout, in the exact order the seat map exposes it. Each row is
/// (id, table, side, index within the table+side group, status, occupant).
/// The occupant name is only populated for C1; the other occupied seats are
/// held anonymously in the source roster.
const SEED: &[(
    &str,
    Table,
    Side,
    usize,
    SeatStatus,
    Option<&str>,
)] = &[
    ("A1", Table::A, Side::Left, 0, SeatStatus::Occupied, None),
    ("A2", Table::A, Side::Left, 1, SeatStatus::Occupied, None),
    ("A3", Table::A, Side::Left, 2, SeatStatus::Occupied, None),
    ("A4", Table::A, Side::Left, 3, SeatStatus::Available, None),
    ("A5", Table::A, Side::Left, 4, SeatStatus::Available, None),
    ("A6", Table::A, Side::Left, 5, SeatStatus::Available, None),
    ("A7", Table::A, Side::Right, 0, SeatStatus::Available, None),
    ("A8", Table::A, Side::Right, 1, SeatStatus::Occupied, None),
    ("A9", Table::A, Side::Right, 2, SeatStatus::Available, None),
    ("A10", Table::A, Side::Right, 3, SeatStatus::Available, None),
    ("A11", Table::A, Side::Right, 4, SeatStatus::Available, None),
    ("A12", Table::A, Side::Right, 5, SeatStatus::Occupied, None),
    ("B1", Table::B, Side::Left, 0, SeatStatus::Available, None),
    ("B2", Table::B, Side::Left, 1, SeatStatus::Occupied, None),
    ("B3", Table::B, Side::Left, 2, SeatStatus::Occupied, None),
    ("B4", Table::B, Side::Right, 0, SeatStatus::Available, None),
    ("B5", Table::B, Side::Right, 1, SeatStatus::Available, None),
    ("B6", Table::B, Side::Right, 2, SeatStatus::Available, None),
    (
        "C1",
        Table::C,
        Side::Left,
        0,
        SeatStatus::Occupied,
        Some("Ethan Wei"),
    ),
    ("C2", Table::C, Side::Left, 1, SeatStatus::Occupied, None),
    ("C3", Table::C, Side::Left, 2, SeatStatus::Occupied, None),
    ("C4", Table::C, Side::Right, 0, SeatStatus::Available, None),
    ("C5", Table::C, Side::Right, 1, SeatStatus::Available, None),
    ("C6", Table::C, Side::Right, 2, SeatStatus::Available, None),
];

/// Why a selection attempt was rejected. Either way the map is left exactly
/// as it was, selection pointer included.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// No seat with the requested id exists in the room.
    #[error("Seat {0} does not exist.")]
    NotFound(String),
    /// The seat exists but is occupied or otherwise not available.
    #[error("Seat {0} is not available.")]
    NotAvailable(String),
}

/// Owned seat state for one session. Construct with [`SeatMap::seeded`]; each
/// instance is fully independent, so tests and parallel sessions never share
/// mutable state.
///
/// Invariants upheld by every operation:
/// - the collection never grows or shrinks after seeding;
/// - at most one seat is `Selected` at any time;
/// - `selected_seat` names that seat's id exactly when one is selected.
#[derive(Debug, Clone)]
pub struct SeatMap {
    seats: Vec<Seat>,
    selected_seat: Option<String>,
}

impl SeatMap {
    /// Build the fixed 24-seat room: twelve seats at table A and six each at
    /// tables B and C, with the occupancy the roster ships with.
    pub fn seeded() -> Self {
        let seats = SEED
            .iter()
            .map(|&(id, table, side, index, status, occupied_by)| Seat {
                id: id.to_string(),
                table,
                side,
                index,
                status,
                occupied_by: occupied_by.map(str::to_string),
            })
            .collect();

        Self {
            seats,
            selected_seat: None,
        }
    }

    /// Every seat in seed order. The order doubles as the single source of
    /// truth for how the UI lays the room out.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Look up a single seat by id.
    pub fn seat(&self, seat_id: &str) -> Option<&Seat> {
        self.seats.iter().find(|seat| seat.id == seat_id)
    }

    /// All seats on one side of one table, in seed order. Returns owned
    /// clones so callers can hold the rows across later mutations.
    pub fn seats_by_table(&self, table: Table, side: Side) -> Vec<Seat> {
        self.seats
            .iter()
            .filter(|seat| seat.table == table && seat.side == side)
            .cloned()
            .collect()
    }

    /// Id of the currently selected seat, if any.
    pub fn selected_seat(&self) -> Option<&str> {
        self.selected_seat.as_deref()
    }

    /// Select a seat, releasing whichever seat was selected before. This is
    /// destructive single-select rather than a toggle: re-selecting the same
    /// available seat simply keeps it selected.
    ///
    /// # Errors
    ///
    /// Rejects ids that do not exist and seats that are not available. The
    /// map is untouched on rejection so the caller can surface the message
    /// and carry on.
    pub fn select_seat(&mut self, seat_id: &str) -> Result<(), SelectError> {
        let target = self
            .seats
            .iter()
            .position(|seat| seat.id == seat_id)
            .ok_or_else(|| SelectError::NotFound(seat_id.to_string()))?;

        if self.seats[target].status != SeatStatus::Available {
            return Err(SelectError::NotAvailable(seat_id.to_string()));
        }

        // Release any prior selection first so the at-most-one-selected
        // invariant holds even if the pointer and statuses ever disagree.
        for seat in &mut self.seats {
            if seat.status == SeatStatus::Selected {
                seat.status = SeatStatus::Available;
            }
        }

        self.seats[target].status = SeatStatus::Selected;
        self.selected_seat = Some(self.seats[target].id.clone());
        Ok(())
    }

    /// Release the current selection, if any. Calling this with nothing
    /// selected is a harmless no-op.
    pub fn clear_selection(&mut self) {
        for seat in &mut self.seats {
            if seat.status == SeatStatus::Selected {
                seat.status = SeatStatus::Available;
            }
        }
        self.selected_seat = None;
    }

    /// Number of seats that can still be picked. Recounted on every call
    /// instead of cached, so it can never drift from the seat statuses.
    pub fn available_seats_count(&self) -> usize {
        self.seats.iter().filter(|seat| seat.is_available()).count()
    }
}

/// Map a seat's status to its display color: purple for the selection, green
/// for free seats, gray for taken ones.
pub fn seat_color(seat: &Seat) -> Color {
    match seat.status {
        SeatStatus::Selected => SELECTED_COLOR,
        SeatStatus::Available => AVAILABLE_COLOR,
        SeatStatus::Occupied => OCCUPIED_COLOR,
    }
}
