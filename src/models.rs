//! Domain models shared by the booking state layer and the TUI. The intent is
//! that these types stay light-weight data holders so other layers can focus
//! on presentation and selection logic. The booking-flow contract types at the
//! bottom describe the wider reservation pipeline (date/time picking, invites,
//! cost) that collaborating screens exchange; only `BookingData.selected_seat`
//! and `invited_partners` are driven by this application today.

use std::fmt;

/// The three tables in the room. The set is closed on purpose: seat ids embed
/// the table letter, and the layout never changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    A,
    B,
    C,
}

impl Table {
    /// Single-letter form used as the prefix of seat ids ("A" in "A1").
    pub fn letter(self) -> &'static str {
        match self {
            Table::A => "A",
            Table::B => "B",
            Table::C => "C",
        }
    }
}

impl fmt::Display for Table {
    /// Write the table letter to any formatter so the type plays nicely with
    /// Ratatui widgets that consume strings implicitly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Which side of a table a seat sits on. Tables are rendered as two columns,
/// and seat indices restart from zero on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Mutually exclusive seat states. `Selected` is the transient UI state of
/// the one seat the user is currently choosing, distinct from availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatStatus {
    Available,
    Occupied,
    Selected,
}

#[derive(Debug, Clone)]
/// A single bookable position at a table. Identity (`id`) is immutable once
/// seeded; only `status` and `occupied_by` ever change during a session.
pub struct Seat {
    /// Stable identifier, table letter plus numeric suffix (e.g. "A1").
    pub id: String,
    /// Which table the seat belongs to.
    pub table: Table,
    /// Which side of that table.
    pub side: Side,
    /// Zero-based position within the table+side group. Kept separate from the
    /// id suffix because the right-hand columns restart counting at zero.
    pub index: usize,
    /// Current state; see the invariants on `SeatMap`.
    pub status: SeatStatus,
    /// Display name of the occupant. Only meaningful when `status` is
    /// `Occupied`, and most occupied seats in the seed carry no name.
    pub occupied_by: Option<String>,
}

impl Seat {
    /// Whether the seat can currently be picked.
    pub fn is_available(&self) -> bool {
        self.status == SeatStatus::Available
    }

    /// Occupant name with blanks collapsed away, ready for list views that
    /// should not render an empty trailing label.
    pub fn occupant_label(&self) -> Option<&str> {
        self.occupied_by
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone)]
/// An attendee who may be associated with a table and seat. The association is
/// informational only: nothing checks that `seat` exists in the seat map, and
/// the seeded roster deliberately contains overlapping references.
pub struct Partner {
    /// Stable identifier from the roster.
    pub id: String,
    /// Display name used in lists and search.
    pub name: String,
    /// Table the partner is expected at, if any.
    pub table: Option<Table>,
    /// Seat id the partner is expected in, if any.
    pub seat: Option<String>,
}

impl Partner {
    /// Compose a `Table A · A5` style suffix that gracefully degrades when the
    /// partner has no assignment. List views rely on this ready-to-use form.
    pub fn assignment_label(&self) -> String {
        match (&self.table, &self.seat) {
            (Some(table), Some(seat)) => format!("Table {table} · {seat}"),
            (Some(table), None) => format!("Table {table}"),
            (None, Some(seat)) => seat.clone(),
            (None, None) => "Unassigned".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
/// A bookable day offered by the reservation flow.
pub struct TimeSlot {
    pub id: String,
    /// Short date label (e.g. "11.20").
    pub date: String,
    /// Weekday label (e.g. "Wed.").
    pub weekday: String,
    /// The concrete time windows offered on that day.
    pub times: Vec<TimeOption>,
}

#[derive(Debug, Clone)]
/// One selectable time window within a `TimeSlot`.
pub struct TimeOption {
    pub id: String,
    /// Window label (e.g. "09:00 - 12:00").
    pub time: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Default)]
/// Accumulated reservation choices handed to the confirmation step. The coin
/// cost field is carried for the downstream screens but never computed here.
pub struct BookingData {
    pub selected_seat: Option<String>,
    pub selected_date: Option<String>,
    pub selected_time: Option<String>,
    pub invited_partners: Vec<String>,
    pub coin_cost: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupant_label_hides_blank_names() {
        let seat = Seat {
            id: "A1".to_string(),
            table: Table::A,
            side: Side::Left,
            index: 0,
            status: SeatStatus::Occupied,
            occupied_by: Some("   ".to_string()),
        };
        assert_eq!(seat.occupant_label(), None);

        let named = Seat {
            occupied_by: Some("Ethan Wei".to_string()),
            ..seat
        };
        assert_eq!(named.occupant_label(), Some("Ethan Wei"));
    }

    #[test]
    fn assignment_label_degrades_gracefully() {
        let mut partner = Partner {
            id: "1".to_string(),
            name: "Ethan Wei".to_string(),
            table: Some(Table::C),
            seat: Some("C1".to_string()),
        };
        assert_eq!(partner.assignment_label(), "Table C · C1");

        partner.seat = None;
        assert_eq!(partner.assignment_label(), "Table C");

        partner.table = None;
        assert_eq!(partner.assignment_label(), "Unassigned");
    }

    #[test]
    fn booking_data_defaults_to_empty_choices() {
        let booking = BookingData::default();
        assert!(booking.selected_seat.is_none());
        assert!(booking.selected_date.is_none());
        assert!(booking.selected_time.is_none());
        assert!(booking.invited_partners.is_empty());
        assert_eq!(booking.coin_cost, 0);
    }
}
