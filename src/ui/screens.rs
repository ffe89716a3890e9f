use std::cmp::min;

use crate::booking::{PartnerDirectory, SeatMap};
use crate::models::{Partner, Seat, Side, Table};

/// The six seat columns in left-to-right display order. Cursor movement walks
/// this list horizontally and the seats within a column vertically.
pub(crate) const SEAT_COLUMNS: [(Table, Side); 6] = [
    (Table::A, Side::Left),
    (Table::A, Side::Right),
    (Table::B, Side::Left),
    (Table::B, Side::Right),
    (Table::C, Side::Left),
    (Table::C, Side::Right),
];

/// Keyboard cursor over the seat grid. Only the position lives here; the
/// seats themselves stay inside the `SeatMap` so there is a single owner for
/// seat state.
pub(crate) struct SeatScreen {
    /// Index into `SEAT_COLUMNS`.
    column: usize,
    /// Row within the current column.
    row: usize,
}

impl SeatScreen {
    pub(crate) fn new() -> Self {
        Self { column: 0, row: 0 }
    }

    pub(crate) fn table(&self) -> Table {
        SEAT_COLUMNS[self.column].0
    }

    pub(crate) fn side(&self) -> Side {
        SEAT_COLUMNS[self.column].1
    }

    /// Whether the cursor currently rests on the given seat.
    pub(crate) fn is_on(&self, seat: &Seat) -> bool {
        seat.table == self.table() && seat.side == self.side() && seat.index == self.row
    }

    /// Seat id under the cursor. `None` only if a column were ever empty,
    /// which the fixed layout rules out, but the lookup stays defensive-free
    /// by simply following the data.
    pub(crate) fn current_seat_id(&self, map: &SeatMap) -> Option<String> {
        map.seats_by_table(self.table(), self.side())
            .into_iter()
            .find(|seat| seat.index == self.row)
            .map(|seat| seat.id)
    }

    /// Move across columns, clamping at the edges. The row is re-clamped on
    /// arrival because table A columns are twice as tall as B and C columns.
    pub(crate) fn move_horizontal(&mut self, offset: isize, map: &SeatMap) {
        let last = SEAT_COLUMNS.len() - 1;
        let target = self.column as isize + offset;
        self.column = target.clamp(0, last as isize) as usize;
        self.clamp_row(map);
    }

    /// Move within the current column, clamping at the top and bottom.
    pub(crate) fn move_vertical(&mut self, offset: isize, map: &SeatMap) {
        let len = self.column_len(map);
        if len == 0 {
            self.row = 0;
            return;
        }
        let target = self.row as isize + offset;
        self.row = target.clamp(0, len as isize - 1) as usize;
    }

    fn column_len(&self, map: &SeatMap) -> usize {
        map.seats_by_table(self.table(), self.side()).len()
    }

    fn clamp_row(&mut self, map: &SeatMap) {
        let len = self.column_len(map);
        if len == 0 {
            self.row = 0;
        } else {
            self.row = min(self.row, len - 1);
        }
    }
}

/// Roster view state: the active table filter, an optional live search query,
/// and the resulting list the widget renders. The filtered rows are cached so
/// drawing never re-runs the query.
pub(crate) struct PartnerScreen {
    pub(crate) filter: Option<Table>,
    pub(crate) query: Option<String>,
    pub(crate) filtered: Vec<Partner>,
    pub(crate) selected: usize,
}

impl PartnerScreen {
    pub(crate) fn new(directory: &PartnerDirectory) -> Self {
        let mut screen = Self {
            filter: None,
            query: None,
            filtered: Vec::new(),
            selected: 0,
        };
        screen.apply_filter(directory);
        screen
    }

    /// Recompute the visible rows. A live query takes precedence over the
    /// table filter because search is roster-wide; with neither active the
    /// whole roster shows.
    pub(crate) fn apply_filter(&mut self, directory: &PartnerDirectory) {
        self.filtered = if let Some(query) = &self.query {
            directory.search(query)
        } else if let Some(table) = self.filter {
            directory.by_table(table)
        } else {
            directory.all().to_vec()
        };
        self.ensure_in_bounds();
    }

    pub(crate) fn set_query(&mut self, query: Option<String>, directory: &PartnerDirectory) {
        self.query = query;
        self.apply_filter(directory);
    }

    /// Advance the table filter All -> A -> B -> C -> All. Cycling the filter
    /// also drops any committed search so the two views never stack.
    pub(crate) fn cycle_filter(&mut self, directory: &PartnerDirectory) -> Option<Table> {
        self.query = None;
        self.filter = match self.filter {
            None => Some(Table::A),
            Some(Table::A) => Some(Table::B),
            Some(Table::B) => Some(Table::C),
            Some(Table::C) => None,
        };
        self.apply_filter(directory);
        self.filter
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        if self.filtered.is_empty() {
            self.selected = 0;
            return;
        }
        let last = self.filtered.len() as isize - 1;
        let target = self.selected as isize + offset;
        self.selected = target.clamp(0, last) as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self) {
        self.selected = self.filtered.len().saturating_sub(1);
    }

    pub(crate) fn current_partner(&self) -> Option<&Partner> {
        self.filtered.get(self.selected)
    }

    /// Title for the roster panel, reflecting whichever view is active.
    pub(crate) fn title_label(&self) -> String {
        if let Some(query) = &self.query {
            format!("Partners · search \"{}\" ({})", query, self.filtered.len())
        } else if let Some(table) = self.filter {
            format!("Partners · Table {} ({})", table, self.filtered.len())
        } else {
            format!("Partners · All ({})", self.filtered.len())
        }
    }

    fn ensure_in_bounds(&mut self) {
        if self.filtered.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.filtered.len() {
            self.selected = self.filtered.len() - 1;
        }
    }
}
