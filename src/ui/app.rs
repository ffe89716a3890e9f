use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::booking::{PartnerDirectory, SeatMap};
use crate::models::{BookingData, Partner, Side, Table};

use super::helpers::{centered_rect, seat_line};
use super::screens::{PartnerScreen, SeatScreen};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Header space above the seat grid for the availability summary.
const HEADER_HEIGHT: u16 = 2;

/// High-level navigation states. Keeping this explicit makes it easy to
/// reason about which rendering path runs and what keyboard shortcuts do.
enum Screen {
    Seats(SeatScreen),
    Partners(PartnerScreen),
}

/// Fine-grained modes scoped to the current screen.
enum Mode {
    Normal,
    Searching(SearchState),
    ConfirmQuit(ConfirmQuit),
}

/// State for an active inline partner search.
struct SearchState {
    query: String,
}

/// Pending quit while a seat is still selected; we ask before discarding it.
struct ConfirmQuit {
    seat_id: String,
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI.
pub struct App {
    seat_map: SeatMap,
    partners: PartnerDirectory,
    booking: BookingData,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(seat_map: SeatMap, partners: PartnerDirectory) -> Self {
        Self {
            seat_map,
            partners,
            booking: BookingData::default(),
            screen: Screen::Seats(SeatScreen::new()),
            mode: Mode::Normal,
            status: None,
        }
    }

    /// Reservation choices accumulated so far. The seat picker keeps
    /// `selected_seat` and `invited_partners` current; the date/time fields
    /// belong to collaborating screens.
    pub fn booking(&self) -> &BookingData {
        &self.booking
    }

    /// Route one key press. Returns `true` when the application should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::Searching(state) => self.handle_search(code, state)?,
            Mode::ConfirmQuit(confirm) => self.handle_confirm_quit(code, confirm, &mut exit),
        };

        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match self.screen {
            Screen::Seats(ref mut cursor) => {
                let mut switch_to_partners = false;

                match code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        if let Some(seat_id) = self.seat_map.selected_seat() {
                            return Ok(Mode::ConfirmQuit(ConfirmQuit {
                                seat_id: seat_id.to_string(),
                            }));
                        }
                        *exit = true;
                    }
                    KeyCode::Left => cursor.move_horizontal(-1, &self.seat_map),
                    KeyCode::Right => cursor.move_horizontal(1, &self.seat_map),
                    KeyCode::Up => cursor.move_vertical(-1, &self.seat_map),
                    KeyCode::Down => cursor.move_vertical(1, &self.seat_map),
                    KeyCode::Enter => {
                        if let Some(seat_id) = cursor.current_seat_id(&self.seat_map) {
                            match self.seat_map.select_seat(&seat_id) {
                                Ok(()) => {
                                    self.booking.selected_seat = Some(seat_id.clone());
                                    self.set_status(
                                        format!("Selected seat {seat_id}."),
                                        StatusKind::Info,
                                    );
                                }
                                Err(err) => {
                                    self.set_status(err.to_string(), StatusKind::Error);
                                }
                            }
                        }
                    }
                    KeyCode::Char('c') | KeyCode::Char('C') => {
                        if self.seat_map.selected_seat().is_some() {
                            self.seat_map.clear_selection();
                            self.booking.selected_seat = None;
                            self.set_status("Selection cleared.", StatusKind::Info);
                        } else {
                            self.set_status("No seat is selected.", StatusKind::Error);
                        }
                    }
                    KeyCode::Tab => {
                        switch_to_partners = true;
                    }
                    _ => {}
                }

                if switch_to_partners {
                    self.clear_status();
                    self.screen = Screen::Partners(PartnerScreen::new(&self.partners));
                }
                Ok(Mode::Normal)
            }
            Screen::Partners(ref mut roster) => {
                let mut status_to_set: Option<(String, StatusKind)> = None;
                let mut invite_toggle: Option<Partner> = None;
                let mut switch_to_seats = false;

                match code {
                    KeyCode::Char('q') => {
                        if let Some(seat_id) = self.seat_map.selected_seat() {
                            return Ok(Mode::ConfirmQuit(ConfirmQuit {
                                seat_id: seat_id.to_string(),
                            }));
                        }
                        *exit = true;
                    }
                    KeyCode::Esc | KeyCode::Tab => {
                        switch_to_seats = true;
                    }
                    KeyCode::Up => roster.move_selection(-1),
                    KeyCode::Down => roster.move_selection(1),
                    KeyCode::PageUp => roster.move_selection(-5),
                    KeyCode::PageDown => roster.move_selection(5),
                    KeyCode::Home => roster.select_first(),
                    KeyCode::End => roster.select_last(),
                    KeyCode::Char('t') | KeyCode::Char('T') => {
                        let filter = roster.cycle_filter(&self.partners);
                        let message = match filter {
                            Some(table) => format!("Showing partners at table {table}."),
                            None => "Showing all partners.".to_string(),
                        };
                        status_to_set = Some((message, StatusKind::Info));
                    }
                    KeyCode::Char('f') | KeyCode::Char('F') => {
                        roster.set_query(Some(String::new()), &self.partners);
                        return Ok(Mode::Searching(SearchState {
                            query: String::new(),
                        }));
                    }
                    KeyCode::Char(' ') => {
                        if let Some(partner) = roster.current_partner().cloned() {
                            invite_toggle = Some(partner);
                        } else {
                            status_to_set = Some((
                                "No partner selected to invite.".to_string(),
                                StatusKind::Error,
                            ));
                        }
                    }
                    _ => {}
                }

                if let Some(partner) = invite_toggle {
                    self.toggle_invite(&partner);
                }
                if let Some((text, kind)) = status_to_set {
                    self.set_status(text, kind);
                }
                if switch_to_seats {
                    self.clear_status();
                    self.screen = Screen::Seats(SeatScreen::new());
                }
                Ok(Mode::Normal)
            }
        }
    }

    fn handle_search(&mut self, code: KeyCode, mut state: SearchState) -> Result<Mode> {
        let roster = match &mut self.screen {
            Screen::Partners(roster) => roster,
            // Search only exists on the roster screen; drop the mode if the
            // screen changed underneath it.
            _ => return Ok(Mode::Normal),
        };

        match code {
            KeyCode::Esc => {
                roster.set_query(None, &self.partners);
                return Ok(Mode::Normal);
            }
            KeyCode::Enter => {
                // Commit the query: the filtered view stays until the user
                // presses Esc or cycles the table filter.
                return Ok(Mode::Normal);
            }
            KeyCode::Up => {
                roster.move_selection(-1);
                return Ok(Mode::Searching(state));
            }
            KeyCode::Down => {
                roster.move_selection(1);
                return Ok(Mode::Searching(state));
            }
            KeyCode::Backspace => {
                state.query.pop();
            }
            KeyCode::Char(c) => {
                state.query.push(c);
            }
            _ => return Ok(Mode::Searching(state)),
        }

        roster.set_query(Some(state.query.clone()), &self.partners);
        Ok(Mode::Searching(state))
    }

    fn handle_confirm_quit(&mut self, code: KeyCode, confirm: ConfirmQuit, exit: &mut bool) -> Mode {
        match code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                *exit = true;
                Mode::Normal
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.set_status(
                    format!("Kept seat {}.", confirm.seat_id),
                    StatusKind::Info,
                );
                Mode::Normal
            }
            _ => Mode::ConfirmQuit(confirm),
        }
    }

    fn toggle_invite(&mut self, partner: &Partner) {
        if let Some(pos) = self
            .booking
            .invited_partners
            .iter()
            .position(|id| *id == partner.id)
        {
            self.booking.invited_partners.remove(pos);
            self.set_status(
                format!("Removed {} from the invite list.", partner.name),
                StatusKind::Info,
            );
        } else {
            self.booking.invited_partners.push(partner.id.clone());
            self.set_status(format!("Invited {}.", partner.name), StatusKind::Info);
        }
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::Seats(cursor) => self.draw_seat_grid(frame, content_area, cursor),
            Screen::Partners(roster) => self.draw_partner_list(frame, content_area, roster),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::Searching(state) => self.draw_search_bar(frame, area, state),
            Mode::ConfirmQuit(confirm) => self.draw_confirm_quit(frame, area, confirm),
            Mode::Normal => {}
        }
    }

    fn draw_seat_grid(&self, frame: &mut Frame, area: Rect, cursor: &SeatScreen) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
            .split(area);

        self.draw_seat_header(frame, chunks[0]);

        let tables = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(chunks[1]);

        for (table, table_area) in [Table::A, Table::B, Table::C].into_iter().zip(tables.iter()) {
            self.draw_table_panel(frame, *table_area, table, cursor);
        }
    }

    fn draw_seat_header(&self, frame: &mut Frame, area: Rect) {
        let count_style = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);
        let mut spans = vec![
            Span::raw("Available seats: "),
            Span::styled(self.seat_map.available_seats_count().to_string(), count_style),
        ];
        if let Some(seat_id) = self.seat_map.selected_seat() {
            spans.push(Span::raw("    Selected: "));
            spans.push(Span::styled(
                seat_id.to_string(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        if !self.booking.invited_partners.is_empty() {
            spans.push(Span::raw(format!(
                "    Invited partners: {}",
                self.booking.invited_partners.len()
            )));
        }

        let header = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(header, area);
    }

    fn draw_table_panel(&self, frame: &mut Frame, area: Rect, table: Table, cursor: &SeatScreen) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Table {table}"));
        if cursor.table() == table {
            block = block.border_style(Style::default().fg(Color::Yellow));
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        for (side, column_area) in [Side::Left, Side::Right].into_iter().zip(columns.iter()) {
            let mut lines = vec![Line::from(Span::styled(
                format!(" {side}"),
                Style::default().fg(Color::DarkGray),
            ))];
            for seat in self.seat_map.seats_by_table(table, side) {
                lines.push(seat_line(&seat, cursor.is_on(&seat)));
            }
            let column = Paragraph::new(lines).wrap(Wrap { trim: false });
            frame.render_widget(column, *column_area);
        }
    }

    fn draw_partner_list(&self, frame: &mut Frame, area: Rect, roster: &PartnerScreen) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(roster.title_label());

        if roster.filtered.is_empty() {
            let message = if roster.query.is_some() {
                "Type to search the roster."
            } else {
                "No partners to show."
            };
            let empty = Paragraph::new(message)
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = roster
            .filtered
            .iter()
            .map(|partner| {
                let invited = self.booking.invited_partners.contains(&partner.id);
                let marker = if invited { "[*] " } else { "    " };
                let mut spans = vec![
                    Span::raw(marker.to_string()),
                    Span::styled(
                        partner.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        partner.assignment_label(),
                        Style::default().fg(Color::DarkGray),
                    ),
                ];
                if invited {
                    spans.push(Span::styled(
                        "  invited",
                        Style::default().fg(Color::Green),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray));
        let mut state = ListState::default();
        state.select(Some(roster.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match (&self.screen, &self.mode) {
            (_, Mode::ConfirmQuit(_)) => Line::from(vec![
                Span::styled("[y]", key_style),
                Span::raw(" Quit Anyway   "),
                Span::styled("[n]", key_style),
                Span::raw(" Keep Choosing"),
            ]),
            (_, Mode::Searching(_)) => Line::from(vec![
                Span::styled("[Type]", key_style),
                Span::raw(" Filter   "),
                Span::styled("[↑↓]", key_style),
                Span::raw(" Navigate   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Keep Results   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            (Screen::Seats(_), _) => Line::from(vec![
                Span::styled("[←→↑↓]", key_style),
                Span::raw(" Move   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Pick Seat   "),
                Span::styled("[c]", key_style),
                Span::raw(" Clear   "),
                Span::styled("[Tab]", key_style),
                Span::raw(" Partners   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            (Screen::Partners(_), _) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Navigate   "),
                Span::styled("[Space]", key_style),
                Span::raw(" Invite   "),
                Span::styled("[t]", key_style),
                Span::raw(" Table Filter   "),
                Span::styled("[f]", key_style),
                Span::raw(" Search   "),
                Span::styled("[Tab]", key_style),
                Span::raw(" Seats   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }

    fn draw_search_bar(&self, frame: &mut Frame, area: Rect, state: &SearchState) {
        let height = 3u16.min(area.height);
        let popup_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height,
        };
        frame.render_widget(Clear, popup_area);

        let block = Block::default().borders(Borders::ALL).title("Search Partners");
        let paragraph = Paragraph::new(Span::raw(format!("Search: {}", state.query)))
            .block(block.clone())
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);

        let inner = block.inner(popup_area);
        let cursor_x = inner.x + "Search: ".len() as u16 + state.query.chars().count() as u16;
        let cursor_y = inner.y;
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    fn draw_confirm_quit(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmQuit) {
        let popup_area = centered_rect(50, 25, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().borders(Borders::ALL).title("Quit?");
        let lines = vec![
            Line::from(format!(
                "Seat {} is still selected and will be released.",
                confirm.seat_id
            )),
            Line::from(""),
            Line::from("Press 'y' to quit anyway, 'n' to keep choosing."),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(SeatMap::seeded(), PartnerDirectory::seeded())
    }

    #[test]
    fn picking_a_free_seat_updates_the_booking() {
        let mut app = app();

        // Cursor starts on A1 (occupied); move down to A4 and pick it.
        for _ in 0..3 {
            app.handle_key(KeyCode::Down).unwrap();
        }
        app.handle_key(KeyCode::Enter).unwrap();

        assert_eq!(app.seat_map.selected_seat(), Some("A4"));
        assert_eq!(app.booking().selected_seat.as_deref(), Some("A4"));
    }

    #[test]
    fn picking_an_occupied_seat_reports_instead_of_mutating() {
        let mut app = app();

        // Cursor starts on A1, which is occupied.
        app.handle_key(KeyCode::Enter).unwrap();

        assert_eq!(app.seat_map.selected_seat(), None);
        assert!(app.booking().selected_seat.is_none());
        assert!(matches!(
            app.status,
            Some(StatusMessage {
                kind: StatusKind::Error,
                ..
            })
        ));
    }

    #[test]
    fn clearing_releases_the_seat_and_the_booking_field() {
        let mut app = app();
        for _ in 0..3 {
            app.handle_key(KeyCode::Down).unwrap();
        }
        app.handle_key(KeyCode::Enter).unwrap();
        app.handle_key(KeyCode::Char('c')).unwrap();

        assert_eq!(app.seat_map.selected_seat(), None);
        assert!(app.booking().selected_seat.is_none());
        assert_eq!(app.seat_map.available_seats_count(), 14);
    }

    #[test]
    fn quit_asks_for_confirmation_while_a_seat_is_held() {
        let mut app = app();
        for _ in 0..3 {
            app.handle_key(KeyCode::Down).unwrap();
        }
        app.handle_key(KeyCode::Enter).unwrap();

        let exit = app.handle_key(KeyCode::Char('q')).unwrap();
        assert!(!exit);
        assert!(matches!(app.mode, Mode::ConfirmQuit(_)));

        // Declining keeps the selection and returns to normal handling.
        let exit = app.handle_key(KeyCode::Char('n')).unwrap();
        assert!(!exit);
        assert_eq!(app.seat_map.selected_seat(), Some("A4"));

        // Confirming actually exits.
        app.handle_key(KeyCode::Char('q')).unwrap();
        let exit = app.handle_key(KeyCode::Char('y')).unwrap();
        assert!(exit);
    }

    #[test]
    fn quit_is_immediate_without_a_selection() {
        let mut app = app();
        let exit = app.handle_key(KeyCode::Char('q')).unwrap();
        assert!(exit);
    }

    #[test]
    fn tab_round_trips_between_the_two_screens() {
        let mut app = app();
        app.handle_key(KeyCode::Tab).unwrap();
        assert!(matches!(app.screen, Screen::Partners(_)));

        app.handle_key(KeyCode::Tab).unwrap();
        assert!(matches!(app.screen, Screen::Seats(_)));
    }

    #[test]
    fn space_toggles_a_partner_invite() {
        let mut app = app();
        app.handle_key(KeyCode::Tab).unwrap();

        app.handle_key(KeyCode::Char(' ')).unwrap();
        assert_eq!(app.booking().invited_partners, ["1"]);

        app.handle_key(KeyCode::Char(' ')).unwrap();
        assert!(app.booking().invited_partners.is_empty());
    }

    #[test]
    fn search_filters_live_and_esc_restores_the_roster() {
        let mut app = app();
        app.handle_key(KeyCode::Tab).unwrap();
        app.handle_key(KeyCode::Char('f')).unwrap();
        assert!(matches!(app.mode, Mode::Searching(_)));

        for c in "els".chars() {
            app.handle_key(KeyCode::Char(c)).unwrap();
        }
        if let Screen::Partners(roster) = &app.screen {
            assert_eq!(roster.filtered.len(), 2);
        } else {
            panic!("expected the partner screen");
        }

        app.handle_key(KeyCode::Esc).unwrap();
        assert!(matches!(app.mode, Mode::Normal));
        if let Screen::Partners(roster) = &app.screen {
            assert_eq!(roster.filtered.len(), 11);
        } else {
            panic!("expected the partner screen");
        }
    }
}
