use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::booking::seat_color;
use crate::models::Seat;

/// Render one seat row for a table column. The status color carries the
/// availability information; the cursor row additionally gets a marker and
/// bold text so it stays visible on terminals that approximate RGB colors.
pub(crate) fn seat_line(seat: &Seat, on_cursor: bool) -> Line<'static> {
    let marker = if on_cursor { "▸ " } else { "  " };
    let mut style = Style::default().fg(seat_color(seat));
    if on_cursor {
        style = style.add_modifier(Modifier::BOLD);
    }

    let mut text = format!("{marker}{:<4}", seat.id);
    if let Some(name) = seat.occupant_label() {
        text.push_str("  ");
        text.push_str(name);
    }

    Line::from(vec![Span::styled(text, style)])
}

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SeatStatus, Side, Table};

    fn seat(status: SeatStatus, occupied_by: Option<&str>) -> Seat {
        Seat {
            id: "A10".to_string(),
            table: Table::A,
            side: Side::Right,
            index: 3,
            status,
            occupied_by: occupied_by.map(str::to_string),
        }
    }

    #[test]
    fn seat_line_includes_the_occupant_when_named() {
        let line = seat_line(&seat(SeatStatus::Occupied, Some("Ethan Wei")), false);
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text, "  A10   Ethan Wei");
    }

    #[test]
    fn cursor_row_gets_the_marker() {
        let line = seat_line(&seat(SeatStatus::Available, None), true);
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert!(text.starts_with("▸ A10"));
    }

    #[test]
    fn centered_rect_stays_inside_the_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(60, 50, area);
        assert!(rect.x >= area.x && rect.y >= area.y);
        assert!(rect.right() <= area.right() && rect.bottom() <= area.bottom());
    }
}
