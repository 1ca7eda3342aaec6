//! Bet History Table
//!
//! One row per bet, in the order received, with a coloured outcome badge.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Cell, Row, Table, Widget},
};

use super::badge::{BadgeTone, StatusBadge};
use crate::api::Bet;

/// Column headers, left to right
pub const HEADERS: [&str; 7] = ["Date", "Venue/R", "Combination", "Odds", "Stake", "Return", "Result"];

const WIDTHS: [Constraint; 7] = [
    Constraint::Length(10),
    Constraint::Length(9),
    Constraint::Min(11),
    Constraint::Length(7),
    Constraint::Length(9),
    Constraint::Length(9),
    Constraint::Length(10),
];

/// Venue/race label, e.g. `3 / 5R`
pub fn venue_race_label(place_id: i64, race_number: i64) -> String {
    format!("{} / {}R", place_id, race_number)
}

/// Display-ready fields of one bet
#[derive(Debug, Clone, PartialEq)]
pub struct BetRow {
    pub date: String,
    pub venue_race: String,
    pub combination: String,
    pub odds: String,
    pub amount: String,
    pub return_amount: String,
    pub badge: StatusBadge,
}

impl BetRow {
    pub fn from_bet(bet: &Bet) -> Self {
        Self {
            date: bet.date.clone(),
            venue_race: venue_race_label(bet.place_id, bet.race_number),
            combination: bet.combination.clone(),
            odds: bet.odds.to_string(),
            amount: bet.amount.to_string(),
            return_amount: bet
                .return_amount
                .map(|value| value.to_string())
                .unwrap_or_default(),
            badge: StatusBadge::new(&bet.status),
        }
    }

    /// Text cells in header order, badge label last
    pub fn cells(&self) -> [&str; 7] {
        [
            self.date.as_str(),
            self.venue_race.as_str(),
            self.combination.as_str(),
            self.odds.as_str(),
            self.amount.as_str(),
            self.return_amount.as_str(),
            self.badge.label.as_str(),
        ]
    }
}

/// Recent bets table view
pub struct BetHistory<'a> {
    bets: &'a [Bet],
}

impl<'a> BetHistory<'a> {
    pub fn new(bets: &'a [Bet]) -> Self {
        Self { bets }
    }

    pub fn rows(&self) -> Vec<BetRow> {
        self.bets.iter().map(BetRow::from_bet).collect()
    }
}

impl Widget for BetHistory<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(HEADERS).style(Style::default().add_modifier(Modifier::BOLD));

        let rows = self.rows().into_iter().map(|row| {
            let badge = row.badge.span();
            Row::new(vec![
                Cell::from(row.date),
                Cell::from(row.venue_race),
                Cell::from(row.combination),
                Cell::from(row.odds),
                Cell::from(row.amount),
                Cell::from(row.return_amount),
                Cell::from(badge),
            ])
        });

        let table = Table::new(rows, WIDTHS).header(header).block(Block::bordered().title(
            Span::styled("Recent Bets", Style::default().add_modifier(Modifier::BOLD)),
        ));

        Widget::render(table, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::BetStatus;
    use ratatui::style::Color;

    fn bet(place_id: i64, race_number: i64, status: &str) -> Bet {
        Bet {
            date: "2024-01-01".to_string(),
            place_id,
            race_number,
            combination: "1-2-3".to_string(),
            odds: 4.5,
            amount: 1000.0,
            return_amount: Some(4500.0),
            status: BetStatus::from(status),
        }
    }

    fn buffer_lines(buf: &Buffer) -> Vec<String> {
        let width = buf.area.width as usize;
        buf.content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    #[test]
    fn test_won_bet_row() {
        let bets = vec![bet(3, 5, "won")];
        let rows = BetHistory::new(&bets).rows();

        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].cells(),
            ["2024-01-01", "3 / 5R", "1-2-3", "4.5", "1000", "4500", "won"]
        );
        assert_eq!(rows[0].badge.tone, BadgeTone::Success);
    }

    #[test]
    fn test_rows_follow_input_order() {
        let bets = vec![bet(12, 1, "lost"), bet(1, 12, "pending"), bet(12, 1, "lost")];
        let rows = BetHistory::new(&bets).rows();

        let labels: Vec<_> = rows.iter().map(|r| r.venue_race.as_str()).collect();
        assert_eq!(labels, vec!["12 / 1R", "1 / 12R", "12 / 1R"]);

        let tones: Vec<_> = rows.iter().map(|r| r.badge.tone).collect();
        assert_eq!(tones, vec![BadgeTone::Error, BadgeTone::Neutral, BadgeTone::Error]);
    }

    #[test]
    fn test_values_shown_verbatim() {
        let mut negative = bet(4, 7, "lost");
        negative.odds = 12.25;
        negative.amount = 300.0;
        negative.return_amount = Some(0.0);

        let row = BetRow::from_bet(&negative);
        assert_eq!(row.odds, "12.25");
        assert_eq!(row.amount, "300");
        assert_eq!(row.return_amount, "0");
    }

    #[test]
    fn test_unsettled_bet_has_empty_return_cell() {
        let mut pending = bet(1, 3, "pending");
        pending.return_amount = None;

        let row = BetRow::from_bet(&pending);
        assert_eq!(
            row.cells(),
            ["2024-01-01", "1 / 3R", "1-2-3", "4.5", "1000", "", "pending"]
        );
        assert_eq!(row.badge.tone, BadgeTone::Neutral);
    }

    #[test]
    fn test_empty_table_renders_header_only() {
        assert!(BetHistory::new(&[]).rows().is_empty());

        let area = Rect::new(0, 0, 90, 6);
        let mut buf = Buffer::empty(area);
        BetHistory::new(&[]).render(area, &mut buf);

        let lines = buffer_lines(&buf);
        assert!(lines[0].contains("Recent Bets"));
        assert!(lines[1].contains("Combination"));
        assert!(lines[2..5].iter().all(|line| line.trim_matches(|c| c == '│' || c == ' ').is_empty()));
    }

    #[test]
    fn test_rendered_row_has_styled_badge() {
        let bets = vec![bet(3, 5, "won")];
        let area = Rect::new(0, 0, 90, 6);
        let mut buf = Buffer::empty(area);
        BetHistory::new(&bets).render(area, &mut buf);

        let lines = buffer_lines(&buf);
        let y = lines
            .iter()
            .position(|line| line.contains("3 / 5R"))
            .expect("bet row rendered");
        assert!(lines[y].contains("1-2-3"));
        assert!(lines[y].contains("4500"));

        // Borders are multi-byte, so count columns in chars
        let byte = lines[y].find(" won ").expect("badge rendered");
        let x = lines[y][..byte].chars().count() + 1;
        assert_eq!(buf[(x as u16, y as u16)].bg, Color::Green);
    }
}
