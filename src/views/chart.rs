//! Balance Chart
//!
//! Line chart of account balance over date. Dates are categorical: point
//! `i` sits at x = `i`, in the order the backend sent them.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Chart, Dataset, GraphType, Widget},
};

use crate::api::BalancePoint;

/// Above this many points only the first/middle/last dates are labelled
const MAX_DATE_LABELS: usize = 7;

const LINE_COLOR: Color = Color::Rgb(0x88, 0x84, 0xd8);
const AXIS_COLOR: Color = Color::Gray;

/// Balance-over-date chart view
pub struct BalanceChart<'a> {
    points: &'a [BalancePoint],
}

impl<'a> BalanceChart<'a> {
    pub fn new(points: &'a [BalancePoint]) -> Self {
        Self { points }
    }

    /// Plotted (x, y) pairs, one per input point, in input order
    pub fn plot(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, point)| (i as f64, point.balance))
            .collect()
    }

    /// Horizontal extent covering every category
    pub fn x_bounds(&self) -> [f64; 2] {
        [0.0, self.points.len().saturating_sub(1).max(1) as f64]
    }

    /// Vertical extent, padded by a tenth of the range
    pub fn y_bounds(&self) -> [f64; 2] {
        if self.points.is_empty() {
            return [0.0, 1.0];
        }

        let (min, max) = self
            .points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.balance), hi.max(p.balance))
            });

        let range = max - min;
        let padding = if range > 0.0 { range * 0.1 } else { 1.0 };
        [min - padding, max + padding]
    }

    /// Date labels, spread evenly by ratatui so they must land on real indices
    pub fn x_labels(&self) -> Vec<String> {
        let n = self.points.len();
        if n == 1 {
            // ratatui draws no axis labels below two; blank end matches bounds [0, 1]
            return vec![self.points[0].date.clone(), String::new()];
        }
        if n <= MAX_DATE_LABELS {
            return self.points.iter().map(|p| p.date.clone()).collect();
        }

        let last = n - 1;
        let mut indices = vec![0];
        if last % 2 == 0 {
            indices.push(last / 2);
        }
        indices.push(last);

        indices
            .into_iter()
            .map(|i| self.points[i].date.clone())
            .collect()
    }

    fn y_labels(&self) -> Vec<String> {
        let [lo, hi] = self.y_bounds();
        vec![
            format!("{:.0}", lo),
            format!("{:.0}", (lo + hi) / 2.0),
            format!("{:.0}", hi),
        ]
    }
}

impl Widget for BalanceChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let data = self.plot();
        let axis_style = Style::default().fg(AXIS_COLOR);

        let dataset = Dataset::default()
            .name("balance")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(LINE_COLOR))
            .data(&data);

        let chart = Chart::new(vec![dataset])
            .block(Block::bordered().title(Span::styled(
                "Balance History",
                Style::default().add_modifier(Modifier::BOLD),
            )))
            .x_axis(
                Axis::default()
                    .style(axis_style)
                    .bounds(self.x_bounds())
                    .labels(self.x_labels()),
            )
            .y_axis(
                Axis::default()
                    .style(axis_style)
                    .bounds(self.y_bounds())
                    .labels(self.y_labels()),
            );

        chart.render(area, buf);
    }
}
