//! Status badge
//!
//! Bet outcome to colour mapping. Total over every status value: unknown
//! states fall through to the neutral tone.

use ratatui::{
    style::{Color, Style},
    text::Span,
};

use crate::api::BetStatus;

/// Visual category of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Error,
    Neutral,
}

impl BadgeTone {
    pub fn for_status(status: &BetStatus) -> Self {
        match status {
            BetStatus::Won => BadgeTone::Success,
            BetStatus::Lost => BadgeTone::Error,
            BetStatus::Other(_) => BadgeTone::Neutral,
        }
    }

    pub fn style(self) -> Style {
        match self {
            BadgeTone::Success => Style::default().fg(Color::Black).bg(Color::Green),
            BadgeTone::Error => Style::default().fg(Color::White).bg(Color::Red),
            BadgeTone::Neutral => Style::default().fg(Color::Black).bg(Color::Gray),
        }
    }
}

/// Small labelled chip showing a bet's outcome
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBadge {
    pub label: String,
    pub tone: BadgeTone,
}

impl StatusBadge {
    pub fn new(status: &BetStatus) -> Self {
        Self {
            label: status.as_str().to_string(),
            tone: BadgeTone::for_status(status),
        }
    }

    pub fn span(&self) -> Span<'static> {
        Span::styled(format!(" {} ", self.label), self.tone.style())
    }
}
