//! Dashboard views
//!
//! Stateless `ratatui` widgets built from borrowed slices of dashboard data.

pub mod badge;
pub mod chart;
pub mod history;

pub use badge::{BadgeTone, StatusBadge};
pub use chart::BalanceChart;
pub use history::{venue_race_label, BetHistory, BetRow, HEADERS};
