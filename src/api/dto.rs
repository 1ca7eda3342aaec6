//! Data Transfer Objects
//!
//! Records returned by the dashboard API and the envelopes that wrap them.
//! These types are deserialized from JSON exactly once, at the client boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================
// BALANCE DTOs
// ============================================

/// One (date, balance) sample in the account's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalancePoint {
    /// Calendar date, used verbatim as an axis label
    pub date: String,
    /// Account balance at that date
    pub balance: f64,
}

/// Envelope returned by `GET /balance`
#[derive(Debug, Deserialize)]
pub struct BalanceEnvelope {
    pub history: Vec<BalancePoint>,
}

// ============================================
// BET DTOs
// ============================================

/// One wagered entry
///
/// Unknown fields sent by the backend (`created_at`, `result_checked_at`, ...)
/// are ignored. Every field listed here except `return_amount` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bet {
    pub date: String,
    /// Race venue identifier
    pub place_id: i64,
    /// Venue-local race index
    pub race_number: i64,
    /// Selected outcome, opaque to the dashboard
    pub combination: String,
    pub odds: f64,
    /// Stake
    pub amount: f64,
    /// Payout, 0 when lost. Absent until the race is settled.
    #[serde(default)]
    pub return_amount: Option<f64>,
    pub status: BetStatus,
}

/// Envelope returned by `GET /bets`
#[derive(Debug, Deserialize)]
pub struct BetsEnvelope {
    pub bets: Vec<Bet>,
}

/// Outcome of a bet
///
/// Open enumeration: any value other than `won`/`lost` is kept verbatim
/// so new backend states still display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BetStatus {
    Won,
    Lost,
    Other(String),
}

impl BetStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BetStatus::Won => "won",
            BetStatus::Lost => "lost",
            BetStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for BetStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "won" => BetStatus::Won,
            "lost" => BetStatus::Lost,
            _ => BetStatus::Other(raw),
        }
    }
}

impl From<&str> for BetStatus {
    fn from(raw: &str) -> Self {
        BetStatus::from(raw.to_string())
    }
}

impl From<BetStatus> for String {
    fn from(status: BetStatus) -> Self {
        match status {
            BetStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
