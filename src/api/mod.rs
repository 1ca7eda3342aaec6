//! Dashboard API
//!
//! Read-only client for the trading backend.
//!
//! # Endpoints
//!
//! - `GET {base}/balance` - `{ "history": [BalancePoint] }`
//! - `GET {base}/bets` - `{ "bets": [Bet] }`
//!
//! # Example
//!
//! ```rust,no_run
//! use boatrace_dashboard::api::{ClientConfig, DashboardClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DashboardClient::new(ClientConfig::default())?;
//!
//!     let history = client.fetch_balance_history().await?;
//!     let bets = client.fetch_recent_bets().await?;
//!
//!     println!("{} balance points, {} bets", history.len(), bets.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod dto;
pub mod error;

pub use client::{ClientConfig, DashboardClient, DEFAULT_API_BASE};
pub use dto::{BalanceEnvelope, BalancePoint, Bet, BetStatus, BetsEnvelope};
pub use error::{ApiError, ApiResult};
