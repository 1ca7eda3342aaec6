//! # Boat Race Trading Dashboard
//!
//! Read-only terminal dashboard for a boat race trading account: balance
//! over time as a line chart and the most recent bets as a status-annotated
//! table.
//!
//! ## Modules
//!
//! - [`api`]: HTTP client for the `/balance` and `/bets` resources
//! - [`dashboard`]: Controller owning the one-shot load and view state
//! - [`views`]: Chart and table widgets
//! - [`tui`]: Full-screen terminal shell
//! - [`snapshot`]: Plain-text/JSON rendering for scripting
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use boatrace_dashboard::{ClientConfig, DashboardClient, DashboardController};
//! use std::sync::Arc;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DashboardClient::new(ClientConfig::default())?;
//!     let mut controller = DashboardController::new(Arc::new(client));
//!
//!     // Fetch both datasets; failures are logged and leave the slot empty
//!     let state = controller.settle().await;
//!
//!     println!(
//!         "{} balance points, {} bets",
//!         state.balance_history().len(),
//!         state.recent_bets().len()
//!     );
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod snapshot;
pub mod tui;
pub mod views;

// Re-export top-level types for convenience
pub use api::{ApiError, BalancePoint, Bet, BetStatus, ClientConfig, DashboardClient};

pub use dashboard::{DashboardController, DashboardEvent, DashboardSource, DashboardState, Slot};

pub use views::{BadgeTone, BalanceChart, BetHistory, BetRow, StatusBadge};

pub use config::{ApiConfig, Config, ConfigError, LoggingConfig, UiConfig};

pub use snapshot::SnapshotFormat;
