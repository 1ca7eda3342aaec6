//! Dashboard
//!
//! State lifecycle behind the two views.
//!
//! ## Data Flow
//!
//! 1. `DashboardController::mount` spawns the loader exactly once
//! 2. The loader fetches balance history, then recent bets
//! 3. Each success arrives as a `DashboardEvent` and replaces one slot
//! 4. Views read the current `DashboardState` on every draw

mod controller;
mod source;
mod state;

pub use controller::{DashboardController, DashboardEvent};
pub use source::DashboardSource;
pub use state::{DashboardState, Slot};
