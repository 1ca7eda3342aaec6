//! Dashboard data source
//!
//! The controller reads through this trait so the load lifecycle is
//! independent of the HTTP client.

use async_trait::async_trait;

use crate::api::{ApiResult, BalancePoint, Bet, DashboardClient};

/// Anything that can supply the two dashboard datasets
#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// Account balance history, oldest first
    async fn balance_history(&self) -> ApiResult<Vec<BalancePoint>>;

    /// Most recent bets
    async fn recent_bets(&self) -> ApiResult<Vec<Bet>>;
}

#[async_trait]
impl DashboardSource for DashboardClient {
    async fn balance_history(&self) -> ApiResult<Vec<BalancePoint>> {
        self.fetch_balance_history().await
    }

    async fn recent_bets(&self) -> ApiResult<Vec<Bet>> {
        self.fetch_recent_bets().await
    }
}
