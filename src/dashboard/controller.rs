//! Dashboard Controller
//!
//! Owns the dashboard state and its one-shot load. Mounting spawns a loader
//! task that fetches the balance history, then the recent bets, and hands
//! each successful result back over a channel. Failures are logged and
//! dropped; the affected slot keeps whatever it held before.

use std::sync::Arc;

use chrono::Local;
use tokio::sync::mpsc;

use super::source::DashboardSource;
use super::state::DashboardState;
use crate::api::{BalancePoint, Bet};

/// Result delivered by the loader task
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    BalanceLoaded(Vec<BalancePoint>),
    BetsLoaded(Vec<Bet>),
}

/// Drives the dashboard's data lifecycle
pub struct DashboardController {
    source: Arc<dyn DashboardSource>,
    state: DashboardState,
    /// Handed to the loader on mount; `None` afterwards
    loader_tx: Option<mpsc::UnboundedSender<DashboardEvent>>,
    events: mpsc::UnboundedReceiver<DashboardEvent>,
    loader_done: bool,
}

impl DashboardController {
    pub fn new(source: Arc<dyn DashboardSource>) -> Self {
        let (loader_tx, events) = mpsc::unbounded_channel();
        Self {
            source,
            state: DashboardState::default(),
            loader_tx: Some(loader_tx),
            events,
            loader_done: false,
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Start the initial load. Only the first call has any effect.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(&mut self) -> bool {
        let Some(events) = self.loader_tx.take() else {
            tracing::debug!("Dashboard already mounted, ignoring");
            return false;
        };

        tokio::spawn(load(Arc::clone(&self.source), events));
        true
    }

    /// Whether the loader may still deliver results
    pub fn is_loading(&self) -> bool {
        self.loader_tx.is_none() && !self.loader_done
    }

    /// Wait for the next loader result. Returns `None` once the loader has
    /// finished. Cancel safe.
    pub async fn next_event(&mut self) -> Option<DashboardEvent> {
        let event = self.events.recv().await;
        if event.is_none() {
            self.loader_done = true;
        }
        event
    }

    /// Apply a loader result to the state
    pub fn apply(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::BalanceLoaded(history) => self.state.balance.replace(history),
            DashboardEvent::BetsLoaded(bets) => self.state.bets.replace(bets),
        }
        self.state.last_sync = Some(Local::now());
    }

    /// Mount if needed and apply results until the loader finishes
    pub async fn settle(&mut self) -> &DashboardState {
        self.mount();
        while let Some(event) = self.next_event().await {
            self.apply(event);
        }
        &self.state
    }
}

/// Sequential one-shot load. Each failure is logged and swallowed on its own,
/// so a failed balance fetch still lets the bets load.
async fn load(source: Arc<dyn DashboardSource>, events: mpsc::UnboundedSender<DashboardEvent>) {
    match source.balance_history().await {
        Ok(history) => {
            tracing::info!(points = history.len(), "Loaded balance history");
            deliver(&events, DashboardEvent::BalanceLoaded(history));
        }
        Err(e) => tracing::error!("Failed to fetch balance history: {}", e),
    }

    match source.recent_bets().await {
        Ok(bets) => {
            tracing::info!(bets = bets.len(), "Loaded recent bets");
            deliver(&events, DashboardEvent::BetsLoaded(bets));
        }
        Err(e) => tracing::error!("Failed to fetch recent bets: {}", e),
    }
}

fn deliver(events: &mpsc::UnboundedSender<DashboardEvent>, event: DashboardEvent) {
    // The dashboard may already be gone; the result is simply dropped
    if events.send(event).is_err() {
        tracing::debug!("Dashboard closed before load completed");
    }
}
