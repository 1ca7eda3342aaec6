//! Dashboard state
//!
//! Two independent data slots plus the time of the last successful load.
//! Only the controller mutates this; views get borrowed slices.

use chrono::{DateTime, Local};

use crate::api::{BalancePoint, Bet};

/// Lifecycle of one dataset
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<T> {
    /// Nothing loaded yet (or the load failed)
    Initial,
    /// Backend data, in the order it was received
    Loaded(Vec<T>),
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot::Initial
    }
}

impl<T> Slot<T> {
    /// Current items; an unloaded slot reads as empty
    pub fn items(&self) -> &[T] {
        match self {
            Slot::Initial => &[],
            Slot::Loaded(items) => items,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Slot::Loaded(_))
    }

    /// Replace the contents wholesale
    pub fn replace(&mut self, items: Vec<T>) {
        *self = Slot::Loaded(items);
    }
}

/// Transient view state owned by the dashboard controller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub balance: Slot<BalancePoint>,
    pub bets: Slot<Bet>,
    pub last_sync: Option<DateTime<Local>>,
}

impl DashboardState {
    pub fn balance_history(&self) -> &[BalancePoint] {
        self.balance.items()
    }

    pub fn recent_bets(&self) -> &[Bet] {
        self.bets.items()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_slot_reads_empty() {
        let state = DashboardState::default();
        assert!(state.balance_history().is_empty());
        assert!(state.recent_bets().is_empty());
        assert!(!state.balance.is_loaded());
        assert!(state.last_sync.is_none());
    }

    #[test]
    fn test_replace_marks_loaded() {
        let mut slot: Slot<BalancePoint> = Slot::default();
        slot.replace(Vec::new());
        assert!(slot.is_loaded());
        assert!(slot.items().is_empty());

        slot.replace(vec![BalancePoint { date: "2024-01-01".to_string(), balance: 10.0 }]);
        assert_eq!(slot.items().len(), 1);
    }
}
