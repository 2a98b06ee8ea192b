//! Comparison selection for the dashboard.
//!
//! When comparative review mode is on, row clicks toggle membership in an
//! ordered selection of at most [`MAX_COMPARE`] record ids instead of opening
//! the detail panel. Once two or more are selected the comparison table can
//! be shown.

use thiserror::Error;

/// Upper bound on records compared side by side.
pub const MAX_COMPARE: usize = 3;

/// Observable phase of the comparison workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparePhase {
    /// Comparison mode is off.
    Inactive,
    /// Mode is on with fewer than two records selected.
    Collecting,
    /// Two or more records selected, comparison table hidden.
    Ready,
    /// Comparison table shown.
    Comparing,
}

/// Result of a successful toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Rejected comparison interactions. None of these change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("You can compare a maximum of {max} records at a time.")]
    LimitReached { max: usize },
    #[error("Comparative review mode is not enabled.")]
    ModeInactive,
    #[error("Select at least two records to compare.")]
    NotReady,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonState {
    enabled: bool,
    selected: Vec<u32>,
    showing_table: bool,
}

impl ComparisonState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ComparePhase {
        if !self.enabled {
            ComparePhase::Inactive
        } else if self.showing_table {
            ComparePhase::Comparing
        } else if self.selected.len() >= 2 {
            ComparePhase::Ready
        } else {
            ComparePhase::Collecting
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Selected ids in the order they were picked.
    pub fn selected(&self) -> &[u32] {
        &self.selected
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected.contains(&id)
    }

    /// One-based position of `id` in the selection.
    pub fn position(&self, id: u32) -> Option<usize> {
        self.selected.iter().position(|s| *s == id).map(|i| i + 1)
    }

    /// Turns comparison mode on or off. Both directions start from an empty
    /// selection with the comparison table hidden.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.selected.clear();
        self.showing_table = false;
        tracing::debug!(enabled, "comparison mode changed");
    }

    pub fn toggle_mode(&mut self) {
        self.set_enabled(!self.enabled);
    }

    /// Adds `id` to the selection, or removes it if already present.
    ///
    /// Any membership change hides the comparison table. Adding a fourth
    /// record is rejected and leaves the selection untouched.
    pub fn toggle(&mut self, id: u32) -> Result<Toggle, SelectionError> {
        if !self.enabled {
            return Err(SelectionError::ModeInactive);
        }

        if let Some(index) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(index);
            self.showing_table = false;
            return Ok(Toggle::Removed);
        }

        if self.selected.len() >= MAX_COMPARE {
            tracing::info!(id, "comparison limit reached");
            return Err(SelectionError::LimitReached { max: MAX_COMPARE });
        }

        self.selected.push(id);
        self.showing_table = false;
        Ok(Toggle::Added)
    }

    /// Shows the comparison table. Only valid once two records are selected.
    pub fn compare(&mut self) -> Result<(), SelectionError> {
        match self.phase() {
            ComparePhase::Inactive => Err(SelectionError::ModeInactive),
            ComparePhase::Collecting => Err(SelectionError::NotReady),
            ComparePhase::Ready | ComparePhase::Comparing => {
                self.showing_table = true;
                Ok(())
            }
        }
    }

    /// Empties the selection and hides the table; the mode stays as it is.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.showing_table = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: u32 = 1;
    const B: u32 = 2;
    const C: u32 = 3;
    const D: u32 = 4;

    fn enabled() -> ComparisonState {
        let mut state = ComparisonState::new();
        state.set_enabled(true);
        state
    }

    #[test]
    fn starts_inactive() {
        assert_eq!(ComparisonState::new().phase(), ComparePhase::Inactive);
    }

    #[test]
    fn enabling_starts_collecting_with_empty_selection() {
        let state = enabled();
        assert_eq!(state.phase(), ComparePhase::Collecting);
        assert!(state.selected().is_empty());
    }

    #[test]
    fn two_selections_make_it_ready() {
        let mut state = enabled();
        assert_eq!(state.toggle(A), Ok(Toggle::Added));
        assert_eq!(state.phase(), ComparePhase::Collecting);
        assert_eq!(state.toggle(B), Ok(Toggle::Added));
        assert_eq!(state.phase(), ComparePhase::Ready);
    }

    #[test]
    fn fourth_selection_is_rejected_without_change() {
        let mut state = enabled();
        for id in [A, B, C] {
            state.toggle(id).unwrap();
        }
        let before = state.clone();

        assert_eq!(
            state.toggle(D),
            Err(SelectionError::LimitReached { max: MAX_COMPARE })
        );
        assert_eq!(state, before);
        assert_eq!(state.selected(), &[A, B, C]);
    }

    #[test]
    fn limit_message_mentions_maximum() {
        let message = SelectionError::LimitReached { max: 3 }.to_string();
        assert!(message.contains("maximum of 3"));
    }

    #[test]
    fn deselecting_while_comparing_returns_to_ready() {
        let mut state = enabled();
        for id in [A, B, C] {
            state.toggle(id).unwrap();
        }
        state.compare().unwrap();
        assert_eq!(state.phase(), ComparePhase::Comparing);

        assert_eq!(state.toggle(B), Ok(Toggle::Removed));
        assert_eq!(state.selected(), &[A, C]);
        assert_eq!(state.phase(), ComparePhase::Ready);

        // comparing the remaining pair needs another explicit compare
        assert_eq!(state.compare(), Ok(()));
        assert_eq!(state.phase(), ComparePhase::Comparing);
    }

    #[test]
    fn dropping_below_two_returns_to_collecting() {
        let mut state = enabled();
        state.toggle(A).unwrap();
        state.toggle(B).unwrap();
        state.compare().unwrap();

        state.toggle(A).unwrap();
        assert_eq!(state.phase(), ComparePhase::Collecting);
        assert_eq!(state.selected(), &[B]);
    }

    #[test]
    fn compare_requires_two_records() {
        let mut state = enabled();
        assert_eq!(state.compare(), Err(SelectionError::NotReady));
        state.toggle(A).unwrap();
        assert_eq!(state.compare(), Err(SelectionError::NotReady));
        state.toggle(B).unwrap();
        assert_eq!(state.compare(), Ok(()));
        assert_eq!(state.phase(), ComparePhase::Comparing);
    }

    #[test]
    fn toggling_requires_mode() {
        let mut state = ComparisonState::new();
        assert_eq!(state.toggle(A), Err(SelectionError::ModeInactive));
        assert_eq!(state.compare(), Err(SelectionError::ModeInactive));
    }

    #[test]
    fn disabling_clears_everything() {
        let mut state = enabled();
        state.toggle(A).unwrap();
        state.toggle(B).unwrap();
        state.compare().unwrap();

        state.toggle_mode();
        assert_eq!(state.phase(), ComparePhase::Inactive);
        assert!(state.selected().is_empty());
    }

    #[test]
    fn clear_returns_to_collecting() {
        let mut state = enabled();
        state.toggle(A).unwrap();
        state.toggle(C).unwrap();
        state.compare().unwrap();

        state.clear();
        assert_eq!(state.phase(), ComparePhase::Collecting);
        assert!(state.selected().is_empty());
    }

    #[test]
    fn positions_follow_selection_order() {
        let mut state = enabled();
        state.toggle(C).unwrap();
        state.toggle(A).unwrap();
        assert_eq!(state.position(C), Some(1));
        assert_eq!(state.position(A), Some(2));
        assert_eq!(state.position(B), None);
    }
}
