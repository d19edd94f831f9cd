//! Dashboard state management
//!
//! Contains the dashboard state struct and its selection handling

use crate::time_range::TimeRange;
use crate::ui::app::UIConfig;

use chrono::{DateTime, Local};

/// State backing the dashboard screen.
///
/// The selected time range is the only reactive field; every displayed
/// figure comes from the constant tables in [`crate::data`]. Changing
/// the selection moves the tab highlight and nothing else.
#[derive(Debug)]
pub struct DashboardState {
    /// The currently selected reporting window.
    time_range: TimeRange,
    /// Wall-clock session start, shown in the header.
    pub started_at: DateTime<Local>,
    /// Animation tick counter
    pub tick: usize,
    /// Whether to enable background colors
    pub with_background_color: bool,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(ui_config: UIConfig) -> Self {
        Self {
            time_range: TimeRange::default(),
            started_at: Local::now(),
            tick: 0,
            with_background_color: ui_config.with_background_color,
        }
    }

    /// The currently selected time range.
    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    /// Replace the current selection.
    pub fn set_time_range(&mut self, range: TimeRange) {
        self.time_range = range;
    }

    /// Move the tab highlight one position right, wrapping.
    pub fn select_next_range(&mut self) {
        self.time_range = self.time_range.next();
    }

    /// Move the tab highlight one position left, wrapping.
    pub fn select_previous_range(&mut self) {
        self.time_range = self.time_range.previous();
    }

    /// Advance the animation tick. Called once per frame by the UI loop.
    pub fn update(&mut self) {
        self.tick += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> DashboardState {
        DashboardState::new(UIConfig::new(true))
    }

    #[test]
    fn initial_selection_is_thirty_days() {
        let state = test_state();
        assert_eq!(state.time_range(), TimeRange::ThirtyDays);
        assert_eq!(state.time_range().token(), "30d");
    }

    #[test]
    fn setter_replaces_selection_for_every_token() {
        let mut state = test_state();
        for range in TimeRange::ALL {
            state.set_time_range(range);
            assert_eq!(state.time_range(), range);
        }
    }

    #[test]
    fn cycling_right_four_times_returns_to_start() {
        let mut state = test_state();
        let start = state.time_range();
        for _ in 0..TimeRange::ALL.len() {
            state.select_next_range();
        }
        assert_eq!(state.time_range(), start);
    }

    #[test]
    fn cycling_left_from_first_tab_wraps_to_last() {
        let mut state = test_state();
        state.set_time_range(TimeRange::SevenDays);
        state.select_previous_range();
        assert_eq!(state.time_range(), TimeRange::OneYear);
    }

    #[test]
    fn update_advances_the_tick() {
        let mut state = test_state();
        assert_eq!(state.tick, 0);
        state.update();
        state.update();
        assert_eq!(state.tick, 2);
    }
}
