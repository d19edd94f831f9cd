pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area for clarity and maintainability.

    use std::time::Duration;

    // =============================================================================
    // UI TIMING
    // =============================================================================

    /// How long the splash screen is shown before the dashboard appears.
    pub const SPLASH_DURATION: Duration = Duration::from_secs(2);

    /// Interval between input polls; also the frame cadence of the UI loop.
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Number of ticks per phase of the footer activity pulse.
    pub const PULSE_PERIOD_TICKS: usize = 10;

    // =============================================================================
    // CHART GEOMETRY
    // =============================================================================

    /// Width of each bar in the revenue/orders trend chart, in cells.
    pub const TREND_BAR_WIDTH: u16 = 3;

    /// Gap between the two bars of one month's group, in cells.
    pub const TREND_BAR_GAP: u16 = 1;

    /// Gap between adjacent month groups, in cells.
    pub const TREND_GROUP_GAP: u16 = 2;
}
