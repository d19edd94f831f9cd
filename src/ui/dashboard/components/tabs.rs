//! Time-range tab bar component

use super::super::state::DashboardState;
use crate::time_range::TimeRange;

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Tabs};

/// Render the time-range selector. The highlight is the selection's only
/// visible effect; the cards below it show the same figures either way.
pub fn render_time_range_tabs(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let titles: Vec<Line> = TimeRange::ALL
        .iter()
        .map(|range| Line::from(range.label()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.time_range().index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("|")
        .block(
            Block::default()
                .title("TIME RANGE")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(tabs, area);
}
