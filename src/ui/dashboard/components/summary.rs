//! KPI summary cards component
//!
//! Renders the four metric cards across the top of the dashboard

use super::super::utils::{trend_color, trend_glyph};
use crate::data::{METRIC_SUMMARIES, MetricSummary};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the row of four KPI cards.
pub fn render_summary_cards(f: &mut Frame, area: Rect) {
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    for (metric, chunk) in METRIC_SUMMARIES.iter().zip(card_chunks.iter()) {
        render_metric_card(f, *chunk, metric);
    }
}

/// Render one KPI card: title, bold value, and colored change indicator.
fn render_metric_card(f: &mut Frame, area: Rect, metric: &MetricSummary) {
    let lines = vec![
        Line::from(Span::styled(
            metric.value,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("{} {}", trend_glyph(metric.trend), metric.change),
                Style::default().fg(trend_color(metric.trend)),
            ),
            Span::styled(" from last month", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .title(metric.title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(card, area);
}
