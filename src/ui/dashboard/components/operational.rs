//! Operational metrics component
//!
//! Renders the four fixed progress indicators

use crate::data::{OPERATIONAL_METRICS, OperationalMetric};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render the operational indicators panel. Every value, bar percent and
/// target caption is a literal from the data tables; the bar is not
/// computed from the displayed value.
pub fn render_operational_metrics(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            "OPERATIONAL METRICS",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(Span::styled(
            "Key performance indicators",
            Style::default().fg(Color::DarkGray),
        )))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let metric_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(inner);

    for (metric, chunk) in OPERATIONAL_METRICS.iter().zip(metric_chunks.iter()) {
        render_indicator(f, *chunk, metric);
    }
}

fn render_indicator(f: &mut Frame, area: Rect, metric: &OperationalMetric) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let pad = (area.width as usize).saturating_sub(metric.label.len() + metric.value.len());
    let label_line = Line::from(vec![
        Span::styled(metric.label, Style::default().fg(Color::White)),
        Span::raw(" ".repeat(pad)),
        Span::styled(
            metric.value,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(label_line), rows[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio((metric.progress / 100.0).clamp(0.0, 1.0))
        .label("");
    f.render_widget(gauge, rows[1]);

    let target = Paragraph::new(metric.target).style(Style::default().fg(Color::DarkGray));
    f.render_widget(target, rows[2]);
}
