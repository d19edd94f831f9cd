//! Alerts panel component
//!
//! Renders the fixed advisory entries with severity styling

use super::super::utils::{severity_color, severity_icon};
use crate::data::ALERTS;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the alerts panel: icon and title colored by severity, detail
/// line underneath.
pub fn render_alerts(f: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for alert in ALERTS.iter() {
        let color = severity_color(alert.severity);
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", severity_icon(alert.severity)), Style::default().fg(color)),
            Span::styled(
                alert.title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", alert.detail),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::default());
    }

    let block = Block::default()
        .title(Span::styled(
            "ALERTS & NOTIFICATIONS",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(Span::styled(
            "Important updates and warnings",
            Style::default().fg(Color::DarkGray),
        )))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
