//! Sales-by-channel chart component
//!
//! Renders the revenue split as one colored share bar per platform

use super::super::utils::channel_color;
use crate::data::CHANNEL_SHARES;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Render the channel distribution panel. Each platform gets a labeled,
/// colored bar proportional to its share of revenue.
pub fn render_channel_chart(f: &mut Frame, area: Rect) {
    let label_width = CHANNEL_SHARES
        .iter()
        .map(|share| share.name.len())
        .max()
        .unwrap_or_default();
    // Label, one space, bar, then " 100%" at worst.
    let bar_space = (area.width as usize).saturating_sub(label_width + 10);

    let mut lines = Vec::new();
    for share in CHANNEL_SHARES.iter() {
        let filled = (share.percent_share as usize * bar_space) / 100;
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<width$} ", share.name, width = label_width),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                "█".repeat(filled),
                Style::default().fg(channel_color(share.color_tag)),
            ),
            Span::styled(
                format!(" {}%", share.percent_share),
                Style::default()
                    .fg(channel_color(share.color_tag))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::default());
    }

    let block = Block::default()
        .title(Span::styled(
            "SALES BY CHANNEL",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(Span::styled(
            "Revenue distribution across platforms",
            Style::default().fg(Color::DarkGray),
        )))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
