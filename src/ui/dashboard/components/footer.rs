//! Dashboard footer component
//!
//! Renders footer with key hints and the activity pulse

use super::super::state::DashboardState;
use crate::consts::cli_consts::PULSE_PERIOD_TICKS;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the footer key hints.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let pulse = if state.tick % (PULSE_PERIOD_TICKS * 2) < PULSE_PERIOD_TICKS {
        "●"
    } else {
        "○"
    };
    let footer_text = format!("{} [◄/►] Switch Range | [1-4] Jump | [Q] Quit", pulse);

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
