//! Top-selling products component
//!
//! Renders the ranked product list with units sold and revenue

use super::super::utils::format_currency;
use crate::data::TOP_PRODUCTS;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the ranked top-products panel. Rank is the 1-based position.
pub fn render_top_products(f: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for (position, product) in TOP_PRODUCTS.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}. ", position + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:<21}", product.name),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("{:>8}", format_currency(product.revenue)),
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {} units sold", product.units_sold),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .title(Span::styled(
            "TOP SELLING PRODUCTS",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(Span::styled(
            "Best performers this month",
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
