//! Revenue & orders trend chart component
//!
//! Renders the monthly series as a grouped bar chart

use crate::consts::cli_consts::{TREND_BAR_GAP, TREND_BAR_WIDTH, TREND_GROUP_GAP};
use crate::data::SALES_TREND;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders};

const REVENUE_COLOR: Color = Color::LightMagenta;
const ORDERS_COLOR: Color = Color::LightGreen;

/// Render the grouped revenue/orders bar chart. Both series share one
/// category axis, as in the source chart.
pub fn render_trend_chart(f: &mut Frame, area: Rect) {
    let legend = Line::from(vec![
        Span::styled("■ Revenue ($)", Style::default().fg(REVENUE_COLOR)),
        Span::raw("  "),
        Span::styled("■ Orders", Style::default().fg(ORDERS_COLOR)),
    ]);

    let mut chart = BarChart::default()
        .block(
            Block::default()
                .title(Span::styled(
                    "REVENUE & ORDERS TREND",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
                .title_bottom(legend)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .bar_width(TREND_BAR_WIDTH)
        .bar_gap(TREND_BAR_GAP)
        .group_gap(TREND_GROUP_GAP);

    for point in SALES_TREND.iter() {
        let group = BarGroup::default()
            .label(Line::from(point.label).centered())
            .bars(&[
                Bar::default()
                    .value(point.revenue)
                    .text_value(String::new())
                    .style(Style::default().fg(REVENUE_COLOR)),
                Bar::default()
                    .value(point.orders)
                    .text_value(String::new())
                    .style(Style::default().fg(ORDERS_COLOR)),
            ]);
        chart = chart.data(group);
    }

    f.render_widget(chart, area);
}
