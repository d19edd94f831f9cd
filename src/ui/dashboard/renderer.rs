//! Dashboard main renderer

use super::components::{
    alerts, channel_chart, footer, header, operational, products, summary, tabs, trend_chart,
};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

/// Render the whole dashboard. Apart from the tab highlight, the output
/// is the same for every time-range selection: the cards and charts read
/// only the constant data tables.
pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(14),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    tabs::render_time_range_tabs(f, main_chunks[1], state);
    summary::render_summary_cards(f, main_chunks[2]);

    let chart_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[3]);

    trend_chart::render_trend_chart(f, chart_chunks[0]);
    channel_chart::render_channel_chart(f, chart_chunks[1]);

    let detail_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(main_chunks[4]);

    products::render_top_products(f, detail_chunks[0]);
    operational::render_operational_metrics(f, detail_chunks[1]);
    alerts::render_alerts(f, detail_chunks[2]);

    footer::render_footer(f, main_chunks[5], state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_range::TimeRange;
    use crate::ui::app::UIConfig;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    const WIDTH: u16 = 200;
    const HEIGHT: u16 = 50;

    fn test_state() -> DashboardState {
        DashboardState::new(UIConfig::new(false))
    }

    fn render_buffer(state: &DashboardState) -> Buffer {
        let backend = TestBackend::new(WIDTH, HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_symbols(buffer: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                text.push_str(buffer.cell((x, y)).unwrap().symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    // Property: rendering under every selectable range succeeds and shows
    // the fixed set of card titles.
    fn every_time_range_renders_the_fixed_card_titles() {
        let mut state = test_state();
        for range in TimeRange::ALL {
            state.set_time_range(range);
            let text = buffer_symbols(&render_buffer(&state));
            for title in [
                "Total Revenue",
                "Total Orders",
                "Avg. Order Value",
                "Customer Satisfaction",
            ] {
                assert!(text.contains(title), "missing {title} under {range}");
            }
        }
    }

    #[test]
    // Current behavior, preserved deliberately: the selection has no
    // observable effect on any displayed figure. Only the tab highlight
    // (a style, not text) changes.
    fn changing_the_selection_leaves_all_displayed_text_unchanged() {
        let mut state = test_state();
        state.set_time_range(TimeRange::ThirtyDays);
        let baseline = buffer_symbols(&render_buffer(&state));

        for range in [
            TimeRange::SevenDays,
            TimeRange::NinetyDays,
            TimeRange::OneYear,
            TimeRange::ThirtyDays,
        ] {
            state.set_time_range(range);
            assert_eq!(buffer_symbols(&render_buffer(&state)), baseline);
        }
    }

    #[test]
    fn selection_still_moves_the_tab_highlight() {
        let mut state = test_state();
        state.set_time_range(TimeRange::SevenDays);
        let seven = render_buffer(&state);
        state.set_time_range(TimeRange::OneYear);
        let year = render_buffer(&state);

        // Same text, different styling on the tab bar.
        assert_eq!(buffer_symbols(&seven), buffer_symbols(&year));
        assert_ne!(seven, year);
    }

    #[test]
    fn summary_cards_show_values_and_colored_deltas() {
        let text = buffer_symbols(&render_buffer(&test_state()));
        assert!(text.contains("$28,450"));
        assert!(text.contains("+12.5%"));
        assert!(text.contains("1,691"));
        assert!(text.contains("$16.83"));
        assert!(text.contains("4.7/5"));
        assert!(text.contains("from last month"));
    }

    #[test]
    // Property: upward deltas render green, downward deltas render red.
    fn delta_glyphs_carry_direction_colors() {
        let buffer = render_buffer(&test_state());
        let mut up = 0;
        let mut down = 0;
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let cell = buffer.cell((x, y)).unwrap();
                match cell.symbol() {
                    "▲" => {
                        assert_eq!(cell.fg, Color::Green);
                        up += 1;
                    }
                    "▼" => {
                        assert_eq!(cell.fg, Color::Red);
                        down += 1;
                    }
                    _ => {}
                }
            }
        }
        assert_eq!(up, 3);
        assert_eq!(down, 1);
    }

    #[test]
    fn top_products_render_five_ranked_rows() {
        let text = buffer_symbols(&render_buffer(&test_state()));
        assert!(text.contains("1. Mini Waffle Maker"));
        assert!(text.contains("2. Portable Blender"));
        assert!(text.contains("3. Insulated Tumbler"));
        assert!(text.contains("4. Skincare Tool Set"));
        assert!(text.contains("5. Personalized Jewelry"));
        assert!(!text.contains("6. "));
        assert!(text.contains("$36,250"));
        assert!(text.contains("1250 units sold"));
    }

    #[test]
    fn channel_chart_labels_all_four_slices() {
        let text = buffer_symbols(&render_buffer(&test_state()));
        for label in ["TikTok Shop", "Amazon", "Etsy", "Own Website"] {
            assert!(text.contains(label), "missing channel {label}");
        }
        for percent in ["35%", "30%", "20%", "15%"] {
            assert!(text.contains(percent), "missing share {percent}");
        }
    }

    #[test]
    fn operational_panel_keeps_literal_values_and_targets() {
        let text = buffer_symbols(&render_buffer(&test_state()));
        assert!(text.contains("Avg. Shipping Time"));
        assert!(text.contains("5.2 days"));
        assert!(text.contains("98.5%"));
        // The units mismatch from the source data survives rendering.
        assert!(text.contains("2.1%"));
        assert!(text.contains("Target: <5%"));
        assert!(text.contains("Target: <$10"));
    }

    #[test]
    fn alerts_panel_lists_the_three_fixed_entries() {
        let text = buffer_symbols(&render_buffer(&test_state()));
        assert!(text.contains("Low Stock Alert"));
        assert!(text.contains("Mini Waffle Maker inventory below 50 units"));
        assert!(text.contains("Sales Milestone"));
        assert!(text.contains("Reached 1,500 orders this month!"));
        assert!(text.contains("Shipping Delay"));
        assert!(text.contains("3 orders delayed due to supplier issues"));
    }

    #[test]
    // Rendering must not panic when the terminal is small.
    fn render_survives_a_small_terminal() {
        let state = test_state();
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_dashboard(f, &state)).unwrap();
    }
}
