//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::data::{AlertSeverity, Trend};
use ratatui::prelude::Color;

/// Get a ratatui color for a channel based on its color tag
pub fn channel_color(tag: &str) -> Color {
    match tag {
        "indigo" => Color::LightMagenta,
        "green" => Color::LightGreen,
        "amber" => Color::Yellow,
        "orange" => Color::LightRed,
        _ => Color::Gray,
    }
}

/// Color for a metric's change indicator
pub fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Up => Color::Green,
        Trend::Down => Color::Red,
    }
}

/// Direction glyph shown next to a metric's change
pub fn trend_glyph(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "▲",
        Trend::Down => "▼",
    }
}

/// Color for an alert entry based on its severity
pub fn severity_color(severity: AlertSeverity) -> Color {
    match severity {
        AlertSeverity::Warning => Color::Yellow,
        AlertSeverity::Success => Color::Green,
        AlertSeverity::Info => Color::LightBlue,
    }
}

/// Icon glyph for an alert entry based on its severity
pub fn severity_icon(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Warning => "⚠",
        AlertSeverity::Success => "✔",
        AlertSeverity::Info => "ℹ",
    }
}

/// Format a whole-dollar amount with thousands separators, e.g. `$36,250`
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${}", grouped)
}
