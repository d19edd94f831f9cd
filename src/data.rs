//! Static Dashboard Data
//!
//! Every figure shown on the dashboard is a hardcoded constant. Nothing
//! here is fetched, derived, or mutated after startup.

/// Direction of a metric's month-over-month change.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Trend {
    Up,
    Down,
}

/// Severity of an advisory entry in the alerts panel.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum AlertSeverity {
    Warning,
    Success,
    Info,
}

/// One month of the revenue/orders trend series.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SalesPoint {
    pub label: &'static str,
    pub revenue: u64,
    pub orders: u64,
}

/// One entry of the top-selling-products ranking. Rank is positional.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub name: &'static str,
    pub units_sold: u64,
    pub revenue: u64,
}

/// A sales platform's share of revenue.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ChannelShare {
    pub name: &'static str,
    pub percent_share: u64,
    pub color_tag: &'static str,
}

/// A KPI summary card: pre-formatted value and change strings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MetricSummary {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

/// A fixed operational indicator with its progress-bar percent.
///
/// `progress` is an independently hardcoded display value, not computed
/// from `value`. The Return Rate entry shows 2.1% next to a bar at 21.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OperationalMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub progress: f64,
    pub target: &'static str,
}

/// A fixed advisory entry for the alerts panel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub title: &'static str,
    pub detail: &'static str,
}

/// Monthly revenue and order counts for the trend chart.
pub const SALES_TREND: [SalesPoint; 6] = [
    SalesPoint { label: "Jan", revenue: 4000, orders: 240 },
    SalesPoint { label: "Feb", revenue: 3000, orders: 198 },
    SalesPoint { label: "Mar", revenue: 5000, orders: 300 },
    SalesPoint { label: "Apr", revenue: 4500, orders: 278 },
    SalesPoint { label: "May", revenue: 6000, orders: 350 },
    SalesPoint { label: "Jun", revenue: 5500, orders: 325 },
];

/// Best-performing products, ranked by position.
pub const TOP_PRODUCTS: [ProductRow; 5] = [
    ProductRow { name: "Mini Waffle Maker", units_sold: 1250, revenue: 36250 },
    ProductRow { name: "Portable Blender", units_sold: 980, revenue: 29400 },
    ProductRow { name: "Insulated Tumbler", units_sold: 750, revenue: 22500 },
    ProductRow { name: "Skincare Tool Set", units_sold: 620, revenue: 24800 },
    ProductRow { name: "Personalized Jewelry", units_sold: 450, revenue: 22500 },
];

/// Revenue split across sales platforms. Shares happen to sum to 100
/// but nothing enforces that.
pub const CHANNEL_SHARES: [ChannelShare; 4] = [
    ChannelShare { name: "TikTok Shop", percent_share: 35, color_tag: "indigo" },
    ChannelShare { name: "Amazon", percent_share: 30, color_tag: "green" },
    ChannelShare { name: "Etsy", percent_share: 20, color_tag: "amber" },
    ChannelShare { name: "Own Website", percent_share: 15, color_tag: "orange" },
];

/// The four KPI cards across the top of the dashboard.
pub const METRIC_SUMMARIES: [MetricSummary; 4] = [
    MetricSummary {
        title: "Total Revenue",
        value: "$28,450",
        change: "+12.5%",
        trend: Trend::Up,
    },
    MetricSummary {
        title: "Total Orders",
        value: "1,691",
        change: "+8.2%",
        trend: Trend::Up,
    },
    MetricSummary {
        title: "Avg. Order Value",
        value: "$16.83",
        change: "+3.1%",
        trend: Trend::Up,
    },
    MetricSummary {
        title: "Customer Satisfaction",
        value: "4.7/5",
        change: "-0.1",
        trend: Trend::Down,
    },
];

/// Fixed operational indicators with their hardcoded bar percentages.
pub const OPERATIONAL_METRICS: [OperationalMetric; 4] = [
    OperationalMetric {
        label: "Avg. Shipping Time",
        value: "5.2 days",
        progress: 75.0,
        target: "Target: 7 days",
    },
    OperationalMetric {
        label: "Order Fulfillment Rate",
        value: "98.5%",
        progress: 98.5,
        target: "Target: 95%",
    },
    OperationalMetric {
        label: "Return Rate",
        value: "2.1%",
        progress: 21.0,
        target: "Target: <5%",
    },
    OperationalMetric {
        label: "Customer Acquisition Cost",
        value: "$8.50",
        progress: 60.0,
        target: "Target: <$10",
    },
];

/// Fixed advisory entries for the alerts panel.
pub const ALERTS: [Alert; 3] = [
    Alert {
        severity: AlertSeverity::Warning,
        title: "Low Stock Alert",
        detail: "Mini Waffle Maker inventory below 50 units",
    },
    Alert {
        severity: AlertSeverity::Success,
        title: "Sales Milestone",
        detail: "Reached 1,500 orders this month!",
    },
    Alert {
        severity: AlertSeverity::Info,
        title: "Shipping Delay",
        detail: "3 orders delayed due to supplier issues",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_series_has_six_ordered_months() {
        assert_eq!(SALES_TREND.len(), 6);
        let labels: Vec<&str> = SALES_TREND.iter().map(|p| p.label).collect();
        assert_eq!(labels, ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
    }

    #[test]
    fn top_products_has_exactly_five_rows_in_fixed_order() {
        assert_eq!(TOP_PRODUCTS.len(), 5);
        assert_eq!(TOP_PRODUCTS[0].name, "Mini Waffle Maker");
        assert_eq!(TOP_PRODUCTS[4].name, "Personalized Jewelry");
    }

    #[test]
    fn channel_shares_are_four_and_sum_to_one_hundred() {
        assert_eq!(CHANNEL_SHARES.len(), 4);
        let total: u64 = CHANNEL_SHARES.iter().map(|c| c.percent_share).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn summary_cards_carry_the_fixed_titles() {
        let titles: Vec<&str> = METRIC_SUMMARIES.iter().map(|m| m.title).collect();
        assert_eq!(
            titles,
            [
                "Total Revenue",
                "Total Orders",
                "Avg. Order Value",
                "Customer Satisfaction"
            ]
        );
    }

    #[test]
    fn only_customer_satisfaction_trends_down() {
        let down: Vec<&str> = METRIC_SUMMARIES
            .iter()
            .filter(|m| m.trend == Trend::Down)
            .map(|m| m.title)
            .collect();
        assert_eq!(down, ["Customer Satisfaction"]);
    }

    #[test]
    // The source data shows a 2.1% return rate next to a bar at 21.
    // The mismatch is carried as-is; do not "fix" it here.
    fn return_rate_bar_keeps_the_units_mismatch() {
        let return_rate = OPERATIONAL_METRICS
            .iter()
            .find(|m| m.label == "Return Rate")
            .unwrap();
        assert_eq!(return_rate.value, "2.1%");
        assert_eq!(return_rate.progress, 21.0);
    }

    #[test]
    fn alerts_are_three_fixed_entries() {
        assert_eq!(ALERTS.len(), 3);
        assert_eq!(ALERTS[0].severity, AlertSeverity::Warning);
        assert_eq!(ALERTS[1].severity, AlertSeverity::Success);
        assert_eq!(ALERTS[2].severity, AlertSeverity::Info);
    }
}
