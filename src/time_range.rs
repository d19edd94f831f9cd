use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// The reporting windows selectable from the dashboard's tab bar.
///
/// The set is closed: no other selection is representable, so the
/// setter needs no runtime validation path.
#[derive(Clone, Default, Copy, PartialEq, Eq)]
pub enum TimeRange {
    /// Trailing seven days.
    SevenDays,
    /// Trailing thirty days. Initial selection.
    #[default]
    ThirtyDays,
    /// Trailing ninety days.
    NinetyDays,
    /// Trailing year.
    OneYear,
}

impl TimeRange {
    /// All ranges, in tab-bar display order.
    pub const ALL: [TimeRange; 4] = [
        TimeRange::SevenDays,
        TimeRange::ThirtyDays,
        TimeRange::NinetyDays,
        TimeRange::OneYear,
    ];

    /// Short identifying token, e.g. `30d`.
    pub fn token(&self) -> &'static str {
        match self {
            TimeRange::SevenDays => "7d",
            TimeRange::ThirtyDays => "30d",
            TimeRange::NinetyDays => "90d",
            TimeRange::OneYear => "1y",
        }
    }

    /// Human-readable tab label.
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::SevenDays => "7 Days",
            TimeRange::ThirtyDays => "30 Days",
            TimeRange::NinetyDays => "90 Days",
            TimeRange::OneYear => "1 Year",
        }
    }

    /// Position of this range within the tab bar.
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|range| range == self)
            .unwrap_or_default()
    }

    /// The range to the right of this one, wrapping at the end.
    pub fn next(&self) -> TimeRange {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The range to the left of this one, wrapping at the start.
    pub fn previous(&self) -> TimeRange {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl FromStr for TimeRange {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "7d" => Ok(TimeRange::SevenDays),
            "30d" => Ok(TimeRange::ThirtyDays),
            "90d" => Ok(TimeRange::NinetyDays),
            "1y" => Ok(TimeRange::OneYear),
            _ => Err(()),
        }
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl Debug for TimeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimeRange::{}, label: {}", self.token(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_is_thirty_days() {
        assert_eq!(TimeRange::default(), TimeRange::ThirtyDays);
        assert_eq!(TimeRange::default().token(), "30d");
    }

    #[test]
    fn tokens_round_trip_through_from_str() {
        for range in TimeRange::ALL {
            let parsed = range.token().parse::<TimeRange>().unwrap();
            assert_eq!(parsed, range);
        }
    }

    #[test]
    fn from_str_rejects_unknown_tokens() {
        assert!("14d".parse::<TimeRange>().is_err());
        assert!("".parse::<TimeRange>().is_err());
        assert!("30".parse::<TimeRange>().is_err());
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("1Y".parse::<TimeRange>().unwrap(), TimeRange::OneYear);
        assert_eq!("30D".parse::<TimeRange>().unwrap(), TimeRange::ThirtyDays);
    }

    #[test]
    fn next_and_previous_cycle_through_all_ranges() {
        let mut range = TimeRange::SevenDays;
        for expected in [
            TimeRange::ThirtyDays,
            TimeRange::NinetyDays,
            TimeRange::OneYear,
            TimeRange::SevenDays,
        ] {
            range = range.next();
            assert_eq!(range, expected);
        }
        assert_eq!(TimeRange::SevenDays.previous(), TimeRange::OneYear);
        assert_eq!(TimeRange::OneYear.previous(), TimeRange::NinetyDays);
    }

    #[test]
    fn index_matches_tab_order() {
        for (i, range) in TimeRange::ALL.iter().enumerate() {
            assert_eq!(range.index(), i);
        }
    }
}
