//! Recurrence units and their compact letter codes.

use std::fmt;

/// A recurrence unit as used by frequency and offset tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    /// `d` — day.
    Day,
    /// `w` — week.
    Week,
    /// `m` — month.
    Month,
    /// `y` — year.
    Year,
}

impl Unit {
    /// All units, shortest to longest.
    pub const ALL: [Unit; 4] = [Unit::Day, Unit::Week, Unit::Month, Unit::Year];

    /// Compact single-letter code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Unit::Day => "d",
            Unit::Week => "w",
            Unit::Month => "m",
            Unit::Year => "y",
        }
    }

    /// Expanded English unit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Year => "year",
        }
    }

    /// Approximate calendar length in days, for ordering and clamping.
    ///
    /// Calendar units are irregular; these are the conventional constants
    /// (30-day month, 365-day year), good enough to compare and clamp
    /// intervals against each other.
    #[must_use]
    pub const fn approx_days(self) -> u32 {
        match self {
            Unit::Day => 1,
            Unit::Week => 7,
            Unit::Month => 30,
            Unit::Year => 365,
        }
    }

    /// Look up a unit by its compact letter code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "d" => Some(Unit::Day),
            "w" => Some(Unit::Week),
            "m" => Some(Unit::Month),
            "y" => Some(Unit::Year),
            _ => None,
        }
    }

    /// Look up a unit by its expanded English name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "day" => Some(Unit::Day),
            "week" => Some(Unit::Week),
            "month" => Some(Unit::Month),
            "year" => Some(Unit::Year),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_and_name_round_trip() {
        for unit in Unit::ALL {
            assert_eq!(Unit::from_code(unit.code()), Some(unit));
            assert_eq!(Unit::from_name(unit.name()), Some(unit));
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(Unit::from_code("h"), None);
        assert_eq!(Unit::from_code(""), None);
        assert_eq!(Unit::from_name("fortnight"), None);
    }

    #[test]
    fn approx_days_orders_units() {
        let days: Vec<u32> = Unit::ALL.iter().map(|u| u.approx_days()).collect();
        assert!(days.windows(2).all(|w| w[0] < w[1]));
    }
}
