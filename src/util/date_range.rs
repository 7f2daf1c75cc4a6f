//! Date-range buckets used by every list filter.
//!
//! Ranges are evaluated against an injected `today` so filters stay
//! deterministic in tests; pages pass `clock::today()`.

#[cfg(test)]
#[path = "date_range_test.rs"]
mod date_range_test;

use chrono::{Days, Months, NaiveDate};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DateRange {
    #[default]
    All,
    Today,
    Week,
    Month,
    Year,
}

impl DateRange {
    pub const ALL: [Self; 5] = [Self::All, Self::Today, Self::Week, Self::Month, Self::Year];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Todas las fechas",
            Self::Today => "Hoy",
            Self::Week => "Última semana",
            Self::Month => "Último mes",
            Self::Year => "Último año",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    pub fn from_code(code: &str) -> Self {
        Self::ALL.into_iter().find(|r| r.code() == code).unwrap_or_default()
    }

    /// First day included by this range, or `None` for `All`.
    pub fn start(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::All => None,
            Self::Today => Some(today),
            Self::Week => today.checked_sub_days(Days::new(7)),
            Self::Month => today.checked_sub_months(Months::new(1)),
            Self::Year => today.checked_sub_months(Months::new(12)),
        }
    }

    /// Whether `date` falls in `[start, today]`.
    pub fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        match self.start(today) {
            None => true,
            Some(start) => date >= start && date <= today,
        }
    }

    /// Like `contains`, but a missing date only matches `All`.
    pub fn contains_opt(self, date: Option<NaiveDate>, today: NaiveDate) -> bool {
        match date {
            Some(d) => self.contains(d, today),
            None => self == Self::All,
        }
    }
}
