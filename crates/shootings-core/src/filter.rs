//! Report filters: jurisdiction and year window
//!
//! When both a state and a city are supplied, the city wins. Every
//! report resolves its filters through [`Scope`], so the rule holds
//! everywhere.

use std::fmt;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};
use crate::record::IncidentRecord;
use crate::table::IncidentTable;

/// Geographic restriction of a report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Jurisdiction {
    #[default]
    Nationwide,
    State(String),
    City(String),
}

impl Jurisdiction {
    /// Resolve optional state/city filters; a city takes precedence and
    /// an empty name counts as absent
    pub fn from_options(state: Option<&str>, city: Option<&str>) -> Self {
        let state = state.filter(|s| !s.is_empty());
        let city = city.filter(|c| !c.is_empty());
        match (state, city) {
            (_, Some(city)) => Jurisdiction::City(city.to_string()),
            (Some(state), None) => Jurisdiction::State(state.to_string()),
            (None, None) => Jurisdiction::Nationwide,
        }
    }

    /// Exact, case-sensitive match
    pub fn matches(&self, record: &IncidentRecord) -> bool {
        match self {
            Jurisdiction::Nationwide => true,
            Jurisdiction::State(state) => &record.state == state,
            Jurisdiction::City(city) => &record.city == city,
        }
    }

    /// Title fragment, e.g. " in the State of CA"
    pub fn title_suffix(&self) -> String {
        match self {
            Jurisdiction::Nationwide => " in the US".to_string(),
            Jurisdiction::State(state) => format!(" in the State of {}", state),
            Jurisdiction::City(city) => format!(" in the City of {}", city),
        }
    }
}

/// Inclusive range of calendar years, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawYearRange")]
pub struct YearRange {
    start: i32,
    end: i32,
}

/// Unchecked wire form of [`YearRange`]
#[derive(Deserialize)]
struct RawYearRange {
    start: i32,
    end: i32,
}

impl TryFrom<RawYearRange> for YearRange {
    type Error = ReportError;

    fn try_from(raw: RawYearRange) -> ReportResult<Self> {
        YearRange::new(raw.start, raw.end)
    }
}

impl YearRange {
    /// Create a range, rejecting `start > end`
    pub fn new(start: i32, end: i32) -> ReportResult<Self> {
        if start > end {
            return Err(ReportError::InvalidYearRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range covering both years regardless of argument order
    pub fn spanning(a: i32, b: i32) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A single year
    pub fn year(year: i32) -> Self {
        Self::spanning(year, year)
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn contains(&self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }

    /// Title fragment, e.g. " in the Years 2015-2016"
    pub fn title_suffix(&self) -> String {
        format!(" in the Years {}", self)
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Filters shared by the reports: jurisdiction plus an optional year window
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    pub state: Option<String>,
    pub city: Option<String>,
    pub time_interval: Option<YearRange>,
}

impl Scope {
    /// No filters: the whole US, every year
    pub fn nationwide() -> Self {
        Self::default()
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_years(mut self, years: YearRange) -> Self {
        self.time_interval = Some(years);
        self
    }

    /// Effective jurisdiction after applying the city-first rule
    pub fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::from_options(self.state.as_deref(), self.city.as_deref())
    }

    /// Year range shown in titles: the explicit interval, otherwise the
    /// span of the unfiltered table
    pub fn effective_years(&self, table: &IncidentTable) -> Option<YearRange> {
        self.time_interval.or_else(|| table.year_span())
    }

    /// Apply the jurisdiction and year filters
    pub fn apply(&self, table: &IncidentTable) -> IncidentTable {
        let jurisdiction = self.jurisdiction();
        let years = self.time_interval;
        table.filter(|r| {
            jurisdiction.matches(r) && years.map_or(true, |y| y.contains(r.date.year()))
        })
    }

    /// Report title: base, jurisdiction, then the effective years when known
    pub fn title(&self, base: &str, table: &IncidentTable) -> String {
        let mut title = format!("{}{}", base, self.jurisdiction().title_suffix());
        if let Some(years) = self.effective_years(table) {
            title.push_str(&years.title_suffix());
        }
        title
    }
}
