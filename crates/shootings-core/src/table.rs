//! Date-indexed incident table
//!
//! The table is the read-only input of every report. Records are kept in
//! date order so that year spans and monthly series fall out of a scan.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::filter::{Jurisdiction, YearRange};
use crate::record::IncidentRecord;

/// Incident records ordered by date
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncidentTable {
    records: Vec<IncidentRecord>,
}

impl IncidentTable {
    /// Build a table, sorting the records by date
    ///
    /// The sort is stable, so records sharing a date keep their input order.
    pub fn from_records(mut records: Vec<IncidentRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        Self { records }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in date order
    pub fn records(&self) -> &[IncidentRecord] {
        &self.records
    }

    /// Iterate over records in date order
    pub fn iter(&self) -> impl Iterator<Item = &IncidentRecord> {
        self.records.iter()
    }

    /// First and last date present
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.records.first()?.date, self.records.last()?.date))
    }

    /// First and last calendar year present
    pub fn year_span(&self) -> Option<YearRange> {
        let (first, last) = self.date_span()?;
        Some(YearRange::spanning(first.year(), last.year()))
    }

    /// Keep the records matching a predicate
    pub fn filter<F>(&self, predicate: F) -> IncidentTable
    where
        F: Fn(&IncidentRecord) -> bool,
    {
        Self {
            records: self
                .records
                .iter()
                .filter(|r| predicate(r))
                .cloned()
                .collect(),
        }
    }

    /// Keep the records inside a jurisdiction
    pub fn in_jurisdiction(&self, jurisdiction: &Jurisdiction) -> IncidentTable {
        match jurisdiction {
            Jurisdiction::Nationwide => self.clone(),
            _ => self.filter(|r| jurisdiction.matches(r)),
        }
    }

    /// Keep the records whose year falls inside the range
    pub fn in_years(&self, years: YearRange) -> IncidentTable {
        self.filter(|r| years.contains(r.date.year()))
    }

    /// Ages of every record that has one
    pub fn ages(&self) -> Vec<f64> {
        self.records.iter().filter_map(|r| r.age).collect()
    }
}

impl FromIterator<IncidentRecord> for IncidentTable {
    fn from_iter<I: IntoIterator<Item = IncidentRecord>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}

/// A calendar month, used as the index of monthly series
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Month containing a date
    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// The following month
    pub fn next(&self) -> Self {
        if self.month >= 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// Every month from January of `years.start()` to December of `years.end()`
    pub fn months_in(years: YearRange) -> Vec<MonthKey> {
        let mut months = Vec::new();
        let last = MonthKey::new(years.end(), 12);
        let mut current = MonthKey::new(years.start(), 1);
        while current <= last {
            months.push(current);
            current = current.next();
        }
        months
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(y: i32, m: u32, d: u32, state: &str, city: &str) -> IncidentRecord {
        IncidentRecord::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), state, city, "Shot")
    }

    #[test]
    fn test_from_records_sorts_by_date() {
        let table = IncidentTable::from_records(vec![
            record(2016, 3, 1, "CA", "Fresno"),
            record(2015, 1, 2, "WA", "Shelton"),
        ]);

        assert_eq!(table.records()[0].state, "WA");
        let (first, last) = table.date_span().unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2015, 1, 2).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2016, 3, 1).unwrap());
    }

    #[test]
    fn test_year_span() {
        let table: IncidentTable = vec![
            record(2017, 6, 1, "CA", "Fresno"),
            record(2015, 1, 2, "WA", "Shelton"),
        ]
        .into_iter()
        .collect();

        let span = table.year_span().unwrap();
        assert_eq!((span.start(), span.end()), (2015, 2017));
        assert!(IncidentTable::default().year_span().is_none());
    }

    #[test]
    fn test_in_jurisdiction_is_case_sensitive() {
        let table = IncidentTable::from_records(vec![
            record(2015, 1, 2, "CA", "Fresno"),
            record(2015, 1, 3, "WA", "Shelton"),
        ]);

        let ca = table.in_jurisdiction(&Jurisdiction::State("CA".to_string()));
        assert_eq!(ca.len(), 1);

        let lower = table.in_jurisdiction(&Jurisdiction::State("ca".to_string()));
        assert!(lower.is_empty());
    }

    #[test]
    fn test_in_years_is_inclusive() {
        let table = IncidentTable::from_records(vec![
            record(2015, 12, 31, "CA", "Fresno"),
            record(2016, 1, 1, "CA", "Fresno"),
            record(2017, 1, 1, "CA", "Fresno"),
        ]);

        let filtered = table.in_years(YearRange::spanning(2015, 2016));
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_months_in_covers_whole_years() {
        let months = MonthKey::months_in(YearRange::spanning(2015, 2016));
        assert_eq!(months.len(), 24);
        assert_eq!(months[0], MonthKey::new(2015, 1));
        assert_eq!(months[23], MonthKey::new(2016, 12));
        assert_eq!(months[12].to_string(), "2016-01");
    }
}
