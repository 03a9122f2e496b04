//! Pivot tables and value counts
//!
//! A `PivotTable` is a dense rows × columns matrix of counts. Row and
//! column labels start out sorted; missing combinations are zero.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::chart::Series;
use crate::record::{Attribute, IncidentRecord};

/// Counts keyed by (row label, column label)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PivotTable {
    index: Vec<String>,
    columns: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl PivotTable {
    /// Count occurrences of each (row, column) pair
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut counts: BTreeMap<String, HashMap<String, f64>> = BTreeMap::new();
        let mut columns: BTreeSet<String> = BTreeSet::new();

        for (row, column) in pairs {
            *counts
                .entry(row)
                .or_default()
                .entry(column.clone())
                .or_insert(0.0) += 1.0;
            columns.insert(column);
        }

        let columns: Vec<String> = columns.into_iter().collect();
        let mut index = Vec::with_capacity(counts.len());
        let mut values = Vec::with_capacity(counts.len());

        for (row, row_counts) in counts {
            values.push(
                columns
                    .iter()
                    .map(|c| row_counts.get(c).copied().unwrap_or(0.0))
                    .collect(),
            );
            index.push(row);
        }

        Self {
            index,
            columns,
            values,
        }
    }

    /// Pivot records on two attributes; records missing either value are skipped
    pub fn count<'a, I>(records: I, rows: Attribute, columns: Attribute) -> Self
    where
        I: IntoIterator<Item = &'a IncidentRecord>,
    {
        Self::from_pairs(
            records
                .into_iter()
                .filter_map(|r| Some((r.attribute(rows)?, r.attribute(columns)?))),
        )
    }

    /// Row labels
    pub fn index(&self) -> &[String] {
        &self.index
    }

    /// Column labels
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Values of one row
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        self.values.get(i).map(|r| r.as_slice())
    }

    /// Value at (row label, column label), zero when either is absent
    pub fn get(&self, row: &str, column: &str) -> f64 {
        match (self.row_position(row), self.column_position(column)) {
            (Some(r), Some(c)) => self.values[r][c],
            _ => 0.0,
        }
    }

    /// Values of one column, in row order
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let c = self.column_position(name)?;
        Some(self.values.iter().map(|row| row[c]).collect())
    }

    /// Sum of one row
    pub fn row_sum(&self, i: usize) -> f64 {
        self.row(i).map(|r| r.iter().sum()).unwrap_or(0.0)
    }

    fn row_position(&self, label: &str) -> Option<usize> {
        self.index.iter().position(|r| r == label)
    }

    fn column_position(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == label)
    }

    /// Stable sort of rows by one column, descending
    ///
    /// A column that does not exist counts as zero for every row, which
    /// leaves the order unchanged.
    pub fn sort_rows_by_column_desc(mut self, column: &str) -> Self {
        let Some(c) = self.column_position(column) else {
            return self;
        };

        let mut order: Vec<usize> = (0..self.index.len()).collect();
        order.sort_by(|&a, &b| self.values[b][c].total_cmp(&self.values[a][c]));
        self.reorder_rows(&order);
        self
    }

    /// Keep the first `n` rows
    pub fn head(mut self, n: usize) -> Self {
        self.index.truncate(n);
        self.values.truncate(n);
        self
    }

    /// Reverse row order
    pub fn reverse_rows(mut self) -> Self {
        self.index.reverse();
        self.values.reverse();
        self
    }

    /// Stable sort of columns by the values of row `i`, descending
    pub fn sort_columns_by_row_desc(mut self, i: usize) -> Self {
        let Some(row) = self.values.get(i).cloned() else {
            return self;
        };

        let mut order: Vec<usize> = (0..self.columns.len()).collect();
        order.sort_by(|&a, &b| row[b].total_cmp(&row[a]));

        self.columns = order.iter().map(|&c| self.columns[c].clone()).collect();
        for values in &mut self.values {
            *values = order.iter().map(|&c| values[c]).collect();
        }
        self
    }

    /// Keep the first `n` columns
    pub fn truncate_columns(mut self, n: usize) -> Self {
        self.columns.truncate(n);
        for values in &mut self.values {
            values.truncate(n);
        }
        self
    }

    /// Express each row as percentages of its sum; all-zero rows stay zero
    pub fn to_row_percentages(mut self) -> Self {
        for values in &mut self.values {
            let sum: f64 = values.iter().sum();
            if sum > 0.0 {
                for v in values.iter_mut() {
                    *v = *v / sum * 100.0;
                }
            }
        }
        self
    }

    /// Replace the row index with `labels`, zero-filling new rows and
    /// dropping rows not listed
    pub fn reindex(mut self, labels: &[String]) -> Self {
        let width = self.columns.len();
        let mut existing: HashMap<String, Vec<f64>> = self
            .index
            .drain(..)
            .zip(self.values.drain(..))
            .collect();

        self.values = labels
            .iter()
            .map(|l| existing.remove(l).unwrap_or_else(|| vec![0.0; width]))
            .collect();
        self.index = labels.to_vec();
        self
    }

    /// One series per column, values in row order
    pub fn column_series(&self) -> Vec<Series> {
        self.columns
            .iter()
            .enumerate()
            .map(|(c, name)| Series::new(name.clone(), self.values.iter().map(|r| r[c]).collect()))
            .collect()
    }

    fn reorder_rows(&mut self, order: &[usize]) {
        self.index = order.iter().map(|&i| self.index[i].clone()).collect();
        self.values = order.iter().map(|&i| self.values[i].clone()).collect();
    }
}

/// Frequency of each value, most frequent first (ties by label)
pub fn value_counts<I>(values: I) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: BTreeMap<String, f64> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0.0) += 1.0;
    }

    let mut counts: Vec<(String, f64)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.total_cmp(&a.1));
    counts
}
