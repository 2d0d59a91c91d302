//! Data Processor Module
//! Filtering and sorting of loaded rows.

use polars::prelude::*;
use thiserror::Error;

use super::cleaning::{self, CleanError};
use super::loader::{frame_columns, Record};

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Missing column: {0}")]
    MissingColumn(String),
    #[error(transparent)]
    Clean(#[from] CleanError),
}

/// How a sort key is derived from a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey<'a> {
    /// Alphabetical on the raw text.
    Text(&'a str),
    /// Numeric on the value parsed as an integer.
    Numeric(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum KeyValue {
    Text(String),
    Int(i64),
}

/// Handles filter and sort operations.
pub struct DataProcessor;

impl DataProcessor {
    /// Keep the rows whose `column` equals `value` exactly.
    pub fn filter_eq(df: &DataFrame, column: &str, value: &str) -> Result<DataFrame, ProcessorError> {
        if !frame_columns(df).iter().any(|c| c == column) {
            return Err(ProcessorError::MissingColumn(column.to_string()));
        }

        let filtered = df
            .clone()
            .lazy()
            .filter(col(column).eq(lit(value)))
            .collect()?;
        Ok(filtered)
    }

    /// Stable sort on a derived key.
    ///
    /// Every key is computed before sorting, so one bad value fails the
    /// whole sort. Descending order keeps ties in their original order.
    pub fn sort_records(
        records: &[Record],
        key: SortKey<'_>,
        order: SortOrder,
    ) -> Result<Vec<Record>, ProcessorError> {
        let mut keyed: Vec<(KeyValue, &Record)> = records
            .iter()
            .map(|record| Ok((Self::key_of(record, key)?, record)))
            .collect::<Result<_, ProcessorError>>()?;

        keyed.sort_by(|(a, _), (b, _)| match order {
            SortOrder::Ascending => a.cmp(b),
            SortOrder::Descending => b.cmp(a),
        });

        Ok(keyed.into_iter().map(|(_, record)| record.clone()).collect())
    }

    fn key_of(record: &Record, key: SortKey<'_>) -> Result<KeyValue, ProcessorError> {
        let (column, numeric) = match key {
            SortKey::Text(column) => (column, false),
            SortKey::Numeric(column) => (column, true),
        };
        let raw = record
            .get(column)
            .ok_or_else(|| ProcessorError::MissingColumn(column.to_string()))?;

        if numeric {
            Ok(KeyValue::Int(cleaning::parse_int(column, raw)?))
        } else {
            Ok(KeyValue::Text(raw.to_string()))
        }
    }
}
