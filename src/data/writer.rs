//! CSV Writer Module
//! Row-oriented and field-name-oriented writers on top of Polars' CsvWriter.

use polars::prelude::*;
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum WriterError {
    #[error("Failed to write CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Row has {found} fields, header has {expected}")]
    RowLength { expected: usize, found: usize },
    #[error("Record has fields not in fieldnames: {}", .0.join(", "))]
    UnknownFields(Vec<String>),
}

/// A typed cell, rendered to text when written.
///
/// Rendering follows Rust formatting: booleans are `true`/`false` and large
/// floats use a bare exponent (`1e16`). Blank text and [`Field::Null`] both
/// become an empty, unquoted cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    /// Written as an empty cell.
    Null,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Int(v) => write!(f, "{v}"),
            // Debug keeps the trailing ".0" on whole floats
            Field::Float(v) => write!(f, "{v:?}"),
            Field::Text(v) => f.write_str(v),
            Field::Bool(v) => write!(f, "{v}"),
            Field::Null => Ok(()),
        }
    }
}

impl From<i64> for Field {
    fn from(v: i64) -> Self {
        Field::Int(v)
    }
}

impl From<i32> for Field {
    fn from(v: i32) -> Self {
        Field::Int(v.into())
    }
}

impl From<f64> for Field {
    fn from(v: f64) -> Self {
        Field::Float(v)
    }
}

impl From<bool> for Field {
    fn from(v: bool) -> Self {
        Field::Bool(v)
    }
}

impl From<&str> for Field {
    fn from(v: &str) -> Self {
        Field::Text(v.to_string())
    }
}

impl From<String> for Field {
    fn from(v: String) -> Self {
        Field::Text(v)
    }
}

/// What [`RecordWriter`] does with keys outside its fieldnames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtrasAction {
    /// Reject the record.
    #[default]
    Raise,
    /// Drop the unknown keys silently.
    Ignore,
}

/// Writes positional rows under a header.
#[derive(Debug, Clone)]
pub struct RowWriter {
    header: Vec<String>,
    rows: Vec<Vec<Field>>,
    delimiter: u8,
}

impl RowWriter {
    pub fn new<S: AsRef<str>>(header: &[S], delimiter: u8) -> Self {
        Self {
            header: header.iter().map(|h| h.as_ref().to_string()).collect(),
            rows: Vec::new(),
            delimiter,
        }
    }

    /// Append one row. Its width must match the header.
    pub fn write_row(&mut self, row: Vec<Field>) -> Result<(), WriterError> {
        if row.len() != self.header.len() {
            return Err(WriterError::RowLength {
                expected: self.header.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Append many rows; stops at the first malformed one.
    pub fn write_rows<I>(&mut self, rows: I) -> Result<(), WriterError>
    where
        I: IntoIterator<Item = Vec<Field>>,
    {
        for row in rows {
            self.write_row(row)?;
        }
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Create (or truncate) `path` and write header plus rows.
    pub fn finish(self, path: &Path) -> Result<usize, WriterError> {
        let count = self.rows.len();
        write_frame(path, &self.header, &self.rows, true, self.delimiter)?;
        Ok(count)
    }
}

/// Writes records addressed by field name, in `fieldnames` order.
#[derive(Debug, Clone)]
pub struct RecordWriter {
    fieldnames: Vec<String>,
    extras: ExtrasAction,
    header: bool,
    rows: Vec<Vec<Field>>,
    delimiter: u8,
}

impl RecordWriter {
    pub fn new<S: AsRef<str>>(fieldnames: &[S], delimiter: u8) -> Self {
        Self {
            fieldnames: fieldnames.iter().map(|f| f.as_ref().to_string()).collect(),
            extras: ExtrasAction::default(),
            header: false,
            rows: Vec::new(),
            delimiter,
        }
    }

    pub fn with_extras_action(mut self, extras: ExtrasAction) -> Self {
        self.extras = extras;
        self
    }

    /// Emit the header line when the file is written.
    pub fn write_header(&mut self) {
        self.header = true;
    }

    /// Append one record. Missing fields are written empty.
    pub fn write_record<K, I>(&mut self, record: I) -> Result<(), WriterError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Field)>,
    {
        let mut values: HashMap<String, Field> =
            record.into_iter().map(|(k, v)| (k.into(), v)).collect();

        let mut unknown: Vec<String> = values
            .keys()
            .filter(|k| !self.fieldnames.contains(k))
            .cloned()
            .collect();
        if !unknown.is_empty() && self.extras == ExtrasAction::Raise {
            unknown.sort();
            return Err(WriterError::UnknownFields(unknown));
        }

        let row = self
            .fieldnames
            .iter()
            .map(|name| values.remove(name).unwrap_or(Field::Null))
            .collect();
        self.rows.push(row);
        Ok(())
    }

    pub fn finish(self, path: &Path) -> Result<usize, WriterError> {
        let count = self.rows.len();
        write_frame(path, &self.fieldnames, &self.rows, self.header, self.delimiter)?;
        Ok(count)
    }
}

/// Render rows into string columns and hand them to Polars.
fn write_frame(
    path: &Path,
    header: &[String],
    rows: &[Vec<Field>],
    include_header: bool,
    delimiter: u8,
) -> Result<(), WriterError> {
    let columns: Vec<Column> = header
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let values: Vec<Option<String>> = rows
                .iter()
                .map(|row| match &row[i] {
                    Field::Null => None,
                    // An empty string would be quoted as `""`
                    Field::Text(v) if v.is_empty() => None,
                    field => Some(field.to_string()),
                })
                .collect();
            Column::new(name.as_str().into(), values)
        })
        .collect();
    let mut df = DataFrame::new(columns)?;

    let mut file = File::create(path)?;
    CsvWriter::new(&mut file)
        .include_header(include_header)
        .with_separator(delimiter)
        .finish(&mut df)?;

    info!(path = %path.display(), rows = rows.len(), "wrote csv");
    Ok(())
}
