//! CSV Data Loader Module
//! Reads delimited files row-wise or record-wise using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Missing column: {0}")]
    MissingColumn(String),
}

/// One data row keyed by the header it was read with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    columns: Arc<[String]>,
    values: Vec<String>,
}

impl Record {
    pub fn new(columns: Arc<[String]>, values: Vec<String>) -> Self {
        Self { columns, values }
    }

    /// Value of `column`, if the header has it.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
    }

    /// Like [`Record::get`] but a missing column is an error.
    pub fn field(&self, column: &str) -> Result<&str, LoaderError> {
        self.get(column)
            .ok_or_else(|| LoaderError::MissingColumn(column.to_string()))
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

/// Rows of a file in order, header included. `next()` consumes the header.
#[derive(Debug)]
pub struct RawRows {
    rows: std::vec::IntoIter<Vec<String>>,
}

impl Iterator for RawRows {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

/// Reads delimited files. Every cell is kept as a verbatim string.
#[derive(Debug, Clone, Copy)]
pub struct CsvLoader {
    delimiter: u8,
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self::new(b';')
    }
}

impl CsvLoader {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Explicit existence check, so callers can branch before reading.
    pub fn exists(path: &Path) -> bool {
        path.exists()
    }

    /// Read every line as a list of fields, header first.
    ///
    /// Rows are expected to be as wide as the first line. A longer row is a
    /// parse error and a shorter one is padded with empty strings.
    pub fn read_raw_rows(&self, path: &Path) -> Result<RawRows, LoaderError> {
        let df = self.scan(path, false)?;
        let rows = frame_rows(&df)?;
        debug!(path = %path.display(), rows = rows.len(), "read raw rows");
        Ok(RawRows {
            rows: rows.into_iter(),
        })
    }

    /// Read the data rows keyed by the header line.
    pub fn read_records(&self, path: &Path) -> Result<Vec<Record>, LoaderError> {
        let df = self.read_frame(path)?;
        records_from_frame(&df)
    }

    /// Load the file into an all-string DataFrame, header as column names.
    pub fn read_frame(&self, path: &Path) -> Result<DataFrame, LoaderError> {
        let df = self.scan(path, true)?;
        info!(path = %path.display(), rows = df.height(), "loaded csv");
        Ok(df)
    }

    fn scan(&self, path: &Path, has_header: bool) -> Result<DataFrame, LoaderError> {
        if !Self::exists(path) {
            return Err(LoaderError::NotFound(path.to_path_buf()));
        }
        if std::fs::metadata(path)?.len() == 0 {
            return Ok(DataFrame::empty());
        }

        // Zero inference rows keeps every column as String
        let df = LazyCsvReader::new(path)
            .with_separator(self.delimiter)
            .with_has_header(has_header)
            .with_infer_schema_length(Some(0))
            .finish()?
            .collect()?;
        Ok(df)
    }
}

/// Column names of a DataFrame.
pub fn frame_columns(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Transpose a string DataFrame into rows. Nulls become empty strings.
pub fn frame_rows(df: &DataFrame) -> Result<Vec<Vec<String>>, LoaderError> {
    let mut rows: Vec<Vec<String>> = vec![Vec::with_capacity(df.width()); df.height()];

    for column in df.get_columns() {
        let series = column.as_materialized_series();
        let values = series.str()?;
        for (row, value) in rows.iter_mut().zip(values.into_iter()) {
            row.push(value.unwrap_or_default().to_string());
        }
    }

    Ok(rows)
}

/// Build records from a string DataFrame.
pub fn records_from_frame(df: &DataFrame) -> Result<Vec<Record>, LoaderError> {
    let columns: Arc<[String]> = frame_columns(df).into();
    Ok(frame_rows(df)?
        .into_iter()
        .map(|values| Record::new(Arc::clone(&columns), values))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SAMPLE: &str = "id;nom;ville\n1;Martin;Paris\n2;Nicole;Lyon\n";

    fn write_sample(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("sample.csv");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_raw_rows_include_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample(dir.path(), SAMPLE);

        let mut rows = CsvLoader::default().read_raw_rows(&path).unwrap();
        assert_eq!(rows.next().unwrap(), vec!["id", "nom", "ville"]);
        let rest: Vec<_> = rows.collect();
        assert_eq!(rest.len(), 2);
        assert_eq!(rest[1], vec!["2", "Nicole", "Lyon"]);
    }

    #[test]
    fn test_records_keyed_by_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample(dir.path(), SAMPLE);

        let records = CsvLoader::default().read_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("nom"), Some("Martin"));
        assert_eq!(records[1].field("ville").unwrap(), "Lyon");
        assert_eq!(records[1].values(), ["2", "Nicole", "Lyon"]);
        assert_eq!(records[1].columns(), ["id", "nom", "ville"]);
        assert!(matches!(
            records[0].field("email"),
            Err(LoaderError::MissingColumn(c)) if c == "email"
        ));
    }

    #[test]
    fn test_whitespace_is_kept_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample(dir.path(), "id;mot_cle\n1; Python course \n");

        let records = CsvLoader::default().read_records(&path).unwrap();
        assert_eq!(records[0].get("mot_cle"), Some(" Python course "));
    }

    #[test]
    fn test_numbers_stay_strings() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample(dir.path(), "id;prix\n007;29.0\n");

        let records = CsvLoader::default().read_records(&path).unwrap();
        assert_eq!(records[0].get("id"), Some("007"));
        assert_eq!(records[0].get("prix"), Some("29.0"));
    }

    #[test]
    fn test_header_only_file_has_no_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample(dir.path(), "id;nom;email\n");

        let records = CsvLoader::default().read_records(&path).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");

        assert!(!CsvLoader::exists(&path));
        let err = CsvLoader::default().read_records(&path).unwrap_err();
        assert!(matches!(err, LoaderError::NotFound(p) if p == path));
    }

    #[test]
    fn test_custom_delimiter() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample(dir.path(), "a,b\nx,y\n");

        let records = CsvLoader::new(b',').read_records(&path).unwrap();
        assert_eq!(records[0].get("b"), Some("y"));
    }
}
