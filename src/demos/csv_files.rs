//! CSV file walkthrough.
//!
//! Each step is independent and reads or writes files in the working
//! directory only. Steps 3 onwards expect the client file from step 1.

use std::io::Write;
use tracing::{info, warn};

use crate::data::{
    cleaning, CsvLoader, DataProcessor, ExtrasAction, Field, RecordWriter, RowWriter, SortKey,
    SortOrder,
};
use crate::error::Result;
use crate::output::Console;
use crate::workspace::Workspace;

pub const EXPORT_WRITER: &str = "export_writer.csv";
pub const EXPORT_WRITEROWS: &str = "export_writerows.csv";
pub const EXPORT_DICT: &str = "export_dict.csv";
pub const EXPORT_DICT_IGNORE: &str = "export_dict_ignore.csv";

const CLIENT_HEADER: [&str; 8] = ["id", "nom", "email", "ville", "age", "mot_cle", "prix", "actif"];
const PRODUCT_HEADER: [&str; 3] = ["id", "produit", "prix"];
const KEYWORD_FIELDS: [&str; 3] = ["id", "mot_cle", "volume"];
const SAMPLE_PHONE: &str = "01 23 45-67-89";

/// The sample clients, in file order.
fn client_rows() -> Vec<Vec<Field>> {
    vec![
        vec![
            1.into(),
            "Martin".into(),
            "martin@example.com".into(),
            "Paris".into(),
            35.into(),
            " Python course ".into(),
            19.99.into(),
            "true".into(),
        ],
        vec![
            2.into(),
            "Nicole".into(),
            "nicole@example.com".into(),
            "Lyon".into(),
            22.into(),
            "csv   tutorial".into(),
            9.5.into(),
            "false".into(),
        ],
        vec![
            3.into(),
            "Dupont".into(),
            "dupont@example.com".into(),
            "Paris".into(),
            45.into(),
            "  PYTHON CSV ".into(),
            29.0.into(),
            "true".into(),
        ],
    ]
}

fn product_rows() -> Vec<Vec<Field>> {
    vec![
        vec![1.into(), "Clavier".into(), 45.99.into()],
        vec![2.into(), "Souris".into(), 25.50.into()],
        vec![3.into(), "Écran".into(), 299.00.into()],
    ]
}

/// Runs the CSV steps against one working directory.
#[derive(Debug, Clone)]
pub struct CsvDemo {
    workspace: Workspace,
    loader: CsvLoader,
    clients_file: String,
}

impl CsvDemo {
    pub fn new(workspace: Workspace, delimiter: u8, clients_file: impl Into<String>) -> Self {
        Self {
            workspace,
            loader: CsvLoader::new(delimiter),
            clients_file: clients_file.into(),
        }
    }

    fn delimiter(&self) -> u8 {
        self.loader.delimiter()
    }

    /// Every step, in order.
    pub fn run<W: Write>(&self, console: &mut Console<W>) -> Result<()> {
        info!(workdir = %self.workspace.root().display(), "csv demo start");

        self.show_workdir(console)?;
        self.create_clients(console)?;
        self.check_exists(console)?;
        self.read_rows(console)?;
        self.read_records(console)?;
        self.skip_header(console)?;
        self.store_in_list(console)?;
        self.write_line_by_line(console)?;
        self.write_all_rows(console)?;
        self.write_records(console)?;
        self.filter_paris(console)?;
        self.sort_clients(console)?;
        self.convert_and_clean(console)?;

        info!("csv demo done");
        Ok(())
    }

    pub fn show_workdir<W: Write>(&self, console: &mut Console<W>) -> Result<()> {
        console.title("0. Working directory")?;
        console.line(format!(
            "Working directory: {}",
            self.workspace.root().display()
        ))?;
        Ok(())
    }

    /// Step 1: write the sample client file.
    pub fn create_clients<W: Write>(&self, console: &mut Console<W>) -> Result<()> {
        console.title("1. Creating a sample CSV file")?;
        let path = self.workspace.path(&self.clients_file);

        let mut writer = RowWriter::new(&CLIENT_HEADER, self.delimiter());
        writer.write_rows(client_rows())?;
        let count = writer.finish(&path)?;

        console.line(format!(
            "Working directory: {}",
            self.workspace.root().display()
        ))?;
        console.line(format!(
            "File '{}' created with {} data rows.",
            path.display(),
            count
        ))?;
        Ok(())
    }

    /// Step 2: read the file if it exists, otherwise create it header-only.
    pub fn check_exists<W: Write>(&self, console: &mut Console<W>) -> Result<()> {
        console.title("2. Checking that a CSV file exists")?;
        let path = self.workspace.path(&self.clients_file);

        if CsvLoader::exists(&path) {
            console.line(format!("File '{}' exists, reading it.", path.display()))?;
            for row in self.loader.read_raw_rows(&path)? {
                console.line(format!("{row:?}"))?;
            }
        } else {
            warn!(path = %path.display(), "file missing, creating header only");
            console.line(format!(
                "File '{}' does not exist, creating it.",
                path.display()
            ))?;
            RowWriter::new(&["id", "nom", "email"], self.delimiter()).finish(&path)?;
            console.line(format!(
                "File '{}' created with the header only.",
                path.display()
            ))?;
        }
        Ok(())
    }

    /// Step 3: positional rows, header included.
    pub fn read_rows<W: Write>(&self, console: &mut Console<W>) -> Result<()> {
        console.title("3. Reading rows as lists")?;
        let path = self.workspace.path(&self.clients_file);

        for row in self.loader.read_raw_rows(&path)? {
            console.line(format!("{row:?}"))?;
        }
        Ok(())
    }

    /// Step 4: rows addressed by column name.
    pub fn read_records<W: Write>(&self, console: &mut Console<W>) -> Result<()> {
        console.title("4. Reading rows as records")?;
        let path = self.workspace.path(&self.clients_file);

        for record in self.loader.read_records(&path)? {
            console.line(format!(
                "Name: {} | Email: {} | City: {}",
                record.field("nom")?,
                record.field("email")?,
                record.field("ville")?
            ))?;
        }
        Ok(())
    }

    /// Step 5: pull the header off the iterator before looping on data.
    pub fn skip_header<W: Write>(&self, console: &mut Console<W>) -> Result<()> {
        console.title("5. Consuming the header with next()")?;
        let path = self.workspace.path(&self.clients_file);

        let mut rows = self.loader.read_raw_rows(&path)?;
        let header = rows.next().unwrap_or_default();
        console.line(format!("Header: {header:?}"))?;

        for row in rows {
            let field = |i: usize| row.get(i).map(String::as_str).unwrap_or_default();
            console.line(format!(
                "Client: {}, Email: {}, City: {}",
                field(1),
                field(2),
                field(3)
            ))?;
        }
        Ok(())
    }

    /// Step 6: keep the data rows in memory for later processing.
    pub fn store_in_list<W: Write>(&self, console: &mut Console<W>) -> Result<()> {
        console.title("6. Storing CSV rows in a list")?;
        let path = self.workspace.path(&self.clients_file);

        let mut rows = self.loader.read_raw_rows(&path)?;
        let header = rows.next().unwrap_or_default();
        console.line(format!("Columns: {header:?}"))?;

        let mut stored: Vec<Vec<String>> = Vec::new();
        for row in rows {
            console.line(format!("Row added: {row:?}"))?;
            stored.push(row);
        }

        console.blank()?;
        console.line(format!(
            "Total rows (header excluded): {}",
            stored.len()
        ))?;
        if let (Some(first), Some(last)) = (stored.first(), stored.last()) {
            console.line(format!("First row: {first:?}"))?;
            console.line(format!("Last row: {last:?}"))?;
        }
        Ok(())
    }

    /// Step 7: one row at a time.
    pub fn write_line_by_line<W: Write>(&self, console: &mut Console<W>) -> Result<()> {
        console.title("7. Writing a CSV one row at a time")?;
        let path = self.workspace.path(EXPORT_WRITER);

        let mut writer = RowWriter::new(&PRODUCT_HEADER, self.delimiter());
        for row in product_rows() {
            writer.write_row(row)?;
        }
        writer.finish(&path)?;

        console.line(format!("File '{}' created (row by row).", path.display()))?;
        Ok(())
    }

    /// Step 8: all rows in one call.
    pub fn write_all_rows<W: Write>(&self, console: &mut Console<W>) -> Result<()> {
        console.title("8. Writing many rows at once")?;
        let path = self.workspace.path(EXPORT_WRITEROWS);

        let mut writer = RowWriter::new(&PRODUCT_HEADER, self.delimiter());
        writer.write_rows(product_rows())?;
        writer.finish(&path)?;

        console.line(format!("File '{}' created (all rows).", path.display()))?;
        Ok(())
    }

    /// Step 9: field-named records, strict then ignoring extras.
    pub fn write_records<W: Write>(&self, console: &mut Console<W>) -> Result<()> {
        console.title("9. Writing records by field name")?;

        console.subtitle("9.1 Strict fields")?;
        let strict_path = self.workspace.path(EXPORT_DICT);
        let mut writer = RecordWriter::new(&KEYWORD_FIELDS, self.delimiter());
        writer.write_header();
        writer.write_record([
            ("id", Field::from(1)),
            ("mot_cle", Field::from("python cours")),
            ("volume", Field::from(1200)),
        ])?;
        writer.finish(&strict_path)?;
        console.line(format!("File '{}' created.", strict_path.display()))?;

        console.subtitle("9.2 Ignoring extra fields")?;
        let ignore_path = self.workspace.path(EXPORT_DICT_IGNORE);
        let mut writer = RecordWriter::new(&KEYWORD_FIELDS, self.delimiter())
            .with_extras_action(ExtrasAction::Ignore);
        writer.write_header();
        writer.write_record([
            ("id", Field::from(1)),
            ("mot_cle", Field::from("python cours")),
            ("volume", Field::from(1200)),
            ("auteur", Field::from("Jean")),
            ("date", Field::from("2024-01-15")),
        ])?;
        writer.finish(&ignore_path)?;
        console.line(format!(
            "File '{}' created (fields 'auteur' and 'date' ignored).",
            ignore_path.display()
        ))?;
        Ok(())
    }

    /// Step 10: clients living in Paris.
    pub fn filter_paris<W: Write>(&self, console: &mut Console<W>) -> Result<()> {
        console.title("10. Filtering rows (ville == 'Paris')")?;
        let path = self.workspace.path(&self.clients_file);

        let df = self.loader.read_frame(&path)?;
        let paris = DataProcessor::filter_eq(&df, "ville", "Paris")?;

        console.line("Clients living in Paris:")?;
        for record in crate::data::records_from_frame(&paris)? {
            console.line(format!(
                "- {} ({})",
                record.field("nom")?,
                record.field("email")?
            ))?;
        }
        Ok(())
    }

    /// Step 11: by name, by age, by age descending.
    pub fn sort_clients<W: Write>(&self, console: &mut Console<W>) -> Result<()> {
        console.title("11. Sorting rows (name then age)")?;
        let path = self.workspace.path(&self.clients_file);
        let clients = self.loader.read_records(&path)?;

        console.subtitle("11.1 Alphabetical by name")?;
        for c in DataProcessor::sort_records(&clients, SortKey::Text("nom"), SortOrder::Ascending)? {
            console.line(format!("{} ({})", c.field("nom")?, c.field("ville")?))?;
        }

        console.subtitle("11.2 Numeric by age (ascending)")?;
        for c in DataProcessor::sort_records(&clients, SortKey::Numeric("age"), SortOrder::Ascending)? {
            console.line(format!("{} - {} years", c.field("nom")?, c.field("age")?))?;
        }

        console.subtitle("11.3 By age (descending)")?;
        for c in DataProcessor::sort_records(&clients, SortKey::Numeric("age"), SortOrder::Descending)? {
            console.line(format!("{} - {} years", c.field("nom")?, c.field("age")?))?;
        }
        Ok(())
    }

    /// Step 12: text to int/float/bool, keyword and phone cleanup.
    pub fn convert_and_clean<W: Write>(&self, console: &mut Console<W>) -> Result<()> {
        console.title("12. Type conversion and data cleaning")?;
        let path = self.workspace.path(&self.clients_file);

        for record in self.loader.read_records(&path)? {
            let age_raw = record.field("age")?;
            let age = cleaning::parse_int("age", age_raw)?;
            let price_raw = record.field("prix")?;
            let price = cleaning::parse_float("prix", price_raw)?;
            let active_raw = record.field("actif")?;
            let active = cleaning::parse_bool(active_raw);
            let keyword_raw = record.field("mot_cle")?;
            let keyword = cleaning::clean_keyword(keyword_raw);
            let phone = cleaning::clean_phone(SAMPLE_PHONE);

            console.line(format!("--- Client {} ---", record.field("nom")?))?;
            console.line(format!("Age (str -> int)     : {age_raw} -> {age}"))?;
            console.line(format!("Price (str -> float) : {price_raw} -> {price:?}"))?;
            console.line(format!("Active (str -> bool) : {active_raw} -> {active}"))?;
            console.line(format!("Raw keyword          : '{keyword_raw}'"))?;
            console.line(format!("Clean keyword        : '{keyword}'"))?;
            console.line(format!("Raw phone            : '{SAMPLE_PHONE}'"))?;
            console.line(format!("Clean phone          : '{phone}'"))?;
            console.blank()?;
        }
        Ok(())
    }
}
