//! Demos module - the narrated walkthroughs

mod csv_files;
mod sets;

pub use csv_files::{CsvDemo, EXPORT_DICT, EXPORT_DICT_IGNORE, EXPORT_WRITER, EXPORT_WRITEROWS};
pub use sets::SetsDemo;
