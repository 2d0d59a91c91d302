//! Data module - CSV loading, writing and processing

pub mod cleaning;
mod loader;
mod processor;
mod writer;

pub use cleaning::CleanError;
pub use loader::{frame_columns, frame_rows, records_from_frame, CsvLoader, LoaderError, RawRows, Record};
pub use processor::{DataProcessor, ProcessorError, SortKey, SortOrder};
pub use writer::{ExtrasAction, Field, RecordWriter, RowWriter, WriterError};
