//! Course Demos - CSV file handling & set algebra walkthroughs
//!
//! - `data` reads, writes, filters, sorts and cleans delimited files
//! - `sets` provides an ordered unique-value collection with set algebra
//! - `demos` narrates both, step by step, into a [`output::Console`]

pub mod config;
pub mod data;
pub mod demos;
pub mod error;
pub mod logging;
pub mod output;
pub mod sets;
pub mod workspace;

pub use config::Config;
pub use error::{DemoError, Result};
pub use workspace::Workspace;
