//! Course Demos - CSV file handling & set algebra walkthroughs
//!
//! Runs the narrated demonstrations against the working directory.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use course_demos::demos::{CsvDemo, SetsDemo};
use course_demos::output::Console;
use course_demos::{logging, Config, Workspace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Demo {
    /// CSV reading, writing, filtering, sorting and cleaning
    Csv,
    /// Set construction and set algebra
    Sets,
    /// Both, CSV first
    All,
}

#[derive(Debug, Parser)]
#[command(name = "course-demos", version, about = "CSV and set walkthroughs")]
struct Cli {
    /// Which walkthrough to run
    #[arg(value_enum, default_value_t = Demo::All)]
    demo: Demo,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the CSV files are created in (defaults to the current one)
    #[arg(short, long)]
    workdir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(workdir) = cli.workdir {
        config.workdir = Some(workdir);
    }
    logging::init(&config.log_filter);

    let workspace = match &config.workdir {
        Some(dir) => Workspace::new(dir),
        None => Workspace::current().context("resolving current directory")?,
    };
    info!(workdir = %workspace.root().display(), demo = ?cli.demo, "startup");

    let stdout = io::stdout();
    let mut console = Console::new(stdout.lock());

    if matches!(cli.demo, Demo::Csv | Demo::All) {
        CsvDemo::new(workspace.clone(), config.delimiter, config.clients_file.as_str())
            .run(&mut console)
            .context("CSV demo failed")?;
    }
    if matches!(cli.demo, Demo::Sets | Demo::All) {
        SetsDemo.run(&mut console).context("sets demo failed")?;
    }

    Ok(())
}
