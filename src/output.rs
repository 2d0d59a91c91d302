//! Console helpers for the narrated demos.

use std::io::{self, Write};

const RULE_WIDTH: usize = 70;

/// Text sink the demos narrate into. Stdout in the binary, a buffer in tests.
pub struct Console<W: Write> {
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Section title framed by `=` rules, preceded by a blank line.
    pub fn title(&mut self, section: &str) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out)?;
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "{section}")?;
        writeln!(self.out, "{rule}")
    }

    /// Subtitle framed by `-` rules.
    pub fn subtitle(&mut self, text: &str) -> io::Result<()> {
        let rule = "-".repeat(RULE_WIDTH);
        writeln!(self.out)?;
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "{text}")?;
        writeln!(self.out, "{rule}")
    }

    pub fn line(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.out, "{}", text.as_ref())
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
