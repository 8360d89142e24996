//! Match rendering.
//!
//! One output line per match: `<path>[:<line>][ (<author>)]: <content>`,
//! with the line-number and author segments independently toggleable. The
//! printer also tracks the aggregate match count that decides the process
//! exit code.

use std::io::{self, Write};

use crate::models::MatchResult;

/// Output layout toggles. Both segments default to on.
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub line_numbers: bool,
    pub authors: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            line_numbers: true,
            authors: true,
        }
    }
}

pub struct Printer<W: Write> {
    out: W,
    options: OutputOptions,
    matches: u64,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, options: OutputOptions) -> Self {
        Self {
            out,
            options,
            matches: 0,
        }
    }

    /// Render one match. The line is assembled in full before a single
    /// `writeln!`, so interruption never leaves a partial record behind.
    pub fn print(&mut self, m: &MatchResult) -> io::Result<()> {
        let mut line = m.file_path.clone();
        if self.options.line_numbers {
            line.push_str(&format!(":{}", m.line_number));
        }
        if self.options.authors {
            line.push_str(&format!(" ({})", m.author));
        }
        line.push_str(": ");
        line.push_str(&m.content);

        writeln!(self.out, "{line}")?;
        self.matches += 1;
        Ok(())
    }

    /// Total matches printed so far, across all files.
    pub fn match_count(&self) -> u64 {
        self.matches
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
