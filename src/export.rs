//! CSV export for converted stats tables
//!
//! A table can be written to a file path, which is created (or truncated)
//! and closed here, or to a caller-supplied stream such as stdout, which is
//! flushed but left open.

use crate::error::{Result, StatsError};
use crate::types::Table;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Destination for CSV output
pub enum Sink<'a> {
    /// File opened and closed by the writer
    Path(&'a Path),
    /// Stream owned by the caller; never closed by the writer
    Stream(&'a mut dyn Write),
}

impl<'a> Sink<'a> {
    /// Sink for an optional output path, falling back to `stream`
    pub fn from_option(path: Option<&'a Path>, stream: &'a mut dyn Write) -> Self {
        match path {
            Some(path) => Sink::Path(path),
            None => Sink::Stream(stream),
        }
    }
}

impl std::fmt::Debug for Sink<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sink::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Sink::Stream(_) => f.write_str("Stream"),
        }
    }
}

/// Platform line terminator for CSV rows
fn line_terminator() -> csv::Terminator {
    if cfg!(windows) {
        csv::Terminator::CRLF
    } else {
        csv::Terminator::Any(b'\n')
    }
}

fn csv_writer<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(b',')
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(line_terminator())
        .flexible(true)
        .from_writer(inner)
}

/// Write every row of `table` to `sink` in table order
pub fn write_csv(table: &Table, sink: Sink<'_>) -> Result<()> {
    match sink {
        Sink::Path(path) => {
            let file = File::create(path).map_err(StatsError::Output)?;
            let mut writer = csv_writer(BufWriter::new(file));
            write_rows(&mut writer, table)?;
            writer.flush().map_err(StatsError::Output)?;
            debug!(path = %path.display(), rows = table.len(), "wrote CSV file");
        }
        Sink::Stream(stream) => {
            let mut writer = csv_writer(stream);
            write_rows(&mut writer, table)?;
            writer.flush().map_err(StatsError::Output)?;
        }
    }
    Ok(())
}

/// Render a table to CSV text in memory
pub fn table_to_csv_string(table: &Table) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(table, Sink::Stream(&mut buffer))?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn write_rows<W: Write>(writer: &mut csv::Writer<W>, table: &Table) -> Result<()> {
    for row in table.rows() {
        writer.write_record(row.iter().map(|value| value.to_string()))?;
    }
    Ok(())
}
