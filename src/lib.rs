//! MakerBot Stats Library
//!
//! Converts the per-job `user_stats.json` files written by MakerBot printers
//! into CSV tables for spreadsheet analysis.
//!
//! # Features
//!
//! - **`cli`** (default): Build the command-line interface binary
//! - **`serde`**: Enable serialization/deserialization of types
//!
//! # Quick Start
//!
//! Convert a folder of print jobs and print the CSV:
//! ```rust,no_run
//! use makerbot_stats::{convert_path, write_csv, ConvertOptions, Sink};
//! use std::path::Path;
//!
//! let options = ConvertOptions {
//!     include_timestamp: true,
//!     ..ConvertOptions::default()
//! };
//! let table = convert_path(Path::new("jobs"), &options).unwrap();
//! let mut stdout = std::io::stdout();
//! write_csv(&table, Sink::Stream(&mut stdout)).unwrap();
//! ```
//!
//! # Public API
//!
//! ## Conversion Functions
//! - [`load_record`] - Load one stats file into sorted fields and values
//! - [`aggregate_directory`] - One row per job folder in a directory
//! - [`convert_file`] - Header plus one row for a single stats file
//! - [`convert_path`] - Dispatch on file or directory input
//!
//! ## Export Functions
//! - [`write_csv`] - Write a table to a [`Sink`]
//! - [`table_to_csv_string`] - Render a table to CSV text
//!
//! ## Data Types
//! - [`StatValue`] - Scalar cell value
//! - [`StatsRecord`] - Sorted fields with aligned values
//! - [`Table`] - Header row followed by data rows

pub mod error;
pub mod export;
pub mod parser;
pub mod types;

pub use error::{Result, StatsError};
pub use export::*;
// parser::record and types::record share a module name
#[allow(ambiguous_glob_reexports)]
pub use parser::*;
#[allow(ambiguous_glob_reexports)]
pub use types::*;
