use crate::types::{StatValue, StatsRecord};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One CSV line worth of cells
pub type Row = Vec<StatValue>;

/// Rows ready for CSV output. The first row, when present, is the header.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Append a record, emitting the header first if this is the first record
    pub fn push_record(&mut self, record: &StatsRecord, timestamp: Option<String>) {
        if self.rows.is_empty() {
            self.rows.push(record.header_row(timestamp.is_some()));
        }
        self.rows.push(record.data_row(timestamp));
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn data_rows(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Number of rows including the header
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every cell rendered as CSV text
    pub fn to_strings(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|v| v.to_string()).collect())
            .collect()
    }
}

impl From<Vec<Row>> for Table {
    fn from(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(values: &[i64]) -> StatsRecord {
        StatsRecord {
            fields: vec!["a".to_string(), "b".to_string()],
            values: values.iter().map(|&v| StatValue::Integer(v)).collect(),
        }
    }

    #[test]
    fn test_empty_table_has_no_header() {
        let table = Table::new();
        assert!(table.is_empty());
        assert!(table.rows().is_empty());
        assert!(table.data_rows().is_empty());
    }

    #[test]
    fn test_header_emitted_once() {
        let mut table = Table::new();
        table.push_record(&record(&[1, 2]), None);
        table.push_record(&record(&[3, 4]), None);
        assert_eq!(
            table.to_strings(),
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["1".to_string(), "2".to_string()],
                vec!["3".to_string(), "4".to_string()],
            ]
        );
        assert_eq!(table.data_rows().len(), 2);
    }

    #[test]
    fn test_timestamp_column_prefixed() {
        let mut table = Table::new();
        table.push_record(&record(&[1, 2]), Some("2023-01-02T03:04:05Z".to_string()));
        let rows = table.to_strings();
        assert_eq!(rows[0], vec!["datetime", "a", "b"]);
        assert_eq!(rows[1], vec!["2023-01-02T03:04:05Z", "1", "2"]);
    }
}
