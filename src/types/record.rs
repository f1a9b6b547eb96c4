use crate::types::{Row, StatValue};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stats of one print job: sorted field names and their aligned values
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StatsRecord {
    pub fields: Vec<String>,
    pub values: Vec<StatValue>,
}

impl StatsRecord {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Header row for this record, with an optional leading "datetime" column
    pub fn header_row(&self, with_timestamp: bool) -> Row {
        let mut row = Vec::with_capacity(self.fields.len() + usize::from(with_timestamp));
        if with_timestamp {
            row.push(StatValue::from(super::DATETIME_FIELD));
        }
        row.extend(self.fields.iter().map(|f| StatValue::Text(f.clone())));
        row
    }

    /// Data row for this record, prefixed with the timestamp when one is given
    pub fn data_row(&self, timestamp: Option<String>) -> Row {
        let mut row = Vec::with_capacity(self.values.len() + 1);
        if let Some(ts) = timestamp {
            row.push(StatValue::Text(ts));
        }
        row.extend(self.values.iter().cloned());
        row
    }
}
