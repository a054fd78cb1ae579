use std::fmt;
use std::ops::Index;

use serde::de::DeserializeOwned;

use super::parser::parse_envelope;
use super::Envelope;
use crate::error::OrmError;
use crate::record::Record;

/// Maximum number of records shown by `Display`.
pub const REPR_OUTPUT_SIZE: usize = 10;

/// Stands in for the records `Display` leaves out.
pub const TRUNCATION_MARKER: &str = "...(remaining elements truncated)...";

/// Records decoded from a single response, in response order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    records: Vec<Record>,
    raw: String,
}

impl ResultSet {
    /// Decode an envelope.
    ///
    /// Fails with [`OrmError::Authorization`] on a `401` status and with
    /// [`OrmError::MalformedResponse`] when the body is not JSON. An empty
    /// body or a body without a `result` array decodes to an empty set.
    pub fn from_envelope(envelope: Envelope) -> Result<Self, OrmError> {
        let records = parse_envelope(&envelope)?;
        Ok(Self {
            records,
            raw: envelope.body,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// The first record, by value.
    pub fn into_first(self) -> Option<Record> {
        self.records.into_iter().next()
    }

    /// The body this set was decoded from.
    pub fn raw_json(&self) -> &str {
        &self.raw
    }

    /// Deserialize every record into `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<Vec<T>, OrmError> {
        self.records.iter().map(Record::decode).collect()
    }
}

impl Index<usize> for ResultSet {
    type Output = Record;

    fn index(&self, index: usize) -> &Record {
        &self.records[index]
    }
}

impl IntoIterator for ResultSet {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for record in self.records.iter().take(REPR_OUTPUT_SIZE) {
            list.entry(&format_args!("{}", record));
        }
        if self.records.len() > REPR_OUTPUT_SIZE {
            list.entry(&format_args!("{}", TRUNCATION_MARKER));
        }
        list.finish()
    }
}
