//! RecordId - the store's native `#cluster:position` address.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A parsed record identifier such as `#12:2`.
///
/// Records carry their identifier as an opaque string; this type is only
/// used where the native format matters (link validation, SQL rendering,
/// rid assignment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId {
    pub cluster: i64,
    pub position: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid record id {0:?}, expected the form #cluster:position")]
pub struct RecordIdParseError(pub String);

impl RecordId {
    pub fn new(cluster: i64, position: i64) -> Self {
        Self { cluster, position }
    }

    /// Returns true if `s` parses as a record id.
    pub fn is_valid(s: &str) -> bool {
        s.parse::<RecordId>().is_ok()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:{}", self.cluster, self.position)
    }
}

impl FromStr for RecordId {
    type Err = RecordIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || RecordIdParseError(s.to_string());
        let rest = s.strip_prefix('#').ok_or_else(err)?;
        let (cluster, position) = rest.split_once(':').ok_or_else(err)?;
        // i64::from_str accepts a leading '+', the store does not
        if cluster.starts_with('+') || position.starts_with('+') {
            return Err(err());
        }
        let cluster = cluster.parse::<i64>().map_err(|_| err())?;
        let position = position.parse::<i64>().map_err(|_| err())?;
        Ok(Self { cluster, position })
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
