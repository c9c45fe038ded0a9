//! Operation records and the append-only log that holds them.

use serde::Serialize;
use std::fmt;

/// Formatted trace of one successful operation, e.g. `10.00 + 5.00 = 15.00`.
///
/// Records are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OperationRecord(String);

impl OperationRecord {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OperationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OperationRecord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<OperationRecord> for String {
    fn from(record: OperationRecord) -> Self {
        record.0
    }
}

/// Ordered, append-only sequence of records, oldest first.
///
/// The only removal is [`OperationLog::clear`].
#[derive(Debug, Clone, Default)]
pub struct OperationLog {
    records: Vec<OperationRecord>,
}

impl OperationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: OperationRecord) {
        tracing::debug!(record = %record, "Recorded operation");
        self.records.push(record);
    }

    /// Copy of all records. Changes to the copy do not reach the log.
    pub fn snapshot(&self) -> Vec<OperationRecord> {
        self.records.clone()
    }

    /// The most recent `n` records paired with their 1-based position in the log.
    pub fn tail(&self, n: usize) -> impl Iterator<Item = (usize, &OperationRecord)> {
        let start = self.records.len().saturating_sub(n);
        self.records
            .iter()
            .enumerate()
            .skip(start)
            .map(|(i, record)| (i + 1, record))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OperationRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let dropped = self.records.len();
        self.records.clear();
        tracing::info!("Cleared operation log ({} records dropped)", dropped);
        dropped
    }
}

impl<'a> IntoIterator for &'a OperationLog {
    type Item = &'a OperationRecord;
    type IntoIter = std::slice::Iter<'a, OperationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
