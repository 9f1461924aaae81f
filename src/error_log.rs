use crate::log_entry::LogEntry;

/// Malformed entries in input order. Append only.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ErrorLog(Vec<LogEntry>);

impl ErrorLog {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn push(&mut self, entry: LogEntry) {
        self.0.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
