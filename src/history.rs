//! In-memory session log.
//!
//! An append-only record of processed clips for on-screen review within
//! one session. Nothing is persisted: the log dies with the process.

use crate::defaults;
use chrono::{DateTime, Local};

/// One processed clip: when it was processed, in which mode, and the final
/// transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRecord {
    pub timestamp: DateTime<Local>,
    pub mode: String,
    pub text: String,
}

impl HistoryRecord {
    /// Timestamp rendered for display, e.g. "06-08-2026 09:41 AM".
    pub fn time_label(&self) -> String {
        self.timestamp.format(defaults::TIMESTAMP_FORMAT).to_string()
    }

    /// Transcript preview truncated to the display limit.
    pub fn preview(&self) -> &str {
        match self
            .text
            .char_indices()
            .nth(defaults::HISTORY_PREVIEW_CHARS)
        {
            Some((byte_index, _)) => &self.text[..byte_index],
            None => &self.text,
        }
    }
}

/// Append-only log of history records.
#[derive(Debug, Clone, Default)]
pub struct SessionLog {
    records: Vec<HistoryRecord>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record stamped with the current local time.
    pub fn append(&mut self, mode: &str, text: &str) {
        self.records.push(HistoryRecord {
            timestamp: Local::now(),
            mode: mode.to_string(),
            text: text.to_string(),
        });
    }

    /// Records newest first, for display.
    pub fn iter_recent(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter().rev()
    }

    /// Records in append order.
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_log_is_empty() {
        let log = SessionLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.iter_recent().next().is_none());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut log = SessionLog::new();
        log.append("Transcribe (Same Language)", "first");
        log.append("Translate to English", "second");

        assert_eq!(log.len(), 2);
        assert_eq!(log.records()[0].text, "first");
        assert_eq!(log.records()[1].text, "second");
    }

    #[test]
    fn test_iter_recent_is_reverse_chronological() {
        let mut log = SessionLog::new();
        log.append("m", "first");
        log.append("m", "second");
        log.append("m", "third");

        let texts: Vec<&str> = log.iter_recent().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_record_keeps_mode_label() {
        let mut log = SessionLog::new();
        log.append("Translate to English", "text");
        assert_eq!(log.records()[0].mode, "Translate to English");
    }

    #[test]
    fn test_preview_short_text_is_whole_text() {
        let mut log = SessionLog::new();
        log.append("m", "short transcript");
        assert_eq!(log.records()[0].preview(), "short transcript");
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let mut log = SessionLog::new();
        let long = "x".repeat(500);
        log.append("m", &long);
        assert_eq!(
            log.records()[0].preview().chars().count(),
            defaults::HISTORY_PREVIEW_CHARS
        );
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let mut log = SessionLog::new();
        // Multi-byte characters near the cut point must not panic
        let long = "காய்ச்சல் ".repeat(40);
        log.append("m", &long);
        let _ = log.records()[0].preview();
    }

    #[test]
    fn test_time_label_format() {
        let mut log = SessionLog::new();
        log.append("m", "t");
        let label = log.records()[0].time_label();
        // "dd-mm-yyyy hh:mm AM/PM"
        assert_eq!(label.len(), 19);
        assert!(label.ends_with("AM") || label.ends_with("PM"));
    }
}
