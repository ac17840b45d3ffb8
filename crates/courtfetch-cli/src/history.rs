//! JSONL-backed search history
//!
//! Append-only log implementing the core's persistence-collaborator
//! interface. One JSON object per line; newest entries last.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use courtfetch_core::{CaseRecord, CourtFetchError, Result, SearchQuery, SearchSink};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use uuid::Uuid;

/// One logged history event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub search_id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// "search", "parsed", or "failure"
    pub event: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<SearchQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<CaseRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Search history stored as a JSONL file
pub struct JsonlHistory {
    path: PathBuf,
}

impl JsonlHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn append(&self, entry: &HistoryEntry) -> Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let line = serde_json::to_string(entry)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }

    /// Most recent `limit` entries, oldest first
    pub fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = std::fs::File::open(&self.path)?;
        let mut entries = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let entry: HistoryEntry = serde_json::from_str(&line)
                .map_err(|e| CourtFetchError::Other(format!("Corrupt history line: {}", e)))?;
            entries.push(entry);
        }

        let skip = entries.len().saturating_sub(limit);
        Ok(entries.split_off(skip))
    }
}

#[async_trait]
impl SearchSink for JsonlHistory {
    async fn record_search(&self, search_id: Uuid, query: &SearchQuery) -> Result<()> {
        self.append(&HistoryEntry {
            search_id,
            timestamp: Utc::now(),
            event: "search".to_string(),
            query: Some(query.clone()),
            record: None,
            message: None,
        })
    }

    async fn record_parsed(&self, search_id: Uuid, record: &CaseRecord) -> Result<()> {
        self.append(&HistoryEntry {
            search_id,
            timestamp: Utc::now(),
            event: "parsed".to_string(),
            query: None,
            record: Some(record.clone()),
            message: None,
        })
    }

    async fn record_failure(&self, search_id: Uuid, message: &str) -> Result<()> {
        self.append(&HistoryEntry {
            search_id,
            timestamp: Utc::now(),
            event: "failure".to_string(),
            query: None,
            record: None,
            message: Some(message.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let history = JsonlHistory::new(dir.path().join("history.jsonl"));

        let id = Uuid::new_v4();
        let query = SearchQuery::new("W.P.(C)", "12345", "2024");
        history.record_search(id, &query).await.unwrap();
        history.record_failure(id, "no record found").await.unwrap();

        let entries = history.recent(10).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].event, "search");
        assert_eq!(entries[0].query.as_ref().unwrap().case_number, "12345");
        assert_eq!(entries[1].event, "failure");
        assert_eq!(entries[1].message.as_deref(), Some("no record found"));
    }

    #[tokio::test]
    async fn test_recent_limits_to_newest() {
        let dir = tempfile::tempdir().unwrap();
        let history = JsonlHistory::new(dir.path().join("history.jsonl"));

        for n in 0..5 {
            let query = SearchQuery::new("CRL.A.", n.to_string(), "2023");
            history.record_search(Uuid::new_v4(), &query).await.unwrap();
        }

        let entries = history.recent(2).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].query.as_ref().unwrap().case_number, "3");
        assert_eq!(entries[1].query.as_ref().unwrap().case_number, "4");
    }

    #[test]
    fn test_recent_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let history = JsonlHistory::new(dir.path().join("absent.jsonl"));
        assert!(history.recent(10).unwrap().is_empty());
    }
}
