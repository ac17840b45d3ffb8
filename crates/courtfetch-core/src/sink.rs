//! Persistence collaborator interface
//!
//! The extraction core stores nothing itself. A `SearchSink` receives,
//! per attempt, the search identifier and outcome so a collaborator can
//! keep search/case history. Implementations live outside the core.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{CaseRecord, Result, SearchQuery};

/// Receiver for per-attempt search results
#[async_trait]
pub trait SearchSink: Send + Sync {
    /// Record that an attempt started, before any navigation
    async fn record_search(&self, search_id: Uuid, query: &SearchQuery) -> Result<()>;

    /// Record a successfully parsed case record
    async fn record_parsed(&self, search_id: Uuid, record: &CaseRecord) -> Result<()>;

    /// Record a failed or challenge-blocked attempt
    async fn record_failure(&self, search_id: Uuid, message: &str) -> Result<()>;
}

/// Sink that discards everything, for callers without persistence
pub struct NullSink;

#[async_trait]
impl SearchSink for NullSink {
    async fn record_search(&self, _search_id: Uuid, _query: &SearchQuery) -> Result<()> {
        Ok(())
    }

    async fn record_parsed(&self, _search_id: Uuid, _record: &CaseRecord) -> Result<()> {
        Ok(())
    }

    async fn record_failure(&self, _search_id: Uuid, _message: &str) -> Result<()> {
        Ok(())
    }
}
