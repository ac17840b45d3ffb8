//! # courtfetch-core
//!
//! Shared types for the courtfetch case-record retrieval system: the
//! search/record data model, the unified error enum, scraper
//! configuration, the static case-type catalog, and the persistence
//! collaborator interface.

mod catalog;
mod config;
mod error;
mod sink;
mod types;

pub use catalog::{is_known_case_type, search_years, CASE_TYPES};
pub use config::ScraperConfig;
pub use error::{CourtFetchError, Result};
pub use sink::{NullSink, SearchSink};
pub use types::{CaseRecord, OrderRecord, Outcome, SearchQuery};
