//! # courtfetch-scraper
//!
//! Browser-driven extraction engine for court case records. Drives a
//! Chrome DevTools Protocol session through the case-status search
//! form, detects anti-automation challenges, classifies the result
//! page, and parses it into a structured [`courtfetch_core::CaseRecord`].
//!
//! # Example
//!
//! ```no_run
//! use courtfetch_core::{Outcome, ScraperConfig, SearchQuery};
//! use courtfetch_scraper::CaseScraper;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut scraper = CaseScraper::launch(ScraperConfig::default()).await?;
//!
//!     let query = SearchQuery::new("W.P.(C)", "12345", "2024");
//!     match scraper.search(&query).await {
//!         Outcome::Parsed(record) => println!("{:#?}", record),
//!         Outcome::ChallengeRequired => println!("Enter the challenge code and retry"),
//!         Outcome::Failure { reason } => eprintln!("Search failed: {}", reason),
//!     }
//!
//!     scraper.close().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`session`]: the [`AutomationSession`] trait and its
//!   `headless_chrome` binding
//! - [`document`]: markup parsed into selector/table access for the
//!   extractors
//! - [`form`] / [`challenge`]: form population and challenge policy
//! - [`classifier`]: negative-result phrase scan
//! - [`extract`] / [`orders`]: best-effort field and docket extraction
//! - [`state`]: pure attempt state machine
//! - [`scraper`]: the orchestrator tying one attempt together
//! - [`fetch`]: document-download collaborator

pub mod challenge;
pub mod classifier;
pub mod document;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod form;
pub mod orders;
pub mod scraper;
pub mod session;
pub mod state;

pub use document::ParsedDocument;
pub use error::{CourtFetchError, Result};
pub use fetch::DocumentFetcher;
pub use scraper::CaseScraper;
pub use session::{AutomationSession, ChromeSession};
