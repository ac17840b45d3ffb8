//! Scraper error types - re-exports the unified error from courtfetch-core
//!
//! All scraper errors use CourtFetchError:
//! - Navigation(String) - page load failures and timeouts
//! - ControlNotFound(String) - missing form controls (site-layout change)
//! - ChallengeRequired - recoverable, surfaced as an Outcome, never a fault
//! - Browser(String) - driver-level failures (launch, CDP, evaluation)

pub use courtfetch_core::{CourtFetchError, Result};
