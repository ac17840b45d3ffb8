//! Extraction orchestrator
//!
//! Sequences one search attempt over an automation session: navigate,
//! fill, challenge policy, submit, settle, classify, extract. Every
//! attempt resolves to exactly one [`Outcome`]; infrastructure faults
//! become `Failure`, never panics, and nothing retries automatically.

use crate::challenge;
use crate::classifier;
use crate::document::ParsedDocument;
use crate::extract;
use crate::form;
use crate::session::{AutomationSession, ChromeSession};
use crate::state::{transition, AttemptEvent, AttemptState};
use courtfetch_core::{CourtFetchError, Outcome, Result, ScraperConfig, SearchQuery};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Case scraper owning one automation session, reused across attempts.
///
/// `search` takes `&mut self`: a session is non-reentrant and only one
/// attempt may be in flight at a time. Concurrent searches require
/// independent scrapers.
pub struct CaseScraper<S: AutomationSession> {
    session: S,
    config: ScraperConfig,
}

impl CaseScraper<ChromeSession> {
    /// Launch a browser session and build a scraper around it
    pub async fn launch(config: ScraperConfig) -> Result<Self> {
        let session = ChromeSession::launch(config.clone()).await?;
        Ok(Self { session, config })
    }
}

impl<S: AutomationSession> CaseScraper<S> {
    /// Build a scraper over an existing session (used by tests and
    /// alternative driver bindings)
    pub fn with_session(session: S, config: ScraperConfig) -> Self {
        Self { session, config }
    }

    /// Run one search attempt. The query's required fields are assumed
    /// non-empty; validation is the caller's job.
    pub async fn search(&mut self, query: &SearchQuery) -> Outcome {
        info!("Starting case search: {}", query.reference());
        let mut state = AttemptState::Idle;

        // Navigate to the search page and wait for the form
        if let Err(e) = self.session.navigate(&self.config.base_url).await {
            return self.fail(state, e);
        }
        if let Err(e) = self.session.find_control(form::CASE_TYPE_CONTROL).await {
            return self.fail(state, e);
        }
        state = transition(state, AttemptEvent::PageLoaded);

        // Fill the three search fields
        if let Err(e) = form::fill_search_fields(&self.session, query).await {
            return self.fail(state, e);
        }
        state = transition(state, AttemptEvent::FieldsFilled);

        // Challenge policy: abort, fill, or pass through
        match challenge::apply_challenge_policy(&self.session, query).await {
            Ok(()) => {}
            Err(CourtFetchError::ChallengeRequired) => {
                state = transition(state, AttemptEvent::ChallengeDetected);
                debug!("Attempt ended in state {:?}", state);
                return Outcome::ChallengeRequired;
            }
            Err(e) => return self.fail(state, e),
        }

        // Submit and let the result page settle
        if let Err(e) = self.session.submit().await {
            return self.fail(state, e);
        }
        state = transition(state, AttemptEvent::FormSubmitted);

        tokio::time::sleep(Duration::from_millis(self.config.settle_delay_ms)).await;

        // Classify before extracting; retrieval failure here is
        // conservatively a failed attempt
        let source = match self.session.page_source().await {
            Ok(source) => source,
            Err(e) => return self.fail(state, e),
        };

        if let Some(phrase) = classifier::classify(&source) {
            let state = transition(
                state,
                AttemptEvent::NegativeResult {
                    phrase: phrase.to_string(),
                },
            );
            warn!("Search failed for {}: {}", query.reference(), phrase);
            let reason = match state {
                AttemptState::Failed { reason } => reason,
                _ => format!("Negative result page: {}", phrase),
            };
            return Outcome::Failure { reason };
        }

        // Extraction is best-effort and cannot fail the attempt
        let record = {
            let doc = ParsedDocument::parse(&source);
            extract::parse_case_record(&doc, &self.config.origin())
        };
        state = transition(state, AttemptEvent::RecordExtracted);
        debug!("Attempt ended in state {:?}", state);

        info!("Successfully extracted case record for {}", query.reference());
        Outcome::Parsed(record)
    }

    fn fail(&self, state: AttemptState, error: CourtFetchError) -> Outcome {
        let message = error.to_string();
        let state = transition(
            state,
            AttemptEvent::Error {
                message: message.clone(),
            },
        );
        warn!("Search attempt failed in state {:?}: {}", state, message);
        Outcome::Failure { reason: message }
    }

    /// Borrow the underlying session
    pub fn session_ref(&self) -> &S {
        &self.session
    }

    /// Release the underlying session; safe to call multiple times
    pub async fn close(&mut self) -> Result<()> {
        self.session.close().await
    }
}
