//! End-to-end attempt scenarios against a scripted session

use async_trait::async_trait;
use courtfetch_core::{CourtFetchError, Outcome, Result, ScraperConfig, SearchQuery};
use courtfetch_scraper::session::AutomationSession;
use courtfetch_scraper::CaseScraper;
use std::sync::Mutex;

/// Scripted session: serves a fixed result page and records every call
struct MockSession {
    /// Visibility of the challenge control: None = absent
    challenge_visible: Option<bool>,
    /// Page source served after submission
    result_page: String,
    /// Simulated navigation failure, if any
    navigation_error: Option<String>,
    calls: Mutex<Vec<String>>,
    closed: Mutex<bool>,
}

impl MockSession {
    fn new(result_page: &str) -> Self {
        Self {
            challenge_visible: None,
            result_page: result_page.to_string(),
            navigation_error: None,
            calls: Mutex::new(Vec::new()),
            closed: Mutex::new(false),
        }
    }

    fn with_challenge(mut self, visible: bool) -> Self {
        self.challenge_visible = Some(visible);
        self
    }

    fn with_navigation_error(mut self, message: &str) -> Self {
        self.navigation_error = Some(message.to_string());
        self
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn is_closed(&self) -> bool {
        *self.closed.lock().unwrap()
    }
}

#[async_trait]
impl AutomationSession for MockSession {
    async fn navigate(&self, url: &str) -> Result<()> {
        if let Some(message) = &self.navigation_error {
            return Err(CourtFetchError::Navigation(message.clone()));
        }
        self.record(format!("navigate:{}", url));
        Ok(())
    }

    async fn find_control(&self, name: &str) -> Result<()> {
        self.record(format!("find:{}", name));
        Ok(())
    }

    async fn control_visible(&self, name: &str) -> Result<Option<bool>> {
        self.record(format!("visible:{}", name));
        if name == "captcha" {
            Ok(self.challenge_visible)
        } else {
            Ok(Some(true))
        }
    }

    async fn fill_text(&self, name: &str, value: &str) -> Result<()> {
        self.record(format!("fill:{}={}", name, value));
        Ok(())
    }

    async fn select_option(&self, name: &str, visible_text: &str) -> Result<()> {
        self.record(format!("select:{}={}", name, visible_text));
        Ok(())
    }

    async fn submit(&self) -> Result<()> {
        self.record("submit".to_string());
        Ok(())
    }

    async fn page_source(&self) -> Result<String> {
        Ok(self.result_page.clone())
    }

    async fn close(&mut self) -> Result<()> {
        *self.closed.lock().unwrap() = true;
        Ok(())
    }
}

fn test_config() -> ScraperConfig {
    ScraperConfig {
        settle_delay_ms: 0,
        ..Default::default()
    }
}

fn query() -> SearchQuery {
    SearchQuery::new("W.P.(C)", "12345", "2024")
}

#[tokio::test]
async fn scenario_a_clean_search_parses_record() {
    let page = "<html><body><table>\
                <tr><td>Petitioner</td><td>Test Petitioner</td></tr>\
                <tr><td>Respondent</td><td>Test Respondent</td></tr>\
                </table></body></html>";
    let session = MockSession::new(page);
    let mut scraper = CaseScraper::with_session(session, test_config());

    let outcome = scraper.search(&query()).await;

    match outcome {
        Outcome::Parsed(record) => {
            assert_eq!(record.petitioner.as_deref(), Some("Test Petitioner"));
            assert_eq!(record.respondent.as_deref(), Some("Test Respondent"));
            assert!(record.orders.is_empty());
        }
        other => panic!("expected Parsed, got {:?}", other),
    }
}

#[tokio::test]
async fn scenario_a_fills_form_in_order() {
    let session = MockSession::new("<html></html>");
    let mut scraper = CaseScraper::with_session(session, test_config());

    let outcome = scraper.search(&query()).await;
    assert!(outcome.is_parsed());

    let calls = scraper.session_ref().calls();
    let fill_calls: Vec<&String> = calls
        .iter()
        .filter(|c| c.starts_with("select:") || c.starts_with("fill:"))
        .collect();
    assert_eq!(
        fill_calls,
        vec!["select:case_type=W.P.(C)", "fill:case_number=12345", "select:year=2024"]
    );
    assert!(calls.contains(&"submit".to_string()));
}

#[tokio::test]
async fn scenario_b_visible_challenge_blocks_attempt() {
    let session = MockSession::new("<html></html>").with_challenge(true);
    let mut scraper = CaseScraper::with_session(session, test_config());

    let outcome = scraper.search(&query()).await;
    assert!(matches!(outcome, Outcome::ChallengeRequired));

    // The attempt aborted before submission
    assert!(!scraper.session_ref().calls().contains(&"submit".to_string()));
}

#[tokio::test]
async fn scenario_b_hidden_challenge_control_proceeds() {
    let session = MockSession::new("<html></html>").with_challenge(false);
    let mut scraper = CaseScraper::with_session(session, test_config());

    let outcome = scraper.search(&query()).await;
    assert!(outcome.is_parsed());
}

#[tokio::test]
async fn scenario_c_supplied_code_then_negative_page() {
    let session = MockSession::new("<html><body>Invalid Case Number</body></html>").with_challenge(true);
    let mut scraper = CaseScraper::with_session(session, test_config());

    let outcome = scraper.search(&query().with_challenge_code("AB12")).await;

    match outcome {
        Outcome::Failure { reason } => assert!(reason.contains("invalid case number")),
        other => panic!("expected Failure, got {:?}", other),
    }

    // The code was forwarded into the form before submission
    assert!(scraper
        .session_ref()
        .calls()
        .contains(&"fill:captcha=AB12".to_string()));
}

#[tokio::test]
async fn scenario_c_code_without_control_is_ignored() {
    let session = MockSession::new("<html></html>");
    let mut scraper = CaseScraper::with_session(session, test_config());

    let outcome = scraper.search(&query().with_challenge_code("AB12")).await;
    assert!(outcome.is_parsed());
    assert!(!scraper
        .session_ref()
        .calls()
        .iter()
        .any(|c| c.starts_with("fill:captcha")));
}

#[tokio::test]
async fn scenario_d_orders_table_with_relative_link() {
    let page = "<html><body><table>\
                <tr><th>Order Date</th><th>Link</th></tr>\
                <tr><td>15-03-2023</td><td><a href='download.pdf'>get</a></td></tr>\
                </table></body></html>";
    let session = MockSession::new(page);
    let mut scraper = CaseScraper::with_session(session, test_config());

    let outcome = scraper.search(&query()).await;

    match outcome {
        Outcome::Parsed(record) => {
            assert_eq!(record.orders.len(), 1);
            assert_eq!(record.orders[0].date.as_deref(), Some("15-03-2023"));
            assert_eq!(
                record.orders[0].document_url.as_deref(),
                Some("https://delhihighcourt.nic.in/download.pdf")
            );
        }
        other => panic!("expected Parsed, got {:?}", other),
    }
}

#[tokio::test]
async fn navigation_failure_becomes_failure_outcome() {
    let session = MockSession::new("<html></html>").with_navigation_error("Navigation timeout");
    let mut scraper = CaseScraper::with_session(session, test_config());

    let outcome = scraper.search(&query()).await;
    match outcome {
        Outcome::Failure { reason } => assert!(reason.contains("Navigation timeout")),
        other => panic!("expected Failure, got {:?}", other),
    }
}

#[tokio::test]
async fn close_is_idempotent() {
    let session = MockSession::new("<html></html>");
    let mut scraper = CaseScraper::with_session(session, test_config());

    scraper.close().await.unwrap();
    scraper.close().await.unwrap();
    assert!(scraper.session_ref().is_closed());
}
