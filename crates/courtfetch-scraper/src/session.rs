//! Browser automation session using Chrome DevTools Protocol
//!
//! The extraction engine never touches the driver directly: it talks to
//! the [`AutomationSession`] trait, and [`ChromeSession`] binds that
//! trait to `headless_chrome`. Tests substitute a scripted session.

use crate::error::Result;
use async_trait::async_trait;
use courtfetch_core::{CourtFetchError, ScraperConfig};
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::ffi::OsStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// One browser-automation session: navigation, form population,
/// submission, and raw page retrieval.
///
/// A session is an exclusively-owned, non-reentrant resource: only one
/// attempt may be in flight at a time, and concurrent searches require
/// independent sessions. `close` must be idempotent.
#[async_trait]
pub trait AutomationSession: Send {
    /// Navigate to a URL, blocking until loaded or the configured
    /// timeout elapses
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Wait for a named form control to be present, failing with
    /// `ControlNotFound` if it does not appear
    async fn find_control(&self, name: &str) -> Result<()>;

    /// Visibility of a named control: `Some(true)` present and visible,
    /// `Some(false)` present but hidden, `None` absent. Absence is not
    /// an error.
    async fn control_visible(&self, name: &str) -> Result<Option<bool>>;

    /// Replace the value of a named text control
    async fn fill_text(&self, name: &str, value: &str) -> Result<()>;

    /// Select the option with the given visible text in a named select
    /// control
    async fn select_option(&self, name: &str, visible_text: &str) -> Result<()>;

    /// Submit the form and block until the result page begins loading
    async fn submit(&self) -> Result<()>;

    /// Current rendered markup as text
    async fn page_source(&self) -> Result<String>;

    /// Release all underlying resources; safe to call multiple times
    async fn close(&mut self) -> Result<()>;
}

// Chrome flags from the production driver setup: hardening plus
// render-path switches that are dead weight for form scraping.
const CHROME_ARGS: &[&str] = &[
    "--no-sandbox",
    "--disable-dev-shm-usage",
    "--disable-gpu",
    "--disable-extensions",
    "--disable-plugins",
];

/// Active browser session bound to `headless_chrome`
pub struct ChromeSession {
    /// Underlying browser instance; `None` once closed
    browser: Option<Browser>,
    /// Current active tab
    tab: Arc<Tab>,
    /// Configuration
    config: ScraperConfig,
}

impl ChromeSession {
    /// Launch a new browser instance with the given configuration
    pub async fn launch(config: ScraperConfig) -> Result<Self> {
        info!(
            "Launching browser (headless: {}, size: {}x{})",
            config.headless, config.window_width, config.window_height
        );

        let mut launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((config.window_width, config.window_height)))
            .build()
            .map_err(|e| CourtFetchError::Browser(format!("Failed to build launch options: {}", e)))?;

        for arg in CHROME_ARGS {
            launch_options.args.push(OsStr::new(arg));
        }

        let user_agent_arg = format!("--user-agent={}", config.user_agent);
        launch_options.args.push(OsStr::new(&user_agent_arg));

        let browser = Browser::new(launch_options)
            .map_err(|e| CourtFetchError::Browser(format!("Failed to launch browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| CourtFetchError::Browser(format!("Failed to create tab: {}", e)))?;

        tab.set_default_timeout(Duration::from_secs(config.timeout_seconds));

        info!("Browser launched successfully");

        Ok(Self {
            browser: Some(browser),
            tab,
            config,
        })
    }

    fn ensure_open(&self) -> Result<()> {
        if self.browser.is_none() {
            return Err(CourtFetchError::Browser("Session already closed".to_string()));
        }
        Ok(())
    }

    /// Execute JavaScript in the page context, returning its JSON result
    fn evaluate(&self, script: &str) -> Result<serde_json::Value> {
        let result = self
            .tab
            .evaluate(script, false)
            .map_err(|e| CourtFetchError::Browser(format!("JavaScript evaluation failed: {}", e)))?;

        Ok(result.value.unwrap_or(serde_json::Value::Null))
    }

    fn control_selector(name: &str) -> String {
        format!("[name='{}']", name)
    }
}

#[async_trait]
impl AutomationSession for ChromeSession {
    async fn navigate(&self, url: &str) -> Result<()> {
        self.ensure_open()?;
        debug!("Navigating to {}", url);

        self.tab
            .navigate_to(url)
            .map_err(|e| CourtFetchError::Navigation(format!("Failed to navigate to {}: {}", url, e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| CourtFetchError::Navigation(format!("Navigation timeout for {}: {}", url, e)))?;

        info!("Successfully navigated to {}", url);
        Ok(())
    }

    async fn find_control(&self, name: &str) -> Result<()> {
        self.ensure_open()?;
        let timeout = Duration::from_secs(self.config.timeout_seconds);
        debug!("Waiting for control: {} (timeout: {:?})", name, timeout);

        self.tab
            .wait_for_element_with_custom_timeout(&Self::control_selector(name), timeout)
            .map_err(|_e| CourtFetchError::ControlNotFound(name.to_string()))?;

        Ok(())
    }

    async fn control_visible(&self, name: &str) -> Result<Option<bool>> {
        self.ensure_open()?;
        let script = format!(
            "(() => {{ \
                const el = document.getElementsByName({name})[0]; \
                if (!el) return null; \
                return el.offsetParent !== null \
                    && window.getComputedStyle(el).visibility !== 'hidden'; \
            }})()",
            name = serde_json::to_string(name)?,
        );

        match self.evaluate(&script)? {
            serde_json::Value::Bool(visible) => Ok(Some(visible)),
            _ => Ok(None),
        }
    }

    async fn fill_text(&self, name: &str, value: &str) -> Result<()> {
        self.ensure_open()?;
        debug!("Filling text control: {}", name);

        let script = format!(
            "(() => {{ \
                const el = document.getElementsByName({name})[0]; \
                if (!el) return false; \
                el.value = {value}; \
                el.dispatchEvent(new Event('input', {{ bubbles: true }})); \
                return true; \
            }})()",
            name = serde_json::to_string(name)?,
            value = serde_json::to_string(value)?,
        );

        match self.evaluate(&script)? {
            serde_json::Value::Bool(true) => Ok(()),
            _ => Err(CourtFetchError::ControlNotFound(name.to_string())),
        }
    }

    async fn select_option(&self, name: &str, visible_text: &str) -> Result<()> {
        self.ensure_open()?;
        debug!("Selecting option '{}' in control: {}", visible_text, name);

        let script = format!(
            "(() => {{ \
                const el = document.getElementsByName({name})[0]; \
                if (!el) return 'missing'; \
                for (const opt of el.options) {{ \
                    if (opt.text.trim() === {text}) {{ \
                        el.value = opt.value; \
                        el.dispatchEvent(new Event('change', {{ bubbles: true }})); \
                        return 'ok'; \
                    }} \
                }} \
                return 'nomatch'; \
            }})()",
            name = serde_json::to_string(name)?,
            text = serde_json::to_string(visible_text)?,
        );

        match self.evaluate(&script)?.as_str() {
            Some("ok") => Ok(()),
            Some("missing") => Err(CourtFetchError::ControlNotFound(name.to_string())),
            _ => Err(CourtFetchError::Browser(format!(
                "No option with text '{}' in control '{}'",
                visible_text, name
            ))),
        }
    }

    async fn submit(&self) -> Result<()> {
        self.ensure_open()?;
        debug!("Submitting search form");

        let button = self
            .tab
            .find_element("input[type='submit']")
            .map_err(|_e| CourtFetchError::ControlNotFound("input[type='submit']".to_string()))?;

        button
            .click()
            .map_err(|e| CourtFetchError::Browser(format!("Failed to click submit: {}", e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| CourtFetchError::Navigation(format!("Submission timeout: {}", e)))?;

        Ok(())
    }

    async fn page_source(&self) -> Result<String> {
        self.ensure_open()?;
        self.tab
            .get_content()
            .map_err(|e| CourtFetchError::Browser(format!("Failed to read page source: {}", e)))
    }

    async fn close(&mut self) -> Result<()> {
        if self.browser.take().is_some() {
            info!("Closing browser session");
        }
        // Dropping the Browser tears down the child process; repeated
        // calls are no-ops.
        Ok(())
    }
}

impl Drop for ChromeSession {
    fn drop(&mut self) {
        if self.browser.is_some() {
            debug!("ChromeSession dropped without explicit close, browser will be cleaned up");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_selector() {
        assert_eq!(ChromeSession::control_selector("case_type"), "[name='case_type']");
    }

    #[test]
    fn test_chrome_args_include_hardening_flags() {
        assert!(CHROME_ARGS.contains(&"--no-sandbox"));
        assert!(CHROME_ARGS.contains(&"--disable-gpu"));
    }
}
