//! Challenge-response (CAPTCHA) detection
//!
//! Runs after the search fields are filled and before submission. The
//! engine never attempts to solve a challenge; it either forwards a
//! caller-supplied code or aborts the attempt so the caller can
//! re-prompt.

use crate::error::Result;
use crate::form::CHALLENGE_CONTROL;
use crate::session::AutomationSession;
use courtfetch_core::{CourtFetchError, SearchQuery};
use tracing::{debug, warn};

/// Apply the challenge policy for this attempt:
///
/// - control visible, no code supplied -> `ChallengeRequired`
/// - control present, code supplied -> fill it and proceed
/// - control absent -> proceed unchanged (never an error)
pub async fn apply_challenge_policy<S: AutomationSession + ?Sized>(
    session: &S,
    query: &SearchQuery,
) -> Result<()> {
    let visibility = session.control_visible(CHALLENGE_CONTROL).await?;

    match (&query.challenge_code, visibility) {
        (Some(code), Some(_)) => {
            debug!("Challenge control present, filling supplied code");
            session.fill_text(CHALLENGE_CONTROL, code).await
        }
        (Some(_), None) => {
            debug!("Challenge code supplied but no control on page, ignoring");
            Ok(())
        }
        (None, Some(true)) => {
            warn!("Visible challenge control and no code supplied, aborting attempt");
            Err(CourtFetchError::ChallengeRequired)
        }
        (None, _) => {
            debug!("No visible challenge control");
            Ok(())
        }
    }
}
