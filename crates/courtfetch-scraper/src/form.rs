//! Search form population

use crate::error::Result;
use crate::session::AutomationSession;
use courtfetch_core::SearchQuery;
use tracing::debug;

/// Form control names on the case-status search page
pub const CASE_TYPE_CONTROL: &str = "case_type";
pub const CASE_NUMBER_CONTROL: &str = "case_number";
pub const YEAR_CONTROL: &str = "year";
pub const CHALLENGE_CONTROL: &str = "captcha";

/// Populate the three required search fields.
///
/// Challenge handling is a separate step ([`crate::challenge`]); this
/// only fills case type, case number, and year.
pub async fn fill_search_fields<S: AutomationSession + ?Sized>(
    session: &S,
    query: &SearchQuery,
) -> Result<()> {
    debug!("Filling search form for {}", query.reference());

    session.select_option(CASE_TYPE_CONTROL, &query.case_type).await?;
    session.fill_text(CASE_NUMBER_CONTROL, &query.case_number).await?;
    session.select_option(YEAR_CONTROL, &query.year).await?;

    Ok(())
}
