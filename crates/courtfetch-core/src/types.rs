//! Data model for case searches and extracted records

use serde::{Deserialize, Serialize};

/// One search attempt's input, immutable once built.
///
/// The three required fields must be non-empty; validation is the
/// caller's responsibility, not the extraction core's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Case-type code, e.g. "W.P.(C)"
    pub case_type: String,
    /// Case number as entered by the user
    pub case_number: String,
    /// Filing year, e.g. "2024"
    pub year: String,
    /// Challenge-response code, if the user has already answered one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge_code: Option<String>,
}

impl SearchQuery {
    pub fn new(case_type: impl Into<String>, case_number: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            case_type: case_type.into(),
            case_number: case_number.into(),
            year: year.into(),
            challenge_code: None,
        }
    }

    pub fn with_challenge_code(mut self, code: impl Into<String>) -> Self {
        self.challenge_code = Some(code.into());
        self
    }

    /// Human-readable case reference, e.g. "W.P.(C) 12345/2024"
    pub fn reference(&self) -> String {
        format!("{} {}/{}", self.case_type, self.case_number, self.year)
    }
}

/// Structured summary of a court case extracted from a rendered page.
///
/// Every field is best-effort: `None` means the extraction heuristic
/// found no match, not that anything went wrong.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub title: Option<String>,
    pub petitioner: Option<String>,
    pub respondent: Option<String>,
    pub filing_date: Option<String>,
    pub next_hearing_date: Option<String>,
    pub status: Option<String>,
    pub bench_info: Option<String>,
    /// Docket entries in extraction (document) order, not chronological
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
}

/// One dated docket entry, optionally linked to a downloadable file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub date: Option<String>,
    /// Entry kind, "Order" unless the source says otherwise
    #[serde(default = "default_order_kind")]
    pub kind: String,
    /// Absolute URL of the linked document, if any
    pub document_url: Option<String>,
    /// Space-joined text of the source row's cells
    pub raw_text: String,
}

fn default_order_kind() -> String {
    "Order".to_string()
}

impl OrderRecord {
    pub fn new(date: Option<String>, document_url: Option<String>, raw_text: String) -> Self {
        Self {
            date,
            kind: default_order_kind(),
            document_url,
            raw_text,
        }
    }
}

/// Terminal outcome of one search attempt, exactly one per attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Result page parsed into a case record
    Parsed(CaseRecord),
    /// A visible challenge control blocked the attempt; the caller
    /// should re-prompt for a code and resubmit
    ChallengeRequired,
    /// Negative result page, timeout, or infrastructure fault
    Failure { reason: String },
}

impl Outcome {
    pub fn is_parsed(&self) -> bool {
        matches!(self, Outcome::Parsed(_))
    }
}
