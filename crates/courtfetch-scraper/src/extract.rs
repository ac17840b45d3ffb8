//! Heuristic field extraction from a parsed result page
//!
//! Each extractor is independent and best-effort: finding nothing is
//! normal and yields `None`, never an error. Keyword extractors scan
//! table rows in document order, treating cell 0 as the label and
//! cell 1 as the value; the first match wins and later matches for the
//! same field are ignored.

use crate::document::ParsedDocument;
use crate::orders;
use courtfetch_core::CaseRecord;
use regex::Regex;
use std::sync::OnceLock;

/// Recognizes date substrings like "01-01-2024" and "1/1/24"
static DATE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// First date-like substring in `text`, if any
pub(crate) fn find_date(text: &str) -> Option<String> {
    let pattern = DATE_PATTERN
        .get_or_init(|| Regex::new(r"\b\d{1,2}[-/]\d{1,2}[-/]\d{2,4}\b").expect("valid date regex"));
    pattern.find(text).map(|m| m.as_str().to_string())
}

/// Selector candidates for the case title, in priority order
const TITLE_SELECTORS: &[&str] = &["h2", "h3", ".case-title", "#case-title"];

/// Titles shorter than this are assumed to be stray headings
const MIN_TITLE_LEN: usize = 10;

const STATUS_KEYWORDS: &[&str] = &["status", "stage", "current"];
const BENCH_KEYWORDS: &[&str] = &["bench", "judge", "coram", "before"];

/// Assemble a full case record from a parsed result page.
/// `origin` is the scheme+host prefix used to resolve document links.
pub fn parse_case_record(doc: &ParsedDocument, origin: &str) -> CaseRecord {
    let (petitioner, respondent) = extract_parties(doc);
    let (filing_date, next_hearing_date) = extract_dates(doc);

    CaseRecord {
        title: extract_title(doc),
        petitioner,
        respondent,
        filing_date,
        next_hearing_date,
        status: extract_keyword_value(doc, STATUS_KEYWORDS),
        bench_info: extract_keyword_value(doc, BENCH_KEYWORDS),
        orders: orders::extract_orders(doc, origin),
    }
}

/// Case title: first selector candidate with plausible text, falling
/// back to title-labelled table cells
pub fn extract_title(doc: &ParsedDocument) -> Option<String> {
    for selector in TITLE_SELECTORS {
        if let Some(text) = doc.select_first_text(selector) {
            if text.len() > MIN_TITLE_LEN {
                return Some(text);
            }
        }
    }

    for table in doc.tables() {
        for row in &table.rows {
            for cell in &row.cells {
                if (cell.text.contains("Case Title") || cell.text.contains("Title"))
                    && cell.text.len() > MIN_TITLE_LEN
                {
                    return Some(cell.text.clone());
                }
            }
        }
    }

    None
}

/// Petitioner and respondent from label/value rows
pub fn extract_parties(doc: &ParsedDocument) -> (Option<String>, Option<String>) {
    let mut petitioner = None;
    let mut respondent = None;

    for table in doc.tables() {
        for row in &table.rows {
            let Some((label, value)) = row.label_value() else {
                continue;
            };
            if value.is_empty() {
                continue;
            }

            if petitioner.is_none() && label.contains("petitioner") {
                petitioner = Some(value.to_string());
            } else if respondent.is_none() && label.contains("respondent") {
                respondent = Some(value.to_string());
            }
        }
    }

    (petitioner, respondent)
}

/// Filing date and next hearing date from label/value rows. The value
/// kept is the first date-like substring of the value cell, not the
/// whole cell.
pub fn extract_dates(doc: &ParsedDocument) -> (Option<String>, Option<String>) {
    let mut filing_date = None;
    let mut next_hearing_date = None;

    for table in doc.tables() {
        for row in &table.rows {
            let Some((label, value)) = row.label_value() else {
                continue;
            };

            if filing_date.is_none() && (label.contains("filing") || label.contains("registration")) {
                filing_date = find_date(value);
            } else if next_hearing_date.is_none() && (label.contains("next") || label.contains("hearing")) {
                next_hearing_date = find_date(value);
            }
        }
    }

    (filing_date, next_hearing_date)
}

/// Value of the first row whose label contains any of `keywords`
fn extract_keyword_value(doc: &ParsedDocument, keywords: &[&str]) -> Option<String> {
    for table in doc.tables() {
        for row in &table.rows {
            let Some((label, value)) = row.label_value() else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            if keywords.iter().any(|k| label.contains(k)) {
                return Some(value.to_string());
            }
        }
    }
    None
}
