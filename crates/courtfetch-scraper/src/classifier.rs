//! Result page classification
//!
//! The site reports both "no such case" and rejected challenge codes as
//! free-text messages in the result page. Classification is a phrase
//! scan over the lower-cased page source and deliberately does not
//! distinguish the two (the site gives nothing to distinguish them by).

/// Phrases that mark a result page as a failed attempt
pub const FAILURE_PHRASES: &[&str] = &[
    "no record found",
    "invalid case number",
    "captcha mismatch",
    "error occurred",
    "try again",
];

/// Scan the page source for a negative-outcome phrase, returning the
/// first phrase found
pub fn classify(page_source: &str) -> Option<&'static str> {
    let lower = page_source.to_lowercase();
    FAILURE_PHRASES.iter().copied().find(|phrase| lower.contains(phrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_phrase_any_case() {
        assert_eq!(classify("<b>No Record Found</b>"), Some("no record found"));
        assert_eq!(classify("INVALID CASE NUMBER"), Some("invalid case number"));
        assert_eq!(classify("Captcha Mismatch, please Try Again"), Some("captcha mismatch"));
    }

    #[test]
    fn test_clean_page_passes() {
        assert_eq!(classify("<table><tr><td>Petitioner</td><td>X</td></tr></table>"), None);
    }

    #[test]
    fn test_phrase_inside_markup() {
        let page = "<html><body><div class='alert'>An error occurred while processing</div></body></html>";
        assert_eq!(classify(page), Some("error occurred"));
    }

    #[test]
    fn test_empty_page_passes() {
        assert_eq!(classify(""), None);
    }
}
