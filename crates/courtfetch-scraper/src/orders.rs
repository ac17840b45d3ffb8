//! Order/judgment docket extraction
//!
//! An "orders table" is any table whose header text mentions orders,
//! dates, or links. Data rows become [`OrderRecord`]s when they carry a
//! date or a document link; rows with neither are dropped. Records keep
//! table/document order.

use crate::document::ParsedDocument;
use crate::extract::find_date;
use courtfetch_core::OrderRecord;
use tracing::debug;

const ORDER_TABLE_KEYWORDS: &[&str] = &["order", "date", "link"];

/// Extract docket entries from every qualifying table
pub fn extract_orders(doc: &ParsedDocument, origin: &str) -> Vec<OrderRecord> {
    let mut records = Vec::new();

    for table in doc.tables() {
        if !ORDER_TABLE_KEYWORDS.iter().any(|k| table.header_text.contains(k)) {
            continue;
        }

        // First row is the header row
        for row in table.rows.iter().skip(1) {
            let cells: Vec<&str> = row.data_cells().map(|c| c.text.as_str()).collect();
            if cells.len() < 2 {
                continue;
            }

            let date = cells.iter().find_map(|cell| find_date(cell));

            let document_url = row
                .anchors
                .iter()
                .find(|href| {
                    let lower = href.to_lowercase();
                    lower.contains(".pdf") || lower.contains("download")
                })
                .map(|href| resolve_document_url(origin, href));

            if date.is_none() && document_url.is_none() {
                continue;
            }

            let raw_text = cells.join(" ");
            records.push(OrderRecord::new(date, document_url, raw_text));
        }
    }

    debug!("Extracted {} order records", records.len());
    records
}

/// Resolve a document reference to absolute form against the site
/// origin; references that already carry a scheme pass through
pub fn resolve_document_url(origin: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else if href.starts_with('/') {
        format!("{}{}", origin, href)
    } else {
        format!("{}/{}", origin, href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://delhihighcourt.nic.in";

    fn doc(body: &str) -> ParsedDocument {
        ParsedDocument::parse(&format!("<html><body>{}</body></html>", body))
    }

    #[test]
    fn test_resolve_root_relative() {
        assert_eq!(resolve_document_url(ORIGIN, "/x.pdf"), "https://delhihighcourt.nic.in/x.pdf");
    }

    #[test]
    fn test_resolve_bare_relative() {
        assert_eq!(resolve_document_url(ORIGIN, "x.pdf"), "https://delhihighcourt.nic.in/x.pdf");
    }

    #[test]
    fn test_resolve_absolute_unchanged() {
        assert_eq!(resolve_document_url(ORIGIN, "https://host/x.pdf"), "https://host/x.pdf");
    }

    #[test]
    fn test_orders_table_extraction() {
        let d = doc(
            "<table>\
             <tr><th>Order Date</th><th>Link</th></tr>\
             <tr><td>01-01-2024</td><td><a href='/orders/1.pdf'>View</a></td></tr>\
             </table>",
        );

        let orders = extract_orders(&d, ORIGIN);
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].date.as_deref(), Some("01-01-2024"));
        assert_eq!(
            orders[0].document_url.as_deref(),
            Some("https://delhihighcourt.nic.in/orders/1.pdf")
        );
        assert_eq!(orders[0].kind, "Order");
        assert_eq!(orders[0].raw_text, "01-01-2024 View");
    }

    #[test]
    fn test_relative_download_link() {
        let d = doc(
            "<table>\
             <tr><th>Order</th><th>Date</th></tr>\
             <tr><td>15-03-2023</td><td><a href='download.pdf'>get</a></td></tr>\
             </table>",
        );

        let orders = extract_orders(&d, ORIGIN);
        assert_eq!(
            orders[0].document_url.as_deref(),
            Some("https://delhihighcourt.nic.in/download.pdf")
        );
    }

    #[test]
    fn test_non_order_table_ignored() {
        let d = doc(
            "<table>\
             <tr><th>Petitioner</th><th>Respondent</th></tr>\
             <tr><td>A on 01-01-2024</td><td><a href='/b.pdf'>b</a></td></tr>\
             </table>",
        );
        assert!(extract_orders(&d, ORIGIN).is_empty());
    }

    #[test]
    fn test_row_without_date_or_link_dropped() {
        let d = doc(
            "<table>\
             <tr><th>Order Date</th><th>Link</th></tr>\
             <tr><td>awaiting upload</td><td>pending</td></tr>\
             <tr><td>02-02-2024</td><td>no link yet</td></tr>\
             </table>",
        );

        let orders = extract_orders(&d, ORIGIN);
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].date.as_deref(), Some("02-02-2024"));
        assert!(orders[0].document_url.is_none());
    }

    #[test]
    fn test_first_matching_anchor_wins() {
        let d = doc(
            "<table>\
             <tr><th>Order Date Link</th></tr>\
             <tr><td>01-01-2024</td>\
             <td><a href='/view.html'>view</a>\
             <a href='/first.pdf'>one</a>\
             <a href='/second.pdf'>two</a></td></tr>\
             </table>",
        );

        let orders = extract_orders(&d, ORIGIN);
        assert_eq!(
            orders[0].document_url.as_deref(),
            Some("https://delhihighcourt.nic.in/first.pdf")
        );
    }

    #[test]
    fn test_rows_keep_document_order() {
        let d = doc(
            "<table>\
             <tr><th>Order Date</th><th>Link</th></tr>\
             <tr><td>05-05-2024</td><td><a href='/late.pdf'>x</a></td></tr>\
             <tr><td>01-01-2023</td><td><a href='/early.pdf'>y</a></td></tr>\
             </table>",
        );

        let orders = extract_orders(&d, ORIGIN);
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].date.as_deref(), Some("05-05-2024"));
        assert_eq!(orders[1].date.as_deref(), Some("01-01-2023"));
    }

    #[test]
    fn test_uppercase_pdf_extension_matches() {
        let d = doc(
            "<table>\
             <tr><th>Link</th></tr>\
             <tr><td>a</td><td><a href='/ORDER.PDF'>x</a></td></tr>\
             </table>",
        );

        let orders = extract_orders(&d, ORIGIN);
        assert_eq!(
            orders[0].document_url.as_deref(),
            Some("https://delhihighcourt.nic.in/ORDER.PDF")
        );
    }
}
