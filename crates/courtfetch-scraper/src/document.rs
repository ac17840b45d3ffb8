//! Document model adapter over rendered page markup
//!
//! Wraps the HTML parser behind a small read-only surface: selector
//! lookup plus materialized table/row/cell data. Field extractors
//! depend only on this module, never on parser types. Parsing is
//! best-effort and never fails; malformed markup yields whatever tree
//! the parser can recover.

use scraper::{Html, Selector};

/// A parsed result page
pub struct ParsedDocument {
    html: Html,
    tables: Vec<TableData>,
}

/// One table, with header text pre-lowered for keyword matching
#[derive(Debug, Clone)]
pub struct TableData {
    /// Space-joined, lower-cased text of the table's header cells
    pub header_text: String,
    /// All rows in document order, header rows included
    pub rows: Vec<RowData>,
}

/// One table row
#[derive(Debug, Clone)]
pub struct RowData {
    pub cells: Vec<CellData>,
    /// href targets of the row's anchors, in document order
    pub anchors: Vec<String>,
}

/// One table cell
#[derive(Debug, Clone)]
pub struct CellData {
    pub text: String,
    pub is_header: bool,
}

impl RowData {
    /// Interpret the row as a label/value pair: cell 0 lower-cased as
    /// the label, cell 1 trimmed as the value. `None` for rows with
    /// fewer than two cells.
    pub fn label_value(&self) -> Option<(String, &str)> {
        if self.cells.len() < 2 {
            return None;
        }
        Some((self.cells[0].text.to_lowercase(), self.cells[1].text.as_str()))
    }

    /// Non-header cells only, as used by docket-row scans
    pub fn data_cells(&self) -> impl Iterator<Item = &CellData> {
        self.cells.iter().filter(|c| !c.is_header)
    }
}

impl ParsedDocument {
    /// Parse page markup, tolerating malformed input
    pub fn parse(source: &str) -> Self {
        let html = Html::parse_document(source);
        let tables = collect_tables(&html);
        Self { html, tables }
    }

    /// All tables in document order
    pub fn tables(&self) -> &[TableData] {
        &self.tables
    }

    /// Text of the first element matching a CSS selector, if any.
    /// Invalid selectors behave as no-match.
    pub fn select_first_text(&self, selector: &str) -> Option<String> {
        let parsed = Selector::parse(selector).ok()?;
        self.html
            .select(&parsed)
            .map(|el| normalize_text(el.text()))
            .find(|text| !text.is_empty())
    }
}

fn collect_tables(html: &Html) -> Vec<TableData> {
    // Static selectors, parse cannot fail
    let table_sel = Selector::parse("table").expect("valid selector");
    let th_sel = Selector::parse("th").expect("valid selector");
    let tr_sel = Selector::parse("tr").expect("valid selector");
    let cell_sel = Selector::parse("td, th").expect("valid selector");
    let anchor_sel = Selector::parse("a[href]").expect("valid selector");

    let mut tables = Vec::new();
    for table in html.select(&table_sel) {
        let header_text = table
            .select(&th_sel)
            .map(|th| normalize_text(th.text()))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        let mut rows = Vec::new();
        for tr in table.select(&tr_sel) {
            let cells = tr
                .select(&cell_sel)
                .map(|cell| CellData {
                    text: normalize_text(cell.text()),
                    is_header: cell.value().name() == "th",
                })
                .collect();

            let anchors = tr
                .select(&anchor_sel)
                .filter_map(|a| a.value().attr("href"))
                .map(str::to_string)
                .collect();

            rows.push(RowData { cells, anchors });
        }

        tables.push(TableData { header_text, rows });
    }
    tables
}

/// Trim and collapse internal whitespace from a text-node iterator
fn normalize_text<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
