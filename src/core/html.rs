// src/core/html.rs
//
// Document navigation over `scraper`. Lookups follow descendant semantics:
// rows of a table include rows of tables nested inside it.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

fn sel(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector")
}

pub static TABLE: LazyLock<Selector> = LazyLock::new(|| sel("table"));
pub static ROW: LazyLock<Selector> = LazyLock::new(|| sel("tr"));
pub static HEADER_CELL: LazyLock<Selector> = LazyLock::new(|| sel("th"));
pub static DATA_CELL: LazyLock<Selector> = LazyLock::new(|| sel("td"));
pub static ANY_CELL: LazyLock<Selector> = LazyLock::new(|| sel("th, td"));
pub static LINK: LazyLock<Selector> = LazyLock::new(|| sel("a"));
pub static IMAGE: LazyLock<Selector> = LazyLock::new(|| sel("img"));
pub static HEADING: LazyLock<Selector> = LazyLock::new(|| sel("h1, h2, h3, h4, h5, h6"));

pub fn parse(doc: &str) -> Html {
    Html::parse_document(doc)
}

/// All descendant text, trimmed at both ends.
pub fn text_of(el: ElementRef<'_>) -> String {
    s!(el.text().collect::<String>().trim())
}

pub fn tables(doc: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    doc.select(&TABLE)
}

pub fn rows<'a>(table: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    table.select(&ROW)
}

pub fn first_header_cell(row: ElementRef<'_>) -> Option<ElementRef<'_>> {
    row.select(&HEADER_CELL).next()
}

pub fn first_data_cell(row: ElementRef<'_>) -> Option<ElementRef<'_>> {
    row.select(&DATA_CELL).next()
}

/// The `n`th cell of a row (0-based), `th` and `td` alike, in document order.
pub fn nth_cell(row: ElementRef<'_>, n: usize) -> Option<ElementRef<'_>> {
    row.select(&ANY_CELL).nth(n)
}

/// First row whose first header cell reads exactly `label` (after trimming).
pub fn row_with_header<'a>(table: ElementRef<'a>, label: &str) -> Option<ElementRef<'a>> {
    rows(table).find(|row| first_header_cell(*row).is_some_and(|th| text_of(th) == label))
}

/// First heading (any level) whose trimmed text contains `phrase`.
pub fn heading_containing<'a>(doc: &'a Html, phrase: &str) -> Option<ElementRef<'a>> {
    doc.select(&HEADING).find(|h| text_of(*h).contains(phrase))
}

/// First `<table>` among the element siblings following `el`.
pub fn next_sibling_table(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sib| sib.value().name().eq_ignore_ascii_case("table"))
}

/// Text of the element's parent, or its own text at the root.
pub fn parent_text(el: ElementRef<'_>) -> String {
    el.parent()
        .and_then(ElementRef::wrap)
        .map(text_of)
        .unwrap_or_else(|| text_of(el))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_with_header_matches_trimmed_exact() {
        let doc = parse(
            r#"<table>
                <tr><th>Rate-Up Agents (old)</th><td>x</td></tr>
                <tr><th>  Rate-Up Agents  </th><td>hit</td></tr>
            </table>"#,
        );
        let table = tables(&doc).next().unwrap();
        let row = row_with_header(table, "Rate-Up Agents").unwrap();
        assert_eq!(text_of(first_data_cell(row).unwrap()), "hit");
    }

    #[test]
    fn next_sibling_table_skips_non_tables() {
        let doc = parse(
            r#"<div><h2>Warp Banner Dates</h2><p>intro</p><table id="t"><tr><td>a</td></tr></table></div>"#,
        );
        let h = heading_containing(&doc, "Banner Dates").unwrap();
        let t = next_sibling_table(h).unwrap();
        assert_eq!(t.value().attr("id"), Some("t"));
    }

    #[test]
    fn next_sibling_table_none_when_absent() {
        let doc = parse(r#"<div><h3>Warp Banner Dates</h3><p>nothing here</p></div>"#);
        let h = heading_containing(&doc, "Warp Banner Dates").unwrap();
        assert!(next_sibling_table(h).is_none());
    }

    #[test]
    fn nth_cell_counts_th_and_td() {
        let doc = parse(r#"<table><tr><th>first</th><td>second</td></tr></table>"#);
        let row = rows(tables(&doc).next().unwrap()).next().unwrap();
        assert_eq!(text_of(nth_cell(row, 1).unwrap()), "second");
        assert!(nth_cell(row, 2).is_none());
    }

    #[test]
    fn parent_text_covers_siblings() {
        let doc = parse(r#"<table><tr><td><span><a>Name</a> (S-Rank)</span></td></tr></table>"#);
        let a = doc.select(&LINK).next().unwrap();
        assert_eq!(parent_text(a), "Name (S-Rank)");
    }
}
