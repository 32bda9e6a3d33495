// tests/volume_extract.rs
//
// Unusual volume extraction: selector, six-cell threshold, trimming, order.
//
use spurt_scan::core::net::RawPage;
use spurt_scan::data::DataSet;
use spurt_scan::error::ScanError;
use spurt_scan::specs::unusual_volume::{self, HEADERS, ROW_SELECTOR};

fn row(cells: &[&str]) -> String {
    let mut s = String::from("<tr>");
    for c in cells {
        s.push_str(&format!("<td>{c}</td>"));
    }
    s.push_str("</tr>");
    s
}

fn page(rows: &[String]) -> RawPage {
    let body = format!(
        "<html><body><table><tbody class=\"tv-data-table__tbody\">{}</tbody></table></body></html>",
        rows.concat()
    );
    RawPage::new("https://example.test/volume", body)
}

#[test]
fn rows_below_six_cells_are_skipped_in_order() {
    let p = page(&[
        row(&["  ADANIENT ", " 3,120.5", "+2.1%", "x", "y", " 4.52 ", "z"]),
        row(&["hdr", "a", "b"]),
        row(&["\n  SBIN\n", "812.0 ", " -0.7% ", "x", "y", "3.10"]),
        row(&["sep", "sep"]),
    ]);

    let movers = unusual_volume::extract(&p).expect("two usable rows");
    assert_eq!(movers.rows.len(), 2);

    let ds = DataSet::from(movers);
    assert_eq!(ds.headers.as_deref(), Some(&HEADERS.map(String::from)[..]));
    assert_eq!(ds.rows[0], vec!["ADANIENT", "3,120.5", "+2.1%", "4.52"]);
    assert_eq!(ds.rows[1], vec!["SBIN", "812.0", "-0.7%", "3.10"]);
}

#[test]
fn nested_markup_inside_cells_is_flattened() {
    let p = page(&[row(&[
        "<a href=\"/s\"><span>HDFCBANK</span></a>",
        "<span>1,650</span>",
        "<span class=\"up\">1.0%</span>",
        "-",
        "-",
        "<b>2.2</b>",
    ])]);
    let movers = unusual_volume::extract(&p).unwrap();
    assert_eq!(movers.rows[0].stock, "HDFCBANK");
    assert_eq!(movers.rows[0].rel_volume, "2.2");
}

#[test]
fn no_matching_rows_is_a_selector_miss() {
    let p = RawPage::new("u", "<table><tbody><tr><td>1</td></tr></tbody></table>");
    match unusual_volume::extract(&p) {
        Err(ScanError::SelectorMiss { selector, matched }) => {
            assert_eq!(selector, ROW_SELECTOR);
            assert_eq!(matched, 0);
        }
        other => panic!("expected selector miss, got {other:?}"),
    }
}

#[test]
fn only_short_rows_is_a_selector_miss() {
    let p = page(&[row(&["a", "b"]), row(&["c"])]);
    match unusual_volume::extract(&p) {
        Err(ScanError::SelectorMiss { matched, .. }) => assert_eq!(matched, 2),
        other => panic!("expected selector miss, got {other:?}"),
    }
}
