// src/core/html.rs
//
// Generic table inference: every `<table>` in a document becomes a DataSet.
//
// Header rows come from `<thead>`, or, when there is none, from the leading rows
// made only of `<th>` cells. With several header rows the last one names the
// columns. `colspan` repeats a cell across columns and `rowspan` carries it down
// into the following rows of the same section. Elements styled `display:none`
// are ignored. Tables without any visible text are skipped.

use scraper::{ElementRef, Html, Node, Selector};

use crate::core::sanitize::normalize_ws;
use crate::data::DataSet;

const MAX_SPAN: usize = 64;

pub fn parse(body: &str) -> Html {
    Html::parse_document(body)
}

/// All tables in document order (outer tables before the tables nested in them).
pub fn read_tables(doc: &Html) -> Vec<DataSet> {
    let Ok(sel) = Selector::parse("table") else { return Vec::new() };
    doc.select(&sel)
        .filter(|t| !is_hidden(*t) && !visible_text(*t).trim().is_empty())
        .filter_map(read_table)
        .collect()
}

/// Read one `<table>` element. Nested tables are not descended into.
pub fn read_table(table: ElementRef<'_>) -> Option<DataSet> {
    let mut head: Vec<RawRow> = Vec::new();
    let mut body: Vec<RawRow> = Vec::new();

    for (in_head, tr) in table_rows(table) {
        let row = read_row(tr);
        if in_head { head.push(row); } else { body.push(row); }
    }

    // No <thead>: promote leading all-<th> rows.
    if head.is_empty() {
        let lead = body.iter().take_while(|r| r.all_th).count();
        head = body.drain(..lead).collect();
    }

    let mut head = expand_spans(head);
    let rows = expand_spans(body);

    if head.is_empty() && rows.is_empty() {
        return None;
    }

    let mut ds = DataSet { headers: head.pop(), rows };
    let ncols = ds.ncols();
    for r in &mut ds.rows {
        r.resize(ncols, s!());
    }
    Some(ds)
}

struct Cell {
    text: String,
    colspan: usize,
    rowspan: usize,
}

struct RawRow {
    cells: Vec<Cell>,
    all_th: bool,
}

/// (column it started in, text, rows still to fill)
type Carry = (usize, String, usize);

/// Lay out one section's rows on a grid: colspan repeats a cell to the right,
/// rowspan repeats it into the rows below. Rows left empty are dropped.
fn expand_spans(rows: Vec<RawRow>) -> Vec<Vec<String>> {
    let mut out: Vec<Vec<String>> = Vec::new();
    let mut carry: Vec<Carry> = Vec::new();

    for row in rows {
        let mut cells: Vec<String> = Vec::new();
        let mut next: Vec<Carry> = Vec::new();
        let mut pending = carry.into_iter().peekable();

        for cell in row.cells {
            while let Some(c) = pending.next_if(|(col, _, _)| *col <= cells.len()) {
                place_carried(&mut cells, &mut next, c);
            }
            for _ in 0..cell.colspan {
                if cell.rowspan > 1 {
                    next.push((cells.len(), cell.text.clone(), cell.rowspan - 1));
                }
                cells.push(cell.text.clone());
            }
        }
        for c in pending {
            place_carried(&mut cells, &mut next, c);
        }

        out.push(cells);
        carry = next;
    }

    // Spans reaching past the last row still produce rows.
    while !carry.is_empty() {
        let mut cells = Vec::new();
        let mut next = Vec::new();
        for c in carry {
            place_carried(&mut cells, &mut next, c);
        }
        out.push(cells);
        carry = next;
    }

    out.retain(|r| !r.is_empty());
    out
}

fn place_carried(cells: &mut Vec<String>, next: &mut Vec<Carry>, (col, text, left): Carry) {
    if left > 1 {
        next.push((col, text.clone(), left - 1));
    }
    cells.push(text);
}

/// `<tr>` children of the table and of its row groups, tagged with "is header".
fn table_rows<'a>(table: ElementRef<'a>) -> Vec<(bool, ElementRef<'a>)> {
    let mut out = Vec::new();
    for child in table.children().filter_map(ElementRef::wrap) {
        if is_hidden(child) { continue; }
        match child.value().name() {
            "tr" => out.push((false, child)),
            group @ ("thead" | "tbody" | "tfoot") => {
                let in_head = group == "thead";
                out.extend(
                    child.children()
                        .filter_map(ElementRef::wrap)
                        .filter(|e| e.value().name() == "tr" && !is_hidden(*e))
                        .map(|tr| (in_head, tr)),
                );
            }
            _ => {}
        }
    }
    out
}

fn span(cell: ElementRef<'_>, attr: &str) -> usize {
    cell.value().attr(attr)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(1)
        .clamp(1, MAX_SPAN)
}

fn read_row(tr: ElementRef<'_>) -> RawRow {
    let mut cells = Vec::new();
    let mut all_th = true;
    for cell in tr.children().filter_map(ElementRef::wrap) {
        let name = cell.value().name();
        if name != "td" && name != "th" { continue; }
        if is_hidden(cell) { continue; }
        if name == "td" { all_th = false; }

        cells.push(Cell {
            text: cell_text(cell),
            colspan: span(cell, "colspan"),
            rowspan: span(cell, "rowspan"),
        });
    }
    RawRow { all_th: all_th && !cells.is_empty(), cells }
}

/// True when the element's inline style hides it.
fn is_hidden(el: ElementRef<'_>) -> bool {
    el.value().attr("style").is_some_and(|style| {
        let compact: String = style
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        compact.contains("display:none")
    })
}

/// Text of `el`, leaving out hidden descendants.
fn visible_text(el: ElementRef<'_>) -> String {
    let mut out = String::new();
    for child in el.children() {
        match child.value() {
            Node::Text(t) => out.push_str(t),
            Node::Element(_) => {
                if let Some(e) = ElementRef::wrap(child) {
                    if !is_hidden(e) {
                        out.push_str(&visible_text(e));
                    }
                }
            }
            _ => {}
        }
    }
    out
}

/// Visible text of an element with whitespace collapsed.
pub fn cell_text(el: ElementRef<'_>) -> String {
    normalize_ws(&visible_text(el))
}
