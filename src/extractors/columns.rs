// src/extractors/columns.rs
use crate::utils::text::element_text;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

static THEAD_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("thead").expect("Failed to compile THEAD_SELECTOR")
});

pub(crate) static ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("tr").expect("Failed to compile ROW_SELECTOR")
});

// Some sites put headers in <td>, so both count as cells
pub(crate) static CELL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("th, td").expect("Failed to compile CELL_SELECTOR")
});

static TH_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("th").expect("Failed to compile TH_SELECTOR")
});

/// Which cell index holds each target column of one table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub audit_category: Option<usize>,
    pub activity: Option<usize>,
}

impl ColumnMap {
    pub fn is_complete(&self) -> bool {
        self.audit_category.is_some() && self.activity.is_some()
    }
}

/// Header cells: the first `<thead>` row, else the first row's `<th>` cells, else its `<td>` cells.
fn header_cells(table: ElementRef) -> Vec<ElementRef> {
    let from_thead = table
        .select(&THEAD_SELECTOR)
        .next()
        .and_then(|thead| thead.select(&ROW_SELECTOR).next())
        .map(|row| row.select(&CELL_SELECTOR).collect::<Vec<_>>())
        .unwrap_or_default();
    if !from_thead.is_empty() {
        return from_thead;
    }

    let Some(first_row) = table.select(&ROW_SELECTOR).next() else {
        return Vec::new();
    };
    let ths: Vec<_> = first_row.select(&TH_SELECTOR).collect();
    if !ths.is_empty() {
        return ths;
    }
    first_row.select(&CELL_SELECTOR).collect()
}

fn is_audit_category_header(header: &str) -> bool {
    header.contains("audit category") || header == "auditcategory"
}

fn is_activity_header(header: &str) -> bool {
    header == "activity" || header.ends_with("activity") || header.contains(" activity")
}

/// Resolves the "audit category" and "activity" columns from header text,
/// falling back to positions 0/1 for two-column tables.
pub fn map_columns(table: ElementRef) -> ColumnMap {
    let cells = header_cells(table);
    let headers: Vec<String> = cells
        .iter()
        .map(|cell| element_text(*cell).to_lowercase())
        .collect();
    tracing::trace!("Header cells: {:?}", headers);

    let mut map = ColumnMap::default();

    // Exact pass: a later matching cell replaces an earlier one
    for (index, header) in headers.iter().enumerate() {
        if is_audit_category_header(header) {
            map.audit_category = Some(index);
        }
        if is_activity_header(header) {
            map.activity = Some(index);
        }
    }

    // Fuzzy pass: first match wins
    if map.audit_category.is_none() {
        map.audit_category = headers
            .iter()
            .position(|h| h.contains("audit") && h.contains("categ"));
    }
    if map.activity.is_none() {
        map.activity = headers.iter().position(|h| h.contains("activity"));
    }

    if !map.is_complete() && !cells.is_empty() {
        let first_data_row_width = table
            .select(&ROW_SELECTOR)
            .nth(1)
            .map(|row| row.select(&CELL_SELECTOR).count());
        if first_data_row_width == Some(2) {
            tracing::trace!("Two-column table without recognizable headers, assuming 0/1");
            map.audit_category.get_or_insert(0);
            map.activity.get_or_insert(1);
        }
    }

    map
}
