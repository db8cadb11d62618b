// src/extractors/rows.rs
use crate::extractors::columns::{map_columns, CELL_SELECTOR, ROW_SELECTOR};
use crate::extractors::record::AuditRecord;
use crate::utils::text::element_text;
use scraper::ElementRef;
use std::ops::AddAssign;

/// Per-table (or per-run) tally of what happened to each data row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowStats {
    pub emitted: usize,
    /// No cells, or every cell blank
    pub empty: usize,
    /// Columns could not be resolved for the row
    pub unmapped: usize,
    /// Both target cells blank
    pub blank_targets: usize,
}

impl RowStats {
    pub fn skipped(&self) -> usize {
        self.empty + self.unmapped + self.blank_targets
    }
}

impl AddAssign for RowStats {
    fn add_assign(&mut self, other: Self) {
        self.emitted += other.emitted;
        self.empty += other.empty;
        self.unmapped += other.unmapped;
        self.blank_targets += other.blank_targets;
    }
}

/// Normalized text of every cell in a row, in column order.
fn row_cells(row: ElementRef) -> Vec<String> {
    row.select(&CELL_SELECTOR).map(element_text).collect()
}

fn cell_at(cells: &[String], index: usize) -> String {
    cells.get(index).cloned().unwrap_or_default()
}

/// Turns every row after the header row into a record labelled with `service`.
pub fn extract(table: ElementRef, service: &str) -> (Vec<AuditRecord>, RowStats) {
    let columns = map_columns(table);
    tracing::debug!("Column map for table under '{}': {:?}", service, columns);

    let mut records = Vec::new();
    let mut stats = RowStats::default();

    // Row 0 is the header row whether or not it is marked up as one
    for (row_index, row) in table.select(&ROW_SELECTOR).enumerate().skip(1) {
        let cells = row_cells(row);
        if cells.iter().all(|cell| cell.is_empty()) {
            tracing::trace!("Row {}: no content, skipping", row_index);
            stats.empty += 1;
            continue;
        }

        let mut audit_index = columns.audit_category;
        let mut activity_index = columns.activity;
        if (audit_index.is_none() || activity_index.is_none()) && cells.len() >= 2 {
            audit_index.get_or_insert(0);
            activity_index.get_or_insert(1);
        }

        let (Some(audit_index), Some(activity_index)) = (audit_index, activity_index) else {
            tracing::debug!("Row {}: columns unresolved for {} cell(s), skipping", row_index, cells.len());
            stats.unmapped += 1;
            continue;
        };

        let audit_category = cell_at(&cells, audit_index);
        let activity = cell_at(&cells, activity_index);
        if audit_category.is_empty() && activity.is_empty() {
            tracing::trace!("Row {}: both target cells blank, skipping", row_index);
            stats.blank_targets += 1;
            continue;
        }

        records.push(AuditRecord {
            service: service.to_string(),
            audit_category,
            activity,
        });
        stats.emitted += 1;
    }

    (records, stats)
}
