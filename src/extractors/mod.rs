// src/extractors/mod.rs
pub mod columns;
pub mod document;
pub mod heading;
pub mod record;
pub mod rows;

pub use record::{AuditRecord, UNTITLED_SECTION};
pub use rows::RowStats;

use heading::DocumentOrder;

/// Everything pulled out of one document.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    pub records: Vec<AuditRecord>,
    pub tables_seen: usize,
    pub tables_with_records: usize,
    pub rows: RowStats,
}

/// Walks every table of a page and collects its audit rows.
#[derive(Debug, Default)]
pub struct TableExtractor;

impl TableExtractor {
    pub fn new() -> Self { Self }

    /// Parses `html_content` and extracts records from every table, in document order.
    pub fn extract_all(&self, html_content: &str) -> ExtractionReport {
        let document = document::parse(html_content);
        let order = DocumentOrder::new(&document);
        let tables = document::find_tables(document::main_scope(&document));
        tracing::info!("Found {} table(s) in document", tables.len());

        let mut report = ExtractionReport { tables_seen: tables.len(), ..Default::default() };

        for (table_index, table) in tables.into_iter().enumerate() {
            let service = order
                .nearest_heading_above(table)
                .unwrap_or_else(|| UNTITLED_SECTION.to_string());

            let (records, stats) = rows::extract(table, &service);
            tracing::debug!(
                "Table {} ('{}'): {} record(s), {} row(s) skipped",
                table_index + 1, service, stats.emitted, stats.skipped()
            );

            if !records.is_empty() {
                report.tables_with_records += 1;
            }
            report.records.extend(records);
            report.rows += stats;
        }

        tracing::info!(
            "Extracted {} record(s) from {}/{} table(s); skipped rows: {} empty, {} unmapped, {} blank",
            report.records.len(),
            report.tables_with_records,
            report.tables_seen,
            report.rows.empty,
            report.rows.unmapped,
            report.rows.blank_targets,
        );
        report
    }
}
