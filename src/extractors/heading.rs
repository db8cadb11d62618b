// src/extractors/heading.rs
use crate::utils::text::element_text;
use scraper::{ElementRef, Html};

/// Heading levels that name a section of tables.
const HEADING_TAGS: [&str; 3] = ["h2", "h3", "h4"];

/// Every element of a document in document (pre-)order.
///
/// The heading lookup runs against this flat order rather than the tree, so a
/// heading nested deep inside one branch still labels a table in a later branch.
pub struct DocumentOrder<'a> {
    elements: Vec<ElementRef<'a>>,
}

impl<'a> DocumentOrder<'a> {
    pub fn new(document: &'a Html) -> Self {
        let elements = document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .collect();
        Self { elements }
    }

    fn position_of(&self, element: ElementRef<'a>) -> Option<usize> {
        self.elements.iter().position(|candidate| candidate.id() == element.id())
    }

    /// Text of the closest h2-h4 before `table`, scanning backward.
    /// Headings whose text is empty are passed over.
    pub fn nearest_heading_above(&self, table: ElementRef<'a>) -> Option<String> {
        let position = self.position_of(table)?;
        self.elements[..position]
            .iter()
            .rev()
            .filter(|element| HEADING_TAGS.contains(&element.value().name()))
            .map(|heading| element_text(*heading))
            .find(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::document::{find_tables, main_scope, parse};

    fn headings_for(html: &str) -> Vec<Option<String>> {
        let document = parse(html);
        let order = DocumentOrder::new(&document);
        find_tables(main_scope(&document))
            .into_iter()
            .map(|table| order.nearest_heading_above(table))
            .collect()
    }

    #[test]
    fn test_heading_follows_document_order_not_nesting() {
        let html = r#"
            <body>
              <div><div><section><h2>Core&nbsp;Directory</h2></section></div></div>
              <table><tr><td>a</td></tr></table>
              <h3>  Entitlement
                 Management </h3>
              <div><table><tr><td>b</td></tr></table></div>
            </body>
        "#;

        assert_eq!(
            headings_for(html),
            vec![
                Some("Core Directory".to_string()),
                Some("Entitlement Management".to_string()),
            ]
        );
    }

    #[test]
    fn test_no_heading_before_table() {
        let html = "<body><table></table><h2>Later</h2></body>";
        assert_eq!(headings_for(html), vec![None]);
    }

    #[test]
    fn test_other_heading_levels_are_ignored() {
        let html = "<body><h4>Identity Protection</h4><h1>Title</h1><h5>Note</h5><table></table></body>";
        assert_eq!(headings_for(html), vec![Some("Identity Protection".to_string())]);
    }

    #[test]
    fn test_empty_heading_is_skipped() {
        let html = "<body><h2>PIM</h2><h3> &nbsp; </h3><table></table></body>";
        assert_eq!(headings_for(html), vec![Some("PIM".to_string())]);
    }

    #[test]
    fn test_interleaved_heading_wins_over_section_heading() {
        // An aside heading between the section heading and the table takes the label.
        let html = r#"
            <body>
              <h2>Application Proxy</h2>
              <aside><h4>Tip</h4><p>See also.</p></aside>
              <table></table>
            </body>
        "#;
        assert_eq!(headings_for(html), vec![Some("Tip".to_string())]);
    }
}
