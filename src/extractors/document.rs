// src/extractors/document.rs
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

// Documentation sites mark the article body with role="main"
static MAIN_CONTENT_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"[role="main"]"#).expect("Failed to compile MAIN_CONTENT_SELECTOR")
});

static TABLE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("table").expect("Failed to compile TABLE_SELECTOR")
});

/// Parses markup permissively; malformed input still yields a tree.
pub fn parse(html: &str) -> Html {
    Html::parse_document(html)
}

/// The primary content landmark, or the whole document when there is none.
pub fn main_scope(document: &Html) -> ElementRef<'_> {
    match document.select(&MAIN_CONTENT_SELECTOR).next() {
        Some(main) => {
            tracing::debug!("Scoping table search to <{} role=\"main\">", main.value().name());
            main
        }
        None => {
            tracing::debug!("No role=\"main\" element, searching the whole document");
            document.root_element()
        }
    }
}

/// Every table under `scope` in document order, nested and empty ones included.
pub fn find_tables<'a>(scope: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    scope.select(&TABLE_SELECTOR).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_limited_to_main_content() {
        let html = r#"
            <html><body>
            <nav><table><tr><td>menu</td></tr></table></nav>
            <div role="main">
              <table id="a"><tr><td>1</td></tr></table>
              <section><table id="b"><tr><td>2</td></tr></table></section>
            </div>
            </body></html>
        "#;
        let document = parse(html);
        let tables = find_tables(main_scope(&document));

        let ids: Vec<_> = tables.iter().filter_map(|t| t.value().attr("id")).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_whole_document_without_main_landmark() {
        let html = r#"<body><table></table><div><table><tr><td><table></table></td></tr></table></div></body>"#;
        let document = parse(html);

        assert_eq!(find_tables(main_scope(&document)).len(), 3);
    }

    #[test]
    fn test_malformed_markup_still_parses() {
        let document = parse("<h2>Groups<table><tr><td>Group<td>Add member");
        let tables = find_tables(main_scope(&document));

        assert_eq!(tables.len(), 1);
    }
}
