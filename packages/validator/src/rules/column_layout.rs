use crate::diagnostic::Diagnostic;
use crate::layout::{format_shape, is_legal_shape, legal_shapes_summary, suggested_sizes};
use crate::rules::PageRule;
use glance_model::Page;

/// Non-empty column lists must be one of the legal shapes.
///
/// A page without columns is fine; it is what a fresh page looks like.
pub struct ColumnLayoutRule;

impl PageRule for ColumnLayoutRule {
    fn name(&self) -> &'static str {
        "column-layout"
    }

    fn description(&self) -> &'static str {
        "Restrict pages to the supported column layouts"
    }

    fn check_page(&self, page: &Page) -> Vec<Diagnostic> {
        let shape = page.shape();
        if shape.is_empty() || is_legal_shape(&shape) {
            return Vec::new();
        }

        let diagnostic = Diagnostic::error(
            self.name(),
            format!(
                "Invalid column layout: {}. Valid layouts are: {}",
                format_shape(&shape),
                legal_shapes_summary()
            ),
            &page.id,
        );

        let next = suggested_sizes(page);
        let diagnostic = if next.is_empty() {
            diagnostic.with_suggestion("Change a column size or remove a column")
        } else {
            diagnostic.with_suggestion(format!(
                "Add a {} column",
                next.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(" or ")
            ))
        };

        vec![diagnostic]
    }
}
