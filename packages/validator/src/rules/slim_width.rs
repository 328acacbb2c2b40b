use crate::diagnostic::Diagnostic;
use crate::layout::MAX_SLIM_COLUMNS;
use crate::rules::PageRule;
use glance_model::{Page, PageWidth};

/// Slim pages hold at most two columns, whatever the shape
pub struct SlimWidthRule;

impl PageRule for SlimWidthRule {
    fn name(&self) -> &'static str {
        "slim-width"
    }

    fn description(&self) -> &'static str {
        "Limit slim pages to two columns"
    }

    fn check_page(&self, page: &Page) -> Vec<Diagnostic> {
        if page.width == PageWidth::Slim && page.columns.len() > MAX_SLIM_COLUMNS {
            vec![Diagnostic::error(
                self.name(),
                "Slim pages can have a maximum of 2 columns",
                &page.id,
            )
            .with_suggestion("Remove a column or switch the page to default width")]
        } else {
            Vec::new()
        }
    }
}
