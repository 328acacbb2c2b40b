use crate::diagnostic::Diagnostic;
use crate::rules::PageRule;
use glance_model::Page;

/// Pages need a non-blank name
pub struct PageNameRule;

impl PageRule for PageNameRule {
    fn name(&self) -> &'static str {
        "page-name"
    }

    fn description(&self) -> &'static str {
        "Require a non-blank page name"
    }

    fn check_page(&self, page: &Page) -> Vec<Diagnostic> {
        if page.name.trim().is_empty() {
            vec![Diagnostic::error(self.name(), "Page name is required", &page.id)]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_names_are_rejected() {
        for name in ["", "   ", "\t\n"] {
            let diagnostics = PageNameRule.check_page(&Page::new("p", name));
            assert_eq!(diagnostics.len(), 1, "name {:?}", name);
            assert_eq!(diagnostics[0].message, "Page name is required");
        }
    }

    #[test]
    fn test_named_page_passes() {
        assert!(PageNameRule.check_page(&Page::new("p", " Home ")).is_empty());
    }
}
