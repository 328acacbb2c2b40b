use crate::diagnostic::{Diagnostic, DiagnosticLevel};
use crate::layout::{can_add_column, suggested_sizes, ColumnCheck};
use crate::rules::RuleRegistry;
use glance_model::{ColumnSize, Document, Page};
use serde::{Deserialize, Serialize};

/// Outcome of validating a page. Advisory: nothing refuses an edit because
/// of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn from_diagnostics(diagnostics: &[Diagnostic]) -> Self {
        let collect = |level: DiagnosticLevel| -> Vec<String> {
            diagnostics
                .iter()
                .filter(|d| d.level == level)
                .map(|d| d.message.clone())
                .collect()
        };

        let errors = collect(DiagnosticLevel::Error);
        let warnings = collect(DiagnosticLevel::Warning);

        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

/// Run every rule of `registry` against `page`
pub fn diagnose_page(page: &Page, registry: &RuleRegistry) -> Vec<Diagnostic> {
    registry
        .rules()
        .iter()
        .flat_map(|rule| rule.check_page(page))
        .collect()
}

/// Validate a page against the built-in rules
pub fn validate_page(page: &Page) -> ValidationResult {
    validate_page_with(page, &RuleRegistry::default())
}

pub fn validate_page_with(page: &Page, registry: &RuleRegistry) -> ValidationResult {
    ValidationResult::from_diagnostics(&diagnose_page(page, registry))
}

/// Validation of one page inside a document report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageReport {
    pub page_id: String,
    pub page_name: String,
    pub diagnostics: Vec<Diagnostic>,
    pub result: ValidationResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentReport {
    pub pages: Vec<PageReport>,
}

impl DocumentReport {
    pub fn is_valid(&self) -> bool {
        self.pages.iter().all(|page| page.result.valid)
    }

    pub fn error_count(&self) -> usize {
        self.pages.iter().map(|page| page.result.errors.len()).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.pages.iter().map(|page| page.result.warnings.len()).sum()
    }
}

/// Validate every page of a document, in page order
pub fn validate_document(document: &Document, registry: &RuleRegistry) -> DocumentReport {
    let pages = document
        .pages
        .iter()
        .map(|page| {
            let diagnostics = diagnose_page(page, registry);
            PageReport {
                page_id: page.id.clone(),
                page_name: page.name.clone(),
                result: ValidationResult::from_diagnostics(&diagnostics),
                diagnostics,
            }
        })
        .collect();

    DocumentReport { pages }
}

/// Everything an editing surface needs about the current page's columns.
///
/// Recompute after every structural change to the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnValidation {
    pub validation: ValidationResult,
    pub suggested_sizes: Vec<ColumnSize>,
    pub small: ColumnCheck,
    pub full: ColumnCheck,
}

impl ColumnValidation {
    pub fn can_add_column(&self, size: ColumnSize) -> &ColumnCheck {
        match size {
            ColumnSize::Small => &self.small,
            ColumnSize::Full => &self.full,
        }
    }
}

pub fn column_validation(page: Option<&Page>) -> ColumnValidation {
    match page {
        Some(page) => ColumnValidation {
            validation: validate_page(page),
            suggested_sizes: suggested_sizes(page),
            small: can_add_column(page, ColumnSize::Small),
            full: can_add_column(page, ColumnSize::Full),
        },
        None => ColumnValidation {
            validation: ValidationResult::ok(),
            suggested_sizes: Vec::new(),
            small: ColumnCheck::rejected("No page selected"),
            full: ColumnCheck::rejected("No page selected"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::PageRule;
    use glance_model::{Column, PageWidth};

    fn page(name: &str, width: PageWidth, sizes: &[ColumnSize]) -> Page {
        let mut page = Page::new(format!("id-{name}"), name);
        page.width = width;
        for (i, size) in sizes.iter().enumerate() {
            page.columns.push(Column::new(format!("c{i}"), *size));
        }
        page
    }

    #[test]
    fn test_valid_page() {
        let result = validate_page(&page("Home", PageWidth::Default, &[ColumnSize::Full]));
        assert_eq!(result, ValidationResult::ok());
    }

    #[test]
    fn test_fresh_page_without_columns_is_valid() {
        assert!(validate_page(&page("Home", PageWidth::Default, &[])).valid);
    }

    #[test]
    fn test_errors_accumulate() {
        let result = validate_page(&page(
            " ",
            PageWidth::Slim,
            &[ColumnSize::Small, ColumnSize::Full, ColumnSize::Small],
        ));

        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec![
                "Page name is required".to_string(),
                "Slim pages can have a maximum of 2 columns".to_string(),
            ]
        );
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_slim_cap_applies_to_illegal_shapes_too() {
        let result = validate_page(&page(
            "Home",
            PageWidth::Slim,
            &[ColumnSize::Full, ColumnSize::Full, ColumnSize::Full],
        ));
        assert_eq!(result.errors.len(), 2);
    }

    struct WarnOnUntitled;

    impl PageRule for WarnOnUntitled {
        fn name(&self) -> &'static str {
            "untitled"
        }

        fn description(&self) -> &'static str {
            "Warn about pages named Untitled"
        }

        fn check_page(&self, page: &Page) -> Vec<Diagnostic> {
            if page.name == "Untitled" {
                vec![Diagnostic::warning(self.name(), "Rename this page", &page.id)]
            } else {
                Vec::new()
            }
        }
    }

    #[test]
    fn test_custom_rule_warnings() {
        let mut registry = RuleRegistry::new();
        registry.add_rule(Box::new(WarnOnUntitled));

        let result = validate_page_with(&page("Untitled", PageWidth::Default, &[]), &registry);
        assert!(result.valid);
        assert_eq!(result.warnings, vec!["Rename this page".to_string()]);
    }

    #[test]
    fn test_document_report() {
        let document = Document {
            pages: vec![
                page("Home", PageWidth::Default, &[ColumnSize::Small, ColumnSize::Full]),
                page("Broken", PageWidth::Default, &[ColumnSize::Small]),
            ],
            ..Document::default()
        };

        let report = validate_document(&document, &RuleRegistry::default());
        assert!(!report.is_valid());
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.pages[1].page_name, "Broken");
        assert_eq!(report.pages[1].diagnostics[0].rule, "column-layout");
    }

    #[test]
    fn test_column_validation_without_page() {
        let bundle = column_validation(None);

        assert!(bundle.validation.valid);
        assert!(bundle.suggested_sizes.is_empty());
        assert_eq!(
            bundle.can_add_column(ColumnSize::Full).reason.as_deref(),
            Some("No page selected")
        );
    }

    #[test]
    fn test_column_validation_for_page() {
        let page = page("Home", PageWidth::Default, &[ColumnSize::Full]);
        let bundle = column_validation(Some(&page));

        assert_eq!(bundle.suggested_sizes, vec![ColumnSize::Small, ColumnSize::Full]);
        assert!(bundle.can_add_column(ColumnSize::Small).can_add);
    }
}
