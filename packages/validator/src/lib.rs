//! Column layout validation for Glance pages.
//!
//! Pure functions over a page's column sizes and width. Results are advice
//! for the editing surface, not hard constraints on the document.

mod diagnostic;
mod layout;
mod rules;
mod validation;

pub use diagnostic::{Diagnostic, DiagnosticLevel};
pub use layout::{
    can_add_column, format_shape, is_legal_shape, legal_shapes_summary, suggested_sizes,
    ColumnCheck, LEGAL_SHAPES, MAX_COLUMNS, MAX_SLIM_COLUMNS,
};
pub use rules::{ColumnLayoutRule, PageNameRule, PageRule, RuleRegistry, SlimWidthRule};
pub use validation::{
    column_validation, diagnose_page, validate_document, validate_page, validate_page_with,
    ColumnValidation, DocumentReport, PageReport, ValidationResult,
};
