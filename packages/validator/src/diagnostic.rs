use serde::{Deserialize, Serialize};

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Error,
    Warning,
    Info,
}

/// A finding produced by a page rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level
    pub level: DiagnosticLevel,

    /// The rule that generated this diagnostic
    pub rule: String,

    /// Human-readable message
    pub message: String,

    /// Page the finding is about
    pub page_id: String,

    /// Optional suggestion for fixing the issue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn error(rule: impl Into<String>, message: impl Into<String>, page_id: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            rule: rule.into(),
            message: message.into(),
            page_id: page_id.into(),
            suggestion: None,
        }
    }

    pub fn warning(rule: impl Into<String>, message: impl Into<String>, page_id: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            rule: rule.into(),
            message: message.into(),
            page_id: page_id.into(),
            suggestion: None,
        }
    }

    /// A note that neither fails nor warns; left out of [`ValidationResult`](crate::ValidationResult)
    pub fn info(rule: impl Into<String>, message: impl Into<String>, page_id: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Info,
            rule: rule.into(),
            message: message.into(),
            page_id: page_id.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}
