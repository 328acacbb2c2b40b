mod column_layout;
mod page_name;
mod slim_width;

pub use column_layout::ColumnLayoutRule;
pub use page_name::PageNameRule;
pub use slim_width::SlimWidthRule;

use crate::diagnostic::Diagnostic;
use glance_model::Page;

/// Trait for implementing page rules
pub trait PageRule {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Check a single page
    fn check_page(&self, page: &Page) -> Vec<Diagnostic>;
}

/// Registry of the rules a page is validated against
pub struct RuleRegistry {
    rules: Vec<Box<dyn PageRule>>,
}

impl RuleRegistry {
    /// Create a new registry with all built-in rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(PageNameRule),
                Box::new(ColumnLayoutRule),
                Box::new(SlimWidthRule),
            ],
        }
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn PageRule>] {
        &self.rules
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a custom rule to the registry
    pub fn add_rule(&mut self, rule: Box<dyn PageRule>) {
        self.rules.push(rule);
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &format!("{} rules", self.rules.len()))
            .finish()
    }
}
