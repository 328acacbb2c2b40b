//! Column layout grammar.
//!
//! The legal shapes are a closed, hand-enumerated set. Growing the grammar
//! means adding a row to [`LEGAL_SHAPES`].

use glance_model::{ColumnSize, Page, PageWidth};
use serde::{Deserialize, Serialize};

use ColumnSize::{Full, Small};

pub const MAX_COLUMNS: usize = 3;
pub const MAX_SLIM_COLUMNS: usize = 2;

/// Every legal column shape, in display order
pub const LEGAL_SHAPES: [&[ColumnSize]; 5] = [
    &[Full],
    &[Small, Full],
    &[Full, Small],
    &[Small, Full, Small],
    &[Full, Full],
];

/// Answer to "may a column of this size be appended?"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnCheck {
    pub can_add: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ColumnCheck {
    pub fn allowed() -> Self {
        Self {
            can_add: true,
            reason: None,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            can_add: false,
            reason: Some(reason.into()),
        }
    }
}

pub fn is_legal_shape(shape: &[ColumnSize]) -> bool {
    LEGAL_SHAPES.iter().any(|legal| *legal == shape)
}

/// Render a shape as `[small, full]`
pub fn format_shape(shape: &[ColumnSize]) -> String {
    let sizes: Vec<&str> = shape.iter().map(ColumnSize::as_str).collect();
    format!("[{}]", sizes.join(", "))
}

/// All legal shapes, comma separated
pub fn legal_shapes_summary() -> String {
    LEGAL_SHAPES
        .iter()
        .map(|shape| format_shape(shape))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check whether appending a `size` column keeps the page within the grammar
pub fn can_add_column(page: &Page, size: ColumnSize) -> ColumnCheck {
    let mut shape = page.shape();
    shape.push(size);

    if shape.len() > MAX_COLUMNS {
        return ColumnCheck::rejected("Maximum 3 columns allowed");
    }

    if page.width == PageWidth::Slim && shape.len() > MAX_SLIM_COLUMNS {
        return ColumnCheck::rejected("Slim pages can have maximum 2 columns");
    }

    if !is_legal_shape(&shape) {
        return ColumnCheck::rejected(format!(
            "Layout {} is not valid. Try adding a different size.",
            format_shape(&shape)
        ));
    }

    ColumnCheck::allowed()
}

/// Sizes that can be appended right now, `small` before `full`
pub fn suggested_sizes(page: &Page) -> Vec<ColumnSize> {
    ColumnSize::ALL
        .into_iter()
        .filter(|size| can_add_column(page, *size).can_add)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glance_model::Column;

    fn page_with(width: PageWidth, sizes: &[ColumnSize]) -> Page {
        let mut page = Page::new("p", "Home");
        page.width = width;
        page.columns = sizes
            .iter()
            .enumerate()
            .map(|(i, size)| Column::new(format!("c{i}"), *size))
            .collect();
        page
    }

    /// Every sequence of `len` sizes
    fn all_shapes(len: usize) -> Vec<Vec<ColumnSize>> {
        (0..len).fold(vec![vec![]], |shapes, _| {
            shapes
                .into_iter()
                .flat_map(|shape| {
                    ColumnSize::ALL.into_iter().map(move |size| {
                        let mut next = shape.clone();
                        next.push(size);
                        next
                    })
                })
                .collect()
        })
    }

    #[test]
    fn test_legal_shapes() {
        assert!(is_legal_shape(&[Full]));
        assert!(is_legal_shape(&[Small, Full]));
        assert!(is_legal_shape(&[Full, Small]));
        assert!(is_legal_shape(&[Small, Full, Small]));
        assert!(is_legal_shape(&[Full, Full]));

        assert!(!is_legal_shape(&[]));
        assert!(!is_legal_shape(&[Small]));
        assert!(!is_legal_shape(&[Small, Small]));
        assert!(!is_legal_shape(&[Full, Full, Full]));
        assert!(!is_legal_shape(&[Small, Full, Small, Full]));
    }

    #[test]
    fn test_can_add_matches_grammar_for_every_prefix() {
        for width in PageWidth::ALL {
            for len in 0..=3 {
                for shape in all_shapes(len) {
                    let page = page_with(width, &shape);
                    for size in ColumnSize::ALL {
                        let mut next = shape.clone();
                        next.push(size);

                        let expected = is_legal_shape(&next)
                            && !(width == PageWidth::Slim && next.len() > MAX_SLIM_COLUMNS);
                        assert_eq!(
                            can_add_column(&page, size).can_add,
                            expected,
                            "{width} page {} + {size}",
                            format_shape(&shape)
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_slim_cap_reason() {
        let page = page_with(PageWidth::Slim, &[Small, Full]);
        let check = can_add_column(&page, Small);

        assert!(!check.can_add);
        assert_eq!(check.reason.as_deref(), Some("Slim pages can have maximum 2 columns"));
    }

    #[test]
    fn test_full_after_full_is_allowed() {
        let page = page_with(PageWidth::Default, &[Full]);
        assert_eq!(can_add_column(&page, Full), ColumnCheck::allowed());
    }

    #[test]
    fn test_rejection_names_the_shape() {
        let page = page_with(PageWidth::Default, &[]);
        let check = can_add_column(&page, Small);

        assert!(!check.can_add);
        assert!(check.reason.unwrap().contains("[small]"));
    }

    #[test]
    fn test_fourth_column_hits_max() {
        let page = page_with(PageWidth::Wide, &[Small, Full, Small]);
        let check = can_add_column(&page, Full);
        assert_eq!(check.reason.as_deref(), Some("Maximum 3 columns allowed"));
    }

    #[test]
    fn test_suggested_sizes() {
        assert_eq!(suggested_sizes(&page_with(PageWidth::Default, &[])), vec![Full]);
        assert_eq!(
            suggested_sizes(&page_with(PageWidth::Default, &[Full])),
            vec![Small, Full]
        );
        assert_eq!(
            suggested_sizes(&page_with(PageWidth::Default, &[Small, Full])),
            vec![Small]
        );
        assert!(suggested_sizes(&page_with(PageWidth::Slim, &[Small, Full])).is_empty());
        assert!(suggested_sizes(&page_with(PageWidth::Default, &[Full, Full])).is_empty());
    }

    #[test]
    fn test_legal_shapes_summary() {
        assert_eq!(
            legal_shapes_summary(),
            "[full], [small, full], [full, small], [small, full, small], [full, full]"
        );
    }
}
