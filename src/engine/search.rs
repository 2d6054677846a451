//! Visible-set computation and page arithmetic
//!
//! The visible set is a pure function of the catalog and the filters.
//! Callers compute it once per render and reuse the result for every row
//! printed and every index resolved during that render.

use std::ops::Range;
use std::sync::Arc;

use super::filters::FilterSet;
use crate::catalog::{Catalog, Creature};

/// Rows shown per browse page
pub const PAGE_SIZE: usize = 10;

/// Whether a single creature passes the current filters.
///
/// Visible iff either of its types is enabled and its generation is enabled.
/// A generation outside the filter domain never passes.
pub fn is_visible(creature: &Creature, filters: &FilterSet) -> bool {
    let type_enabled = creature
        .types()
        .any(|t| filters.is_type_enabled(t).unwrap_or(false));
    type_enabled
        && filters
            .is_generation_enabled(creature.generation)
            .unwrap_or(false)
}

/// Catalog positions of every visible creature, in catalog order
pub fn visible_positions(catalog: &Catalog, filters: &FilterSet) -> Vec<usize> {
    catalog
        .iter()
        .enumerate()
        .filter(|(_, creature)| is_visible(creature, filters))
        .map(|(position, _)| position)
        .collect()
}

/// The visible subsequence of the catalog, in catalog order
pub fn compute_visible<'c>(catalog: &'c Catalog, filters: &FilterSet) -> Vec<&'c Arc<Creature>> {
    catalog
        .iter()
        .filter(|creature| is_visible(creature, filters))
        .collect()
}

/// Fixed-size windows over a visible set of known length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    total_items: usize,
    page_size: usize,
}

impl Pagination {
    pub fn new(total_items: usize) -> Self {
        Self::with_page_size(total_items, PAGE_SIZE)
    }

    pub fn with_page_size(total_items: usize, page_size: usize) -> Self {
        Self {
            total_items,
            page_size: page_size.max(1),
        }
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// An empty set still has one (empty) page
    pub fn total_pages(&self) -> usize {
        if self.total_items == 0 {
            1
        } else {
            (self.total_items - 1) / self.page_size + 1
        }
    }

    pub fn has_next(&self, page: usize) -> bool {
        page + 1 < self.total_pages()
    }

    pub fn has_previous(&self, page: usize) -> bool {
        page > 0
    }

    /// Zero-based item range shown on `page`; empty past the end
    pub fn page_range(&self, page: usize) -> Range<usize> {
        let start = page.saturating_mul(self.page_size).min(self.total_items);
        let end = start.saturating_add(self.page_size).min(self.total_items);
        start..end
    }

    /// Resolve a one-based item number typed by the user on `page`.
    ///
    /// Only numbers printed on that page are accepted; the result is the
    /// zero-based index into the visible set.
    pub fn resolve_selection(&self, page: usize, number: usize) -> Option<usize> {
        let index = number.checked_sub(1)?;
        self.page_range(page).contains(&index).then_some(index)
    }
}
