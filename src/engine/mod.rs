//! Filtering, search and team state
//!
//! `Backend` owns the catalog together with the per-session filter and team
//! state. The menu controller borrows it; nothing here is global.

mod filters;
mod roster;
mod search;

pub use filters::FilterSet;
pub use roster::{TeamRoster, MAX_TEAM_SIZE};
pub use search::{compute_visible, is_visible, visible_positions, Pagination, PAGE_SIZE};

use std::sync::Arc;

use crate::catalog::{Catalog, CatalogSource, Creature};
use crate::Result;

/// Catalog plus session state
#[derive(Debug, Clone, Default)]
pub struct Backend {
    catalog: Catalog,
    filters: FilterSet,
    roster: TeamRoster,
}

impl Backend {
    /// Start a session over an already-loaded catalog, all filters on and an empty team
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filters: FilterSet::new(),
            roster: TeamRoster::new(),
        }
    }

    /// Load the catalog from `source` and start a session over it
    pub fn load(source: &dyn CatalogSource) -> Result<Self> {
        Ok(Self::new(source.load()?))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterSet {
        &mut self.filters
    }

    pub fn roster(&self) -> &TeamRoster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut TeamRoster {
        &mut self.roster
    }

    /// Currently visible creatures, in catalog order
    pub fn search(&self) -> Vec<&Arc<Creature>> {
        compute_visible(&self.catalog, &self.filters)
    }

    /// Catalog positions of the currently visible creatures
    pub fn search_positions(&self) -> Vec<usize> {
        visible_positions(&self.catalog, &self.filters)
    }
}
