//! Creature catalog - the immutable, load-once record set
//!
//! The catalog is decoded once at startup and never mutated afterwards.
//! Records are reference counted so the team roster can hold the very same
//! entries without owning them.
//!
//! ```text
//! pokemon.csv ──► CsvCatalogSource::load ──► Catalog (Vec<Arc<Creature>>)
//!                                               │
//!                        ┌──────────────────────┴───────┐
//!                        ▼                              ▼
//!              engine::compute_visible          engine::TeamRoster
//! ```

mod creature;
mod loader;

pub use creature::{Creature, CreatureType, FIRST_GENERATION, LAST_GENERATION};
pub use loader::{decode_csv, CatalogSource, CsvCatalogSource, DEFAULT_CATALOG_PATH};

use std::sync::Arc;

/// Ordered, read-only collection of creatures
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    creatures: Vec<Arc<Creature>>,
}

impl Catalog {
    /// Build a catalog from owned records, preserving their order
    pub fn from_creatures(creatures: impl IntoIterator<Item = Creature>) -> Self {
        Self {
            creatures: creatures.into_iter().map(Arc::new).collect(),
        }
    }

    pub(crate) fn from_shared(creatures: Vec<Arc<Creature>>) -> Self {
        Self { creatures }
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Creature>> {
        self.creatures.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Creature>> {
        self.creatures.iter()
    }
}
