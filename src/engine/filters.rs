use std::collections::BTreeMap;
use tracing::debug;

use crate::catalog::{CreatureType, FIRST_GENERATION, LAST_GENERATION};
use crate::error::{Result, TeamBuilderError};

/// Session-scoped enabled/disabled state for each type tag and generation.
///
/// Every type tag and every generation in range has an entry at all times.
/// Everything is enabled on construction, and a reset restores that state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    types: BTreeMap<CreatureType, bool>,
    generations: BTreeMap<u8, bool>,
}

impl Default for FilterSet {
    fn default() -> Self {
        Self {
            types: CreatureType::ALL.iter().map(|t| (*t, true)).collect(),
            generations: (FIRST_GENERATION..=LAST_GENERATION)
                .map(|g| (g, true))
                .collect(),
        }
    }
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_type_enabled(&self, creature_type: CreatureType) -> Result<bool> {
        self.types
            .get(&creature_type)
            .copied()
            .ok_or_else(|| TeamBuilderError::UnknownType(creature_type.to_string()))
    }

    pub fn toggle_type(&mut self, creature_type: CreatureType) -> Result<()> {
        let entry = self
            .types
            .get_mut(&creature_type)
            .ok_or_else(|| TeamBuilderError::UnknownType(creature_type.to_string()))?;
        *entry = !*entry;
        debug!(creature_type = %creature_type, enabled = *entry, "Toggled type filter");
        Ok(())
    }

    /// Re-enable every type tag
    pub fn reset_type_filter(&mut self) {
        self.types.values_mut().for_each(|enabled| *enabled = true);
        debug!("Reset type filter");
    }

    pub fn is_generation_enabled(&self, generation: u8) -> Result<bool> {
        self.generations
            .get(&generation)
            .copied()
            .ok_or(TeamBuilderError::UnknownGeneration(generation))
    }

    pub fn toggle_generation(&mut self, generation: u8) -> Result<()> {
        let entry = self
            .generations
            .get_mut(&generation)
            .ok_or(TeamBuilderError::UnknownGeneration(generation))?;
        *entry = !*entry;
        debug!(generation, enabled = *entry, "Toggled generation filter");
        Ok(())
    }

    /// Re-enable every generation
    pub fn reset_generation_filter(&mut self) {
        self.generations
            .values_mut()
            .for_each(|enabled| *enabled = true);
        debug!("Reset generation filter");
    }

    /// Type tags with their current state, in menu order
    pub fn types(&self) -> impl Iterator<Item = (CreatureType, bool)> + '_ {
        self.types.iter().map(|(t, enabled)| (*t, *enabled))
    }

    /// Generations with their current state, ascending
    pub fn generations(&self) -> impl Iterator<Item = (u8, bool)> + '_ {
        self.generations.iter().map(|(g, enabled)| (*g, *enabled))
    }
}
