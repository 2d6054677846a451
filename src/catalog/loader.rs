//! Tabular catalog decoding
//!
//! The catalog file is a CSV with a header row. Columns are bound by name,
//! extra columns are ignored, and any bad row aborts the whole load.

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use super::creature::{Creature, CreatureType, FIRST_GENERATION, LAST_GENERATION};
use super::Catalog;
use crate::error::{Result, TeamBuilderError};

/// Default catalog file, resolved against the working directory
pub const DEFAULT_CATALOG_PATH: &str = "pokemon.csv";

/// Anything that can produce a fully-decoded catalog
pub trait CatalogSource {
    fn load(&self) -> Result<Catalog>;
}

/// Catalog backed by a CSV file on disk
#[derive(Debug, Clone)]
pub struct CsvCatalogSource {
    path: PathBuf,
}

impl CsvCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for CsvCatalogSource {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_PATH)
    }
}

impl CatalogSource for CsvCatalogSource {
    fn load(&self) -> Result<Catalog> {
        debug!(path = %self.path.display(), "Opening catalog file");
        let file = File::open(&self.path)?;
        let catalog = decode_csv(file)?;
        info!(
            path = %self.path.display(),
            creatures = catalog.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }
}

/// One raw CSV row, before type tags and ranges are checked
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    name: String,
    type1: String,
    #[serde(default)]
    type2: Option<String>,
    generation: u8,
    pokedex_number: u32,
}

impl CatalogRecord {
    fn into_creature(self, row: usize) -> Result<Creature> {
        let row_error = |message: String| TeamBuilderError::CatalogRow { row, message };

        if self.name.is_empty() {
            return Err(row_error("name is empty".to_string()));
        }

        let type_one: CreatureType = self
            .type1
            .parse()
            .map_err(|e: TeamBuilderError| row_error(format!("type1: {}", e)))?;

        let type_two = match self.type2.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<CreatureType>()
                    .map_err(|e| row_error(format!("type2: {}", e)))?,
            ),
        };

        if !(FIRST_GENERATION..=LAST_GENERATION).contains(&self.generation) {
            return Err(row_error(format!(
                "generation {} outside {}-{}",
                self.generation, FIRST_GENERATION, LAST_GENERATION
            )));
        }

        Ok(Creature::new(
            self.name,
            type_one,
            type_two,
            self.generation,
            self.pokedex_number,
        ))
    }
}

/// Decode a whole catalog from CSV. No partial catalog is ever returned.
pub fn decode_csv<R: Read>(reader: R) -> Result<Catalog> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut creatures = Vec::new();
    for (index, record) in csv_reader.deserialize::<CatalogRecord>().enumerate() {
        let row = index + 1;
        let creature = record?.into_creature(row)?;
        creatures.push(Arc::new(creature));
    }

    Ok(Catalog::from_shared(creatures))
}
