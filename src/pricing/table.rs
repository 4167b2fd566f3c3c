use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::paths::config_dir;

/// One row of the price table. Prices are USD per 1,000 normalized tokens.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PriceEntry {
    pub(crate) model: String,
    /// Relative capability score (benchmark index, dimensionless).
    pub(crate) capability: f64,
    pub(crate) input_per_1k: f64,
    pub(crate) output_per_1k: f64,
}

const DEFAULT_TABLE: &str = include_str!("data/pricing.json");

/// Static ordered price table. Loaded once at startup; read-only for the
/// session. A user override file in the config dir replaces the embedded
/// table wholesale when it parses.
#[derive(Debug)]
pub(crate) struct PriceTable {
    entries: Vec<PriceEntry>,
}

impl PriceTable {
    pub(crate) fn load() -> Self {
        if let Some(path) = override_path()
            && path.exists()
        {
            match fs::read_to_string(&path).map_err(|e| e.to_string()).and_then(|content| {
                serde_json::from_str::<Vec<PriceEntry>>(&content).map_err(|e| e.to_string())
            }) {
                Ok(entries) if !entries.is_empty() => {
                    return PriceTable {
                        entries: dedup_models(entries),
                    };
                }
                Ok(_) => {
                    eprintln!("Warning: {} is empty, using built-in pricing", path.display());
                }
                Err(e) => {
                    eprintln!(
                        "Warning: failed to parse {}: {e}, using built-in pricing",
                        path.display()
                    );
                }
            }
        }
        Self::builtin()
    }

    pub(crate) fn builtin() -> Self {
        let entries: Vec<PriceEntry> =
            serde_json::from_str(DEFAULT_TABLE).expect("embedded price table is valid JSON");
        PriceTable {
            entries: dedup_models(entries),
        }
    }

    pub(crate) fn entries(&self) -> &[PriceEntry] {
        &self.entries
    }
}

fn override_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("pricing.json"))
}

/// Model names are unique identifiers; keep the first occurrence.
fn dedup_models(entries: Vec<PriceEntry>) -> Vec<PriceEntry> {
    let mut seen = std::collections::HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.model.clone()))
        .collect()
}
