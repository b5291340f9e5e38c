//! Tax schedule configuration
//!
//! The bracket thresholds and the fiscal-year start date are policy, not
//! code: they are loaded from TOML rather than hard-coded in the engine.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. Check for an override in the data dir
//!    (~/.local/share/gigcoach/config/tax.toml)
//! 2. Fall back to embedded defaults (compiled into the binary)

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/tax.toml");

/// One marginal tax bracket: `rate` applies to taxable income above
/// `over`, up to the next bracket's threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxBracket {
    pub over: f64,
    pub rate: f64,
}

/// The full tax schedule plus the fiscal window it applies to
#[derive(Debug, Clone, PartialEq)]
pub struct TaxConfig {
    /// Earnings/expenses dated before this are outside the estimate window
    pub fiscal_year_start: NaiveDate,
    /// Marginal brackets in ascending threshold order
    pub brackets: Vec<TaxBracket>,
}

impl Default for TaxConfig {
    fn default() -> Self {
        // The embedded file is validated by tests; a parse failure here
        // would be a packaging bug.
        parse_config(DEFAULT_CONFIG).expect("embedded tax config is valid")
    }
}

impl TaxConfig {
    /// Load the schedule, preferring the data-dir override when present
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from an explicit path, falling back to the embedded defaults
    /// when the file does not exist
    pub fn load_from(override_path: Option<PathBuf>) -> Result<Self> {
        let content = match override_path {
            Some(path) if path.exists() => fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?,
            _ => DEFAULT_CONFIG.to_string(),
        };
        parse_config(&content)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("gigcoach").join("config").join("tax.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    fiscal_year_start: String,
    #[serde(default)]
    brackets: Vec<RawBracket>,
}

#[derive(Debug, Deserialize)]
struct RawBracket {
    over: f64,
    rate: f64,
}

fn parse_config(content: &str) -> Result<TaxConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Failed to parse tax config: {}", e)))?;

    let fiscal_year_start = NaiveDate::parse_from_str(&raw.fiscal_year_start, "%Y-%m-%d")
        .map_err(|e| {
            Error::Config(format!(
                "Invalid fiscal_year_start '{}': {}",
                raw.fiscal_year_start, e
            ))
        })?;

    if raw.brackets.is_empty() {
        return Err(Error::Config("Tax config has no brackets".to_string()));
    }

    let mut brackets = Vec::with_capacity(raw.brackets.len());
    let mut prev_over = f64::NEG_INFINITY;
    for b in &raw.brackets {
        if !b.over.is_finite() || b.over < 0.0 {
            return Err(Error::Config(format!(
                "Bracket threshold must be a non-negative number, got {}",
                b.over
            )));
        }
        if b.over <= prev_over {
            return Err(Error::Config(format!(
                "Brackets must be in ascending order ({} after {})",
                b.over, prev_over
            )));
        }
        if !(0.0..=1.0).contains(&b.rate) {
            return Err(Error::Config(format!(
                "Bracket rate must be within [0, 1], got {}",
                b.rate
            )));
        }
        brackets.push(TaxBracket {
            over: b.over,
            rate: b.rate,
        });
        prev_over = b.over;
    }

    Ok(TaxConfig {
        fiscal_year_start,
        brackets,
    })
}
