//! Unit conversion between user-entered quantities and price-table units.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::consts::{PRICE_UNIT_TOKENS, RATE_CHARACTERS, RATE_TOKENS, RATE_WORDS};

/// Unit the user expresses quantities in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum UnitMode {
    #[default]
    Tokens,
    Words,
    Characters,
}

impl UnitMode {
    /// Approximate tokens per unit.
    pub(crate) fn rate(self) -> f64 {
        match self {
            UnitMode::Tokens => RATE_TOKENS,
            UnitMode::Words => RATE_WORDS,
            UnitMode::Characters => RATE_CHARACTERS,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            UnitMode::Tokens => "tokens",
            UnitMode::Words => "words",
            UnitMode::Characters => "characters",
        }
    }
}

/// Convert a quantity into price-table units (thousands of tokens).
/// Negative or non-finite quantities are treated as zero.
pub(crate) fn normalize(quantity: f64, mode: UnitMode) -> f64 {
    if !quantity.is_finite() || quantity < 0.0 {
        return 0.0;
    }
    quantity * mode.rate() / PRICE_UNIT_TOKENS
}
