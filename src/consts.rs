use std::time::Duration;

/// Tokens per unit for each input mode. Calibration values, not derived
/// constants; kept bit-for-bit so estimates stay comparable across versions.
pub(crate) const RATE_TOKENS: f64 = 1.0;
pub(crate) const RATE_WORDS: f64 = 1.33;
pub(crate) const RATE_CHARACTERS: f64 = 0.25;

/// Prices are quoted in USD per this many normalized tokens.
pub(crate) const PRICE_UNIT_TOKENS: f64 = 1000.0;

/// Upper bound accepted at the edit boundary.
pub(crate) const MAX_QUANTITY: f64 = 1_000_000.0;

pub(crate) const DEFAULT_INPUT_QUANTITY: f64 = 100.0;
pub(crate) const DEFAULT_OUTPUT_QUANTITY: f64 = 100.0;
pub(crate) const DEFAULT_CALL_COUNT: u32 = 1;

/// Delay before re-tokenizing after a text change.
pub(crate) const DEBOUNCE_DELAY: Duration = Duration::from_millis(200);

/// The one BPE vocabulary used for every count in a session. Counts from
/// different vocabularies are not comparable, so this never varies at runtime.
pub(crate) const VOCABULARY: &str = "o200k_base";
