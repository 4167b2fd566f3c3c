//! User-entered quantities and the edit-boundary validation that guards them.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CALL_COUNT, DEFAULT_INPUT_QUANTITY, DEFAULT_OUTPUT_QUANTITY, MAX_QUANTITY,
};
use crate::core::convert::UnitMode;

/// Inputs driving a cost estimate. Quantities live in [0, 1_000_000];
/// `call_count` is always at least 1 when used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct UsageInput {
    pub(crate) input_quantity: f64,
    pub(crate) output_quantity: f64,
    pub(crate) call_count: u32,
    pub(crate) unit_mode: UnitMode,
}

impl Default for UsageInput {
    fn default() -> Self {
        UsageInput {
            input_quantity: DEFAULT_INPUT_QUANTITY,
            output_quantity: DEFAULT_OUTPUT_QUANTITY,
            call_count: DEFAULT_CALL_COUNT,
            unit_mode: UnitMode::Tokens,
        }
    }
}

impl UsageInput {
    /// Zero or absent call counts bill as a single call.
    pub(crate) fn effective_calls(&self) -> u32 {
        self.call_count.max(1)
    }

    /// Clamp fields loaded from outside the edit boundary (persisted state)
    /// back into the valid range.
    pub(crate) fn sanitized(mut self) -> Self {
        if !quantity_in_range(self.input_quantity) {
            self.input_quantity = DEFAULT_INPUT_QUANTITY;
        }
        if !quantity_in_range(self.output_quantity) {
            self.output_quantity = DEFAULT_OUTPUT_QUANTITY;
        }
        if self.call_count == 0 {
            self.call_count = DEFAULT_CALL_COUNT;
        }
        self
    }
}

fn quantity_in_range(q: f64) -> bool {
    q.is_finite() && (0.0..=MAX_QUANTITY).contains(&q)
}

/// Parse a quantity edit. Returns `None` for rejected edits: exponential
/// notation, signs, out-of-range values, or anything unparseable. The caller
/// keeps the prior valid value.
pub(crate) fn parse_quantity(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.contains(['e', 'E', '-', '+']) {
        return None;
    }
    let value: f64 = trimmed.parse().ok()?;
    if !quantity_in_range(value) {
        return None;
    }
    Some(value)
}
