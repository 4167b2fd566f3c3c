//! Cost engine: price-table rows × normalized usage → cost records.

use crate::core::convert::normalize;
use crate::core::usage::UsageInput;
use crate::pricing::PriceEntry;

/// Fully derived cost row for one model. Rebuilt whole on every
/// recomputation; nothing persists across runs beyond the model name.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CostRecord {
    pub(crate) model: String,
    pub(crate) capability: f64,
    pub(crate) input_cost: f64,
    pub(crate) output_cost: f64,
    pub(crate) per_call_cost: f64,
    pub(crate) total_cost: f64,
}

/// Compute one record per price entry, in table order. Pure and
/// deterministic; no rounding happens here (display formatting rounds).
pub(crate) fn compute_costs(usage: &UsageInput, prices: &[PriceEntry]) -> Vec<CostRecord> {
    let input_units = normalize(usage.input_quantity, usage.unit_mode);
    let output_units = normalize(usage.output_quantity, usage.unit_mode);
    let calls = usage.effective_calls() as f64;

    prices
        .iter()
        .map(|entry| {
            let input_cost = input_units * entry.input_per_1k;
            let output_cost = output_units * entry.output_per_1k;
            let per_call_cost = input_cost + output_cost;
            CostRecord {
                model: entry.model.clone(),
                capability: entry.capability,
                input_cost,
                output_cost,
                per_call_cost,
                total_cost: per_call_cost * calls,
            }
        })
        .collect()
}
