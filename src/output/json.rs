use crate::core::{CostRecord, SortState, UsageInput};
use crate::pricing::PriceEntry;

pub(crate) fn output_records_json(
    records: &[CostRecord],
    usage: &UsageInput,
    sort: SortState,
) -> String {
    let sorted = sort.apply(records);
    let results: Vec<serde_json::Value> = sorted
        .iter()
        .map(|r| {
            serde_json::json!({
                "model": r.model,
                "capability": r.capability,
                "input_cost": r.input_cost,
                "output_cost": r.output_cost,
                "per_call_cost": r.per_call_cost,
                "total_cost": r.total_cost,
            })
        })
        .collect();

    serde_json::to_string_pretty(&serde_json::json!({
        "usage": {
            "input_quantity": usage.input_quantity,
            "output_quantity": usage.output_quantity,
            "call_count": usage.effective_calls(),
            "unit_mode": usage.unit_mode.label(),
        },
        "results": results,
    }))
    .unwrap()
}

pub(crate) fn output_count_json(tokens: usize, vocabulary: &str) -> String {
    serde_json::to_string_pretty(&serde_json::json!({
        "tokens": tokens,
        "vocabulary": vocabulary,
    }))
    .unwrap()
}

pub(crate) fn output_models_json(entries: &[PriceEntry]) -> String {
    let models: Vec<serde_json::Value> = entries
        .iter()
        .map(|e| {
            serde_json::json!({
                "model": e.model,
                "capability": e.capability,
                "input_per_1k": e.input_per_1k,
                "output_per_1k": e.output_per_1k,
            })
        })
        .collect();
    serde_json::to_string_pretty(&models).unwrap()
}
