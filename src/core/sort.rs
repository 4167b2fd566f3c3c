//! Column sort policy for the results list.
//!
//! Activating a key cycles ascending → descending → unsorted; activating a
//! different key restarts at ascending. Sorting is stable and never mutates
//! the engine's output order.

use std::cmp::Ordering;

use clap::ValueEnum;

use crate::core::engine::CostRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortKey {
    Model,
    Capability,
    InputCost,
    OutputCost,
    PerCallCost,
    TotalCost,
}

impl SortKey {
    fn compare(self, a: &CostRecord, b: &CostRecord) -> Ordering {
        match self {
            SortKey::Model => a.model.cmp(&b.model),
            SortKey::Capability => compare_value(a.capability, b.capability),
            SortKey::InputCost => compare_value(a.input_cost, b.input_cost),
            SortKey::OutputCost => compare_value(a.output_cost, b.output_cost),
            SortKey::PerCallCost => compare_value(a.per_call_cost, b.per_call_cost),
            SortKey::TotalCost => compare_value(a.total_cost, b.total_cost),
        }
    }
}

/// NaN sorts last so the comparator stays total.
fn compare_value(a: f64, b: f64) -> Ordering {
    if a.is_nan() && b.is_nan() {
        Ordering::Equal
    } else if a.is_nan() {
        Ordering::Greater
    } else if b.is_nan() {
        Ordering::Less
    } else {
        a.partial_cmp(&b).unwrap_or(Ordering::Equal)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum SortState {
    #[default]
    Unsorted,
    Ascending(SortKey),
    Descending(SortKey),
}

impl SortState {
    pub(crate) fn activate(self, key: SortKey) -> SortState {
        match self {
            SortState::Ascending(k) if k == key => SortState::Descending(key),
            SortState::Descending(k) if k == key => SortState::Unsorted,
            _ => SortState::Ascending(key),
        }
    }

    /// Header marker for the active column.
    pub(crate) fn indicator(self, key: SortKey) -> &'static str {
        match self {
            SortState::Ascending(k) if k == key => " ▲",
            SortState::Descending(k) if k == key => " ▼",
            _ => "",
        }
    }

    /// Sort a copy of the records. Ties keep engine order (stable sort, and
    /// the descending comparator flips operands rather than the result so
    /// equal elements still compare equal).
    pub(crate) fn apply(self, records: &[CostRecord]) -> Vec<CostRecord> {
        let mut sorted = records.to_vec();
        match self {
            SortState::Unsorted => {}
            SortState::Ascending(key) => sorted.sort_by(|a, b| key.compare(a, b)),
            SortState::Descending(key) => sorted.sort_by(|a, b| key.compare(b, a)),
        }
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(model: &str, total: f64) -> CostRecord {
        CostRecord {
            model: model.to_string(),
            capability: 0.0,
            input_cost: 0.0,
            output_cost: 0.0,
            per_call_cost: total,
            total_cost: total,
        }
    }

    #[test]
    fn activation_cycle_on_one_key() {
        let key = SortKey::TotalCost;
        let s1 = SortState::Unsorted.activate(key);
        assert_eq!(s1, SortState::Ascending(key));
        let s2 = s1.activate(key);
        assert_eq!(s2, SortState::Descending(key));
        let s3 = s2.activate(key);
        assert_eq!(s3, SortState::Unsorted);
    }

    #[test]
    fn four_activations_equal_one() {
        let key = SortKey::Model;
        let mut state = SortState::Unsorted;
        for _ in 0..4 {
            state = state.activate(key);
        }
        assert_eq!(state, SortState::Unsorted.activate(key));
    }

    #[test]
    fn switching_key_restarts_ascending() {
        let state = SortState::Descending(SortKey::Model).activate(SortKey::TotalCost);
        assert_eq!(state, SortState::Ascending(SortKey::TotalCost));
    }

    #[test]
    fn unsorted_keeps_engine_order() {
        let records = vec![record("b", 2.0), record("a", 1.0), record("c", 3.0)];
        let out = SortState::Unsorted.apply(&records);
        assert_eq!(out, records);
    }

    #[test]
    fn ascending_and_descending_by_cost() {
        let records = vec![record("b", 2.0), record("a", 1.0), record("c", 3.0)];
        let asc = SortState::Ascending(SortKey::TotalCost).apply(&records);
        let names: Vec<_> = asc.iter().map(|r| r.model.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);

        let desc = SortState::Descending(SortKey::TotalCost).apply(&records);
        let names: Vec<_> = desc.iter().map(|r| r.model.as_str()).collect();
        assert_eq!(names, ["c", "b", "a"]);
    }

    #[test]
    fn sort_by_model_name() {
        let records = vec![record("gamma", 1.0), record("alpha", 1.0), record("beta", 1.0)];
        let asc = SortState::Ascending(SortKey::Model).apply(&records);
        let names: Vec<_> = asc.iter().map(|r| r.model.as_str()).collect();
        assert_eq!(names, ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn ties_preserve_engine_order_both_directions() {
        let records = vec![record("first", 1.0), record("second", 1.0), record("third", 1.0)];
        for state in [
            SortState::Ascending(SortKey::TotalCost),
            SortState::Descending(SortKey::TotalCost),
        ] {
            let out = state.apply(&records);
            let names: Vec<_> = out.iter().map(|r| r.model.as_str()).collect();
            assert_eq!(names, ["first", "second", "third"]);
        }
    }

    #[test]
    fn nan_sorts_last_ascending() {
        let records = vec![record("nan", f64::NAN), record("one", 1.0)];
        let out = SortState::Ascending(SortKey::TotalCost).apply(&records);
        assert_eq!(out[0].model, "one");
        assert_eq!(out[1].model, "nan");
    }

    #[test]
    fn apply_does_not_mutate_input() {
        let records = vec![record("b", 2.0), record("a", 1.0)];
        let _ = SortState::Ascending(SortKey::TotalCost).apply(&records);
        assert_eq!(records[0].model, "b");
    }

    #[test]
    fn indicator_marks_only_active_key() {
        let state = SortState::Ascending(SortKey::InputCost);
        assert_eq!(state.indicator(SortKey::InputCost), " ▲");
        assert_eq!(state.indicator(SortKey::OutputCost), "");
        let state = state.activate(SortKey::InputCost);
        assert_eq!(state.indicator(SortKey::InputCost), " ▼");
        assert_eq!(SortState::Unsorted.indicator(SortKey::InputCost), "");
    }
}
