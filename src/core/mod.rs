//! Core estimator: unit conversion, cost engine, sort policy, debounce.

mod convert;
mod debounce;
mod engine;
mod sort;
mod usage;

pub(crate) use convert::UnitMode;
pub(crate) use debounce::Debouncer;
pub(crate) use engine::{CostRecord, compute_costs};
pub(crate) use sort::{SortKey, SortState};
pub(crate) use usage::{UsageInput, parse_quantity};
