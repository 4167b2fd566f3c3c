use comfy_table::{Cell, Color};

use crate::core::{CostRecord, SortKey, SortState, UsageInput};
use crate::output::format::{
    create_styled_table, format_capability, format_cost, format_quantity, header_cell, right_cell,
    styled_cell,
};
use crate::pricing::PriceEntry;

#[derive(Debug, Clone, Copy)]
pub(crate) struct CostTableOptions {
    pub(crate) sort: SortState,
    pub(crate) use_color: bool,
}

const COLUMNS: [(SortKey, &str); 6] = [
    (SortKey::Model, "Model"),
    (SortKey::Capability, "Capability"),
    (SortKey::InputCost, "Input Cost"),
    (SortKey::OutputCost, "Output Cost"),
    (SortKey::PerCallCost, "Per Call"),
    (SortKey::TotalCost, "Total"),
];

pub(crate) fn print_cost_table(
    records: &[CostRecord],
    usage: &UsageInput,
    options: CostTableOptions,
) {
    let sorted = options.sort.apply(records);
    let c = options.use_color;

    let mut table = create_styled_table();
    table.set_header(
        COLUMNS
            .iter()
            .map(|(key, label)| {
                header_cell(&format!("{label}{}", options.sort.indicator(*key)), c)
            })
            .collect::<Vec<_>>(),
    );

    let green = if c { Some(Color::Green) } else { None };
    for record in &sorted {
        table.add_row(vec![
            Cell::new(&record.model),
            right_cell(&format_capability(record.capability), None, false),
            right_cell(&format_cost(record.input_cost), None, false),
            right_cell(&format_cost(record.output_cost), None, false),
            right_cell(&format_cost(record.per_call_cost), None, false),
            right_cell(&format_cost(record.total_cost), green, false),
        ]);
    }

    println!("\n  Cost Estimate\n");
    println!("{table}");
    println!(
        "\n  {} input / {} output {} × {} call{}\n",
        format_quantity(usage.input_quantity),
        format_quantity(usage.output_quantity),
        usage.unit_mode.label(),
        usage.effective_calls(),
        if usage.effective_calls() == 1 { "" } else { "s" }
    );
}

pub(crate) fn print_models_table(entries: &[PriceEntry], use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Model", use_color),
        header_cell("Capability", use_color),
        header_cell("Input $/1K", use_color),
        header_cell("Output $/1K", use_color),
    ]);

    let cyan = if use_color { Some(Color::Cyan) } else { None };
    for entry in entries {
        table.add_row(vec![
            styled_cell(&entry.model, cyan, false),
            right_cell(&format_capability(entry.capability), None, false),
            right_cell(&format_cost(entry.input_per_1k), None, false),
            right_cell(&format_cost(entry.output_per_1k), None, false),
        ]);
    }

    println!("\n  Price Table (USD per 1,000 tokens)\n");
    println!("{table}");
}
