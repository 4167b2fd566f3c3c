use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

/// Format a dollar amount. Large values go compact (12.3k, 1.2m); values
/// under a dollar keep four decimals so sub-cent prices stay visible.
pub(super) fn format_cost(cost: f64) -> String {
    if cost.is_nan() {
        return "N/A".to_string();
    }
    if cost >= 1_000_000.0 {
        format!("${:.1}m", cost / 1_000_000.0)
    } else if cost >= 10_000.0 {
        format!("${:.1}k", cost / 1_000.0)
    } else if cost >= 1.0 {
        format!("${cost:.2}")
    } else {
        format!("${cost:.4}")
    }
}

pub(super) fn format_capability(score: f64) -> String {
    format!("{score:.0}")
}

/// Format a quantity the way it was entered (no trailing .0 for integers).
pub(super) fn format_quantity(q: f64) -> String {
    if q == q.trunc() {
        format!("{}", q as i64)
    } else {
        format!("{q}")
    }
}

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(super) fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text).set_alignment(CellAlignment::Right);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

/// Standard table: UTF8 preset, solid inner borders, single-line header
/// separator instead of the double-line default.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_under_a_dollar_keeps_four_decimals() {
        assert_eq!(format_cost(0.0025), "$0.0025");
        assert_eq!(format_cost(0.0), "$0.0000");
    }

    #[test]
    fn cost_over_a_dollar_uses_two_decimals() {
        assert_eq!(format_cost(1.0), "$1.00");
        assert_eq!(format_cost(12.345), "$12.35");
    }

    #[test]
    fn cost_compact_thresholds() {
        assert_eq!(format_cost(10_000.0), "$10.0k");
        assert_eq!(format_cost(12_345.0), "$12.3k");
        assert_eq!(format_cost(1_200_000.0), "$1.2m");
    }

    #[test]
    fn cost_nan_is_na() {
        assert_eq!(format_cost(f64::NAN), "N/A");
    }

    #[test]
    fn capability_rounds_to_integer() {
        assert_eq!(format_capability(53.0), "53");
        assert_eq!(format_capability(64.6), "65");
    }

    #[test]
    fn quantity_drops_integer_fraction() {
        assert_eq!(format_quantity(100.0), "100");
        assert_eq!(format_quantity(1234.5), "1234.5");
        assert_eq!(format_quantity(0.0), "0");
    }
}
