//! Table and alert rendering.

use colored::Colorize;
use tabled::builder::Builder;
use tabled::settings::Style;

use stockbook_inventory::Item;

use crate::cli::SortColumn;

const COLUMNS: [&str; 5] = ["Name", "Quantity", "Price", "Category", "Unit"];

/// Render records as a table. An empty listing gets a placeholder line
/// instead of a bare table.
pub fn record_table(records: &[(&str, &Item)]) -> String {
    if records.is_empty() {
        return "Inventory is empty.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(COLUMNS);
    for (name, item) in records {
        builder.push_record([
            (*name).to_string(),
            item.quantity.to_string(),
            item.price.to_string(),
            item.category.clone(),
            item.unit.clone(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    table.to_string()
}

/// Render the unit table.
pub fn unit_table<'a>(units: impl Iterator<Item = (&'a str, f64)>) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Unit", "Factor"]);
    for (name, factor) in units {
        builder.push_record([name.to_string(), factor.to_string()]);
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    table.to_string()
}

/// Sort displayed rows by one column's string representation. Stable;
/// `desc` flips the comparison, not the rows.
pub fn sort_rows(rows: &mut [(&str, &Item)], column: SortColumn, desc: bool) {
    rows.sort_by(|a, b| {
        let (ka, kb) = (cell(a, column), cell(b, column));
        if desc { kb.cmp(&ka) } else { ka.cmp(&kb) }
    });
}

fn cell((name, item): &(&str, &Item), column: SortColumn) -> String {
    match column {
        SortColumn::Name => (*name).to_string(),
        SortColumn::Quantity => item.quantity.to_string(),
        SortColumn::Price => item.price.to_string(),
        SortColumn::Category => item.category.clone(),
        SortColumn::Unit => item.unit.clone(),
    }
}

/// One line per low-stock record, highlighted, in store order.
pub fn low_stock_alert(records: &[(&str, &Item)]) -> String {
    if records.is_empty() {
        return "No items are low in stock.".to_string();
    }

    let listing = records
        .iter()
        .map(|(name, item)| format!("{} ({} {})", name, item.quantity, item.unit))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} {}", "Low stock:".yellow().bold(), listing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: f64, price: f64, category: &str) -> Item {
        Item {
            quantity,
            price,
            category: category.to_string(),
            unit: "pieces".to_string(),
        }
    }

    #[test]
    fn empty_listing_renders_the_placeholder() {
        assert_eq!(record_table(&[]), "Inventory is empty.");
    }

    #[test]
    fn table_contains_every_column_and_row() {
        let widget = item(3.0, 2.5, "Tools");
        let rendered = record_table(&[("Widget", &widget)]);

        for column in COLUMNS {
            assert!(rendered.contains(column));
        }
        assert!(rendered.contains("Widget"));
        assert!(rendered.contains("2.5"));
    }

    #[test]
    fn sorting_compares_string_representations() {
        let five = item(5.0, 1.0, "A");
        let ten = item(10.0, 1.0, "B");
        let mut rows = vec![("Five", &five), ("Ten", &ten)];

        // "10" sorts before "5" lexicographically.
        sort_rows(&mut rows, SortColumn::Quantity, false);
        assert_eq!(rows[0].0, "Ten");

        sort_rows(&mut rows, SortColumn::Quantity, true);
        assert_eq!(rows[0].0, "Five");
    }

    #[test]
    fn low_stock_alert_lists_quantity_and_unit() {
        colored::control::set_override(false);
        let scarce = item(5.0, 1.0, "Misc");
        let alert = low_stock_alert(&[("Scarce", &scarce)]);
        assert_eq!(alert, "Low stock: Scarce (5 pieces)");

        assert_eq!(low_stock_alert(&[]), "No items are low in stock.");
    }
}
