//! `stockbook-export` — CSV snapshots of the inventory.
//!
//! A direct field-order serialization: fixed header, one row per record
//! in store iteration order, standard quoting.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use stockbook_inventory::Item;

/// Export file, relative to the working directory.
pub const EXPORT_FILE: &str = "inventory_export.csv";

const HEADER: [&str; 5] = ["Name", "Quantity", "Price", "Category", "Unit"];

/// Write `records` as CSV to `writer`, in the order given.
pub fn write_csv<'a, W, I>(records: I, writer: W) -> csv::Result<()>
where
    W: Write,
    I: IntoIterator<Item = (&'a str, &'a Item)>,
{
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(HEADER)?;
    for (name, item) in records {
        out.write_record([
            name,
            &item.quantity.to_string(),
            &item.price.to_string(),
            &item.category,
            &item.unit,
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Export `records` to the file at `path`, overwriting it.
pub fn export_csv<'a, I>(records: I, path: &Path) -> csv::Result<()>
where
    I: IntoIterator<Item = (&'a str, &'a Item)>,
{
    let file = File::create(path)?;
    write_csv(records, file)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: f64, price: f64, category: &str, unit: &str) -> Item {
        Item {
            quantity,
            price,
            category: category.to_string(),
            unit: unit.to_string(),
        }
    }

    fn rendered<'a>(records: &[(&'a str, &'a Item)]) -> String {
        let mut buf = Vec::new();
        write_csv(records.iter().copied(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn one_item_yields_header_and_one_row() {
        let widget = item(3.0, 2.5, "Tools", "pieces");
        let csv = rendered(&[("Widget", &widget)]);
        assert_eq!(csv, "Name,Quantity,Price,Category,Unit\nWidget,3,2.5,Tools,pieces\n");
    }

    #[test]
    fn rows_follow_store_iteration_order() {
        let a = item(1.0, 1.0, "A", "pieces");
        let b = item(2.0, 2.0, "B", "pieces");
        let csv = rendered(&[("Zeta", &a), ("Alpha", &b)]);

        let lines: Vec<_> = csv.lines().collect();
        assert!(lines[1].starts_with("Zeta,"));
        assert!(lines[2].starts_with("Alpha,"));
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let mixed = item(7.0, 0.5, "Nuts, Bolts", "pieces");
        let csv = rendered(&[("M3 \"short\"", &mixed)]);

        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[1], "\"M3 \"\"short\"\"\",7,0.5,\"Nuts, Bolts\",pieces");
    }

    #[test]
    fn empty_store_exports_just_the_header() {
        let csv = rendered(&[]);
        assert_eq!(csv, "Name,Quantity,Price,Category,Unit\n");
    }

    #[test]
    fn export_csv_writes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILE);
        let widget = item(3.0, 2.5, "Tools", "pieces");

        export_csv([("Widget", &widget)], &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.ends_with("Widget,3,2.5,Tools,pieces\n"));
    }
}
