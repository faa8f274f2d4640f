//! Command handlers: open a store, call one operation, render the result.

use anyhow::Context;

use stockbook_inventory::{INVENTORY_FILE, InventoryStore, ItemDraft, ItemPatch};
use stockbook_units::{UNITS_FILE, UnitTable};

use crate::cli::{Command, SortArgs, UnitCommand};
use crate::render;

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Add {
            name,
            quantity,
            price,
            category,
            unit,
        } => {
            let mut store = open_store()?;
            let draft = ItemDraft {
                name,
                quantity,
                price,
                category,
                unit,
            };
            let item = store.upsert(&draft)?;
            println!(
                "Added '{}': {} {} at {} ({}).",
                draft.name.trim(),
                item.quantity,
                item.unit,
                item.price,
                item.category
            );
        }
        Command::Update {
            name,
            quantity,
            price,
            category,
            unit,
        } => {
            let patch = ItemPatch {
                quantity,
                price,
                category,
                unit,
            };
            if patch.is_empty() {
                println!("Nothing to update for '{name}'.");
                return Ok(());
            }
            let mut store = open_store()?;
            let item = store.update(&name, &patch)?;
            println!(
                "Updated '{}': {} {} at {} ({}).",
                name, item.quantity, item.unit, item.price, item.category
            );
        }
        Command::Remove { name } => {
            let mut store = open_store()?;
            store.remove(&name)?;
            println!("Deleted '{name}'.");
        }
        Command::List { sort } => {
            let store = open_store()?;
            let rows: Vec<_> = store.iter().collect();
            print_rows(rows, &sort);
        }
        Command::Search { term, sort } => {
            let store = open_store()?;
            let rows = store.search(&term);
            print_rows(rows, &sort);
        }
        Command::LowStock { threshold } => {
            let store = open_store()?;
            let scarce = store.low_stock(threshold);
            if !scarce.is_empty() {
                tracing::warn!(count = scarce.len(), threshold, "items below threshold");
            }
            println!("{}", render::low_stock_alert(&scarce));
        }
        Command::Export { output } => {
            let store = open_store()?;
            stockbook_export::export_csv(store.iter(), &output)
                .with_context(|| format!("failed to export to {}", output.display()))?;
            println!("Inventory exported to '{}'.", output.display());
        }
        Command::Unit(UnitCommand::Add { name, factor }) => {
            let mut table = open_units()?;
            let (name, factor) = table.add_unit(&name, &factor)?;
            println!("Unit '{name}' added ({factor} {}).", stockbook_units::BASE_UNIT);
        }
        Command::Unit(UnitCommand::List) => {
            let table = open_units()?;
            println!("{}", render::unit_table(table.iter()));
        }
    }
    Ok(())
}

fn print_rows(mut rows: Vec<(&str, &stockbook_inventory::Item)>, sort: &SortArgs) {
    if let Some(column) = sort.sort {
        render::sort_rows(&mut rows, column, sort.desc);
    }
    println!("{}", render::record_table(&rows));
}

fn open_store() -> anyhow::Result<InventoryStore> {
    InventoryStore::open(INVENTORY_FILE).context("failed to load the inventory document")
}

fn open_units() -> anyhow::Result<UnitTable> {
    UnitTable::open(UNITS_FILE).context("failed to load the units document")
}
