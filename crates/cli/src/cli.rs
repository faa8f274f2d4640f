//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use stockbook_export::EXPORT_FILE;
use stockbook_inventory::LOW_STOCK_THRESHOLD;
use stockbook_units::BASE_UNIT;

/// Local inventory book: records, units, search, low stock, CSV export.
#[derive(Debug, Parser)]
#[command(name = "stockbook", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add an item, replacing any existing record with the same name.
    Add {
        name: String,
        #[arg(long)]
        quantity: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        category: String,
        #[arg(long, default_value = BASE_UNIT)]
        unit: String,
    },
    /// Update fields of an existing item; omitted fields are kept.
    Update {
        name: String,
        #[arg(long)]
        quantity: Option<String>,
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        unit: Option<String>,
    },
    /// Delete an item.
    Remove { name: String },
    /// List all items in the book.
    List {
        #[command(flatten)]
        sort: SortArgs,
    },
    /// Search items by name (case-insensitive substring).
    Search {
        term: String,
        #[command(flatten)]
        sort: SortArgs,
    },
    /// Show items whose quantity is below the low-stock threshold.
    LowStock {
        #[arg(long, default_value_t = LOW_STOCK_THRESHOLD)]
        threshold: f64,
    },
    /// Export the inventory to a CSV file.
    Export {
        #[arg(long, default_value = EXPORT_FILE)]
        output: PathBuf,
    },
    /// Manage units of measure.
    #[command(subcommand)]
    Unit(UnitCommand),
}

#[derive(Debug, Subcommand)]
pub enum UnitCommand {
    /// Register a unit with its conversion factor (overwrites).
    Add { name: String, factor: String },
    /// List registered units.
    List,
}

/// Display-only ordering of the rendered table. Persisted order is never
/// touched.
#[derive(Debug, Default, Args)]
pub struct SortArgs {
    /// Sort displayed rows by this column.
    #[arg(long, value_enum)]
    pub sort: Option<SortColumn>,
    /// Sort descending instead of ascending.
    #[arg(long, requires = "sort")]
    pub desc: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortColumn {
    Name,
    Quantity,
    Price,
    Category,
    Unit,
}
