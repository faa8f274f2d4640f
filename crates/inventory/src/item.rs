//! Inventory records and the raw form input that produces them.

use serde::{Deserialize, Serialize};

use stockbook_core::{DomainResult, field};
use stockbook_units::BASE_UNIT;

fn default_unit() -> String {
    BASE_UNIT.to_string()
}

/// One inventory record. The item name is the key and lives outside the
/// record, exactly as in the persisted document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub quantity: f64,
    pub price: f64,
    pub category: String,
    /// Unit of measure; a soft reference into the unit table, not
    /// validated against it. Documents written without the field load as
    /// the base unit.
    #[serde(default = "default_unit")]
    pub unit: String,
}

/// A complete submission of raw input fields, exactly as typed.
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub category: String,
    pub unit: String,
}

impl ItemDraft {
    /// Validate every field, producing the item name and record.
    ///
    /// All five fields are required. Quantity and price must be numbers;
    /// quantity must also be non-negative. Price carries no sign
    /// restriction.
    pub fn validate(&self) -> DomainResult<(String, Item)> {
        let name = field::require_text("name", &self.name)?;
        let quantity = field::parse_quantity("quantity", &self.quantity)?;
        let price = field::parse_number("price", &self.price)?;
        let category = field::require_text("category", &self.category)?;
        let unit = field::require_text("unit", &self.unit)?;

        Ok((
            name,
            Item {
                quantity,
                price,
                category,
                unit,
            },
        ))
    }
}

/// A partial update. `None` fields keep their prior value.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub quantity: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub unit: Option<String>,
}

impl ItemPatch {
    /// Parse every provided field (quantity, price, category, unit in
    /// that order), then apply them all. The first parse failure is
    /// returned and `item` is left untouched.
    pub fn apply_to(&self, item: &mut Item) -> DomainResult<()> {
        let quantity = self
            .quantity
            .as_deref()
            .map(|raw| field::parse_quantity("quantity", raw))
            .transpose()?;
        let price = self
            .price
            .as_deref()
            .map(|raw| field::parse_number("price", raw))
            .transpose()?;
        let category = self
            .category
            .as_deref()
            .map(|raw| field::require_text("category", raw))
            .transpose()?;
        let unit = self
            .unit
            .as_deref()
            .map(|raw| field::require_text("unit", raw))
            .transpose()?;

        if let Some(quantity) = quantity {
            item.quantity = quantity;
        }
        if let Some(price) = price {
            item.price = price;
        }
        if let Some(category) = category {
            item.category = category;
        }
        if let Some(unit) = unit {
            item.unit = unit;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.quantity.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.unit.is_none()
    }
}
