//! Food and drink offered for sale.
//!
//! [`CatalogItem`] is a closed sum over the two kinds, so code that needs to know
//! "food or drink?" matches on the variant instead of inspecting the value at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A dish, labelled with its menu category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl FoodItem {
    /// Creates a new FoodItem.
    ///
    /// # Arguments
    /// * `name` - Name used for stock lookups
    /// * `price` - Unit price, expected to be non-negative
    /// * `category` - Menu category (e.g. "Fast Food")
    pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
        }
    }
}

/// Prices use the shortest form that reads back exactly (`5.99`, `0`, `12.3456789`),
/// not a fixed number of significant digits.
impl fmt::Display for FoodItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Category: {}, Name: {}, Price: ${}",
            self.category, self.name, self.price
        )
    }
}

/// A beverage, labelled with its type (e.g. "Soda").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrinkItem {
    pub name: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub drink_type: String,
}

impl DrinkItem {
    pub fn new(name: impl Into<String>, price: f64, drink_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            drink_type: drink_type.into(),
        }
    }
}

/// Prices print as for [`FoodItem`].
impl fmt::Display for DrinkItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Type: {}, Name: {}, Price: ${}",
            self.drink_type, self.name, self.price
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CatalogItem {
    Food(FoodItem),
    Drink(DrinkItem),
}

impl CatalogItem {
    pub fn name(&self) -> &str {
        match self {
            CatalogItem::Food(item) => &item.name,
            CatalogItem::Drink(item) => &item.name,
        }
    }

    pub fn price(&self) -> f64 {
        match self {
            CatalogItem::Food(item) => item.price,
            CatalogItem::Drink(item) => item.price,
        }
    }
}

impl From<FoodItem> for CatalogItem {
    fn from(item: FoodItem) -> Self {
        CatalogItem::Food(item)
    }
}

impl From<DrinkItem> for CatalogItem {
    fn from(item: DrinkItem) -> Self {
        CatalogItem::Drink(item)
    }
}

impl fmt::Display for CatalogItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogItem::Food(item) => fmt::Display::fmt(item, f),
            CatalogItem::Drink(item) => fmt::Display::fmt(item, f),
        }
    }
}
