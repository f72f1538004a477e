use crate::model::{CatalogItem, DrinkItem, FoodItem};

/// The largest quantity a stock check or reduction will accept.
///
/// Stock is tracked by presence only: each listed entry is one available unit.
pub const MAX_UNITS_PER_REQUEST: u32 = 1;

/// Food and drink on hand, each kept in insertion order.
///
/// # Actor Framework
/// This struct implements [`RecordEntity`](record_actor::RecordEntity) in
/// [`crate::inventory_actor::entity`], so a running system reaches it through an
/// [`InventoryClient`](crate::clients::InventoryClient).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    food: Vec<FoodItem>,
    drinks: Vec<DrinkItem>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an inventory by adding `items` in order.
    pub fn from_items(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        let mut inventory = Self::new();
        for item in items {
            inventory.add(item);
        }
        inventory
    }

    pub fn add_food(&mut self, item: FoodItem) {
        self.food.push(item);
    }

    pub fn add_drink(&mut self, item: DrinkItem) {
        self.drinks.push(item);
    }

    /// Adds an item to the sequence matching its kind.
    pub fn add(&mut self, item: CatalogItem) {
        match item {
            CatalogItem::Food(food) => self.add_food(food),
            CatalogItem::Drink(drink) => self.add_drink(drink),
        }
    }

    pub fn food(&self) -> &[FoodItem] {
        &self.food
    }

    pub fn drinks(&self) -> &[DrinkItem] {
        &self.drinks
    }

    /// All items, food first, each kind in insertion order.
    pub fn items(&self) -> Vec<CatalogItem> {
        self.food
            .iter()
            .cloned()
            .map(CatalogItem::Food)
            .chain(self.drinks.iter().cloned().map(CatalogItem::Drink))
            .collect()
    }

    /// Whether `quantity` units of an item with this name and kind are on hand.
    ///
    /// Only the name and the variant of `item` are compared. Any quantity above
    /// [`MAX_UNITS_PER_REQUEST`] is reported unavailable regardless of stock.
    pub fn check_availability(&self, item: &CatalogItem, quantity: u32) -> bool {
        quantity <= MAX_UNITS_PER_REQUEST && self.position_of(item).is_some()
    }

    /// Removes the earliest entry with this name and kind.
    ///
    /// Returns `false`, leaving the inventory untouched, when nothing matches or
    /// `quantity` exceeds [`MAX_UNITS_PER_REQUEST`].
    pub fn reduce_stock(&mut self, item: &CatalogItem, quantity: u32) -> bool {
        if quantity > MAX_UNITS_PER_REQUEST {
            return false;
        }
        match (item, self.position_of(item)) {
            (CatalogItem::Food(_), Some(index)) => {
                self.food.remove(index);
                true
            }
            (CatalogItem::Drink(_), Some(index)) => {
                self.drinks.remove(index);
                true
            }
            (_, None) => false,
        }
    }

    /// Renders the food list then the drink list, one item per line.
    pub fn display_stock(&self) -> String {
        let food: String = self.food.iter().map(|item| format!("{item}\n")).collect();
        let drinks: String = self.drinks.iter().map(|item| format!("{item}\n")).collect();
        format!("Food Items:\n{food}Drink Items:\n{drinks}")
    }

    fn position_of(&self, item: &CatalogItem) -> Option<usize> {
        match item {
            CatalogItem::Food(wanted) => self.food.iter().position(|f| f.name == wanted.name),
            CatalogItem::Drink(wanted) => self.drinks.iter().position(|d| d.name == wanted.name),
        }
    }
}
