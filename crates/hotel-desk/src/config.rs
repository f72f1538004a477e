//! Runtime settings for the front desk.
//!
//! Everything the original console program hard-coded (file names, room count, the
//! opening stock) lives here so tests can point the system at a temporary directory.

use crate::model::{CatalogItem, DrinkItem, FoodItem};
use std::path::{Path, PathBuf};

pub const CREDENTIAL_FILE: &str = "managers.txt";
pub const ROSTER_FILE: &str = "employees.txt";
pub const ROOM_COUNT: u32 = 10;

/// Where the stores keep their files and what the system starts with.
#[derive(Debug, Clone)]
pub struct DeskConfig {
    /// Directory holding the credential and roster files.
    pub data_dir: PathBuf,
    pub credential_file: String,
    pub roster_file: String,
    pub room_count: u32,
    /// Mailbox size for every store actor.
    pub channel_capacity: usize,
    pub opening_stock: Vec<CatalogItem>,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            credential_file: CREDENTIAL_FILE.to_string(),
            roster_file: ROSTER_FILE.to_string(),
            room_count: ROOM_COUNT,
            channel_capacity: 32,
            opening_stock: house_stock(),
        }
    }
}

impl DeskConfig {
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_opening_stock(mut self, stock: Vec<CatalogItem>) -> Self {
        self.opening_stock = stock;
        self
    }

    pub fn with_room_count(mut self, room_count: u32) -> Self {
        self.room_count = room_count;
        self
    }

    pub fn credential_path(&self) -> PathBuf {
        self.data_dir.join(&self.credential_file)
    }

    pub fn roster_path(&self) -> PathBuf {
        self.data_dir.join(&self.roster_file)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// The kitchen's standing stock: one burger and one coke.
pub fn house_stock() -> Vec<CatalogItem> {
    vec![
        FoodItem::new("Burger", 5.99, "Fast Food").into(),
        DrinkItem::new("Coke", 1.99, "Soda").into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_use_working_directory() {
        let config = DeskConfig::default();
        assert_eq!(config.credential_path(), Path::new("./managers.txt"));
        assert_eq!(config.roster_path(), Path::new("./employees.txt"));
        assert_eq!(config.room_count, 10);
    }

    #[test]
    fn test_builders_override_defaults() {
        let config = DeskConfig::default()
            .with_data_dir("/srv/desk")
            .with_room_count(3)
            .with_opening_stock(Vec::new());
        assert_eq!(config.roster_path(), Path::new("/srv/desk/employees.txt"));
        assert_eq!(config.room_count, 3);
        assert!(config.opening_stock.is_empty());
    }

    #[test]
    fn test_house_stock_is_one_burger_and_one_coke() {
        let stock = house_stock();
        let names: Vec<&str> = stock.iter().map(|i| i.name()).collect();
        assert_eq!(names, ["Burger", "Coke"]);
    }
}
