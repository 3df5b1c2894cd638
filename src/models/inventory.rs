use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct InventoryItem {
    pub id: i64,
    pub category_id: i64,
    pub capacity: i64,
    pub threshold: i64,
}

impl InventoryItem {
    /// Marca de stock bajo para el dashboard.
    pub fn is_low(&self) -> bool {
        self.capacity < self.threshold
    }
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct NewInventory {
    pub category_id: i64,
    pub capacity: i64,
    pub threshold: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_stock_is_below_threshold() {
        let item = InventoryItem { id: 1, category_id: 1, capacity: 20, threshold: 50 };
        assert!(item.is_low());

        let item = InventoryItem { id: 2, category_id: 1, capacity: 50, threshold: 50 };
        assert!(!item.is_low());
    }
}
