//! Restaurant menu lookup used when placing orders.

use bson::oid::ObjectId;
use std::collections::HashMap;

/// A persisted menu item and its price at creation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricedItem {
    pub menu_item_id: ObjectId,
    pub price: f64,
}

/// Menu items grouped by owning restaurant, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    items: HashMap<ObjectId, Vec<PricedItem>>,
    len: usize,
}

impl MenuCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, restaurant_id: ObjectId, item: PricedItem) {
        self.items.entry(restaurant_id).or_default().push(item);
        self.len += 1;
    }

    /// Items for a restaurant. Restaurants without a menu yield an empty slice.
    pub fn items_for(&self, restaurant_id: &ObjectId) -> &[PricedItem] {
        self.items
            .get(restaurant_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Find which restaurant owns a menu item.
    pub fn owner_of(&self, menu_item_id: &ObjectId) -> Option<ObjectId> {
        self.items.iter().find_map(|(restaurant_id, items)| {
            items
                .iter()
                .any(|item| item.menu_item_id == *menu_item_id)
                .then_some(*restaurant_id)
        })
    }

    pub fn restaurant_count(&self) -> usize {
        self.items.len()
    }

    /// Total number of items across all restaurants.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl FromIterator<(ObjectId, PricedItem)> for MenuCatalog {
    fn from_iter<I: IntoIterator<Item = (ObjectId, PricedItem)>>(iter: I) -> Self {
        let mut catalog = MenuCatalog::new();
        for (restaurant_id, item) in iter {
            catalog.insert(restaurant_id, item);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_groups_by_restaurant() {
        let first = ObjectId::new();
        let second = ObjectId::new();
        let item = |price| PricedItem {
            menu_item_id: ObjectId::new(),
            price,
        };

        let catalog: MenuCatalog = vec![(first, item(2.0)), (second, item(3.0)), (first, item(4.0))]
            .into_iter()
            .collect();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.restaurant_count(), 2);
        assert_eq!(catalog.items_for(&first).len(), 2);
        assert_eq!(catalog.items_for(&first)[1].price, 4.0);
        assert!(catalog.items_for(&ObjectId::new()).is_empty());

        let owned = catalog.items_for(&second)[0].menu_item_id;
        assert_eq!(catalog.owner_of(&owned), Some(second));
    }
}
