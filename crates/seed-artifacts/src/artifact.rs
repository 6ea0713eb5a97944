use std::fmt;

/// The artifacts produced and consumed by the seeding stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    UserIds,
    RestaurantIds,
    MenuItems,
    MenuItemIds,
    Orders,
    ReviewIds,
}

impl Artifact {
    pub const ALL: [Artifact; 6] = [
        Artifact::UserIds,
        Artifact::RestaurantIds,
        Artifact::MenuItems,
        Artifact::MenuItemIds,
        Artifact::Orders,
        Artifact::ReviewIds,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Artifact::UserIds => "user_ids.csv",
            Artifact::RestaurantIds => "restaurant_ids.csv",
            Artifact::MenuItems => "menu_items.csv",
            Artifact::MenuItemIds => "menu_item_ids.csv",
            Artifact::Orders => "orders.csv",
            Artifact::ReviewIds => "review_ids.csv",
        }
    }

    /// Header row, in column order.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Artifact::UserIds => &["user_id"],
            Artifact::RestaurantIds => &["restaurant_id"],
            Artifact::MenuItems => &["restaurant_id", "menu_item_id", "price"],
            Artifact::MenuItemIds => &["menu_item_id"],
            Artifact::Orders => &["order_id", "user_id", "restaurant_id", "ordered_at"],
            Artifact::ReviewIds => &["review_id"],
        }
    }

    /// Whether this artifact is a plain single-column identifier list.
    pub fn is_id_list(&self) -> bool {
        self.columns().len() == 1
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
