use serde::Serialize;

/// Item name and price text, in display order
pub const MENU: [(&str, &str); 4] = [
    ("Noodles", "Price is Rs.80"),
    ("Burger", "Price is 70"),
    ("Pizza", "Price is 320"),
    ("Samosa", "Price is 20"),
];

#[derive(Debug, Serialize)]
pub struct MenuEntry {
    pub name: &'static str,
    pub price: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub items: Vec<MenuEntry>,
}

impl MenuResponse {
    pub fn full() -> Self {
        Self {
            items: MENU
                .iter()
                .map(|&(name, price)| MenuEntry { name, price })
                .collect(),
        }
    }
}

/// Case-sensitive lookup
pub fn price_of(item: &str) -> Option<&'static str> {
    MENU.iter()
        .find(|(name, _)| *name == item)
        .map(|(_, price)| *price)
}
