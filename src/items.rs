use serde::{Deserialize, Serialize};

/// Equipment sold by the shop. Each item is the crossing requirement
/// for exactly one terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Item {
    Water,
    Rope,
    Machete,
    Lantern,
    Horse,
    Boat,
}

impl Item {
    /// All shop items in price-sheet order.
    pub const ALL: [Item; 6] = [
        Item::Water,
        Item::Rope,
        Item::Machete,
        Item::Lantern,
        Item::Horse,
        Item::Boat,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Item::Water => "Water",
            Item::Rope => "Rope",
            Item::Machete => "Machete",
            Item::Lantern => "Lantern",
            Item::Horse => "Horse",
            Item::Boat => "Boat",
        }
    }

    /// Single-letter menu code shown on the price sheet.
    pub fn code(&self) -> char {
        match self {
            Item::Water => 'W',
            Item::Rope => 'R',
            Item::Machete => 'M',
            Item::Lantern => 'L',
            Item::Horse => 'H',
            Item::Boat => 'B',
        }
    }

    /// Base price before any game-mode multiplier.
    pub fn base_price(&self) -> i64 {
        match self {
            Item::Water => 2,
            Item::Rope => 4,
            Item::Machete => 6,
            Item::Lantern => 10,
            Item::Horse => 12,
            Item::Boat => 20,
        }
    }

    /// Normalizes player input to an item: accepts the single-letter code
    /// or the full name, case-insensitive. Anything else is not an item.
    pub fn parse(input: &str) -> Option<Item> {
        match input.trim().to_lowercase().as_str() {
            "w" | "water" => Some(Item::Water),
            "r" | "rope" => Some(Item::Rope),
            "m" | "machete" => Some(Item::Machete),
            "l" | "lantern" => Some(Item::Lantern),
            "h" | "horse" => Some(Item::Horse),
            "b" | "boat" => Some(Item::Boat),
            _ => None,
        }
    }
}

/// The collectible treasure kinds. Finding all of them wins the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Treasure {
    Copper,
    Gold,
    Diamond,
}

impl Treasure {
    pub const ALL: [Treasure; 3] = [Treasure::Copper, Treasure::Gold, Treasure::Diamond];

    pub fn name(&self) -> &'static str {
        match self {
            Treasure::Copper => "CopperThing",
            Treasure::Gold => "GoldThing",
            Treasure::Diamond => "DiamondThing",
        }
    }
}
