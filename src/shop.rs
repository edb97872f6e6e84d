use crate::constants::CHEAT_ITEM_PRICE;
use crate::game_mode::GameConfig;
use crate::hunter::Hunter;
use crate::items::Item;
use serde::{Deserialize, Serialize};

/// The town shop. Stateless apart from its mode-dependent pricing knobs;
/// every transaction operates on the hunter passed in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Shop {
    /// Fraction of the buy price paid back on a sale.
    markdown: f64,
    /// Multiplier on base prices.
    price_multiplier: f64,
}

impl Shop {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            markdown: config.markdown,
            price_multiplier: config.price_multiplier,
        }
    }

    /// Quotes a price for buying or selling an item. A cheating hunter pays
    /// and receives exactly 1 gold for anything on the shelf; that override
    /// comes before the multiplier math. Selling quotes the markdown applied
    /// on top of the buy price, truncated once.
    pub fn price_of(&self, hunter: &Hunter, item: Item, buying: bool) -> i64 {
        if hunter.is_cheating() {
            return CHEAT_ITEM_PRICE;
        }
        let buy_price = item.base_price() as f64 * self.price_multiplier;
        if buying {
            buy_price as i64
        } else {
            (buy_price * self.markdown) as i64
        }
    }

    /// Quotes a price for raw player input. Input that doesn't name an item
    /// quotes 0, which no transaction path accepts.
    pub fn quote(&self, hunter: &Hunter, input: &str, buying: bool) -> i64 {
        match Item::parse(input) {
            Some(item) => self.price_of(hunter, item, buying),
            None => 0,
        }
    }

    /// Sells an item to the hunter. Fails without touching gold or inventory
    /// when the hunter can't afford it or already owns one.
    pub fn buy(&self, hunter: &mut Hunter, item: Item) -> bool {
        let price = self.price_of(hunter, item, true);
        if hunter.gold() < price || hunter.has_item(item.name()) {
            return false;
        }
        hunter.change_gold(-price);
        hunter.add_item(item.name());
        true
    }

    /// Buys an item back from the hunter. Fails when the hunter doesn't own
    /// it, or when the quote comes out to 0 (the shop won't hand out an item
    /// for free gold, nor take one for nothing).
    pub fn sell(&self, hunter: &mut Hunter, item: Item) -> bool {
        let price = self.price_of(hunter, item, false);
        if price == 0 || !hunter.has_item(item.name()) {
            return false;
        }
        hunter.remove_item(item.name());
        hunter.change_gold(price);
        true
    }

    /// The human-readable price sheet, one line per item.
    pub fn price_sheet(&self, hunter: &Hunter) -> String {
        let mut sheet = String::new();
        for item in Item::ALL {
            let name = item.name();
            sheet.push_str(&format!(
                "({}){}: {} gold\n",
                item.code(),
                &name[1..],
                self.price_of(hunter, item, true)
            ));
        }
        sheet
    }
}
