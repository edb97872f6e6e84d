use crate::constants::STARTING_GOLD;
use crate::items::Treasure;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The player entity. Persists across towns; everything else is rebuilt
/// each time the hunter moves on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hunter {
    name: String,
    gold: i64,
    /// Item and treasure names, each held at most once.
    inventory: Vec<String>,
    cheating: bool,
}

impl Hunter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gold: STARTING_GOLD,
            inventory: Vec::new(),
            cheating: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gold(&self) -> i64 {
        self.gold
    }

    /// Gold can go negative through brawl losses; the game loop treats
    /// anything at or below zero as the lose condition.
    pub fn change_gold(&mut self, delta: i64) {
        self.gold += delta;
    }

    pub fn is_cheating(&self) -> bool {
        self.cheating
    }

    pub fn set_cheating(&mut self, cheating: bool) {
        self.cheating = cheating;
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|item| item == name)
    }

    /// Adds an item by name. Duplicates are rejected so that equipment and
    /// treasures alike are held at most once.
    pub fn add_item(&mut self, name: &str) -> bool {
        if self.has_item(name) {
            return false;
        }
        self.inventory.push(name.to_string());
        true
    }

    pub fn remove_item(&mut self, name: &str) -> bool {
        match self.inventory.iter().position(|item| item == name) {
            Some(idx) => {
                self.inventory.remove(idx);
                true
            }
            None => false,
        }
    }

    /// True once all treasure kinds are in the inventory, in any order.
    pub fn has_all_treasures(&self) -> bool {
        Treasure::ALL.iter().all(|t| self.has_item(t.name()))
    }

    pub fn inventory_listing(&self) -> String {
        if self.inventory.is_empty() {
            "nothing".to_string()
        } else {
            self.inventory.join(", ")
        }
    }
}

impl fmt::Display for Hunter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hunter {} has {} gold and carries: {}",
            self.name,
            self.gold,
            self.inventory_listing()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_hunter_starts_with_default_gold() {
        let hunter = Hunter::new("Tess");
        assert_eq!(hunter.gold(), STARTING_GOLD);
        assert!(!hunter.is_cheating());
        assert_eq!(hunter.inventory_listing(), "nothing");
    }

    #[test]
    fn test_add_item_rejects_duplicates() {
        let mut hunter = Hunter::new("Tess");
        assert!(hunter.add_item("Rope"));
        assert!(!hunter.add_item("Rope"));
        assert!(hunter.has_item("Rope"));
        assert_eq!(hunter.inventory_listing(), "Rope");
    }

    #[test]
    fn test_remove_item_reports_missing() {
        let mut hunter = Hunter::new("Tess");
        assert!(!hunter.remove_item("Boat"));
        hunter.add_item("Boat");
        assert!(hunter.remove_item("Boat"));
        assert!(!hunter.has_item("Boat"));
    }

    #[test]
    fn test_gold_can_go_negative() {
        let mut hunter = Hunter::new("Tess");
        hunter.change_gold(-(STARTING_GOLD + 5));
        assert_eq!(hunter.gold(), -5);
    }

    #[test]
    fn test_has_all_treasures_in_any_order() {
        let mut hunter = Hunter::new("Tess");
        assert!(!hunter.has_all_treasures());
        hunter.add_item(Treasure::Diamond.name());
        hunter.add_item(Treasure::Copper.name());
        assert!(!hunter.has_all_treasures());
        hunter.add_item(Treasure::Gold.name());
        assert!(hunter.has_all_treasures());
    }
}
