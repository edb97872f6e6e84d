use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// The selectable difficulty presets. `Cheat` plays like normal but flags the
/// hunter as cheating, which rigs shop prices and brawls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Cheat,
}

impl Difficulty {
    /// Parses the difficulty prompt input: full name or first letter,
    /// case-insensitive. "cheat" must be typed out in full.
    pub fn parse(input: &str) -> Option<Difficulty> {
        match input.trim().to_lowercase().as_str() {
            "e" | "easy" => Some(Difficulty::Easy),
            "n" | "normal" => Some(Difficulty::Normal),
            "h" | "hard" => Some(Difficulty::Hard),
            "cheat" => Some(Difficulty::Cheat),
            _ => None,
        }
    }

    pub fn config(&self) -> GameConfig {
        match self {
            Difficulty::Easy => GameConfig {
                markdown: 0.9,
                price_multiplier: 0.5,
                toughness: 0.2,
                brawl_win_chance: 0.75,
                brawl_gold_bonus: 5,
            },
            Difficulty::Normal | Difficulty::Cheat => GameConfig::default(),
            Difficulty::Hard => GameConfig {
                markdown: 0.25,
                toughness: 0.75,
                ..GameConfig::default()
            },
        }
    }
}

/// The numeric knobs a difficulty preset supplies. This is pure data; all
/// behavior lives in `Shop` and `Town`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fraction of the buy price paid back when selling (0 < markdown <= 1).
    pub markdown: f64,
    /// Multiplier applied to base prices when buying (> 0).
    pub price_multiplier: f64,
    /// Chance a freshly built town rolls tough.
    pub toughness: f64,
    /// Chance of winning a brawl once one breaks out.
    pub brawl_win_chance: f64,
    /// Extra gold added to the stake on a brawl win (never to a loss).
    pub brawl_gold_bonus: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            markdown: 0.5,
            price_multiplier: 1.0,
            toughness: 0.4,
            brawl_win_chance: 0.5,
            brawl_gold_bonus: 0,
        }
    }
}

impl GameConfig {
    /// Loads a preset override from a JSON file.
    ///
    /// The file holds a single `GameConfig` object; out-of-range knobs are
    /// rejected rather than silently clamped.
    pub fn load(path: &Path) -> io::Result<GameConfig> {
        let data = fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config
            .validate()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.markdown > 0.0 && self.markdown <= 1.0) {
            return Err(format!("markdown must be in (0, 1], got {}", self.markdown));
        }
        if self.price_multiplier <= 0.0 {
            return Err(format!(
                "price_multiplier must be positive, got {}",
                self.price_multiplier
            ));
        }
        if !(0.0..=1.0).contains(&self.toughness) {
            return Err(format!("toughness must be in [0, 1], got {}", self.toughness));
        }
        if !(0.0..=1.0).contains(&self.brawl_win_chance) {
            return Err(format!(
                "brawl_win_chance must be in [0, 1], got {}",
                self.brawl_win_chance
            ));
        }
        if self.brawl_gold_bonus < 0 {
            return Err(format!(
                "brawl_gold_bonus must be non-negative, got {}",
                self.brawl_gold_bonus
            ));
        }
        Ok(())
    }
}
