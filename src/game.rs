use crate::game_mode::{Difficulty, GameConfig};
use crate::hunter::Hunter;
use crate::town::{BrawlOutcome, HuntOutcome, ShopAction, Town};
use rand::Rng;

/// Why a game session stopped accepting commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// All treasure kinds collected.
    Won,
    /// Gold ran out (at or below zero).
    Lost,
    /// The player gave up the hunt.
    Quit,
}

/// One game session: the hunter, the town they're currently in, and the
/// difficulty knobs everything runs on. The binary is a thin prompt loop
/// around this.
#[derive(Debug, Clone)]
pub struct Game {
    hunter: Hunter,
    town: Town,
    config: GameConfig,
    end: Option<GameEnd>,
}

impl Game {
    pub fn new(hunter_name: &str, difficulty: Difficulty, rng: &mut impl Rng) -> Self {
        Self::with_config(hunter_name, difficulty, difficulty.config(), rng)
    }

    /// Starts a session with explicit knobs, e.g. a preset overridden from a
    /// config file. The cheating flag still follows the difficulty.
    pub fn with_config(
        hunter_name: &str,
        difficulty: Difficulty,
        config: GameConfig,
        rng: &mut impl Rng,
    ) -> Self {
        let mut hunter = Hunter::new(hunter_name);
        if difficulty == Difficulty::Cheat {
            hunter.set_cheating(true);
        }

        let mut town = Town::new(&config, rng);
        town.hunter_arrives(&hunter);

        Self {
            hunter,
            town,
            config,
            end: None,
        }
    }

    pub fn hunter(&self) -> &Hunter {
        &self.hunter
    }

    pub fn town(&self) -> &Town {
        &self.town
    }

    pub fn end(&self) -> Option<GameEnd> {
        self.end
    }

    pub fn is_over(&self) -> bool {
        self.end.is_some()
    }

    pub fn latest_news(&self) -> &str {
        self.town.latest_news()
    }

    pub fn buy(&mut self, item_input: &str) -> bool {
        self.town
            .enter_shop(&mut self.hunter, ShopAction::Buy, item_input)
    }

    pub fn sell(&mut self, item_input: &str) -> bool {
        self.town
            .enter_shop(&mut self.hunter, ShopAction::Sell, item_input)
    }

    /// Tries to move on. On a successful crossing the old town is abandoned
    /// and a fresh one is rolled; its crossing news is returned so the caller
    /// can print it before the new town's welcome overwrites it.
    pub fn move_on(&mut self, rng: &mut impl Rng) -> Option<String> {
        if !self.town.attempt_leave(&mut self.hunter, rng) {
            return None;
        }
        let crossing_news = self.town.latest_news().to_string();
        self.town = Town::new(&self.config, rng);
        self.town.hunter_arrives(&self.hunter);
        Some(crossing_news)
    }

    /// Looks for a brawl, then checks the lose condition: brawl losses are
    /// the only way gold goes negative.
    pub fn look_for_trouble(&mut self, rng: &mut impl Rng) -> BrawlOutcome {
        let outcome = self.town.look_for_trouble(&mut self.hunter, rng);
        if self.hunter.gold() <= 0 {
            self.end = Some(GameEnd::Lost);
        }
        outcome
    }

    /// Hunts for treasure, then checks the win condition.
    pub fn hunt_for_treasure(&mut self, rng: &mut impl Rng) -> HuntOutcome {
        let outcome = self.town.hunt_for_treasure(&mut self.hunter, rng);
        if self.hunter.has_all_treasures() {
            self.end = Some(GameEnd::Won);
        }
        outcome
    }

    pub fn give_up(&mut self) {
        self.end = Some(GameEnd::Quit);
    }
}
