//! Treasure Hunter - Town/Shop Simulation Library
//!
//! This module exposes the game engine for testing and external use: the
//! binary is a thin line-oriented menu loop over `Game`.

pub mod build_info;
pub mod constants;
pub mod game;
pub mod game_mode;
pub mod hunter;
pub mod items;
pub mod shop;
pub mod terrain;
pub mod town;

pub use game::{Game, GameEnd};
pub use game_mode::{Difficulty, GameConfig};
pub use hunter::Hunter;
pub use items::{Item, Treasure};
pub use shop::Shop;
pub use terrain::Terrain;
pub use town::{BrawlOutcome, HuntOutcome, ShopAction, Town};
