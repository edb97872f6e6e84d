// Hunter setup constants
pub const STARTING_GOLD: i64 = 10;

// Travel constants
pub const ITEM_BREAK_CHANCE: f64 = 0.5;

// Treasure hunting constants
pub const TREASURE_FIND_CHANCE: f64 = 0.5;

// Brawl constants
pub const NO_TROUBLE_CHANCE_TOUGH: f64 = 0.66;
pub const NO_TROUBLE_CHANCE_CALM: f64 = 0.33;
pub const BRAWL_STAKE_MIN: i64 = 1;
pub const BRAWL_STAKE_MAX: i64 = 10;
pub const CHEAT_BRAWL_PAYOUT: i64 = 100;

// Shop constants
pub const CHEAT_ITEM_PRICE: i64 = 1;

// Presentation pacing between brawl damage ticks (cosmetic only)
pub const BRAWL_TICK_DELAY_MS: u64 = 400;
