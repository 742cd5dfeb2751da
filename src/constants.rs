// Inventory capacities
pub const KIT_CAPACITY: usize = 8;
pub const CHEST_CAPACITY: usize = 3;

// Starting purses
pub const STARTING_GOLD: i32 = 20;
pub const EASY_STARTING_GOLD: i32 = 40;
pub const OUTFITTED_STARTING_GOLD: i32 = 100;

// Items with special rules
pub const SWORD: &str = "sword"; // free purchases once owned, brawlers yield
pub const SHOVEL: &str = "shovel";

// Pre-filled kit for the outfitted hunter
pub const OUTFITTED_KIT: [&str; 7] = ["water", "rope", "machete", "horse", "boat", "boots", "shovel"];

// Brawling: chance of *not* finding trouble, reused as the win threshold
pub const NO_TROUBLE_CHANCE_TOUGH: f64 = 0.66;
pub const NO_TROUBLE_CHANCE_EASY: f64 = 0.10;
pub const NO_TROUBLE_CHANCE_NORMAL: f64 = 0.33;
pub const BRAWL_MAX_GOLD: i32 = 10;

// Digging
pub const DIG_SUCCESS_THRESHOLD: f64 = 0.49;
pub const DIG_MAX_GOLD: i32 = 20;

// Crossing
pub const ITEM_BREAK_CHANCE: f64 = 0.5;

// Town generation
pub const DEFAULT_TOUGHNESS: f64 = 0.4;
pub const HARD_TOUGHNESS: f64 = 0.75;

// Shop markdown (fraction of the price paid back when selling)
pub const DEFAULT_MARKDOWN: f64 = 0.5;
pub const HARD_MARKDOWN: f64 = 0.25;
pub const EASY_MARKDOWN: f64 = 1.0;

// Shop prices
pub const WATER_COST: i32 = 2;
pub const ROPE_COST: i32 = 4;
pub const MACHETE_COST: i32 = 6;
pub const BOOTS_COST: i32 = 8;
pub const SHOVEL_COST: i32 = 8;
pub const HORSE_COST: i32 = 12;
pub const BOAT_COST: i32 = 20;
pub const SWORD_COST: i32 = 0;
