//! Treasure Hunter - turn-based treasure hunting game library
//!
//! Exposes the hunter/town engine, the game driver and the balance simulator
//! for the binaries and for testing.

pub mod build_info;
pub mod constants;
pub mod game;
pub mod hunter;
pub mod inventory;
pub mod logging;
pub mod shop;
pub mod simulator;
pub mod terrain;
pub mod town;
pub mod treasure;

pub use game::{Action, Game, GameMode, GameStatus, MenuChoice, Turn};
pub use hunter::{Hunter, SearchOutcome, TradeError};
pub use inventory::{Inventory, InventoryError};
pub use shop::{MarketShop, Shop, ShopIntent, ShopOrder};
pub use terrain::{Terrain, TERRAINS};
pub use town::{DigOutcome, LeaveOutcome, Town, TroubleOutcome};
pub use treasure::Treasure;
