//! The treasure hunter: gold, equipment kit and treasure chest.

use crate::constants::{
    CHEST_CAPACITY, KIT_CAPACITY, OUTFITTED_KIT, OUTFITTED_STARTING_GOLD, SWORD,
};
use crate::inventory::{Inventory, InventoryError};
use crate::shop::Shop;
use crate::town::Town;
use crate::treasure::Treasure;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

pub type Kit = Inventory<String, KIT_CAPACITY>;
pub type Chest = Inventory<Treasure, CHEST_CAPACITY>;

/// Why a purchase or sale was refused. A refused trade never changes state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TradeError {
    #[error("{0} can't be had for nothing")]
    NotForSale(String),
    #[error("costs {cost} gold but you only have {gold}")]
    InsufficientGold { cost: i32, gold: i32 },
    #[error("you already have a {0}")]
    AlreadyOwned(String),
    #[error("you don't have a {0}")]
    NotOwned(String),
    #[error("nobody will pay for your {0}")]
    NoBuyer(String),
    #[error("your kit is full ({capacity} items)")]
    KitFull { capacity: usize },
}

impl From<InventoryError> for TradeError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::Full { capacity } => TradeError::KitFull { capacity },
            InventoryError::Duplicate(item) => TradeError::AlreadyOwned(item),
        }
    }
}

/// Result of searching a town for its treasure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Found dust; nothing stored and the town stays unsearched.
    Dust,
    AlreadySearched,
    /// Found a treasure already in the chest.
    Duplicate(Treasure),
    /// Stored a new treasure; the set is not complete yet.
    Added(Treasure),
    /// Stored the last of the three winning treasures.
    CollectedAll(Treasure),
    /// No room left in the chest for a new treasure.
    ChestFull(Treasure),
}

impl SearchOutcome {
    pub fn is_win(&self) -> bool {
        matches!(self, SearchOutcome::CollectedAll(_))
    }

    pub fn message(&self) -> String {
        match self {
            SearchOutcome::Dust => "You found dust.\nIt's not added to your chest.".to_string(),
            SearchOutcome::AlreadySearched => "You already searched this town.".to_string(),
            SearchOutcome::Duplicate(t) => {
                format!("You found a {}!\nYou already have this in your chest.", t)
            }
            SearchOutcome::Added(t) => format!("You found a {}!\nIt's added to your chest.", t),
            SearchOutcome::CollectedAll(t) => format!(
                "You found a {}!\nThat's the last of the three treasures.",
                t
            ),
            SearchOutcome::ChestFull(t) => {
                format!("You found a {}!\nBut your chest has no room for it.", t)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hunter {
    name: String,
    gold: i32,
    kit: Kit,
    chest: Chest,
}

impl Hunter {
    /// A hunter with an empty kit and chest.
    pub fn new(name: impl Into<String>, starting_gold: i32) -> Self {
        Self {
            name: name.into(),
            gold: starting_gold,
            kit: Kit::new(),
            chest: Chest::new(),
        }
    }

    /// A hunter who starts with 100 gold and every crossing item plus a shovel.
    pub fn outfitted(name: impl Into<String>) -> Self {
        let mut hunter = Self::new(name, OUTFITTED_STARTING_GOLD);
        match Kit::from_items(OUTFITTED_KIT.map(String::from)) {
            Ok(kit) => hunter.kit = kit,
            Err(err) => warn!(hunter = %hunter.name, %err, "outfitted kit rejected"),
        }
        hunter
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gold(&self) -> i32 {
        self.gold
    }

    pub fn kit(&self) -> &Kit {
        &self.kit
    }

    pub fn chest(&self) -> &Chest {
        &self.chest
    }

    /// Adds `delta` to the purse. Gold may go negative; it saturates at the
    /// `i32` bounds.
    pub fn change_gold(&mut self, delta: i32) {
        self.gold = self.gold.saturating_add(delta);
    }

    /// True only when gold is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.gold == 0
    }

    pub fn has_item_in_kit(&self, item: &str) -> bool {
        self.kit.contains(item)
    }

    pub fn has_item_in_chest(&self, treasure: Treasure) -> bool {
        self.chest.contains(&treasure)
    }

    pub fn remove_item_from_kit(&mut self, item: &str) {
        if self.kit.remove(item).is_some() {
            debug!(hunter = %self.name, item, "item removed from kit");
        }
    }

    /// Buys `item` for `cost`. Only a sword may cost nothing, and once a sword
    /// is owned every later purchase is free.
    pub fn buy_item(&mut self, item: &str, cost: i32) -> Result<(), TradeError> {
        if cost == 0 && item != SWORD {
            return Err(TradeError::NotForSale(item.to_string()));
        }
        if self.gold < cost {
            return Err(TradeError::InsufficientGold {
                cost,
                gold: self.gold,
            });
        }
        if self.has_item_in_kit(item) {
            return Err(TradeError::AlreadyOwned(item.to_string()));
        }
        if self.kit.is_full() {
            return Err(TradeError::KitFull {
                capacity: self.kit.capacity(),
            });
        }

        let paid = if self.has_item_in_kit(SWORD) { 0 } else { cost };
        self.kit.insert(item.to_string())?;
        self.gold = self.gold.saturating_sub(paid);
        debug!(hunter = %self.name, item, paid, gold = self.gold, "bought item");
        Ok(())
    }

    /// Sells `item` back to a shop for `buy_back_price`.
    pub fn sell_item(&mut self, item: &str, buy_back_price: i32) -> Result<(), TradeError> {
        if buy_back_price <= 0 {
            return Err(TradeError::NoBuyer(item.to_string()));
        }
        if self.kit.remove(item).is_none() {
            return Err(TradeError::NotOwned(item.to_string()));
        }
        self.gold = self.gold.saturating_add(buy_back_price);
        debug!(hunter = %self.name, item, buy_back_price, gold = self.gold, "sold item");
        Ok(())
    }

    /// Searches `town` for `treasure`.
    ///
    /// Dust never counts as a search. Any other find marks the town searched,
    /// even when the treasure turns out to be a duplicate.
    pub fn search<S: Shop>(&mut self, treasure: Treasure, town: &mut Town<S>) -> SearchOutcome {
        if !treasure.is_valuable() {
            return SearchOutcome::Dust;
        }
        if town.searched() {
            return SearchOutcome::AlreadySearched;
        }
        town.set_searched();

        if self.has_item_in_chest(treasure) {
            return SearchOutcome::Duplicate(treasure);
        }
        if let Err(err) = self.chest.insert(treasure) {
            warn!(hunter = %self.name, %treasure, %err, "treasure not stored");
            return SearchOutcome::ChestFull(treasure);
        }
        debug!(hunter = %self.name, %treasure, held = self.chest.len(), "treasure stored");

        if self.has_all_treasures() {
            SearchOutcome::CollectedAll(treasure)
        } else {
            SearchOutcome::Added(treasure)
        }
    }

    pub fn has_all_treasures(&self) -> bool {
        Treasure::WINNING_SET
            .iter()
            .all(|t| self.has_item_in_chest(*t))
    }

    pub fn info_string(&self) -> String {
        let mut s = format!("{} has {} gold", self.name, self.gold);
        if !self.kit.is_empty() {
            s.push_str(&format!("\nKit: {}", self.kit));
        }
        s.push_str("\nTreasure found: ");
        if self.chest.is_empty() {
            s.push_str("none");
        } else {
            s.push_str(&self.chest.to_string());
        }
        s
    }
}
