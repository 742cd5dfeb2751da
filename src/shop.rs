//! Shops: the trading contract consumed by towns and the standard market.

use crate::constants::{
    BOAT_COST, BOOTS_COST, HORSE_COST, MACHETE_COST, ROPE_COST, SHOVEL_COST, SWORD, SWORD_COST,
    WATER_COST,
};
use crate::hunter::Hunter;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopIntent {
    Buy,
    Sell,
}

impl FromStr for ShopIntent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "b" | "buy" => Ok(ShopIntent::Buy),
            "s" | "sell" => Ok(ShopIntent::Sell),
            other => Err(format!("unknown shop intent: {}", other)),
        }
    }
}

/// A single request at the counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopOrder {
    pub intent: ShopIntent,
    pub item: String,
}

impl ShopOrder {
    pub fn buy(item: impl Into<String>) -> Self {
        Self {
            intent: ShopIntent::Buy,
            item: item.into(),
        }
    }

    pub fn sell(item: impl Into<String>) -> Self {
        Self {
            intent: ShopIntent::Sell,
            item: item.into(),
        }
    }
}

/// Anything a town can send its visitors to for trading.
///
/// A shop performs the hunter's buy/sell itself and reports what happened.
pub trait Shop {
    fn enter(&self, hunter: &mut Hunter, order: &ShopOrder) -> String;

    /// Price list for the given intent, one item per line.
    fn catalog(&self, intent: ShopIntent) -> String;
}

const STOCK: [(&str, i32); 7] = [
    ("water", WATER_COST),
    ("rope", ROPE_COST),
    ("machete", MACHETE_COST),
    ("boots", BOOTS_COST),
    ("shovel", SHOVEL_COST),
    ("horse", HORSE_COST),
    ("boat", BOAT_COST),
];

/// The general store found in every town.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketShop {
    /// Fraction of the price paid back when buying an item from the hunter.
    pub markdown: f64,
    /// Whether swords are stocked (they cost nothing).
    pub sells_swords: bool,
}

impl MarketShop {
    pub fn new(markdown: f64) -> Self {
        Self {
            markdown,
            sells_swords: false,
        }
    }

    pub fn with_swords(mut self) -> Self {
        self.sells_swords = true;
        self
    }

    /// Price of `item`, or `None` if it isn't stocked.
    pub fn price(&self, item: &str) -> Option<i32> {
        if item == SWORD {
            return self.sells_swords.then_some(SWORD_COST);
        }
        STOCK
            .iter()
            .find(|(name, _)| *name == item)
            .map(|(_, cost)| *cost)
    }

    pub fn buy_back_price(&self, item: &str) -> Option<i32> {
        self.price(item)
            .map(|cost| (cost as f64 * self.markdown) as i32)
    }

    fn stocked(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        STOCK
            .iter()
            .copied()
            .chain(self.sells_swords.then_some((SWORD, SWORD_COST)))
    }
}

impl Shop for MarketShop {
    fn enter(&self, hunter: &mut Hunter, order: &ShopOrder) -> String {
        let item = order.item.trim().to_ascii_lowercase();
        debug!(hunter = hunter.name(), item = %item, intent = ?order.intent, "shop order");
        match order.intent {
            ShopIntent::Buy => {
                let Some(cost) = self.price(&item) else {
                    return "We ain't got none of those.".to_string();
                };
                match hunter.buy_item(&item, cost) {
                    Ok(()) => format!("Ye' got yerself a {}. Come again soon.", item),
                    Err(err) => format!("Hmm, no deal: {}.", err),
                }
            }
            ShopIntent::Sell => {
                let Some(price) = self.buy_back_price(&item) else {
                    return "We don't want none of those.".to_string();
                };
                match hunter.sell_item(&item, price) {
                    Ok(()) => format!("Pleasure doin' business with you. Here's {} gold.", price),
                    Err(err) => format!("Stop stringin' me along: {}.", err),
                }
            }
        }
    }

    fn catalog(&self, intent: ShopIntent) -> String {
        self.stocked()
            .map(|(name, cost)| {
                let shown = match intent {
                    ShopIntent::Buy => cost,
                    ShopIntent::Sell => (cost as f64 * self.markdown) as i32,
                };
                format!("{}: {} gold", name, shown)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_parsing() {
        assert_eq!("b".parse::<ShopIntent>(), Ok(ShopIntent::Buy));
        assert_eq!(" SELL ".parse::<ShopIntent>(), Ok(ShopIntent::Sell));
        assert!("x".parse::<ShopIntent>().is_err());
    }

    #[test]
    fn test_buy_through_shop_charges_list_price() {
        let shop = MarketShop::new(0.5);
        let mut hunter = Hunter::new("Tess", 20);
        let msg = shop.enter(&mut hunter, &ShopOrder::buy("Rope"));
        assert!(msg.contains("rope"), "{}", msg);
        assert_eq!(hunter.gold(), 20 - ROPE_COST);
        assert!(hunter.has_item_in_kit("rope"));
    }

    #[test]
    fn test_sell_applies_markdown() {
        let shop = MarketShop::new(0.25);
        let mut hunter = Hunter::new("Tess", 20);
        shop.enter(&mut hunter, &ShopOrder::buy("boat"));
        assert_eq!(hunter.gold(), 0);
        shop.enter(&mut hunter, &ShopOrder::sell("boat"));
        assert_eq!(hunter.gold(), 5);
        assert!(!hunter.has_item_in_kit("boat"));
    }

    #[test]
    fn test_unknown_item_leaves_hunter_alone() {
        let shop = MarketShop::new(0.5);
        let mut hunter = Hunter::new("Tess", 20);
        let msg = shop.enter(&mut hunter, &ShopOrder::buy("cannon"));
        assert_eq!(msg, "We ain't got none of those.");
        assert_eq!(hunter.gold(), 20);
        assert!(hunter.kit().is_empty());
    }

    #[test]
    fn test_swords_only_in_stock_when_enabled() {
        let plain = MarketShop::new(0.5);
        assert_eq!(plain.price("sword"), None);
        assert!(!plain.catalog(ShopIntent::Buy).contains("sword"));

        let armory = MarketShop::new(0.5).with_swords();
        assert_eq!(armory.price("sword"), Some(0));
        assert!(armory.catalog(ShopIntent::Buy).contains("sword: 0 gold"));

        let mut hunter = Hunter::new("Tess", 20);
        armory.enter(&mut hunter, &ShopOrder::buy("sword"));
        assert!(hunter.has_item_in_kit("sword"));
        assert_eq!(hunter.gold(), 20);
    }

    #[test]
    fn test_selling_a_sword_finds_no_buyer() {
        let armory = MarketShop::new(1.0).with_swords();
        let mut hunter = Hunter::new("Tess", 20);
        armory.enter(&mut hunter, &ShopOrder::buy("sword"));
        let msg = armory.enter(&mut hunter, &ShopOrder::sell("sword"));
        assert!(msg.contains("nobody will pay"), "{}", msg);
        assert!(hunter.has_item_in_kit("sword"));
    }

    #[test]
    fn test_catalog_sell_prices() {
        let shop = MarketShop::new(0.5);
        let listing = shop.catalog(ShopIntent::Sell);
        assert!(listing.contains("boat: 10 gold"));
        assert!(listing.contains("water: 1 gold"));
    }
}
