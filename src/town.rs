//! Towns: the per-visit event engine.
//!
//! A town owns its terrain, its hidden treasure and the once-per-visit flags.
//! Every random event (brawls, digging, crossing breakage) is rolled here
//! against the visiting hunter, using the caller's RNG.

use crate::constants::{
    BRAWL_MAX_GOLD, DIG_MAX_GOLD, DIG_SUCCESS_THRESHOLD, ITEM_BREAK_CHANCE,
    NO_TROUBLE_CHANCE_EASY, NO_TROUBLE_CHANCE_NORMAL, NO_TROUBLE_CHANCE_TOUGH, SHOVEL, SWORD,
};
use crate::hunter::{Hunter, SearchOutcome};
use crate::shop::{MarketShop, Shop, ShopOrder};
use crate::terrain::Terrain;
use crate::treasure::Treasure;
use rand::Rng;
use tracing::debug;

/// Result of trying to leave town across its terrain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaveOutcome {
    Crossed {
        terrain: &'static str,
        item: &'static str,
        /// The crossing item broke and was removed from the kit.
        broke: bool,
    },
    Stuck {
        hunter: String,
        missing: &'static str,
    },
}

impl LeaveOutcome {
    pub fn left(&self) -> bool {
        matches!(self, LeaveOutcome::Crossed { .. })
    }

    pub fn message(&self) -> String {
        match self {
            LeaveOutcome::Crossed {
                terrain,
                item,
                broke,
            } => {
                let mut msg = format!("You used your {} to cross the {}.", item, terrain);
                if *broke {
                    msg.push_str(&format!("\nUnfortunately, you lost your {}.", item));
                }
                msg
            }
            LeaveOutcome::Stuck { hunter, missing } => format!(
                "You can't leave town, {}. You don't have a {}.",
                hunter, missing
            ),
        }
    }
}

/// Result of looking for a brawl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TroubleOutcome {
    NoTrouble,
    /// Won the brawl and took this much gold.
    Won(i32),
    /// The brawler saw the hunter's sword and backed off.
    Yielded,
    /// Lost the brawl and paid this much gold.
    Lost(i32),
}

impl TroubleOutcome {
    pub fn gold_change(&self) -> i32 {
        match self {
            TroubleOutcome::Won(amount) => *amount,
            TroubleOutcome::Lost(amount) => -amount,
            TroubleOutcome::NoTrouble | TroubleOutcome::Yielded => 0,
        }
    }

    pub fn message(&self) -> String {
        const BRAWL: &str = "You want trouble, stranger!  You got it!\nOof! Umph! Ow!\n";
        match self {
            TroubleOutcome::NoTrouble => "You couldn't find any trouble.".to_string(),
            TroubleOutcome::Won(amount) => format!(
                "{BRAWL}Okay, stranger! You proved yer mettle. Here, take my gold.\nYou won the brawl and receive {amount} gold."
            ),
            TroubleOutcome::Yielded => format!(
                "{BRAWL}The brawler spots your sword, thinks better of it and slinks off."
            ),
            TroubleOutcome::Lost(amount) => format!(
                "{BRAWL}That'll teach you to go lookin' fer trouble in MY town! Now pay up!\nYou lost the brawl and pay {amount} gold."
            ),
        }
    }
}

/// Result of digging for gold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigOutcome {
    AlreadyDug,
    NoShovel,
    Found(i32),
    Dirt,
}

impl DigOutcome {
    pub fn message(&self) -> String {
        match self {
            DigOutcome::AlreadyDug => "You already dug in this town.".to_string(),
            DigOutcome::NoShovel => "You cannot dig without a shovel.".to_string(),
            DigOutcome::Found(amount) => format!("You found {} gold!", amount),
            DigOutcome::Dirt => "You dug but only found dirt.".to_string(),
        }
    }
}

/// Inclusive draw in `1..=max`, from a single uniform roll.
fn roll_gold<R: Rng>(rng: &mut R, max: i32) -> i32 {
    ((rng.gen::<f64>() * max as f64) as i32).min(max - 1) + 1
}

#[derive(Debug, Clone)]
pub struct Town<S = MarketShop> {
    shop: S,
    terrain: Terrain,
    treasure: Treasure,
    tough: bool,
    already_dug: bool,
    searched: bool,
    visitor: Option<String>,
    latest_news: String,
}

impl<S: Shop> Town<S> {
    /// Generates a town: uniform terrain, uniform treasure, and a tough
    /// classification with probability `toughness`.
    pub fn new<R: Rng>(shop: S, toughness: f64, rng: &mut R) -> Self {
        let terrain = Terrain::random(rng);
        let treasure = Treasure::random(rng);
        let tough = rng.gen::<f64>() < toughness;
        debug!(
            terrain = terrain.display_name(),
            %treasure,
            tough,
            "town generated"
        );
        Self::with_layout(shop, terrain, treasure, tough)
    }

    /// A town with a fixed layout instead of a random one.
    pub fn with_layout(shop: S, terrain: Terrain, treasure: Treasure, tough: bool) -> Self {
        Self {
            shop,
            terrain,
            treasure,
            tough,
            already_dug: false,
            searched: false,
            visitor: None,
            latest_news: String::new(),
        }
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn treasure(&self) -> Treasure {
        self.treasure
    }

    pub fn shop(&self) -> &S {
        &self.shop
    }

    pub fn is_tough(&self) -> bool {
        self.tough
    }

    pub fn searched(&self) -> bool {
        self.searched
    }

    pub fn set_searched(&mut self) {
        self.searched = true;
    }

    pub fn already_dug(&self) -> bool {
        self.already_dug
    }

    /// Name of the hunter currently in town, if one has arrived.
    pub fn visitor(&self) -> Option<&str> {
        self.visitor.as_deref()
    }

    /// Narrative from the most recent action taken in this town.
    pub fn latest_news(&self) -> &str {
        &self.latest_news
    }

    pub fn info_string(&self) -> String {
        format!(
            "This nice little town is surrounded by {}.",
            self.terrain.display_name()
        )
    }

    pub fn hunter_arrives(&mut self, hunter: &Hunter) -> String {
        self.visitor = Some(hunter.name().to_string());
        let tone = if self.tough {
            "It's pretty rough around here, so watch yourself."
        } else {
            "We're just a sleepy little town with mild mannered folk."
        };
        self.latest_news = format!("Welcome to town, {}.\n{}", hunter.name(), tone);
        self.latest_news.clone()
    }

    /// Tries to cross the surrounding terrain. Outside easy mode the crossing
    /// item breaks half the time.
    pub fn leave_town<R: Rng>(
        &mut self,
        hunter: &mut Hunter,
        easy: bool,
        rng: &mut R,
    ) -> LeaveOutcome {
        let item = self.terrain.required_item();
        let outcome = if self.terrain.can_cross(hunter.kit()) {
            let broke = !easy && rng.gen::<f64>() < ITEM_BREAK_CHANCE;
            if broke {
                hunter.remove_item_from_kit(item);
            }
            LeaveOutcome::Crossed {
                terrain: self.terrain.display_name(),
                item,
                broke,
            }
        } else {
            LeaveOutcome::Stuck {
                hunter: self.visitor.clone().unwrap_or_else(|| hunter.name().to_string()),
                missing: item,
            }
        };
        debug!(hunter = hunter.name(), ?outcome, "leave town");
        self.latest_news = outcome.message();
        outcome
    }

    pub fn enter_shop(&mut self, hunter: &mut Hunter, order: &ShopOrder) -> String {
        self.latest_news = self.shop.enter(hunter, order);
        self.latest_news.clone()
    }

    /// Picks a fight. The no-trouble threshold decides both whether a brawl
    /// happens and whether the hunter wins it.
    pub fn look_for_trouble<R: Rng>(
        &mut self,
        hunter: &mut Hunter,
        easy: bool,
        rng: &mut R,
    ) -> TroubleOutcome {
        let no_trouble_chance = if self.tough {
            NO_TROUBLE_CHANCE_TOUGH
        } else if easy {
            NO_TROUBLE_CHANCE_EASY
        } else {
            NO_TROUBLE_CHANCE_NORMAL
        };

        let outcome = if rng.gen::<f64>() > no_trouble_chance {
            TroubleOutcome::NoTrouble
        } else {
            let amount = roll_gold(rng, BRAWL_MAX_GOLD);
            if rng.gen::<f64>() > no_trouble_chance {
                TroubleOutcome::Won(amount)
            } else if hunter.has_item_in_kit(SWORD) {
                TroubleOutcome::Yielded
            } else {
                TroubleOutcome::Lost(amount)
            }
        };

        hunter.change_gold(outcome.gold_change());
        debug!(hunter = hunter.name(), ?outcome, gold = hunter.gold(), "brawl");
        self.latest_news = outcome.message();
        outcome
    }

    /// Digs once per town. Lacking a shovel doesn't use up the dig.
    pub fn dig_gold<R: Rng>(&mut self, hunter: &mut Hunter, rng: &mut R) -> DigOutcome {
        let outcome = if self.already_dug {
            DigOutcome::AlreadyDug
        } else {
            let chance = rng.gen::<f64>();
            if !hunter.has_item_in_kit(SHOVEL) {
                DigOutcome::NoShovel
            } else if chance > DIG_SUCCESS_THRESHOLD {
                self.already_dug = true;
                let amount = roll_gold(rng, DIG_MAX_GOLD);
                hunter.change_gold(amount);
                DigOutcome::Found(amount)
            } else {
                self.already_dug = true;
                DigOutcome::Dirt
            }
        };
        debug!(hunter = hunter.name(), ?outcome, "dig");
        self.latest_news = outcome.message();
        outcome
    }

    /// Searches this town for its treasure on the hunter's behalf.
    pub fn hunt_treasure(&mut self, hunter: &mut Hunter) -> SearchOutcome {
        let treasure = self.treasure;
        let outcome = hunter.search(treasure, self);
        debug!(hunter = hunter.name(), ?outcome, "treasure hunt");
        self.latest_news = outcome.message();
        outcome
    }
}
