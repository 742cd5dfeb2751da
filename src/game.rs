//! Turn dispatch for a whole game: difficulty modes, menu choices, town
//! transitions and win/loss detection.
//!
//! The core (`Hunter`, `Town`) never ends the game itself; this is where a
//! negative purse or a full set of treasures becomes a terminal status.

use crate::constants::{
    DEFAULT_MARKDOWN, DEFAULT_TOUGHNESS, EASY_MARKDOWN, EASY_STARTING_GOLD, HARD_MARKDOWN,
    HARD_TOUGHNESS, STARTING_GOLD,
};
use crate::hunter::Hunter;
use crate::shop::{MarketShop, ShopIntent, ShopOrder};
use crate::town::Town;
use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Easy,
    #[default]
    Normal,
    Hard,
    /// Easy rules with a fully outfitted hunter.
    Test,
    /// Normal rules, but the shop stocks free swords.
    Samurai,
}

impl GameMode {
    /// Reads the answer to the difficulty prompt. Anything unrecognised
    /// plays a normal game.
    pub fn from_prompt(answer: &str) -> Self {
        match answer.trim().to_ascii_lowercase().as_str() {
            "e" | "easy" => GameMode::Easy,
            "h" | "hard" => GameMode::Hard,
            "test" => GameMode::Test,
            "s" | "samurai" => GameMode::Samurai,
            _ => GameMode::Normal,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameMode::Easy => "Easy",
            GameMode::Normal => "Normal",
            GameMode::Hard => "Hard",
            GameMode::Test => "Test",
            GameMode::Samurai => "Samurai",
        }
    }

    pub fn starting_hunter(&self, name: &str) -> Hunter {
        match self {
            GameMode::Easy => Hunter::new(name, EASY_STARTING_GOLD),
            GameMode::Test => Hunter::outfitted(name),
            GameMode::Normal | GameMode::Hard | GameMode::Samurai => {
                Hunter::new(name, STARTING_GOLD)
            }
        }
    }

    pub fn markdown(&self) -> f64 {
        match self {
            GameMode::Hard => HARD_MARKDOWN,
            GameMode::Easy | GameMode::Test => EASY_MARKDOWN,
            GameMode::Normal | GameMode::Samurai => DEFAULT_MARKDOWN,
        }
    }

    pub fn toughness(&self) -> f64 {
        match self {
            GameMode::Hard => HARD_TOUGHNESS,
            _ => DEFAULT_TOUGHNESS,
        }
    }

    /// Easy rules: fewer brawls and crossing items never break.
    pub fn is_easy(&self) -> bool {
        matches!(self, GameMode::Easy | GameMode::Test)
    }

    pub fn shop(&self) -> MarketShop {
        let shop = MarketShop::new(self.markdown());
        match self {
            GameMode::Samurai => shop.with_swords(),
            _ => shop,
        }
    }
}

/// A letter picked from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Buy,
    Sell,
    Explore,
    Dig,
    Move,
    LookForTrouble,
    Hunt,
    Exit,
    Invalid,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "b" => MenuChoice::Buy,
            "s" => MenuChoice::Sell,
            "e" => MenuChoice::Explore,
            "d" => MenuChoice::Dig,
            "m" => MenuChoice::Move,
            "l" => MenuChoice::LookForTrouble,
            "h" => MenuChoice::Hunt,
            "x" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }

    /// Shop intent for the buy/sell choices.
    pub fn shop_intent(&self) -> Option<ShopIntent> {
        match self {
            MenuChoice::Buy => Some(ShopIntent::Buy),
            MenuChoice::Sell => Some(ShopIntent::Sell),
            _ => None,
        }
    }
}

pub const MENU: [&str; 8] = [
    "(B)uy something at the shop.",
    "(S)ell something at the shop.",
    "(E)xplore surrounding terrain.",
    "(D)ig for gold.",
    "(M)ove on to a different town.",
    "(L)ook for trouble!",
    "(H)unt for treasure.",
    "Give up the hunt and e(X)it.",
];

/// One fully specified action for a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Shop(ShopOrder),
    Explore,
    Dig,
    Move,
    LookForTrouble,
    Hunt,
    Exit,
    Invalid,
}

impl Action {
    /// Converts a menu choice; buy/sell need the item name from the caller.
    pub fn from_choice(choice: MenuChoice, item: Option<&str>) -> Self {
        match (choice, item) {
            (MenuChoice::Buy, Some(item)) => Action::Shop(ShopOrder::buy(item)),
            (MenuChoice::Sell, Some(item)) => Action::Shop(ShopOrder::sell(item)),
            (MenuChoice::Buy | MenuChoice::Sell, None) => Action::Invalid,
            (MenuChoice::Explore, _) => Action::Explore,
            (MenuChoice::Dig, _) => Action::Dig,
            (MenuChoice::Move, _) => Action::Move,
            (MenuChoice::LookForTrouble, _) => Action::LookForTrouble,
            (MenuChoice::Hunt, _) => Action::Hunt,
            (MenuChoice::Exit, _) => Action::Exit,
            (MenuChoice::Invalid, _) => Action::Invalid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
    Quit,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// What a single turn produced, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub messages: Vec<String>,
    pub status: GameStatus,
}

pub const WIN_MESSAGE: &str =
    "Congratulations, you have found the last of the three treasures, you win!";
pub const LOSE_MESSAGE: &str = "Looks like your journey has come to an end.\nBetter luck next time.";

#[derive(Debug, Clone)]
pub struct Game {
    hunter: Hunter,
    town: Town,
    mode: GameMode,
    status: GameStatus,
    turns: u32,
    towns_visited: u32,
}

impl Game {
    pub fn new<R: Rng>(name: &str, mode: GameMode, rng: &mut R) -> Self {
        Self::with_hunter(mode.starting_hunter(name), mode, rng)
    }

    /// Starts a game with an already built hunter.
    pub fn with_hunter<R: Rng>(hunter: Hunter, mode: GameMode, rng: &mut R) -> Self {
        let mut town = Town::new(mode.shop(), mode.toughness(), rng);
        town.hunter_arrives(&hunter);
        info!(hunter = hunter.name(), mode = mode.name(), "game started");
        Self {
            hunter,
            town,
            mode,
            status: GameStatus::Playing,
            turns: 0,
            towns_visited: 1,
        }
    }

    pub fn hunter(&self) -> &Hunter {
        &self.hunter
    }

    pub fn town(&self) -> &Town {
        &self.town
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn towns_visited(&self) -> u32 {
        self.towns_visited
    }

    /// Replaces the current town with a freshly generated one.
    fn enter_town<R: Rng>(&mut self, rng: &mut R) -> String {
        self.town = Town::new(self.mode.shop(), self.mode.toughness(), rng);
        self.towns_visited += 1;
        self.town.hunter_arrives(&self.hunter)
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        info!(
            hunter = self.hunter.name(),
            ?status,
            turns = self.turns,
            towns = self.towns_visited,
            gold = self.hunter.gold(),
            "game over"
        );
    }

    /// Plays one turn. Turns after the game has ended do nothing.
    pub fn process<R: Rng>(&mut self, action: Action, rng: &mut R) -> Turn {
        if self.status.is_over() {
            return Turn {
                messages: Vec::new(),
                status: self.status,
            };
        }
        if action != Action::Invalid {
            self.turns += 1;
        }

        let easy = self.mode.is_easy();
        let mut messages = Vec::new();
        match action {
            Action::Shop(order) => {
                messages.push(self.town.enter_shop(&mut self.hunter, &order));
            }
            Action::Explore => messages.push(self.town.terrain().info_string()),
            Action::Dig => {
                messages.push(self.town.dig_gold(&mut self.hunter, rng).message());
            }
            Action::Move => {
                let outcome = self.town.leave_town(&mut self.hunter, easy, rng);
                messages.push(outcome.message());
                if outcome.left() {
                    messages.push(self.enter_town(rng));
                }
            }
            Action::LookForTrouble => {
                let outcome = self.town.look_for_trouble(&mut self.hunter, easy, rng);
                messages.push(outcome.message());
                if self.hunter.gold() < 0 {
                    messages.push(LOSE_MESSAGE.to_string());
                    self.finish(GameStatus::Lost);
                }
            }
            Action::Hunt => {
                let outcome = self.town.hunt_treasure(&mut self.hunter);
                messages.push(outcome.message());
                if outcome.is_win() {
                    messages.push(WIN_MESSAGE.to_string());
                    self.finish(GameStatus::Won);
                }
            }
            Action::Exit => {
                messages.push(format!("Fare thee well, {}!", self.hunter.name()));
                self.finish(GameStatus::Quit);
            }
            Action::Invalid => {
                messages.push("Yikes! That's an invalid option! Try again.".to_string());
            }
        }

        Turn {
            messages,
            status: self.status,
        }
    }
}
