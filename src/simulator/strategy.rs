//! The fixed strategy the simulator plays with.

use crate::constants::{SHOVEL, SWORD};
use crate::game::{Action, Game};
use crate::shop::ShopOrder;

/// Picks the next action for an autoplayed hunter.
///
/// Priority: search the town once, grab a free sword when stocked, dig, buy a
/// shovel if it still leaves enough for the crossing item, buy the crossing
/// item, then move on. A hunter who can't afford to cross goes brawling.
pub fn choose_action(game: &Game, hunted_here: bool) -> Action {
    let hunter = game.hunter();
    let town = game.town();
    let shop = town.shop();
    let needed = town.terrain().required_item();

    if !hunted_here {
        return Action::Hunt;
    }
    if shop.sells_swords && !hunter.has_item_in_kit(SWORD) {
        return Action::Shop(ShopOrder::buy(SWORD));
    }

    let has_shovel = hunter.has_item_in_kit(SHOVEL);
    if has_shovel && !town.already_dug() {
        return Action::Dig;
    }

    let has_needed = hunter.has_item_in_kit(needed);
    let crossing_cost = if has_needed {
        0
    } else {
        shop.price(needed).unwrap_or(0)
    };
    if !has_shovel {
        if let Some(shovel_cost) = shop.price(SHOVEL) {
            if hunter.gold() >= shovel_cost + crossing_cost {
                return Action::Shop(ShopOrder::buy(SHOVEL));
            }
        }
    }

    if has_needed {
        Action::Move
    } else if hunter.gold() >= crossing_cost {
        Action::Shop(ShopOrder::buy(needed))
    } else {
        Action::LookForTrouble
    }
}
