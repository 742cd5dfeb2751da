//! Game flow integration tests
//!
//! Plays whole games through the public driver:
//! - Win by collecting the three treasures
//! - Loss when a brawl leaves the purse negative
//! - Quitting, invalid input and town transitions
//! - Simulator batches are reproducible per seed

use rand::rngs::mock::StepRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use treasure_hunter::game::{LOSE_MESSAGE, WIN_MESSAGE};
use treasure_hunter::simulator::{run_simulation, SimConfig};
use treasure_hunter::{Action, Game, GameMode, GameStatus, Hunter, MenuChoice, ShopOrder};

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

#[test]
fn test_outfitted_hunter_eventually_wins() {
    let mut rng = create_test_rng();
    let mut game = Game::new("Tess", GameMode::Test, &mut rng);

    let mut last = None;
    for _ in 0..500 {
        let turn = game.process(Action::Hunt, &mut rng);
        if turn.status.is_over() {
            last = Some(turn);
            break;
        }
        let moved = game.process(Action::Move, &mut rng);
        assert_eq!(moved.messages.len(), 2, "easy crossings always succeed");
    }

    let turn = last.expect("game should have been won");
    assert_eq!(turn.status, GameStatus::Won);
    assert_eq!(turn.messages.last().map(String::as_str), Some(WIN_MESSAGE));
    assert!(game.hunter().has_all_treasures());
    assert!(game.towns_visited() >= 3);
}

#[test]
fn test_losing_brawl_with_empty_purse_ends_game() {
    let mut game = Game::with_hunter(
        Hunter::new("Tess", 0),
        GameMode::Normal,
        &mut create_test_rng(),
    );
    let mut rng = StepRng::new(0, 0);

    let turn = game.process(Action::LookForTrouble, &mut rng);
    assert_eq!(turn.status, GameStatus::Lost);
    assert_eq!(turn.messages.last().map(String::as_str), Some(LOSE_MESSAGE));
    assert_eq!(game.hunter().gold(), -1);

    // Nothing happens once the game is over
    let after = game.process(Action::Hunt, &mut rng);
    assert!(after.messages.is_empty());
    assert_eq!(after.status, GameStatus::Lost);
    assert_eq!(game.turns(), 1);
}

#[test]
fn test_exactly_zero_gold_keeps_playing() {
    let mut game = Game::with_hunter(
        Hunter::new("Tess", 1),
        GameMode::Normal,
        &mut create_test_rng(),
    );
    let turn = game.process(Action::LookForTrouble, &mut StepRng::new(0, 0));
    assert_eq!(turn.status, GameStatus::Playing);
    assert!(game.hunter().is_zero());
}

#[test]
fn test_stuck_without_crossing_item() {
    let mut rng = create_test_rng();
    let mut game = Game::new("Tess", GameMode::Normal, &mut rng);
    let turn = game.process(Action::Move, &mut rng);
    assert_eq!(turn.messages.len(), 1);
    assert!(turn.messages[0].starts_with("You can't leave town, Tess."));
    assert_eq!(game.towns_visited(), 1);
    assert_eq!(game.status(), GameStatus::Playing);
}

#[test]
fn test_buy_then_move_on() {
    let mut rng = create_test_rng();
    let mut game = Game::new("Tess", GameMode::Easy, &mut rng);
    let item = game.town().terrain().required_item();

    let turn = game.process(Action::Shop(ShopOrder::buy(item)), &mut rng);
    assert!(turn.messages[0].contains(item), "{:?}", turn.messages);
    assert!(game.hunter().has_item_in_kit(item));

    let moved = game.process(Action::Move, &mut rng);
    assert_eq!(moved.messages.len(), 2);
    assert!(moved.messages[1].starts_with("Welcome to town, Tess."));
    assert_eq!(game.towns_visited(), 2);
    // Easy mode keeps the item
    assert!(game.hunter().has_item_in_kit(item));
}

#[test]
fn test_invalid_choice_does_not_use_a_turn() {
    let mut rng = create_test_rng();
    let mut game = Game::new("Tess", GameMode::Normal, &mut rng);
    let action = Action::from_choice(MenuChoice::parse("z"), None);
    let turn = game.process(action, &mut rng);
    assert_eq!(turn.status, GameStatus::Playing);
    assert_eq!(game.turns(), 0);

    game.process(Action::Explore, &mut rng);
    assert_eq!(game.turns(), 1);
}

#[test]
fn test_exit_quits() {
    let mut rng = create_test_rng();
    let mut game = Game::new("Tess", GameMode::Hard, &mut rng);
    let turn = game.process(Action::from_choice(MenuChoice::parse("x"), None), &mut rng);
    assert_eq!(turn.status, GameStatus::Quit);
    assert!(turn.messages[0].contains("Tess"));
}

#[test]
fn test_simulation_is_reproducible_with_seed() {
    let config = SimConfig {
        num_runs: 30,
        seed: Some(7),
        mode: GameMode::Test,
        max_turns: 300,
        verbosity: 0,
    };
    let first = run_simulation(&config);
    let second = run_simulation(&config);

    assert_eq!(first.num_runs, 30);
    assert_eq!(first.wins + first.losses + first.timeouts, 30);
    assert_eq!(first.wins, second.wins);
    assert_eq!(first.avg_turns, second.avg_turns);
    assert_eq!(first.treasure_distribution, second.treasure_distribution);
    // Outfitted hunters in easy rules lose nothing crossing terrain
    assert!(first.win_rate() > 90.0, "win rate {}", first.win_rate());
}
