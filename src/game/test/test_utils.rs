//! Test utilities and helper functions for game testing

use crate::game::{Card, Game, GameOptions, Phase};

/// Makes `count` distinct player names.
pub fn player_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("Player{}", i)).collect()
}

/// Creates a test game with the specified number of players and options
pub fn create_test_game(num_players: usize, opts: GameOptions, seed: u64) -> Game {
    Game::new(opts, &player_names(num_players), seed).unwrap()
}

/// Creates a five player game where every special night role is held by a player:
///
/// | Player  | Card         |
/// |---------|--------------|
/// | Alice   | Werewolf     |
/// | Bob     | Seer         |
/// | Carol   | Robber       |
/// | Dave    | Troublemaker |
/// | Eve     | Insomniac    |
///
/// The table holds Werewolf, Minion, Villager.
pub fn create_full_night_game() -> Game {
    Game::with_deal(
        &["Alice", "Bob", "Carol", "Dave", "Eve"],
        &[Card::Werewolf, Card::Seer, Card::Robber, Card::Troublemaker, Card::Insomniac],
        [Card::Werewolf, Card::Minion, Card::Villager],
    )
}

/// Advances the game until it reaches `phase`.
pub fn advance_to(game: &mut Game, phase: Phase) {
    while game.current_phase() != Some(phase) {
        game.advance_phase().unwrap();
    }
}

/// The card a named player holds now.
pub fn card_of(game: &Game, name: &str) -> Card {
    game.player_cards()
        .into_iter()
        .find(|(n, _)| *n == name)
        .map(|(_, card)| card)
        .unwrap()
}
