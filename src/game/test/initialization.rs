//! Game creation, deck construction and dealing

use super::test_utils::*;
use crate::error::GameError;
use crate::game::{Card, Game, GameOptions, TABLE_CARDS};

#[test]
fn can_create_game() {
    let game = create_test_game(5, GameOptions::default(), 0);
    assert_eq!(game.num_players(), 5);
    assert_eq!(game.current_phase(), None);
    assert!(!game.game_over());
}

#[test]
fn players_keep_turn_order() {
    let names = player_names(6);
    let game = Game::new(GameOptions::default(), &names, 7).unwrap();
    assert!(game.player_names().eq(names.iter().map(|s| s.as_str())));
}

#[test]
fn default_deck_composition() {
    let deck = GameOptions::default().deck(3).unwrap();
    assert_eq!(deck.len(), 3 + TABLE_CARDS);
    assert_eq!(deck.iter().filter(|c| **c == Card::Werewolf).count(), 2);
    assert!(deck.contains(&Card::Seer));
    assert!(deck.contains(&Card::Robber));
    assert!(deck.contains(&Card::Troublemaker));
    assert_eq!(deck.iter().filter(|c| **c == Card::Villager).count(), 1);
}

#[test]
fn optional_roles_are_included() {
    let opts = GameOptions {
        werewolves: 1,
        seer: false,
        minion: true,
        insomniac: true,
        hunter: true,
        tanner: true,
        ..GameOptions::default()
    };
    let deck = opts.deck(7).unwrap();
    assert_eq!(deck.len(), 10);
    for card in [Card::Minion, Card::Insomniac, Card::Hunter, Card::Tanner, Card::Robber] {
        assert!(deck.contains(&card), "deck should contain {}", card);
    }
    assert!(!deck.contains(&Card::Seer));
}

#[test]
fn rejects_invalid_player_counts() {
    let opts = GameOptions::default();
    for count in 0..3 {
        let result = Game::new(opts, &player_names(count), 0);
        assert_eq!(result.unwrap_err(), GameError::TooFewPlayers);
    }
    for count in 11..14 {
        let result = Game::new(opts, &player_names(count), 0);
        assert_eq!(result.unwrap_err(), GameError::TooManyPlayers);
    }
    for count in 3..=10 {
        assert!(Game::new(opts, &player_names(count), 0).is_ok());
    }
}

#[test]
fn rejects_overfull_deck() {
    let opts = GameOptions {
        minion: true,
        insomniac: true,
        ..GameOptions::default()
    };
    // 2 werewolves + 5 roles do not fit in 3 players + 3 table cards
    assert_eq!(opts.deck(3).unwrap_err(), GameError::InvalidGameOptions);
    assert!(opts.deck(4).is_ok());
}

#[test]
fn rejects_werewolf_count_out_of_range() {
    for werewolves in [0, 5] {
        let opts = GameOptions {
            werewolves,
            ..GameOptions::default()
        };
        assert_eq!(opts.deck(10).unwrap_err(), GameError::InvalidGameOptions);
    }
}

#[test]
fn rejects_duplicate_and_empty_names() {
    let names = ["Ann", "Ben", "Ann"].map(String::from);
    assert_eq!(
        Game::new(GameOptions::default(), &names, 0).unwrap_err(),
        GameError::DuplicatePlayer("Ann".to_string())
    );

    let names = ["Ann", " ", "Cat"].map(String::from);
    assert_eq!(
        Game::new(GameOptions::default(), &names, 0).unwrap_err(),
        GameError::InvalidPlayerName
    );
}

#[test]
fn deal_uses_whole_deck() {
    let opts = GameOptions {
        hunter: true,
        ..GameOptions::default()
    };
    for seed in 0..20 {
        let game = create_test_game(5, opts, seed);
        let mut expected = opts.deck(5).unwrap();
        expected.sort();
        assert_eq!(game.all_cards(), expected);
        assert_eq!(game.player_cards().len(), 5);
    }
}

#[test]
fn same_seed_same_deal() {
    let a = create_test_game(8, GameOptions::default(), 99);
    let b = create_test_game(8, GameOptions::default(), 99);
    assert_eq!(a.player_cards(), b.player_cards());
    assert_eq!(a.table_cards(), b.table_cards());
}
