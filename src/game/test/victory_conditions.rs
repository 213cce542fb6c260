//! Victory condition tests

use super::test_utils::*;
use crate::error::GameError;
use crate::game::{Card, Game, Phase, Winner};

/// Creates a game at daybreak with the given final cards.
fn game_at_daybreak(cards: &[Card]) -> Game {
    let names = ["A", "B", "C", "D", "E"];
    let mut game = Game::with_deal(
        &names[..cards.len()],
        cards,
        [Card::Villager, Card::Villager, Card::Villager],
    );
    advance_to(&mut game, Phase::Daybreak);
    game
}

fn winner_after(cards: &[Card], eliminated: &[&str]) -> Winner {
    let mut game = game_at_daybreak(cards);
    let eliminated = eliminated.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    game.eliminate_players(&eliminated).unwrap();
    game.post_game_results().unwrap().winner
}

#[test]
fn village_wins_by_eliminating_a_werewolf() {
    let cards = [Card::Werewolf, Card::Seer, Card::Villager];
    assert_eq!(winner_after(&cards, &["A"]), Winner::Village);
}

#[test]
fn werewolves_win_when_no_werewolf_dies() {
    let cards = [Card::Werewolf, Card::Seer, Card::Villager];
    assert_eq!(winner_after(&cards, &["B"]), Winner::Werewolves);
    assert_eq!(winner_after(&cards, &[]), Winner::Werewolves);
}

#[test]
fn tanner_wins_alone() {
    let cards = [Card::Werewolf, Card::Tanner, Card::Villager];
    assert_eq!(winner_after(&cards, &["B"]), Winner::Tanner);
}

#[test]
fn tanner_and_village_win_together() {
    let cards = [Card::Werewolf, Card::Tanner, Card::Villager];
    assert_eq!(winner_after(&cards, &["A", "B"]), Winner::TannerAndVillage);
}

#[test]
fn village_without_werewolves_must_spare_everyone() {
    let cards = [Card::Villager, Card::Seer, Card::Robber];
    assert_eq!(winner_after(&cards, &[]), Winner::Village);
    assert_eq!(winner_after(&cards, &["C"]), Winner::NoOne);
}

#[test]
fn minion_wins_without_werewolves() {
    let cards = [Card::Minion, Card::Seer, Card::Robber];
    assert_eq!(winner_after(&cards, &["B"]), Winner::Werewolves);
    assert_eq!(winner_after(&cards, &["A"]), Winner::Village);
}

#[test]
fn results_report_dealt_and_final_cards() {
    let mut game = create_full_night_game();
    advance_to(&mut game, Phase::Robber);
    game.robber_steal_card("Alice").unwrap();
    advance_to(&mut game, Phase::Daybreak);
    game.eliminate_players(&["Alice".to_string()]).unwrap();

    let results = game.post_game_results().unwrap();
    // Alice now holds the robber card, so no werewolf died
    assert_eq!(results.winner, Winner::Werewolves);
    let alice = &results.players[0];
    assert_eq!((alice.dealt, alice.card, alice.eliminated), (Card::Werewolf, Card::Robber, true));
    assert_eq!(results.dealt_table, results.table);
}

#[test]
fn results_only_after_elimination() {
    let mut game = create_full_night_game();
    assert!(game.post_game_results().is_err());
    assert_eq!(
        game.eliminate_players(&[]),
        Err(GameError::InvalidAction)
    );
    advance_to(&mut game, Phase::Daybreak);
    game.eliminate_players(&[]).unwrap();
    assert!(game.game_over());
    assert_eq!(
        game.eliminate_players(&[]),
        Err(GameError::InvalidAction)
    );
}

#[test]
fn hunter_is_found_by_current_card() {
    let game = game_at_daybreak(&[Card::Werewolf, Card::Hunter, Card::Villager]);
    assert_eq!(game.hunter_player(), Some("B"));
    let game = game_at_daybreak(&[Card::Werewolf, Card::Seer, Card::Villager]);
    assert_eq!(game.hunter_player(), None);
}
