pub use self::card::Card;
use self::deck::Deck;
pub use self::options::{GameOptions, MAX_PLAYERS, MAX_WEREWOLVES, MIN_PLAYERS, TABLE_CARDS};
pub use self::phase::Phase;
use self::player::Player;
pub use self::results::{GameResults, Winner};
use self::results::PlayerResult;
pub use self::votes::Votes;
use crate::error::GameError;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

mod card;
mod deck;
mod options;
mod phase;
mod player;
mod results;
mod votes;

/// A game of One Night Werewolf.
///
/// The game owns the cards; everything outside it sees only the snapshots its queries return.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Game {
    players: Vec<Player>,
    dealt_table: [Card; TABLE_CARDS],
    table: [Card; TABLE_CARDS],
    /// `None` until the first phase of the night begins.
    phase: Option<Phase>,
    /// Set once the daybreak vote has been applied.
    resolved: bool,
}

impl Game {
    /// Creates a new game, seats the players in turn order and deals the cards.
    pub fn new(opts: GameOptions, player_names: &[String], seed: u64) -> Result<Self, GameError> {
        for (idx, name) in player_names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(GameError::InvalidPlayerName);
            }
            if player_names[..idx].contains(name) {
                return Err(GameError::DuplicatePlayer(name.clone()));
            }
        }

        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new(&opts, player_names.len())?;
        deck.shuffle(&mut rng);
        log::debug!("dealing {} cards", deck.count());
        let deal = deck.deal()?;

        let players = player_names
            .iter()
            .zip(deal.players)
            .map(|(name, card)| Player::new(name.clone(), card))
            .collect();

        Ok(Game {
            players,
            dealt_table: deal.table,
            table: deal.table,
            phase: None,
            resolved: false,
        })
    }

    /// Gets the player names, in turn order.
    pub fn player_names(&self) -> impl Iterator<Item = &'_ str> {
        self.players.iter().map(|p| &p.name[..])
    }

    /// Gets the number of players in the game.
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// Finds a player with the given name.
    pub fn find_player(&self, name: &str) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| p.name == name)
            .ok_or(GameError::PlayerNotFound)
    }

    /// Moves the night on by one phase and returns the new phase.
    pub fn advance_phase(&mut self) -> Result<Phase, GameError> {
        let next = match self.phase {
            None => Phase::FIRST,
            Some(phase) => phase.next().ok_or(GameError::InvalidAction)?,
        };
        self.phase = Some(next);
        Ok(next)
    }

    /// The current phase, or `None` before the night begins.
    pub fn current_phase(&self) -> Option<Phase> {
        self.phase
    }

    /// Returns true if the role that acts during `phase` is anywhere in the deck.
    pub fn is_role_active(&self, phase: Phase) -> bool {
        phase
            .role()
            .is_some_and(|role| self.cards().any(|card| card == role))
    }

    /// Returns true if the player currently holds the role that acts during the current phase.
    ///
    /// Cards move during the night, so a robber who took the insomniac card wakes as the insomniac.
    pub fn is_player_active(&self, name: &str) -> Result<bool, GameError> {
        let player = &self.players[self.find_player(name)?];
        let role = self.phase.and_then(Phase::role);
        Ok(role == Some(player.card))
    }

    /// The players holding a werewolf card, in turn order.
    pub fn identify_werewolves(&self) -> Vec<String> {
        self.players
            .iter()
            .filter(|p| p.is_werewolf())
            .map(|p| p.name.clone())
            .collect()
    }

    /// The seer looks at another player's card.
    pub fn seer_view_player_card(&self, name: &str) -> Result<Card, GameError> {
        let seer = self.acting_player(Phase::Seer)?;
        let other = self.find_player(name)?;
        if other == seer {
            return Err(GameError::InvalidPlayerChoice);
        }
        Ok(self.players[other].card)
    }

    /// The seer looks at two distinct table cards, given as zero-based positions.
    pub fn seer_view_table_cards(&self, a: usize, b: usize) -> Result<[Card; 2], GameError> {
        self.acting_player(Phase::Seer)?;
        if a == b || a >= TABLE_CARDS || b >= TABLE_CARDS {
            return Err(GameError::InvalidCard);
        }
        Ok([self.table[a], self.table[b]])
    }

    /// The robber exchanges their card with another player's, and returns their new card.
    pub fn robber_steal_card(&mut self, name: &str) -> Result<Card, GameError> {
        let robber = self.acting_player(Phase::Robber)?;
        let other = self.find_player(name)?;
        if other == robber {
            return Err(GameError::InvalidPlayerChoice);
        }
        self.swap_cards(robber, other);
        Ok(self.players[robber].card)
    }

    /// The troublemaker exchanges the cards of two other players.
    pub fn troublemaker_switch_cards(&mut self, a: &str, b: &str) -> Result<(), GameError> {
        let troublemaker = self.acting_player(Phase::Troublemaker)?;
        let (a, b) = (self.find_player(a)?, self.find_player(b)?);
        if a == b || a == troublemaker || b == troublemaker {
            return Err(GameError::InvalidPlayerChoice);
        }
        self.swap_cards(a, b);
        Ok(())
    }

    /// The insomniac looks at the card they hold now.
    pub fn insomniac_view_card(&self) -> Result<Card, GameError> {
        let insomniac = self.acting_player(Phase::Insomniac)?;
        Ok(self.players[insomniac].card)
    }

    /// The player holding the hunter card at daybreak, if any.
    pub fn hunter_player(&self) -> Option<&str> {
        self.players
            .iter()
            .find(|p| p.card == Card::Hunter)
            .map(|p| &p.name[..])
    }

    /// Applies the outcome of the daybreak vote.
    pub fn eliminate_players(&mut self, names: &[String]) -> Result<(), GameError> {
        if self.phase != Some(Phase::Daybreak) || self.resolved {
            return Err(GameError::InvalidAction);
        }
        let indices = names
            .iter()
            .map(|name| self.find_player(name))
            .collect::<Result<Vec<_>, _>>()?;
        for idx in indices {
            self.players[idx].eliminated = true;
        }
        self.resolved = true;
        Ok(())
    }

    /// Returns true once the vote has been applied.
    pub fn game_over(&self) -> bool {
        self.resolved
    }

    /// Reveals every card and the winning team. Only available once the game is over.
    pub fn post_game_results(&self) -> Result<GameResults, GameError> {
        if !self.game_over() {
            return Err(GameError::InvalidAction);
        }
        Ok(GameResults {
            winner: results::winner(&self.players),
            players: self
                .players
                .iter()
                .map(|p| PlayerResult {
                    name: p.name.clone(),
                    dealt: p.dealt,
                    card: p.card,
                    eliminated: p.eliminated,
                })
                .collect(),
            dealt_table: self.dealt_table,
            table: self.table,
        })
    }

    /// The card each player holds now, in turn order.
    pub fn player_cards(&self) -> Vec<(&str, Card)> {
        self.players.iter().map(|p| (&p.name[..], p.card)).collect()
    }

    /// The cards on the table now.
    pub fn table_cards(&self) -> [Card; TABLE_CARDS] {
        self.table
    }

    /// Every card in the game, sorted.
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards = self.cards().collect::<Vec<_>>();
        cards.sort();
        cards
    }

    fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.players
            .iter()
            .map(|p| p.card)
            .chain(self.table.iter().copied())
    }

    /// Finds the player holding the card that acts during `phase`, checking that it is that phase now.
    fn acting_player(&self, phase: Phase) -> Result<usize, GameError> {
        if self.phase != Some(phase) {
            return Err(GameError::InvalidAction);
        }
        let role = phase.role().ok_or(GameError::InvalidAction)?;
        self.players
            .iter()
            .position(|p| p.card == role)
            .ok_or(GameError::InvalidAction)
    }

    fn swap_cards(&mut self, a: usize, b: usize) {
        let card = self.players[a].card;
        self.players[a].card = self.players[b].card;
        self.players[b].card = card;
    }
}

#[cfg(test)]
impl Game {
    /// Creates a game with a known deal, for tests.
    pub(crate) fn with_deal(player_names: &[&str], cards: &[Card], table: [Card; TABLE_CARDS]) -> Self {
        assert_eq!(player_names.len(), cards.len());
        Game {
            players: player_names
                .iter()
                .zip(cards)
                .map(|(name, card)| Player::new(name.to_string(), *card))
                .collect(),
            dealt_table: table,
            table,
            phase: None,
            resolved: false,
        }
    }
}
