use super::card::Card;
use super::options::{GameOptions, TABLE_CARDS};
use crate::error::GameError;
use rand::prelude::SliceRandom;
use rand::Rng;

/// The cards in play for one game, before they are dealt.
#[derive(Clone, Debug)]
pub struct Deck {
    num_players: usize,
    cards: Vec<Card>,
}

/// The result of dealing a [Deck]: one card per player, in turn order, and the table cards.
pub struct Deal {
    pub players: Vec<Card>,
    pub table: [Card; TABLE_CARDS],
}

impl Deck {
    pub fn new(opts: &GameOptions, num_players: usize) -> Result<Self, GameError> {
        let cards = opts.deck(num_players)?;
        Ok(Self { num_players, cards })
    }

    /// Shuffles the deck.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.cards.shuffle(rng);
    }

    /// Deals the deck from the top: one card to each player, the remainder to the table.
    pub fn deal(mut self) -> Result<Deal, GameError> {
        let table = self.cards.split_off(self.num_players);
        let table: [Card; TABLE_CARDS] = table.try_into().map_err(|_| GameError::InvalidGameOptions)?;
        Ok(Deal {
            players: self.cards,
            table,
        })
    }

    /// The number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}
