use super::card::Card;
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::iter::repeat;

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 10;
pub const MAX_WEREWOLVES: usize = 4;

/// The number of cards left face down in the middle of the table.
pub const TABLE_CARDS: usize = 3;

/// Options for customising which cards are shuffled into the deck.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct GameOptions {
    /// The number of werewolf cards.
    pub werewolves: usize,
    pub seer: bool,
    pub robber: bool,
    pub troublemaker: bool,
    pub minion: bool,
    pub insomniac: bool,
    pub hunter: bool,
    pub tanner: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            werewolves: 2,
            seer: true,
            robber: true,
            troublemaker: true,
            minion: false,
            insomniac: false,
            hunter: false,
            tanner: false,
        }
    }
}

impl GameOptions {
    /// The special role cards included in the deck, in night order.
    pub fn roles(&self) -> Vec<Card> {
        [
            (self.minion, Card::Minion),
            (self.seer, Card::Seer),
            (self.robber, Card::Robber),
            (self.troublemaker, Card::Troublemaker),
            (self.insomniac, Card::Insomniac),
            (self.hunter, Card::Hunter),
            (self.tanner, Card::Tanner),
        ]
        .into_iter()
        .filter_map(|(included, card)| included.then_some(card))
        .collect()
    }

    /// Checks the player count against these options.
    pub fn validate(&self, num_players: usize) -> Result<(), GameError> {
        if num_players < MIN_PLAYERS {
            return Err(GameError::TooFewPlayers);
        }
        if num_players > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers);
        }
        if self.werewolves == 0 || self.werewolves > MAX_WEREWOLVES {
            return Err(GameError::InvalidGameOptions);
        }
        if self.werewolves + self.roles().len() > num_players + TABLE_CARDS {
            return Err(GameError::InvalidGameOptions);
        }
        Ok(())
    }

    /// Gets the unshuffled deck for the given number of players:
    /// the werewolves, each included role, then villagers to fill the remaining slots.
    pub fn deck(&self, num_players: usize) -> Result<Vec<Card>, GameError> {
        self.validate(num_players)?;
        let size = num_players + TABLE_CARDS;
        let mut cards = Vec::with_capacity(size);
        cards.extend(repeat(Card::Werewolf).take(self.werewolves));
        cards.extend(self.roles());
        let villagers = size - cards.len();
        cards.extend(repeat(Card::Villager).take(villagers));
        Ok(cards)
    }
}
