use super::card::Card;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of the night, in the order the roles wake up.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Phase {
    Werewolf,
    Minion,
    Seer,
    Robber,
    Troublemaker,
    Insomniac,
    /// The night is over; the village votes.
    Daybreak,
}

impl Phase {
    /// The first phase of the night.
    pub const FIRST: Phase = Phase::Werewolf;

    /// The card whose holder acts during this phase, or `None` at daybreak.
    pub fn role(self) -> Option<Card> {
        match self {
            Phase::Werewolf => Some(Card::Werewolf),
            Phase::Minion => Some(Card::Minion),
            Phase::Seer => Some(Card::Seer),
            Phase::Robber => Some(Card::Robber),
            Phase::Troublemaker => Some(Card::Troublemaker),
            Phase::Insomniac => Some(Card::Insomniac),
            Phase::Daybreak => None,
        }
    }

    /// The phase that follows this one, or `None` after daybreak.
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Werewolf => Some(Phase::Minion),
            Phase::Minion => Some(Phase::Seer),
            Phase::Seer => Some(Phase::Robber),
            Phase::Robber => Some(Phase::Troublemaker),
            Phase::Troublemaker => Some(Phase::Insomniac),
            Phase::Insomniac => Some(Phase::Daybreak),
            Phase::Daybreak => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Werewolf => "Werewolf Phase",
            Phase::Minion => "Minion Phase",
            Phase::Seer => "Seer Phase",
            Phase::Robber => "Robber Phase",
            Phase::Troublemaker => "Troublemaker Phase",
            Phase::Insomniac => "Insomniac Phase",
            Phase::Daybreak => "Daybreak",
        })
    }
}
