use serde::{Deserialize, Serialize};
use std::fmt;

/// A role card, held either by a player or lying face down on the table.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Card {
    Villager,
    Werewolf,
    Seer,
    Robber,
    Troublemaker,
    Minion,
    Insomniac,
    Hunter,
    Tanner,
}

impl Card {
    /// The human-readable name of the card.
    pub fn name(self) -> &'static str {
        match self {
            Card::Villager => "Villager",
            Card::Werewolf => "Werewolf",
            Card::Seer => "Seer",
            Card::Robber => "Robber",
            Card::Troublemaker => "Troublemaker",
            Card::Minion => "Minion",
            Card::Insomniac => "Insomniac",
            Card::Hunter => "Hunter",
            Card::Tanner => "Tanner",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
