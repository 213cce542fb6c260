use crate::error::GameError;
use std::collections::BTreeMap;

/// Tracks the daybreak vote of each player.
#[derive(Clone, Debug, Default)]
pub struct Votes {
    num_players: usize,
    /// The player holding the hunter card, if any.
    hunter: Option<String>,
    /// Whom the hunter voted for.
    hunter_victim: Option<String>,
    voters: Vec<String>,
    tally: BTreeMap<String, usize>,
}

impl Votes {
    /// Creates a new `Votes`, where `num_players` is the number of votes needed for an outcome.
    pub fn new(num_players: usize, hunter: Option<String>) -> Self {
        Self {
            num_players,
            hunter,
            ..Default::default()
        }
    }

    /// Returns whether the given player has cast their vote.
    pub fn has_cast(&self, voter: &str) -> bool {
        self.voters.iter().any(|v| v == voter)
    }

    /// Records the vote of a player. Each player votes exactly once.
    pub fn vote(&mut self, voter: &str, target: &str) -> Result<(), GameError> {
        if self.has_cast(voter) {
            return Err(GameError::InvalidAction);
        }
        if self.hunter.as_deref() == Some(voter) {
            self.hunter_victim = Some(target.to_string());
        }
        self.voters.push(voter.to_string());
        *self.tally.entry(target.to_string()).or_default() += 1;
        Ok(())
    }

    /// The hunter's chosen target, once the hunter has voted.
    #[cfg(test)]
    pub fn hunter_victim(&self) -> Option<&str> {
        self.hunter_victim.as_deref()
    }

    /// Every player who received a vote, most votes first; ties are ordered by name.
    pub fn ranking(&self) -> Vec<(&str, usize)> {
        let mut rank = self
            .tally
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect::<Vec<_>>();
        // The tally is keyed by name, and the sort is stable
        rank.sort_by(|a, b| b.1.cmp(&a.1));
        rank
    }

    /// If all votes are counted, returns the players to eliminate sorted by name,
    /// otherwise returns `None`.
    ///
    /// A lone vote never eliminates anyone; otherwise everyone tied on the most votes is out.
    /// If the hunter is among them, the hunter's victim goes too.
    pub fn outcome(&self) -> Option<Vec<String>> {
        if self.voters.len() < self.num_players {
            return None;
        }

        let mut eliminated = vec![];
        let mut top_score = 0;
        for (name, count) in self.ranking() {
            if count == 1 || count < top_score {
                break;
            }
            top_score = count;
            eliminated.push(name.to_string());
        }

        if let (Some(hunter), Some(victim)) = (&self.hunter, &self.hunter_victim) {
            if eliminated.contains(hunter) && !eliminated.contains(victim) {
                eliminated.push(victim.clone());
            }
        }

        eliminated.sort();
        Some(eliminated)
    }
}
