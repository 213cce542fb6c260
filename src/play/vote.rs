use super::Moderator;
use crate::game::{Phase, Votes};
use crate::screen::{Menu, Modal, Screen};
use anyhow::{Context, Result};

/// Announces who was eliminated, given the names in display order.
pub fn elimination_message(names: &[String]) -> String {
    match names {
        [] => "No one was eliminated!".to_string(),
        [name] => format!("{} has been eliminated!", name),
        [init @ .., last] => format!("{} and {} have been eliminated!", init.join(", "), last),
    }
}

impl<S: Screen + ?Sized> Moderator<'_, S> {
    /// Collects one vote from each player in turn, then eliminates the players the vote decides.
    pub(super) fn vote_to_eliminate(&mut self) -> Result<Vec<String>> {
        let hunter = self.game.hunter_player().map(String::from);
        let mut votes = Votes::new(self.players.len(), hunter);

        for player in self.players.clone() {
            let mut menu = Menu::new(format!(
                "{}, cast your vote to eliminate which player?",
                player
            ));
            for other in &self.players {
                let label = if *other == player { "myself" } else { other.as_str() };
                menu.option(label, other.clone());
            }
            let target = menu.choose(&mut *self.screen, Phase::Daybreak, "= Choose a player =")?;
            log::debug!("{} votes for {}", player, target);
            votes.vote(&player, &target)?;
        }

        log::debug!("tally: {:?}", votes.ranking());
        let eliminated = votes.outcome().context("not every player has voted")?;
        self.game.eliminate_players(&eliminated)?;
        log::info!("eliminated: {:?}", eliminated);

        let text = elimination_message(&eliminated);
        self.show(Modal::new(text).title(Phase::Daybreak))?;
        Ok(eliminated)
    }
}
