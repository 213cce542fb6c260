use super::Moderator;
use crate::game::{Card, Phase};
use crate::screen::{Modal, Screen};
use anyhow::Result;
use std::collections::BTreeMap;

const INSTRUCTIONS: &str = "The village has been invaded by ghastly werewolves!  These bloodthirsty shape \
changers want to take over the village.  But the villagers know they are weakest at daybreak, and that is \
when they will strike at their enemy.  In this game, you will take on the role of a villager or a werewolf.  \
At daybreak, the entire village votes on who lives and who dies.  If a werewolf is slain, the villagers win.  \
If no werewolves are slain, the werewolf team wins.  If no players are werewolves, the villagers only win if \
no one dies.";

const DAYBREAK: &str = "You've made it to daybreak!  It's time to discuss what happened during the night \
and vote for which player should be eliminated.  It is recommended you set a time limit of about 5 minutes.  \
Once all players are finished talking, press any key to start voting.";

/// Lists each kind of card in the game with how many copies there are, sorted by name.
pub(super) fn card_counts(cards: &[Card]) -> String {
    let mut counts = BTreeMap::<&str, usize>::new();
    for card in cards {
        *counts.entry(card.name()).or_default() += 1;
    }
    let width = counts.keys().map(|name| name.len()).max().unwrap_or(0) + 3;

    let rule = "=".repeat(22);
    let mut lines = vec![rule.clone(), "Cards Used in the Game".to_string(), rule, String::new()];
    lines.extend(
        counts
            .iter()
            .map(|(name, count)| format!("* {:>width$} x{:>3}", name, count, width = width)),
    );
    lines.join("\n")
}

impl<S: Screen + ?Sized> Moderator<'_, S> {
    pub(super) fn show_instructions(&mut self) -> Result<()> {
        self.show(Modal::new(INSTRUCTIONS).title("Instructions for Play"))
    }

    /// Dumps every card in play, for debugging.
    pub(super) fn show_debug(&mut self) -> Result<()> {
        let mut lines = vec!["Player cards:".to_string()];
        lines.extend(
            self.game
                .player_cards()
                .into_iter()
                .map(|(player, card)| format!("{} -> {}", player, card)),
        );
        lines.push("Table cards:".to_string());
        lines.extend(
            self.game
                .table_cards()
                .iter()
                .enumerate()
                .map(|(n, card)| format!("Table {} -> {}", n + 1, card)),
        );
        self.show(Modal::new(lines.join("\n")).title("DEBUG Info").preformatted())
    }

    pub(super) fn show_cards_in_game(&mut self) -> Result<()> {
        let text = card_counts(&self.game.all_cards());
        self.show(Modal::new(text).title("= Setup =").enter().preformatted())
    }

    /// Shows each player, one at a time, the card they were dealt.
    pub(super) fn show_dealt_cards(&mut self) -> Result<()> {
        let dealt = self
            .game
            .player_cards()
            .into_iter()
            .map(|(player, card)| (player.to_string(), card))
            .collect::<Vec<_>>();
        for (player, card) in dealt {
            self.show(Modal::new(format!("{}'s turn.", player)).title("The Deal").enter())?;
            let text = format!("{} was dealt {}", player, card);
            self.show(Modal::new(text).title("The Deal").enter())?;
        }
        Ok(())
    }

    pub(super) fn show_daybreak(&mut self) -> Result<()> {
        self.show(Modal::new(DAYBREAK).title(Phase::Daybreak))
    }
}
