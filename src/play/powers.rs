use super::Moderator;
use crate::game::{Phase, TABLE_CARDS};
use crate::screen::{menu_key, Key, Menu, Modal, Screen};
use anyhow::Result;

/// What the seer decided to look at.
enum SeerChoice {
    PlayerCard,
    TableCards,
}

/// The keys offered for picking a table card, and the zero-based position each selects.
/// The position picked first, if any, is not offered again.
pub(super) fn table_card_keys(picked: Option<usize>) -> Vec<(Key, usize)> {
    (0..TABLE_CARDS)
        .filter(|idx| Some(*idx) != picked)
        .map(|idx| (Key::Char(menu_key(idx)), idx))
        .collect()
}

impl<S: Screen + ?Sized> Moderator<'_, S> {
    /// Shows a werewolf, or the minion, who the werewolves are.
    pub(super) fn show_werewolves(&mut self, player: &str, phase: Phase) -> Result<()> {
        let mut lines = vec![if phase == Phase::Werewolf {
            format!("{}, you look around and see other werewolves:", player)
        } else {
            format!("{}, you look around and see the werewolves:", player)
        }];
        let werewolves = self.game.identify_werewolves();
        if werewolves.is_empty() {
            lines.push("* no one".to_string());
        }
        lines.extend(werewolves.iter().map(|ww| format!("* {}", ww)));
        self.show(Modal::new(lines.join("\n")).title(phase).enter())
    }

    /// The seer looks at another player's card, or at two of the table cards.
    pub(super) fn use_seer_power(&mut self, player: &str) -> Result<()> {
        let mut menu = Menu::new(format!("{}, choose:", player)).line("");
        menu.option("Look at a player's card.", SeerChoice::PlayerCard);
        menu.option("Look at 2 table cards.", SeerChoice::TableCards);
        let choice = menu.choose(&mut *self.screen, Phase::Seer, "= Choose 1 or 2 =")?;

        let text = match choice {
            SeerChoice::PlayerCard => {
                let mut menu = Menu::new("View which player's card?").line("");
                for other in self.others(player) {
                    menu.option(&other, other.clone());
                }
                let other = menu.choose(&mut *self.screen, Phase::Seer, "= Choose a player =")?;
                let card = self.game.seer_view_player_card(&other)?;
                log::debug!("{} looks at {}'s card", player, other);
                format!("{}'s card is {}.", other, card)
            }
            SeerChoice::TableCards => {
                let first = self.pick_table_card("Choose a table card.", None)?;
                let second = self.pick_table_card("Choose another table card.", Some(first))?;
                let [a, b] = self.game.seer_view_table_cards(first, second)?;
                log::debug!("{} looks at table cards {} and {}", player, first + 1, second + 1);
                format!(
                    "Your mystic powers reveal the following table cards:\n\n* Card {} is {}.\n* Card {} is {}.",
                    first + 1,
                    a,
                    second + 1,
                    b
                )
            }
        };
        self.show(Modal::new(text).title(Phase::Seer))
    }

    /// Asks the seer for one table card position, never offering `picked` again.
    fn pick_table_card(&mut self, text: &str, picked: Option<usize>) -> Result<usize> {
        let options = table_card_keys(picked);
        let keys = options.iter().map(|(key, _)| *key).collect::<Vec<_>>();
        let footer = format!(
            "= Choose {} =",
            options
                .iter()
                .map(|(_, idx)| (idx + 1).to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        let modal = Modal::new(text).title(Phase::Seer).keys(keys, footer);
        loop {
            let pressed = self.screen.show_modal(&modal)?;
            if let Some((_, idx)) = options.iter().find(|(key, _)| *key == pressed) {
                return Ok(*idx);
            }
        }
    }

    /// The robber may exchange their card with another player's, and then sees their new card.
    pub(super) fn use_robber_power(&mut self, player: &str) -> Result<()> {
        let mut menu = Menu::new(format!(
            "{}, exchange your Robber card for another player's card.",
            player
        ))
        .line("Exchange with which player?");
        menu.option("I'll keep my card.", None);
        for other in self.others(player) {
            menu.option(&other, Some(other.clone()));
        }
        let Some(other) = menu.choose(&mut *self.screen, Phase::Robber, "= Choose an Option =")? else {
            log::debug!("{} keeps their card", player);
            return Ok(());
        };

        let card = self.game.robber_steal_card(&other)?;
        log::debug!("{} robs {}", player, other);
        let text = format!("{}, you stole the {} card from {}!", player, card, other);
        self.show(Modal::new(text).title(Phase::Robber).enter())
    }

    /// The troublemaker may exchange the cards of two other players, without seeing them.
    pub(super) fn use_troublemaker_power(&mut self, player: &str) -> Result<()> {
        let mut menu = Menu::new(format!("{}, exchange 2 other players' cards.", player))
            .line("Exchange with which player?");
        menu.option("I've decided not to meddle.", None);
        for other in self.others(player) {
            menu.option(&other, Some(other.clone()));
        }
        let footer = "= Choose an Option =";
        let Some(first) = menu.choose(&mut *self.screen, Phase::Troublemaker, footer)? else {
            log::debug!("{} does not meddle", player);
            return Ok(());
        };

        let mut menu = Menu::new("Choose a 2nd player.");
        for other in self.others(player).into_iter().filter(|p| *p != first) {
            menu.option(&other, other.clone());
        }
        let second = menu.choose(&mut *self.screen, Phase::Troublemaker, footer)?;

        self.game.troublemaker_switch_cards(&first, &second)?;
        log::debug!("{} switches {} and {}", player, first, second);
        let text = format!("{}, you switched cards for {} and {}.", player, first, second);
        self.show(Modal::new(text).title(Phase::Troublemaker))
    }

    /// The insomniac sees the card they hold at the end of the night.
    pub(super) fn wake_up_insomniac(&mut self, player: &str) -> Result<()> {
        let card = self.game.insomniac_view_card()?;
        let text = format!("{}, your card is {}.", player, card);
        self.show(Modal::new(text).title(Phase::Insomniac).enter())
    }
}
