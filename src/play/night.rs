use super::Moderator;
use crate::game::Phase;
use crate::screen::{Modal, Screen};
use anyhow::{bail, Context, Result};

impl<S: Screen + ?Sized> Moderator<'_, S> {
    /// Plays the night one phase at a time until daybreak.
    pub(super) fn run_night(&mut self) -> Result<()> {
        loop {
            self.game.advance_phase()?;
            let phase = self.game.current_phase().context("the night has not begun")?;
            if phase == Phase::Daybreak {
                log::info!("the night is over");
                return Ok(());
            }
            if !self.game.is_role_active(phase) {
                log::info!("skipping {}: the role is not in the game", phase);
                continue;
            }

            log::info!("{} begins", phase);
            for player in self.players.clone() {
                self.start_turn(&player, phase)?;
                if self.game.is_player_active(&player)? {
                    log::debug!("{} wakes during {}", player, phase);
                    self.act(&player, phase)?;
                } else {
                    self.show_asleep(&player, phase)?;
                }
            }
        }
    }

    /// Runs the night action of `phase` for the player who wakes during it.
    fn act(&mut self, player: &str, phase: Phase) -> Result<()> {
        match phase {
            Phase::Werewolf | Phase::Minion => self.show_werewolves(player, phase),
            Phase::Seer => self.use_seer_power(player),
            Phase::Robber => self.use_robber_power(player),
            Phase::Troublemaker => self.use_troublemaker_power(player),
            Phase::Insomniac => self.wake_up_insomniac(player),
            Phase::Daybreak => bail!("{} woke up at daybreak, which has no night action", player),
        }
    }

    fn start_turn(&mut self, player: &str, phase: Phase) -> Result<()> {
        let text = format!("Press ENTER to start {}'s turn.", player);
        self.show(Modal::new(text).title(phase).enter())
    }

    fn show_asleep(&mut self, player: &str, phase: Phase) -> Result<()> {
        let text = format!("Zzzzzzzzzz ... {}, you are asleep.", player);
        self.show(Modal::new(text).title(phase).enter())
    }
}
