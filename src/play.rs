//! Runs a hotseat game on one shared screen: the deal, the night, the vote and the results.
//!
//! Every dialog is shown to a single player at a time, who is asked to press ENTER
//! before anything private appears, so the previous player can hand over the keyboard.

use crate::game::{Game, GameResults};
use crate::screen::{Modal, Screen};
use anyhow::Result;

mod night;
mod powers;
mod results;
mod setup;
mod vote;

/// Leads the players through one game.
///
/// The moderator owns the game for the length of the session and borrows the screen;
/// it keeps no state of its own beyond the turn order.
pub struct Moderator<'s, S: Screen + ?Sized> {
    game: Game,
    screen: &'s mut S,
    players: Vec<String>,
    debug: bool,
}

impl<'s, S: Screen + ?Sized> Moderator<'s, S> {
    pub fn new(game: Game, screen: &'s mut S) -> Self {
        let players = game.player_names().map(String::from).collect();
        Self {
            game,
            screen,
            players,
            debug: false,
        }
    }

    /// Shows every player's and table card before the night begins.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Plays the whole game and returns its results.
    pub fn run(&mut self) -> Result<GameResults> {
        self.show_instructions()?;
        if self.debug {
            self.show_debug()?;
        }
        self.show_cards_in_game()?;
        self.show_dealt_cards()?;
        self.run_night()?;
        self.show_daybreak()?;
        self.vote_to_eliminate()?;
        self.show_results()
    }

    fn show(&mut self, modal: Modal) -> Result<()> {
        self.screen.show_modal(&modal)?;
        Ok(())
    }

    /// Every player except `player`, in turn order.
    fn others(&self, player: &str) -> Vec<String> {
        self.players
            .iter()
            .filter(|p| *p != player)
            .cloned()
            .collect()
    }
}
