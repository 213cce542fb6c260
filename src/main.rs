use crate::game::{Game, GameOptions, MAX_PLAYERS, MAX_WEREWOLVES, MIN_PLAYERS};
use crate::play::Moderator;
use crate::screen::TerminalScreen;
use anyhow::Context;
use clap::{error::ErrorKind, CommandFactory, Parser};

mod error;
mod game;
mod play;
mod screen;

const LOG_HELP: &str = "Logs are written to stderr, which shares the screen with the game. \
When setting RUST_LOG, redirect stderr to a file, e.g. `2>werewolves.log`. \
Debug logs reveal every card.";

/// Werewolves! One Night Werewolf for 3 to 10 players sharing one terminal.
#[derive(Parser, Debug)]
#[command(name = "werewolves", version, after_help = LOG_HELP)]
struct Args {
    /// The players, in turn order. Between 3 and 10 players can be specified.
    #[arg(value_name = "PLAYER", required = true)]
    players: Vec<String>,

    /// Show every player's card and the table cards before the night begins.
    #[arg(short, long)]
    debug: bool,

    /// The number of werewolves to include.
    #[arg(short = 'W', long, default_value_t = 2,
          value_parser = clap::value_parser!(u8).range(1..=MAX_WEREWOLVES as i64))]
    werewolves: u8,

    /// Exclude the seer role.
    #[arg(long)]
    exclude_seer: bool,

    /// Exclude the robber role.
    #[arg(long)]
    exclude_robber: bool,

    /// Exclude the troublemaker role.
    #[arg(long)]
    exclude_troublemaker: bool,

    /// Include the minion role.
    #[arg(short = 'M', long)]
    minion: bool,

    /// Include the insomniac role.
    #[arg(short = 'I', long)]
    insomniac: bool,

    /// Include the hunter role.
    #[arg(short = 'H', long)]
    hunter: bool,

    /// Include the tanner role.
    #[arg(short = 'T', long)]
    tanner: bool,

    /// Seed for shuffling the deck; random if unset.
    #[arg(long, env = "WEREWOLVES_SEED")]
    seed: Option<u64>,
}

impl Args {
    fn game_options(&self) -> GameOptions {
        GameOptions {
            werewolves: self.werewolves.into(),
            seer: !self.exclude_seer,
            robber: !self.exclude_robber,
            troublemaker: !self.exclude_troublemaker,
            minion: self.minion,
            insomniac: self.insomniac,
            hunter: self.hunter,
            tanner: self.tanner,
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::try_init().ok();

    let args = Args::parse();
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&args.players.len()) {
        Args::command()
            .error(
                ErrorKind::WrongNumberOfValues,
                format!(
                    "argument \"PLAYER\" requires between {} and {} arguments",
                    MIN_PLAYERS, MAX_PLAYERS
                ),
            )
            .exit();
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let game = match Game::new(args.game_options(), &args.players, seed) {
        Ok(game) => game,
        Err(err) => Args::command().error(ErrorKind::ValueValidation, err).exit(),
    };
    log::info!("dealt a game for {} players", game.num_players());
    log::debug!("seed: {}", seed);

    let mut screen = TerminalScreen::new().context("could not take over the terminal")?;
    let results = Moderator::new(game, &mut screen).with_debug(args.debug).run();
    drop(screen);

    let results = results?;
    log::info!("winner: {:?}", results.winner);
    Ok(())
}
