use thiserror::Error;

/// The result of attempting to perform an invalid operation on a [Game](crate::game::Game).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid combination of game options")]
    InvalidGameOptions,
    #[error("too few players in the game")]
    TooFewPlayers,
    #[error("too many players in the game")]
    TooManyPlayers,
    #[error("player names must not be empty")]
    InvalidPlayerName,
    #[error("the player {0:?} was listed more than once")]
    DuplicatePlayer(String),
    #[error("no player exists with the given name")]
    PlayerNotFound,
    #[error("this player cannot be chosen for this action")]
    InvalidPlayerChoice,
    #[error("this action cannot be performed during this phase of the game")]
    InvalidAction,
    #[error("an invalid card was chosen")]
    InvalidCard,
}

/// Failure to show a modal or read the player's key.
#[derive(Error, Debug)]
pub enum ScreenError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("interrupted by the user")]
    Interrupted,
}
