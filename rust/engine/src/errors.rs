use thiserror::Error;

/// Signal conditions returned by board operations. All of these are normal
/// control-flow outcomes for the embedding application, not corruption:
/// `OutOfBombs` and `GameOver` report a finished game, the rest reject an
/// action without mutating any state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    OutOfTurn { expected: usize, actual: usize },
    #[error("No hint tokens remaining")]
    NoHintsRemaining,
    #[error("Hint tokens already at maximum, discarding is not allowed")]
    MaxHintsReached,
    #[error("Out of bombs")]
    OutOfBombs,
    #[error("Game ended")]
    GameOver,
    #[error("Invalid player index {index} for a {players}-player game")]
    InvalidPlayerIndex { index: usize, players: usize },
    #[error("Invalid card index {index} for a hand of {hand_len}")]
    InvalidCardIndex { index: usize, hand_len: usize },
    #[error("Unsupported player count {count} (expected 2 to 5)")]
    InvalidPlayerCount { count: usize },
}
