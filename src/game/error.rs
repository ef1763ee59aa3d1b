/// All the possible recoverable errors produced by the game.
#[derive(Debug)]
pub enum Error {
    /// The column is outside the board.
    InvalidColumn,
    /// The column already holds a pawn in every row.
    ColumnFull,
    /// The game was already won or drawn.
    GameOver,
    /// A board dimension is zero.
    InvalidDim,
    /// The cell is outside the board.
    InvalidPosition,
    /// A typed line that is not a command.
    InvalidInput(String),
    /// Reading input or writing output failed.
    Io(std::io::Error),
}

/// Result type making use of custom errors.
pub type GameResult<T> = Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidColumn => write!(f, "column does not exist"),
            Error::ColumnFull => write!(f, "column is already full"),
            Error::GameOver => write!(f, "game is already over"),
            Error::InvalidDim => write!(f, "board needs at least one row and one column"),
            Error::InvalidPosition => write!(f, "position is outside the board"),
            Error::InvalidInput(input) => write!(f, "invalid input: {input:?}"),
            Error::Io(e) => write!(f, "i/o error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}
