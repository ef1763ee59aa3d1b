use crate::{
    config::EngineConfig,
    game::{
        board::Board,
        components::{GameState, Occupant, Player, Players},
        error::{Error, GameResult},
    },
};

/// Game engine: owns the board, enforces the drop rule and alternates turns.
///
/// A new engine is created for every game. Once the state is terminal the
/// engine rejects every further drop.
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    players: Players,
    current: Player,
    state: GameState,
}

impl Engine {
    /// Start a new game on an empty `rows` x `columns` board, player A to move.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDim` if either dimension is zero.
    pub fn new_game(
        rows: usize,
        columns: usize,
        player_a: impl Into<String>,
        player_b: impl Into<String>,
    ) -> GameResult<Self> {
        let board = Board::new(rows, columns)?;
        log::debug!("new {rows}x{columns} game");
        Ok(Self {
            board,
            players: Players::new(player_a, player_b),
            current: Player::A,
            state: GameState::Ongoing,
        })
    }

    /// Start a new game with the dimensions and labels of `config`.
    pub fn from_config(config: &EngineConfig) -> GameResult<Self> {
        config.validate()?;
        Self::new_game(
            config.rows,
            config.columns,
            config.player_a.as_str(),
            config.player_b.as_str(),
        )
    }

    /// Drop a pawn of the current player in the given zero indexed column.
    ///
    /// Returns `false`, leaving the game untouched, if the game is over, the
    /// column does not exist or the column is full. Returns `true` otherwise,
    /// whether or not the move ended the game.
    pub fn drop(&mut self, column: usize) -> bool {
        self.try_drop(column).is_ok()
    }

    /// Like [`Engine::drop`], but reports why a move was rejected.
    ///
    /// Returns the row the pawn landed in.
    ///
    /// # Errors
    ///
    /// Checked in this order: `Error::GameOver`, `Error::InvalidColumn`,
    /// `Error::ColumnFull`.
    pub fn try_drop(&mut self, column: usize) -> GameResult<usize> {
        if self.state.is_terminal() {
            log::debug!("rejected drop in column {column}: game is over");
            return Err(Error::GameOver);
        }

        let row = self.board.place(column, self.current).map_err(|e| {
            log::debug!("rejected drop in column {column}: {e}");
            e
        })?;

        self.state = self.board.evaluate();
        match self.state {
            GameState::Ongoing => self.current = self.current.other(),
            GameState::Win(winner) => log::debug!("{winner:?} wins"),
            GameState::Draw => log::debug!("draw"),
        }

        Ok(row)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.board.columns()
    }

    /// Get the occupant at (column, row), row 0 being the bottom.
    pub fn get(&self, column: usize, row: usize) -> GameResult<Occupant> {
        self.board.get(column, row)
    }

    /// Number of pawns in the given column, `None` if it does not exist.
    pub fn column_height(&self, column: usize) -> Option<usize> {
        self.board.height(column)
    }

    /// A column that does not exist counts as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        self.board.is_column_full(column)
    }

    /// Total number of pawns dropped so far.
    pub fn pawn_count(&self) -> usize {
        self.board.pawns()
    }

    /// Columns that still accept a pawn. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        (0..self.columns())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// The player to move, or the player who made the last move once the
    /// game is over.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Ongoing, won or drawn, as of the last drop.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The game was won or drawn.
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// The winner, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        match self.state {
            GameState::Win(winner) => Some(winner),
            _ => None,
        }
    }

    /// Labels of both players.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Label of the given player.
    pub fn label(&self, player: Player) -> &str {
        self.players.label(player)
    }

    /// The board, read only.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// The classic 6x7 game with the default labels.
impl Default for Engine {
    fn default() -> Self {
        Self {
            board: Board::default(),
            players: Players::default(),
            current: Player::A,
            state: GameState::Ongoing,
        }
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.board.render(f, &self.players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(engine: &mut Engine, columns: &[usize]) {
        for &col in columns {
            assert!(engine.drop(col), "drop in column {col} was rejected");
        }
    }

    #[test]
    fn test_initial_state() {
        let engine = Engine::default();
        assert_eq!(engine.rows(), 6);
        assert_eq!(engine.columns(), 7);
        assert_eq!(engine.current_player(), Player::A);
        assert_eq!(engine.state(), GameState::Ongoing);
        assert_eq!(engine.legal_columns(), (0..7).collect::<Vec<_>>());
        assert_eq!(engine.pawn_count(), 0);
    }

    #[test]
    fn test_default_matches_config_defaults() {
        let engine = Engine::default();
        let configured = Engine::from_config(&EngineConfig::default()).unwrap();
        assert_eq!(engine.board(), configured.board());
        assert_eq!(engine.players(), configured.players());
        assert_eq!(engine.current_player(), configured.current_player());
    }

    #[test]
    fn test_drop_flips_turn() {
        let mut engine = Engine::default();
        assert_eq!(engine.try_drop(3).unwrap(), 0);
        assert_eq!(engine.current_player(), Player::B);
        assert_eq!(engine.get(3, 0).unwrap(), Occupant::PlayerA);
        assert_eq!(engine.try_drop(3).unwrap(), 1);
        assert_eq!(engine.current_player(), Player::A);
        assert_eq!(engine.get(3, 1).unwrap(), Occupant::PlayerB);
    }

    #[test]
    fn test_rejected_drop_keeps_turn() {
        let mut engine = Engine::default();
        assert!(!engine.drop(7));
        assert!(matches!(engine.try_drop(100), Err(Error::InvalidColumn)));
        assert_eq!(engine.current_player(), Player::A);
        assert_eq!(engine.pawn_count(), 0);
    }

    #[test]
    fn test_full_column_rejected() {
        let mut engine = Engine::default();
        // alternating pawns, no vertical line
        play(&mut engine, &[0, 0, 0, 0, 0, 0]);
        assert_eq!(engine.column_height(0), Some(6));
        assert!(engine.is_column_full(0));
        let before = engine.current_player();
        assert!(matches!(engine.try_drop(0), Err(Error::ColumnFull)));
        assert_eq!(engine.current_player(), before);
        assert_eq!(engine.column_height(0), Some(6));
        assert!(!engine.legal_columns().contains(&0));
    }

    #[test]
    fn test_win_keeps_winner_as_current() {
        let mut engine = Engine::default();
        play(&mut engine, &[0, 0, 1, 1, 2, 2, 3]);
        assert_eq!(engine.state(), GameState::Win(Player::A));
        assert_eq!(engine.winner(), Some(Player::A));
        assert_eq!(engine.current_player(), Player::A);
        assert!(engine.legal_columns().is_empty());
    }

    #[test]
    fn test_game_over_checked_first() {
        let mut engine = Engine::default();
        play(&mut engine, &[0, 0, 1, 1, 2, 2, 3]);
        assert!(matches!(engine.try_drop(9), Err(Error::GameOver)));
        assert!(matches!(engine.try_drop(4), Err(Error::GameOver)));
        assert_eq!(engine.pawn_count(), 7);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            Engine::new_game(0, 7, "X", "O"),
            Err(Error::InvalidDim)
        ));
    }

    #[test]
    fn test_from_config() {
        let config = EngineConfig {
            rows: 4,
            columns: 5,
            player_a: "R".to_string(),
            player_b: "Y".to_string(),
        };
        let engine = Engine::from_config(&config).unwrap();
        assert_eq!(engine.rows(), 4);
        assert_eq!(engine.columns(), 5);
        assert_eq!(engine.label(Player::B), "Y");
    }

    #[test]
    fn test_display_uses_labels() {
        let mut engine = Engine::new_game(1, 2, "Red", "Yellow").unwrap();
        play(&mut engine, &[1, 0]);
        assert_eq!(engine.to_string(), "#-1--2-#\n| Y  R |\n#------#\n");
        assert_eq!(engine.state(), GameState::Draw);
    }
}
