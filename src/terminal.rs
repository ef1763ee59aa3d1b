//! Line based front end: reads commands, drives an [`Engine`] and prints it.

use std::io::{BufRead, Write};

use crate::{
    config::EngineConfig,
    game::{Engine, Error, GameResult, GameState, Input, Player},
};

const INSTRUCTIONS: &str = "\
Connect Four is a game where your goal is to have 4 of your pawns in a row
either horizontally, vertically or diagonally. By achieving this you win.
Two players take turns to drop their own pawns while trying to win and
stop the other player from winning.

Commands
  1..N\t\t\tdrop a pawn in that column
  new, restart\t\tstart a new game
  help, h, ?\t\tshow this page
  quit, q, exit\t\tquit";

/// Terminal game session, reading from `R` and printing to `W`.
pub struct Terminal<R, W> {
    config: EngineConfig,
    engine: Engine,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Create a session; the first game starts right away.
    pub fn new(config: EngineConfig, reader: R, writer: W) -> GameResult<Self> {
        let engine = Engine::from_config(&config)?;
        Ok(Self {
            config,
            engine,
            reader,
            writer,
        })
    }

    /// The game currently played.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Play until the user quits or the input ends.
    pub fn run(&mut self) -> GameResult<()> {
        log::info!(
            "starting {}x{} session",
            self.config.rows,
            self.config.columns
        );
        self.show()?;

        loop {
            let input = match Input::read(&mut self.reader) {
                Ok(Some(input)) => input,
                Ok(None) => break,
                Err(Error::InvalidInput(s)) => {
                    writeln!(
                        self.writer,
                        "Invalid input {s:?}. Type a column number between 1 and {} or \"help\".",
                        self.engine.columns()
                    )?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            match input {
                Input::Col(col) => self.drop(col)?,
                Input::NewGame => self.new_game()?,
                Input::Help => writeln!(self.writer, "{INSTRUCTIONS}")?,
                Input::Quit => {
                    if self.confirm_quit()? {
                        break;
                    }
                }
                Input::Enter => self.show()?,
                Input::Yes | Input::No => {
                    writeln!(self.writer, "Nothing to confirm. Type \"help\" for help.")?
                }
            }
        }

        log::info!("session finished");
        Ok(())
    }

    /// Drop a pawn in the 1 indexed column typed by the user.
    fn drop(&mut self, col: usize) -> GameResult<()> {
        let result = match col.checked_sub(1) {
            Some(column) => self.engine.try_drop(column),
            None => Err(Error::InvalidColumn),
        };

        match result {
            Ok(_) => self.show(),
            Err(Error::ColumnFull) => Ok(writeln!(self.writer, "Column {col} is already full!")?),
            Err(Error::InvalidColumn) => Ok(writeln!(self.writer, "Column {col} does not exist!")?),
            Err(Error::GameOver) => Ok(writeln!(
                self.writer,
                "The game is over. Type \"new\" to play again."
            )?),
            Err(e) => Err(e),
        }
    }

    fn new_game(&mut self) -> GameResult<()> {
        self.engine = Engine::from_config(&self.config)?;
        log::info!("new game");
        self.show()
    }

    fn confirm_quit(&mut self) -> GameResult<bool> {
        writeln!(self.writer, "Do you want to quit? [y/N]")?;
        match Input::read(&mut self.reader) {
            Ok(Some(Input::Yes)) | Ok(None) => Ok(true),
            Ok(Some(_)) | Err(Error::InvalidInput(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Print the board followed by whose turn it is or how the game ended.
    fn show(&mut self) -> GameResult<()> {
        write!(self.writer, "{}", self.engine)?;
        match self.engine.state() {
            GameState::Ongoing => {
                let player = self.engine.current_player();
                writeln!(
                    self.writer,
                    "{}'s turn ({})",
                    name(player),
                    self.engine.players().marker(player)
                )?;
            }
            GameState::Win(winner) => {
                log::info!("{} won", name(winner));
                writeln!(self.writer, "{} won!", name(winner))?;
            }
            GameState::Draw => {
                log::info!("draw");
                writeln!(self.writer, "It's a draw!")?;
            }
        }
        Ok(())
    }
}

fn name(player: Player) -> &'static str {
    match player {
        Player::A => "Player 1",
        Player::B => "Player 2",
    }
}
