use std::io::BufRead;

use crate::game::error::{Error, GameResult};

/// The different commands a player can type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Column number as typed, 1 indexed.
    Col(usize),
    /// Start over on an empty board.
    NewGame,
    /// Show the instructions.
    Help,
    /// Leave the game, after confirmation.
    Quit,
    /// Confirm.
    Yes,
    /// Decline.
    No,
    /// Empty line.
    Enter,
}

impl Input {
    /// Read one line from `reader` and parse it.
    ///
    /// Returns `Ok(None)` at end of input. Lines that are not valid UTF-8
    /// are decoded lossily and end up as `Error::InvalidInput`.
    pub fn read(reader: &mut impl BufRead) -> GameResult<Option<Self>> {
        let mut buf = Vec::new();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        String::from_utf8_lossy(&buf).parse().map(Some)
    }
}

impl std::str::FromStr for Input {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().trim() {
            "" => Ok(Self::Enter),
            "yes" | "y" => Ok(Self::Yes),
            "no" | "n" => Ok(Self::No),
            "new" | "restart" | "new game" => Ok(Self::NewGame),
            "exit" | "quit" | "q" => Ok(Self::Quit),
            "help" | "h" | "?" => Ok(Self::Help),
            col => col
                .parse::<usize>()
                .map(Self::Col)
                .map_err(|_| Error::InvalidInput(col.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("3\n".parse::<Input>().unwrap(), Input::Col(3));
        assert_eq!("  New ".parse::<Input>().unwrap(), Input::NewGame);
        assert_eq!("?".parse::<Input>().unwrap(), Input::Help);
        assert_eq!("QUIT".parse::<Input>().unwrap(), Input::Quit);
        assert_eq!("y".parse::<Input>().unwrap(), Input::Yes);
        assert_eq!("no".parse::<Input>().unwrap(), Input::No);
        assert_eq!("\n".parse::<Input>().unwrap(), Input::Enter);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            "left".parse::<Input>(),
            Err(Error::InvalidInput(s)) if s == "left"
        ));
        assert!("-1".parse::<Input>().is_err());
        assert!("e".parse::<Input>().is_err());
    }

    #[test]
    fn test_read_non_utf8_line() {
        let mut reader: &[u8] = b"\xff\xfe\n2\n";
        assert!(matches!(
            Input::read(&mut reader),
            Err(Error::InvalidInput(_))
        ));
        assert_eq!(Input::read(&mut reader).unwrap(), Some(Input::Col(2)));
    }

    #[test]
    fn test_read_until_eof() {
        let mut reader = "4\nhelp\n".as_bytes();
        assert_eq!(Input::read(&mut reader).unwrap(), Some(Input::Col(4)));
        assert_eq!(Input::read(&mut reader).unwrap(), Some(Input::Help));
        assert_eq!(Input::read(&mut reader).unwrap(), None);
    }
}
