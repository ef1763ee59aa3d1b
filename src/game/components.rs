use crate::config::{DEFAULT_PLAYER_A, DEFAULT_PLAYER_B};

/// One of the two players. Player A always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Moves first.
    A,
    /// Moves second.
    B,
}

impl Player {
    /// The opponent of this player.
    pub fn other(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

/// What a single board cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Occupant {
    /// A pawn of player A.
    PlayerA,
    /// A pawn of player B.
    PlayerB,
    /// No pawn.
    #[default]
    Empty,
}

impl Occupant {
    /// The player owning the pawn in this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Occupant::PlayerA => Some(Player::A),
            Occupant::PlayerB => Some(Player::B),
            Occupant::Empty => None,
        }
    }
}

impl From<Player> for Occupant {
    fn from(player: Player) -> Self {
        match player {
            Player::A => Occupant::PlayerA,
            Player::B => Occupant::PlayerB,
        }
    }
}

impl From<Option<Player>> for Occupant {
    fn from(player: Option<Player>) -> Self {
        player.map_or(Occupant::Empty, Occupant::from)
    }
}

/// If there has been a winner or a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Moves are still accepted.
    Ongoing,
    /// The player made four in a row.
    Win(Player),
    /// The board is full without four in a row.
    Draw,
}

impl GameState {
    /// Win and draw are terminal, no more pawns are accepted.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::Ongoing)
    }
}

/// Display labels of both players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players {
    /// Label of player A.
    pub player_a: String,
    /// Label of player B.
    pub player_b: String,
}

impl Players {
    /// Create a new players.
    pub fn new(player_a: impl Into<String>, player_b: impl Into<String>) -> Self {
        Self {
            player_a: player_a.into(),
            player_b: player_b.into(),
        }
    }

    /// Get the label of the given player.
    pub fn label(&self, player: Player) -> &str {
        match player {
            Player::A => &self.player_a,
            Player::B => &self.player_b,
        }
    }

    /// Single character drawn for the player's pawns.
    pub fn marker(&self, player: Player) -> char {
        self.label(player).chars().next().unwrap_or(match player {
            Player::A => 'x',
            Player::B => 'o',
        })
    }
}

impl Default for Players {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_A, DEFAULT_PLAYER_B)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::A.other(), Player::B);
        assert_eq!(Player::B.other(), Player::A);
    }

    #[test]
    fn test_occupant_maps_back_to_player() {
        assert_eq!(Occupant::from(Player::A).player(), Some(Player::A));
        assert_eq!(Occupant::from(Player::B).player(), Some(Player::B));
        assert_eq!(Occupant::from(None::<Player>).player(), None);
        assert_eq!(Occupant::default(), Occupant::Empty);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!GameState::Ongoing.is_terminal());
        assert!(GameState::Win(Player::B).is_terminal());
        assert!(GameState::Draw.is_terminal());
    }

    #[test]
    fn test_markers() {
        let players = Players::new("Red", "");
        assert_eq!(players.marker(Player::A), 'R');
        assert_eq!(players.marker(Player::B), 'o');
        assert_eq!(Players::default().label(Player::B), "O");
    }
}
