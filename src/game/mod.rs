pub(crate) mod board;
pub(crate) mod components;
pub(crate) mod engine;
pub(crate) mod error;
mod input;

pub use board::Board;
pub use components::{GameState, Occupant, Player, Players};
pub use engine::Engine;
pub use error::{Error, GameResult};
pub use input::Input;
