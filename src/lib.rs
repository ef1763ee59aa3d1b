// #![deny(warnings)]
#![warn(missing_docs)]
//! Connect 4 game crate
//!
//! The [`Engine`] owns the board, accepts one pawn drop per player action and
//! reports whether the game is ongoing, won or drawn. [`terminal::Terminal`]
//! is a line based front end driving it.
pub mod config;
pub(crate) mod game;
pub mod terminal;

pub use config::EngineConfig;
pub use game::{Board, Engine, Error, GameResult, GameState, Input, Occupant, Player, Players};
