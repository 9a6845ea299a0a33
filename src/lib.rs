//! Board engine for a two-player naval combat game.
//!
//! A [`Field`] holds one player's grid and boat lives. Boats are placed with
//! [`Field::place`], enemy attacks resolved with [`Field::register_attack`],
//! and an attacker's view of the opponent is tracked on a separate knowledge
//! field with [`Field::update_knowledge`]. [`Field::alive_bitfield`] reports
//! which boat classes are still afloat.
#![cfg_attr(not(feature = "std"), no_std)]

pub mod ai;
mod bitboard;
mod boat;
mod common;
mod config;
mod field;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;

pub use bitboard::{BitBoard, BitBoardError};
pub use boat::{BoatRun, BoatType, Direction};
pub use common::{CellState, FieldError, HitStatus, PlacementError};
pub use config::*;
pub use field::{Field, FleetStatus, GuessData, Mask};
pub use game::{GameStatus, PlayerFields};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use player::{AiPlayer, Player};
