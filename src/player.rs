//! Player abstraction and the computer player.

use rand::rngs::SmallRng;

use crate::{
    ai,
    common::{FieldError, PlacementError},
    field::{Field, GuessData},
};

/// Interface implemented by the different kinds of player.
///
/// A player decides where its boats go and which cell to attack next; applying
/// those decisions to the fields is left to the caller.
pub trait Player {
    /// Place the whole fleet onto the provided field.
    fn place_boats(&mut self, rng: &mut SmallRng, field: &mut Field) -> Result<(), PlacementError>;

    /// Choose the next attack given what is known of the opponent's field.
    /// `None` when there is nothing left to attack.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        knowledge: &Field,
    ) -> Result<Option<GuessData>, FieldError>;

    /// Inform the player of the outcome of its last attack.
    fn handle_guess_result(&mut self, _guess: &GuessData) {}
}

/// Computer player: random placement, density-based targeting.
#[derive(Debug, Default, Clone, Copy)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn place_boats(&mut self, rng: &mut SmallRng, field: &mut Field) -> Result<(), PlacementError> {
        ai::place_all_boats(field, rng)
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        knowledge: &Field,
    ) -> Result<Option<GuessData>, FieldError> {
        ai::decide_guess(knowledge, rng)
    }
}
