//! One player's pair of fields and their standing in the game.

use crate::{
    common::{CellState, FieldError, HitStatus},
    config::{FIELD_COLS, FIELD_ROWS},
    field::{Field, FleetStatus, GuessData},
};

/// Current standing of one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A player's own field together with what they have learned of the opponent's.
///
/// Turn order and repeat-guess rules belong to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerFields<const ROWS: usize = FIELD_ROWS, const COLS: usize = FIELD_COLS> {
    own: Field<ROWS, COLS>,
    knowledge: Field<ROWS, COLS>,
}

impl<const ROWS: usize, const COLS: usize> PlayerFields<ROWS, COLS> {
    /// Empty own field, all-unknown knowledge field.
    pub fn new() -> Self {
        Self {
            own: Field::new(CellState::Empty),
            knowledge: Field::new_knowledge(),
        }
    }

    pub fn own(&self) -> &Field<ROWS, COLS> {
        &self.own
    }

    /// Mutable access to our own field for boat placement.
    pub fn own_mut(&mut self) -> &mut Field<ROWS, COLS> {
        &mut self.own
    }

    pub fn knowledge(&self) -> &Field<ROWS, COLS> {
        &self.knowledge
    }

    /// Resolve an opponent attack against our field, filling in the guess's outcome.
    pub fn receive_attack(&mut self, guess: &mut GuessData) -> Result<HitStatus, FieldError> {
        let (_, outcome) = self.own.register_attack(guess.row(), guess.col())?;
        guess.set_outcome(outcome);
        Ok(outcome)
    }

    /// Record the reported outcome of our own attack.
    pub fn record_outcome(&mut self, guess: &GuessData) -> Result<CellState, FieldError> {
        self.knowledge.update_knowledge_from(guess)
    }

    /// Opponent classes not yet reported sunk.
    pub fn enemy_fleet(&self) -> FleetStatus {
        self.knowledge.alive_bitfield()
    }

    pub fn status(&self) -> GameStatus {
        if self.own.is_defeated() {
            GameStatus::Lost
        } else if self.knowledge.is_defeated() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}

impl<const ROWS: usize, const COLS: usize> Default for PlayerFields<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}
