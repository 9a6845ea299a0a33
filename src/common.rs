//! Common types for the board engine: cell states, attack outcomes and errors.

use thiserror::Error;

use crate::bitboard::BitBoardError;
use crate::boat::BoatType;

/// Contents of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    /// Selection marker drawn by an input front end.
    Cursor,
    /// Part of a boat of the given class.
    Boat(BoatType),
    Hit,
    Miss,
    /// Not yet learned; the initial state of a knowledge field.
    Unknown,
}

impl CellState {
    /// Boat class occupying the cell, if any.
    pub fn boat(self) -> Option<BoatType> {
        match self {
            CellState::Boat(boat) => Some(boat),
            _ => None,
        }
    }

    pub fn is_boat(self) -> bool {
        self.boat().is_some()
    }
}

impl From<BoatType> for CellState {
    fn from(boat: BoatType) -> Self {
        CellState::Boat(boat)
    }
}

/// Outcome of an attack, as reported back to the attacker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitStatus {
    Miss,
    Hit,
    SunkSmall,
    SunkMedium,
    SunkLarge,
    SunkHuge,
}

impl HitStatus {
    /// The outcome reporting that `boat` was sunk.
    pub const fn sunk(boat: BoatType) -> Self {
        match boat {
            BoatType::Small => HitStatus::SunkSmall,
            BoatType::Medium => HitStatus::SunkMedium,
            BoatType::Large => HitStatus::SunkLarge,
            BoatType::Huge => HitStatus::SunkHuge,
        }
    }

    /// Class sunk by this outcome, if it is a `Sunk*` variant.
    pub const fn sunk_boat(self) -> Option<BoatType> {
        match self {
            HitStatus::SunkSmall => Some(BoatType::Small),
            HitStatus::SunkMedium => Some(BoatType::Medium),
            HitStatus::SunkLarge => Some(BoatType::Large),
            HitStatus::SunkHuge => Some(BoatType::Huge),
            HitStatus::Miss | HitStatus::Hit => None,
        }
    }

    /// True for `Hit` and every `Sunk*` variant.
    pub const fn is_hit(self) -> bool {
        !matches!(self, HitStatus::Miss)
    }
}

/// Errors from reading, writing or attacking a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("coordinate ({row}, {col}) is outside the field")]
    OutOfBounds { row: usize, col: usize },
    /// A guess without an outcome was fed to the knowledge tracker.
    #[error("guess at ({row}, {col}) has no outcome yet")]
    Unresolved { row: usize, col: usize },
    #[error(transparent)]
    BitBoard(#[from] BitBoardError),
}

/// Reasons a boat could not be placed. A failed placement never modifies the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// Pivot or far end of the boat lies outside the field.
    #[error("boat at ({row}, {col}) does not fit on the field")]
    OutOfBounds { row: usize, col: usize },
    #[error("unknown boat class {0}")]
    InvalidBoatType(u8),
    #[error("unknown direction {0}")]
    InvalidDirection(u8),
    /// A cell of the run is already occupied.
    #[error("boat collides with {state:?} at ({row}, {col})")]
    Overlap {
        row: usize,
        col: usize,
        state: CellState,
    },
    /// Random placement exhausted its attempts for this class.
    #[error("no room left for the {0} boat")]
    NoRoom(BoatType),
    #[error(transparent)]
    Field(#[from] FieldError),
}
