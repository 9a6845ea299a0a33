//! Boat classes, facing directions and the straight-line runs they occupy.

use core::fmt;

use enumflags2::bitflags;

use crate::common::PlacementError;
use crate::config::{HUGE_BOAT_LENGTH, LARGE_BOAT_LENGTH, MEDIUM_BOAT_LENGTH, SMALL_BOAT_LENGTH};

/// Class of boat. Each class is also one bit of a [`FleetStatus`](crate::FleetStatus),
/// ordered smallest to largest from the least-significant bit.
#[bitflags]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoatType {
    Small = 0b0001,
    Medium = 0b0010,
    Large = 0b0100,
    Huge = 0b1000,
}

impl BoatType {
    /// All classes, smallest first.
    pub const ALL: [BoatType; 4] = [
        BoatType::Small,
        BoatType::Medium,
        BoatType::Large,
        BoatType::Huge,
    ];

    /// Number of cells a boat of this class occupies.
    pub const fn length(self) -> u8 {
        match self {
            BoatType::Small => SMALL_BOAT_LENGTH,
            BoatType::Medium => MEDIUM_BOAT_LENGTH,
            BoatType::Large => LARGE_BOAT_LENGTH,
            BoatType::Huge => HUGE_BOAT_LENGTH,
        }
    }

    /// Position of this class in [`BoatType::ALL`].
    pub const fn index(self) -> usize {
        match self {
            BoatType::Small => 0,
            BoatType::Medium => 1,
            BoatType::Large => 2,
            BoatType::Huge => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BoatType::Small => "small",
            BoatType::Medium => "medium",
            BoatType::Large => "large",
            BoatType::Huge => "huge",
        }
    }
}

/// Decodes a raw class index (0 = small .. 3 = huge).
impl TryFrom<u8> for BoatType {
    type Error = PlacementError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        BoatType::ALL
            .get(raw as usize)
            .copied()
            .ok_or(PlacementError::InvalidBoatType(raw))
    }
}

impl fmt::Display for BoatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction a boat extends in from its pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Coordinate `distance` cells away from `(row, col)` in this direction, or
    /// `None` if it would leave a `rows × cols` grid.
    pub fn offset(
        self,
        row: usize,
        col: usize,
        distance: usize,
        rows: usize,
        cols: usize,
    ) -> Option<(usize, usize)> {
        let (r, c) = match self {
            Direction::North => (row.checked_sub(distance)?, col),
            Direction::South => (row.checked_add(distance)?, col),
            Direction::East => (row, col.checked_add(distance)?),
            Direction::West => (row, col.checked_sub(distance)?),
        };
        (r < rows && c < cols).then_some((r, c))
    }
}

/// Decodes a raw direction (0 = north, 1 = east, 2 = south, 3 = west).
impl TryFrom<u8> for Direction {
    type Error = PlacementError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(raw as usize)
            .copied()
            .ok_or(PlacementError::InvalidDirection(raw))
    }
}

/// A boat of a given class laid out from a pivot in one direction. The pivot is
/// the first of exactly `boat.length()` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoatRun {
    pub boat: BoatType,
    pub direction: Direction,
    pub row: usize,
    pub col: usize,
}

impl BoatRun {
    pub const fn new(row: usize, col: usize, direction: Direction, boat: BoatType) -> Self {
        Self {
            boat,
            direction,
            row,
            col,
        }
    }

    /// Last cell of the run, checked against a `rows × cols` grid.
    pub fn end(&self, rows: usize, cols: usize) -> Result<(usize, usize), PlacementError> {
        if self.row >= rows || self.col >= cols {
            return Err(PlacementError::OutOfBounds {
                row: self.row,
                col: self.col,
            });
        }
        let last = self.boat.length() as usize - 1;
        self.direction
            .offset(self.row, self.col, last, rows, cols)
            .ok_or(PlacementError::OutOfBounds {
                row: self.row,
                col: self.col,
            })
    }

    /// Cells covered by the run, pivot first. Stops early if the run would
    /// underflow, so call [`BoatRun::end`] first to know the run fits.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let run = *self;
        (0..run.boat.length() as usize)
            .map_while(move |k| run.direction.offset(run.row, run.col, k, usize::MAX, usize::MAX))
    }
}
