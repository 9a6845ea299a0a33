//! One player's field: the cell grid plus per-class life counters.
//!
//! The same type serves as a player's own field (boats, hits, misses) and as
//! their knowledge of the opponent's field (unknown, confirmed water, hits).

use core::fmt;

use enumflags2::BitFlags;
use log::{debug, trace};

use crate::bitboard::BitBoard;
use crate::boat::{BoatRun, BoatType, Direction};
use crate::common::{CellState, FieldError, HitStatus, PlacementError};
use crate::config::{FIELD_COLS, FIELD_ROWS, NUM_BOATS};

/// Alive/sunk summary of a fleet, one bit per [`BoatType`] with small at bit 0.
pub type FleetStatus = BitFlags<BoatType>;

/// Occupancy mask over a field.
pub type Mask<const ROWS: usize, const COLS: usize> = BitBoard<u128, ROWS, COLS>;

/// A single attack: target coordinates and, once resolved, its outcome.
/// Coordinates are checked against the grid size when the record is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessData {
    row: usize,
    col: usize,
    outcome: Option<HitStatus>,
}

impl GuessData {
    /// An unresolved guess at `(row, col)` of a `ROWS × COLS` field.
    pub fn new<const ROWS: usize, const COLS: usize>(
        row: usize,
        col: usize,
    ) -> Result<Self, FieldError> {
        if row < ROWS && col < COLS {
            Ok(Self {
                row,
                col,
                outcome: None,
            })
        } else {
            Err(FieldError::OutOfBounds { row, col })
        }
    }

    /// A resolved guess, as received from the defending side.
    pub fn resolved<const ROWS: usize, const COLS: usize>(
        row: usize,
        col: usize,
        outcome: HitStatus,
    ) -> Result<Self, FieldError> {
        let mut guess = Self::new::<ROWS, COLS>(row, col)?;
        guess.outcome = Some(outcome);
        Ok(guess)
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn coord(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn outcome(&self) -> Option<HitStatus> {
        self.outcome
    }

    pub(crate) fn set_outcome(&mut self, outcome: HitStatus) {
        self.outcome = Some(outcome);
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field<const ROWS: usize = FIELD_ROWS, const COLS: usize = FIELD_COLS> {
    grid: [[CellState; COLS]; ROWS],
    lives: [u8; NUM_BOATS],
}

impl<const ROWS: usize, const COLS: usize> Field<ROWS, COLS> {
    /// Field with every cell set to `fill` and full lives for every class.
    pub fn new(fill: CellState) -> Self {
        let mut field = Field {
            grid: [[fill; COLS]; ROWS],
            lives: [0; NUM_BOATS],
        };
        field.initialize(fill);
        field
    }

    /// Knowledge field for tracking an opponent: every cell `Unknown`.
    pub fn new_knowledge() -> Self {
        Self::new(CellState::Unknown)
    }

    /// Sets every cell to `fill` and resets all life counters.
    pub fn initialize(&mut self, fill: CellState) {
        for row in self.grid.iter_mut() {
            row.fill(fill);
        }
        for boat in BoatType::ALL {
            self.lives[boat.index()] = boat.length();
        }
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), FieldError> {
        if row < ROWS && col < COLS {
            Ok(())
        } else {
            Err(FieldError::OutOfBounds { row, col })
        }
    }

    /// A guess aimed at `(row, col)` of a field this size.
    pub fn target(&self, row: usize, col: usize) -> Result<GuessData, FieldError> {
        GuessData::new::<ROWS, COLS>(row, col)
    }

    pub fn read(&self, row: usize, col: usize) -> Result<CellState, FieldError> {
        self.check_bounds(row, col)?;
        Ok(self.grid[row][col])
    }

    /// Replaces the cell at `(row, col)` and returns what was there before.
    pub fn write(&mut self, row: usize, col: usize, state: CellState) -> Result<CellState, FieldError> {
        self.check_bounds(row, col)?;
        Ok(core::mem::replace(&mut self.grid[row][col], state))
    }

    /// Remaining unhit cells of `boat`.
    pub fn lives(&self, boat: BoatType) -> u8 {
        self.lives[boat.index()]
    }

    /// Remaining lives of every class, smallest first.
    pub fn boat_lives(&self) -> [u8; NUM_BOATS] {
        self.lives
    }

    /// Places `boat` with its pivot at `(row, col)`, extending in `direction`.
    ///
    /// Every cell of the run is checked before any is written, so a failed
    /// placement leaves the field untouched. Life counters are not changed.
    pub fn place(
        &mut self,
        row: usize,
        col: usize,
        direction: Direction,
        boat: BoatType,
    ) -> Result<(), PlacementError> {
        self.place_run(&BoatRun::new(row, col, direction, boat))
    }

    /// Like [`Field::place`], decoding the class and direction from raw codes
    /// (see the `TryFrom<u8>` impls on [`BoatType`] and [`Direction`]).
    pub fn place_raw(
        &mut self,
        row: usize,
        col: usize,
        direction: u8,
        boat: u8,
    ) -> Result<(), PlacementError> {
        if row >= ROWS || col >= COLS {
            return Err(PlacementError::OutOfBounds { row, col });
        }
        let boat = BoatType::try_from(boat)?;
        let direction = Direction::try_from(direction)?;
        self.place(row, col, direction, boat)
    }

    pub fn place_run(&mut self, run: &BoatRun) -> Result<(), PlacementError> {
        let end = run.end(ROWS, COLS)?;
        for (r, c) in run.cells() {
            let state = self.read(r, c)?;
            if state != CellState::Empty {
                trace!("{} boat blocked by {:?} at ({}, {})", run.boat, state, r, c);
                return Err(PlacementError::Overlap { row: r, col: c, state });
            }
        }
        for (r, c) in run.cells() {
            self.write(r, c, CellState::Boat(run.boat))?;
        }
        debug!(
            "placed {} boat from ({}, {}) to {:?} facing {:?}",
            run.boat, run.row, run.col, end, run.direction
        );
        Ok(())
    }

    /// Resolves an enemy attack on this field.
    ///
    /// A boat cell becomes `Hit` and costs its class one life; the outcome is
    /// the matching `Sunk*` variant when that life was the last one. Any other
    /// cell becomes `Miss`. Re-attacking a cell is not rejected: a `Hit` cell
    /// holds no boat any more and so reports `Miss`. Returns the cell's state
    /// from before the attack together with the outcome.
    pub fn register_attack(
        &mut self,
        row: usize,
        col: usize,
    ) -> Result<(CellState, HitStatus), FieldError> {
        let previous = self.read(row, col)?;
        let outcome = match previous.boat() {
            Some(boat) => {
                self.write(row, col, CellState::Hit)?;
                let lives = &mut self.lives[boat.index()];
                match lives.checked_sub(1) {
                    Some(0) => {
                        *lives = 0;
                        HitStatus::sunk(boat)
                    }
                    Some(remaining) => {
                        *lives = remaining;
                        HitStatus::Hit
                    }
                    // Extra cells of a class placed more than once.
                    None => HitStatus::Hit,
                }
            }
            None => {
                self.write(row, col, CellState::Miss)?;
                HitStatus::Miss
            }
        };
        debug!("attack at ({}, {}) on {:?}: {:?}", row, col, previous, outcome);
        Ok((previous, outcome))
    }

    /// [`Field::register_attack`] for a guess record; stores the outcome in `guess`.
    pub fn register_guess(&mut self, guess: &mut GuessData) -> Result<CellState, FieldError> {
        let (previous, outcome) = self.register_attack(guess.row(), guess.col())?;
        guess.set_outcome(outcome);
        Ok(previous)
    }

    /// Records the outcome of our own attack on this knowledge field.
    ///
    /// Hits and sinkings mark the cell `Hit`, a miss marks it `Empty`. A sinking
    /// also zeroes that class's lives here, so [`Field::alive_bitfield`] reports
    /// what is known of the opponent's fleet.
    pub fn update_knowledge(
        &mut self,
        row: usize,
        col: usize,
        outcome: HitStatus,
    ) -> Result<CellState, FieldError> {
        let learned = if outcome.is_hit() {
            CellState::Hit
        } else {
            CellState::Empty
        };
        let previous = self.write(row, col, learned)?;
        if let Some(boat) = outcome.sunk_boat() {
            self.lives[boat.index()] = 0;
            debug!("opponent {} boat sunk at ({}, {})", boat, row, col);
        }
        trace!("knowledge ({}, {}): {:?} -> {:?}", row, col, previous, learned);
        Ok(previous)
    }

    /// [`Field::update_knowledge`] for a guess record. Fails if the guess has no outcome.
    pub fn update_knowledge_from(&mut self, guess: &GuessData) -> Result<CellState, FieldError> {
        let outcome = guess.outcome().ok_or(FieldError::Unresolved {
            row: guess.row(),
            col: guess.col(),
        })?;
        self.update_knowledge(guess.row(), guess.col(), outcome)
    }

    /// Classes whose life counter is still above zero.
    pub fn alive_bitfield(&self) -> FleetStatus {
        let mut status = FleetStatus::all();
        for boat in BoatType::ALL {
            if self.lives(boat) == 0 {
                status.remove(boat);
            }
        }
        status
    }

    /// True once every class has been sunk.
    pub fn is_defeated(&self) -> bool {
        self.alive_bitfield().is_empty()
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.grid.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &state)| (r, c, state))
        })
    }

    /// Mask of cells matching `pred`.
    pub fn mask_where<F>(&self, mut pred: F) -> Result<Mask<ROWS, COLS>, FieldError>
    where
        F: FnMut(CellState) -> bool,
    {
        let mut mask = Mask::<ROWS, COLS>::try_new()?;
        for (r, c, state) in self.cells() {
            if pred(state) {
                mask.set(r, c)?;
            }
        }
        Ok(mask)
    }

    /// Mask of cells holding exactly `state`.
    pub fn occupancy(&self, state: CellState) -> Result<Mask<ROWS, COLS>, FieldError> {
        self.mask_where(|s| s == state)
    }

    /// Mask of cells holding any boat.
    pub fn boat_mask(&self) -> Result<Mask<ROWS, COLS>, FieldError> {
        self.mask_where(CellState::is_boat)
    }
}

impl<const ROWS: usize, const COLS: usize> Default for Field<ROWS, COLS> {
    fn default() -> Self {
        Self::new(CellState::Empty)
    }
}

fn symbol(state: CellState) -> char {
    match state {
        CellState::Empty => '.',
        CellState::Cursor => '+',
        CellState::Boat(boat) => (b'0' + boat.length()) as char,
        CellState::Hit => '*',
        CellState::Miss => 'o',
        CellState::Unknown => '?',
    }
}

impl<const ROWS: usize, const COLS: usize> fmt::Debug for Field<ROWS, COLS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Field<{}x{}> lives {:?}:", ROWS, COLS, self.lives)?;
        for row in self.grid.iter() {
            f.write_str("[")?;
            for &state in row.iter() {
                write!(f, " {}", symbol(state))?;
            }
            writeln!(f, " ]")?;
        }
        Ok(())
    }
}
