//! A fixed-size `ROWS × COLS` bitboard packed into an unsigned integer.
//!
//! Used for occupancy masks over a [`Field`](crate::Field) and by the AI's
//! placement-density search. No heap allocation, `no_std` friendly.

use core::fmt;
use core::ops::{BitAnd, BitOr, Not};

use num_traits::{PrimInt, Unsigned, Zero};
use thiserror::Error;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitBoardError {
    /// `rows * cols` exceeds the bit width of the backing integer.
    #[error("{rows}x{cols} board does not fit in {capacity} bits")]
    SizeTooLarge {
        rows: usize,
        cols: usize,
        capacity: usize,
    },
    #[error("bit ({row}, {col}) is out of bounds")]
    IndexOutOfBounds { row: usize, col: usize },
}

/// One bit per cell, row-major.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const ROWS: usize, const COLS: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const ROWS: usize, const COLS: usize> BitBoard<T, ROWS, COLS>
where
    T: PrimInt + Unsigned + Zero,
{
    const CELLS: usize = ROWS * COLS;
    const CAPACITY: usize = core::mem::size_of::<T>() * 8;

    #[inline]
    fn mask() -> T {
        if Self::CELLS >= Self::CAPACITY {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    /// Empty board without a size check.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Empty board, or `SizeTooLarge` if the grid does not fit in `T`.
    pub fn try_new() -> Result<Self, BitBoardError> {
        if Self::CELLS > Self::CAPACITY {
            Err(BitBoardError::SizeTooLarge {
                rows: ROWS,
                cols: COLS,
                capacity: Self::CAPACITY,
            })
        } else {
            Ok(Self::new())
        }
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    #[inline]
    fn index(row: usize, col: usize) -> Result<usize, BitBoardError> {
        if row >= ROWS || col >= COLS || row * COLS + col >= Self::CAPACITY {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * COLS + col)
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        let idx = Self::index(row, col)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = Self::index(row, col)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = Self::index(row, col)?;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    /// Board from a raw integer, with bits beyond the grid masked off.
    pub fn from_raw(raw: T) -> Self {
        BitBoard {
            bits: raw & Self::mask(),
        }
    }

    /// Board with the given `(row, col)` cells set.
    pub fn from_cells<I>(cells: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::new();
        for (r, c) in cells {
            board.set(r, c)?;
        }
        Ok(board)
    }

    /// Set cells in row-major order.
    pub fn iter_set_bits(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..Self::CELLS.min(Self::CAPACITY))
            .filter(move |&idx| ((self.bits >> idx) & T::one()) != T::zero())
            .map(|idx| (idx / COLS, idx % COLS))
    }
}

impl<T, const ROWS: usize, const COLS: usize> Default for BitBoard<T, ROWS, COLS>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const ROWS: usize, const COLS: usize> fmt::Debug for BitBoard<T, ROWS, COLS>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}x{}>:", ROWS, COLS)?;
        for r in 0..ROWS {
            for c in 0..COLS {
                let bit = if self.get(r, c).unwrap_or(false) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T, const ROWS: usize, const COLS: usize> BitAnd for BitBoard<T, ROWS, COLS>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.bits & rhs.bits)
    }
}

impl<T, const ROWS: usize, const COLS: usize> BitOr for BitBoard<T, ROWS, COLS>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.bits | rhs.bits)
    }
}

/// Inverts every cell inside the grid.
impl<T, const ROWS: usize, const COLS: usize> Not for BitBoard<T, ROWS, COLS>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn not(self) -> Self {
        Self::from_raw(!self.bits)
    }
}
