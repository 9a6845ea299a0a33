//! Compile-time board configuration.

use crate::boat::BoatType;

/// Number of rows on a default field.
pub const FIELD_ROWS: usize = 6;
/// Number of columns on a default field.
pub const FIELD_COLS: usize = 10;

pub const SMALL_BOAT_LENGTH: u8 = 2;
pub const MEDIUM_BOAT_LENGTH: u8 = 3;
pub const LARGE_BOAT_LENGTH: u8 = 4;
pub const HUGE_BOAT_LENGTH: u8 = 5;

/// Number of boat classes in a fleet.
pub const NUM_BOATS: usize = 4;

/// Total number of boat cells in one full fleet.
pub const TOTAL_BOAT_CELLS: usize =
    (SMALL_BOAT_LENGTH + MEDIUM_BOAT_LENGTH + LARGE_BOAT_LENGTH + HUGE_BOAT_LENGTH) as usize;

/// Placement attempts per boat before random placement gives up.
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// Weight multiplier applied per known hit covered by a candidate placement.
pub const HIT_BIAS: f64 = 10.0;

/// Sampling temperature for AI guesses; lower values favour likely cells.
pub const GUESS_TEMPERATURE: f64 = 0.5;

/// Fleet ordered from largest to smallest, the order AI placement uses.
pub const PLACEMENT_ORDER: [BoatType; NUM_BOATS] = [
    BoatType::Huge,
    BoatType::Large,
    BoatType::Medium,
    BoatType::Small,
];
