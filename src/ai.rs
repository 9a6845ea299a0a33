// Random fleet placement and density-based guessing for computer players.
// Uses no_std and avoids heap allocations.

use log::{debug, trace};
use rand::Rng;

use crate::boat::{BoatRun, BoatType, Direction};
use crate::common::{CellState, FieldError, PlacementError};
use crate::config::{GUESS_TEMPERATURE, HIT_BIAS, PLACEMENT_ATTEMPTS, PLACEMENT_ORDER};
use crate::field::{Field, FleetStatus, GuessData, Mask};

/// Places one boat of every class, largest first, at random positions.
///
/// On failure the boats placed so far stay on the field; re-initialize it
/// before retrying.
pub fn place_all_boats<R, const ROWS: usize, const COLS: usize>(
    field: &mut Field<ROWS, COLS>,
    rng: &mut R,
) -> Result<(), PlacementError>
where
    R: Rng + ?Sized,
{
    for boat in PLACEMENT_ORDER {
        let run = random_placement(field, rng, boat)?;
        field.place_run(&run)?;
    }
    Ok(())
}

/// A random in-bounds run for `boat` that covers only `Empty` cells.
pub fn random_placement<R, const ROWS: usize, const COLS: usize>(
    field: &Field<ROWS, COLS>,
    rng: &mut R,
    boat: BoatType,
) -> Result<BoatRun, PlacementError>
where
    R: Rng + ?Sized,
{
    let len = boat.length() as usize;
    for _ in 0..PLACEMENT_ATTEMPTS {
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        // Pivot ranges that keep the far end on the field.
        let (rows, cols) = match direction {
            Direction::North => (len - 1..ROWS, 0..COLS),
            Direction::South => (0..(ROWS + 1).saturating_sub(len), 0..COLS),
            Direction::East => (0..ROWS, 0..(COLS + 1).saturating_sub(len)),
            Direction::West => (0..ROWS, len - 1..COLS),
        };
        if rows.is_empty() || cols.is_empty() {
            continue;
        }
        let run = BoatRun::new(rng.random_range(rows), rng.random_range(cols), direction, boat);
        if run
            .cells()
            .all(|(r, c)| field.read(r, c) == Ok(CellState::Empty))
        {
            return Ok(run);
        }
    }
    debug!("gave up placing {} boat after {} attempts", boat, PLACEMENT_ATTEMPTS);
    Err(PlacementError::NoRoom(boat))
}

/// Relative likelihood of each cell holding an undiscovered boat segment.
///
/// Every in-bounds run of every class in `remaining` that avoids `blocked`
/// cells adds weight to its cells not already in `hits`. Runs covering known
/// hits weigh `HIT_BIAS` times more per hit, so cells next to hits stand out.
/// The result sums to one unless no run fits at all.
pub fn calc_pdf<const ROWS: usize, const COLS: usize>(
    hits: &Mask<ROWS, COLS>,
    blocked: &Mask<ROWS, COLS>,
    remaining: FleetStatus,
) -> [[f64; COLS]; ROWS] {
    let mut matrix = [[0.0f64; COLS]; ROWS];

    for boat in remaining.iter() {
        // East and South cover every straight run once.
        for direction in [Direction::East, Direction::South] {
            for r in 0..ROWS {
                for c in 0..COLS {
                    let run = BoatRun::new(r, c, direction, boat);
                    if run.end(ROWS, COLS).is_err() {
                        continue;
                    }
                    if run.cells().any(|(rr, cc)| blocked.get(rr, cc).unwrap_or(true)) {
                        continue;
                    }
                    let n_hits = run
                        .cells()
                        .filter(|&(rr, cc)| hits.get(rr, cc).unwrap_or(false))
                        .count();
                    let weight = libm::pow(HIT_BIAS, n_hits as f64);
                    for (rr, cc) in run.cells() {
                        if !hits.get(rr, cc).unwrap_or(false) {
                            matrix[rr][cc] += weight;
                        }
                    }
                }
            }
        }
    }

    normalize(matrix)
}

fn normalize<const ROWS: usize, const COLS: usize>(
    mut matrix: [[f64; COLS]; ROWS],
) -> [[f64; COLS]; ROWS] {
    let total: f64 = matrix.iter().flat_map(|row| row.iter()).sum();
    if total > 0.0 {
        for v in matrix.iter_mut().flat_map(|row| row.iter_mut()) {
            *v /= total;
        }
    }
    matrix
}

/// Samples one of the `candidates` cells, weighted by `pdf` sharpened with
/// `temperature`. Falls back to a uniform choice when every candidate has
/// zero weight. `None` if there are no candidates.
pub fn sample_pdf<R, const ROWS: usize, const COLS: usize>(
    pdf: &[[f64; COLS]; ROWS],
    candidates: &Mask<ROWS, COLS>,
    temperature: f64,
    rng: &mut R,
) -> Option<(usize, usize)>
where
    R: Rng + ?Sized,
{
    let count = candidates.count_ones();
    if count == 0 {
        return None;
    }
    let weight = |(r, c): (usize, usize)| libm::pow(pdf[r][c], 1.0 / temperature);
    let total: f64 = candidates.iter_set_bits().map(weight).sum();
    if total <= 0.0 {
        return candidates.iter_set_bits().nth(rng.random_range(0..count));
    }
    let threshold: f64 = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    let mut last = None;
    for cell in candidates.iter_set_bits() {
        cumulative += weight(cell);
        last = Some(cell);
        if threshold < cumulative {
            return Some(cell);
        }
    }
    last
}

/// Picks the next cell to attack from a knowledge field. Only `Unknown` cells
/// are chosen; `None` once nothing is left to learn.
pub fn decide_guess<R, const ROWS: usize, const COLS: usize>(
    knowledge: &Field<ROWS, COLS>,
    rng: &mut R,
) -> Result<Option<GuessData>, FieldError>
where
    R: Rng + ?Sized,
{
    let hits = knowledge.occupancy(CellState::Hit)?;
    let unknown = knowledge.occupancy(CellState::Unknown)?;
    let blocked = !(hits | unknown);
    let pdf = calc_pdf(&hits, &blocked, knowledge.alive_bitfield());
    match sample_pdf(&pdf, &unknown, GUESS_TEMPERATURE, rng) {
        Some((row, col)) => {
            trace!("guessing ({}, {}) with weight {}", row, col, pdf[row][col]);
            knowledge.target(row, col).map(Some)
        }
        None => Ok(None),
    }
}
