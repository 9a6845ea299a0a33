use battleboats::{ai, BoatRun, BoatType, CellState, Direction, Field, HitStatus, FIELD_COLS, FIELD_ROWS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn fleet_field(seed: u64) -> Field {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut field = Field::default();
    ai::place_all_boats(&mut field, &mut rng).unwrap();
    field
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placement_is_all_or_nothing(
        row in 0..10usize,
        col in 0..10usize,
        dir in 0..4u8,
        boat in 0..4u8,
    ) {
        let mut field = Field::<8, 8>::new(CellState::Empty);
        field.place(3, 2, Direction::East, BoatType::Medium).unwrap();
        let before = field;

        let direction = Direction::try_from(dir).unwrap();
        let boat = BoatType::try_from(boat).unwrap();
        let run = BoatRun::new(row, col, direction, boat);
        let fits = run.end(8, 8).is_ok()
            && run.cells().all(|(r, c)| before.read(r, c) == Ok(CellState::Empty));

        let result = field.place(row, col, direction, boat);
        prop_assert_eq!(result.is_ok(), fits);
        if fits {
            for (r, c) in run.cells() {
                prop_assert_eq!(field.read(r, c), Ok(CellState::Boat(boat)));
            }
            let changed = field
                .cells()
                .filter(|&(r, c, s)| before.read(r, c) != Ok(s))
                .count();
            prop_assert_eq!(changed, boat.length() as usize);
            prop_assert_eq!(field.boat_lives(), before.boat_lives());
        } else {
            prop_assert_eq!(field, before);
        }
    }

    #[test]
    fn lives_match_remaining_boat_cells(seed in any::<u64>(), shots in 0..80usize) {
        let mut field = fleet_field(seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        for _ in 0..shots {
            let r = rng.random_range(0..FIELD_ROWS);
            let c = rng.random_range(0..FIELD_COLS);
            field.register_attack(r, c).unwrap();
        }
        for boat in BoatType::ALL {
            let remaining = field
                .cells()
                .filter(|&(_, _, s)| s == CellState::Boat(boat))
                .count();
            prop_assert_eq!(remaining, field.lives(boat) as usize);
            prop_assert_eq!(field.alive_bitfield().contains(boat), remaining > 0);
        }
    }

    #[test]
    fn attack_without_boat_is_miss(seed in any::<u64>(), row in 0..FIELD_ROWS, col in 0..FIELD_COLS) {
        let mut field = fleet_field(seed);
        let previous = field.read(row, col).unwrap();
        let lives = field.boat_lives();
        let (reported, outcome) = field.register_attack(row, col).unwrap();
        prop_assert_eq!(reported, previous);
        if previous.is_boat() {
            prop_assert!(outcome.is_hit());
            prop_assert_eq!(field.read(row, col), Ok(CellState::Hit));
        } else {
            prop_assert_eq!(outcome, HitStatus::Miss);
            prop_assert_eq!(field.read(row, col), Ok(CellState::Miss));
            prop_assert_eq!(field.boat_lives(), lives);
        }
    }
}
