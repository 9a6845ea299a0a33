use battleboats::{BoatType, CellState, Direction, GameStatus, HitStatus, PlayerFields};

#[test]
fn test_player_fields_track_both_sides() {
    let mut alice: PlayerFields<8, 8> = PlayerFields::new();
    let mut bob: PlayerFields<8, 8> = PlayerFields::new();
    for (row, boat) in BoatType::ALL.into_iter().enumerate() {
        alice.own_mut().place(row, 0, Direction::East, boat).unwrap();
        bob.own_mut().place(7 - row, 7, Direction::West, boat).unwrap();
    }
    assert_eq!(alice.status(), GameStatus::InProgress);
    assert_eq!(alice.knowledge().read(0, 0), Ok(CellState::Unknown));

    let mut miss = alice.knowledge().target(0, 0).unwrap();
    assert_eq!(bob.receive_attack(&mut miss), Ok(HitStatus::Miss));
    assert_eq!(alice.record_outcome(&miss), Ok(CellState::Unknown));
    assert_eq!(alice.knowledge().read(0, 0), Ok(CellState::Empty));

    let mut last = None;
    for (i, boat) in BoatType::ALL.into_iter().enumerate() {
        for k in 0..boat.length() as usize {
            let mut guess = alice.knowledge().target(7 - i, 7 - k).unwrap();
            last = Some(bob.receive_attack(&mut guess).unwrap());
            alice.record_outcome(&guess).unwrap();
        }
        assert_eq!(last, Some(HitStatus::sunk(boat)));
        assert!(!alice.enemy_fleet().contains(boat));
    }

    assert_eq!(alice.status(), GameStatus::Won);
    assert_eq!(bob.status(), GameStatus::Lost);
    assert_eq!(alice.own().alive_bitfield().bits(), 0b1111);
}
