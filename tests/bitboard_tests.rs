use battleboats::{BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    assert!(BitBoard::<u64, 6, 10>::try_new().is_ok());
    assert!(BitBoard::<u64, 8, 8>::try_new().is_ok());

    let err = BitBoard::<u8, 3, 3>::try_new();
    assert_eq!(
        err,
        Err(BitBoardError::SizeTooLarge {
            rows: 3,
            cols: 3,
            capacity: 8
        })
    );
}

#[test]
fn test_get_set_clear() {
    let mut bb = BitBoard::<u32, 4, 6>::new();
    assert!(bb.is_empty());

    bb.set(3, 5).unwrap();
    assert!(bb.get(3, 5).unwrap());
    assert!(!bb.get(5, 3).is_ok());

    bb.clear(3, 5).unwrap();
    assert!(bb.is_empty());
    assert_eq!(
        bb.set(4, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 4, col: 0 })
    );
}

#[test]
fn test_from_cells_and_iter() {
    let bb = BitBoard::<u16, 3, 4>::from_cells([(2, 3), (0, 1)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (2, 3)]);
    assert_eq!(bb.count_ones(), 2);
}

#[test]
fn test_not_stays_inside_grid() {
    let bb = !BitBoard::<u16, 3, 3>::new();
    assert_eq!(bb.count_ones(), 9);
    let a = BitBoard::<u16, 3, 3>::from_cells([(0, 0), (1, 1)]).unwrap();
    let b = BitBoard::<u16, 3, 3>::from_cells([(1, 1), (2, 2)]).unwrap();
    assert_eq!((a & b).count_ones(), 1);
    assert_eq!((a | b).count_ones(), 3);
}
