//! Reusable checks that every [`GridModel`] backend must pass.
//!
//! Each backend's test module calls [`run_full_compliance`] on a fresh,
//! all-default model.

use cellsim_core::Coord;

use crate::model::GridModel;

/// Cells never written read as the default entity.
pub fn assert_unwritten_is_default<M: GridModel<Entity = u8>>(m: &M) {
    for c in m.structure().coords() {
        if m.is_default(c) {
            assert_eq!(m.get(c), m.default_entity());
        }
    }
}

/// A written value is read back, and the previous occupant is returned.
pub fn assert_read_after_write<M: GridModel<Entity = u8>>(m: &mut M) {
    let coords: Vec<Coord> = m.structure().coords().collect();
    for (i, &c) in coords.iter().enumerate() {
        let v = (i % 7) as u8 + 1;
        let old = m.set(c, v);
        assert_eq!(old, *m.default_entity(), "fresh cell {c} was not default");
        assert_eq!(*m.get(c), v);
    }
    m.clear();
    assert_eq!(m.non_default_count(), 0);
}

/// Non-default iteration is row-major and agrees with the count.
pub fn assert_iteration_row_major<M: GridModel<Entity = u8>>(m: &mut M) {
    let coords: Vec<Coord> = m.structure().coords().collect();
    for &c in coords.iter().rev().step_by(3) {
        m.set(c, 2);
    }
    let seen: Vec<Coord> = m.non_default_coords().collect();
    assert_eq!(seen.len(), m.non_default_count());
    assert!(seen.windows(2).all(|w| w[0] < w[1]), "not row-major: {seen:?}");
    for c in &seen {
        assert_eq!(*m.get(*c), 2);
    }
    m.clear();
}

/// `count_entities` agrees with a full scan.
pub fn assert_count_consistent<M: GridModel<Entity = u8>>(m: &mut M) {
    let coords: Vec<Coord> = m.structure().coords().collect();
    for (i, &c) in coords.iter().enumerate() {
        if i % 4 == 0 {
            m.set(c, (i % 3) as u8);
        }
    }
    for target in 0..3u8 {
        let scanned = coords.iter().filter(|&&c| *m.get(c) == target).count();
        assert_eq!(m.count_entities(&mut |e| *e == target), scanned);
    }
    m.clear();
}

/// `move_entity` leaves exactly one copy at the destination.
pub fn assert_move_single_residency<M: GridModel<Entity = u8>>(m: &mut M) {
    let from = Coord::new(0, 0);
    let to = m
        .structure()
        .coord_at(m.cell_count() - 1)
        .unwrap_or(from);
    m.set(from, 5);
    let displaced = m.move_entity(from, to).unwrap();
    if from != to {
        assert_eq!(displaced, 0);
        assert_eq!(*m.get(from), 0);
    }
    assert_eq!(*m.get(to), 5);
    assert_eq!(m.non_default_count(), 1);
    assert!(m.move_entity(from, Coord::new(-1, 0)).is_err());
    assert_eq!(*m.get(to), 5);
    m.clear();
}

/// Run every check against an all-default model with default `0`.
pub fn run_full_compliance<M: GridModel<Entity = u8>>(m: &mut M) {
    assert_eq!(*m.default_entity(), 0);
    assert_unwritten_is_default(m);
    assert_read_after_write(m);
    assert_iteration_row_major(m);
    assert_count_consistent(m);
    assert_move_single_residency(m);
}
