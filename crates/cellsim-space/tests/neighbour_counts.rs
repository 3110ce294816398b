use cellsim_core::{Coord, Direction};
use cellsim_space::{
    CellShape, EdgeBehavior, GridEdgeBehavior, GridStructure, NeighbourhoodMode, Resolution,
};

fn usable_count(grid: &GridStructure, origin: Coord, mode: NeighbourhoodMode) -> usize {
    grid.resolve_neighbours(origin, mode)
        .iter()
        .filter(|n| n.resolution.is_usable())
        .count()
}

#[test]
fn interior_counts_per_shape_and_mode() {
    let square = GridStructure::new(CellShape::Square, GridEdgeBehavior::BLOCK_XY, 5, 5).unwrap();
    let hex = GridStructure::new(CellShape::Hexagon, GridEdgeBehavior::BLOCK_XY, 5, 6).unwrap();
    let mid = Coord::new(2, 2);

    assert_eq!(usable_count(&square, mid, NeighbourhoodMode::EdgesOnly), 4);
    assert_eq!(usable_count(&square, mid, NeighbourhoodMode::EdgesAndVertices), 8);
    assert_eq!(usable_count(&hex, mid, NeighbourhoodMode::EdgesOnly), 6);
    assert_eq!(usable_count(&hex, mid, NeighbourhoodMode::EdgesAndVertices), 6);
}

#[test]
fn blocked_corner_has_fewer_neighbours_than_interior() {
    for shape in [CellShape::Square, CellShape::Hexagon] {
        let grid = GridStructure::new(shape, GridEdgeBehavior::BLOCK_XY, 6, 6).unwrap();
        for mode in [NeighbourhoodMode::EdgesOnly, NeighbourhoodMode::EdgesAndVertices] {
            let corner = usable_count(&grid, Coord::new(0, 0), mode);
            let interior = usable_count(&grid, Coord::new(3, 3), mode);
            assert!(corner < interior, "{shape} {mode:?}: {corner} !< {interior}");
        }
    }
}

#[test]
fn torus_gives_every_cell_full_neighbourhood() {
    for shape in [CellShape::Square, CellShape::Hexagon] {
        let grid = GridStructure::new(shape, GridEdgeBehavior::WRAP_XY, 4, 4).unwrap();
        for coord in grid.coords() {
            for mode in [NeighbourhoodMode::EdgesOnly, NeighbourhoodMode::EdgesAndVertices] {
                let n = grid.resolve_neighbours(coord, mode);
                assert_eq!(n.len(), shape.neighbour_count(mode));
                assert!(n.iter().all(|nb| !nb.resolution.is_blocked()));
            }
        }
    }
}

#[test]
fn three_by_three_centre_scenario() {
    let grid = GridStructure::new(CellShape::Square, GridEdgeBehavior::BLOCK_XY, 3, 3).unwrap();
    let mut got: Vec<(Direction, Resolution)> = grid
        .resolve_neighbours(Coord::new(1, 1), NeighbourhoodMode::EdgesOnly)
        .iter()
        .map(|n| (n.direction, n.resolution))
        .collect();
    got.sort();
    let mut expected = vec![
        (Direction::North, Resolution::Valid(Coord::new(1, 0))),
        (Direction::South, Resolution::Valid(Coord::new(1, 2))),
        (Direction::West, Resolution::Valid(Coord::new(0, 1))),
        (Direction::East, Resolution::Valid(Coord::new(2, 1))),
    ];
    expected.sort();
    assert_eq!(got, expected);
}

#[test]
fn three_by_three_corner_scenario() {
    let grid = GridStructure::new(CellShape::Square, GridEdgeBehavior::BLOCK_XY, 3, 3).unwrap();
    let n = grid.resolve_neighbours(Coord::new(0, 0), NeighbourhoodMode::EdgesOnly);
    let valid: Vec<_> = n.iter().filter_map(|nb| nb.resolution.valid_coord()).collect();
    let blocked: Vec<_> = n
        .iter()
        .filter(|nb| nb.resolution == Resolution::Blocked)
        .map(|nb| nb.direction)
        .collect();
    assert_eq!(valid.len(), 2);
    assert!(valid.contains(&Coord::new(1, 0)));
    assert!(valid.contains(&Coord::new(0, 1)));
    assert_eq!(blocked, vec![Direction::North, Direction::West]);
}

#[test]
fn cylinder_blocks_only_north_and_south() {
    let grid = GridStructure::new(
        CellShape::Square,
        GridEdgeBehavior::new(EdgeBehavior::Wrap, EdgeBehavior::Block),
        4,
        4,
    )
    .unwrap();
    let n = grid.resolve_neighbours(Coord::new(0, 0), NeighbourhoodMode::EdgesOnly);
    let blocked: Vec<_> = n
        .iter()
        .filter(|nb| nb.resolution.is_blocked())
        .map(|nb| nb.direction)
        .collect();
    assert_eq!(blocked, vec![Direction::North]);
    let west = n.iter().find(|nb| nb.direction == Direction::West).unwrap();
    assert_eq!(west.resolution, Resolution::Wrapped(Coord::new(3, 0)));
}
