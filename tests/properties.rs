use gridlife::{community, Adjacency, Grid, Universe};
use proptest::prelude::*;

fn adjacencies() -> impl Strategy<Value = Adjacency> {
  prop_oneof![Just(Adjacency::Bounded), Just(Adjacency::Toroidal)]
}

fn grids() -> impl Strategy<Value = Grid> {
  (1_usize..12, 1_usize..12).prop_flat_map(|(rows, columns)| {
    proptest::collection::vec(any::<bool>(), rows * columns)
      .prop_map(move |cells| Grid::from_cells(rows, columns, cells).unwrap())
  })
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(200))]

  #[test]
  fn neighbors_in_range(grid in grids(), adjacency in adjacencies()) {
    let uni = Universe::from_grid(grid).with_adjacency(adjacency);
    for (row, col) in uni.grid().coords() {
      let n = uni.num_of_alive_neighbors(row, col).unwrap();
      prop_assert!(n <= 8);
    }
  }

  #[test]
  fn next_generation_is_deterministic(grid in grids(), adjacency in adjacencies()) {
    let mut a = Universe::from_grid(grid.clone()).with_adjacency(adjacency);
    let mut b = Universe::from_grid(grid).with_adjacency(adjacency);
    a.next_generation();
    b.next_generation();
    prop_assert_eq!(a.grid(), b.grid());
  }

  #[test]
  fn alive_count_matches_rescan(grid in grids(), n in 0_usize..6) {
    let mut uni = Universe::from_grid(grid);
    for _ in 0..n {
      uni.next_generation();
      let rescan = uni.grid().cells().iter().filter(|&&alive| alive).count();
      prop_assert_eq!(uni.total_alive_cells(), rescan);
    }
  }

  #[test]
  fn zero_generations_is_noop(grid in grids()) {
    let mut uni = Universe::from_grid(grid.clone());
    uni.next_generations(0);
    prop_assert_eq!(uni.grid(), &grid);
    prop_assert_eq!(uni.total_alive_cells(), grid.count_alive());
    prop_assert_eq!(uni.generation(), 0);
  }

  #[test]
  fn generations_compose(
    grid in grids(),
    adjacency in adjacencies(),
    n in 0_usize..5,
    m in 0_usize..5,
  ) {
    let mut split = Universe::from_grid(grid.clone()).with_adjacency(adjacency);
    split.next_generations(n);
    split.next_generations(m);

    let mut joined = Universe::from_grid(grid).with_adjacency(adjacency);
    joined.next_generations(n + m);

    prop_assert_eq!(split.grid(), joined.grid());
    prop_assert_eq!(split.total_alive_cells(), joined.total_alive_cells());
  }

  #[test]
  fn communities_partition_live_cells(grid in grids(), adjacency in adjacencies()) {
    let groups = community::communities(&grid, adjacency);
    prop_assert_eq!(groups.len(), community::num_of_communities(&grid, adjacency));

    let mut cells: Vec<_> = groups.into_iter().flatten().collect();
    cells.sort();
    let alive: Vec<_> = grid.alive_cells().collect();
    prop_assert_eq!(cells, alive);
  }

  #[test]
  fn toroidal_never_splits_bounded_communities(grid in grids()) {
    // the all-pairs predicate accepts every orthogonal contact and more
    let bounded = community::num_of_communities(&grid, Adjacency::Bounded);
    let toroidal = community::num_of_communities(&grid, Adjacency::Toroidal);
    prop_assert!(toroidal <= bounded);
  }
}
