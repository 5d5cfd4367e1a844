/// Fuzzes the search by checking on many random jagged grids that a path is found exactly when
/// the end lies on the same connected component as the start, and that every path found is a
/// simple chain of adjacent grass cells from start to end.
use rand::prelude::*;
use std::collections::HashSet;
use terrain_pathfinding::{Coord, CoordStack, Grid, Map, Terrain};

fn random_grid(max_rows: usize, max_cols: usize, rng: &mut StdRng) -> Vec<Vec<Terrain>> {
    let rows = rng.gen_range(2..=max_rows);
    (0..rows)
        .map(|_| {
            let cols = rng.gen_range(1..=max_cols);
            (0..cols)
                .map(|_| {
                    if rng.gen_bool(0.4) {
                        Terrain::Ocean
                    } else {
                        Terrain::Grass
                    }
                })
                .collect()
        })
        .collect()
}

fn visualize_grid(map: &Map) {
    print!("{}", map);
}

fn assert_valid_path(map: &Map, path: &CoordStack) {
    assert_eq!(path.first(), Some(&map.start()));
    assert_eq!(path.last(), Some(&map.end()));
    for (a, b) in path.iter().zip(path.iter().skip(1)) {
        assert!(a.is_adjacent(b), "{a} and {b} are not adjacent");
    }
    let unique = path.iter().collect::<HashSet<&Coord>>();
    assert_eq!(unique.len(), path.len());
    assert!(path.iter().all(|c| map.grid().passable(*c)));
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 10000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let mut rows = random_grid(N, N, &mut rng);
        let start = Coord::new(0, 0);
        let last_row = rows.len() - 1;
        let end = Coord::new(last_row, rows[last_row].len() - 1);
        rows[start.row][start.col] = Terrain::Grass;
        rows[end.row][end.col] = Terrain::Grass;
        let map = Map::new(Grid::new(rows), start, end).unwrap();

        let reachable = map.reachable();
        let path = map.find_path();
        // Show the grid if the search and the components disagree
        if path.is_some() != reachable {
            visualize_grid(&map);
        }
        assert_eq!(path.is_some(), reachable);
        if let Some(path) = path {
            assert_valid_path(&map, &path);
        }
    }
}

#[test]
fn fuzz_deterministic() {
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..N_GRIDS {
        let mut rows = random_grid(8, 8, &mut rng);
        rows[0][0] = Terrain::Grass;
        let last_row = rows.len() - 1;
        let end = Coord::new(last_row, 0);
        rows[last_row][0] = Terrain::Grass;
        let map = Map::new(Grid::new(rows), Coord::new(0, 0), end).unwrap();
        let first = map.search();
        let second = map.search();
        assert_eq!(first.path(), second.path());
        assert_eq!(
            first.visited().collect::<Vec<_>>(),
            second.visited().collect::<Vec<_>>()
        );
    }
}
