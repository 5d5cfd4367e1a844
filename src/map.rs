use crate::coord::{Coord, Direction};
use crate::error::MapError;
use crate::{GRASS, OCEAN};
use core::fmt;
use log::debug;
use petgraph::unionfind::UnionFind;
use std::str::FromStr;

/// The two kinds of cell a grid may contain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Terrain {
    /// Passable.
    Grass,
    /// Impassable.
    Ocean,
}

impl Terrain {
    pub fn passable(self) -> bool {
        self == Terrain::Grass
    }

    /// The canonical label, `"grass"` or `"ocean"`.
    pub fn label(self) -> &'static str {
        match self {
            Terrain::Grass => GRASS,
            Terrain::Ocean => OCEAN,
        }
    }
}

impl FromStr for Terrain {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Terrain, MapError> {
        match s {
            GRASS => Ok(Terrain::Grass),
            OCEAN => Ok(Terrain::Ocean),
            other => Err(MapError::invalid_value(format!(
                "cell label must be {GRASS:?} or {OCEAN:?}, got {other:?}"
            ))),
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rows of [Terrain]. Rows may have different lengths; a column index is only
/// meaningful within its own row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Terrain>>,
    /// Flat index of the first cell of each row, followed by the total cell count.
    row_offsets: Vec<usize>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Terrain>>) -> Grid {
        let mut row_offsets = Vec::with_capacity(rows.len() + 1);
        let mut total = 0;
        row_offsets.push(total);
        for row in &rows {
            total += row.len();
            row_offsets.push(total);
        }
        Grid { rows, row_offsets }
    }

    /// Builds a grid from string labels, rejecting anything other than
    /// `"grass"` and `"ocean"`.
    pub fn from_labels<R, S>(rows: R) -> Result<Grid, MapError>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|label| label.as_ref().parse::<Terrain>())
                    .collect::<Result<Vec<Terrain>, MapError>>()
            })
            .collect::<Result<Vec<Vec<Terrain>>, MapError>>()?;
        Ok(Grid::new(rows))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of row `row`, or [None] if there is no such row.
    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of cells over all rows.
    pub fn cell_count(&self) -> usize {
        self.row_offsets.last().copied().unwrap_or(0)
    }

    pub fn rows(&self) -> &[Vec<Terrain>] {
        &self.rows
    }

    pub fn get(&self, coord: Coord) -> Option<Terrain> {
        self.rows
            .get(coord.row)
            .and_then(|row| row.get(coord.col))
            .copied()
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        self.get(coord).is_some()
    }

    pub fn passable(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(Terrain::passable)
    }

    /// Dense index of `coord` over all cells in row-major order.
    pub fn get_ix(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord)
            .then(|| self.row_offsets[coord.row] + coord.col)
    }

    /// Checks that `coord` addresses an existing passable cell.
    pub fn check_coord(&self, coord: Coord) -> Result<(), MapError> {
        let row_len = self.row_len(coord.row);
        match row_len {
            Some(len) if coord.col < len => {}
            _ => {
                return Err(MapError::OutOfBounds {
                    coord,
                    rows: self.row_count(),
                    row_len,
                })
            }
        }
        if self.passable(coord) {
            Ok(())
        } else {
            Err(MapError::InvalidTerrain { coord })
        }
    }

    /// Unions every pair of 4-adjacent passable cells. Looking down and right
    /// from each cell is enough to cover every edge once.
    pub fn generate_components(&self) -> UnionFind<usize> {
        debug!("Generating connected components over {} cells", self.cell_count());
        let mut components = UnionFind::new(self.cell_count());
        for (r, row) in self.rows.iter().enumerate() {
            for (c, terrain) in row.iter().enumerate() {
                if !terrain.passable() {
                    continue;
                }
                let coord = Coord::new(r, c);
                let ix = self.row_offsets[r] + c;
                [Direction::Down, Direction::Right]
                    .into_iter()
                    .filter_map(|dir| coord.step(dir))
                    .filter(|n| self.passable(*n))
                    .filter_map(|n| self.get_ix(n))
                    .for_each(|n_ix| {
                        components.union(ix, n_ix);
                    });
            }
        }
        components
    }
}

/// A validated pathfinding problem: a grid plus passable, distinct start and
/// end cells. Connected components of the grid are computed on construction,
/// so reachability can be queried without searching.
#[derive(Clone, Debug)]
pub struct Map {
    grid: Grid,
    start: Coord,
    end: Coord,
    components: UnionFind<usize>,
}

impl Map {
    /// Validates `start` and then `end` against `grid`. Either may fail with
    /// [MapError::OutOfBounds] or [MapError::InvalidTerrain]; `end` also fails
    /// with [MapError::InvalidValue] if it equals `start`.
    pub fn new(grid: Grid, start: Coord, end: Coord) -> Result<Map, MapError> {
        grid.check_coord(start)?;
        grid.check_coord(end)?;
        if start == end {
            return Err(MapError::invalid_value(format!(
                "end {end} must differ from start"
            )));
        }
        let components = grid.generate_components();
        Ok(Map {
            grid,
            start,
            end,
            components,
        })
    }

    /// Convenience constructor from string labels and plain index pairs.
    pub fn from_labels<R, S>(
        rows: R,
        start: (usize, usize),
        end: (usize, usize),
    ) -> Result<Map, MapError>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Map::new(Grid::from_labels(rows)?, start.into(), end.into())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    /// Moves the start, validating it the same way [Map::new] does.
    pub fn set_start(&mut self, start: Coord) -> Result<(), MapError> {
        self.grid.check_coord(start)?;
        if start == self.end {
            return Err(MapError::invalid_value(format!(
                "start {start} must differ from end"
            )));
        }
        self.start = start;
        Ok(())
    }

    /// Moves the end, validating it the same way [Map::new] does.
    pub fn set_end(&mut self, end: Coord) -> Result<(), MapError> {
        self.grid.check_coord(end)?;
        if end == self.start {
            return Err(MapError::invalid_value(format!(
                "end {end} must differ from start"
            )));
        }
        self.end = end;
        Ok(())
    }

    /// Checks if `a` and `b` are passable cells on the same connected component.
    pub fn reachable_from(&self, a: Coord, b: Coord) -> bool {
        if !self.grid.passable(a) || !self.grid.passable(b) {
            return false;
        }
        match (self.grid.get_ix(a), self.grid.get_ix(b)) {
            (Some(a_ix), Some(b_ix)) => self.components.equiv(a_ix, b_ix),
            _ => false,
        }
    }

    /// Checks if the end is on the same connected component as the start.
    pub fn reachable(&self) -> bool {
        self.reachable_from(self.start, self.end)
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (r, row) in self.grid.rows().iter().enumerate() {
            let line = row
                .iter()
                .enumerate()
                .map(|(c, terrain)| {
                    let coord = Coord::new(r, c);
                    if coord == self.start {
                        'S'
                    } else if coord == self.end {
                        'E'
                    } else if terrain.passable() {
                        '.'
                    } else {
                        '#'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
