//! Depth-first path search with backtracking.
//!
//! The search walks the grid from the start, always trying neighbours in
//! [Direction::SEARCH_ORDER]. Every cell entered is pushed onto a [CoordStack]
//! and recorded as visited; a cell whose four directions are exhausted is
//! popped again. Visited marks are never cleared within one search, so each
//! cell is entered at most once and the search is linear in the number of
//! cells.
//!
//! Instead of recursing, the search keeps one cursor per pushed passable cell
//! that records the next direction to try. The cursors and the path stack grow
//! and shrink together, which keeps memory on the heap for arbitrarily large
//! grids while preserving the exact order a recursive formulation would take.
use crate::coord::{Coord, Direction};
use crate::coord_stack::CoordStack;
use crate::error::StackError;
use crate::map::{Grid, Map};
use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use log::{debug, error, info, trace};

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Outcome of entering a single cell.
enum Step {
    /// Out of bounds, already visited or impassable; nothing was left on the stack.
    Rejected,
    /// Passable and not the goal; the cell stays on the stack.
    Entered,
    /// The goal; the stack holds the finished path.
    Goal,
}

/// Result of one search, including which cells it visited.
#[derive(Clone, Debug)]
pub struct Search {
    path: Option<CoordStack>,
    visited: FxIndexSet<Coord>,
}

impl Search {
    /// The path from start to end, if one was found.
    pub fn path(&self) -> Option<&CoordStack> {
        self.path.as_ref()
    }

    pub fn into_path(self) -> Option<CoordStack> {
        self.path
    }

    /// Every cell the search pushed, in the order it first reached them. This
    /// includes impassable cells that were pushed and immediately popped.
    pub fn visited(&self) -> impl Iterator<Item = &Coord> + '_ {
        self.visited.iter()
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

/// Per-query state. Lives only for the duration of [Map::search].
struct SearchContext<'a> {
    grid: &'a Grid,
    end: Coord,
    path: CoordStack,
    visited: FxIndexSet<Coord>,
    /// Next index into [Direction::SEARCH_ORDER] for each passable cell on `path`.
    cursors: Vec<usize>,
}

impl<'a> SearchContext<'a> {
    fn new(grid: &'a Grid, end: Coord) -> SearchContext<'a> {
        SearchContext {
            grid,
            end,
            path: CoordStack::new(),
            visited: FxIndexSet::default(),
            cursors: Vec::new(),
        }
    }

    fn enter(&mut self, coord: Coord) -> Result<Step, StackError> {
        let Some(terrain) = self.grid.get(coord) else {
            return Ok(Step::Rejected);
        };
        if !self.visited.insert(coord) {
            return Ok(Step::Rejected);
        }
        self.path.push(coord);
        trace!("Entering {}", coord);
        if coord == self.end {
            return Ok(Step::Goal);
        }
        if !terrain.passable() {
            self.path.pop()?;
            return Ok(Step::Rejected);
        }
        self.cursors.push(0);
        Ok(Step::Entered)
    }

    fn run(&mut self, start: Coord) -> Result<bool, StackError> {
        match self.enter(start)? {
            Step::Goal => return Ok(true),
            Step::Rejected => return Ok(false),
            Step::Entered => {}
        }
        while let Some(cursor) = self.cursors.last_mut() {
            let current = *self.path.peek().ok_or(StackError::Empty)?;
            match Direction::SEARCH_ORDER.get(*cursor) {
                Some(&dir) => {
                    *cursor += 1;
                    if let Some(next) = current.step(dir) {
                        if let Step::Goal = self.enter(next)? {
                            return Ok(true);
                        }
                    }
                }
                None => {
                    self.cursors.pop();
                    let dead_end = self.path.pop()?;
                    debug!("Backtracking from {}", dead_end);
                }
            }
        }
        Ok(false)
    }
}

impl Map {
    /// Runs the depth-first search and reports the path together with the
    /// cells visited along the way.
    pub fn search(&self) -> Search {
        if self.grid().is_empty() {
            info!("Grid has no rows, no path from {} to {}", self.start(), self.end());
            return Search {
                path: None,
                visited: FxIndexSet::default(),
            };
        }
        info!("Searching for a path from {} to {}", self.start(), self.end());
        let mut ctx = SearchContext::new(self.grid(), self.end());
        let found = match ctx.run(self.start()) {
            Ok(found) => found,
            Err(err) => {
                error!("Path stack corrupted during search: {}", err);
                panic!("depth-first search popped past its start cell: {err}");
            }
        };
        if found {
            info!(
                "Found a path of {} cells after visiting {} cells",
                ctx.path.len(),
                ctx.visited.len()
            );
        } else {
            info!(
                "No path from {} to {} after visiting {} cells",
                self.start(),
                self.end(),
                ctx.visited.len()
            );
        }
        Search {
            path: found.then_some(ctx.path),
            visited: ctx.visited,
        }
    }

    /// Finds one path from start to end through grass cells, or [None] if the
    /// search exhausts every cell it can reach. The path is deterministic but
    /// not necessarily the shortest.
    pub fn find_path(&self) -> Option<CoordStack> {
        self.search().into_path()
    }
}
