//! # terrain_pathfinding
//!
//! Pathfinding over grids of `"grass"` (passable) and `"ocean"` (impassable)
//! cells. Rows may have different lengths. A [Map] bundles a grid with a
//! validated start and end, and [Map::find_path] runs a
//! [depth-first search](https://en.wikipedia.org/wiki/Depth-first_search)
//! with backtracking that moves in the four cardinal directions, trying down,
//! right, up and left in that order. The result is deterministic but not
//! necessarily the shortest path.
//!
//! Paths are returned as a [CoordStack] which renders as
//! `"(r,c) -> (r,c) -> ... -> (r,c)"`.
//!
//! ```
//! use terrain_pathfinding::Map;
//!
//! let map = Map::from_labels([["grass", "grass", "grass"]], (0, 0), (0, 2)).unwrap();
//! let path = map.find_path().unwrap();
//! assert_eq!(path.to_string(), "(0,0) -> (0,1) -> (0,2)");
//! ```
//!
//! Connected components of the passable cells are computed when a [Map] is
//! built, so [Map::reachable] answers whether a path exists without searching.
pub mod coord;
pub mod coord_stack;
pub mod error;
pub mod map;
pub mod search;

pub use coord::{Coord, Direction};
pub use coord_stack::CoordStack;
pub use error::{MapError, StackError};
pub use map::{Grid, Map, Terrain};
pub use search::Search;

/// Label of a passable cell.
pub const GRASS: &str = "grass";
/// Label of an impassable cell.
pub const OCEAN: &str = "ocean";
/// Placed between coordinates when rendering a path.
pub const PATH_SEPARATOR: &str = " -> ";
