use crate::error::MapError;
use core::fmt;
use grid_util::point::Point;
use std::str::FromStr;

/// A cell position on the grid, addressed as (row, column). Both components
/// are unsigned so a [Coord] can never point above or left of the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// The neighbouring coordinate one step in `dir`, or [None] if that step
    /// would leave the non-negative quadrant.
    pub fn step(self, dir: Direction) -> Option<Coord> {
        match dir {
            Direction::Down => self.row.checked_add(1).map(|row| Coord::new(row, self.col)),
            Direction::Right => self.col.checked_add(1).map(|col| Coord::new(self.row, col)),
            Direction::Up => self.row.checked_sub(1).map(|row| Coord::new(row, self.col)),
            Direction::Left => self.col.checked_sub(1).map(|col| Coord::new(self.row, col)),
        }
    }

    pub fn manhattan_distance(&self, other: &Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True if `other` differs by exactly one in exactly one axis.
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Coord {
        Coord::new(row, col)
    }
}

fn component(value: i64, axis: &str) -> Result<usize, MapError> {
    usize::try_from(value)
        .map_err(|_| MapError::invalid_value(format!("{axis} must be non-negative, got {value}")))
}

impl TryFrom<(i64, i64)> for Coord {
    type Error = MapError;

    fn try_from((row, col): (i64, i64)) -> Result<Coord, MapError> {
        Ok(Coord::new(component(row, "row")?, component(col, "column")?))
    }
}

impl TryFrom<&[i64]> for Coord {
    type Error = MapError;

    fn try_from(values: &[i64]) -> Result<Coord, MapError> {
        match values {
            [row, col] => Coord::try_from((*row, *col)),
            _ => Err(MapError::invalid_value(format!(
                "a coordinate has 2 components, got {}",
                values.len()
            ))),
        }
    }
}

/// Parses `(row,col)` as produced by `Display`, with or without the
/// parentheses and with optional whitespace around the components.
impl FromStr for Coord {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Coord, MapError> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);
        let parts = inner.split(',').map(str::trim).collect::<Vec<&str>>();
        if parts.len() != 2 {
            return Err(MapError::invalid_value(format!(
                "a coordinate has 2 components, got {} in {s:?}",
                parts.len()
            )));
        }
        let mut values = [0i64; 2];
        for (value, part) in values.iter_mut().zip(&parts) {
            *value = part.parse::<i64>().map_err(|_| {
                MapError::type_mismatch(format!("coordinate component {part:?} is not an integer"))
            })?;
        }
        Coord::try_from(&values[..])
    }
}

/// `x` is the column and `y` the row.
impl From<Coord> for Point {
    fn from(coord: Coord) -> Point {
        Point::new(coord.col as i32, coord.row as i32)
    }
}

impl TryFrom<Point> for Coord {
    type Error = MapError;

    fn try_from(point: Point) -> Result<Coord, MapError> {
        Coord::try_from((point.y as i64, point.x as i64))
    }
}

/// The four cardinal moves available to the search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Right,
    Up,
    Left,
}

impl Direction {
    /// Order in which the depth-first search tries neighbours. Fixing it makes
    /// the returned path deterministic.
    pub const SEARCH_ORDER: [Direction; 4] = [
        Direction::Down,
        Direction::Right,
        Direction::Up,
        Direction::Left,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_saturates_at_zero() {
        let origin = Coord::new(0, 0);
        assert_eq!(origin.step(Direction::Up), None);
        assert_eq!(origin.step(Direction::Left), None);
        assert_eq!(origin.step(Direction::Down), Some(Coord::new(1, 0)));
        assert_eq!(origin.step(Direction::Right), Some(Coord::new(0, 1)));
    }

    #[test]
    fn every_step_is_adjacent() {
        let c = Coord::new(3, 3);
        for dir in Direction::SEARCH_ORDER {
            let n = c.step(dir).unwrap();
            assert!(c.is_adjacent(&n));
        }
        assert!(!c.is_adjacent(&Coord::new(4, 4)));
        assert!(!c.is_adjacent(&c));
    }

    #[test]
    fn display_has_no_space() {
        assert_eq!(Coord::new(12, 4).to_string(), "(12,4)");
    }

    #[test]
    fn parse_accepts_rendered_form() {
        assert_eq!("(1,2)".parse::<Coord>(), Ok(Coord::new(1, 2)));
        assert_eq!(" 3 , 4 ".parse::<Coord>(), Ok(Coord::new(3, 4)));
    }

    #[test]
    fn parse_rejects_non_integer_with_type_mismatch() {
        assert!(matches!(
            "(1,dog)".parse::<Coord>(),
            Err(MapError::TypeMismatch { .. })
        ));
        assert!(matches!(
            "('0',1)".parse::<Coord>(),
            Err(MapError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn parse_rejects_bad_values() {
        assert!(matches!(
            "(1,2,3)".parse::<Coord>(),
            Err(MapError::InvalidValue { .. })
        ));
        assert!(matches!(
            "(-1,2)".parse::<Coord>(),
            Err(MapError::InvalidValue { .. })
        ));
    }

    #[test]
    fn untyped_components_are_checked() {
        assert_eq!(Coord::try_from((2i64, 5i64)), Ok(Coord::new(2, 5)));
        assert!(matches!(
            Coord::try_from((-9i64, 0i64)),
            Err(MapError::InvalidValue { .. })
        ));
        let triple: &[i64] = &[1, 5, 7];
        assert!(matches!(
            Coord::try_from(triple),
            Err(MapError::InvalidValue { .. })
        ));
    }

    #[test]
    fn point_interop_swaps_axes() {
        let c = Coord::new(2, 5);
        let p: Point = c.into();
        assert_eq!((p.x, p.y), (5, 2));
        assert_eq!(Coord::try_from(p), Ok(c));
        assert!(Coord::try_from(Point::new(-1, 0)).is_err());
    }
}
