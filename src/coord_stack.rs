use crate::coord::Coord;
use crate::error::StackError;
use crate::PATH_SEPARATOR;
use core::fmt;
use itertools::Itertools;

/// LIFO sequence of [Coord]s. The search uses it both as the path under
/// construction and as its backtracking record: moving forward pushes, a dead
/// end pops.
///
/// Rendering walks from the bottom (first pushed) to the top, so a solved
/// stack reads as the path from start to end.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoordStack {
    coords: Vec<Coord>,
}

impl CoordStack {
    pub fn new() -> CoordStack {
        CoordStack { coords: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> CoordStack {
        CoordStack {
            coords: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, coord: Coord) {
        self.coords.push(coord);
    }

    /// Removes and returns the top coordinate. Popping an empty stack is a
    /// logic error on the caller's side and is reported as [StackError::Empty].
    pub fn pop(&mut self) -> Result<Coord, StackError> {
        self.coords.pop().ok_or(StackError::Empty)
    }

    /// The most recently pushed coordinate.
    pub fn peek(&self) -> Option<&Coord> {
        self.coords.last()
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn first(&self) -> Option<&Coord> {
        self.coords.first()
    }

    pub fn last(&self) -> Option<&Coord> {
        self.coords.last()
    }

    /// Iterates bottom to top, in push order.
    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.coords.iter()
    }

    pub fn to_vec(&self) -> Vec<Coord> {
        self.coords.clone()
    }

    pub fn into_vec(self) -> Vec<Coord> {
        self.coords
    }

    /// `(r,c) -> (r,c) -> ... -> (r,c)` in push order, or an empty string.
    pub fn render(&self) -> String {
        self.coords.iter().join(PATH_SEPARATOR)
    }
}

impl fmt::Display for CoordStack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<'a> IntoIterator for &'a CoordStack {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

impl IntoIterator for CoordStack {
    type Item = Coord;
    type IntoIter = std::vec::IntoIter<Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.into_iter()
    }
}

impl FromIterator<Coord> for CoordStack {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> CoordStack {
        CoordStack {
            coords: iter.into_iter().collect(),
        }
    }
}
