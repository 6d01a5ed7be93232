//! Polyominoes, represented as a sorted list of grid cells.

use std::collections::VecDeque;

use hashbrown::HashSet;
use serde::{Serialize, Serializer};

mod expander;
mod rotations;

/// A single unit square on the grid.
///
/// Cells order by `x` first and `y` second, which is the order used
/// for normalized and canonical shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four cells sharing an edge with this one.
    pub fn neighbours(self) -> [Cell; 4] {
        let Cell { x, y } = self;
        [
            Cell::new(x + 1, y),
            Cell::new(x, y + 1),
            Cell::new(x - 1, y),
            Cell::new(x, y - 1),
        ]
    }

    /// Rotate this cell by 90 degrees around the origin, mapping
    /// `(x, y)` to `(-y, x)`.
    pub fn rot90(self) -> Self {
        Cell::new(-self.y, self.x)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Cell::new(x, y)
    }
}

/// Cells are written as a `[x, y]` pair.
impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.x, self.y].serialize(serializer)
    }
}

/// The bounding box of a polyomino.
///
/// Stores the length of each side, so the monomino has a size of `(1, 1)`.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct Dim {
    pub x: usize,
    pub y: usize,
}

/// A polyomino.
///
/// The cells are always normalized: translated so that the smallest `x`
/// and the smallest `y` are both `0`, and sorted ascending. Two
/// polyominoes covering the same cells up to translation are therefore
/// equal, and comparing them compares their cell sequences
/// lexicographically.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Polyomino {
    cells: Vec<Cell>,
}

impl Polyomino {
    /// Create a new [`Polyomino`] out of `cells`, normalizing them.
    ///
    /// Duplicate cells are collapsed. Connectivity is not checked, see
    /// [`Polyomino::is_connected`].
    pub fn new<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let mut cells: Vec<Cell> = cells.into_iter().map(Into::into).collect();
        Self::normalize(&mut cells);
        Self { cells }
    }

    /// The polyomino consisting of the single cell `(0, 0)`.
    pub fn monomino() -> Self {
        Self {
            cells: vec![Cell::new(0, 0)],
        }
    }

    fn normalize(cells: &mut Vec<Cell>) {
        let min_x = cells.iter().map(|c| c.x).min().unwrap_or(0);
        let min_y = cells.iter().map(|c| c.y).min().unwrap_or(0);

        cells.iter_mut().for_each(|c| {
            c.x -= min_x;
            c.y -= min_y;
        });

        cells.sort_unstable();
        cells.dedup();
    }

    /// The amount of cells in this polyomino.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// The cells of this polyomino, in ascending order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get the dimensions of the bounding box of this polyomino.
    pub fn dims(&self) -> Dim {
        let x = self.cells.iter().map(|c| c.x + 1).max().unwrap_or(0);
        let y = self.cells.iter().map(|c| c.y + 1).max().unwrap_or(0);

        Dim {
            x: x as usize,
            y: y as usize,
        }
    }

    /// Returns whether `cell` is part of this polyomino.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.binary_search(&cell).is_ok()
    }

    /// Create a new [`Polyomino`], representing `self` rotated by 90 degrees
    /// and normalized again.
    pub fn rotate(&self) -> Polyomino {
        Polyomino::new(self.cells.iter().map(|c| c.rot90()))
    }

    /// Find the canonical form of this polyomino: the smallest of its four
    /// rotations.
    pub fn canonical_form(&self) -> Polyomino {
        self.all_rotations().min().unwrap_or_else(|| self.clone())
    }

    /// Returns whether this polyomino already is in canonical form.
    pub fn is_canonical(&self) -> bool {
        self.all_rotations().skip(1).all(|rotation| *self <= rotation)
    }

    /// Returns whether every cell can be reached from every other cell
    /// by stepping between edge-adjacent cells of this polyomino.
    pub fn is_connected(&self) -> bool {
        let Some(&start) = self.cells.first() else {
            return false;
        };

        let mut seen = HashSet::with_capacity(self.cells.len());
        let mut to_explore = VecDeque::new();

        seen.insert(start);
        to_explore.push_back(start);

        while let Some(cell) = to_explore.pop_front() {
            for next in cell.neighbours() {
                if self.contains(next) && seen.insert(next) {
                    to_explore.push_back(next);
                }
            }
        }

        seen.len() == self.cells.len()
    }

    /// All cells that share an edge with this polyomino, but are not part
    /// of it, in ascending order.
    pub fn neighbours(&self) -> Vec<Cell> {
        let mut boundary: Vec<Cell> = self
            .cells
            .iter()
            .flat_map(|c| c.neighbours())
            .filter(|c| !self.contains(*c))
            .collect();

        boundary.sort_unstable();
        boundary.dedup();
        boundary
    }
}

impl From<Vec<(i32, i32)>> for Polyomino {
    fn from(value: Vec<(i32, i32)>) -> Self {
        Polyomino::new(value)
    }
}

impl<const N: usize> From<[(i32, i32); N]> for Polyomino {
    fn from(value: [(i32, i32); N]) -> Self {
        Polyomino::new(value)
    }
}

/// Draw the polyomino as ASCII art, with `#` for present cells. Each row
/// is one `y` value, with `x` increasing from left to right.
impl core::fmt::Display for Polyomino {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Dim { x: dim_x, y: dim_y } = self.dims();
        let mut xy = String::with_capacity((dim_x + 1) * dim_y);

        for y in 0..dim_y as i32 {
            if y != 0 {
                xy.push('\n');
            }

            for x in 0..dim_x as i32 {
                if self.contains(Cell::new(x, y)) {
                    xy.push('#');
                } else {
                    xy.push(' ');
                }
            }
        }

        write!(f, "{}", xy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s_tetromino() -> Polyomino {
        Polyomino::from([(1, 0), (2, 0), (0, 1), (1, 1)])
    }

    #[test]
    pub fn normalizes_on_creation() {
        let shifted = Polyomino::from([(7, -3), (5, -2), (6, -2), (6, -3)]);

        assert_eq!(shifted, s_tetromino());
        assert_eq!(
            shifted.cells(),
            &[
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(1, 1),
                Cell::new(2, 0)
            ]
        );
    }

    #[test]
    pub fn duplicate_cells_collapse() {
        let poly = Polyomino::from([(0, 0), (0, 1), (0, 0)]);
        assert_eq!(poly.size(), 2);
    }

    #[test]
    pub fn rotation_direction() {
        assert_eq!(Cell::new(2, 1).rot90(), Cell::new(-1, 2));

        // A horizontal domino turns vertical.
        let domino = Polyomino::from([(0, 0), (1, 0)]);
        assert_eq!(domino.rotate(), Polyomino::from([(0, 0), (0, 1)]));
    }

    #[test]
    pub fn four_rotations_return_home() {
        let poly = s_tetromino();
        let rotated = poly.rotate().rotate().rotate().rotate();
        assert_eq!(rotated, poly);
    }

    #[test]
    pub fn canonical_is_smallest_rotation() {
        let l = Polyomino::from([(0, 0), (1, 0), (2, 0), (0, 1)]);
        let canonical = l.canonical_form();

        assert_eq!(canonical, Polyomino::from([(0, 0), (0, 1), (0, 2), (1, 2)]));
        assert!(canonical.is_canonical());
        assert!(!l.is_canonical());
        assert!(l.all_rotations().all(|r| r >= canonical));
    }

    #[test]
    pub fn monomino_is_canonical() {
        let mono = Polyomino::monomino();
        assert!(mono.is_canonical());
        assert_eq!(mono.canonical_form(), mono);
        assert_eq!(mono.dims(), Dim { x: 1, y: 1 });
    }

    #[test]
    pub fn connectivity() {
        assert!(s_tetromino().is_connected());
        assert!(Polyomino::monomino().is_connected());

        let diagonal = Polyomino::from([(0, 0), (1, 1)]);
        assert!(!diagonal.is_connected());

        let split = Polyomino::from([(0, 0), (0, 1), (0, 3)]);
        assert!(!split.is_connected());
    }

    #[test]
    pub fn boundary_cells() {
        let domino = Polyomino::from([(0, 0), (1, 0)]);

        assert_eq!(
            domino.neighbours(),
            vec![
                Cell::new(-1, 0),
                Cell::new(0, -1),
                Cell::new(0, 1),
                Cell::new(1, -1),
                Cell::new(1, 1),
                Cell::new(2, 0),
            ]
        );
    }

    #[test]
    pub fn ascii_view() {
        let t = Polyomino::from([(0, 0), (0, 1), (0, 2), (1, 1)]);
        assert_eq!(t.to_string(), "# \n##\n# ");
    }

    #[test]
    pub fn serializes_as_pairs() {
        let domino = Polyomino::from([(0, 0), (0, 1)]);
        let json = serde_json::to_string(&domino).unwrap();
        assert_eq!(json, "[[0,0],[0,1]]");
    }
}
