//! This module implements an iterator that provides all N + 1 expansions
//! for a polyomino of N.

use super::{Cell, Polyomino};

#[derive(Clone)]
struct ExpansionIterator<'a> {
    base: &'a Polyomino,
    boundary: std::vec::IntoIter<Cell>,
}

impl Iterator for ExpansionIterator<'_> {
    type Item = Polyomino;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.boundary.next()?;

        let cells = self.base.cells().iter().copied().chain(Some(cell));
        Some(Polyomino::new(cells))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.boundary.size_hint()
    }
}

impl ExactSizeIterator for ExpansionIterator<'_> {}

impl Polyomino {
    /// Obtain an iterator over every polyomino that results from adding
    /// one edge-adjacent cell to `self`.
    ///
    /// The expansions are normalized, but not canonical.
    pub fn expand(&self) -> impl Iterator<Item = Polyomino> + ExactSizeIterator + Clone + '_ {
        ExpansionIterator {
            base: self,
            boundary: self.neighbours().into_iter(),
        }
    }
}

#[test]
pub fn monomino_expands_to_four_dominoes() {
    let expansions: Vec<_> = Polyomino::monomino().expand().collect();

    assert_eq!(expansions.len(), 4);
    assert!(expansions.iter().all(|p| p.size() == 2 && p.is_connected()));

    let canonical: std::collections::HashSet<_> =
        expansions.iter().map(Polyomino::canonical_form).collect();
    assert_eq!(canonical.len(), 1);
}

#[test]
pub fn expansions_are_connected() {
    let l = Polyomino::from([(0, 0), (0, 1), (1, 1)]);

    for expansion in l.expand() {
        assert_eq!(expansion.size(), 4);
        assert!(expansion.is_connected());
    }

    // 7 distinct boundary cells around the L tromino.
    assert_eq!(l.expand().len(), 7);
}
