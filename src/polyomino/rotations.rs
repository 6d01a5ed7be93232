//! This module implements an iterator that yields all of the rotations
//! of a polyomino.

use std::iter::FusedIterator;

use super::Polyomino;

struct RotationIter {
    count: usize,
    current: Polyomino,
}

impl ExactSizeIterator for RotationIter {}

impl FusedIterator for RotationIter {}

impl Iterator for RotationIter {
    type Item = Polyomino;

    fn next(&mut self) -> Option<Self::Item> {
        match self.count {
            0 => {
                self.count += 1;
                Some(self.current.clone())
            }
            1..=3 => {
                self.count += 1;
                self.current = self.current.rotate();
                Some(self.current.clone())
            }
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = 4 - self.count;
        (left, Some(left))
    }
}

impl Polyomino {
    /// Obtain an iterator yielding all four rotations of `self`, starting
    /// with `self` and turning 90 degrees at a time. Every rotation is
    /// normalized.
    pub fn all_rotations(&self) -> impl Iterator<Item = Polyomino> + ExactSizeIterator {
        RotationIter {
            count: 0,
            current: self.clone(),
        }
    }
}

#[test]
pub fn correct_amount_of_rotations() {
    let poly = Polyomino::from([(0, 0), (0, 1), (1, 1)]);

    let rotations = poly.all_rotations();
    assert_eq!(rotations.len(), 4);
    assert_eq!(rotations.count(), 4);
}

/// Shapes with rotational symmetry repeat themselves, but still yield
/// four items.
#[test]
pub fn symmetric_shapes_repeat() {
    let square = Polyomino::from([(0, 0), (0, 1), (1, 0), (1, 1)]);
    assert!(square.all_rotations().all(|r| r == square));

    let line = Polyomino::from([(0, 0), (1, 0), (2, 0)]);
    let distinct: std::collections::HashSet<_> = line.all_rotations().collect();
    assert_eq!(distinct.len(), 2);
}
