//! Enumeration of all canonical polyominoes of a given size, one level
//! at a time.

use std::collections::BTreeMap;

use hashbrown::HashSet;
use indicatif::ProgressBar;
use parking_lot::RwLock;
use rayon::prelude::*;

use crate::{
    error::{check_size, Result},
    polyomino::Polyomino,
};

/// Obtain a sorted list of the canonical forms of all unique expansions of
/// the items in `from_set`.
///
/// `progress_bar` is advanced once per item of `from_set`.
pub fn unique_expansions<'a, I>(progress_bar: &ProgressBar, from_set: I) -> Vec<Polyomino>
where
    I: Iterator<Item = &'a Polyomino>,
{
    let mut this_level = HashSet::new();

    for value in from_set {
        for expansion in value.expand() {
            // Skip expansions that are already in the list.
            if this_level.contains(&expansion) {
                continue;
            }

            this_level.insert(expansion.canonical_form());
        }

        progress_bar.inc(1);
    }

    let mut this_level: Vec<_> = this_level.into_iter().collect();
    this_level.sort_unstable();
    this_level
}

/// The parallel version of [`unique_expansions`].
///
/// `from_set` is split into one chunk per available CPU, and all chunks
/// insert into a shared set. The result is identical to that of
/// [`unique_expansions`].
pub fn unique_expansions_rayon(progress_bar: &ProgressBar, from_set: &[Polyomino]) -> Vec<Polyomino> {
    if from_set.is_empty() {
        return Vec::new();
    }

    let available_parallelism = num_cpus::get();
    let chunk_size = (from_set.len() / available_parallelism) + 1;

    let this_level = RwLock::new(HashSet::new());

    from_set.par_chunks(chunk_size).for_each(|chunk| {
        for value in chunk {
            for expansion in value.expand() {
                // Skip expansions that are already in the list.
                if this_level.read().contains(&expansion) {
                    continue;
                }

                let canonical = expansion.canonical_form();

                let missing = !this_level.read().contains(&canonical);

                if missing {
                    this_level.write().insert(canonical);
                }
            }

            progress_bar.inc(1);
        }
    });

    let mut this_level: Vec<_> = this_level.into_inner().into_par_iter().collect();
    this_level.par_sort_unstable();
    this_level
}

/// A memoizing enumerator.
///
/// Every level is expanded from the monomino and kept, so that asking for
/// several sizes in one process only expands each level once.
#[derive(Debug, Clone)]
pub struct Enumerator {
    levels: BTreeMap<usize, Vec<Polyomino>>,
    parallel: bool,
}

impl Default for Enumerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Enumerator {
    /// Create a new single-threaded [`Enumerator`] that only knows the
    /// monomino.
    pub fn new() -> Self {
        let mut levels = BTreeMap::new();
        levels.insert(1, vec![Polyomino::monomino()]);

        Self {
            levels,
            parallel: false,
        }
    }

    /// Expand levels using [`unique_expansions_rayon`] if `parallel` is set.
    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The sizes for which the polyominoes are currently known.
    pub fn known_sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.levels.keys().copied()
    }

    /// Get all canonical polyominoes of size `n`, in ascending order.
    pub fn enumerate(&mut self, n: usize) -> Result<&[Polyomino]> {
        self.enumerate_observed(n, |_, _| ProgressBar::hidden(), |_, _, _| {})
    }

    /// Get all canonical polyominoes of size `n`, in ascending order.
    ///
    /// Every level that has to be computed gets its own progress bar, made by
    /// `make_bar(from_n, len)` with `len` being the amount of polyominoes of
    /// size `from_n` that are expanded. Once a level of size `n` is complete,
    /// `on_level(n, level, bar)` is called.
    pub fn enumerate_observed<B, L>(
        &mut self,
        n: usize,
        mut make_bar: B,
        mut on_level: L,
    ) -> Result<&[Polyomino]>
    where
        B: FnMut(usize, usize) -> ProgressBar,
        L: FnMut(usize, &[Polyomino], &ProgressBar),
    {
        let n = check_size(n)?;

        // Level 1 is always present, so there always is a known level <= n.
        let start = self.levels.range(..=n).next_back().map(|(k, _)| *k).unwrap_or(1);

        for i in start..n {
            let current = self.levels.get(&i).map(Vec::as_slice).unwrap_or_default();
            let bar = make_bar(i, current.len());

            let next = if self.parallel {
                unique_expansions_rayon(&bar, current)
            } else {
                unique_expansions(&bar, current.iter())
            };

            on_level(i + 1, &next, &bar);
            self.levels.insert(i + 1, next);
        }

        Ok(self.levels.get(&n).map(Vec::as_slice).unwrap_or_default())
    }
}

/// Get all canonical polyominoes of size `n`, in ascending order.
///
/// Returns [`EnumerateError::InvalidArgument`](crate::EnumerateError::InvalidArgument)
/// if `n` is zero.
pub fn enumerate(n: usize) -> Result<Vec<Polyomino>> {
    let mut enumerator = Enumerator::new();
    let level = enumerator.enumerate(n)?;
    Ok(level.to_vec())
}

#[test]
pub fn serial_and_parallel_agree() {
    let bar = ProgressBar::hidden();
    let tetrominoes = enumerate(4).unwrap();

    let serial = unique_expansions(&bar, tetrominoes.iter());
    let parallel = unique_expansions_rayon(&bar, &tetrominoes);

    assert_eq!(serial.len(), 18);
    assert_eq!(serial, parallel);
}

#[test]
pub fn empty_level_expands_to_nothing() {
    let bar = ProgressBar::hidden();
    assert!(unique_expansions(&bar, [].iter()).is_empty());
    assert!(unique_expansions_rayon(&bar, &[]).is_empty());
}

#[test]
pub fn memoized_levels_are_reused() {
    let mut enumerator = Enumerator::new();
    enumerator.enumerate(5).unwrap();

    assert_eq!(enumerator.known_sizes().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);

    let mut expanded = Vec::new();
    let level = enumerator
        .enumerate_observed(
            6,
            |from, _| {
                expanded.push(from);
                ProgressBar::hidden()
            },
            |_, _, _| {},
        )
        .unwrap();

    assert_eq!(level.len(), 60);
    assert_eq!(expanded, vec![5]);
}

#[test]
pub fn every_level_is_expanded_from_the_monomino() {
    let mut enumerator = Enumerator::new();

    let mut reported = Vec::new();
    enumerator
        .enumerate_observed(
            5,
            |_, _| ProgressBar::hidden(),
            |n, level, _| reported.push((n, level.len())),
        )
        .unwrap();

    assert_eq!(reported, vec![(2, 1), (3, 2), (4, 7), (5, 18)]);
}

#[test]
pub fn separate_enumerators_agree() {
    let mut warm = Enumerator::new();
    warm.enumerate(7).unwrap();

    for n in 1..=7 {
        let fresh = enumerate(n).unwrap();
        assert_eq!(warm.enumerate(n).unwrap(), fresh.as_slice());
        assert!(fresh.iter().all(|p| p.size() == n && p.is_canonical() && p.is_connected()));
        assert!(fresh.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
pub fn parallel_enumerator() {
    let mut enumerator = Enumerator::new().with_parallelism(true);
    assert_eq!(enumerator.enumerate(6).unwrap(), enumerate(6).unwrap().as_slice());
}
