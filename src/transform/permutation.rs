//! Index permutations
//!
//! Convention throughout the crate: `map[destination] = source`. Applying
//! `[2, 0, 1]` to `[x, y, z]` yields `[z, x, y]`.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::{Result, SatZkError};
use crate::formula::CLAUSE_WIDTH;

/// Permutation of the three literal positions of one clause
pub type LiteralPermutation = [usize; CLAUSE_WIDTH];

/// True iff `map` contains every index in `0..map.len()` exactly once
pub fn is_permutation(map: &[usize]) -> bool {
    let mut seen = vec![false; map.len()];
    for &src in map {
        match seen.get_mut(src) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

/// Permutation of `0..n`, stored destination → source
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    map: Vec<usize>,
}

impl Permutation {
    pub fn identity(n: usize) -> Self {
        Self { map: (0..n).collect() }
    }

    /// Uniformly random permutation of `0..n`
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut map: Vec<usize> = (0..n).collect();
        map.shuffle(rng);
        Self { map }
    }

    /// Wrap a raw mapping without checking it. Received mappings are
    /// checked with [`Permutation::is_valid`] before use.
    pub fn from_mapping(map: Vec<usize>) -> Self {
        Self { map }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.map
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        is_permutation(&self.map)
    }

    /// `out[i] = items[map[i]]`
    pub fn apply<T: Clone>(&self, items: &[T]) -> Result<Vec<T>> {
        self.check_len(items.len())?;
        self.map
            .iter()
            .map(|&src| {
                items.get(src).cloned().ok_or_else(|| {
                    SatZkError::InvalidParameter(format!("permutation index {} out of range", src))
                })
            })
            .collect()
    }

    /// Inverse of [`Permutation::apply`]: `out[map[i]] = items[i]`
    pub fn invert<T: Clone>(&self, items: &[T]) -> Result<Vec<T>> {
        self.check_len(items.len())?;
        if !self.is_valid() {
            return Err(SatZkError::InvalidParameter(
                "cannot invert a mapping that is not a permutation".to_string(),
            ));
        }
        let mut out: Vec<Option<T>> = vec![None; items.len()];
        for (dst, &src) in self.map.iter().enumerate() {
            out[src] = Some(items[dst].clone());
        }
        Ok(out.into_iter().flatten().collect())
    }

    fn check_len(&self, len: usize) -> Result<()> {
        if self.map.len() != len {
            return Err(SatZkError::InvalidParameter(format!(
                "permutation over {} elements applied to {}",
                self.map.len(),
                len
            )));
        }
        Ok(())
    }
}
