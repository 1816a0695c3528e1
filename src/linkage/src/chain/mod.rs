use std::{
    fmt::{self, Display, Formatter},
    ops::Deref,
};

use itertools::Itertools;
use located_error::prelude::*;

mod error;
pub use error::ChainError;

/// Ordered list of distinct locus indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chain(Vec<usize>);

impl Chain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a user-provided locus order.
    /// 
    /// # Errors
    /// - `ChainError::LocusOutOfRange` if any index is `>= n_loci`
    /// - `ChainError::DuplicateLocus` if any index is repeated.
    pub fn from_known_order(order: Vec<usize>, n_loci: usize) -> Result<Self> {
        let mut seen = vec![false; n_loci];
        for &locus in &order {
            match seen.get_mut(locus) {
                None              => return Err(ChainError::LocusOutOfRange { locus, n_loci }).loc("Invalid locus order"),
                Some(true)        => return Err(ChainError::DuplicateLocus(locus)).loc("Invalid locus order"),
                Some(flag)        => *flag = true,
            }
        }
        Ok(Self(order))
    }

    /// Loci within `0..n_loci` which are absent from this chain, in ascending order.
    #[must_use]
    pub fn missing_loci(&self, n_loci: usize) -> Vec<usize> {
        (0..n_loci).filter(|locus| !self.0.contains(locus)).collect()
    }

    /// `true` if this chain contains every locus in `0..n_loci`, exactly once.
    #[must_use]
    pub fn is_permutation(&self, n_loci: usize) -> bool {
        self.0.len() == n_loci && self.0.iter().sorted_unstable().copied().eq(0..n_loci)
    }

    pub(crate) fn push(&mut self, locus: usize) {
        self.0.push(locus);
    }

    pub(crate) fn insert(&mut self, position: usize, locus: usize) {
        self.0.insert(position, locus);
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

impl Deref for Chain {
    type Target = [usize];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<usize>> for Chain {
    fn from(loci: Vec<usize>) -> Self {
        Self(loci)
    }
}

impl Display for Chain {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}
