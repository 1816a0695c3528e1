use std::fmt::{self, Display, Formatter};

use located_error::prelude::*;
use log::{debug, info, warn};
use pedigree::Pedigree;

pub mod cistrans;
pub mod fraction;
pub mod chain;
pub mod cluster;
pub mod insert;

pub use cistrans::{CisTransTable, CisTransError, Counts};
pub use fraction::{FractionMatrix, NO_DATA};
pub use chain::{Chain, ChainError};

#[cfg(test)]
mod tests;

/// Width of the locus name column, within a linkage map report.
pub const LOCUS_NAME_WIDTH: usize = 12;

/// Runtime options of the linkage map inference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkageConfig {
    /// Replace origin-tracked counts with parity-based counts, when the former underestimate recombination.
    pub statistical_correction: bool,
    /// User-provided locus order. Bypasses greedy clustering when set.
    pub known_order: Option<Vec<usize>>,
}

impl Default for LinkageConfig {
    fn default() -> Self {
        Self { statistical_correction: true, known_order: None }
    }
}

/// Inferred linkage map: an ordering of every locus, along with the pairwise statistics it was derived from.
#[derive(Debug, Clone)]
pub struct LinkageMap {
    loci     : Vec<String>,
    chain    : Chain,
    counts   : CisTransTable,
    fractions: FractionMatrix,
}

impl LinkageMap {
    #[must_use]
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    #[must_use]
    pub fn counts(&self) -> &CisTransTable {
        &self.counts
    }

    #[must_use]
    pub fn fractions(&self) -> &FractionMatrix {
        &self.fractions
    }

    #[must_use]
    pub fn loci(&self) -> &[String] {
        &self.loci
    }

    /// Consume the map, and return its `(chain, fractions)` pair.
    #[must_use]
    pub fn into_parts(self) -> (Chain, FractionMatrix) {
        (self.chain, self.fractions)
    }

    /// Consecutive entries of the map: each locus along with its recombination fraction to the next one.
    pub fn junctions(&self) -> impl Iterator<Item = Junction<'_>> {
        self.chain.iter().enumerate().map(|(k, &locus)| Junction {
            name    : &self.loci[locus],
            fraction: self.chain.get(k + 1).map(|&next| self.fractions.get(locus, next)),
        })
    }
}

/// A single entry of a linkage map. `fraction` is `None` for the last locus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Junction<'a> {
    pub name    : &'a str,
    pub fraction: Option<f64>,
}

impl Display for Junction<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.fraction {
            None                    => write!(f, "{}", self.name),
            Some(r) if r >= NO_DATA => write!(f, "{: <width$} NA", self.name, width = LOCUS_NAME_WIDTH),
            Some(r)                 => write!(f, "{: <width$} {r:.4}", self.name, width = LOCUS_NAME_WIDTH),
        }
    }
}

/// Infer a linkage map from a pedigree with revealed gametes.
/// 
/// 1. Accumulate cis-trans counts, and derive pairwise recombination fractions.
/// 2. Order loci, either from the user-provided order, or through greedy clustering.
/// 3. Insert every remaining locus next to its closest chain member.
/// 
/// # Errors
/// - if cis-trans counting fails (see [`CisTransError`])
/// - if `config.known_order` is invalid (see [`ChainError`])
pub fn build_linkage_map(pedigree: &Pedigree, config: &LinkageConfig) -> Result<LinkageMap> {
    let n_loci = pedigree.n_loci();
    let counts = CisTransTable::compute(pedigree, config.statistical_correction)
        .loc("While computing cis-trans counts")?;
    let fractions = FractionMatrix::from_cistrans(&counts);

    let mut chain = match &config.known_order {
        Some(order) => {
            info!("Using the provided locus order: {order:?}");
            Chain::from_known_order(order.clone(), n_loci)?
        },
        None => cluster::form_cluster(&fractions),
    };
    debug!("Initial chain: {chain}");

    let missing = n_loci - chain.len();
    if missing > 0 {
        info!("Inserting {missing} unclustered loci into the chain.");
    }
    insert::insert_missing(&mut chain, &fractions);

    if !chain.is_permutation(n_loci) {
        warn!("Inferred chain does not span every locus exactly once: {chain}");
    }
    info!("Final locus order: {chain}");

    Ok(LinkageMap { loci: pedigree.loci().to_vec(), chain, counts, fractions })
}
