use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use crate::Allele;

/// Unphased diploid genotype of an organism, over every locus of the map.
/// 
/// Calls are stored as a flat vector of `2*M` allele calls, where `[2*i, 2*i+1]` is the
/// pair of calls at locus `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genotype(Vec<Option<Allele>>);

impl Genotype {
    /// Wrap a flat list of `2*M` allele calls. Length is checked by `Pedigree::new()`.
    #[must_use]
    pub fn new(calls: Vec<Option<Allele>>) -> Self {
        Self(calls)
    }

    /// Number of loci covered by this genotype.
    #[must_use]
    pub fn n_loci(&self) -> usize {
        self.0.len() / 2
    }

    /// Raw number of allele calls (`2*M`).
    #[must_use]
    pub fn n_calls(&self) -> usize {
        self.0.len()
    }

    /// Pair of allele calls at the given locus.
    /// # Panics
    /// - if `locus` is out of bounds.
    #[must_use]
    pub fn at(&self, locus: usize) -> [Option<Allele>; 2] {
        [self.0[2 * locus], self.0[2 * locus + 1]]
    }

    /// `true` if both calls at `locus` are equal.
    /// 
    /// Two missing calls compare equal, and are thus reported as homozygous.
    #[must_use]
    pub fn is_homozygous_at(&self, locus: usize) -> bool {
        let [first, second] = self.at(locus);
        first == second
    }

    /// Return the allele carried at `locus`, if and only if this locus is homozygous for a known allele.
    #[must_use]
    pub fn homozygous_allele(&self, locus: usize) -> Option<Allele> {
        match self.at(locus) {
            [Some(first), Some(second)] if first == second => Some(first),
            _ => None,
        }
    }

    /// Iterator over the indices of every heterozygous locus, in ascending order.
    pub fn heterozygous_loci(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.n_loci()).filter(|locus| !self.is_homozygous_at(*locus))
    }
}

impl Display for Genotype {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().map(|call| Allele::code(*call)).join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::genotype;

    #[test]
    fn n_loci() {
        let geno = genotype(&[1, 2, 1, 1, 0, 2]);
        assert_eq!(geno.n_loci(), 3);
        assert_eq!(geno.n_calls(), 6);
    }

    #[test]
    fn homozygosity() {
        let geno = genotype(&[1, 1, 1, 2, 2, 2, 0, 2]);
        assert!(geno.is_homozygous_at(0));
        assert!(!geno.is_homozygous_at(1));
        assert!(geno.is_homozygous_at(2));
        assert!(!geno.is_homozygous_at(3));
    }

    #[test]
    fn double_missing_call_is_homozygous() {
        let geno = genotype(&[0, 0]);
        assert!(geno.is_homozygous_at(0));
        assert_eq!(geno.homozygous_allele(0), None);
    }

    #[test]
    fn homozygous_allele() {
        let geno = genotype(&[2, 2, 1, 2, 1, 1]);
        assert_eq!(geno.homozygous_allele(0), Some(Allele::A2));
        assert_eq!(geno.homozygous_allele(1), None);
        assert_eq!(geno.homozygous_allele(2), Some(Allele::A1));
    }

    #[test]
    fn heterozygous_loci() {
        let geno = genotype(&[1, 2, 1, 1, 2, 1, 0, 0, 0, 1]);
        assert_eq!(geno.heterozygous_loci().collect::<Vec<_>>(), vec![0, 2, 4]);
    }

    #[test]
    fn display() {
        let geno = genotype(&[1, 2, 0, 2]);
        assert_eq!(geno.to_string(), "1 2 0 2");
    }
}
