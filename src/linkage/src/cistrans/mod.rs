use std::{
    fmt::{self, Display, Formatter},
    ops::AddAssign,
};

use itertools::Itertools;
use located_error::prelude::*;
use log::{debug, info, trace};
use pedigree::{Gamete, Gametes, Organism, Pedigree};

mod error;
pub use error::CisTransError;

/// The statistical correction only applies to parents having strictly more offspring than this.
pub const CORRECTION_MIN_OFFSPRING: usize = 4;

/// Recombinant / non-recombinant meiosis counts, for a given pair of loci.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub recombinant   : u32,
    pub nonrecombinant: u32,
}

impl Counts {
    /// Bookkeeping value of a locus against itself. Not an observation.
    pub const DIAGONAL: Self = Self { recombinant: 0, nonrecombinant: 1 };

    #[must_use]
    pub fn new(recombinant: u32, nonrecombinant: u32) -> Self {
        Self { recombinant, nonrecombinant }
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.recombinant + self.nonrecombinant
    }

    /// `true` if no informative meiosis was ever observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Observed recombination fraction. `None` if no meiosis was observed.
    #[must_use]
    pub fn fraction(&self) -> Option<f64> {
        match self.is_empty() {
            true  => None,
            false => Some(f64::from(self.recombinant) / f64::from(self.total())),
        }
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, rhs: Self) {
        self.recombinant    += rhs.recombinant;
        self.nonrecombinant += rhs.nonrecombinant;
    }
}

impl Display for Counts {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.recombinant, self.nonrecombinant)
    }
}

/// Phase of a transmitted gamete, relative to the transmitting parent's own gametes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {Recombinant, NonRecombinant}

/// Per-parent tally of the meioses observed over a single pair of loci.
/// - `type1` / `type2` : parity-based split (equal vs. different alleles at both loci).
/// - `counts`          : origin-tracked (reliable) split.
#[derive(Debug, Default)]
struct MeiosisTally {
    type1 : u32,
    type2 : u32,
    counts: Counts,
}

impl MeiosisTally {
    /// Prefer the parity-based estimate whenever the origin-tracked one underestimates recombination,
    /// and the number of offspring is large enough to trust the former.
    fn corrected(self, n_offspring: usize, statistical_correction: bool) -> Counts {
        let (min, max) = (self.type1.min(self.type2), self.type1.max(self.type2));
        if statistical_correction && n_offspring > CORRECTION_MIN_OFFSPRING && self.counts.recombinant < min {
            trace!("Correcting {} to {}", self.counts, Counts::new(min, max));
            return Counts::new(min, max)
        }
        self.counts
    }
}

/// Upper-triangular table of (recombinant, non-recombinant) counts, for every pair of loci.
/// 
/// Only pairs `(i, j)` with `i < j` are stored. `get()` mirrors the lower triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct CisTransTable {
    n_loci: usize,
    counts: Vec<Counts>,
}

impl CisTransTable {
    /// Instantiate a blank table, for `n_loci` loci.
    #[must_use]
    pub fn new(n_loci: usize) -> Self {
        Self { n_loci, counts: vec![Counts::default(); n_loci * n_loci] }
    }

    /// Accumulate the cis-trans counts of every informative meiosis found within `pedigree`.
    /// 
    /// # Arguments:
    /// - `pedigree`              : pedigree, with inferred gametes.
    /// - `statistical_correction`: whether or not the parity-based correction should be applied
    ///                             (see `CORRECTION_MIN_OFFSPRING`).
    /// 
    /// # Errors
    /// - `CisTransError::GameteOriginMismatch` if an offspring carries no gamete attributed to its parent.
    pub fn compute(pedigree: &Pedigree, statistical_correction: bool) -> Result<Self> {
        let mut table = Self::new(pedigree.n_loci());
        let mut n_parents = 0;
        for parent in pedigree.parents() {
            let heterozygous: Vec<usize> = parent.genotype().heterozygous_loci().collect();
            if heterozygous.len() < 2 { // Homozygous parents carry no linkage information.
                continue
            }
            n_parents += 1;
            table.add_parent(pedigree, parent, &heterozygous, statistical_correction)
                .with_loc(|| CisTransError::CountMeioses(parent.id()))?;
        }
        info!("Accumulated cis-trans counts over {n_parents} informative parent(s).");
        Ok(table)
    }

    /// Accumulate the meioses of a single parent, over every pair of loci for which it is heterozygous.
    fn add_parent(&mut self, pedigree: &Pedigree, parent: &Organism, heterozygous: &[usize], statistical_correction: bool) -> Result<()> {
        let reference   = parent.gametes()?;
        let children    = pedigree.children_of(parent)?;
        let transmitted = children.iter()
            .map(|child| transmitted_gamete(parent, child))
            .collect::<Result<Vec<&Gamete>>>()?;

        debug!("Counting meioses of parent {} over {} offspring(s)", parent.id(), children.len());
        for (&i, &j) in heterozygous.iter().tuple_combinations() {
            let mut tally = MeiosisTally::default();
            for gamete in &transmitted {
                let (Some(allele_i), Some(allele_j)) = (gamete.allele(i), gamete.allele(j)) else {
                    continue // Uninformative meiosis for these loci.
                };

                match allele_i == allele_j {
                    true  => tally.type1 += 1,
                    false => tally.type2 += 1,
                }

                match phase(gamete, reference, i, j) {
                    Phase::Recombinant    => tally.counts.recombinant += 1,
                    Phase::NonRecombinant => tally.counts.nonrecombinant += 1,
                }
            }
            let counts = tally.corrected(children.len(), statistical_correction);
            self.add(i, j, counts);
        }
        Ok(())
    }

    fn add(&mut self, i: usize, j: usize, counts: Counts) {
        let (i, j) = (i.min(j), i.max(j));
        self.counts[i * self.n_loci + j] += counts;
    }

    /// Counts of the pair `(i, j)`. The table is read symmetrically, and the diagonal returns `Counts::DIAGONAL`.
    /// # Panics
    /// - if `i` or `j` is out of bounds.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Counts {
        match i.cmp(&j) {
            std::cmp::Ordering::Equal   => Counts::DIAGONAL,
            std::cmp::Ordering::Less    => self.counts[i * self.n_loci + j],
            std::cmp::Ordering::Greater => self.counts[j * self.n_loci + i],
        }
    }

    #[must_use]
    pub fn n_loci(&self) -> usize {
        self.n_loci
    }
}

/// Find the gamete `child` received from `parent`.
fn transmitted_gamete<'a>(parent: &Organism, child: &'a Organism) -> Result<&'a Gamete> {
    use CisTransError::GameteOriginMismatch;
    child.gametes()?
        .transmitted_by(parent.id())
        .with_loc(|| GameteOriginMismatch{parent: parent.id(), child: child.id()})
}

/// A transmitted gamete is recombinant over `(i, j)` if it carries the allele of one parental gamete at `i`,
/// and the allele of the other parental gamete at `j`.
fn phase(transmitted: &Gamete, reference: &Gametes, i: usize, j: usize) -> Phase {
    let [first, second] = &**reference;
    let crossed = |a: &Gamete, b: &Gamete| transmitted.allele(i) == a.allele(i) && transmitted.allele(j) == b.allele(j);
    match crossed(first, second) || crossed(second, first) {
        true  => Phase::Recombinant,
        false => Phase::NonRecombinant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::{oid, record, loci, correction_pedigree};
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_fraction() {
        assert_eq!(Counts::default().fraction(), None);
        assert_eq!(Counts::new(1, 3).fraction(), Some(0.25));
        assert_eq!(Counts::DIAGONAL.fraction(), Some(0.0));
    }

    #[test]
    fn counts_add_assign() {
        let mut counts = Counts::new(1, 2);
        counts += Counts::new(3, 4);
        assert_eq!(counts, Counts::new(4, 6));
        assert_eq!(counts.to_string(), "(4, 6)");
    }

    #[test]
    fn table_is_read_symmetrically() {
        let mut table = CisTransTable::new(3);
        table.add(2, 0, Counts::new(1, 1));
        table.add(0, 2, Counts::new(0, 2));
        assert_eq!(table.get(0, 2), Counts::new(1, 3));
        assert_eq!(table.get(2, 0), Counts::new(1, 3));
        assert_eq!(table.get(1, 1), Counts::DIAGONAL);
        assert!(table.get(0, 1).is_empty());
    }

    #[test]
    fn scenario_counts() -> Result<()> {
        let pedigree = crate::tests::common::scenario_pedigree()?;
        let table = CisTransTable::compute(&pedigree, true)?;
        assert_eq!(table.get(0, 1), Counts::new(0, 2));
        Ok(())
    }

    #[test]
    fn phase_classification() -> Result<()> {
        // Parent 2 is in coupling phase: [1 1] | [2 2]
        let pedigree = Pedigree::new(loci(2), vec![
            record(1, [0, 0], &[1, 1, 1, 1]),
            record(2, [1, 0], &[1, 2, 1, 2]),
            record(3, [0, 0], &[2, 2, 2, 2]),
            record(4, [2, 3], &[1, 2, 2, 2]), // receives [1 2] -> recombinant
            record(5, [2, 3], &[2, 2, 1, 2]), // receives [2 1] -> recombinant
            record(6, [2, 3], &[1, 2, 1, 2]), // receives [1 1] -> non-recombinant
        ])?;
        let table = CisTransTable::compute(&pedigree, false)?;
        assert_eq!(table.get(0, 1), Counts::new(2, 1));
        Ok(())
    }

    #[test]
    fn homozygous_parents_are_uninformative() -> Result<()> {
        let pedigree = Pedigree::new(loci(3), vec![
            record(1, [0, 0], &[1, 1, 1, 2, 2, 2]),
            record(2, [0, 0], &[1, 2, 1, 1, 1, 1]),
            record(3, [1, 2], &[1, 2, 1, 2, 1, 2]),
            record(4, [1, 2], &[1, 1, 2, 1, 2, 2]),
        ])?;
        let table = CisTransTable::compute(&pedigree, true)?;
        for (i, j) in [(0, 1), (0, 2), (1, 2)] {
            assert!(table.get(i, j).is_empty(), "Expected no data for ({i}, {j})");
        }
        Ok(())
    }

    #[test]
    fn unresolved_offspring_are_skipped() -> Result<()> {
        // Neither parent is homozygous at locus 1: offspring 3 remains unresolved there.
        let pedigree = Pedigree::new(loci(2), vec![
            record(1, [0, 0], &[1, 2, 1, 2]),
            record(2, [0, 0], &[1, 2, 1, 2]),
            record(3, [1, 2], &[1, 2, 1, 2]),
        ])?;
        let table = CisTransTable::compute(&pedigree, false)?;
        assert!(table.get(0, 1).is_empty());
        Ok(())
    }

    #[test]
    fn missing_offspring_calls_are_counted() -> Result<()> {
        // Offspring 3 carries no call at locus 0, but homozygous parent 1 still resolves it.
        let pedigree = Pedigree::new(loci(2), vec![
            record(1, [0, 0], &[2, 2, 2, 2]),
            record(2, [0, 0], &[1, 2, 1, 2]),
            record(3, [1, 2], &[0, 0, 1, 2]),
        ])?;
        let table = CisTransTable::compute(&pedigree, false)?;
        assert_eq!(table.get(0, 1), Counts::new(0, 1));
        Ok(())
    }

    #[test]
    fn self_fertilization_counts_two_meioses() -> Result<()> {
        // Parent 2 is in coupling phase [1 1] | [2 2], and self-fertilizes into offspring 3.
        let pedigree = Pedigree::new(loci(2), vec![
            record(1, [0, 0], &[1, 1, 1, 1]),
            record(2, [1, 0], &[1, 2, 1, 2]),
            record(3, [2, 2], &[1, 1, 2, 2]),
        ])?;
        let table = CisTransTable::compute(&pedigree, false)?;
        assert_eq!(table.get(0, 1), Counts::new(2, 0));
        Ok(())
    }

    #[test]
    fn statistical_correction() -> Result<()> {
        let pedigree = correction_pedigree()?;
        let corrected = CisTransTable::compute(&pedigree, true)?;
        assert_eq!(corrected.get(0, 1), Counts::new(3, 3));

        let reliable = CisTransTable::compute(&pedigree, false)?;
        assert_eq!(reliable.get(0, 1), Counts::new(0, 6));

        for table in [corrected, reliable] {
            assert!(table.get(0, 2).is_empty());
            assert!(table.get(1, 2).is_empty());
        }
        Ok(())
    }

    #[test]
    fn correction_requires_enough_offspring() {
        let tally = MeiosisTally { type1: 2, type2: 2, counts: Counts::new(0, 4) };
        assert_eq!(tally.corrected(CORRECTION_MIN_OFFSPRING, true), Counts::new(0, 4));
        let tally = MeiosisTally { type1: 2, type2: 3, counts: Counts::new(0, 5) };
        assert_eq!(tally.corrected(CORRECTION_MIN_OFFSPRING + 1, true), Counts::new(2, 3));
    }

    #[test]
    fn correction_requires_underestimation() {
        let tally = MeiosisTally { type1: 4, type2: 2, counts: Counts::new(2, 4) };
        assert_eq!(tally.corrected(6, true), Counts::new(2, 4));
    }

    #[test]
    fn accumulates_over_parents() -> Result<()> {
        // Two independent coupling-phase parents, each with a single recombinant offspring.
        let pedigree = Pedigree::new(loci(2), vec![
            record(1, [0, 0], &[1, 1, 1, 1]),
            record(2, [1, 0], &[1, 2, 1, 2]),
            record(3, [1, 0], &[1, 2, 1, 2]),
            record(4, [0, 0], &[2, 2, 2, 2]),
            record(5, [2, 4], &[1, 2, 2, 2]),
            record(6, [3, 4], &[2, 2, 1, 2]),
            record(7, [3, 4], &[2, 2, 2, 2]),
        ])?;
        let table = CisTransTable::compute(&pedigree, false)?;
        assert_eq!(table.get(0, 1), Counts::new(2, 1));
        assert_eq!(pedigree.get(oid(4))?.children().len(), 3);
        Ok(())
    }
}
