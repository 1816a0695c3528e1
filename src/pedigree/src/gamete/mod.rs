use std::{
    fmt::{self, Display, Formatter},
    ops::Deref,
};

use itertools::Itertools;

use crate::{Allele, Organism, OrganismId};

/// One of the two haploid allele sets an organism may transmit to its offspring.
/// # Fields:
/// - `alleles`: one slot per locus. `None` if the allele at that locus could not be resolved.
/// - `origin` : id of the parent this gamete is attributed to. `None` if unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gamete {
    alleles: Vec<Option<Allele>>,
    origin : Option<OrganismId>,
}

impl Gamete {
    #[must_use]
    pub fn new(alleles: Vec<Option<Allele>>, origin: Option<OrganismId>) -> Self {
        Self { alleles, origin }
    }

    /// Allele carried at `locus`. `None` if unresolved.
    /// # Panics
    /// - if `locus` is out of bounds.
    #[must_use]
    pub fn allele(&self, locus: usize) -> Option<Allele> {
        self.alleles[locus]
    }

    #[must_use]
    pub fn alleles(&self) -> &[Option<Allele>] {
        &self.alleles
    }

    #[must_use]
    pub fn origin(&self) -> Option<OrganismId> {
        self.origin
    }

    #[must_use]
    pub fn is_resolved_at(&self, locus: usize) -> bool {
        self.alleles[locus].is_some()
    }
}

impl Display for Gamete {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let origin = self.origin.map_or_else(|| "?".to_string(), |id| id.to_string());
        write!(f, "[{}] (from: {origin})", self.alleles.iter().map(|a| Allele::code(*a)).join(" "))
    }
}

/// The two complementary gametes of an organism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gametes([Gamete; 2]);

impl Deref for Gametes {
    type Target = [Gamete; 2];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Gametes {
    #[must_use]
    pub fn new(gametes: [Gamete; 2]) -> Self {
        Self(gametes)
    }

    /// Infer the two transmissible gametes of `organism`, given its parents.
    /// 
    /// # Arguments:
    /// - `organism`: target organism.
    /// - `parents` : direct parents of the organism, first parent first. Empty if the organism is a founder.
    /// 
    /// # Behavior:
    /// - Homozygous loci are trivially resolved within both gametes.
    /// - Heterozygous and missing loci remain unresolved for founders.
    /// - For offspring, an unresolved locus is resolved as soon as one of the parents is homozygous for a
    ///   known allele at that position: the gamete attributed to that parent receives its allele, while the
    ///   other gamete receives the complement. The first parent is always queried first.
    /// - Origin tags which remain unset at the end of the process default to their parent (first gamete to the
    ///   first parent, second gamete to the second parent), as a homozygous offspring of a heterozygous parent
    ///   still is informative.
    /// 
    /// Only the parents' genotypes are ever queried, never their gametes: the order in which organisms get
    /// processed is thus irrelevant.
    #[must_use]
    pub fn infer(organism: &Organism, parents: &[&Organism]) -> Self {
        let genotype = organism.genotype();
        let n_loci   = genotype.n_loci();

        // ---- Homozygous loci are shared by both gametes. Everything else starts unresolved.
        let init: Vec<Option<Allele>> = (0..n_loci).map(|locus| genotype.homozygous_allele(locus)).collect();
        let mut alleles = [init.clone(), init];
        let mut origins: [Option<OrganismId>; 2] = [None, None];

        let (first, second) = match parents {
            [] => {
                let [alleles_0, alleles_1] = alleles;
                return Self([Gamete::new(alleles_0, None), Gamete::new(alleles_1, None)])
            },
            [first]             => (*first, None),
            [first, second, ..] => (*first, Some(*second)),
        };
        let second_id = second.map(Organism::id);

        // ---- Missing/missing loci count as homozygous, yet still start unresolved: they are filled in here too.
        let unresolved: Vec<usize> = (0..n_loci).filter(|locus| alleles[0][*locus].is_none()).collect();
        for locus in unresolved {
            if let Some(allele) = first.genotype().homozygous_allele(locus) {
                alleles[0][locus] = Some(allele);
                alleles[1][locus] = Some(allele.complement());
                origins[0] = Some(first.id());
                if second_id.is_some() {
                    origins[1] = second_id;
                }
            } else if let Some(allele) = second.and_then(|p| p.genotype().homozygous_allele(locus)) {
                alleles[1][locus] = Some(allele);
                alleles[0][locus] = Some(allele.complement());
                origins[1] = second_id;
                origins[0] = Some(first.id());
            }
        }

        // ---- Default attribution, even when no locus proved informative.
        if origins[0].is_none() {
            origins[0] = Some(first.id());
        }
        if origins[1].is_none() {
            origins[1] = second_id;
        }

        let [alleles_0, alleles_1] = alleles;
        Self([Gamete::new(alleles_0, origins[0]), Gamete::new(alleles_1, origins[1])])
    }

    /// Return the gamete this organism received from `parent`.
    /// 
    /// If both gametes are attributed to `parent` (self-fertilization), the second one is returned.
    #[must_use]
    pub fn transmitted_by(&self, parent: OrganismId) -> Option<&Gamete> {
        self.0.iter().rev().find(|gamete| gamete.origin() == Some(parent))
    }
}
