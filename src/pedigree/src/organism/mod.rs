use std::{
    fmt::{self, Display, Formatter},
    num::NonZeroU32,
};

use located_error::prelude::*;

use crate::{Allele, Gametes, Genotype, Sex};

mod parents;
pub use parents::Parents;

mod error;
pub use error::OrganismError;

/// Space padding lengths used for `std::fmt::Display` of Organism
const ID_DISPLAY_LEN     : usize = 8;  // Space padding of `self.id`
const PARENTS_DISPLAY_LEN: usize = 15; // Space padding of `self.parents`

/// Unique, non-zero identifier of an organism within a pedigree.
/// 
/// The value `0` is reserved by the input format to signal a missing parent, and thus
/// never makes a valid id. See `OrganismId::new()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrganismId(NonZeroU32);

impl OrganismId {
    /// Returns `None` if `raw == 0`
    #[must_use]
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    #[must_use]
    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl Display for OrganismId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw organism entry, as parsed from a pedigree file.
/// # Fields:
/// - `id`      : identifier of the organism.
/// - `parents` : raw parent fields. `None` if the parent is unknown (coded as `0`).
/// - `sex`     : declared sex of the organism.
/// - `genotype`: flat list of `2*M` allele calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganismRecord {
    pub id      : OrganismId,
    pub parents : [Option<OrganismId>; 2],
    pub sex     : Sex,
    pub genotype: Vec<Option<Allele>>,
}

/// Pedigree organism.
/// # Fields:
/// - `id`      : Unique identifier of the organism.
/// - `sex`     : Declared sex. Not used during computations.
/// - `genotype`: Unphased genotype of the organism, over all loci.
/// - `parents` : Ids of the organism's parents. `None` if the organism is a founder.
/// - `children`: Ids of the organism's offspring. This is a back-reference list, which is only
///               ever used for traversal.
/// - `gametes` : Pair of transmissible gametes. Inferred once by `Pedigree::new()`, and never
///               mutated afterwards.
#[derive(Debug, Clone)]
pub struct Organism {
    id      : OrganismId,
    sex     : Sex,
    genotype: Genotype,
    parents : Option<Parents>,
    children: Vec<OrganismId>,
    gametes : Option<Gametes>,
}

impl Display for Organism {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let parents = match &self.parents {
            None => "None".to_string(),
            Some(parents) => format!("{parents}")
        };
        write!(f, "id: {: <ID_DISPLAY_LEN$} - parents: {: <PARENTS_DISPLAY_LEN$} - sex: {}", self.id.to_string(), parents, self.sex)
    }
}

impl PartialEq for Organism {
    fn eq(&self, other: &Organism) -> bool {
        self.id == other.id
    }
}

impl Eq for Organism {}

impl From<OrganismRecord> for Organism {
    fn from(record: OrganismRecord) -> Self {
        Self {
            id      : record.id,
            sex     : record.sex,
            genotype: Genotype::new(record.genotype),
            parents : Parents::from_ids(record.parents),
            children: Vec::new(),
            gametes : None,
        }
    }
}

impl Organism {
    #[must_use]
    pub fn id(&self) -> OrganismId {
        self.id
    }

    #[must_use]
    pub fn sex(&self) -> Sex {
        self.sex
    }

    #[must_use]
    pub fn genotype(&self) -> &Genotype {
        &self.genotype
    }

    #[must_use]
    pub fn parents(&self) -> Option<&Parents> {
        self.parents.as_ref()
    }

    #[must_use]
    pub fn children(&self) -> &[OrganismId] {
        &self.children
    }

    /// Check whether or not this organism is a founder. Returns `true` if `self.parents == None`
    #[inline]
    #[must_use]
    pub fn is_founder(&self) -> bool {
        self.parents.is_none()
    }

    #[inline]
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// `true` iff both allele calls of this organism are equal at `locus`. See `Genotype::is_homozygous_at()`
    #[inline]
    #[must_use]
    pub fn is_homozygous_at(&self, locus: usize) -> bool {
        self.genotype.is_homozygous_at(locus)
    }

    /// Return the pair of gametes of this organism.
    /// # Errors
    /// - If gametes were not yet inferred.
    pub fn gametes(&self) -> Result<&Gametes> {
        self.gametes.as_ref().with_loc(|| OrganismError::MissingGametes(self.id))
    }

    /// Register an offspring, once per parent slot: a self-fertilized offspring gets registered twice,
    /// as it stems from two meioses of this organism.
    pub(crate) fn add_child(&mut self, child: OrganismId) {
        self.children.push(child);
    }

    pub(crate) fn set_gametes(&mut self, gametes: Gametes) {
        self.gametes = Some(gametes);
    }
}
