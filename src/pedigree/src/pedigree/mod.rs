use std::collections::{BTreeMap, VecDeque};

use located_error::prelude::*;
use log::{debug, info, trace};

use crate::{Gametes, Organism, OrganismId, OrganismRecord};

mod error;
pub use error::PedigreeError;

/// A multi-generation pedigree, with genotyped organisms.
/// # Fields:
/// - `loci`     : Display names of every locus, in input order. `loci.len()` = `M`
/// - `organisms`: BTreeMap containing all members of the pedigree (founders and offspring)
///                - Key  : (OrganismId) - Identifier of the organism
///                - Value: (Organism)   - Organism, with its resolved parent/children ids and gametes.
/// 
/// Parent and child relationships are stored as ids, and resolved through `self.organisms`.
#[derive(Debug, Clone)]
pub struct Pedigree {
    loci     : Vec<String>,
    organisms: BTreeMap<OrganismId, Organism>,
}

impl Pedigree {
    /// Build a pedigree from a set of raw organism records, link every organism with its parents,
    /// and infer the gametes of every organism.
    /// 
    /// # Arguments
    /// - `loci`   : names of every locus.
    /// - `records`: raw organism entries. Parents may be declared after their offspring.
    /// 
    /// # Errors
    /// - `PedigreeError::DuplicateOrganism` if an id is used twice.
    /// - `PedigreeError::InvalidGenotypeLength` if a genotype does not carry exactly `2 * loci.len()` calls.
    /// - `PedigreeError::DanglingParent` if a parent id cannot be found.
    /// - `PedigreeError::Cycle` if an organism turns out to be its own ancestor.
    pub fn new(loci: Vec<String>, records: Vec<OrganismRecord>) -> Result<Self> {
        use PedigreeError::{DuplicateOrganism, InvalidGenotypeLength};
        let expected = 2 * loci.len();

        // ---- Index organisms by id.
        let mut organisms = BTreeMap::new();
        for record in records {
            let id = record.id;
            if record.genotype.len() != expected {
                return Err(InvalidGenotypeLength{id, expected, got: record.genotype.len()})
                    .loc("While indexing pedigree organisms")
            }
            if organisms.insert(id, Organism::from(record)).is_some() {
                return Err(DuplicateOrganism(id)).loc("While indexing pedigree organisms")
            }
        }

        let mut pedigree = Self { loci, organisms };
        pedigree.link_parents().loc("While linking organisms to their parents")?;
        pedigree.check_acyclic()?;
        pedigree.reveal_gametes()?;

        info!("Loaded {} organisms, genotyped over {} loci.", pedigree.len(), pedigree.n_loci());
        Ok(pedigree)
    }

    /// Append every offspring to the children list of its parents.
    fn link_parents(&mut self) -> Result<()> {
        use PedigreeError::DanglingParent;
        let edges: Vec<(OrganismId, OrganismId)> = self.organisms.values()
            .filter_map(|child| child.parents().map(|parents| (child.id(), parents)))
            .flat_map(|(child, parents)| parents.iter().map(move |parent| (parent, child)))
            .collect();

        for (parent, child) in edges {
            self.organisms.get_mut(&parent)
                .ok_or(DanglingParent{child, parent})
                .loc("While registering offspring")?
                .add_child(child);
        }
        Ok(())
    }

    /// Ensure generations are acyclic, using Kahn's algorithm over parent -> child edges.
    /// Both edges of a self-fertilized offspring are counted.
    fn check_acyclic(&self) -> Result<()> {
        let mut remaining_parents: BTreeMap<OrganismId, usize> = self.organisms.values()
            .map(|organism| (organism.id(), organism.parents().map_or(0, |parents| parents.iter().count())))
            .collect();

        let mut queue: VecDeque<OrganismId> = remaining_parents.iter()
            .filter_map(|(id, count)| (*count == 0).then_some(*id))
            .collect();

        let mut visited = 0;
        while let Some(id) = queue.pop_front() {
            visited += 1;
            for child in self.get(id)?.children() {
                let count = remaining_parents.get_mut(child).with_loc(|| PedigreeError::MissingOrganism(*child))?;
                *count -= 1;
                if *count == 0 {
                    queue.push_back(*child);
                }
            }
        }

        if visited < self.organisms.len() {
            let culprit = remaining_parents.iter()
                .find_map(|(id, count)| (*count > 0).then_some(*id))
                .with_loc(|| "Failed to locate the organism causing a cycle")?;
            return Err(PedigreeError::Cycle(culprit)).loc("While checking pedigree generations")
        }
        Ok(())
    }

    /// Infer and cache the pair of gametes of every organism.
    fn reveal_gametes(&mut self) -> Result<()> {
        let gametes = self.organisms.values()
            .map(|organism| {
                let parents = self.parents_of(organism)
                    .with_loc(|| PedigreeError::GameteInference(organism.id()))?;
                let gametes = Gametes::infer(organism, &parents);
                trace!("Gametes of {}: {} | {}", organism.id(), gametes[0], gametes[1]);
                Ok((organism.id(), gametes))
            })
            .collect::<Result<Vec<(OrganismId, Gametes)>>>()?;

        for (id, gametes) in gametes {
            self.organisms.get_mut(&id)
                .with_loc(|| PedigreeError::MissingOrganism(id))?
                .set_gametes(gametes);
        }
        debug!("Inferred gametes for {} organisms", self.organisms.len());
        Ok(())
    }

    /// Number of loci (`M`).
    #[must_use]
    pub fn n_loci(&self) -> usize {
        self.loci.len()
    }

    /// Names of every locus, in input order.
    #[must_use]
    pub fn loci(&self) -> &[String] {
        &self.loci
    }

    /// Number of organisms within this pedigree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.organisms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.organisms.is_empty()
    }

    /// Access an organism through its id.
    /// # Errors
    /// - `PedigreeError::MissingOrganism` if `id` cannot be found.
    pub fn get(&self, id: OrganismId) -> Result<&Organism> {
        self.organisms.get(&id).with_loc(|| PedigreeError::MissingOrganism(id))
    }

    /// Iterate over all organisms, in ascending id order.
    pub fn organisms(&self) -> impl Iterator<Item = &Organism> {
        self.organisms.values()
    }

    /// Iterate over every organism having at least one offspring.
    pub fn parents(&self) -> impl Iterator<Item = &Organism> {
        self.organisms.values().filter(|organism| organism.has_children())
    }

    /// Resolve the parents of `organism`, first parent first. Empty for founders.
    /// # Errors
    /// - if any of the parents cannot be found.
    pub fn parents_of(&self, organism: &Organism) -> Result<Vec<&Organism>> {
        organism.parents()
            .map(|parents| parents.iter().map(|id| self.get(id)).collect())
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    /// Resolve the offspring of `organism`.
    /// # Errors
    /// - if any of the children cannot be found.
    pub fn children_of(&self, organism: &Organism) -> Result<Vec<&Organism>> {
        organism.children().iter().map(|id| self.get(*id)).collect()
    }
}
