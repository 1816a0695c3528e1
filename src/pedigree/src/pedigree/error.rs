use thiserror::Error;

use crate::OrganismId;

#[derive(Error, Debug)]
pub enum PedigreeError {
    #[error("Organism {child} references parent {parent}, which cannot be found within the pedigree")]
    DanglingParent{child: OrganismId, parent: OrganismId},

    #[error("Organism {0} is defined more than once")]
    DuplicateOrganism(OrganismId),

    #[error("Organism {id} carries {got} allele calls. Expected {expected} (2 per locus)")]
    InvalidGenotypeLength{id: OrganismId, expected: usize, got: usize},

    #[error("Organism {0} is its own ancestor. Generations must be acyclic")]
    Cycle(OrganismId),

    #[error("Organism {0} cannot be found within the pedigree")]
    MissingOrganism(OrganismId),

    #[error("Failed to infer the gametes of organism {0}")]
    GameteInference(OrganismId),
}
