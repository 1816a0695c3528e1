use thiserror::Error;

use pedigree::OrganismId;

/// Internal consistency faults raised while accumulating cis-trans counts.
/// 
/// These never stem from user input: they signal a defect in gamete inference.
#[derive(Error, Debug)]
pub enum CisTransError {
    #[error("Cannot determine which gamete of organism {child} was transmitted by its parent {parent}")]
    GameteOriginMismatch{parent: OrganismId, child: OrganismId},

    #[error("Failed to count the meioses of parent {0}")]
    CountMeioses(OrganismId),
}
