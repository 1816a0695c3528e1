use thiserror::Error;

use super::OrganismId;

#[derive(Debug, Error)]
pub enum OrganismError {
    #[error("Attempting to access the gametes of organism {0}, before they were inferred.")]
    MissingGametes(OrganismId),
}
