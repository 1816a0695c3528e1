mod allele;
pub use allele::{Allele, AlleleError};

mod genotype;
pub use genotype::Genotype;

mod sex;
pub use sex::Sex;

mod organism;
pub use organism::{Organism, OrganismError, OrganismId, OrganismRecord, Parents};

mod gamete;
pub use gamete::{Gamete, Gametes};

mod pedigree;
pub use crate::pedigree::{Pedigree, PedigreeError};

#[cfg(test)]
mod tests;
