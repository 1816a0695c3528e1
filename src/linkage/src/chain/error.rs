use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChainError {
    #[error("Locus index {locus} is out of range. Valid indices span [0, {n_loci}).")]
    LocusOutOfRange{locus: usize, n_loci: usize},

    #[error("Locus index {0} was specified more than once.")]
    DuplicateLocus(usize),
}
