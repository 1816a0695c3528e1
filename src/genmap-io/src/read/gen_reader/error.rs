use std::path::PathBuf;

use thiserror::Error;

use pedigree::AlleleError;

#[derive(Error, Debug)]
pub enum GenReaderError {
    #[error("Failed to open file {}", .0.display())]
    OpenFile(PathBuf, #[source] std::io::Error),

    #[error("Failed to read line {0}")]
    ReadLine(usize, #[source] std::io::Error),

    #[error("Unexpected end of file after line {line}: expected {expected}")]
    UnexpectedEof{line: usize, expected: &'static str},

    #[error("Line {line}: '{token}' is not a valid integer")]
    InvalidInteger{line: usize, token: String},

    #[error("Line {line}: expected {expected} locus name(s), found {got}")]
    LocusCount{line: usize, expected: usize, got: usize},

    #[error("Line {line}: expected an organism header of 4 fields (<id> <parent1> <parent2> <sex>), found {got}")]
    OrganismFields{line: usize, got: usize},

    #[error("Line {line}: expected {expected} allele codes (two per locus), found {got}")]
    GenotypeLength{line: usize, expected: usize, got: usize},

    #[error("Line {line}: invalid allele code")]
    InvalidAllele{line: usize, #[source] source: AlleleError},

    #[error("Line {line}: organism ids must be strictly positive. '0' is reserved for missing parents")]
    NullOrganismId{line: usize},
}
