use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlleleError {
    #[error("Invalid allele code '{0}'. Expected one of 0 (missing), 1 or 2")]
    InvalidCode(String),
}
