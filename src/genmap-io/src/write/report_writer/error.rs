use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriterError {
    #[error("Failed to write report: inner writer returned an io error")]
    IOError(#[from] std::io::Error)
}
