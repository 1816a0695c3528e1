use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError{
    #[error("Invalid slice or value format for --{arg}. [{err}]")]
    ParseArg{arg: String, err: String},

    #[error("Invalid range '{0}' for --{1}: the range start must not exceed its end")]
    DecreasingRange(String, &'static str),

    #[error("File {0} does not exist")]
    MissingFile(String),

    #[error("{0} is not a file")]
    NotAFile(String),

    #[error("Failed to serialize command line arguments")]
    SerializeArgs(#[source] serde_yaml::Error),
}
