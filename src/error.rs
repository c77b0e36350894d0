use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Row error: {0}")]
    Row(#[from] RowError),
}

/// Failure to turn one input row into a processed siman. These are logged and
/// skipped by the batch driver, never propagated.
#[derive(Error, Debug)]
pub enum RowError {
    #[error("field `{0}` is missing")]
    MissingField(&'static str),

    #[error("field `id` is blank")]
    BlankId,

    #[error("could not decode row: {0}")]
    Decode(#[from] csv::Error),
}
