use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown domain: {0}")]
    UnknownDomain(String),
}
