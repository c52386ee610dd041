use thiserror::Error;

/// Errors from configuring or loading the CPU.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown CPU variant: {0}")]
    UnknownVariant(String),
    #[error("program of {len} bytes does not fit at ${origin:04X}")]
    ProgramTooLarge { origin: u16, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
