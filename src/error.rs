use thiserror::Error;

/// Errors raised by the event mapper itself. Store and decoding failures travel as plain
/// `anyhow::Error`s.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MappingError {
    /// A position event referenced a pool that was never registered.
    #[error("invalid pool id: {pool_id}")]
    PoolNotFound { pool_id: String },
}
