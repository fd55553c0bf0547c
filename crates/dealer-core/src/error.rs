//! Error types for the dealer

use thiserror::Error;

use crate::ids::PlayerId;

/// Result type for dealer operations
pub type Result<T> = std::result::Result<T, DealerError>;

/// Dealer error types
///
/// Every variant is fatal to the game in progress: nothing is retried and
/// nothing is swallowed on the way out of `start_game`.
#[derive(Debug, Error)]
pub enum DealerError {
    /// Required setting missing before registration or game start
    #[error("{0} is not set, call the matching setter before starting the game")]
    ConfigMissing(&'static str),

    /// Setting present but unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No identifiers left to hand out
    #[error("Identifier pool exhausted: at most {0} players can register")]
    PoolExhausted(usize),

    /// Identifier already bound to an agent
    #[error("Player already registered: {0}")]
    AlreadyRegistered(PlayerId),

    /// Identifier that the pool never issued
    #[error("Identifier was not issued by this dealer: {0}")]
    UnknownIdentifier(PlayerId),

    /// Trailing message of a batch does not match the round phase
    #[error("Protocol desynchronized: {0}")]
    ProtocolDesync(String),

    /// Message addressed to an identifier nobody registered
    #[error("Received message whose address [{0}] is unknown")]
    UnknownAddress(PlayerId),

    /// Message type other than ask/notification
    #[error("Received unexpected message whose type is [{0}]")]
    UnknownMessageType(String),

    /// Failure reported by the round engine
    #[error("Round engine error: {0}")]
    Engine(String),

    /// Seat index outside the table
    #[error("Seat {0} does not exist")]
    SeatOutOfRange(usize),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// I/O error while loading game data
    #[error("IO error: {0}")]
    IoError(String),
}

impl From<serde_json::Error> for DealerError {
    fn from(err: serde_json::Error) -> Self {
        DealerError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for DealerError {
    fn from(err: std::io::Error) -> Self {
        DealerError::IoError(err.to_string())
    }
}
