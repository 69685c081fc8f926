//! Error types for dice baseball

use crate::core::InvalidRoll;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BaseballError {
    #[error("Invalid dice roll: {0}")]
    InvalidRoll(#[from] InvalidRoll),

    #[error("Game is already over")]
    GameAlreadyOver,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, BaseballError>;
