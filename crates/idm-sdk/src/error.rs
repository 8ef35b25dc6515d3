//! SDK error types

use thiserror::Error;

/// Errors surfaced by the high-level SDK API
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Engine error: {0}")]
    Engine(#[from] idm_engine::EngineError),

    #[error("Core error: {0}")]
    Core(#[from] idm_core::CoreError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, SdkError>;
