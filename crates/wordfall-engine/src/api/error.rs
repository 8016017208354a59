//! Error types for engine startup.

use thiserror::Error;

/// Errors the engine can report. All of them are fatal at startup;
/// once a game is running, nothing in the frame loop fails.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The asset manifest is not valid JSON or does not match the schema
    #[error("Invalid asset manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    /// A texture name the game asked for is not in the manifest
    #[error("Texture '{0}' is not in the asset manifest")]
    MissingTexture(String),

    /// A sound name the game asked for is not in the manifest
    #[error("Sound '{0}' is not in the asset manifest")]
    MissingSound(String),

    /// A frame could not be encoded for the host
    #[error("Failed to encode frame: {0}")]
    Encode(serde_json::Error),

    /// A frame was requested before `init` succeeded
    #[error("Game not initialized")]
    NotInitialized,
}
