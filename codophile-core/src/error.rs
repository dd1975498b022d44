//! Error types for the fallible edges of the page.
//!
//! Header state transitions never fail. What can fail is attaching the
//! keyboard listener to the host and parsing the site configuration.

use thiserror::Error;

/// Failure to attach a keyboard listener to its source.
#[derive(Debug, Error)]
pub enum KeyboardError {
    /// No browser window is reachable (e.g. running outside a document).
    #[error("no window available to attach the keyboard listener")]
    NoWindow,
    /// The host rejected the listener registration.
    #[error("failed to register keydown listener: {0}")]
    Register(String),
}

/// Failure to read the site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
