//! Error types
//!
//! Gameplay never fails: running out of bricks or lives is a phase change.
//! The only failures are a bad configuration and a missing render target.

use std::fmt;

/// Configuration could not be parsed or describes an unplayable layout
#[derive(Debug)]
pub enum ConfigError {
    /// JSON did not match the config schema
    Parse(serde_json::Error),
    /// Parsed fine but fails validation
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "config parse error: {}", e),
            ConfigError::Invalid(reason) => write!(f, "invalid config: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// The render target is unavailable; the game never starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    /// No window/document, or no canvas element with the given id
    CanvasNotFound(String),
    /// Canvas exists but has no 2D drawing context
    ContextUnavailable,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::CanvasNotFound(id) => {
                write!(f, "Canvas element with ID \"{}\" not found.", id)
            }
            InitError::ContextUnavailable => {
                write!(f, "Failed to get 2D rendering context for canvas.")
            }
        }
    }
}

impl std::error::Error for InitError {}
