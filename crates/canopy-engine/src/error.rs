//! Error types for the engine binary.
//!
//! [`EngineError`] wraps every failure mode of startup and the command
//! loop so `main` can propagate with `?`. Command parse errors are not
//! here: they are reported to the user and the loop continues.

/// Top-level error for the engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: canopy_core::ConfigError,
    },

    /// The session could not be built or rejected an action as a
    /// contract violation.
    #[error("session error: {source}")]
    Session {
        /// The underlying session error.
        #[from]
        source: canopy_core::SessionError,
    },

    /// Reading commands or writing output failed.
    #[error("terminal I/O failed: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
