use thiserror::Error;

/// Startup configuration failures. Request handling has no error path of its
/// own; unknown routes and methods fall through to axum's 404/405.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a valid number, got {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("HOST must not be empty")]
    EmptyHost,
}
