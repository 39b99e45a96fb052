use thiserror::Error;

/// Errors that can occur while running installation checks.
#[derive(Error, Debug)]
pub enum VlpError {
    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Convenience alias for `Result<T, VlpError>`.
pub type Result<T> = std::result::Result<T, VlpError>;
