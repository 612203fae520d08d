//! Declaration error types.

/// Errors that can occur while reading declaration manifests.
#[derive(Debug, thiserror::Error)]
pub enum DeclError {
    /// A type name is not a valid fully-qualified C++ identifier.
    #[error("invalid type name: {detail}")]
    InvalidTypeName { detail: String },

    /// An include directive would break header syntax.
    #[error("invalid include directive: {detail}")]
    InvalidInclude { detail: String },

    /// The manifest is structurally valid TOML but violates a constraint.
    #[error("invalid manifest: {detail}")]
    InvalidManifest { detail: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for declaration operations.
pub type Result<T> = std::result::Result<T, DeclError>;
