//! Generation error types.

use cshim_decl::DeclError;

/// Errors that can occur during shim generation.
///
/// All of these are detected at generation time; none correspond to runtime
/// failures of the compiled shim.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// The platform discriminator is not in the supported set.
    /// Fatal configuration error, detected before any output is produced.
    #[error("unknown platform '{name}' (expected 'windows-like' or 'posix-like')")]
    UnknownPlatform { name: String },

    /// An input would produce unparsable header text.
    #[error("unrenderable input: {detail}")]
    Unrenderable { detail: String },

    /// A destructor thunk was requested for a type without a public destructor.
    #[error("type '{type_name}' has a {access} destructor and cannot be thunked")]
    UndestructibleType { type_name: String, access: String },

    /// Two thunks flattened to the same C symbol name. The shim has no
    /// mangling scheme, so uniqueness must be guaranteed upstream.
    #[error("duplicate exported symbol '{name}'")]
    DuplicateSymbol { name: String },

    /// Declaration-level validation error.
    #[error(transparent)]
    Decl(#[from] DeclError),
}

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, GenError>;
