//! Declaration input boundary for the cshim generator.
//!
//! The external C++ declaration extractor hands this crate a `.shim.toml`
//! manifest per library: the include directives needed to see the original
//! declarations, and the destructible types found in them. Everything is
//! validated here so the generation core can assume well-formed input.
//!
//! ## Modules
//!
//! - [`name`] — validated fully-qualified C++ type names
//! - [`library`] — `.shim.toml` manifest parsing
//! - [`error`] — declaration error types

pub mod error;
pub mod library;
pub mod name;

pub use error::DeclError;
pub use library::{DestructorAccess, LibraryManifest, Ownership, TypeRecord};
pub use name::QualifiedName;
