//! C-ABI shim header generation for C++ libraries.
//!
//! Produces, per original library, one self-contained C++ header exposing a
//! flat C-callable surface: fixed preamble, the library's include directives,
//! a platform export macro, and one destructor thunk per destructible type.
//! Generation is a pure transform — identical inputs yield byte-identical
//! output, and a successful run guarantees the emitted header compiles.
//!
//! ## Modules
//!
//! - [`platform`] — per-platform export annotation policy
//! - [`symbol`] — exported C symbol table
//! - [`thunk`] — destructor thunk generation
//! - [`render`] — header text assembly from ordered blocks
//! - [`assemble`] — per-library orchestration of the above
//! - [`error`] — generation error types

pub mod assemble;
pub mod error;
pub mod platform;
pub mod render;
pub mod symbol;
pub mod thunk;

// Re-export key types for convenience
pub use assemble::{
    assemble_header, GeneratedHeader, GenerationReport, ShimOptions, ShimOutput,
    UndestructiblePolicy,
};
pub use error::GenError;
pub use platform::Platform;
pub use symbol::{CallingConvention, ExportedSymbol, SymbolTable, Visibility};
pub use thunk::DestructorThunk;
