//! Exported C symbol table.
//!
//! Every thunk emitted into a generated header corresponds to exactly one
//! entry here. The table preserves insertion order and is serialized next to
//! the header so the downstream binding generator can discover the exported
//! surface without parsing C++.

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

/// Calling convention of an exported symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallingConvention {
    /// Plain C calling convention (`extern "C"`).
    C,
}

/// Cross-boundary visibility of a generated symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Marked with the export annotation; visible for dynamic linking.
    Exported,
    /// Internal to the shim translation unit.
    Internal,
}

/// A generated C-callable symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedSymbol {
    /// Unique C symbol name.
    pub name: String,
    /// Calling convention.
    pub convention: CallingConvention,
    /// Visibility marking.
    pub visibility: Visibility,
}

/// Ordered set of exported symbols for one generated library.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolTable {
    symbols: Vec<ExportedSymbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol, rejecting duplicate names.
    pub fn insert(&mut self, symbol: ExportedSymbol) -> Result<()> {
        if self.contains(&symbol.name) {
            return Err(GenError::DuplicateSymbol { name: symbol.name });
        }
        self.symbols.push(symbol);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.iter().any(|s| s.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExportedSymbol> {
        self.symbols.iter()
    }

    /// Symbol names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(|s| s.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
