//! Validated fully-qualified C++ type names.
//!
//! The generator splices type names verbatim into emitted C++ and flattens
//! them into C symbol names, so every name is checked up front: a valid name
//! is one or more C++ identifiers joined by `::`, nothing else. Template
//! argument lists are rejected — template instantiation happens upstream and
//! must arrive here already spelled as a plain class name.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DeclError, Result};

/// A validated, fully-qualified C++ type name such as `outer::Inner`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QualifiedName(String);

impl QualifiedName {
    /// Parse and validate a fully-qualified C++ type name.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(DeclError::InvalidTypeName {
                detail: "empty type name".to_string(),
            });
        }
        for segment in input.split("::") {
            if segment.is_empty() {
                return Err(DeclError::InvalidTypeName {
                    detail: format!("empty scope segment in '{input}'"),
                });
            }
            if !is_identifier(segment) {
                return Err(DeclError::InvalidTypeName {
                    detail: format!("'{segment}' in '{input}' is not a C++ identifier"),
                });
            }
        }
        Ok(QualifiedName(input.to_string()))
    }

    /// The original spelling, used verbatim in generated C++.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name flattened for use in C symbol names (`::` becomes `_`).
    pub fn flat(&self) -> String {
        self.0.replace("::", "_")
    }

    /// The scope segments of the name, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split("::")
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for QualifiedName {
    type Error = DeclError;

    fn try_from(value: String) -> Result<Self> {
        QualifiedName::parse(&value)
    }
}

impl From<QualifiedName> for String {
    fn from(name: QualifiedName) -> String {
        name.0
    }
}

/// Whether `s` is a single C/C++ identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
