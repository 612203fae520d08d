//! Destructor thunk generation.
//!
//! A thunk is a uniquely named `extern "C"` function whose sole effect is to
//! destroy an instance of one original C++ type through an opaque pointer.
//! The thunk assumes the pointer came from the matching construction path in
//! the shim; no double-destruction guard exists at this layer.

use cshim_decl::{DestructorAccess, Ownership, QualifiedName, TypeRecord};

use crate::error::{GenError, Result};

/// Name of the shared template helper that invokes a destructor.
pub const DESTRUCTOR_HELPER: &str = "cshim_call_destructor";

/// A generated destructor thunk for one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestructorThunk {
    /// Unique C symbol name of the thunk function.
    pub symbol: String,
    /// The original type this thunk destroys.
    pub type_name: QualifiedName,
    /// Which destruction path the thunk takes.
    pub ownership: Ownership,
}

/// Build the C symbol name for a type's destructor thunk.
pub fn destructor_symbol(library: &str, type_name: &QualifiedName, ownership: Ownership) -> String {
    let suffix = match ownership {
        Ownership::Buffer => "destructor",
        Ownership::Heap => "delete",
    };
    format!("{library}_c_{}_{suffix}", type_name.flat())
}

/// Generate a destructor thunk for one type record.
///
/// Fails with [`GenError::UndestructibleType`] when the destructor is not
/// public — emitting the thunk anyway would produce a header that fails to
/// compile far downstream, which is exactly what generation-time errors exist
/// to prevent.
pub fn generate_thunk(library: &str, record: &TypeRecord) -> Result<DestructorThunk> {
    if record.destructor != DestructorAccess::Public {
        return Err(GenError::UndestructibleType {
            type_name: record.name.to_string(),
            access: record.destructor.as_str().to_string(),
        });
    }
    Ok(DestructorThunk {
        symbol: destructor_symbol(library, &record.name, record.ownership),
        type_name: record.name.clone(),
        ownership: record.ownership,
    })
}

impl DestructorThunk {
    /// Render the thunk's function definition.
    ///
    /// The pointer is re-interpreted rather than the destructor being called
    /// through qualified-name syntax: `x->~outer::Inner()` is not valid C++,
    /// so destruction goes through the [`DESTRUCTOR_HELPER`] template (buffer
    /// ownership) or a plain `delete` expression (heap ownership).
    pub fn definition(&self, annotation: &str) -> String {
        let symbol = &self.symbol;
        let type_name = self.type_name.as_str();
        let body = match self.ownership {
            Ownership::Buffer => {
                format!("{DESTRUCTOR_HELPER}(reinterpret_cast<{type_name}*>(ptr));")
            }
            Ownership::Heap => format!("delete reinterpret_cast<{type_name}*>(ptr);"),
        };
        format!("{annotation} void {symbol}(void* ptr) {{\n    {body}\n}}\n")
    }
}

/// The definition of the shared destructor-dispatch template helper.
///
/// One instantiation per distinct type replaces what would otherwise be
/// per-type hand-written call syntax.
pub fn helper_definition() -> String {
    format!(
        "// Calls the destructor of `T`. This template function is necessary\n\
         // because `x->~T()` syntax cannot be used directly when `T` contains `::`.\n\
         template<typename T>\n\
         void {DESTRUCTOR_HELPER}(T* x) {{\n    x->~T();\n}}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, access: DestructorAccess, ownership: Ownership) -> TypeRecord {
        TypeRecord {
            name: QualifiedName::parse(name).unwrap(),
            destructor: access,
            ownership,
            excluded: false,
        }
    }

    #[test]
    fn buffer_symbol_name() {
        let name = QualifiedName::parse("ns::Widget").unwrap();
        assert_eq!(
            destructor_symbol("mylib", &name, Ownership::Buffer),
            "mylib_c_ns_Widget_destructor"
        );
    }

    #[test]
    fn heap_symbol_name() {
        let name = QualifiedName::parse("QRect").unwrap();
        assert_eq!(
            destructor_symbol("qt_core", &name, Ownership::Heap),
            "qt_core_c_QRect_delete"
        );
    }

    #[test]
    fn buffer_thunk_dispatches_through_helper() {
        let thunk = generate_thunk(
            "mylib",
            &record("ns::Widget", DestructorAccess::Public, Ownership::Buffer),
        )
        .unwrap();
        let def = thunk.definition("CSHIM_EXPORT");
        assert!(def.starts_with("CSHIM_EXPORT void mylib_c_ns_Widget_destructor(void* ptr)"));
        assert!(def.contains("cshim_call_destructor(reinterpret_cast<ns::Widget*>(ptr));"));
        // Never a direct qualified destructor call.
        assert!(!def.contains("~ns::Widget"));
    }

    #[test]
    fn heap_thunk_deletes() {
        let thunk = generate_thunk(
            "mylib",
            &record("ns::Widget", DestructorAccess::Public, Ownership::Heap),
        )
        .unwrap();
        let def = thunk.definition("CSHIM_EXPORT");
        assert!(def.contains("delete reinterpret_cast<ns::Widget*>(ptr);"));
        assert!(!def.contains(DESTRUCTOR_HELPER));
    }

    #[test]
    fn non_public_destructor_rejected() {
        for access in [
            DestructorAccess::Protected,
            DestructorAccess::Private,
            DestructorAccess::Deleted,
        ] {
            let err =
                generate_thunk("mylib", &record("Locked", access, Ownership::Buffer)).unwrap_err();
            match err {
                GenError::UndestructibleType { type_name, access: a } => {
                    assert_eq!(type_name, "Locked");
                    assert!(!a.is_empty());
                }
                other => panic!("expected UndestructibleType, got {other:?}"),
            }
        }
    }

    #[test]
    fn helper_is_a_template() {
        let helper = helper_definition();
        assert!(helper.contains("template<typename T>"));
        assert!(helper.contains("x->~T();"));
    }
}
