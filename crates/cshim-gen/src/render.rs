//! Header text assembly.
//!
//! The generated header is an ordered sequence of fixed and variable blocks:
//! guard + fixed preamble, the library include block (verbatim, order
//! preserved), the resolved export macro, the destructor-dispatch helper, and
//! the thunks in first-seen order. Every variable block is validated before
//! substitution; rendering fails rather than emitting unparsable text.
//! Identical inputs produce byte-identical output, because downstream builds
//! diff and cache the artifact.

use cshim_decl::library::validate_include;
use cshim_decl::name::is_identifier;

use crate::error::{GenError, Result};
use crate::platform::Platform;
use crate::thunk::{self, DestructorThunk};

/// Inputs for rendering one library's shim header.
#[derive(Debug)]
pub struct HeaderTemplate<'a> {
    /// Library name; prefixes the include guard.
    pub library: &'a str,
    /// Ordered include paths from the declaration manifest.
    pub includes: &'a [String],
    /// Resolved target platform.
    pub platform: Platform,
    /// Thunks in first-seen type order.
    pub thunks: &'a [DestructorThunk],
}

/// Render the complete header text.
pub fn render(template: &HeaderTemplate<'_>) -> Result<String> {
    if !is_identifier(template.library) {
        return Err(GenError::Unrenderable {
            detail: format!("library name '{}' is not a C identifier", template.library),
        });
    }
    for include in template.includes {
        validate_include(include)?;
    }

    let guard = guard_name(template.library);
    let annotation = template.platform.export_annotation();

    let mut out = String::new();
    out.push_str(&format!("#ifndef {guard}\n#define {guard}\n\n"));
    out.push_str(&format!(
        "// C-callable surface generated for `{}`.\n\
         // Consumed by the shim build step and by the binding generator.\n\n",
        template.library
    ));

    // Fixed preamble: fixed-width integer types and placement-new support.
    out.push_str("// for fixed size integer types\n#include <stdint.h>\n\n");
    out.push_str("// placement new statements require this\n#include <new>\n\n");

    if !template.includes.is_empty() {
        out.push_str("// original C++ library includes\n");
        for include in template.includes {
            out.push_str(&format!("#include \"{include}\"\n"));
        }
        out.push('\n');
    }

    out.push_str(&template.platform.export_macro_block());
    out.push('\n');

    out.push_str(&thunk::helper_definition());

    if !template.thunks.is_empty() {
        out.push_str("\nextern \"C\" {\n\n");
        for t in template.thunks {
            out.push_str(&t.definition(annotation));
            out.push('\n');
        }
        out.push_str("} // extern \"C\"\n");
    }

    out.push_str(&format!("\n#endif // {guard}\n"));
    Ok(out)
}

/// Include-guard macro for a library's shim header.
fn guard_name(library: &str) -> String {
    format!("CSHIM_{}_GLOBAL_H", library.to_ascii_uppercase())
}
