//! Field extraction via line-oriented pattern matching.
//!
//! This deliberately avoids a real Java parser: the target codebases declare
//! fields one per line, one top-level class per file, so fixed-prefix and
//! regex matching over trimmed lines is sufficient. Declarations spanning
//! multiple lines, carrying inline comments, or naming several fields in one
//! statement do not match and are silently skipped. The rest of the pipeline
//! only sees `FieldDecl` values, so this module could be swapped for an AST
//! walk without touching the synthesizer or driver.

use crate::core::{FieldDecl, TransformMode};
use once_cell::sync::Lazy;
use regex::Regex;

/// `private final Type name;` with no initializer, since an initialized
/// final field must not also be assigned in the constructor.
static CONSTRUCTOR_FIELD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^private\s+final\s+(\S+)\s+(\w+);").unwrap());

/// `private [final] Type name;` or `private [final] Type name = ...;`,
/// with an optional one-level generic suffix on the type.
static ACCESSOR_FIELD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^private\s+(?:final\s+)?(\S+(?:<[^>]+>)?)\s+(\w+)\s*[=;]").unwrap()
});

/// Reserved name used for serialization versioning; never gets accessors.
const SERIAL_VERSION_FIELD: &str = "serialVersionUID";

/// Scan source text and return every field that qualifies for the given
/// mode, in order of appearance. The order is significant: it fixes
/// constructor parameter order and accessor emission order.
///
/// Matching only begins after the class or enum declaration line, so
/// field-like text in header comments or import blocks is never picked up.
/// An empty result is a valid outcome, not an error.
pub fn extract_fields(content: &str, mode: TransformMode) -> Vec<FieldDecl> {
    let mut fields = Vec::new();
    let mut in_body = false;

    for (idx, line) in content.lines().enumerate() {
        if !in_body {
            in_body = is_type_declaration(line);
            continue;
        }

        let decl = match mode {
            TransformMode::Constructors => match_constructor_field(line),
            TransformMode::Accessors => match_accessor_field(line),
        };

        if let Some((type_name, name)) = decl {
            log::debug!("field {} {} at line {}", type_name, name, idx + 1);
            fields.push(FieldDecl {
                type_name,
                name,
                line: idx,
            });
        }
    }

    fields
}

/// Whether this line opens the primary type body.
fn is_type_declaration(line: &str) -> bool {
    line.contains("public class") || line.contains("public enum")
}

fn match_constructor_field(line: &str) -> Option<(String, String)> {
    let caps = CONSTRUCTOR_FIELD_RE.captures(line.trim())?;
    Some((caps[1].to_string(), caps[2].to_string()))
}

fn match_accessor_field(line: &str) -> Option<(String, String)> {
    // Fields marked transient for persistence stay out of the public surface.
    if line.contains("@Transient") {
        return None;
    }
    let caps = ACCESSOR_FIELD_RE.captures(line.trim())?;
    let name = caps[2].to_string();
    if name == SERIAL_VERSION_FIELD {
        return None;
    }
    Some((caps[1].to_string(), name))
}
