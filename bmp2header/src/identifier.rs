///
/// Identifier Validation Module
///
/// The variable-name argument is used verbatim as a prefix for the two
/// generated symbols (`<name>_data`, `<name>_len`). An invalid prefix
/// would propagate into a header that does not compile, so it is
/// rejected at the boundary before any file is touched.
///

/// Returns true if `name` is usable as a C++ identifier:
/// `[A-Za-z_][A-Za-z0-9_]*`. The generated `_data`/`_len` suffixes keep
/// any valid prefix valid, so checking the prefix suffices.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
