//! Ovo→Java type-name mapping.

/// Fixed lookup table for declared type names.
///
/// Names with no mapping pass through unchanged; that is how user-defined
/// class types flow into the output.
pub fn java_type(name: &str) -> &str {
    match name {
        "int" => "int",
        "float" => "float",
        "bool" => "boolean",
        "char" => "char",
        "string" => "String",
        "list" => "ArrayList",
        "dict" => "HashMap",
        other => other,
    }
}
