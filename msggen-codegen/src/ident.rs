//! Identifier normalization.

/// Converts a schema symbol into a ROS-safe PascalCase identifier.
///
/// `_`, space, and `-` act as word boundaries and are dropped; the
/// character following a boundary is upper-cased. If the result is empty
/// or starts with a digit, a `T` is prepended; otherwise the first
/// character is upper-cased. Total and idempotent over all inputs.
#[must_use]
pub fn normalize_identifier(symbol: &str) -> String {
    let mut result = String::with_capacity(symbol.len() + 1);
    let mut capitalize_next = false;

    for c in symbol.chars() {
        if c == '_' || c == ' ' || c == '-' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    match result.chars().next() {
        None => "T".to_string(),
        Some(first) if first.is_ascii_digit() => format!("T{result}"),
        Some(first) => {
            let mut normalized = first.to_ascii_uppercase().to_string();
            normalized.push_str(&result[first.len_utf8()..]);
            normalized
        }
    }
}
