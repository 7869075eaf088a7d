//! Key scoping for a store shared with other features
//!
//! A namespace `"pets"` owns keys starting with `"pets."`. A trailing `.` in the
//! namespace is accepted and not doubled. The empty namespace owns every key.

const SEPARATOR: char = '.';

/// Prefix every owned key starts with; empty for the unscoped namespace
pub fn prefix(namespace: &str) -> String {
    if namespace.is_empty() || namespace.ends_with(SEPARATOR) {
        namespace.to_string()
    } else {
        format!("{}{}", namespace, SEPARATOR)
    }
}

/// Storage key for `key` under `namespace`
pub fn scoped_key(namespace: &str, key: &str) -> String {
    format!("{}{}", prefix(namespace), key)
}

/// Whether a raw storage key belongs to `namespace`
pub fn owns_key(namespace: &str, raw_key: &str) -> bool {
    raw_key.starts_with(&prefix(namespace))
}
