//! Small string helpers shared by settings binding and registry queries

/// Case-insensitive equality used for provider names, groups and field names.
pub fn eq_ignore_case(left: &str, right: &str) -> bool {
    if left.is_ascii() && right.is_ascii() {
        return left.eq_ignore_ascii_case(right);
    }
    left.to_lowercase() == right.to_lowercase()
}
