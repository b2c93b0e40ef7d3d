/// Minimal `local@domain.tld` shape check.
///
/// Equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`: exactly one `@`, no whitespace,
/// and a domain part with a dot that has at least one character on each side.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Any dot that is neither the first nor the last character of the domain
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Canonical stored form of an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
