//! URL slugs derived from company names.

/// Derive a URL-safe slug from a company name.
///
/// Lowercases and trims, drops everything except ASCII letters, digits,
/// `_`, `-` and whitespace, turns each run of whitespace or `_` into a single
/// `-`, then strips leading and trailing hyphens.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_gap = false;

    for c in lowered.trim().chars() {
        if c.is_whitespace() || c == '_' {
            if !in_gap {
                slug.push('-');
                in_gap = true;
            }
        } else if c.is_ascii_alphanumeric() || c == '-' {
            slug.push(c);
            in_gap = false;
        }
        // anything else is dropped without ending the gap
    }

    slug.trim_matches('-').to_string()
}
