/// Derive a URL slug from a display name.
///
/// Letters are lowercased, runs of whitespace, `-` or `_` collapse into a
/// single `-`, and every other non-alphanumeric character is dropped. The
/// result never starts or ends with a hyphen and may be empty.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            // Some lowercase mappings expand into combining marks; keep only
            // the alphanumeric part.
            slug.extend(ch.to_lowercase().filter(|c| c.is_alphanumeric()));
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_hyphen = true;
        }
    }
    slug
}
