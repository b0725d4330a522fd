/// A link that applies a preset filter to a listing.
#[derive(Debug, Clone)]
pub struct FilterChip {
    pub label: String,
    pub href: String,
    pub active: bool,
}
