/// Extra characters permitted in a filesystem path on top of the base set.
pub const PATH_EXTRA: &[char] = &['.', '-', ' ', std::path::MAIN_SEPARATOR];

/// Replace every character outside `{alphanumeric, '_'}` and `allowed_extra`
/// with `_`. Total over all inputs; an already-clean string passes through
/// unchanged.
pub fn sanitize(raw: &str, allowed_extra: &[char]) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || allowed_extra.contains(&c) {
                c
            } else {
                '_'
            }
        })
        .collect()
}
