pub mod product;
pub mod cart;

/// Parses a path segment as a row id. Only positive decimal integers can
/// name a row; anything else is reported by the caller as not found.
pub(crate) fn parse_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}
