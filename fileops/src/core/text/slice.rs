// src/core/text/slice.rs

/// Count used when the requested head/tail size is missing or invalid.
pub const DEFAULT_COUNT: usize = 5;

/// First `n` lines, or all of them when there are fewer.
#[inline]
#[must_use]
pub fn head<T>(lines: &[T], n: usize) -> &[T] {
    lines.get(..n).unwrap_or(lines)
}

/// Last `n` lines in original order, or all of them when there are fewer.
#[inline]
#[must_use]
pub fn tail<T>(lines: &[T], n: usize) -> &[T] {
    lines
        .len()
        .checked_sub(n)
        .and_then(|start| lines.get(start..))
        .unwrap_or(lines)
}

/// Parses a user-supplied line count, falling back to `default` when the
/// input is empty, not a number, or not positive.
#[must_use]
pub fn parse_count(input: &str, default: usize) -> usize {
    match input.trim().parse::<i64>() {
        Ok(n) if n > 0 => usize::try_from(n).unwrap_or(default),
        _ => default,
    }
}
