//! Comparison helpers for DNS names as they appear in parsed records.

/// DNS-name equality: ASCII case-insensitive, trailing dot ignored.
pub fn names_equal(a: &str, b: &str) -> bool {
    let a = a.strip_suffix('.').unwrap_or(a);
    let b = b.strip_suffix('.').unwrap_or(b);
    a.eq_ignore_ascii_case(b)
}
