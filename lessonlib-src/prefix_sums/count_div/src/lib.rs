/// Number of multiples of `k` in `a..=b`.
///
/// # Panics
/// Panics if `k == 0` or `a > b`.
pub fn count_div(a: u64, b: u64, k: u64) -> u64 {
    assert!(k > 0, "divisor must be positive");
    assert!(a <= b, "empty range {a}..={b}");
    match a.checked_sub(1) {
        Some(before) => b / k - before / k,
        None => b / k + 1,
    }
}

#[test]
fn sanity_check() {
    assert_eq!(count_div(6, 11, 2), 3);
    assert_eq!(count_div(0, 0, 11), 1);
    assert_eq!(count_div(0, 10, 5), 3);
    assert_eq!(count_div(1, 1, 11), 0);
    assert_eq!(count_div(11, 11, 11), 1);
    assert_eq!(count_div(0, u64::MAX, 2), u64::MAX / 2 + 1);
    assert_eq!(count_div(1, u64::MAX, 1), u64::MAX);
    assert_eq!(count_div(10, 10, 7), 0);
}
