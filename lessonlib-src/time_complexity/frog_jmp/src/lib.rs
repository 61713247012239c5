/// Jumps of length `d` needed to get from `x` to a position `>= y`.
///
/// # Panics
/// Panics if `d == 0`.
pub fn frog_jmp(x: u64, y: u64, d: u64) -> u64 {
    assert!(d > 0, "jump length must be positive");
    let gap = y.saturating_sub(x);
    gap / d + u64::from(gap % d != 0)
}

#[test]
fn sanity_check() {
    assert_eq!(frog_jmp(10, 85, 30), 3);
    assert_eq!(frog_jmp(10, 10, 30), 0);
    assert_eq!(frog_jmp(10, 40, 30), 1);
    assert_eq!(frog_jmp(50, 10, 7), 0);
    assert_eq!(frog_jmp(0, u64::MAX, 1), u64::MAX);
}
