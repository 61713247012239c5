pub trait MissingInteger {
    /// Smallest positive integer that does not occur.
    fn missing_integer(&self) -> usize;
}

impl<T: Copy + TryInto<usize>> MissingInteger for [T] {
    fn missing_integer(&self) -> usize {
        // The answer is at most `n + 1`, so larger values are irrelevant.
        let n = self.len();
        let mut seen = vec![false; n + 1];
        for &x in self {
            if let Some(x) = x.try_into().ok().filter(|&x| x <= n) {
                seen[x] = true;
            }
        }
        (1..=n).find(|&i| !seen[i]).unwrap_or(n + 1)
    }
}

#[test]
fn sanity_check() {
    assert_eq!([1, 3, 6, 4, 1, 2].missing_integer(), 5);
    assert_eq!([1, 2, 3].missing_integer(), 4);
    assert_eq!([-1, -3].missing_integer(), 1);
    assert_eq!([0_u8, 200].missing_integer(), 1);
    assert_eq!(<[i32]>::missing_integer(&[]), 1);
    assert_eq!([i64::MAX, 1].missing_integer(), 2);
}
