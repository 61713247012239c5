pub trait TapeEquilibrium {
    /// Minimal `|sum(a[..p]) - sum(a[p..])|` over `0 < p < n`.
    fn tape_equilibrium(&self) -> Option<u64>;
}

impl TapeEquilibrium for [i64] {
    fn tape_equilibrium(&self) -> Option<u64> {
        let mut right: i128 = self.iter().map(|&x| i128::from(x)).sum();
        let mut left = 0_i128;
        let split = self.split_last()?.1;
        split
            .iter()
            .map(|&x| {
                left += i128::from(x);
                right -= i128::from(x);
                left.abs_diff(right)
            })
            .min()
            .map(|d| d.try_into().unwrap_or(u64::MAX))
    }
}

#[test]
fn sanity_check() {
    assert_eq!([3_i64, 1, 2, 4, 3].tape_equilibrium(), Some(1));
    assert_eq!([-1000_i64, 1000].tape_equilibrium(), Some(2000));
    assert_eq!([5_i64, 5].tape_equilibrium(), Some(0));
    assert_eq!([7_i64].tape_equilibrium(), None);
    assert_eq!(<[i64]>::tape_equilibrium(&[]), None);
    assert_eq!([i64::MIN, i64::MAX].tape_equilibrium(), Some(u64::MAX));
}
