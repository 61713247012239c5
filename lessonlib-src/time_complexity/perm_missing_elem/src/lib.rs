pub trait PermMissingElem {
    /// The element of `1..=n + 1` absent from `n` distinct values.
    fn perm_missing_elem(&self) -> usize;
}

impl PermMissingElem for [usize] {
    fn perm_missing_elem(&self) -> usize {
        // XOR instead of a sum so that nothing overflows.
        let all = (1..=self.len() + 1).fold(0, |acc, i| acc ^ i);
        self.iter().fold(all, |acc, &x| acc ^ x)
    }
}

#[test]
fn sanity_check() {
    assert_eq!([2_usize, 3, 1, 5].perm_missing_elem(), 4);
    assert_eq!([1_usize, 2, 3].perm_missing_elem(), 4);
    assert_eq!([2_usize].perm_missing_elem(), 1);
    assert_eq!(<[usize]>::perm_missing_elem(&[]), 1);

    let a: Vec<usize> = (1..=100_000).filter(|&i| i != 31_337).collect();
    assert_eq!(a.perm_missing_elem(), 31_337);
}
