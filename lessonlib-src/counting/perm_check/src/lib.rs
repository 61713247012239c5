pub trait PermCheck {
    /// Whether the values are exactly `1..=n`, each once.
    fn is_permutation(&self) -> bool;
}

impl<T: Copy + TryInto<usize>> PermCheck for [T] {
    fn is_permutation(&self) -> bool {
        let n = self.len();
        let mut seen = vec![false; n];
        self.iter().all(|&x| {
            match x.try_into().ok().and_then(|x| x.checked_sub(1)) {
                Some(i) if i < n && !seen[i] => {
                    seen[i] = true;
                    true
                }
                _ => false,
            }
        })
    }
}

#[test]
fn sanity_check() {
    assert!([4, 1, 3, 2].is_permutation());
    assert!(![4, 1, 3].is_permutation());
    assert!(![1, 1].is_permutation());
    assert!(![0, 1].is_permutation());
    assert!(![-1, 1].is_permutation());
    assert!([1_u8].is_permutation());
    assert!(<[u32]>::is_permutation(&[]));
}
