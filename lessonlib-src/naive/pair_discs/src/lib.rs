pub trait PairDiscs {
    fn pair_discs(&self) -> usize;
}

impl PairDiscs for [usize] {
    fn pair_discs(&self) -> usize {
        let n = self.len();
        (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .filter(|&(i, j)| j - i <= self[i].saturating_add(self[j]))
            .count()
    }
}

#[test]
fn sanity_check() {
    assert_eq!([1_usize, 5, 2, 1, 4, 0].pair_discs(), 11);
    assert_eq!([0_usize, 0, 0].pair_discs(), 0);
    assert_eq!([1_usize, 0].pair_discs(), 1);
    assert_eq!(<[usize]>::pair_discs(&[]), 0);
}
