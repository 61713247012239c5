pub trait FrogRiverOne {
    /// Earliest second by which a leaf has fallen on every position in
    /// `1..=x`. Positions outside that range are ignored. `None` if the
    /// river is never covered or `x == 0`.
    fn frog_river_one(&self, x: usize) -> Option<usize>;
}

impl<T: Copy + TryInto<usize>> FrogRiverOne for [T] {
    fn frog_river_one(&self, x: usize) -> Option<usize> {
        let mut covered = vec![false; x];
        let mut missing = x;
        for (second, &leaf) in self.iter().enumerate() {
            let Some(pos) = leaf.try_into().ok().and_then(|p| p.checked_sub(1))
            else {
                continue;
            };
            if let Some(c) = covered.get_mut(pos).filter(|c| !**c) {
                *c = true;
                missing -= 1;
                if missing == 0 {
                    return Some(second);
                }
            }
        }
        None
    }
}

#[test]
fn sanity_check() {
    assert_eq!([1, 3, 1, 4, 2, 3, 5, 4].frog_river_one(5), Some(6));
    assert_eq!([1, 1, 1].frog_river_one(2), None);
    assert_eq!([1].frog_river_one(1), Some(0));
    assert_eq!([2, 9, -1, 0, 1].frog_river_one(2), Some(4));
    assert_eq!([1, 2].frog_river_one(0), None);
}
