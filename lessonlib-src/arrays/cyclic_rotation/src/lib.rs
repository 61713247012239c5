pub trait CyclicRotation {
    type Item;
    fn rotated_right(&self, k: usize) -> Vec<Self::Item>;
}

impl<T: Clone> CyclicRotation for [T] {
    type Item = T;
    fn rotated_right(&self, k: usize) -> Vec<T> {
        let mut res = self.to_vec();
        if !res.is_empty() {
            res.rotate_right(k % self.len());
        }
        res
    }
}

#[test]
fn sanity_check() {
    assert_eq!([3, 8, 9, 7, 6].rotated_right(3), [9, 7, 6, 3, 8]);
    assert_eq!([0, 0, 0].rotated_right(1), [0, 0, 0]);
    assert_eq!([1, 2, 3, 4].rotated_right(4), [1, 2, 3, 4]);
    assert_eq!([1, 2, 3, 4].rotated_right(9), [4, 1, 2, 3]);
    assert_eq!([1, 2].rotated_right(0), [1, 2]);
    assert!(<[u8]>::rotated_right(&[], 5).is_empty());
}
