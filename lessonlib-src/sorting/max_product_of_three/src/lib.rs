pub trait MaxProductOfThree {
    fn max_product_of_three(&self) -> Option<i128>;
}

impl MaxProductOfThree for [i32] {
    fn max_product_of_three(&self) -> Option<i128> {
        let n = self.len();
        if n < 3 {
            return None;
        }
        let mut a: Vec<_> = self.iter().map(|&x| i128::from(x)).collect();
        a.sort_unstable();
        // Either the three largest, or the two most negative with the
        // largest.
        let top = a[n - 1] * a[n - 2] * a[n - 3];
        let mixed = a[0] * a[1] * a[n - 1];
        Some(top.max(mixed))
    }
}

#[test]
fn sanity_check() {
    assert_eq!([-3, 1, 2, -2, 5, 6].max_product_of_three(), Some(60));
    assert_eq!([-5, -4, 1, 2, 3].max_product_of_three(), Some(60));
    assert_eq!([-5, -4, -3, -2].max_product_of_three(), Some(-24));
    assert_eq!([4, 0, -1].max_product_of_three(), Some(0));
    assert_eq!([1, 2].max_product_of_three(), None);
    assert_eq!(
        [i32::MIN, i32::MIN, i32::MAX].max_product_of_three(),
        Some(i128::from(i32::MIN).pow(2) * i128::from(i32::MAX)),
    );
}
