pub trait Triangle {
    fn has_triangle(&self) -> bool;
}

impl Triangle for [i64] {
    fn has_triangle(&self) -> bool {
        let mut a: Vec<_> = self.iter().map(|&x| i128::from(x)).collect();
        a.sort_unstable();
        // For sorted p <= q <= r only p + q > r can fail, and neighbours
        // are the tightest candidates. Non-positive lengths never qualify.
        a.windows(3).any(|w| w[0] > 0 && w[0] + w[1] > w[2])
    }
}

#[test]
fn sanity_check() {
    assert!([10_i64, 2, 5, 1, 8, 20].has_triangle());
    assert!(![10_i64, 50, 5, 1].has_triangle());
    assert!(![1_i64, 2].has_triangle());
    assert!(![-3_i64, -2, -1].has_triangle());
    assert!(![0_i64, 5, 5].has_triangle());
    assert!([i64::MAX, i64::MAX, i64::MAX].has_triangle());
    assert!(![1_i64, 1, 2].has_triangle());
}
