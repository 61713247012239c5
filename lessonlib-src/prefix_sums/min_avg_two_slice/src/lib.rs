//! The slice (of length at least two) with the minimal average.
//!
//! Any longer slice splits into slices of length two and three whose
//! averages cannot all exceed its own, so only those lengths are checked.

use std::cmp::Ordering;

pub trait MinAvgTwoSlice {
    /// Starting position of the minimal-average slice; the smallest one on
    /// ties. `None` when there are fewer than two elements.
    fn min_avg_two_slice(&self) -> Option<usize>;
}

// (sum, len), compared as the rational `sum / len`.
#[derive(Clone, Copy)]
struct Avg(i128, i128);

impl Avg {
    fn cmp(self, other: Avg) -> Ordering {
        (self.0 * other.1).cmp(&(other.0 * self.1))
    }
}

impl MinAvgTwoSlice for [i64] {
    fn min_avg_two_slice(&self) -> Option<usize> {
        let a: Vec<_> = self.iter().map(|&x| i128::from(x)).collect();
        let mut best: Option<(Avg, usize)> = None;
        for i in 0..a.len().saturating_sub(1) {
            let two = Avg(a[i] + a[i + 1], 2);
            let three = a.get(i + 2).map(|&z| Avg(two.0 + z, 3));
            for avg in std::iter::once(two).chain(three) {
                if best.map_or(true, |(b, _)| avg.cmp(b).is_lt()) {
                    best = Some((avg, i));
                }
            }
        }
        best.map(|(_, i)| i)
    }
}

#[test]
fn sanity_check() {
    assert_eq!([4_i64, 2, 2, 5, 1, 5, 8].min_avg_two_slice(), Some(1));
    assert_eq!([1_i64, 1].min_avg_two_slice(), Some(0));
    assert_eq!([5_i64, 1, 1, 1].min_avg_two_slice(), Some(1));
    assert_eq!([-3_i64, -5, -8, -4, -10].min_avg_two_slice(), Some(2));
    assert_eq!([1_i64].min_avg_two_slice(), None);
    assert_eq!([10_i64, 10, -1, 2, 4, -1, 2, -1].min_avg_two_slice(), Some(5));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute(a: &[i64]) -> Option<usize> {
        let n = a.len();
        let mut best: Option<(Avg, usize)> = None;
        for i in 0..n {
            for j in i + 2..=n {
                let sum: i64 = a[i..j].iter().sum();
                let avg = Avg(sum.into(), (j - i) as i128);
                if best.map_or(true, |(b, _)| avg.cmp(b).is_lt()) {
                    best = Some((avg, i));
                }
            }
        }
        best.map(|(_, i)| i)
    }

    #[test]
    fn exhaustive() {
        for len in 0..=6 {
            for x in 0..5_u32.pow(len) {
                let a: Vec<i64> =
                    std::iter::successors(Some(x), |x| Some(x / 5))
                        .map(|x| i64::from(x % 5) - 2)
                        .take(len as usize)
                        .collect();
                assert_eq!(a.min_avg_two_slice(), brute(&a), "{a:?}");
            }
        }
    }
}
