//! Counting intersecting pairs among discs centred on consecutive integers.
//!
//! Disc `i` with radius `r` covers `[i - r, i + r]`. Two discs intersect
//! when they share at least one point.
//!
//! The sweep goes left to right. Each disc counts the later centres it
//! reaches by itself, which needs no knowledge of their radii. Pairs in
//! which the earlier disc does not reach the later centre are counted by
//! the later disc instead: it looks up how many earlier discs close inside
//! its own left half.
//!
//! ```
//! use disc_intersection::DiscIntersection;
//!
//! assert_eq!([1_u32, 5, 2, 1, 4, 0].disc_intersections(), Some(11));
//! assert_eq!([1_u32, 5, 2, 1, 4, 0].disc_intersections_within(10), None);
//! ```

use tracing::debug;

/// Counts above this are reported as `None`.
pub const INTERSECTION_LIMIT: usize = 10_000_000;

pub trait DiscIntersection {
    fn disc_intersections(&self) -> Option<usize> {
        self.disc_intersections_within(INTERSECTION_LIMIT)
    }
    fn disc_intersections_within(&self, limit: usize) -> Option<usize>;
}

macro_rules! impl_uint {
    ( $($ty:ty)* ) => { $(
        impl DiscIntersection for [$ty] {
            fn disc_intersections_within(&self, limit: usize) -> Option<usize> {
                sweep(
                    self.len(),
                    |i| usize::try_from(self[i]).unwrap_or(usize::MAX),
                    limit,
                )
            }
        }
    )* }
}

impl_uint! { u8 u16 u32 u64 u128 usize }

fn sweep(
    n: usize,
    radius: impl Fn(usize) -> usize,
    limit: usize,
) -> Option<usize> {
    // closing[k]: discs whose right end is exactly `k`. Ends at or beyond
    // `n` are never looked up.
    let mut closing = vec![0_usize; n];
    // closed_before[k]: discs whose right end is less than `k`.
    let mut closed_before = vec![0_usize; n + 1];
    let mut total = 0_usize;

    let exceeded = |total: usize, center: usize| {
        let over = total > limit;
        if over {
            debug!(total, limit, center, "disc intersections exceed limit");
        }
        over
    };

    for c in 0..n {
        if c > 0 {
            closed_before[c] = closed_before[c - 1] + closing[c - 1];
        }
        let r = radius(c);

        total = total.saturating_add(r.min(n - c - 1));
        if exceeded(total, c) {
            return None;
        }

        // Every disc closing before `c` was already processed.
        let left = closed_before[c] - closed_before[c.saturating_sub(r)];
        total = total.saturating_add(left);
        if exceeded(total, c) {
            return None;
        }

        if let Some(end) = c.checked_add(r).filter(|&end| end < n) {
            closing[end] += 1;
        }
    }
    Some(total)
}

#[test]
fn sanity_check() {
    assert_eq!([1_u32, 5, 2, 1, 4, 0].disc_intersections(), Some(11));
    assert_eq!(<[u32]>::disc_intersections(&[]), Some(0));
    assert_eq!([7_u32].disc_intersections(), Some(0));
    assert_eq!([0_u32; 10].disc_intersections(), Some(0));
    assert_eq!([1_u8, 0].disc_intersections(), Some(1));
    assert_eq!([0_u8, 0, 1].disc_intersections(), Some(1));
    assert_eq!([u64::MAX, u64::MAX, 0].disc_intersections(), Some(3));
}

#[test]
fn limit() {
    let a = [1_usize, 5, 2, 1, 4, 0];
    assert_eq!(a.disc_intersections_within(11), Some(11));
    assert_eq!(a.disc_intersections_within(10), None);
    assert_eq!(a.disc_intersections_within(0), None);
    assert_eq!([0_usize, 0].disc_intersections_within(0), Some(0));

    // 5000 * 4999 / 2 pairs
    let wide = vec![5000_u32; 5000];
    assert_eq!(wide.disc_intersections(), None);
    assert_eq!(wide.disc_intersections_within(usize::MAX), Some(12_497_500));
}

#[cfg(test)]
mod tests {
    use pair_discs::PairDiscs;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    use super::*;

    #[test]
    fn random() {
        let mut rng = ChaCha20Rng::seed_from_u64(0x6469_7363_7377_6565);
        for _ in 0..500 {
            let len: usize = rng.gen_range(0..80);
            let max = rng.gen_range(0..len.max(1) * 2);
            let a: Vec<usize> =
                (0..len).map(|_| rng.gen_range(0..=max)).collect();
            let expected = a.pair_discs();
            assert_eq!(a.disc_intersections(), Some(expected), "{a:?}");

            let mut rev = a.clone();
            rev.reverse();
            assert_eq!(rev.disc_intersections(), Some(expected), "{a:?}");

            if expected > 0 {
                let limit = expected - 1;
                assert_eq!(a.disc_intersections_within(limit), None, "{a:?}");
            }
        }
    }
}
