//! Strict-majority detection.
//!
//! A value is the majority (the *dominator*) of a sequence when it occupies
//! more than half of its positions; exactly half does not count.
//!
//! ```
//! use majority_vote::MajorityVote;
//!
//! assert_eq!([3, 4, 3, 2, 3, -1, 3, 3].dominator(), Some(0));
//! assert_eq!([1, 2, 1, 2].dominator(), None);
//! ```

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Majority<'a, T> {
    pub value: &'a T,
    /// Index of the first occurrence of `value`.
    pub first: usize,
    pub count: usize,
}

pub trait MajorityVote {
    type Item;
    fn majority_vote(&self) -> Option<Majority<'_, Self::Item>>;
    fn dominator(&self) -> Option<usize> {
        self.majority_vote().map(|m| m.first)
    }
}

impl<T: Eq> MajorityVote for [T] {
    type Item = T;
    fn majority_vote(&self) -> Option<Majority<'_, T>> {
        let mut maj = self.first()?;
        let mut vote = 1;
        let n = self.len();
        for x in &self[1..] {
            if maj == x {
                vote += 1;
            } else if vote == 0 {
                maj = x;
                vote = 1;
            } else {
                vote -= 1;
            }
        }

        let mut count = 0;
        let mut first = None;
        for (i, x) in self.iter().enumerate() {
            if maj == x {
                count += 1;
                first.get_or_insert(i);
            }
        }
        let first = first?;
        (count > n - count).then(|| Majority { value: maj, first, count })
    }
}

#[test]
fn sanity_check() {
    assert_eq!(
        [1].majority_vote(),
        Some(Majority { value: &1, first: 0, count: 1 })
    );
    assert_eq!(
        [1, 2, 1, 2, 1].majority_vote(),
        Some(Majority { value: &1, first: 0, count: 3 })
    );
    assert_eq!([1, 2, 1, 2, 3].majority_vote(), None);
    assert_eq!([1, 2, 1, 2].majority_vote(), None);

    let empty: [i32; 0] = [];
    assert_eq!(empty.majority_vote(), None);
}

#[test]
fn first_occurrence() {
    assert_eq!([1, 2, 1, 1, 3].dominator(), Some(0));
    assert_eq!([2, 1, 1, 3, 1].dominator(), Some(1));
    assert_eq!([4, 4, 4].dominator(), Some(0));
    assert_eq!([9, 7, 7].dominator(), Some(1));
    assert_eq!([1, 2, 3].dominator(), None);
    assert_eq!(["a", "b", "b"].dominator(), Some(1));
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;
    use tally_majority::TallyMajority;

    use super::*;

    #[test]
    fn exhaustive() {
        for len in 0..=7 {
            for x in 0..3_u32.pow(len) {
                let a: Vec<_> = std::iter::successors(Some(x), |x| Some(x / 3))
                    .map(|x| x % 3)
                    .take(len as usize)
                    .collect();
                assert_eq!(a.dominator(), a.tally_majority(), "{a:?}");
            }
        }
    }

    #[test]
    fn random() {
        let mut rng = ChaCha20Rng::seed_from_u64(0x6d61_6a6f_7269_7479);
        for _ in 0..1000 {
            let len = rng.gen_range(0..40);
            let alphabet = rng.gen_range(1..4);
            let a: Vec<u8> =
                (0..len).map(|_| rng.gen_range(0..alphabet)).collect();
            assert_eq!(a.dominator(), a.tally_majority(), "{a:?}");
        }
    }
}
