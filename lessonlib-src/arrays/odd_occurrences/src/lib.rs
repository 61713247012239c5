use std::collections::HashSet;
use std::hash::Hash;

pub trait OddOccurrences {
    type Item;
    /// Values occurring an odd number of times.
    fn odd_occurrences(&self) -> HashSet<&Self::Item>;
    /// The single unpaired value, if there is exactly one.
    fn unpaired(&self) -> Option<&Self::Item> {
        let odd = self.odd_occurrences();
        if odd.len() == 1 {
            odd.into_iter().next()
        } else {
            None
        }
    }
}

impl<T: Eq + Hash> OddOccurrences for [T] {
    type Item = T;
    fn odd_occurrences(&self) -> HashSet<&T> {
        let mut odd = HashSet::new();
        for x in self {
            if !odd.remove(x) {
                odd.insert(x);
            }
        }
        odd
    }
}

#[cfg(test)]
mod tests {
    use maplit::hashset;

    use super::*;

    #[test]
    fn sanity_check() {
        assert_eq!([9, 3, 9, 3, 9, 7, 9].unpaired(), Some(&7));
        assert_eq!([42].unpaired(), Some(&42));
        assert_eq!([1, 1].unpaired(), None);
        assert_eq!([1, 2, 3].unpaired(), None);
        assert_eq!(["x", "y", "x"].unpaired(), Some(&"y"));
    }

    #[test]
    fn odd() {
        assert_eq!([1, 2, 3, 2, 1, 1].odd_occurrences(), hashset! { &1, &3 });
        assert!([5, 5].odd_occurrences().is_empty());
    }
}
