use std::collections::HashMap;
use std::hash::Hash;

pub trait TallyMajority {
    fn tally_majority(&self) -> Option<usize>;
}

impl<T: Eq + Hash> TallyMajority for [T] {
    fn tally_majority(&self) -> Option<usize> {
        let mut tally = HashMap::new();
        for x in self {
            *tally.entry(x).or_insert(0_usize) += 1;
        }
        let (&top, &count) = tally.iter().max_by_key(|&(_, &c)| c)?;
        if count * 2 <= self.len() {
            return None;
        }
        self.iter().position(|x| x == top)
    }
}

#[test]
fn sanity_check() {
    assert_eq!([1, 2, 1, 1, 3].tally_majority(), Some(0));
    assert_eq!([1, 2, 3].tally_majority(), None);
    assert_eq!([5, 6].tally_majority(), None);
    assert_eq!([0].tally_majority(), Some(0));
    assert_eq!(<[u8]>::tally_majority(&[]), None);
}
