//! Fish swimming in a river, listed from upstream to downstream. Two fish
//! meet when one swimming downstream is above one swimming upstream; the
//! larger eats the smaller.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Upstream,
    Downstream,
}

pub trait Fish {
    fn surviving_fish(&self) -> usize;
}

impl<T: Ord> Fish for [(T, Direction)] {
    fn surviving_fish(&self) -> usize {
        let mut downstream: Vec<&T> = vec![];
        let mut upstream_alive = 0;
        for (size, dir) in self {
            match dir {
                Direction::Downstream => downstream.push(size),
                Direction::Upstream => {
                    while downstream.last().is_some_and(|&d| d < size) {
                        downstream.pop();
                    }
                    if downstream.is_empty() {
                        upstream_alive += 1;
                    }
                }
            }
        }
        upstream_alive + downstream.len()
    }
}

#[test]
fn sanity_check() {
    use Direction::{Downstream as D, Upstream as U};

    assert_eq!([(4, U), (3, D), (2, U), (1, U), (5, U)].surviving_fish(), 2);
    assert_eq!([(1, D), (2, U)].surviving_fish(), 1);
    assert_eq!([(2, D), (1, U)].surviving_fish(), 1);
    assert_eq!([(1, U), (2, D)].surviving_fish(), 2);
    assert_eq!([(5, D), (1, D), (3, U)].surviving_fish(), 1);
    assert_eq!(<[(u8, Direction)]>::surviving_fish(&[]), 0);
}
