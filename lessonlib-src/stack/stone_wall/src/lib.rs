//! Minimum number of rectangular blocks that build a skyline.
//!
//! Blocks are laid left to right and stacked bottom-up. A block stays *open*
//! while the profile does not drop below its top; once closed it is never
//! reused. The open blocks form a stack whose tops strictly increase from
//! bottom to top.
//!
//! ```
//! use stone_wall::StoneWall;
//!
//! let h = [8, 8, 5, 7, 9, 8, 7, 4, 8];
//! assert_eq!(h.stone_wall(), 7);
//! assert_eq!(h.wall_blocks().len(), 7);
//! ```

use std::ops::Range;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WallBlock<'a, T> {
    /// Top of the block. Its bottom is the top of whatever lies beneath.
    pub height: &'a T,
    pub columns: Range<usize>,
}

pub trait StoneWall {
    type Item;
    fn stone_wall(&self) -> usize;
    /// Blocks of a minimal placement, in the order they are closed.
    fn wall_blocks(&self) -> Vec<WallBlock<'_, Self::Item>>;
}

impl<T: Ord> StoneWall for [T] {
    type Item = T;
    fn stone_wall(&self) -> usize {
        let mut open: Vec<&T> = vec![];
        let mut count = 0;
        for h in self {
            while open.last().is_some_and(|&top| top > h) {
                open.pop();
            }
            if open.last() != Some(&h) {
                open.push(h);
                count += 1;
            }
        }
        count
    }

    fn wall_blocks(&self) -> Vec<WallBlock<'_, T>> {
        let mut open: Vec<(&T, usize)> = vec![];
        let mut res = vec![];
        for (i, h) in self.iter().enumerate() {
            while let Some(&(top, start)) = open.last() {
                if top <= h {
                    break;
                }
                open.pop();
                res.push(WallBlock { height: top, columns: start..i });
            }
            if open.last().map(|&(top, _)| top) != Some(h) {
                open.push((h, i));
            }
        }
        let n = self.len();
        while let Some((top, start)) = open.pop() {
            res.push(WallBlock { height: top, columns: start..n });
        }
        res
    }
}

#[test]
fn sanity_check() {
    assert_eq!([1, 2, 2, 3, 1].stone_wall(), 3);
    assert_eq!([1, 2, 1].stone_wall(), 2);
    assert_eq!([2, 1, 2].stone_wall(), 3);
    assert_eq!([1, 1, 1].stone_wall(), 1);
    assert_eq!([3, 2, 1].stone_wall(), 3);
    assert_eq!([1, 3, 2, 3, 1].stone_wall(), 4);
    assert_eq!([5].stone_wall(), 1);

    let empty: [u32; 0] = [];
    assert_eq!(empty.stone_wall(), 0);
    assert!(empty.wall_blocks().is_empty());
}

#[test]
fn blocks() {
    let h = [1, 2, 2, 3, 1];
    assert_eq!(
        h.wall_blocks(),
        [
            WallBlock { height: &3, columns: 3..4 },
            WallBlock { height: &2, columns: 1..4 },
            WallBlock { height: &1, columns: 0..5 },
        ]
    );
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;
    use split_wall::SplitWall;

    use super::*;

    fn paint<T: Ord + Clone>(n: usize, blocks: &[WallBlock<'_, T>]) -> Vec<T> {
        (0..n)
            .map(|i| {
                blocks
                    .iter()
                    .filter(|b| b.columns.contains(&i))
                    .map(|b| b.height)
                    .max()
                    .unwrap()
                    .clone()
            })
            .collect()
    }

    fn check(h: &[u32]) {
        let blocks = h.wall_blocks();
        assert_eq!(h.stone_wall(), h.split_wall(), "{h:?}");
        assert_eq!(blocks.len(), h.stone_wall(), "{h:?}");
        assert_eq!(paint(h.len(), &blocks), h, "{h:?}");
    }

    #[test]
    fn exhaustive() {
        for len in 0..=6 {
            for x in 0..4_u32.pow(len) {
                let h: Vec<_> = std::iter::successors(Some(x), |x| Some(x / 4))
                    .map(|x| x % 4 + 1)
                    .take(len as usize)
                    .collect();
                check(&h);
            }
        }
    }

    #[test]
    fn random() {
        let mut rng = ChaCha20Rng::seed_from_u64(0x7374_6f6e_6577_616c);
        for _ in 0..500 {
            let len = rng.gen_range(0..60);
            let hi = rng.gen_range(1..20);
            let h: Vec<u32> = (0..len).map(|_| rng.gen_range(1..=hi)).collect();
            check(&h);
        }
    }

    #[test]
    fn height_offset() {
        let h = [3, 5, 4, 5, 3, 7, 7, 2];
        let lifted: Vec<_> = h.iter().map(|x| x + 100).collect();
        assert_eq!(h.stone_wall(), lifted.stone_wall());
    }
}
