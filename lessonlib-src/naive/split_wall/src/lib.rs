pub trait SplitWall {
    fn split_wall(&self) -> usize;
}

impl<T: Ord> SplitWall for [T] {
    fn split_wall(&self) -> usize { split(self) }
}

// The lowest height spans the whole segment as one block; every stretch
// rising above it is an independent wall.
fn split<T: Ord>(a: &[T]) -> usize {
    let Some(min) = a.iter().min() else { return 0 };
    1 + a.split(|x| x == min).map(split).sum::<usize>()
}

#[test]
fn sanity_check() {
    assert_eq!([8, 8, 5, 7, 9, 8, 7, 4, 8].split_wall(), 7);
    assert_eq!([1, 2, 2, 3, 1].split_wall(), 3);
    assert_eq!([1, 2, 1].split_wall(), 2);
    assert_eq!([3].split_wall(), 1);
    assert_eq!(<[u8]>::split_wall(&[]), 0);
}
