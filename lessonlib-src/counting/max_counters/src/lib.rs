/// Applies `ops` to `n` counters starting at zero. An operation `k` in
/// `1..=n` increments counter `k`; any larger value raises every counter to
/// the current maximum. Operation `0` is ignored.
///
/// The "max counter" operation only moves a floor; counters below it are
/// lifted lazily, so the whole run is linear.
pub fn max_counters(n: usize, ops: &[usize]) -> Vec<u64> {
    let mut counters = vec![0_u64; n];
    let mut floor = 0;
    let mut max = 0;
    for &op in ops {
        if op > n {
            floor = max;
        } else if let Some(c) = op.checked_sub(1).map(|i| &mut counters[i]) {
            *c = (*c).max(floor) + 1;
            max = max.max(*c);
        }
    }
    for c in &mut counters {
        *c = (*c).max(floor);
    }
    counters
}

#[test]
fn sanity_check() {
    assert_eq!(max_counters(5, &[3, 4, 4, 6, 1, 4, 4]), [3, 2, 2, 4, 2]);
    assert_eq!(max_counters(2, &[3, 3]), [0, 0]);
    assert_eq!(max_counters(1, &[1, 1, 2, 1]), [3]);
    assert_eq!(max_counters(3, &[]), [0, 0, 0]);
    assert!(max_counters(0, &[1, 2]).is_empty());
}

#[test]
fn naive() {
    let ops = [2, 1, 4, 2, 2, 4, 3, 1, 4, 4, 1, 3];
    let n = 3;
    let mut expected = vec![0_u64; n];
    for &op in &ops {
        if op > n {
            let m = *expected.iter().max().unwrap();
            expected.iter_mut().for_each(|c| *c = m);
        } else {
            expected[op - 1] += 1;
        }
    }
    assert_eq!(max_counters(n, &ops), expected);
}
