/// Counts above this are reported as `None`.
pub const PASSING_LIMIT: u64 = 1_000_000_000;

/// Cars on a road; `false` travels east, `true` travels west. A pair
/// passes when an eastbound car is before a westbound one.
pub trait PassingCars {
    fn passing_cars(&self) -> Option<u64>;
}

impl PassingCars for [bool] {
    fn passing_cars(&self) -> Option<u64> {
        let mut east = 0_u64;
        let mut passing = 0_u64;
        for &west in self {
            if west {
                passing += east;
                if passing > PASSING_LIMIT {
                    return None;
                }
            } else {
                east += 1;
            }
        }
        Some(passing)
    }
}

#[test]
fn sanity_check() {
    let cars = [false, true, false, true, true];
    assert_eq!(cars.passing_cars(), Some(5));
    assert_eq!([true, true, false, false].passing_cars(), Some(0));
    assert_eq!(<[bool]>::passing_cars(&[]), Some(0));

    let mut many = vec![false; 50_000];
    many.extend(vec![true; 20_000]);
    assert_eq!(many.passing_cars(), Some(1_000_000_000));
    many.push(true);
    assert_eq!(many.passing_cars(), None);
}
