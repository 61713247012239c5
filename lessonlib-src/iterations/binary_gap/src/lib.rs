pub trait BinaryGap {
    /// Length of the longest run of zeros enclosed by ones on both sides in
    /// the binary representation.
    fn binary_gap(self) -> u32;
}

macro_rules! impl_uint {
    ( $($ty:ty)* ) => { $(
        impl BinaryGap for $ty {
            fn binary_gap(self) -> u32 {
                // Trailing zeros are not enclosed.
                let mut x = self.checked_shr(self.trailing_zeros()).unwrap_or(0);
                let mut res = 0;
                while x != 0 {
                    x = x.checked_shr(x.trailing_ones()).unwrap_or(0);
                    if x == 0 {
                        break;
                    }
                    let gap = x.trailing_zeros();
                    res = res.max(gap);
                    x >>= gap;
                }
                res
            }
        }
    )* }
}

impl_uint! { u8 u16 u32 u64 u128 usize }

#[test]
fn sanity_check() {
    assert_eq!(9_u32.binary_gap(), 2);
    assert_eq!(529_u32.binary_gap(), 4);
    assert_eq!(20_u32.binary_gap(), 1);
    assert_eq!(15_u32.binary_gap(), 0);
    assert_eq!(32_u32.binary_gap(), 0);
    assert_eq!(1041_u32.binary_gap(), 5);
    assert_eq!(0_u32.binary_gap(), 0);
    assert_eq!(u32::MAX.binary_gap(), 0);
    assert_eq!(0b1000_0001_u8.binary_gap(), 6);
    assert_eq!((1_u128 << 127 | 1).binary_gap(), 126);
}

#[test]
fn against_string() {
    for n in 0..1 << 12 {
        let s = format!("{n:b}");
        let expected = s
            .trim_end_matches('0')
            .split('1')
            .map(|run| run.len() as u32)
            .max()
            .unwrap_or(0);
        assert_eq!((n as u16).binary_gap(), expected, "{s}");
    }
}
