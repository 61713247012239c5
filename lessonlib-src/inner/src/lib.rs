/// Re-exports each listed lesson crate both as a module and as a glob, so
/// that a topic crate reads as a flat namespace in the rendered docs.
///
/// ```ignore
/// doc_inline_reexport! {
///     stone_wall,
///     brackets,
/// }
/// ```
#[macro_export]
macro_rules! doc_inline_reexport {
    ( $($lib:ident),* $(,)? ) => { $(
        #[doc(inline)]
        pub use $lib::{self, *};
    )* };
}

/// Maps an optional count to the `-1` sentinel used by the exercise
/// harnesses.
///
/// ```
/// use inner::SentinelExt;
///
/// assert_eq!(Some(3_usize).or_sentinel(), 3);
/// assert_eq!(None::<usize>.or_sentinel(), -1);
/// ```
pub trait SentinelExt {
    fn or_sentinel(self) -> i128;
}

macro_rules! impl_sentinel {
    ( $($ty:ty)* ) => { $(
        impl SentinelExt for Option<$ty> {
            fn or_sentinel(self) -> i128 { self.map_or(-1, |x| x as i128) }
        }
    )* }
}

impl_sentinel! { u8 u16 u32 u64 usize i64 i128 }

#[test]
fn sanity_check() {
    assert_eq!(Some(0_u32).or_sentinel(), 0);
    assert_eq!(Some(u64::MAX).or_sentinel(), u64::MAX as i128);
    assert_eq!(Some(-5_i64).or_sentinel(), -5);
    assert_eq!(None::<u8>.or_sentinel(), -1);
}
