//! Solutions to short algorithmic lessons, one crate per problem.
//!
//! The three with real state to maintain:
//!
//! - [`leader::majority_vote`]: streaming strict-majority vote,
//! - [`stack::stone_wall`]: block counting over a stack of open heights,
//! - [`sorting::disc_intersection`]: a sweep over disc closing positions
//!   with an overflow cut-off.
//!
//! ```
//! use lessonlib_doc::leader::MajorityVote;
//! use lessonlib_doc::sorting::DiscIntersection;
//! use lessonlib_doc::stack::StoneWall;
//!
//! assert_eq!([1, 2, 1, 1, 3].dominator(), Some(0));
//! assert_eq!([1, 2, 2, 3, 1].stone_wall(), 3);
//! assert_eq!([1_u32, 5, 2, 1, 4, 0].disc_intersections(), Some(11));
//! ```

pub use arrays;
pub use counting;
pub use fmt;
pub use inner;
pub use io;
pub use iterations;
pub use leader;
pub use naive;
pub use prefix_sums;
pub use scoped;
pub use sorting;
pub use stack;
pub use time_complexity;
