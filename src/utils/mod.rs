//! Various unsorted geometrical and logical operators.

pub use self::approx_cmp::{is_equal_approx, is_zero_approx, ApproxCmp};
pub use self::normalize::normalized_or_zero;
pub use self::sorted_pair::SortedPair;

pub mod hashmap;

mod approx_cmp;
mod normalize;
mod sorted_pair;
