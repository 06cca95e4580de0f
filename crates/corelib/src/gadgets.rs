//! Integer gadgets: silent 16-bit narrowing and the range checks that guard it.

pub mod narrow;
pub mod range;
