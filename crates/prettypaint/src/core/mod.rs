mod equality;
mod math;

// equality
pub use equality::to_eq_bits;

// math
pub(crate) use math::FloatExt;
pub(crate) use math::{Sum, ThreeSum};
