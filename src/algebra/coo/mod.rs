//! Sparse matrices in coordinate (triplet) format and their kernels.

mod core;
mod io;
mod matrix_math;
mod sym;

pub use self::core::*;

// contract assertion used inside the kernels: active in debug builds
// only, unconditional when the "deepchecks" feature is enabled
cfg_if::cfg_if! {
    if #[cfg(feature = "deepchecks")] {
        macro_rules! deep_assert {
            ($($tokens:tt)*) => { assert!($($tokens)*) };
        }
    } else {
        macro_rules! deep_assert {
            ($($tokens:tt)*) => { debug_assert!($($tokens)*) };
        }
    }
}
pub(crate) use deep_assert;
