use num_traits::{Float, FloatConst, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

/// Main trait for floating point types used throughout the crate.
///
/// All floating point calculations are represented internally on values
/// implementing the `FloatT` trait, with a blanket implementation
/// covering `f32` and `f64` (and any other type satisfying the
/// constituent bounds).
///
/// `FloatT` relies on [`num_traits`](num_traits) for most of its
/// constituent trait bounds.
pub trait FloatT:
    'static
    + Send
    + Float
    + FloatConst
    + NumAssign
    + Default
    + FromPrimitive
    + Display
    + LowerExp
    + Debug
    + Sized
{
}

impl<T> FloatT for T where
    T: 'static
        + Send
        + Float
        + FloatConst
        + NumAssign
        + Default
        + FromPrimitive
        + Display
        + LowerExp
        + Debug
        + Sized
{
}
