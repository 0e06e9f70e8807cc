use super::{FloatT, VectorMath};
use std::iter::zip;

impl<T: FloatT> VectorMath for [T] {
    type T = T;

    fn set(&mut self, c: T) -> &mut Self {
        for x in &mut *self {
            *x = c;
        }
        self
    }

    fn scale(&mut self, c: T) -> &mut Self {
        for x in &mut *self {
            *x *= c;
        }
        self
    }

    fn negate(&mut self) -> &mut Self {
        for x in &mut *self {
            *x = -*x;
        }
        self
    }

    fn dot(&self, y: &[T]) -> T {
        assert_eq!(self.len(), y.len());
        zip(self, y).fold(T::zero(), |acc, (&x, &y)| acc + x * y)
    }

    // Returns infinity norm, with NaN propagation
    fn norm_inf(&self) -> T {
        let mut out = T::zero();
        for v in self.iter().map(|v| v.abs()) {
            if v.is_nan() {
                return T::nan();
            }
            out = if v > out { v } else { out };
        }
        out
    }

    // max absolute difference (used for unit testing)
    fn norm_inf_diff(&self, b: &[T]) -> T {
        zip(self, b).fold(T::zero(), |acc, (x, y)| T::max(acc, T::abs(*x - *y)))
    }

    fn is_finite(&self) -> bool {
        self.iter().all(|&x| T::is_finite(x))
    }
}

#[test]
fn test_dot_product() {
    let x = vec![1., 2., 3., 4.];
    let y = vec![4., 5., 6., 7.];
    assert_eq!(x.dot(&y), 60.);
}

#[test]
fn test_norm_inf() {
    let x = vec![1., -7., 3.];
    assert_eq!(x.norm_inf(), 7.);
    let x: Vec<f64> = vec![];
    assert_eq!(x.norm_inf(), 0.);
    let x = vec![1., f64::NAN, 3.];
    assert!(x.norm_inf().is_nan());
}
