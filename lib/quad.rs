//! Definite-integral approximation via the composite trapezoidal and Simpson
//! rules, over callable functions or sampled data.
//!
//! ```
//! use std::f64::consts::PI;
//! use sqwell::quad::trapezoid;
//!
//! let int = trapezoid(f64::sin, 0.0, PI, 1000).unwrap();
//! assert!((int - 2.0).abs() < 1e-5);
//! ```
//!
//! Sampled-data variants take [`ndarray`] arrays and assume samples over even
//! intervals; malformed inputs (mismatched lengths, an even Simpson sample
//! count, a zero subdivision count) fail fast with a descriptive
//! [`QuadError`].

use ndarray as nd;
use num_traits::Num;
use crate::{
    Arr1,
    error::{ LengthError, QuadError, SampleCountError },
};

pub type QuadResult<T> = Result<T, QuadError>;

/// Integrate a function over `[x0, xn]` using the composite trapezoidal rule
/// with `n ≥ 1` equal subintervals.
///
/// Accuracy is `O(h²)` in the subinterval width `h` for smooth integrands.
pub fn trapezoid<F>(f: F, x0: f64, xn: f64, n: usize) -> QuadResult<f64>
where F: Fn(f64) -> f64
{
    QuadError::check_subdivisions(n)?;
    let h = (xn - x0) / n as f64;
    let sum: f64
        = 0.5 * (f(x0) + f(xn))
        + (1..n).map(|i| f(x0 + i as f64 * h)).sum::<f64>();
    Ok(sum * h)
}

/// Integrate sampled data using the trapezoidal rule, assuming `y` is sampled
/// over even intervals of `x`.
///
/// The spacing is taken as `(x[n−1] − x[0]) / (n − 1)`; unevenly spaced
/// samples silently degrade accuracy rather than erroring.
///
/// *Panics if the arrays have length less than 2*.
pub fn trapezoid_samples<S, T>(x: &Arr1<S>, y: &Arr1<T>) -> QuadResult<f64>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    LengthError::check(x, y)?;
    let n = x.len();
    let h = (x[n - 1] - x[0]) / (n - 1) as f64;
    let sum = 0.5 * (y[0] + y[n - 1]) + y.slice(nd::s![1..n - 1]).sum();
    Ok(sum * h)
}

/// Integrate sampled data with known uniform spacing `dx` using the
/// trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapezoid_uniform<S, A>(y: &Arr1<S>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Num + Copy,
{
    let n = y.len();
    let two = A::one() + A::one();
    (dx / two) * (y[0] + two * y.slice(nd::s![1..n - 1]).sum() + y[n - 1])
}

/// Integrate sampled data using the composite Simpson rule, assuming `y` is
/// sampled over even intervals of `x`.
///
/// Requires an odd number of samples (an even number of intervals) for the
/// 1-4-2 endpoint/interior weighting; accuracy is `O(h⁴)` for smooth
/// integrands.
pub fn simpson_samples<S, T>(x: &Arr1<S>, y: &Arr1<T>) -> QuadResult<f64>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    LengthError::check(x, y)?;
    SampleCountError::check(y)?;
    let n = x.len();
    let h = (x[n - 1] - x[0]) / (n - 1) as f64;
    let sum: f64
        = y[0] + y[n - 1]
        + y.iter().enumerate().take(n - 1).skip(1)
            .map(|(i, yi)| if i % 2 == 0 { 2.0 * yi } else { 4.0 * yi })
            .sum::<f64>();
    Ok(sum * h / 3.0)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use super::*;

    #[test]
    fn trapezoid_matches_the_analytic_integral() {
        let int = trapezoid(f64::sin, 0.0, PI, 1000).unwrap();
        assert!((int - 2.0).abs() < 1e-5);
    }

    #[test]
    fn trapezoid_rejects_zero_subdivisions() {
        let res = trapezoid(f64::sin, 0.0, PI, 0);
        assert!(matches!(res, Err(QuadError::BadSubdivisions(0))));
    }

    #[test]
    fn sampled_rules_agree_with_the_analytic_integral() {
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, PI, 101);
        let y = x.mapv(f64::sin);
        let trap = trapezoid_samples(&x, &y).unwrap();
        let simp = simpson_samples(&x, &y).unwrap();
        assert!((trap - 2.0).abs() < 1e-3);
        assert!((simp - 2.0).abs() < 1e-7);
        // O(h⁴) beats O(h²) on the same grid
        assert!((simp - 2.0).abs() < (trap - 2.0).abs());
    }

    #[test]
    fn trapezoid_uniform_matches_the_sampled_rule() {
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, PI, 101);
        let y = x.mapv(f64::sin);
        let a = trapezoid_samples(&x, &y).unwrap();
        let b = trapezoid_uniform(&y, x[1] - x[0]);
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn sampled_rules_reject_mismatched_lengths() {
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 5);
        let y: nd::Array1<f64> = nd::Array1::zeros(4);
        let res = trapezoid_samples(&x, &y);
        assert!(matches!(res, Err(QuadError::Length(_))));
        let res = simpson_samples(&x, &y);
        assert!(matches!(res, Err(QuadError::Length(_))));
    }

    #[test]
    fn simpson_rejects_an_even_sample_count() {
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 4);
        let y = x.clone();
        let res = simpson_samples(&x, &y);
        assert!(matches!(res, Err(QuadError::SampleCount(_))));
    }
}
