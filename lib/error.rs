//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned from [`simpson_samples`][crate::quad::simpson_samples] when the
/// number of samples is even; the 1-4-2 weighting needs an even number of
/// intervals.
#[derive(Debug, Error)]
#[error("Simpson's rule requires an odd number of samples; got {0}")]
pub struct SampleCountError(pub usize);

impl SampleCountError {
    pub(crate) fn check<S, A>(a: &nd::ArrayBase<S, nd::Ix1>)
        -> Result<(), Self>
    where S: nd::Data<Elem = A>
    {
        let n = a.len();
        (n % 2 == 1).then_some(()).ok_or(Self(n))
    }
}

/// Returned from quadrature functions.
#[derive(Debug, Error)]
pub enum QuadError {
    /// Returned when a zero subdivision count is encountered.
    #[error("subdivision counts must be greater than 0; got {0}")]
    BadSubdivisions(usize),

    /// [`LengthError`]
    #[error("length error: {0}")]
    Length(#[from] LengthError),

    /// [`SampleCountError`]
    #[error("sample count error: {0}")]
    SampleCount(#[from] SampleCountError),
}

impl QuadError {
    pub(crate) fn check_subdivisions(n: usize) -> Result<(), Self> {
        (n != 0).then_some(()).ok_or(Self::BadSubdivisions(n))
    }
}

// floor below which a slope denominator is treated as degenerate; NaN fails
// the comparison, so NaN residuals propagate to the iteration cap instead
pub(crate) const SLOPE_FLOOR: f64 = 1e-14;

/// Returned from root-finding functions.
#[derive(Debug, Error)]
pub enum RootError {
    /// Returned when a non-positive `epsilon` value is encountered.
    #[error("epsilon values must be greater than 0; got {0}")]
    BadEpsilon(f64),

    /// Returned when a zero `maxiters` value is encountered.
    #[error("maxiters must be greater than 0; got {0}")]
    BadMaxiters(usize),

    /// Returned when the iteration cap is reached before the residual
    /// tolerance is met.
    #[error("number of iterations exceeded the limit ({0})")]
    IterationLimit(usize),

    /// Returned when a derivative or secant-slope denominator falls below the
    /// degeneracy floor.
    #[error("near-zero slope denominator; got {0:e}")]
    DegenerateSlope(f64),
}

impl RootError {
    pub(crate) fn check_epsilon(epsilon: f64) -> Result<(), Self> {
        (epsilon > 0.0).then_some(()).ok_or(Self::BadEpsilon(epsilon))
    }

    pub(crate) fn check_maxiters(maxiters: usize) -> Result<(), Self> {
        (maxiters != 0).then_some(()).ok_or(Self::BadMaxiters(maxiters))
    }

    pub(crate) fn check_slope(denom: f64) -> Result<(), Self> {
        (!(denom.abs() < SLOPE_FLOOR))
            .then_some(())
            .ok_or(Self::DegenerateSlope(denom))
    }
}
