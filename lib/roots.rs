//! Scalar root-finding via four classical iterative strategies.
//!
//! Every strategy is a pure function of its initial data: it repeatedly
//! evaluates a residual `f` until the residual magnitude falls below a
//! tolerance `epsilon`, giving up with [`RootError::IterationLimit`] once an
//! iteration cap `maxiters` is exhausted. Bracket-based strategies ([`bisect`]
//! and [`false_position`]) assume the initial bounds straddle a sign change of
//! `f`; if they do not, the search may converge to a spurious value or run out
//! the cap without diagnosis.
//!
//! Near-zero derivative and secant-slope denominators are detected explicitly
//! and reported as [`RootError::DegenerateSlope`] rather than being allowed to
//! blow up into infinities. NaN residuals (from evaluating a function outside
//! its real domain, say) are not detected; they propagate until the cap is
//! exhausted.
//!
//! Callers expecting the classical convention of a NaN sentinel for "no
//! convergence" can collapse any result through [`root_or_nan`].

use crate::{ error::RootError, DEF_EPSILON, DEF_MAXITERS };

pub type RootResult<T> = Result<T, RootError>;

// fixed perturbation used to estimate the secant slope
const SECANT_STEP: f64 = 1e-6;

#[derive(Copy, Clone, Debug)]
struct Bracket(f64, f64);

impl Bracket {
    fn midpoint(self) -> f64 { (self.0 + self.1) / 2.0 }

    fn from_ord(xx: (f64, f64)) -> Self {
        if xx.0 > xx.1 { Self(xx.1, xx.0) } else { Self(xx.0, xx.1) }
    }
}

/// Find a root of `f` within a bracket by interval bisection.
///
/// Converges linearly when the bracket straddles a sign change of `f`,
/// halving the interval around the sign change at each step and returning the
/// first midpoint whose residual magnitude is below `epsilon`.
///
/// ```
/// use sqwell::roots::bisect;
///
/// let root = bisect(|x| x * x - 2.0, 0.0, 2.0, 1e-9, 30).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-8);
/// ```
pub fn bisect<F>(f: F, low: f64, high: f64, epsilon: f64, maxiters: usize)
    -> RootResult<f64>
where F: Fn(f64) -> f64
{
    RootError::check_epsilon(epsilon)?;
    RootError::check_maxiters(maxiters)?;
    let mut bb = Bracket::from_ord((low, high));
    for _ in 0..=maxiters {
        let fl = f(bb.0);
        let mid = bb.midpoint();
        let fmid = f(mid);
        if fmid.abs() < epsilon { return Ok(mid); }
        if fl * fmid < 0.0 { bb.1 = mid; } else { bb.0 = mid; }
    }
    Err(RootError::IterationLimit(maxiters))
}

/// Find a root of `f` by Newton-Raphson stepping, `x → x − f(x)/f′(x)`, with
/// the derivative supplied by the caller as `df`.
///
/// Convergence is quadratic near a root only when `df` is the true derivative
/// of `f`; with an inexact `df` the step is a fixed-point map that may still
/// converge (when contractive near the root) or may wander off and exhaust the
/// cap. A `df` value below the degeneracy floor is reported as
/// [`RootError::DegenerateSlope`].
///
/// ```
/// use sqwell::roots::newton;
///
/// let root = newton(|x| x * x - 2.0, |x| 2.0 * x, 1.0, 1e-9, 30).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub fn newton<F, G>(f: F, df: G, x0: f64, epsilon: f64, maxiters: usize)
    -> RootResult<f64>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    RootError::check_epsilon(epsilon)?;
    RootError::check_maxiters(maxiters)?;
    let mut x = x0;
    for _ in 0..=maxiters {
        let fx = f(x);
        if fx.abs() < epsilon { return Ok(x); }
        let dfx = df(x);
        RootError::check_slope(dfx)?;
        x -= fx / dfx;
    }
    Err(RootError::IterationLimit(maxiters))
}

/// Find a root of `f` within a bracket by false position (regula falsi).
///
/// Like [`bisect`], but the next estimate is the zero crossing of the chord
/// between the bracket endpoints rather than the midpoint. Typically
/// superlinear on well-conditioned brackets; one endpoint may stagnate, which
/// is expected behavior for this method. A chord slope denominator
/// `f(high) − f(low)` below the degeneracy floor is reported as
/// [`RootError::DegenerateSlope`].
pub fn false_position<F>(
    f: F,
    low: f64,
    high: f64,
    epsilon: f64,
    maxiters: usize,
) -> RootResult<f64>
where F: Fn(f64) -> f64
{
    RootError::check_epsilon(epsilon)?;
    RootError::check_maxiters(maxiters)?;
    let mut bb = Bracket::from_ord((low, high));
    for _ in 0..=maxiters {
        let fa = f(bb.0);
        let fb = f(bb.1);
        RootError::check_slope(fb - fa)?;
        let c = bb.0 - fa * (bb.1 - bb.0) / (fb - fa);
        let fc = f(c);
        if fc.abs() < epsilon { return Ok(c); }
        if fa * fc < 0.0 { bb.1 = c; } else { bb.0 = c; }
    }
    Err(RootError::IterationLimit(maxiters))
}

/// Find a root of `f` from a single seed by secant stepping, estimating the
/// slope from a small fixed perturbation `h = 1e-6`.
///
/// The residual is checked against `epsilon` at the current point *before*
/// stepping, so a seed already within tolerance is returned untouched. A slope
/// denominator `f(x + h) − f(x)` below the degeneracy floor is reported as
/// [`RootError::DegenerateSlope`].
pub fn secant<F>(f: F, x0: f64, epsilon: f64, maxiters: usize)
    -> RootResult<f64>
where F: Fn(f64) -> f64
{
    RootError::check_epsilon(epsilon)?;
    RootError::check_maxiters(maxiters)?;
    let mut x = x0;
    for _ in 0..=maxiters {
        let fx = f(x);
        if fx.abs() < epsilon { return Ok(x); }
        let fs = f(x + SECANT_STEP);
        RootError::check_slope(fs - fx)?;
        x -= fx * SECANT_STEP / (fs - fx);
    }
    Err(RootError::IterationLimit(maxiters))
}

/// Root-finding method selector and parameters.
#[derive(Clone, Debug)]
pub enum Method {
    /// Use [interval bisection][bisect].
    Bisect {
        /// Initial bracket, assumed to straddle a sign change.
        bounds: (f64, f64),
        /// Residual tolerance (default: `1e-9`).
        epsilon: Option<f64>,
        /// Maximum number of iterations (default: `30`).
        maxiters: Option<usize>,
    },
    /// Use [Newton-Raphson stepping][newton].
    Newton {
        /// Initial guess.
        x0: f64,
        /// Residual tolerance (default: `1e-9`).
        epsilon: Option<f64>,
        /// Maximum number of iterations (default: `30`).
        maxiters: Option<usize>,
    },
    /// Use [false position][false_position].
    FalsePosition {
        /// Initial bracket, assumed to straddle a sign change.
        bounds: (f64, f64),
        /// Residual tolerance (default: `1e-9`).
        epsilon: Option<f64>,
        /// Maximum number of iterations (default: `30`).
        maxiters: Option<usize>,
    },
    /// Use [secant stepping][secant].
    Secant {
        /// Initial guess.
        x0: f64,
        /// Residual tolerance (default: `1e-9`).
        epsilon: Option<f64>,
        /// Maximum number of iterations (default: `30`).
        maxiters: Option<usize>,
    },
}

impl Method {
    /// Return `true` if `self` is `Bisect`.
    pub fn is_bisect(&self) -> bool {
        matches!(self, Self::Bisect { .. })
    }

    /// Return `true` if `self` is `Newton`.
    pub fn is_newton(&self) -> bool {
        matches!(self, Self::Newton { .. })
    }

    /// Return `true` if `self` is `FalsePosition`.
    pub fn is_false_position(&self) -> bool {
        matches!(self, Self::FalsePosition { .. })
    }

    /// Return `true` if `self` is `Secant`.
    pub fn is_secant(&self) -> bool {
        matches!(self, Self::Secant { .. })
    }
}

/// Master root-finding function for all [methods][Method].
///
/// `df` is consulted only by [`Method::Newton`]; other methods ignore it.
pub fn find_root<F, G>(f: F, df: G, method: Method) -> RootResult<f64>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    match method {
        Method::Bisect { bounds, epsilon, maxiters } => {
            bisect(
                f,
                bounds.0,
                bounds.1,
                epsilon.unwrap_or(DEF_EPSILON),
                maxiters.unwrap_or(DEF_MAXITERS),
            )
        },
        Method::Newton { x0, epsilon, maxiters } => {
            newton(
                f,
                df,
                x0,
                epsilon.unwrap_or(DEF_EPSILON),
                maxiters.unwrap_or(DEF_MAXITERS),
            )
        },
        Method::FalsePosition { bounds, epsilon, maxiters } => {
            false_position(
                f,
                bounds.0,
                bounds.1,
                epsilon.unwrap_or(DEF_EPSILON),
                maxiters.unwrap_or(DEF_MAXITERS),
            )
        },
        Method::Secant { x0, epsilon, maxiters } => {
            secant(
                f,
                x0,
                epsilon.unwrap_or(DEF_EPSILON),
                maxiters.unwrap_or(DEF_MAXITERS),
            )
        },
    }
}

/// Collapse a root-finding result to the classical NaN-sentinel convention.
///
/// On failure a diagnostic notice naming the caller via `label` is printed and
/// [`f64::NAN`] is returned; callers test the result with [`f64::is_finite`].
pub fn root_or_nan(label: &str, res: RootResult<f64>) -> f64 {
    match res {
        Ok(x) => x,
        Err(err) => {
            println!("roots::{}: WARNING: {}", label, err);
            f64::NAN
        },
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use super::*;

    const SQRT2: f64 = std::f64::consts::SQRT_2;

    fn parabola(x: f64) -> f64 { x * x - 2.0 }

    #[test]
    fn bisect_converges_on_a_valid_bracket() {
        let root = bisect(parabola, 0.0, 2.0, 1e-9, 30).unwrap();
        assert!(parabola(root).abs() < 1e-9);
        assert!((root - SQRT2).abs() < 1e-8);
    }

    #[test]
    fn bisect_same_sign_bracket_runs_out_the_cap() {
        let res = bisect(parabola, 3.0, 5.0, 1e-9, 30);
        assert!(matches!(res, Err(RootError::IterationLimit(30))));
    }

    #[test]
    fn bisect_evaluation_count_is_bounded() {
        let count = Cell::new(0_usize);
        let f = |x: f64| {
            count.set(count.get() + 1);
            parabola(x)
        };
        let _ = bisect(f, 3.0, 5.0, 1e-9, 30);
        // two evaluations per step, 31 counted steps
        assert!(count.get() <= 62);
    }

    #[test]
    fn newton_with_true_derivative_converges() {
        let root = newton(parabola, |x| 2.0 * x, 1.0, 1e-9, 30).unwrap();
        assert!((root - SQRT2).abs() < 1e-9);
    }

    #[test]
    fn newton_with_flat_derivative_is_degenerate() {
        let res = newton(parabola, |_| 0.0, 1.0, 1e-9, 30);
        assert!(matches!(res, Err(RootError::DegenerateSlope(_))));
    }

    #[test]
    fn false_position_converges_on_a_valid_bracket() {
        let root = false_position(parabola, 0.0, 2.0, 1e-9, 30).unwrap();
        assert!(parabola(root).abs() < 1e-9);
        assert!((root - SQRT2).abs() < 1e-8);
    }

    #[test]
    fn false_position_flat_chord_is_degenerate() {
        let res = false_position(|_| 1.0, 0.0, 2.0, 1e-9, 30);
        assert!(matches!(res, Err(RootError::DegenerateSlope(_))));
    }

    #[test]
    fn secant_converges_from_a_seed() {
        let root = secant(parabola, 1.0, 1e-9, 30).unwrap();
        assert!(parabola(root).abs() < 1e-9);
        assert!((root - SQRT2).abs() < 1e-8);
    }

    #[test]
    fn secant_checks_convergence_before_stepping() {
        // a seed already within tolerance must come back untouched, even
        // though the slope at it is degenerate
        let root = secant(|_| 0.0, 7.0, 1e-9, 30).unwrap();
        assert_eq!(root, 7.0);
    }

    #[test]
    fn bad_epsilon_and_maxiters_are_rejected() {
        let res = bisect(parabola, 0.0, 2.0, 0.0, 30);
        assert!(matches!(res, Err(RootError::BadEpsilon(_))));
        let res = secant(parabola, 1.0, 1e-9, 0);
        assert!(matches!(res, Err(RootError::BadMaxiters(0))));
    }

    #[test]
    fn find_root_dispatches_all_methods() {
        let methods = [
            Method::Bisect {
                bounds: (0.0, 2.0), epsilon: None, maxiters: None },
            Method::Newton { x0: 1.0, epsilon: None, maxiters: None },
            Method::FalsePosition {
                bounds: (0.0, 2.0), epsilon: None, maxiters: None },
            Method::Secant { x0: 1.0, epsilon: None, maxiters: None },
        ];
        for method in methods {
            let root = find_root(parabola, |x| 2.0 * x, method).unwrap();
            assert!((root - SQRT2).abs() < 1e-8);
        }
    }

    #[test]
    fn root_or_nan_keeps_the_sentinel_convention() {
        assert_eq!(root_or_nan("bisect", Ok(1.5)), 1.5);
        let nan = root_or_nan("bisect", Err(RootError::IterationLimit(30)));
        assert!(nan.is_nan());
    }
}
