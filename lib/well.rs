//! Physical parameters and eigenvalue residual for the one-dimensional finite
//! square well.
//!
//! For a well of depth `V0` and width `a`, bound-state energies `E` satisfy
//! ```text
//! α(E) cot(α(E) a) + β(E) = 0
//! α(E) = √(2 m E / ħ²)
//! β(E) = √(2 m (V0 − E) / ħ²)
//! ```
//! with `α` the wavenumber inside the well and `β` the decay constant of the
//! evanescent tail outside it. The residual is real only for `E` in
//! `[0, V0]`; outside that interval the square roots go imaginary and NaN
//! propagates through any caller (this is deliberately left unguarded).

use crate::roots::{ self, Method, RootResult };

/// Default well depth `V0` (eV).
pub const DEF_DEPTH: f64 = 10.0;

/// Default well width `a` (Å).
pub const DEF_WIDTH: f64 = 3.0;

/// ħ² for energies in eV, lengths in Å, and masses in electron masses
/// (eV Å² mₑ).
pub const HBAR2: f64 = 7.6199682;

/// Default particle mass `m` (electron masses).
pub const DEF_MASS: f64 = 1.0;

/// Immutable physical parameters of a finite square well.
///
/// Passed by value into every evaluation so the residual stays referentially
/// transparent; there is no module-level mutable state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Well {
    /// Well depth `V0` (eV).
    pub v0: f64,
    /// Well width `a` (Å).
    pub a: f64,
    /// Squared reduced Planck constant `ħ²` (eV Å² mₑ).
    pub hbar2: f64,
    /// Particle mass `m` (electron masses).
    pub m: f64,
}

impl Default for Well {
    fn default() -> Self {
        Self { v0: DEF_DEPTH, a: DEF_WIDTH, hbar2: HBAR2, m: DEF_MASS }
    }
}

impl Well {
    /// Create a new `Well`.
    pub fn new(v0: f64, a: f64, hbar2: f64, m: f64) -> Self {
        Self { v0, a, hbar2, m }
    }

    /// Wavenumber inside the well, `√(2 m E / ħ²)`; real only for `E ≥ 0`.
    pub fn alpha(&self, e: f64) -> f64 {
        (2.0 * self.m * e / self.hbar2).sqrt()
    }

    /// Decay constant outside the well, `√(2 m (V0 − E) / ħ²)`; real only for
    /// `E ≤ V0`.
    pub fn beta(&self, e: f64) -> f64 {
        (2.0 * self.m * (self.v0 - e) / self.hbar2).sqrt()
    }

    /// Eigenvalue residual `α(E) cot(α(E) a) + β(E)`; its zeros on `(0, V0)`
    /// are the bound-state energies.
    ///
    /// Evaluating outside `[0, V0]` yields NaN, which propagates through the
    /// root-finders until their iteration cap.
    pub fn residual(&self, e: f64) -> f64 {
        let al = self.alpha(e);
        al / (al * self.a).tan() + self.beta(e)
    }

    /// Placeholder derivative `cos(E) − 1/2` consulted by
    /// [`Method::Newton`].
    ///
    /// **Known defect, kept for compatibility**: this is *not* the derivative
    /// of [`Self::residual`] (it is the derivative of `sin(E) − E/2`), so
    /// Newton steps through it form a fixed-point map with no quadratic
    /// convergence guarantee. It happens to be contractive near the lowest
    /// eigenvalue of the default well, but divergence elsewhere is a real
    /// risk; prefer a bracket method when in doubt.
    pub fn derivative(&self, e: f64) -> f64 {
        e.cos() - 0.5
    }

    /// Thin interface to [`find_root`][roots::find_root] over
    /// [`Self::residual`] and [`Self::derivative`].
    pub fn solve(&self, method: Method) -> RootResult<f64> {
        let w = *self;
        roots::find_root(
            move |e| w.residual(e),
            move |e| w.derivative(e),
            method,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // lowest eigenvalue of the default well on the bracket [2, 3]
    const E0: f64 = 2.8213918647;

    #[test]
    fn residual_brackets_the_lowest_eigenvalue() {
        let w = Well::default();
        assert!(w.residual(2.0) > 0.0);
        assert!(w.residual(3.0) < 0.0);
    }

    #[test]
    fn residual_is_nan_outside_the_well() {
        let w = Well::default();
        assert!(w.residual(-1.0).is_nan());
        assert!(w.residual(11.0).is_nan());
    }

    #[test]
    fn all_methods_agree_on_the_lowest_eigenvalue() {
        let w = Well::default();
        let methods = [
            Method::Bisect {
                bounds: (2.0, 3.0), epsilon: None, maxiters: None },
            Method::FalsePosition {
                bounds: (2.0, 3.0), epsilon: None, maxiters: None },
            Method::Secant { x0: 2.5, epsilon: None, maxiters: None },
            // the mismatched derivative happens to be contractive here
            Method::Newton { x0: 2.5, epsilon: None, maxiters: None },
        ];
        for method in methods {
            let e = w.solve(method).unwrap();
            assert!((e - E0).abs() < 1e-6, "{e}");
        }
    }

    #[test]
    fn nan_residual_runs_out_the_cap() {
        use crate::error::RootError;
        let w = Well::default();
        // bracket entirely outside the well
        let method = Method::Bisect {
            bounds: (11.0, 12.0), epsilon: None, maxiters: None };
        let res = w.solve(method);
        assert!(matches!(res, Err(RootError::IterationLimit(30))));
    }
}
