//! Provides two textbook numerical routines: definite-integral approximation
//! via the trapezoidal and Simpson rules over callable functions or sampled
//! data, and scalar root-finding for the bound-state eigenvalue condition of
//! the one-dimensional finite square well via four classical iterative
//! methods (bisection, Newton-Raphson, false position, and secant).
//!
//! The root-finding strategies in [`roots`] are generic over any scalar
//! residual; [`well`] supplies the eigenvalue condition itself along with its
//! physical parameters.
//!
//! ```
//! use sqwell::{ roots::Method, well::Well };
//!
//! let well = Well::default();
//! let method = Method::Bisect {
//!     bounds: (2.0, 3.0),
//!     epsilon: None,
//!     maxiters: None,
//! };
//! let e = well.solve(method).unwrap();
//! assert!(well.residual(e).abs() < 1e-9);
//! ```

pub mod error;
pub mod quad;
pub mod roots;
pub mod well;

pub(crate) const DEF_EPSILON: f64 = 1e-9;
pub(crate) const DEF_MAXITERS: usize = 30;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
