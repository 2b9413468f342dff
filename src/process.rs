//! The diffusion process contract.
//!
//! A one-dimensional diffusion process is governed by the stochastic
//! differential equation
//! ```text
//! dx(t) = mu(t, x(t)) dt + sigma(t, x(t)) dz(t)
//! ```
//! where `mu` is the drift coefficient, `sigma` the diffusion coefficient,
//! and `z(t)` a Brownian motion. A concrete model supplies `mu` and `sigma`;
//! the short-horizon conditional moments come for free via a first-order
//! Euler-Maruyama discretization, and may be replaced by exact closed forms
//! where the model has them.

/// A one-dimensional continuous-time diffusion process.
///
/// Implementors must supply [`drift`](DiffusionProcess::drift) and
/// [`diffusion`](DiffusionProcess::diffusion); both must be pure,
/// deterministic functions of `(t, x)`, total over finite inputs. The
/// initial value is fixed at construction and never mutated, so a process
/// is freely shareable across threads (hence the `Send + Sync` bound):
/// every operation is a read of immutable state plus arithmetic on the
/// arguments.
///
/// [`expectation`](DiffusionProcess::expectation) and
/// [`variance`](DiffusionProcess::variance) have default implementations
/// derived from the coefficients. Models whose conditional moments are
/// known in closed form are encouraged to override them; the defaults are
/// a fallback, not a mandate.
pub trait DiffusionProcess: Send + Sync {
    /// Initial value `x(0)` of the process.
    fn x0(&self) -> f64;

    /// Drift coefficient `mu(t, x)`.
    fn drift(&self, t: f64, x: f64) -> f64;

    /// Diffusion coefficient `sigma(t, x)`.
    fn diffusion(&self, t: f64, x: f64) -> f64;

    /// Conditional expectation `E[x(t0 + dt) | x(t0) = x0]`.
    ///
    /// The process is Markov, so the conditioning state `(t0, x0)` is all
    /// that matters. By default this is the Euler approximation
    /// ```text
    /// x0 + mu(t0, x0) * dt
    /// ```
    /// with the drift evaluated at the left endpoint. Exact when the drift
    /// is constant, first-order accurate in `dt` otherwise.
    fn expectation(&self, t0: f64, x0: f64, dt: f64) -> f64 {
        x0 + self.drift(t0, x0) * dt
    }

    /// Conditional variance `Var(x(t0 + dt) | x(t0) = x0)`.
    ///
    /// By default the Euler approximation
    /// ```text
    /// sigma(t0, x0)^2 * dt
    /// ```
    /// Non-negative for any real `sigma` and `dt >= 0`. A negative `dt`
    /// yields a result whose sign follows `dt`; that is an approximation
    /// artifact of the formula, passed through unclamped, and it is the
    /// caller's responsibility to supply a meaningful time step.
    fn variance(&self, t0: f64, x0: f64, dt: f64) -> f64 {
        let sigma = self.diffusion(t0, x0);
        sigma * sigma * dt
    }
}
