// src/models/ornstein_uhlenbeck.rs
use crate::error::validation::{validate_finite, validate_non_negative};
use crate::error::SdeResult;
use crate::process::DiffusionProcess;

/// Ornstein-Uhlenbeck mean-reverting process,
/// ```text
/// dX = speed * (level - X) dt + sigma dz(t)
/// ```
///
/// The conditional moments are known in closed form:
/// ```text
/// E[X(t+dt) | X(t) = x]   = level + (x - level) * exp(-speed * dt)
/// Var[X(t+dt) | X(t) = x] = sigma^2 * (1 - exp(-2 * speed * dt)) / (2 * speed)
/// ```
/// so this model overrides the Euler defaults with the exact formulas.
#[derive(Clone, Copy, Debug)]
pub struct OrnsteinUhlenbeckProcess {
    speed: f64,
    level: f64,
    sigma: f64,
    x0: f64,
}

impl OrnsteinUhlenbeckProcess {
    /// Create a new Ornstein-Uhlenbeck process.
    ///
    /// `speed` and `sigma` must be finite and non-negative; `level` must be
    /// finite. Zero speed degenerates to arithmetic Brownian motion.
    pub fn new(speed: f64, sigma: f64, x0: f64, level: f64) -> SdeResult<Self> {
        validate_finite("speed", speed)?;
        validate_non_negative("speed", speed)?;
        validate_finite("sigma", sigma)?;
        validate_non_negative("sigma", sigma)?;
        validate_finite("level", level)?;
        Ok(OrnsteinUhlenbeckProcess {
            speed,
            level,
            sigma,
            x0,
        })
    }

    /// Speed of mean reversion.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Long-run level.
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Volatility.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl DiffusionProcess for OrnsteinUhlenbeckProcess {
    fn x0(&self) -> f64 {
        self.x0
    }

    fn drift(&self, _t: f64, x: f64) -> f64 {
        self.speed * (self.level - x)
    }

    fn diffusion(&self, _t: f64, _x: f64) -> f64 {
        self.sigma
    }

    // Exact conditional mean:
    // E[X(t+dt)] = level + (x - level) * exp(-speed * dt)
    fn expectation(&self, _t0: f64, x0: f64, dt: f64) -> f64 {
        self.level + (x0 - self.level) * (-self.speed * dt).exp()
    }

    // Exact conditional variance:
    // Var = sigma^2 * (1 - exp(-2 * speed * dt)) / (2 * speed)
    fn variance(&self, _t0: f64, _x0: f64, dt: f64) -> f64 {
        if self.speed < 1e-15 {
            // Degenerate case: no mean reversion => pure Brownian motion
            self.sigma * self.sigma * dt
        } else {
            self.sigma * self.sigma * (1.0 - (-2.0 * self.speed * dt).exp())
                / (2.0 * self.speed)
        }
    }
}
