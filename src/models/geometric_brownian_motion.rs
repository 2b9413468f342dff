// src/models/geometric_brownian_motion.rs
use crate::error::validation::{validate_finite, validate_non_negative};
use crate::error::SdeResult;
use crate::process::DiffusionProcess;

/// Geometric Brownian motion on the price itself,
/// ```text
/// dS = mu S dt + sigma S dz(t)
/// ```
/// Both coefficients scale with the state, so the inherited Euler moments
/// are first-order approximations rather than exact.
#[derive(Clone, Copy, Debug)]
pub struct GeometricBrownianMotion {
    mu: f64,
    sigma: f64,
    s0: f64,
}

impl GeometricBrownianMotion {
    pub fn new(mu: f64, sigma: f64, s0: f64) -> SdeResult<Self> {
        validate_finite("mu", mu)?;
        validate_finite("sigma", sigma)?;
        validate_non_negative("sigma", sigma)?;
        Ok(GeometricBrownianMotion { mu, sigma, s0 })
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl DiffusionProcess for GeometricBrownianMotion {
    fn x0(&self) -> f64 {
        self.s0
    }

    fn drift(&self, _t: f64, x: f64) -> f64 {
        self.mu * x
    }

    fn diffusion(&self, _t: f64, x: f64) -> f64 {
        self.sigma * x
    }
}
