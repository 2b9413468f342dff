// src/models/black_scholes.rs
use crate::error::validation::{validate_finite, validate_non_negative};
use crate::error::SdeResult;
use crate::process::DiffusionProcess;

/// Black-Scholes log-price diffusion.
///
/// Describes the stochastic process governed by
/// ```text
/// dS = (r - sigma^2/2) dt + sigma dz(t)
/// ```
/// Both coefficients are constant in `t` and `x`, so the inherited
/// Euler moments are exact and no override is needed.
#[derive(Clone, Copy, Debug)]
pub struct BlackScholesProcess {
    r: f64,
    sigma: f64,
    s0: f64,
}

impl BlackScholesProcess {
    /// Create a new Black-Scholes process.
    ///
    /// `rate` must be finite; `volatility` must be finite and non-negative.
    /// The starting value `s0` is unconstrained.
    pub fn new(rate: f64, volatility: f64, s0: f64) -> SdeResult<Self> {
        validate_finite("rate", rate)?;
        validate_finite("volatility", volatility)?;
        validate_non_negative("volatility", volatility)?;
        Ok(BlackScholesProcess {
            r: rate,
            sigma: volatility,
            s0,
        })
    }

    /// Risk-free rate.
    pub fn rate(&self) -> f64 {
        self.r
    }

    /// Volatility.
    pub fn volatility(&self) -> f64 {
        self.sigma
    }
}

impl DiffusionProcess for BlackScholesProcess {
    fn x0(&self) -> f64 {
        self.s0
    }

    fn drift(&self, _t: f64, _x: f64) -> f64 {
        self.r - 0.5 * self.sigma * self.sigma
    }

    fn diffusion(&self, _t: f64, _x: f64) -> f64 {
        self.sigma
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_expected_price_after_time_0_is_the_starting_price() {
        const START_PRICE: f64 = 12.1;
        let process = BlackScholesProcess::new(0.05, 0.06, 0.0).unwrap();
        assert_eq!(process.expectation(0.0, START_PRICE, 0.0), START_PRICE);
    }

    #[test]
    fn test_drift_is_constant() {
        let process = BlackScholesProcess::new(0.05, 0.2, 100.0).unwrap();
        let expected = 0.05 - 0.5 * 0.2 * 0.2;
        assert_abs_diff_eq!(process.drift(0.0, 100.0), expected, epsilon = 1e-15);
        assert_abs_diff_eq!(process.drift(3.0, -50.0), expected, epsilon = 1e-15);
    }

    #[test]
    fn test_diffusion_is_constant() {
        let process = BlackScholesProcess::new(0.05, 0.2, 100.0).unwrap();
        assert_eq!(process.diffusion(0.0, 100.0), 0.2);
        assert_eq!(process.diffusion(10.0, 1.0), 0.2);
    }

    #[test]
    fn test_euler_moments_over_one_year() {
        let process = BlackScholesProcess::new(0.05, 0.2, 100.0).unwrap();
        let mu = 0.05 - 0.5 * 0.2 * 0.2;
        assert_abs_diff_eq!(
            process.expectation(0.0, 100.0, 1.0),
            100.0 + mu,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(process.variance(0.0, 100.0, 1.0), 0.04, epsilon = 1e-15);
    }

    #[test]
    fn test_accessors() {
        let process = BlackScholesProcess::new(0.05, 0.06, 12.1).unwrap();
        assert_eq!(process.rate(), 0.05);
        assert_eq!(process.volatility(), 0.06);
        assert_eq!(process.x0(), 12.1);
    }

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(BlackScholesProcess::new(f64::NAN, 0.2, 100.0).is_err());
        assert!(BlackScholesProcess::new(0.05, f64::INFINITY, 100.0).is_err());
        assert!(BlackScholesProcess::new(0.05, -0.2, 100.0).is_err());
        // Zero volatility is a valid (deterministic) process
        assert!(BlackScholesProcess::new(0.05, 0.0, 100.0).is_ok());
    }
}
