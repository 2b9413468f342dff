//! # diffusion-sde: One-Dimensional Diffusion Processes
//!
//! A small Rust library for continuous-time stochastic diffusion processes
//! of the form
//! ```text
//! dx(t) = mu(t, x(t)) dt + sigma(t, x(t)) dz(t)
//! ```
//! with applications to option pricing and quantitative finance.
//!
//! ## Key Features
//!
//! - **Single polymorphic contract**: the [`DiffusionProcess`] trait, which
//!   every concrete process model implements
//! - **Euler-Maruyama defaults**: first-order conditional expectation and
//!   variance over a finite time step, inherited by every model
//! - **Closed-form overrides**: models with known exact moments (e.g.
//!   Ornstein-Uhlenbeck) replace the defaults with the exact formulas
//! - **Thread-safe by construction**: processes are immutable after
//!   construction, so every operation is a pure arithmetic evaluation
//!
//! ## Quick Start
//!
//! ```rust
//! use diffusion_sde::models::BlackScholesProcess;
//! use diffusion_sde::DiffusionProcess;
//!
//! // Log-price Black-Scholes dynamics: dS = (r - sigma^2/2) dt + sigma dz
//! let process = BlackScholesProcess::new(0.05, 0.2, 100.0).expect("valid parameters");
//!
//! let dt = 0.25; // quarter of a year
//! let mean = process.expectation(0.0, 100.0, dt);
//! let var = process.variance(0.0, 100.0, dt);
//! println!("E[x(dt)] = {:.4}, Var[x(dt)] = {:.4}", mean, var);
//! ```
//!
//! ## Mathematical Foundation
//!
//! Every process is Markov: its conditional distribution after a step of
//! size `dt` depends only on the current state `(t0, x0)`. The default
//! moments come from a single Euler-Maruyama step with the coefficients
//! frozen at the left endpoint, which is exact whenever the coefficients
//! are constant and first-order accurate otherwise.

// Module declarations
pub mod error;
pub mod models;
pub mod process;

// Re-export commonly used types for convenience
pub use error::{SdeError, SdeResult};
pub use process::DiffusionProcess;
