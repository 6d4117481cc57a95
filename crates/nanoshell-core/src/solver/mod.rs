//! Resonance solvers.
//!
//! Two independent, stateless routines make up the numeric engine:
//!
//! - [`roots::PermittivityRootSolver`] derives the four effective
//!   permittivities at which the quasi-static polarisability of a
//!   core–shell sphere diverges (plasmon resonance) or vanishes (induced
//!   transparency).
//! - [`drude::DrudeWavelengthSolver`] inverts the lossy Drude dispersion of
//!   the shell metal to find the free-space wavelength producing a target
//!   permittivity.
//!
//! Both are pure functions over `Copy` inputs and are safe to call from
//! any number of threads.

pub mod drude;
pub mod roots;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use drude::{solve_resonance_wavelength, DrudeWavelengthSolver};
pub use roots::{shell_coefficients, solve_permittivity_roots, PermittivityRootSolver, ShellCoefficients};

/// Errors that can occur during a resonance solve.
///
/// Neither variant is transient: retrying with the same inputs gives the
/// same failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// An input violates a structural precondition (non-positive radius,
    /// non-positive medium permittivity, non-finite value).
    #[error("Domain error: {0}")]
    Domain(String),

    /// The inputs are well-formed but admit no real solution under the
    /// model (negative radicand, zero denominator at the solve step).
    #[error("Numeric domain error: {0}")]
    NumericDomain(String),
}

impl SolverError {
    /// Whether this is a [`SolverError::NumericDomain`].
    pub fn is_numeric_domain(&self) -> bool {
        matches!(self, SolverError::NumericDomain(_))
    }
}

/// How the root solver treats a negative quadratic discriminant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadicandPolicy {
    /// Take the principal complex square root; the affected pair becomes
    /// complex conjugate.
    #[default]
    Complex,
    /// Fail with [`SolverError::NumericDomain`].
    RealOnly,
}

/// Reject NaN and infinities with a [`SolverError::Domain`].
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<(), SolverError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SolverError::Domain(format!("{name} must be finite, got {value}")))
    }
}
