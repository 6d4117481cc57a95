//! Inversion of the lossy Drude dispersion relation.
//!
//! The shell metal is modelled by the reduced Drude permittivity
//!
//! $$\epsilon(\omega) = \epsilon_\infty - \frac{(\omega_p/\hbar)^2}{\omega^2 + (\gamma/\tau)^2},$$
//!
//! which is the real part of the full lossy form (see
//! [`DrudeParameters::dielectric_function`]). Solving for $\omega$ at a
//! target permittivity $\epsilon_t$ gives
//!
//! $$\omega = \sqrt{\frac{(\omega_p/\hbar)^2}{\epsilon_\infty - \epsilon_t} - (\gamma/\tau)^2},
//!   \qquad \lambda = \frac{2\pi c}{\omega}.$$

use std::f64::consts::PI;

use super::{ensure_finite, SolverError};
use crate::constants::{NM_PER_M, SPEED_OF_LIGHT};
use crate::types::DrudeParameters;

/// Convert an angular frequency (rad/s) to a free-space wavelength (nm).
pub fn angular_frequency_to_wavelength(omega: f64) -> f64 {
    2.0 * PI * SPEED_OF_LIGHT * NM_PER_M / omega
}

/// Convert a free-space wavelength (nm) to an angular frequency (rad/s).
pub fn wavelength_to_angular_frequency(wavelength_nm: f64) -> f64 {
    2.0 * PI * SPEED_OF_LIGHT * NM_PER_M / wavelength_nm
}

/// Solver mapping a target shell permittivity to a resonant wavelength.
#[derive(Debug, Clone, Copy)]
pub struct DrudeWavelengthSolver {
    drude: DrudeParameters,
}

impl DrudeWavelengthSolver {
    /// Bind the solver to a shell metal. Parameters are validated per solve.
    pub fn new(drude: DrudeParameters) -> Self {
        Self { drude }
    }

    /// The shell metal this solver inverts.
    pub fn parameters(&self) -> &DrudeParameters {
        &self.drude
    }

    /// Angular frequency (rad/s) at which the shell reaches `target_permittivity`.
    pub fn angular_frequency(&self, target_permittivity: f64) -> Result<f64, SolverError> {
        let drude = &self.drude;
        ensure_finite("target_permittivity", target_permittivity)?;
        ensure_finite("plasma_frequency", drude.plasma_frequency)?;
        ensure_finite("damping_rate", drude.damping_rate)?;
        ensure_finite("asymptotic_permittivity", drude.asymptotic_permittivity)?;
        if drude.plasma_frequency <= 0.0 {
            return Err(SolverError::Domain(format!(
                "plasma_frequency must be positive, got {}",
                drude.plasma_frequency
            )));
        }
        if drude.damping_rate < 0.0 {
            return Err(SolverError::Domain(format!(
                "damping_rate must be non-negative, got {}",
                drude.damping_rate
            )));
        }

        let contrast = drude.asymptotic_permittivity - target_permittivity;
        if contrast == 0.0 {
            return Err(SolverError::NumericDomain(format!(
                "target permittivity {target_permittivity} equals the asymptotic permittivity"
            )));
        }

        let gamma = drude.damping_frequency();
        let radicand = drude.plasma_term() / contrast - gamma * gamma;
        if radicand < 0.0 {
            return Err(SolverError::NumericDomain(format!(
                "target permittivity {target_permittivity} is outside the reachable Drude range \
                 (ε∞={}, ω² would be {radicand:.6e})",
                drude.asymptotic_permittivity
            )));
        }
        if radicand == 0.0 {
            return Err(SolverError::NumericDomain(format!(
                "target permittivity {target_permittivity} is only reached at ω = 0"
            )));
        }

        let omega = radicand.sqrt();
        if !omega.is_finite() {
            return Err(SolverError::NumericDomain(format!(
                "angular frequency overflowed for target permittivity {target_permittivity}"
            )));
        }
        Ok(omega)
    }

    /// Free-space wavelength (nm) at which the shell reaches `target_permittivity`.
    pub fn solve(&self, target_permittivity: f64) -> Result<f64, SolverError> {
        let omega = self.angular_frequency(target_permittivity)?;
        let wavelength_nm = angular_frequency_to_wavelength(omega);
        log::debug!("ε={target_permittivity:.6} -> ω={omega:.6e} rad/s, λ={wavelength_nm:.3} nm");
        Ok(wavelength_nm)
    }
}

/// Free-space wavelength (nm) at which a Drude metal reaches `target_permittivity`.
pub fn solve_resonance_wavelength(
    target_permittivity: f64,
    drude: DrudeParameters,
) -> Result<f64, SolverError> {
    DrudeWavelengthSolver::new(drude).solve(target_permittivity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_metal() -> DrudeParameters {
        DrudeParameters::new(9.0, 0.05, 5.0)
    }

    #[test]
    fn test_reference_wavelength() {
        let wl = solve_resonance_wavelength(-3.8 / 2.8, test_metal()).unwrap();
        assert_relative_eq!(wl, 347.483_302_489_308_9, max_relative = 1e-10);
    }

    #[test]
    fn test_solve_is_bit_reproducible() {
        let first = solve_resonance_wavelength(-1.357_142_857_142_857_2, test_metal()).unwrap();
        for _ in 0..10 {
            let again = solve_resonance_wavelength(-1.357_142_857_142_857_2, test_metal()).unwrap();
            assert_eq!(first.to_bits(), again.to_bits());
        }
    }

    #[test]
    fn test_target_equal_to_asymptote_is_numeric_domain() {
        let err = solve_resonance_wavelength(5.0, test_metal()).unwrap_err();
        assert!(err.is_numeric_domain(), "got {err:?}");
    }

    #[test]
    fn test_target_above_asymptote_is_numeric_domain() {
        let err = solve_resonance_wavelength(6.0, test_metal()).unwrap_err();
        assert!(err.is_numeric_domain(), "got {err:?}");
    }

    #[test]
    fn test_damping_can_exhaust_the_radicand() {
        // Heavy damping: (γ/τ)² exceeds ω_p²/(ε∞ − ε) for a strongly negative target.
        let lossy = DrudeParameters::new(1.0, 5.0, 1.0);
        let err = solve_resonance_wavelength(-1.0e3, lossy).unwrap_err();
        assert!(err.is_numeric_domain(), "got {err:?}");
    }

    #[test]
    fn test_invalid_parameters_are_domain_errors() {
        for drude in [
            DrudeParameters::new(0.0, 0.05, 5.0),
            DrudeParameters::new(-9.0, 0.05, 5.0),
            DrudeParameters::new(9.0, -0.05, 5.0),
            DrudeParameters::new(9.0, 0.05, f64::NAN),
        ] {
            let err = solve_resonance_wavelength(-1.0, drude).unwrap_err();
            assert!(matches!(err, SolverError::Domain(_)), "{drude:?} gave {err:?}");
        }
    }

    #[test]
    fn test_wavelength_conversions_are_inverse() {
        let omega = wavelength_to_angular_frequency(532.0);
        assert_relative_eq!(angular_frequency_to_wavelength(omega), 532.0, max_relative = 1e-14);
    }
}
