//! Drude metals for particle shells.
//!
//! A shell metal is described by its plasma frequency, damping rate and
//! high-frequency permittivity ([`DrudeParameters`]). The dielectric
//! function is the full lossy Drude form evaluated at the angular
//! frequency of the requested free-space wavelength.
//!
//! Built-in parameter sets are representative fits to visible/near-IR data
//! and are intended for screening, not for quantitative spectroscopy.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use nanoshell_core::solver::drude::wavelength_to_angular_frequency;
use nanoshell_core::types::DrudeParameters;

use crate::provider::{check_wavelength, MaterialError, MaterialProvider};

/// A plasmonic metal following the lossy Drude model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrudeMaterial {
    pub name: String,
    #[serde(flatten)]
    pub parameters: DrudeParameters,
    #[serde(default, alias = "doi", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl DrudeMaterial {
    /// Construct from plasma frequency (eV), damping rate (eV) and ε∞.
    pub fn new(
        name: impl Into<String>,
        plasma_frequency: f64,
        damping_rate: f64,
        asymptotic_permittivity: f64,
    ) -> Self {
        Self {
            name: name.into(),
            parameters: DrudeParameters::new(plasma_frequency, damping_rate, asymptotic_permittivity),
            reference: None,
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn parameters(&self) -> DrudeParameters {
        self.parameters
    }

    /// Check the parameters the wavelength solver will accept.
    pub fn validate(&self) -> Result<(), MaterialError> {
        let p = &self.parameters;
        let invalid = |reason: String| MaterialError::InvalidParameter {
            material: self.name.clone(),
            reason,
        };
        if !(p.plasma_frequency.is_finite() && p.plasma_frequency > 0.0) {
            return Err(invalid(format!(
                "plasma_frequency must be positive, got {}",
                p.plasma_frequency
            )));
        }
        if !(p.damping_rate.is_finite() && p.damping_rate >= 0.0) {
            return Err(invalid(format!(
                "damping_rate must be non-negative, got {}",
                p.damping_rate
            )));
        }
        if !p.asymptotic_permittivity.is_finite() {
            return Err(invalid(format!(
                "asymptotic_permittivity must be finite, got {}",
                p.asymptotic_permittivity
            )));
        }
        Ok(())
    }

    pub fn gold() -> Self {
        Self::new("Au", 9.03, 0.053, 9.84)
    }

    pub fn silver() -> Self {
        Self::new("Ag", 9.17, 0.021, 3.7)
    }

    pub fn copper() -> Self {
        Self::new("Cu", 8.76, 0.096, 8.0)
    }

    pub fn aluminium() -> Self {
        Self::new("Al", 14.98, 0.047, 1.0)
            .with_reference("A. D. Rakić et al., Appl. Opt. 37, 5271 (1998)")
    }

    /// All built-in metals.
    pub fn builtins() -> Vec<Self> {
        vec![Self::gold(), Self::silver(), Self::copper(), Self::aluminium()]
    }
}

impl MaterialProvider for DrudeMaterial {
    fn name(&self) -> &str {
        &self.name
    }

    fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    fn dielectric_function(&self, wavelength_nm: f64) -> Result<Complex64, MaterialError> {
        check_wavelength(self, wavelength_nm)?;
        let omega = wavelength_to_angular_frequency(wavelength_nm);
        Ok(self.parameters.dielectric_function(omega))
    }
}
