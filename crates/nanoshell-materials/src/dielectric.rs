//! Non-dispersive dielectrics for particle cores and host media.
//!
//! Core and medium materials enter the root solver only through a single
//! real permittivity, so they are modelled as constant over the visible.
//!
//! ## Built-in materials
//!
//! | Identifier | Constructor | ε |
//! |-----------|-------------|---|
//! | `Vacuum` | [`ConstantDielectric::vacuum()`] | 1.0 |
//! | `Air` | [`ConstantDielectric::air()`] | 1.0006 |
//! | `Water` | [`ConstantDielectric::water()`] | 1.77 |
//! | `Silica` | [`ConstantDielectric::silica()`] | 2.13 |
//! | `Polystyrene` | [`ConstantDielectric::polystyrene()`] | 2.53 |
//! | `Titania` | [`ConstantDielectric::titania()`] | 6.5 |
//! | `Silicon` | [`ConstantDielectric::silicon()`] | 11.7 |

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::provider::{check_wavelength, MaterialError, MaterialProvider};

/// A dielectric with a wavelength-independent, real permittivity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantDielectric {
    pub name: String,
    pub permittivity: f64,
    #[serde(default, alias = "doi", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl ConstantDielectric {
    pub fn new(name: impl Into<String>, permittivity: f64) -> Self {
        Self {
            name: name.into(),
            permittivity,
            reference: None,
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Check that the permittivity is a finite number.
    pub fn validate(&self) -> Result<(), MaterialError> {
        if !self.permittivity.is_finite() {
            return Err(MaterialError::InvalidParameter {
                material: self.name.clone(),
                reason: format!("permittivity must be finite, got {}", self.permittivity),
            });
        }
        Ok(())
    }

    /// Check that the material can host a particle (ε > 0).
    pub fn validate_as_medium(&self) -> Result<(), MaterialError> {
        self.validate()?;
        if self.permittivity <= 0.0 {
            return Err(MaterialError::InvalidParameter {
                material: self.name.clone(),
                reason: format!(
                    "medium permittivity must be positive, got {}",
                    self.permittivity
                ),
            });
        }
        Ok(())
    }

    pub fn vacuum() -> Self {
        Self::new("Vacuum", 1.0)
    }

    pub fn air() -> Self {
        Self::new("Air", 1.0006)
    }

    /// Liquid water, n ≈ 1.33 in the visible.
    pub fn water() -> Self {
        Self::new("Water", 1.77).with_reference("G. M. Hale and M. R. Querry, Appl. Opt. 12, 555 (1973)")
    }

    /// Fused silica, n ≈ 1.46.
    pub fn silica() -> Self {
        Self::new("Silica", 2.13)
            .with_reference("E. D. Palik, Handbook of Optical Constants of Solids (1985)")
    }

    /// Polystyrene latex, n ≈ 1.59.
    pub fn polystyrene() -> Self {
        Self::new("Polystyrene", 2.53)
    }

    /// Rutile TiO₂ (ordinary ray), n ≈ 2.55 in the mid-visible.
    pub fn titania() -> Self {
        Self::new("Titania", 6.5)
            .with_reference("E. D. Palik, Handbook of Optical Constants of Solids (1985)")
    }

    /// Crystalline silicon, static permittivity.
    pub fn silicon() -> Self {
        Self::new("Silicon", 11.7)
    }

    /// All built-in dielectrics.
    pub fn builtins() -> Vec<Self> {
        vec![
            Self::vacuum(),
            Self::air(),
            Self::water(),
            Self::silica(),
            Self::polystyrene(),
            Self::titania(),
            Self::silicon(),
        ]
    }
}

impl MaterialProvider for ConstantDielectric {
    fn name(&self) -> &str {
        &self.name
    }

    fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    fn dielectric_function(&self, wavelength_nm: f64) -> Result<Complex64, MaterialError> {
        check_wavelength(self, wavelength_nm)?;
        Ok(Complex64::from(self.permittivity))
    }
}
