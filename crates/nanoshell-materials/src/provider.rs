//! Material property provider trait.
//!
//! All material records implement [`MaterialProvider`], which returns the
//! complex dielectric function at a free-space wavelength. Core and medium
//! materials are non-dispersive; shell metals follow a lossy Drude model.

use num_complex::Complex64;
use thiserror::Error;

/// Errors from material providers and the material library.
#[derive(Debug, Error)]
pub enum MaterialError {
    #[error("Wavelength {wavelength_nm} nm is outside the data range [{min}, {max}] nm")]
    OutOfRange {
        wavelength_nm: f64,
        min: f64,
        max: f64,
    },

    #[error("Material not found: {0}")]
    NotFound(String),

    #[error("Material already exists: {0}")]
    Duplicate(String),

    #[error("Invalid parameter for '{material}': {reason}")]
    InvalidParameter { material: String, reason: String },
}

/// Provides frequency-dependent material properties.
pub trait MaterialProvider: Send + Sync {
    /// Human-readable name of this material.
    fn name(&self) -> &str;

    /// Literature reference (DOI or citation), if known.
    fn reference(&self) -> Option<&str> {
        None
    }

    /// Wavelength range over which the model is valid (nm).
    fn wavelength_range(&self) -> (f64, f64) {
        (0.0, f64::INFINITY)
    }

    /// Complex dielectric function $\epsilon(\lambda)$ at a given wavelength.
    fn dielectric_function(&self, wavelength_nm: f64) -> Result<Complex64, MaterialError>;

    /// Complex refractive index $\tilde{n} = n + ik$ at a given wavelength.
    ///
    /// Default implementation derives from $\epsilon = \tilde{n}^2$.
    fn refractive_index(&self, wavelength_nm: f64) -> Result<Complex64, MaterialError> {
        let eps = self.dielectric_function(wavelength_nm)?;
        Ok(eps.sqrt())
    }
}

/// Reject wavelengths outside `provider`'s range (and non-positive or NaN ones).
pub(crate) fn check_wavelength<P: MaterialProvider + ?Sized>(
    provider: &P,
    wavelength_nm: f64,
) -> Result<(), MaterialError> {
    let (min, max) = provider.wavelength_range();
    if !(wavelength_nm > min && wavelength_nm <= max) {
        return Err(MaterialError::OutOfRange {
            wavelength_nm,
            min,
            max,
        });
    }
    Ok(())
}
