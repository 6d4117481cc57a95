//! Physical constants used by the Drude inversion.
//!
//! Rounded values, not CODATA. Stored analyses were computed with exactly
//! these numbers and wavelengths must stay reproducible against them.

/// Speed of light in vacuum (m/s).
pub const SPEED_OF_LIGHT: f64 = 3.0e8;

/// Reduced Planck constant (eV·s), converts eV to rad/s.
pub const HBAR_EV_S: f64 = 6.58e-16;

/// Femtosecond timescale (s) dividing the damping rate.
pub const DAMPING_TIMESCALE_S: f64 = 1.0e-15;

/// Metres to nanometres.
pub const NM_PER_M: f64 = 1.0e9;
