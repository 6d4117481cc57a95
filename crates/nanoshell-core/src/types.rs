//! Core types shared across the Nanoshell framework.
//!
//! This module defines the value records passed through the analysis
//! pipeline: particle geometry, the core/medium dielectric pair, Drude
//! parameters of the shell, and the root and wavelength containers.
//! None of them carry identity; they are built, consumed, and dropped
//! within a single analysis.

use std::fmt;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::constants::{DAMPING_TIMESCALE_S, HBAR_EV_S};
use crate::solver::SolverError;

/// Radii of a spherical core–shell particle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleGeometry {
    /// Core radius (nm).
    pub core_radius: f64,
    /// Outer (core + shell) radius (nm).
    pub outer_radius: f64,
}

impl ParticleGeometry {
    pub fn new(core_radius: f64, outer_radius: f64) -> Self {
        Self {
            core_radius,
            outer_radius,
        }
    }

    /// Core volume fraction $\beta = (r_c / r)^3$.
    ///
    /// Not validated: a zero outer radius gives a non-finite value.
    pub fn beta(&self) -> f64 {
        (self.core_radius / self.outer_radius).powi(3)
    }

    /// Shell thickness (nm). Negative for unphysical inputs.
    pub fn shell_thickness(&self) -> f64 {
        self.outer_radius - self.core_radius
    }
}

/// Permittivities of the core material and the host medium.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DielectricPair {
    pub core_permittivity: f64,
    pub medium_permittivity: f64,
}

impl DielectricPair {
    pub fn new(core_permittivity: f64, medium_permittivity: f64) -> Self {
        Self {
            core_permittivity,
            medium_permittivity,
        }
    }

    /// Relative permittivity $t = \epsilon_c / \epsilon_m$.
    pub fn ratio(&self) -> f64 {
        self.core_permittivity / self.medium_permittivity
    }
}

/// Lossy Drude parameters of a shell metal.
///
/// Frequencies are given in energy units (eV) as is customary in
/// plasmonics tables; the conversions to angular frequency use the fixed
/// constants in [`crate::constants`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrudeParameters {
    /// Plasma frequency $\hbar\omega_p$ (eV).
    pub plasma_frequency: f64,
    /// Damping rate $\hbar\gamma$ (eV).
    pub damping_rate: f64,
    /// High-frequency permittivity limit $\epsilon_\infty$.
    pub asymptotic_permittivity: f64,
}

impl DrudeParameters {
    pub fn new(plasma_frequency: f64, damping_rate: f64, asymptotic_permittivity: f64) -> Self {
        Self {
            plasma_frequency,
            damping_rate,
            asymptotic_permittivity,
        }
    }

    /// Squared plasma angular frequency $(\omega_p/\hbar)^2$ (rad²/s²).
    pub fn plasma_term(&self) -> f64 {
        (self.plasma_frequency / HBAR_EV_S).powi(2)
    }

    /// Damping angular frequency $\gamma / \tau$ (rad/s).
    pub fn damping_frequency(&self) -> f64 {
        self.damping_rate / DAMPING_TIMESCALE_S
    }

    /// Reduced (real) Drude permittivity at angular frequency `omega`.
    ///
    /// $\epsilon(\omega) = \epsilon_\infty - \frac{\omega_p^2}{\omega^2 + \gamma^2}$
    pub fn permittivity_at(&self, omega: f64) -> f64 {
        let gamma = self.damping_frequency();
        self.asymptotic_permittivity - self.plasma_term() / (omega * omega + gamma * gamma)
    }

    /// Full lossy Drude dielectric function at angular frequency `omega`.
    ///
    /// $\epsilon(\omega) = \epsilon_\infty - \frac{\omega_p^2}{\omega^2 + i\gamma\omega}$
    ///
    /// The real part coincides with [`permittivity_at`](Self::permittivity_at);
    /// the imaginary part is the absorptive loss.
    pub fn dielectric_function(&self, omega: f64) -> Complex64 {
        let gamma = self.damping_frequency();
        let denominator = Complex64::new(omega * omega, gamma * omega);
        Complex64::from(self.asymptotic_permittivity) - self.plasma_term() / denominator
    }
}

/// Position of a root or wavelength within the fixed four-entry ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResonanceKind {
    FirstResonance,
    SecondResonance,
    FirstTransparency,
    SecondTransparency,
}

impl ResonanceKind {
    /// All kinds in positional order.
    pub const ALL: [ResonanceKind; 4] = [
        ResonanceKind::FirstResonance,
        ResonanceKind::SecondResonance,
        ResonanceKind::FirstTransparency,
        ResonanceKind::SecondTransparency,
    ];

    pub fn index(self) -> usize {
        match self {
            ResonanceKind::FirstResonance => 0,
            ResonanceKind::SecondResonance => 1,
            ResonanceKind::FirstTransparency => 2,
            ResonanceKind::SecondTransparency => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResonanceKind::FirstResonance => "first_resonance",
            ResonanceKind::SecondResonance => "second_resonance",
            ResonanceKind::FirstTransparency => "first_transparency",
            ResonanceKind::SecondTransparency => "second_transparency",
        }
    }

    /// `true` for the plasmon pair, `false` for the transparency pair.
    pub fn is_resonance(self) -> bool {
        matches!(
            self,
            ResonanceKind::FirstResonance | ResonanceKind::SecondResonance
        )
    }
}

impl fmt::Display for ResonanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four effective permittivity roots of a core–shell particle.
///
/// Stored as complex values: a negative discriminant yields a conjugate
/// pair. Under the real-only radicand policy every imaginary part is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RootSet {
    pub first_resonance: Complex64,
    pub second_resonance: Complex64,
    pub first_transparency: Complex64,
    pub second_transparency: Complex64,
}

impl RootSet {
    /// Roots in positional order (res1, res2, trans1, trans2).
    pub fn as_array(&self) -> [Complex64; 4] {
        [
            self.first_resonance,
            self.second_resonance,
            self.first_transparency,
            self.second_transparency,
        ]
    }

    pub fn get(&self, kind: ResonanceKind) -> Complex64 {
        self.as_array()[kind.index()]
    }

    pub fn real_parts(&self) -> [f64; 4] {
        self.as_array().map(|e| e.re)
    }

    /// Whether every root has an exactly zero imaginary part.
    pub fn is_real(&self) -> bool {
        self.as_array().iter().all(|e| e.im == 0.0)
    }

    /// Real values of all four roots.
    ///
    /// Fails with [`SolverError::NumericDomain`] naming the first root with a
    /// non-zero imaginary part.
    pub fn to_real(&self) -> Result<[f64; 4], SolverError> {
        for kind in ResonanceKind::ALL {
            let e = self.get(kind);
            if e.im != 0.0 {
                return Err(SolverError::NumericDomain(format!(
                    "{kind} root is complex ({e})"
                )));
            }
        }
        Ok(self.real_parts())
    }
}

/// Free-space wavelengths (nm) matching each entry of a [`RootSet`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResonanceWavelengths {
    pub first_resonance: f64,
    pub second_resonance: f64,
    pub first_transparency: f64,
    pub second_transparency: f64,
}

impl ResonanceWavelengths {
    pub fn from_array(values: [f64; 4]) -> Self {
        Self {
            first_resonance: values[0],
            second_resonance: values[1],
            first_transparency: values[2],
            second_transparency: values[3],
        }
    }

    pub fn as_array(&self) -> [f64; 4] {
        [
            self.first_resonance,
            self.second_resonance,
            self.first_transparency,
            self.second_transparency,
        ]
    }

    pub fn get(&self, kind: ResonanceKind) -> f64 {
        self.as_array()[kind.index()]
    }
}
