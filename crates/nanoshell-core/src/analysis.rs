//! One complete core–shell analysis: a root solve followed by four
//! wavelength solves against the shell's Drude parameters.
//!
//! The root stage is atomic. Each wavelength succeeds or fails on its own;
//! [`ResonanceAnalysis::wavelengths`] gives the all-or-nothing view and
//! [`ResonanceAnalysis::entries`] the per-entry one.

use num_complex::Complex64;
use serde::{Serialize, Serializer};

use crate::solver::{DrudeWavelengthSolver, PermittivityRootSolver, RadicandPolicy, SolverError};
use crate::types::{
    DielectricPair, DrudeParameters, ParticleGeometry, ResonanceKind, ResonanceWavelengths, RootSet,
};

/// One of the four outputs of an analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResonanceEntry {
    pub kind: ResonanceKind,
    /// Effective shell permittivity at this root.
    pub permittivity: Complex64,
    /// Wavelength (nm), solved from the real part of `permittivity`.
    #[serde(rename = "wavelength_nm", serialize_with = "serialize_outcome")]
    pub wavelength: Result<f64, SolverError>,
}

impl ResonanceEntry {
    pub fn wavelength_nm(&self) -> Option<f64> {
        self.wavelength.as_ref().ok().copied()
    }

    /// Whether the effective permittivity is complex (damped resonance).
    pub fn is_damped(&self) -> bool {
        self.permittivity.im != 0.0
    }
}

fn serialize_outcome<S: Serializer>(
    outcome: &Result<f64, SolverError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match outcome {
        Ok(value) => serializer.serialize_some(value),
        Err(_) => serializer.serialize_none(),
    }
}

/// Result of [`analyse`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResonanceAnalysis {
    pub geometry: ParticleGeometry,
    pub dielectric: DielectricPair,
    pub drude: DrudeParameters,
    pub roots: RootSet,
    entries: [ResonanceEntry; 4],
}

impl ResonanceAnalysis {
    /// Entries in positional order.
    pub fn entries(&self) -> &[ResonanceEntry; 4] {
        &self.entries
    }

    pub fn entry(&self, kind: ResonanceKind) -> &ResonanceEntry {
        &self.entries[kind.index()]
    }

    pub fn wavelength(&self, kind: ResonanceKind) -> Result<f64, SolverError> {
        self.entry(kind).wavelength.clone()
    }

    /// All four wavelengths, or the first entry's error.
    pub fn wavelengths(&self) -> Result<ResonanceWavelengths, SolverError> {
        let mut values = [0.0; 4];
        for (slot, entry) in values.iter_mut().zip(&self.entries) {
            *slot = entry.wavelength.clone()?;
        }
        Ok(ResonanceWavelengths::from_array(values))
    }

    /// Number of entries with a defined wavelength.
    pub fn defined_count(&self) -> usize {
        self.entries.iter().filter(|e| e.wavelength.is_ok()).count()
    }
}

/// Run a full analysis for one particle.
///
/// Fails only if the root stage fails; wavelength failures are recorded
/// per entry.
pub fn analyse(
    geometry: ParticleGeometry,
    dielectric: DielectricPair,
    drude: DrudeParameters,
    policy: RadicandPolicy,
) -> Result<ResonanceAnalysis, SolverError> {
    let roots = PermittivityRootSolver::with_policy(policy).solve(geometry, dielectric)?;
    let solver = DrudeWavelengthSolver::new(drude);

    let entries = ResonanceKind::ALL.map(|kind| {
        let permittivity = roots.get(kind);
        let wavelength = solver.solve(permittivity.re);
        if let Err(e) = &wavelength {
            log::warn!("{kind}: no wavelength for ε={permittivity}: {e}");
        }
        ResonanceEntry {
            kind,
            permittivity,
            wavelength,
        }
    });

    Ok(ResonanceAnalysis {
        geometry,
        dielectric,
        drude,
        roots,
        entries,
    })
}
