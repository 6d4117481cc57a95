//! # Nanoshell Core
//!
//! The numerical backbone of the Nanoshell framework. This crate computes
//! the plasmon resonance and induced-transparency wavelengths of a
//! spherical core–shell nanoparticle in the quasi-static dipole
//! approximation, with a lossy Drude model for the shell metal.
//!
//! ## Pipeline
//!
//! 1. [`solver::PermittivityRootSolver`] turns the particle geometry and the
//!    core/medium permittivities into four effective shell permittivities.
//! 2. [`solver::DrudeWavelengthSolver`] maps each of them onto the
//!    free-space wavelength at which the shell metal reaches it.
//!
//! [`analysis::analyse`] runs both stages and reports each of the four
//! wavelengths independently.
//!
//! ## Modules
//!
//! - [`types`] — Value records (geometry, permittivities, Drude parameters, results).
//! - [`solver`] — Root and wavelength solvers, error type, radicand policy.
//! - [`analysis`] — Orchestration of one full analysis.
//! - [`constants`] — Physical constants of the Drude inversion.

pub mod analysis;
pub mod constants;
pub mod solver;
pub mod types;

pub use analysis::{analyse, ResonanceAnalysis, ResonanceEntry};
pub use solver::{
    solve_permittivity_roots, solve_resonance_wavelength, RadicandPolicy, SolverError,
};
pub use types::{
    DielectricPair, DrudeParameters, ParticleGeometry, ResonanceKind, ResonanceWavelengths, RootSet,
};
