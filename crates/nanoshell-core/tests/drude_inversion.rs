//! Integration tests for the Drude wavelength inversion and the full
//! analysis pipeline.
//!
//! - Round trip: ε(ω(λ)) reproduces the target permittivity
//! - Wavelength decreases monotonically with ω and increases as ε → −∞
//! - Reference analysis: 5/10 nm particle, ε_c=2, ε_m=1, shell (9 eV, 0.05 eV, ε∞=5)
//! - Failure taxonomy (Domain vs NumericDomain)
//! - JSON serialisation of roots, wavelengths and analyses (serde)

use approx::assert_relative_eq;

use nanoshell_core::solver::drude::{
    angular_frequency_to_wavelength, wavelength_to_angular_frequency, DrudeWavelengthSolver,
};
use nanoshell_core::types::{
    DielectricPair, DrudeParameters, ParticleGeometry, ResonanceKind, ResonanceWavelengths,
};
use nanoshell_core::{
    analyse, solve_permittivity_roots, solve_resonance_wavelength, RadicandPolicy, RootSet,
    SolverError,
};

// ─────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────

fn reference_shell() -> DrudeParameters {
    DrudeParameters::new(9.0, 0.05, 5.0)
}

fn reference_geometry() -> (ParticleGeometry, DielectricPair) {
    (ParticleGeometry::new(5.0, 10.0), DielectricPair::new(2.0, 1.0))
}

// ─────────────────────────────────────────────────────────────
// Round trip and monotonicity
// ─────────────────────────────────────────────────────────────

#[test]
fn test_round_trip_reproduces_target() {
    let drude = reference_shell();
    for target in [-20.0, -5.0, -1.357, 0.0, 0.68, 3.0, 4.9] {
        let wl = solve_resonance_wavelength(target, drude).unwrap();
        let omega = wavelength_to_angular_frequency(wl);
        assert_relative_eq!(drude.permittivity_at(omega), target, epsilon = 1e-9);
        // The full lossy form carries the same real part.
        assert_relative_eq!(drude.dielectric_function(omega).re, target, epsilon = 1e-9);
    }
}

#[test]
fn test_wavelength_decreases_with_frequency() {
    let solver = DrudeWavelengthSolver::new(reference_shell());
    let mut prev_omega = 0.0;
    let mut prev_wl = f64::INFINITY;
    // ε rises towards ε∞ as ω grows, so sweep the target upwards.
    for i in 0..35 {
        let target = -30.0 + i as f64;
        let omega = solver.angular_frequency(target).unwrap();
        let wl = solver.solve(target).unwrap();
        assert!(omega > prev_omega, "ω must increase with ε (ε={target})");
        assert!(wl < prev_wl, "λ must decrease with ω (ε={target})");
        assert_relative_eq!(angular_frequency_to_wavelength(omega), wl, max_relative = 1e-14);
        prev_omega = omega;
        prev_wl = wl;
    }
}

#[test]
fn test_lossless_shell_is_accepted() {
    let lossless = DrudeParameters::new(9.0, 0.0, 1.0);
    let wl = solve_resonance_wavelength(-2.0, lossless).unwrap();
    // ω = ω_p / √(ε∞ − ε) for γ = 0.
    let omega = (9.0 / 6.58e-16) / 3.0_f64.sqrt();
    assert_relative_eq!(wl, angular_frequency_to_wavelength(omega), max_relative = 1e-12);
}

// ─────────────────────────────────────────────────────────────
// Reference particle
// ─────────────────────────────────────────────────────────────

#[test]
fn test_reference_particle_end_to_end() {
    let (geometry, pair) = reference_geometry();
    let roots = solve_permittivity_roots(geometry, pair).unwrap();

    let wl = solve_resonance_wavelength(roots.first_resonance.re, reference_shell()).unwrap();
    assert!(wl > 0.0 && wl.is_finite());
    assert_relative_eq!(wl, 347.483_302_489_308_9, max_relative = 1e-10);

    let again = solve_resonance_wavelength(roots.first_resonance.re, reference_shell()).unwrap();
    assert_eq!(wl.to_bits(), again.to_bits());
}

#[test]
fn test_reference_analysis_wavelengths() {
    let (geometry, pair) = reference_geometry();
    let analysis = analyse(geometry, pair, reference_shell(), RadicandPolicy::Complex).unwrap();
    let wl = analysis.wavelengths().unwrap();

    assert_relative_eq!(wl.first_resonance, 347.483_302_489_308_9, max_relative = 1e-10);
    assert_relative_eq!(wl.second_resonance, wl.first_resonance);
    for kind in ResonanceKind::ALL {
        let entry = analysis.entry(kind);
        assert_eq!(entry.kind, kind);
        assert_eq!(entry.permittivity, analysis.roots.get(kind));
    }
    // Larger permittivity → higher frequency → shorter wavelength.
    assert!(wl.second_transparency < wl.first_transparency);
}

// ─────────────────────────────────────────────────────────────
// Failures
// ─────────────────────────────────────────────────────────────

#[test]
fn test_target_equal_to_asymptote_fails() {
    let err = solve_resonance_wavelength(5.0, reference_shell()).unwrap_err();
    assert!(matches!(err, SolverError::NumericDomain(_)), "got {err:?}");
}

#[test]
fn test_zero_outer_radius_fails_whole_analysis() {
    let err = analyse(
        ParticleGeometry::new(5.0, 0.0),
        DielectricPair::new(2.0, 1.0),
        reference_shell(),
        RadicandPolicy::Complex,
    )
    .unwrap_err();
    assert!(matches!(err, SolverError::Domain(_)), "got {err:?}");
}

// ─────────────────────────────────────────────────────────────
// Serialisation
// ─────────────────────────────────────────────────────────────

#[test]
fn test_roots_and_wavelengths_json_round_trip() {
    let (geometry, pair) = reference_geometry();
    let roots = solve_permittivity_roots(geometry, pair).unwrap();
    let json = serde_json::to_string(&roots).unwrap();
    let back: RootSet = serde_json::from_str(&json).unwrap();
    for (b, r) in back.as_array().into_iter().zip(roots.as_array()) {
        assert_relative_eq!(b.re, r.re, epsilon = 1e-12);
        assert_relative_eq!(b.im, r.im, epsilon = 1e-12);
    }

    let wl = ResonanceWavelengths::from_array([347.5, 347.5, 330.1, 286.4]);
    let json = serde_json::to_string(&wl).unwrap();
    assert!(json.contains("\"first_transparency\":330.1"));
    let back: ResonanceWavelengths = serde_json::from_str(&json).unwrap();
    assert_eq!(back, wl);
}

#[test]
fn test_analysis_json_marks_undefined_entries_as_null() {
    let (geometry, pair) = reference_geometry();
    let analysis = analyse(
        geometry,
        pair,
        DrudeParameters::new(9.0, 0.05, 0.5),
        RadicandPolicy::Complex,
    )
    .unwrap();

    let value = serde_json::to_value(&analysis).unwrap();
    let entries = value["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["kind"], "first_resonance");
    assert!(entries[0]["wavelength_nm"].is_f64());
    assert!(entries[3]["wavelength_nm"].is_null());
}
