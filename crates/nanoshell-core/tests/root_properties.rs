//! Integration tests for the effective permittivity roots.
//!
//! - Thin-core limit reproduces the homogeneous-shell closed form (x=2, y=4)
//! - Vieta relations for both pairs, independent of the radicand branch
//! - Sign convention: + branch first, swapping branches swaps positions only
//! - Near-degenerate shells keep the geometry-independent product
//! - Reference particle (5 nm core, 10 nm outer radius)

use approx::assert_relative_eq;
use num_complex::Complex64;

use nanoshell_core::solver::{shell_coefficients, PermittivityRootSolver, RadicandPolicy};
use nanoshell_core::types::{DielectricPair, ParticleGeometry, RootSet};
use nanoshell_core::{solve_permittivity_roots, SolverError};

// ─────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────

/// Direct evaluation of both pairs with an explicit branch sign.
fn textbook_roots(x: f64, y: f64, pair: DielectricPair, sign: f64) -> [Complex64; 4] {
    let eps_m = pair.medium_permittivity;
    let t = pair.ratio();
    let a = Complex64::from(t + x);
    let b = Complex64::from(t - x / 2.0);
    let s_res = (a * a - y * y * t).sqrt();
    let s_trans = (b * b + y * y * t / 2.0).sqrt();
    let scale = -eps_m / y;
    [
        scale * (a + sign * s_res),
        scale * (a - sign * s_res),
        scale * (b + sign * s_trans),
        scale * (b - sign * s_trans),
    ]
}

fn assert_complex_eq(actual: Complex64, expected: Complex64, tol: f64) {
    assert!(
        (actual - expected).norm() <= tol * expected.norm().max(1.0),
        "expected {expected}, got {actual}"
    );
}

fn cases() -> Vec<(ParticleGeometry, DielectricPair)> {
    vec![
        (ParticleGeometry::new(5.0, 10.0), DielectricPair::new(2.0, 1.0)),
        (ParticleGeometry::new(5.0, 10.0), DielectricPair::new(-4.0, 1.0)),
        (ParticleGeometry::new(5.0, 10.0), DielectricPair::new(-4.0, 1.77)),
        (ParticleGeometry::new(20.0, 25.0), DielectricPair::new(2.13, 1.77)),
        (ParticleGeometry::new(2.0, 30.0), DielectricPair::new(11.7, 1.0)),
        (ParticleGeometry::new(8.0, 9.0), DielectricPair::new(-20.0, 2.25)),
    ]
}

// ─────────────────────────────────────────────────────────────
// Limits
// ─────────────────────────────────────────────────────────────

#[test]
fn test_thin_core_reduces_to_homogeneous_shell() {
    let pair = DielectricPair::new(2.0, 1.0);
    let roots = solve_permittivity_roots(ParticleGeometry::new(1e-3, 10.0), pair).unwrap();
    let expected = textbook_roots(2.0, 4.0, pair, 1.0);

    for (actual, expected) in roots.as_array().into_iter().zip(expected) {
        assert_complex_eq(actual, expected, 1e-9);
    }
    // x=2, y=4, t=2: A² − y²t = −16, so the resonance pair is −1 ∓ i.
    assert_complex_eq(roots.first_resonance, Complex64::new(-1.0, -1.0), 1e-9);
    assert_complex_eq(roots.second_resonance, Complex64::new(-1.0, 1.0), 1e-9);
    assert_relative_eq!(roots.first_transparency.re, -(1.0 + 17f64.sqrt()) / 4.0, epsilon = 1e-9);
    assert_relative_eq!(roots.second_transparency.re, (17f64.sqrt() - 1.0) / 4.0, epsilon = 1e-9);
}

#[test]
fn test_near_degenerate_shell_keeps_root_products() {
    let pair = DielectricPair::new(-4.0, 1.5);
    for core in [9.0, 9.9, 9.99, 9.999] {
        let roots = solve_permittivity_roots(ParticleGeometry::new(core, 10.0), pair).unwrap();
        let res_product = roots.first_resonance * roots.second_resonance;
        let trans_product = roots.first_transparency * roots.second_transparency;
        assert_relative_eq!(res_product.re, 1.5 * -4.0, max_relative = 1e-9);
        assert_relative_eq!(trans_product.re, -1.5 * -4.0 / 2.0, max_relative = 1e-9);
    }
}

#[test]
fn test_exact_degenerate_shell_is_rejected() {
    let err = solve_permittivity_roots(ParticleGeometry::new(10.0, 10.0), DielectricPair::new(2.0, 1.0))
        .unwrap_err();
    assert!(matches!(err, SolverError::Domain(_)), "got {err:?}");
}

// ─────────────────────────────────────────────────────────────
// Vieta and sign convention
// ─────────────────────────────────────────────────────────────

#[test]
fn test_vieta_relations_hold_for_all_cases() {
    for (geometry, pair) in cases() {
        let c = shell_coefficients(geometry).unwrap();
        let roots = solve_permittivity_roots(geometry, pair).unwrap();
        let eps_m = pair.medium_permittivity;
        let t = pair.ratio();

        let res_sum = roots.first_resonance + roots.second_resonance;
        let trans_sum = roots.first_transparency + roots.second_transparency;
        assert_complex_eq(res_sum, Complex64::from(-2.0 * eps_m * (t + c.x) / c.y), 1e-10);
        assert_complex_eq(trans_sum, Complex64::from(-2.0 * eps_m * (t - c.x / 2.0) / c.y), 1e-10);

        let res_product = roots.first_resonance * roots.second_resonance;
        let trans_product = roots.first_transparency * roots.second_transparency;
        assert_complex_eq(res_product, Complex64::from(eps_m * pair.core_permittivity), 1e-10);
        assert_complex_eq(
            trans_product,
            Complex64::from(-eps_m * pair.core_permittivity / 2.0),
            1e-10,
        );
    }
}

#[test]
fn test_plus_branch_is_stored_first() {
    for (geometry, pair) in cases() {
        let c = shell_coefficients(geometry).unwrap();
        let roots = solve_permittivity_roots(geometry, pair).unwrap();
        let expected = textbook_roots(c.x, c.y, pair, 1.0);
        for (actual, expected) in roots.as_array().into_iter().zip(expected) {
            assert_complex_eq(actual, expected, 1e-10);
        }
    }
}

#[test]
fn test_swapping_branch_sign_swaps_pairs() {
    for (geometry, pair) in cases() {
        let c = shell_coefficients(geometry).unwrap();
        let roots: RootSet = solve_permittivity_roots(geometry, pair).unwrap();
        let swapped = textbook_roots(c.x, c.y, pair, -1.0);

        assert_complex_eq(roots.first_resonance, swapped[1], 1e-10);
        assert_complex_eq(roots.second_resonance, swapped[0], 1e-10);
        assert_complex_eq(roots.first_transparency, swapped[3], 1e-10);
        assert_complex_eq(roots.second_transparency, swapped[2], 1e-10);
    }
}

// ─────────────────────────────────────────────────────────────
// Policies
// ─────────────────────────────────────────────────────────────

#[test]
fn test_policies_agree_when_discriminants_are_positive() {
    let geometry = ParticleGeometry::new(5.0, 10.0);
    let pair = DielectricPair::new(-4.0, 1.77);
    let complex = PermittivityRootSolver::with_policy(RadicandPolicy::Complex)
        .solve(geometry, pair)
        .unwrap();
    let real = PermittivityRootSolver::with_policy(RadicandPolicy::RealOnly)
        .solve(geometry, pair)
        .unwrap();
    assert_eq!(complex, real);
    assert!(real.is_real());
}

#[test]
fn test_to_real_extracts_real_roots() {
    let roots = solve_permittivity_roots(ParticleGeometry::new(5.0, 10.0), DielectricPair::new(-4.0, 1.77))
        .unwrap();
    assert_eq!(roots.to_real().unwrap(), roots.real_parts());
}

#[test]
fn test_to_real_names_first_complex_root() {
    let roots = solve_permittivity_roots(ParticleGeometry::new(5.0, 10.0), DielectricPair::new(2.0, 1.0))
        .unwrap();
    let err = roots.to_real().unwrap_err();
    assert!(err.is_numeric_domain());
    assert!(err.to_string().contains("first_resonance"), "got: {err}");
}

#[test]
fn test_complex_pair_is_conjugate() {
    let roots = solve_permittivity_roots(ParticleGeometry::new(5.0, 10.0), DielectricPair::new(2.0, 1.0))
        .unwrap();
    assert_eq!(roots.first_resonance, roots.second_resonance.conj());
    assert!(roots.first_resonance.im < 0.0);
}

#[test]
fn test_solver_is_deterministic() {
    let geometry = ParticleGeometry::new(5.0, 10.0);
    let pair = DielectricPair::new(2.0, 1.0);
    let first = solve_permittivity_roots(geometry, pair).unwrap();
    for _ in 0..5 {
        assert_eq!(solve_permittivity_roots(geometry, pair).unwrap(), first);
    }
}
