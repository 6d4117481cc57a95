//! Effective permittivity roots of a core–shell sphere.
//!
//! In the quasi-static limit the polarisability of a sphere of radius $r$
//! with a core of radius $r_c$ depends on the geometry only through the
//! core volume fraction $\beta = (r_c / r)^3$. Writing
//!
//! $$x = \frac{2(1 + \beta)}{2\beta + 1}, \qquad
//!   y = \frac{4(1 - \beta)}{2\beta + 1}, \qquad
//!   t = \epsilon_c / \epsilon_m,$$
//!
//! the shell permittivities at which the polarisability diverges are
//!
//! $$\epsilon_{1,2} = -\frac{\epsilon_m}{y}\Bigl(A \pm \sqrt{A^2 - y^2 t}\Bigr),
//!   \qquad A = t + x,$$
//!
//! and those at which it vanishes are
//!
//! $$\epsilon_{3,4} = -\frac{\epsilon_m}{y}\Bigl(B \pm \sqrt{B^2 + y^2 t / 2}\Bigr),
//!   \qquad B = t - x/2.$$
//!
//! The `+` branch is always stored first. Callers rely on position, not on
//! magnitude ordering.

use num_complex::Complex64;

use super::{ensure_finite, RadicandPolicy, SolverError};
use crate::types::{DielectricPair, ParticleGeometry, RootSet};

/// Geometry factors of the core–shell quadratic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellCoefficients {
    /// Core volume fraction $\beta$.
    pub beta: f64,
    pub x: f64,
    pub y: f64,
}

/// Validate a geometry and compute its shell coefficients.
///
/// Fails with [`SolverError::Domain`] for non-finite or non-positive radii
/// and for the degenerate shell $\beta = 1$, where $y = 0$.
pub fn shell_coefficients(geometry: ParticleGeometry) -> Result<ShellCoefficients, SolverError> {
    ensure_finite("core_radius", geometry.core_radius)?;
    ensure_finite("outer_radius", geometry.outer_radius)?;
    if geometry.core_radius <= 0.0 {
        return Err(SolverError::Domain(format!(
            "core_radius must be positive, got {}",
            geometry.core_radius
        )));
    }
    if geometry.outer_radius <= 0.0 {
        return Err(SolverError::Domain(format!(
            "outer_radius must be positive, got {}",
            geometry.outer_radius
        )));
    }

    let beta = geometry.beta();
    let denominator = 2.0 * beta + 1.0;
    let x = 2.0 * (1.0 + beta) / denominator;
    let y = 4.0 * (1.0 - beta) / denominator;

    if y == 0.0 {
        return Err(SolverError::Domain(format!(
            "degenerate shell: core_radius equals outer_radius ({})",
            geometry.outer_radius
        )));
    }

    Ok(ShellCoefficients { beta, x, y })
}

/// Solver for the four effective permittivity roots.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermittivityRootSolver {
    policy: RadicandPolicy,
}

impl PermittivityRootSolver {
    /// Solver with the default (complex) radicand policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Solver with an explicit radicand policy.
    pub fn with_policy(policy: RadicandPolicy) -> Self {
        Self { policy }
    }

    /// The radicand policy in use.
    pub fn policy(&self) -> RadicandPolicy {
        self.policy
    }

    /// Compute the resonance and transparency root pairs.
    ///
    /// Either all four roots are produced or the call fails.
    pub fn solve(
        &self,
        geometry: ParticleGeometry,
        dielectric: DielectricPair,
    ) -> Result<RootSet, SolverError> {
        let ShellCoefficients { beta, x, y } = shell_coefficients(geometry)?;

        let eps_m = dielectric.medium_permittivity;
        let eps_c = dielectric.core_permittivity;
        ensure_finite("core_permittivity", eps_c)?;
        ensure_finite("medium_permittivity", eps_m)?;
        if eps_m <= 0.0 {
            return Err(SolverError::Domain(format!(
                "medium_permittivity must be positive, got {eps_m}"
            )));
        }

        let t = dielectric.ratio();
        if !t.is_finite() {
            return Err(SolverError::NumericDomain(format!(
                "permittivity ratio {eps_c}/{eps_m} is not representable"
            )));
        }
        let scale = eps_m / y;

        let a = t + x;
        let resonance = QuadraticPair {
            name: "resonance",
            linear: a,
            radicand: a * a - y * y * t,
            product: eps_m * eps_c,
        }
        .roots(scale, self.policy)?;

        let b = t - x / 2.0;
        let transparency = QuadraticPair {
            name: "transparency",
            linear: b,
            radicand: b * b + y * y * t / 2.0,
            product: -eps_m * eps_c / 2.0,
        }
        .roots(scale, self.policy)?;

        log::debug!(
            "Roots for beta={beta:.6}, x={x:.6}, y={y:.6}, t={t:.6}: \
             res=({}, {}), trans=({}, {})",
            resonance[0],
            resonance[1],
            transparency[0],
            transparency[1]
        );

        Ok(RootSet {
            first_resonance: resonance[0],
            second_resonance: resonance[1],
            first_transparency: transparency[0],
            second_transparency: transparency[1],
        })
    }
}

/// Solve with the default (complex) radicand policy.
pub fn solve_permittivity_roots(
    geometry: ParticleGeometry,
    dielectric: DielectricPair,
) -> Result<RootSet, SolverError> {
    PermittivityRootSolver::default().solve(geometry, dielectric)
}

/// One pair $-s\,(L \pm \sqrt{D})$ together with its known product.
struct QuadraticPair {
    name: &'static str,
    linear: f64,
    radicand: f64,
    product: f64,
}

impl QuadraticPair {
    /// Returns `[+ branch, − branch]`.
    fn roots(&self, scale: f64, policy: RadicandPolicy) -> Result<[Complex64; 2], SolverError> {
        if !self.radicand.is_finite() {
            return Err(SolverError::NumericDomain(format!(
                "{} discriminant is not finite ({})",
                self.name, self.radicand
            )));
        }
        let roots = self.solve_pair(scale, policy)?;
        if let Some(bad) = roots.iter().find(|e| !(e.re.is_finite() && e.im.is_finite())) {
            return Err(SolverError::NumericDomain(format!(
                "{} root is not finite ({bad})",
                self.name
            )));
        }
        Ok(roots)
    }

    fn solve_pair(&self, scale: f64, policy: RadicandPolicy) -> Result<[Complex64; 2], SolverError> {
        if self.radicand < 0.0 {
            return match policy {
                RadicandPolicy::RealOnly => Err(SolverError::NumericDomain(format!(
                    "{} discriminant is negative ({:.6e}): no real effective permittivity",
                    self.name, self.radicand
                ))),
                RadicandPolicy::Complex => {
                    log::debug!(
                        "{} discriminant {:.6e} < 0, returning a conjugate pair",
                        self.name,
                        self.radicand
                    );
                    let s = (-self.radicand).sqrt();
                    Ok([
                        -scale * Complex64::new(self.linear, s),
                        -scale * Complex64::new(self.linear, -s),
                    ])
                }
            };
        }

        // L ± √D loses precision on the branch where the two terms cancel.
        // Take the non-cancelling branch directly and recover the other
        // from the product of the roots.
        let s = self.radicand.sqrt();
        let sign = if self.linear >= 0.0 { 1.0 } else { -1.0 };
        let q = self.linear + sign * s;
        if q == 0.0 {
            return Ok([Complex64::from(0.0); 2]);
        }

        let large = -scale * q;
        let small = self.product / large;
        let (plus, minus) = if sign > 0.0 { (large, small) } else { (small, large) };
        Ok([Complex64::from(plus), Complex64::from(minus)])
    }
}
