//! Analysis runner: ties together materials, geometry, and solvers.

use std::path::Path;

use anyhow::{Context, Result};
use num_complex::Complex64;
use serde::Serialize;

use nanoshell_core::solver::shell_coefficients;
use nanoshell_core::{
    analyse, DielectricPair, DrudeParameters, ParticleGeometry, RadicandPolicy, ResonanceAnalysis,
    ResonanceKind, SolverError,
};
use nanoshell_materials::{MaterialLibrary, MaterialProvider};

use crate::config::{AnalysisConfig, JobConfig};

/// Solver inputs resolved from one `[[analysis]]` entry.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedInputs {
    pub geometry: ParticleGeometry,
    pub dielectric: DielectricPair,
    pub drude: DrudeParameters,
}

/// Outcome of one configured analysis.
#[derive(Debug, Serialize)]
pub struct AnalysisRecord {
    pub name: String,
    pub core: String,
    pub shell: String,
    pub medium: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<ResonanceAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Shell optical constants at each defined wavelength.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shell_samples: Vec<ShellSample>,
}

/// Shell dielectric function evaluated at one solved wavelength.
#[derive(Debug, Clone, Serialize)]
pub struct ShellSample {
    pub kind: ResonanceKind,
    pub wavelength_nm: f64,
    pub dielectric_function: Complex64,
    pub refractive_index: Complex64,
}

impl AnalysisRecord {
    fn new(
        config: &AnalysisConfig,
        outcome: Result<ResonanceAnalysis, SolverError>,
        shell: &dyn MaterialProvider,
    ) -> Self {
        let (analysis, error) = match outcome {
            Ok(a) => (Some(a), None),
            Err(e) => (None, Some(e.to_string())),
        };
        let shell_samples = analysis
            .as_ref()
            .map(|a| sample_shell(shell, a))
            .unwrap_or_default();
        Self {
            name: config.name.clone(),
            core: config.core.clone(),
            shell: config.shell.clone(),
            medium: config.medium.clone(),
            analysis,
            error,
            shell_samples,
        }
    }

    /// Wavelength (nm) for `kind`, `None` when undefined.
    pub fn wavelength_nm(&self, kind: ResonanceKind) -> Option<f64> {
        self.analysis.as_ref()?.entry(kind).wavelength_nm()
    }
}

/// Evaluate `shell` at every defined wavelength of `analysis`.
///
/// Wavelengths the provider rejects are skipped with a warning.
pub fn sample_shell(shell: &dyn MaterialProvider, analysis: &ResonanceAnalysis) -> Vec<ShellSample> {
    let mut samples = Vec::new();
    for entry in analysis.entries() {
        let Some(wavelength_nm) = entry.wavelength_nm() else {
            continue;
        };
        let sample = shell.dielectric_function(wavelength_nm).and_then(|eps| {
            Ok(ShellSample {
                kind: entry.kind,
                wavelength_nm,
                dielectric_function: eps,
                refractive_index: shell.refractive_index(wavelength_nm)?,
            })
        });
        match sample {
            Ok(sample) => samples.push(sample),
            Err(e) => log::warn!("{} at {}: {}", shell.name(), entry.kind, e),
        }
    }
    samples
}

/// Look up the materials of one analysis and assemble the solver inputs.
pub fn resolve_inputs(config: &AnalysisConfig, library: &MaterialLibrary) -> Result<ResolvedInputs> {
    let context = || format!("Analysis '{}'", config.name);
    let core = library.dielectric(&config.core).with_context(context)?;
    let medium = library.dielectric(&config.medium).with_context(context)?;
    let shell = library.metal(&config.shell).with_context(context)?;
    medium.validate_as_medium().with_context(context)?;

    Ok(ResolvedInputs {
        geometry: ParticleGeometry::new(config.core_radius, config.outer_radius),
        dielectric: DielectricPair::new(core.permittivity, medium.permittivity),
        drude: shell.parameters(),
    })
}

/// Check that every analysis resolves and has an admissible geometry.
pub fn validate_job(job: &JobConfig) -> Result<usize> {
    let library = job.build_library()?;
    for config in &job.analysis {
        let inputs = resolve_inputs(config, &library)?;
        shell_coefficients(inputs.geometry)
            .map_err(|e| anyhow::anyhow!("Analysis '{}': {}", config.name, e))?;
    }
    Ok(job.analysis.len())
}

/// Run every analysis in a job.
///
/// Unknown materials abort the job; solver failures are recorded per
/// analysis and per wavelength.
pub fn run_job(job: &JobConfig) -> Result<Vec<AnalysisRecord>> {
    let library = job.build_library()?;
    let policy = job.solver.root_policy;
    log::info!(
        "Running {} analyses ({} materials, policy={:?})",
        job.analysis.len(),
        library.len(),
        policy
    );

    let mut records = Vec::with_capacity(job.analysis.len());
    for config in &job.analysis {
        let inputs = resolve_inputs(config, &library)?;
        let shell = library.metal(&config.shell)?;
        let outcome = run_single(&inputs, policy);
        if let Err(e) = &outcome {
            log::warn!("Analysis '{}' failed: {}", config.name, e);
        }
        let record = AnalysisRecord::new(config, outcome, shell);
        print_record(&record);
        records.push(record);
    }
    Ok(records)
}

/// Run one analysis from already-resolved inputs.
pub fn run_single(
    inputs: &ResolvedInputs,
    policy: RadicandPolicy,
) -> Result<ResonanceAnalysis, SolverError> {
    analyse(inputs.geometry, inputs.dielectric, inputs.drude, policy)
}

fn format_wavelength(value: Option<f64>) -> String {
    value.map_or_else(|| "undefined".to_string(), |wl| format!("{wl:.2}"))
}

/// Print a one-analysis summary to stdout.
pub fn print_record(record: &AnalysisRecord) {
    println!(
        "  '{}': core={}, shell={}, medium={}",
        record.name, record.core, record.shell, record.medium
    );
    match &record.analysis {
        Some(analysis) => {
            for entry in analysis.entries() {
                println!(
                    "    {:<20} ε={:>10.4}{:+.4}i  λ={} nm",
                    entry.kind.as_str(),
                    entry.permittivity.re,
                    entry.permittivity.im,
                    format_wavelength(entry.wavelength_nm())
                );
            }
        }
        None => println!(
            "    no roots: {}",
            record.error.as_deref().unwrap_or("unknown error")
        ),
    }
}

/// Write analysis results to a CSV file with a metadata header.
///
/// Rows are RFC 4180 quoted, so names may contain commas or quotes.
pub fn write_results_csv(records: &[AnalysisRecord], path: &Path, job: &JobConfig) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Creating {}", path.display()))?;

    writeln!(file, "# Nanoshell: Core-Shell Resonance Wavelengths")?;
    writeln!(file, "# Version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(file, "# root_policy: {:?}", job.solver.root_policy)?;
    writeln!(file, "#")?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record([
        "name",
        "core",
        "shell",
        "medium",
        "core_radius_nm",
        "outer_radius_nm",
        "first_resonance_nm",
        "second_resonance_nm",
        "first_transparency_nm",
        "second_transparency_nm",
    ])?;

    for (record, config) in records.iter().zip(&job.analysis) {
        let mut row = vec![
            record.name.clone(),
            record.core.clone(),
            record.shell.clone(),
            record.medium.clone(),
            config.core_radius.to_string(),
            config.outer_radius.to_string(),
        ];
        row.extend(
            ResonanceKind::ALL
                .iter()
                .map(|&kind| format_wavelength(record.wavelength_nm(kind))),
        );
        writer.write_record(&row)?;
    }
    writer
        .flush()
        .with_context(|| format!("Writing {}", path.display()))?;

    println!("Results written to: {}", path.display());
    Ok(())
}

/// Write analysis results to a JSON file.
pub fn write_results_json(records: &[AnalysisRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(records)
        .map_err(|e| anyhow::anyhow!("JSON serialisation error: {}", e))?;
    std::fs::write(path, json)?;

    println!("Results (JSON) written to: {}", path.display());
    Ok(())
}
