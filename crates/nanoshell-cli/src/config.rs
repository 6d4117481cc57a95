//! TOML configuration deserialisation for analysis jobs.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use nanoshell_core::RadicandPolicy;
use nanoshell_materials::{ConstantDielectric, DrudeMaterial, MaterialLibrary};

/// Top-level job configuration.
#[derive(Debug, Deserialize)]
pub struct JobConfig {
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub materials: MaterialsConfig,
    pub analysis: Vec<AnalysisConfig>,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Solver options from TOML.
#[derive(Debug, Default, Deserialize)]
pub struct SolverConfig {
    /// `"complex"` (default) or `"real_only"`.
    #[serde(default)]
    pub root_policy: RadicandPolicy,
}

/// User-defined materials, added on top of the built-in library.
#[derive(Debug, Default, Deserialize)]
pub struct MaterialsConfig {
    #[serde(default)]
    pub dielectric: Vec<ConstantDielectric>,
    #[serde(default)]
    pub metal: Vec<DrudeMaterial>,
}

/// A single core–shell particle to analyse.
#[derive(Debug, Deserialize)]
pub struct AnalysisConfig {
    pub name: String,
    /// Core radius in nm.
    pub core_radius: f64,
    /// Outer radius in nm.
    pub outer_radius: f64,
    /// Dielectric identifier for the core (e.g. "Silica").
    pub core: String,
    /// Metal identifier for the shell (e.g. "Au").
    pub shell: String,
    /// Dielectric identifier for the host medium (e.g. "Water").
    pub medium: String,
}

/// Output configuration.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Output directory (default: "./output").
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Whether to save results as CSV (default: true).
    #[serde(default = "default_true")]
    pub save_csv: bool,
    /// Whether to also save results as JSON (default: false).
    #[serde(default)]
    pub save_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            save_csv: true,
            save_json: false,
        }
    }
}

fn default_output_dir() -> String {
    "./output".into()
}
fn default_true() -> bool {
    true
}

impl JobConfig {
    /// Built-in materials plus the job's custom ones.
    pub fn build_library(&self) -> anyhow::Result<MaterialLibrary> {
        let mut library = MaterialLibrary::with_builtins();
        for material in &self.materials.dielectric {
            library
                .insert_dielectric(material.clone())
                .with_context(|| format!("Custom dielectric '{}'", material.name))?;
        }
        for material in &self.materials.metal {
            library
                .insert_metal(material.clone())
                .with_context(|| format!("Custom metal '{}'", material.name))?;
        }
        Ok(library)
    }
}

/// Parse a TOML job configuration.
pub fn parse_config(content: &str) -> anyhow::Result<JobConfig> {
    let config: JobConfig = toml::from_str(content)?;
    if config.analysis.is_empty() {
        anyhow::bail!("No [[analysis]] entries in configuration");
    }
    Ok(config)
}

/// Load and parse a TOML job configuration file.
pub fn load_config(path: &Path) -> anyhow::Result<JobConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Reading configuration {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Parsing configuration {}", path.display()))
}
