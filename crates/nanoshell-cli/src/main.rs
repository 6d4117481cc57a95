//! Nanoshell command-line interface.
//!
//! Run core–shell resonance analyses from TOML configuration files:
//! ```sh
//! nanoshell-cli run job.toml
//! nanoshell-cli validate job.toml
//! nanoshell-cli materials
//! nanoshell-cli solve --core-radius 5 --outer-radius 10 ...
//! ```

mod config;
mod runner;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use nanoshell_core::{DielectricPair, DrudeParameters, ParticleGeometry, RadicandPolicy};
use nanoshell_materials::{MaterialLibrary, MaterialProvider};

#[derive(Parser)]
#[command(name = "nanoshell-cli")]
#[command(about = "Nanoshell: quasi-static core-shell plasmon resonance solver")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all analyses in a TOML configuration file.
    Run {
        /// Path to the job configuration file.
        config: PathBuf,
        /// Output directory (overrides config file setting).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a configuration file without solving.
    Validate {
        /// Path to the job configuration file.
        config: PathBuf,
    },
    /// List available materials.
    Materials {
        /// Include custom materials from a job configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Solve a single particle given directly on the command line.
    Solve(SolveArgs),
}

#[derive(Args)]
struct SolveArgs {
    /// Core radius (nm).
    #[arg(long)]
    core_radius: f64,
    /// Outer radius (nm).
    #[arg(long)]
    outer_radius: f64,
    /// Core permittivity.
    #[arg(long, allow_hyphen_values = true)]
    core_permittivity: f64,
    /// Host medium permittivity.
    #[arg(long, default_value_t = 1.0)]
    medium_permittivity: f64,
    /// Shell plasma frequency (eV).
    #[arg(long)]
    plasma_frequency: f64,
    /// Shell damping rate (eV).
    #[arg(long)]
    damping_rate: f64,
    /// Shell high-frequency permittivity.
    #[arg(long, allow_hyphen_values = true)]
    asymptotic_permittivity: f64,
    /// Fail instead of returning complex roots for a negative discriminant.
    #[arg(long)]
    real_only: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, output } => {
            println!("Nanoshell Resonance Solver");
            println!("==========================");
            let job = config::load_config(&config)?;
            println!("Configuration: {}", config.display());

            let records = runner::run_job(&job)?;

            // Determine output directory
            let out_dir = output.unwrap_or_else(|| PathBuf::from(&job.output.directory));

            if job.output.save_csv {
                let csv_path = out_dir.join("resonances.csv");
                runner::write_results_csv(&records, &csv_path, &job)?;
            }

            if job.output.save_json {
                let json_path = out_dir.join("resonances.json");
                runner::write_results_json(&records, &json_path)?;
            }

            let failed = records.iter().filter(|r| r.analysis.is_none()).count();
            if failed > 0 {
                println!("{} of {} analyses had no roots.", failed, records.len());
            }
            println!("Analysis complete.");
            Ok(())
        }
        Commands::Validate { config } => {
            let job = config::load_config(&config)?;
            let count = runner::validate_job(&job)?;
            println!("Configuration is valid: {} ({} analyses)", config.display(), count);
            Ok(())
        }
        Commands::Materials { config } => {
            let library = match config {
                Some(path) => config::load_config(&path)?.build_library()?,
                None => MaterialLibrary::with_builtins(),
            };
            print_materials(&library);
            Ok(())
        }
        Commands::Solve(args) => {
            let policy = if args.real_only {
                RadicandPolicy::RealOnly
            } else {
                RadicandPolicy::Complex
            };
            let inputs = runner::ResolvedInputs {
                geometry: ParticleGeometry::new(args.core_radius, args.outer_radius),
                dielectric: DielectricPair::new(args.core_permittivity, args.medium_permittivity),
                drude: DrudeParameters::new(
                    args.plasma_frequency,
                    args.damping_rate,
                    args.asymptotic_permittivity,
                ),
            };
            let analysis = runner::run_single(&inputs, policy)?;
            for entry in analysis.entries() {
                match entry.wavelength_nm() {
                    Some(wl) => println!("{:<20} {:.4} nm  (ε = {:.6})", entry.kind.as_str(), wl, entry.permittivity),
                    None => println!("{:<20} undefined  (ε = {:.6})", entry.kind.as_str(), entry.permittivity),
                }
            }
            Ok(())
        }
    }
}

fn print_materials(library: &MaterialLibrary) {
    println!("Available materials:");
    println!();
    println!("  Core / medium dielectrics:");
    for m in library.dielectrics() {
        println!("    {:<14} ε = {:<8} {}", m.name(), m.permittivity, m.reference().unwrap_or(""));
    }
    println!();
    println!("  Shell metals (Drude):");
    for m in library.metals() {
        let p = m.parameters();
        println!(
            "    {:<14} ħωp = {:.2} eV, ħγ = {:.3} eV, ε∞ = {:.2} {}",
            m.name(),
            p.plasma_frequency,
            p.damping_rate,
            p.asymptotic_permittivity,
            m.reference().unwrap_or("")
        );
    }
}
