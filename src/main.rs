//! Parliament CLI
//!
//! Multi-lens decision synthesis and POG scoring from the command line.
//!
//! ```text
//! parliament deliberate "Should we migrate to GraphQL?" --profile analytical
//! parliament pog report --baseline runs/baseline --treatment runs/treatment
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use parliament::pog::{self, PogReport};
use parliament::{Config, Lens, Parliament, Profile};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "parliament",
    about = "Multi-lens decision synthesis and uncertainty-preservation scoring"
)]
struct Cli {
    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    /// Config file (defaults to $PARLIAMENT_CONFIG, then the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deliberate on a decision prompt
    Deliberate {
        /// Decision prompt (multiple words are joined)
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,

        /// Cognitive profile: balanced, analytical, practical, creative, philosophical, empathetic
        #[arg(long)]
        profile: Option<String>,

        /// Output JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the profile weight table
    Profiles,

    /// Persistence-of-gap scoring
    Pog {
        #[command(subcommand)]
        command: PogCommand,
    },
}

#[derive(Subcommand)]
enum PogCommand {
    /// Score one condition (files or directories of exports)
    Score {
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// Compare a treatment condition against a baseline
    Report {
        #[arg(long, required = true, num_args = 1..)]
        baseline: Vec<PathBuf>,

        #[arg(long, required = true, num_args = 1..)]
        treatment: Vec<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// Record the reference demo session, export it, and print its report
    Demo {
        /// Output directory (defaults to the configured export_dir)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("failed to load config")?;

    match &cli.command {
        Commands::Deliberate {
            prompt,
            profile,
            json,
        } => cmd_deliberate(&config, &prompt.join(" "), profile.as_deref(), *json),
        Commands::Profiles => cmd_profiles(),
        Commands::Pog { command } => match command {
            PogCommand::Score { paths, json } => cmd_pog_score(&config, paths, *json),
            PogCommand::Report {
                baseline,
                treatment,
                json,
            } => cmd_pog_report(&config, baseline, treatment, *json),
            PogCommand::Demo { out } => cmd_pog_demo(&config, out.as_deref()),
        },
    }
}

fn cmd_deliberate(config: &Config, prompt: &str, profile: Option<&str>, json: bool) -> Result<()> {
    let profile = match profile {
        Some(name) => {
            if Profile::from_name(name).is_none() {
                tracing::warn!("unknown profile {:?}, using balanced", name);
            }
            Profile::resolve(name)
        }
        None => config.profile(),
    };

    let report = Parliament::new(profile).deliberate(prompt);

    if json || config.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.render_text());
    }
    Ok(())
}

fn cmd_profiles() -> Result<()> {
    print!("{:<15}", "PROFILE");
    for lens in Lens::ALL {
        print!("{:>15}", lens.name());
    }
    println!();

    for profile in Profile::ALL {
        print!("{:<15}", profile.name());
        for lens in Lens::ALL {
            print!("{:>15.1}", profile.weights().get(lens));
        }
        println!();
    }
    Ok(())
}

fn cmd_pog_score(config: &Config, paths: &[PathBuf], json: bool) -> Result<()> {
    let cycles = pog::load_paths(paths).context("failed to load cycles")?;
    let ratio = pog::score(&cycles);
    let preserving = pog::scorer::preserving_count(&cycles);

    if json || config.json {
        let out = serde_json::json!({
            "pog": pog::scorer::round3(ratio),
            "uncertainty_outputs": preserving,
            "total_cycles": cycles.len(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "POG: {:.3} ({}/{} cycles preserved uncertainty)",
            ratio,
            preserving,
            cycles.len()
        );
        if cycles.is_empty() {
            println!("No cycles loaded: a score of 0.000 here means no data.");
        }
    }
    Ok(())
}

fn cmd_pog_report(
    config: &Config,
    baseline: &[PathBuf],
    treatment: &[PathBuf],
    json: bool,
) -> Result<()> {
    let baseline = pog::load_paths(baseline).context("failed to load baseline cycles")?;
    let treatment = pog::load_paths(treatment).context("failed to load treatment cycles")?;
    let report = PogReport::build(&baseline, &treatment);

    if json || config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render());
    }
    Ok(())
}

fn cmd_pog_demo(config: &Config, out: Option<&Path>) -> Result<()> {
    let out_dir = out.unwrap_or(config.export_dir.as_path());
    let (baseline, treatment) = pog::demo_session();

    let baseline_path = out_dir.join("baseline.json");
    let treatment_path = out_dir.join("treatment.json");
    baseline
        .export(&baseline_path)
        .with_context(|| format!("failed to export {}", baseline_path.display()))?;
    treatment
        .export(&treatment_path)
        .with_context(|| format!("failed to export {}", treatment_path.display()))?;

    println!("Saved {} cycles to {}", baseline.len(), baseline_path.display());
    println!("Saved {} cycles to {}", treatment.len(), treatment_path.display());

    println!("\nPOG Baseline: {:.3}", pog::score(baseline.cycles()));
    println!("POG Treatment: {:.3}", pog::score(treatment.cycles()));

    println!("\n{}", "=".repeat(60));
    println!(
        "{}",
        pog::generate_report(baseline.cycles(), treatment.cycles())
    );
    Ok(())
}
