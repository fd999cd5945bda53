//! imgreport CLI - image-report PDF generation tool

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use imgreport::{compose_into, PdfEngine, ReportConfig};

#[derive(Parser)]
#[command(name = "imgreport")]
#[command(version)]
#[command(about = "Generate image-report PDFs from config files", long_about = None)]
struct Cli {
    /// Report config file (.json or .toml)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output PDF path (overrides the config)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the report PDF
    Build {
        /// Report config file (.json or .toml)
        #[arg(value_name = "CONFIG")]
        config: PathBuf,

        /// Output PDF path (overrides the config)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Validate a config and list images that would be skipped
    Check {
        /// Report config file (.json or .toml)
        #[arg(value_name = "CONFIG")]
        config: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Build { config, output }) => cmd_build(&config, output.as_deref()),
        Some(Commands::Check { config }) => cmd_check(&config),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: build if a config is provided
            if let Some(config) = cli.config {
                cmd_build(&config, cli.output.as_deref())
            } else {
                println!("{}", "Usage: imgreport <CONFIG>".yellow());
                println!("       imgreport --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_build(config_path: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Loading config...");
    let config = ReportConfig::from_file(config_path)?;
    let output = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| config.output().to_path_buf());
    pb.inc(1);

    pb.set_message("Composing pages...");
    let mut engine = PdfEngine::new(&config.title())?;
    let summary = compose_into(&config, &mut engine)?;
    pb.inc(1);

    pb.set_message("Writing document...");
    engine.save(&output)?;
    pb.inc(1);
    pb.finish_with_message("Done!");

    println!(
        "{} Created: {}",
        "Done!".green().bold(),
        output.display()
    );
    println!(
        "  {} {} page(s), {} image(s) placed",
        "├─".dimmed(),
        summary.pages,
        summary.placed
    );
    if summary.skipped.is_empty() {
        println!("  {} no skipped images", "└─".dimmed());
    } else {
        println!(
            "  {} {} skipped: {}",
            "└─".dimmed(),
            summary.skipped.len().to_string().yellow(),
            summary.skipped.join(", ")
        );
    }

    Ok(())
}

fn cmd_check(config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = ReportConfig::from_file(config_path)?;

    println!("{} {}", "Config:".green().bold(), config_path.display());
    println!("  output: {}", config.output().display());
    println!("  title:  {}", config.title());

    let missing = config.missing_images();
    if missing.is_empty() {
        println!("{}", "All images resolved.".green());
    } else {
        println!(
            "{} {} image(s) would be skipped:",
            "Warning:".yellow().bold(),
            missing.len()
        );
        for name in &missing {
            println!("  {} {}", "-".dimmed(), name);
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("imgreport {}", env!("CARGO_PKG_VERSION"));
}
