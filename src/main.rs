//! RAPIDS Build Config CLI
//!
//! Entry point for the `rapids-config` command-line tool.

use clap::{Parser, Subcommand};
use rapids_build_config::Config;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "rapids-config")]
#[command(about = "Resolve effective build flags for the RAPIDS build backend", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the resolved flags and where each value came from
    Show {
        /// Project directory containing pyproject.toml (default: current directory)
        #[arg(long, short = 'd')]
        dir: Option<PathBuf>,

        /// Operation settings as key=value pairs (repeatable)
        #[arg(long, short = 's', value_name = "KEY=VALUE")]
        setting: Vec<String>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Verify that the project's flag table resolves cleanly
    Verify {
        /// Project directory containing pyproject.toml (default: current directory)
        #[arg(long, short = 'd')]
        dir: Option<PathBuf>,

        /// Operation settings as key=value pairs (repeatable)
        #[arg(long, short = 's', value_name = "KEY=VALUE")]
        setting: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show { dir, setting, json } => run_show(dir, setting, json),
        Commands::Verify { dir, setting } => run_verify(dir, setting),
    }
}

fn run_show(dir: Option<PathBuf>, settings: Vec<String>, json: bool) {
    let config = match load_config(dir, settings) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }
    };

    let report = match config.report() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error resolving flags: {}", e);
            process::exit(1);
        }
    };

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    } else {
        println!("Project file: {}", report.source.path);
        if let Some(name) = config.project_name() {
            println!("  Package: {}", name);
        }
        println!("  Digest: {}", report.source.digest);
        println!();
        println!(
            "  commit-file         = {:?}  [{}]",
            report.commit_file, report.origins["commit-file"]
        );
        println!(
            "  disable-cuda-suffix = {}  [{}]",
            report.disable_cuda_suffix, report.origins["disable-cuda-suffix"]
        );
        println!(
            "  only-release-deps   = {}  [{}]",
            report.only_release_deps, report.origins["only-release-deps"]
        );
        println!(
            "  require-cuda        = {}  [{}]",
            report.require_cuda, report.origins["require-cuda"]
        );
    }
}

fn run_verify(dir: Option<PathBuf>, settings: Vec<String>) {
    let config = match load_config(dir, settings) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    match config.report() {
        Ok(report) => {
            println!("Configuration valid: {}", report.source.path);
            println!();
            if let Some(name) = config.project_name() {
                println!("  Package: {}", name);
            }
            if !config.dependencies().is_empty() {
                println!("  Dependencies: {}", config.dependencies().len());
            }
            println!("  require-cuda: {}", report.require_cuda);
        }
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    }
}

fn load_config(dir: Option<PathBuf>, settings: Vec<String>) -> Result<Config, String> {
    let dir = dir.unwrap_or_else(|| PathBuf::from("."));
    let settings = parse_settings(settings)?;
    Config::new(&dir, settings).map_err(|e| e.to_string())
}

fn parse_settings(pairs: Vec<String>) -> Result<Option<BTreeMap<String, String>>, String> {
    if pairs.is_empty() {
        return Ok(None);
    }

    let mut settings = BTreeMap::new();
    for pair in pairs {
        match pair.split_once('=') {
            Some((key, value)) => {
                settings.insert(key.to_string(), value.to_string());
            }
            None => return Err(format!("Invalid setting '{}': expected key=value", pair)),
        }
    }
    Ok(Some(settings))
}
