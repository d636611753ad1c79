// src/cli.rs
use anyhow::{Result, bail};
use clap::Parser;
use log::warn;
use std::path::PathBuf;

use crate::core::analyzer::analyse_file;
use crate::utils::{export_json, find_text_files, print_summary};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text files to analyse
    pub files: Vec<PathBuf>,

    /// Analyse every .txt file found under a directory
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Print the full statistics record as JSON instead of a summary
    #[arg(short, long)]
    pub json: bool,

    /// Write each record as <filename>_results.json into this directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: Args) -> Result<()> {
    let mut targets = args.files.clone();

    if let Some(dir) = &args.directory {
        targets.extend(find_text_files(dir)?);
    }

    if targets.is_empty() {
        bail!("no input: pass one or more files, or --directory");
    }

    for path in &targets {
        let statistics = analyse_file(path);

        if let Some(dir) = &args.output {
            if statistics.filename.is_empty() {
                warn!("Skipping export for unreadable input: {}", path.display());
                continue;
            }
            let export_path = dir.join(format!("{}_results.json", statistics.filename));
            export_json(&statistics, &export_path)?;
            println!("Results exported to {}", export_path.display());
        } else if args.json {
            println!("{}", serde_json::to_string_pretty(&statistics)?);
        } else {
            print_summary(&statistics);
        }
    }

    Ok(())
}
