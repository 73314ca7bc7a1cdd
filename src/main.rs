//! ignition_platform_launch CLI

use clap::{Parser, Subcommand};
use ignition_platform_launch::resolve_platform_launch;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    process,
};

#[derive(Parser)]
#[command(name = "ignition_platform_launch")]
#[command(about = "Launch description for the ignition platform node", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the launch description and write the record as JSON
    Record {
        /// Launch arguments (key:=value)
        #[arg(value_parser = parse_launch_arg)]
        args: Vec<(String, String)>,

        /// Output file path (default: record.json)
        #[arg(short, long, default_value = "record.json")]
        output: PathBuf,
    },

    /// Resolve the launch description and print each node's command line
    Show {
        /// Launch arguments (key:=value)
        #[arg(value_parser = parse_launch_arg)]
        args: Vec<(String, String)>,
    },
}

fn parse_launch_arg(s: &str) -> Result<(String, String), String> {
    let parts: Vec<&str> = s.split(":=").collect();
    if parts.len() != 2 {
        return Err(format!("Invalid launch argument format: {}", s));
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Record { args, output } => {
            let overrides: HashMap<String, String> = args.into_iter().collect();
            write_record(overrides, &output)
        }
        Commands::Show { args } => {
            let overrides: HashMap<String, String> = args.into_iter().collect();
            show_commands(overrides)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn write_record(
    overrides: HashMap<String, String>,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let record = resolve_platform_launch(overrides)?;

    let json = record.to_json()?;
    std::fs::write(output, json)?;

    log::info!("Generated launch record: {}", output.display());
    log::info!(
        "  {} arguments, {} nodes",
        record.arguments.len(),
        record.node.len()
    );

    Ok(())
}

fn show_commands(overrides: HashMap<String, String>) -> Result<(), Box<dyn std::error::Error>> {
    let record = resolve_platform_launch(overrides)?;

    for node in &record.node {
        println!("# {} (namespace {})", node.name, node.namespace);
        println!("{}", node.cmd.join(" "));
    }

    Ok(())
}
