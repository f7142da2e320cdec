use clap::{Parser, Subcommand};
use log::info;
use std::fs;
use std::path::PathBuf;

use kiwi_wire::{compile_schema, format_schema, schema_to_json, KiwiError};

#[derive(Parser)]
#[command(name = "kiwi")]
#[command(about = "Check, format, or dump Kiwi schemas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a `.kiwi` schema and report the first error, if any
    Check {
        /// Input `.kiwi` file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print a `.kiwi` schema in canonical form
    Fmt {
        /// Input `.kiwi` file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (if omitted, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Dump the parsed schema as JSON (printed to stdout)
    Json {
        /// Input `.kiwi` file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<(), KiwiError> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Check { input } => {
            let text = fs::read_to_string(input)?;
            let schema = compile_schema(&text)?;
            println!("OK: {} definitions", schema.definitions().len());
            Ok(())
        }

        Commands::Fmt { input, output } => {
            let text = fs::read_to_string(input)?;
            let formatted = format_schema(&text)?;
            if let Some(out_path) = output {
                fs::write(out_path, &formatted)?;
                info!("formatted {} → {}", input.display(), out_path.display());
            } else {
                print!("{}", formatted);
            }
            Ok(())
        }

        Commands::Json { input } => {
            let text = fs::read_to_string(input)?;
            let schema = compile_schema(&text)?;
            println!("{}", schema_to_json(&schema)?);
            Ok(())
        }
    }
}
