#![deny(missing_docs)]

//! # oas2ts CLI
//!
//! Command Line Interface for the OpenAPI-to-TypeScript generator.
//!
//! Supported Commands:
//! - `generate`: Reads an OpenAPI document and writes TypeScript
//!   interface declarations.

use clap::{Parser, Subcommand};
use oas2ts_core::AppResult;

mod generate;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI to TypeScript declaration generator")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generates TypeScript interfaces from an OpenAPI document.
    Generate(generate::GenerateArgs),
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate(args) => generate::execute(args),
    }
}
