#![deny(missing_docs)]

//! # Generate Command
//!
//! Reads an OpenAPI document (YAML or JSON), runs the generator, and writes
//! the declarations to a file or stdout.

use oas2ts_core::{generate, parse_document, AppResult, Options, Wrapper};
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the OpenAPI document (YAML or JSON).
    pub input: PathBuf,

    /// Output file for the declarations; stdout when omitted.
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Convert interface and field names to camelCase.
    #[clap(long)]
    pub camelcase: bool,

    /// Prepend an auto-generated-file warning comment.
    #[clap(long)]
    pub inject_warning: bool,

    /// Custom namespace/module header (e.g. "export namespace API").
    #[clap(long, conflicts_with = "no_wrapper")]
    pub wrapper: Option<String>,

    /// Emit bare declarations without a namespace wrapper.
    #[clap(long)]
    pub no_wrapper: bool,

    /// OpenAPI major version of the input document.
    #[clap(long, default_value_t = 3)]
    pub openapi_version: u64,
}

impl GenerateArgs {
    fn options(&self) -> Options {
        let wrapper = if self.no_wrapper {
            Wrapper::None
        } else {
            match &self.wrapper {
                Some(header) => Wrapper::Custom(header.clone()),
                None => Wrapper::Default,
            }
        };

        Options {
            wrapper,
            camel_case: self.camelcase,
            inject_warning: self.inject_warning,
            version: self.openapi_version,
        }
    }
}

/// Executes the generate command.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &GenerateArgs) -> AppResult<()> {
    let content = fs::read_to_string(&args.input)?;
    let document = parse_document(&content)?;
    let declarations = generate(&document, &args.options())?;

    match &args.output {
        Some(path) => {
            fs::write(path, &declarations)?;
            println!("Wrote {} to {}", args.input.display(), path.display());
        }
        None => print!("{}", declarations),
    }

    Ok(())
}
