//! Output formatting for CLI commands.

use std::fmt::Display;

use serde::Serialize;

use crate::cli::args::{OutputFormat, SaplingArgs};
use crate::error::Result;

/// Output a result in the specified format.
pub fn output_result<T: Serialize + Display>(
    message: &str,
    result: &T,
    args: &SaplingArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Display>(message: &str, result: &T, args: &SaplingArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    println!("{result}");
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SaplingArgs) -> Result<()> {
    println!("{}", render_json(result, args.pretty)?);
    Ok(())
}

fn render_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    })
}
