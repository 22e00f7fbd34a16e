//! Wyvern CLI
//!
//! Converts an HTML document (with optional separate CSS) into
//! component-definition YAML on stdout or a file.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use wyvern_ir::{ConvertError, build_component_tree, convert, serialize, validate, validate_only};

#[derive(Parser)]
#[command(name = "wyvern", version, about = "Convert HTML and CSS to component-definition YAML")]
struct Cli {
    /// Path to the input HTML document.
    input: PathBuf,

    /// Path to a separate CSS stylesheet, applied after any <style>
    /// elements in the document.
    #[arg(long)]
    css: Option<PathBuf>,

    /// Write the YAML here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Run the pipeline and report errors without emitting anything.
    #[arg(long)]
    validate_only: bool,

    /// Emit the intermediate component tree as JSON instead of YAML.
    #[arg(long)]
    ir_json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let html = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let css = match &cli.css {
        Some(path) => Some(
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
        ),
        None => None,
    };

    if cli.validate_only {
        dump_on_syntax_error(validate_only(&html, css.as_deref()))?;
        return Ok(());
    }

    let document = if cli.ir_json {
        let roots = build_component_tree(&html, css.as_deref())?;
        dump_on_syntax_error(validate(&serialize(&roots)))?;
        serde_json::to_string_pretty(&roots)?
    } else {
        dump_on_syntax_error(convert(&html, css.as_deref()))?
    };

    match &cli.output {
        Some(path) => fs::write(path, &document)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{document}"),
    }

    Ok(())
}

/// Syntax errors carry the text that failed to parse back. Dump it to
/// stderr so the generated document can still be inspected.
fn dump_on_syntax_error<T>(result: std::result::Result<T, ConvertError>) -> Result<T> {
    if let Err(ConvertError::Syntax { document, .. }) = &result {
        eprintln!("generated document:\n{document}");
    }
    Ok(result?)
}
