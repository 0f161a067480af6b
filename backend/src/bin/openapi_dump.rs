//! Print the OpenAPI document as JSON, to stdout or to `--output`.

use std::path::PathBuf;

use clap::Parser;
use employees_backend::doc::ApiDoc;
use utoipa::OpenApi;

#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Export the employees OpenAPI document")]
struct Args {
    /// Write the document to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let json = ApiDoc::openapi().to_pretty_json()?;
    match args.output {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}
