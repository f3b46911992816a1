//! Print the OpenAPI document as JSON or YAML.

use std::io::Write as _;

use backend::doc::ApiDoc;
use clap::{Parser, ValueEnum};
use utoipa::OpenApi;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    #[default]
    Json,
    Yaml,
}

/// Dump the generated OpenAPI document to stdout.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump")]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    let doc = ApiDoc::openapi();
    let rendered = match cli.format {
        Format::Json => doc.to_pretty_json().map_err(std::io::Error::other)?,
        Format::Yaml => doc.to_yaml().map_err(std::io::Error::other)?,
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")
}
