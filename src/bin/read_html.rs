//! Command-line table importer.
//!
//! Reads an HTML document from a path, a `file://` URL or stdin and prints
//! its tables as a JSON array of frames.

use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use rs_html_tables::{read_html_bytes, read_html_from, DataFrame, Options};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "read_html", version, about = "Import HTML tables as JSON data frames")]
struct Cli {
    /// Path or file:// URL of the HTML document; stdin when omitted.
    location: Option<String>,

    /// Only import tables whose markup contains this text.
    #[arg(long = "match", value_name = "PATTERN")]
    pattern: Option<String>,

    /// Name given to every imported table.
    #[arg(long)]
    name: Option<String>,

    /// Comma-separated column labels replacing the scraped ones.
    #[arg(long, value_delimiter = ',')]
    order: Option<Vec<String>>,

    /// Comma-separated row labels replacing the scraped ones.
    #[arg(long, value_delimiter = ',')]
    index: Option<Vec<String>>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            pattern: self.pattern.clone(),
            name: self.name.clone(),
            order: self.order.clone(),
            index: self.index.clone(),
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "import failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = cli.options();
    let frames: Vec<DataFrame> = match cli.location.as_deref() {
        Some(location) => read_html_from(location, &options)?,
        None => {
            let mut html = Vec::new();
            io::stdin().read_to_end(&mut html)?;
            read_html_bytes(&html, &options)?
        }
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&frames)?
    } else {
        serde_json::to_string(&frames)?
    };
    println!("{json}");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
