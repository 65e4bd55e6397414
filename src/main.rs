use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use richtext_html::{Config, Error, LookupTables};

#[derive(Parser)]
#[command(name = "richtext-html", version)]
#[command(about = "Convert Slack rich text to a Matrix HTML fragment")]
struct Cli {
    /// Rich text JSON file, or `-` for stdin
    input: PathBuf,

    /// Lookup tables file (.json or .toml)
    #[arg(short, long)]
    tables: Option<PathBuf>,

    /// Render config TOML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output HTML file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Treat input as a whole Slack message rather than a rich_text block
    #[arg(long)]
    message: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let json = read_input(&cli.input)?;

    let luts = match &cli.tables {
        Some(path) => load_tables(path)?,
        None => LookupTables::default(),
    };

    let config = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::compiled_default(),
    };

    let document = if cli.message {
        richtext_html::parse_message(&json)?
    } else {
        richtext_html::parse_rich_text(&json)?
    };
    tracing::debug!(blocks = document.blocks.len(), "parsed document");

    let html = richtext_html::render_with_config(&document, &luts, &config);

    match &cli.output {
        Some(path) => {
            fs::write(path, html)?;
            tracing::info!(path = %path.display(), "wrote html");
        }
        None => println!("{}", html),
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String, Error> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn load_tables(path: &Path) -> Result<LookupTables, Error> {
    let content = fs::read_to_string(path)?;
    let is_toml = path.extension().is_some_and(|ext| ext == "toml");

    let luts: LookupTables = if is_toml {
        toml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    tracing::debug!(path = %path.display(), "loaded lookup tables");
    Ok(luts)
}
