//! Winecellar CLI - render the catalog page and serve it
//!
//! # Commands
//!
//! ```bash
//! winecellar --port 9000            # Same as `serve`
//! winecellar serve --port 8000      # Build index.html, then serve the directory
//! winecellar render                 # Build index.html only
//! ```
//!
//! # Debug Commands
//!
//! ```bash
//! winecellar parse                  # Dump loaded rows as JSON
//! winecellar group                  # Dump the category grouping as JSON
//! ```
//!
//! Every flag falls back to an environment variable (a `.env` file in the
//! working directory is honored), then to the built-in default.

use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use winecellar::config::{
    DEFAULT_CATALOG_PATH, DEFAULT_PORT, DEFAULT_SHEET_NAME, DEFAULT_TEMPLATE_PATH,
    ENV_CATALOG_PATH, ENV_PORT, ENV_SHEET_NAME, ENV_TEMPLATE_PATH,
};
use winecellar::logs::{init_tracing, log_success};
use winecellar::{build_site, group_by_category, load_catalog, start_server, SiteOptions};

#[derive(Parser)]
#[command(name = "winecellar")]
#[command(about = "Render the wine and drinks catalog page and serve it", long_about = None)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,

    /// Port to listen on
    #[arg(short, long, global = true, env = ENV_PORT, default_value_t = DEFAULT_PORT)]
    port: u16,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Where the catalog and template come from
#[derive(Args)]
struct SourceArgs {
    /// Catalog workbook (xlsx, xls, xlsb, ods)
    #[arg(long, global = true, env = ENV_CATALOG_PATH, default_value = DEFAULT_CATALOG_PATH)]
    file: PathBuf,

    /// Sheet holding the catalog rows
    #[arg(long, global = true, env = ENV_SHEET_NAME, default_value = DEFAULT_SHEET_NAME)]
    sheet: String,

    /// HTML template to render
    #[arg(long, global = true, env = ENV_TEMPLATE_PATH, default_value = DEFAULT_TEMPLATE_PATH)]
    template: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Build index.html, then serve the working directory (default)
    Serve,

    /// Build index.html without serving it
    Render {
        /// Directory receiving index.html (default: working directory)
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Load the workbook and output its rows as JSON
    Parse {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load and group the workbook, output the grouping as JSON
    Group {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let source = cli.source;

    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => cmd_serve(&source, cli.port).await,
        Commands::Render { output } => cmd_render(&source, output).map(|_| ()),
        Commands::Parse { output } => cmd_parse(&source, output.as_deref()),
        Commands::Group { output } => cmd_group(&source, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn site_options(source: &SourceArgs, output_dir: PathBuf) -> SiteOptions {
    SiteOptions {
        catalog_path: source.file.clone(),
        sheet: source.sheet.clone(),
        template_path: source.template.clone(),
        output_dir,
        phrase: None,
    }
}

fn cmd_render(source: &SourceArgs, output: PathBuf) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let report = build_site(&site_options(source, output))?;
    log_success(format!(
        "{} rows in {} categories",
        report.row_count, report.category_count
    ));
    Ok(report.output_path)
}

async fn cmd_serve(source: &SourceArgs, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let root = PathBuf::from(".");
    cmd_render(source, root.clone())?;
    start_server(&root, port).await?;
    Ok(())
}

fn cmd_parse(source: &SourceArgs, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let rows = load_catalog(&source.file, &source.sheet)?;
    log_success(format!("Parsed {} rows", rows.len()));

    let records: Vec<Value> = rows.iter().map(|r| r.to_json()).collect();
    let json = serde_json::to_string_pretty(&records)?;
    write_output(&json, output)
}

fn cmd_group(source: &SourceArgs, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let rows = load_catalog(&source.file, &source.sheet)?;
    let catalog = group_by_category(rows)?;
    log_success(format!(
        "{} rows in {} categories",
        catalog.row_count(),
        catalog.len()
    ));

    let json = serde_json::to_string_pretty(&catalog)?;
    write_output(&json, output)
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            log_success(format!("💾 Output written to: {}", p.display()));
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
