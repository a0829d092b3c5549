use clap::Parser;
use dcmcatalog_core::{
    catalog_datasets, find_json_files, DatasetCatalogConfig, DatasetRun, FieldSelection,
    FIELD_FILE_NAME,
};
use log::error;
use std::path::{Path, PathBuf};
use std::process;

/// Catalog JSON metadata sidecars across directories
#[derive(Parser, Debug)]
#[command(name = "catalog_datasets")]
#[command(about = "Catalog JSON metadata across directories.")]
#[command(version)]
struct Cli {
    /// Directory to scan (defaults to current)
    #[arg(value_name = "TARGET", default_value = ".")]
    target: PathBuf,

    /// Comma-separated list of fields to extract (bypass field file)
    #[arg(long)]
    fields: Option<String>,

    /// Directory to save CSV output
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let root = resolve(&cli.target);
    let output_dir = match &cli.out {
        Some(dir) => resolve(dir),
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("Error: cannot determine working directory: {}", e);
                process::exit(1);
            }
        },
    };

    let selection = match &cli.fields {
        Some(list) => FieldSelection::from_list(list),
        None => FieldSelection::FromFile(PathBuf::from(FIELD_FILE_NAME)),
    };

    println!("Scanning: {}", root.display());
    let json_files = find_json_files(&root);
    println!("Found {} JSON files.", json_files.len());

    match &selection {
        FieldSelection::Explicit(fields) => {
            println!("Using fields from command line: {:?}", fields)
        }
        FieldSelection::FromFile(path) if path.exists() => {
            println!("Using selected fields from {}", path.display())
        }
        FieldSelection::FromFile(path) => {
            println!("Generating field list file: {}", path.display())
        }
    }

    let config = DatasetCatalogConfig {
        selection,
        output_dir,
    };

    match catalog_datasets(&config, &json_files) {
        Ok(DatasetRun::TemplateWritten { keys, .. }) => {
            println!("Wrote {} field names.", keys);
            println!("Edit the field list and re-run this script, or use --fields option.");
        }
        Ok(DatasetRun::CatalogWritten { path, fields, records }) => {
            println!("Generated catalog of {} records with fields {:?}", records, fields);
            println!("Catalog written to: {}", path.display());
        }
        Err(e) => {
            error!("Catalog failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Absolute form of `path`, falling back to the path as given
fn resolve(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
