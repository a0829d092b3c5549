use clap::error::ErrorKind;
use clap::Parser;
use dcmcatalog_core::cli::Cli;
use dcmcatalog_core::{catalog_dicoms, DicomCatalogConfig, TagSpec, TextReport};
use log::info;
use std::io::Write;
use std::process;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                process::exit(1);
            }
        },
    };

    setup_logging(cli.verbose);

    // Validate the tag before touching the filesystem
    let tag = match TagSpec::parse(&cli.tag) {
        Ok(tag) => tag,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let config = DicomCatalogConfig::new(cli.root, tag);
    match catalog_dicoms(&config) {
        Ok(summary) => info!("{}", TextReport::new(&summary)),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Skip messages are printed bare (`Skipping <path>: <reason>`) and only
/// with `--verbose`. A `RUST_LOG` setting takes precedence over both levels.
fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Error
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}
