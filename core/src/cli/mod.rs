pub mod report;

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for catalog_dicoms
#[derive(Parser, Debug)]
#[command(name = "catalog_dicoms")]
#[command(about = "Catalog one DICOM element per series across a directory tree")]
#[command(override_usage = "catalog_dicoms /path/to/DICOMs gggg,eeee [--verbose]")]
#[command(version)]
pub struct Cli {
    /// Directory to scan recursively
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Element to extract, as group,element in hex (e.g. 0008,0060)
    #[arg(value_name = "gggg,eeee")]
    pub tag: String,

    /// Report files that could not be decoded
    #[arg(long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positionals_and_flag() {
        let cli = Cli::try_parse_from(["catalog_dicoms", "/data", "0008,0060", "--verbose"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("/data"));
        assert_eq!(cli.tag, "0008,0060");
        assert!(cli.verbose);
    }

    #[test]
    fn test_verbose_defaults_off() {
        let cli = Cli::try_parse_from(["catalog_dicoms", "/data", "0020,000E"]).unwrap();
        assert!(!cli.verbose);
    }

    #[test]
    fn test_missing_tag_is_an_error() {
        assert!(Cli::try_parse_from(["catalog_dicoms", "/data"]).is_err());
        assert!(Cli::try_parse_from(["catalog_dicoms"]).is_err());
    }
}
