use clap::Parser;
use georegion::region::{RegionOptions, ScanOrder};
use georegion::{DEFAULT_BORDER_SYMBOL, GridConfig, io, region};
use log::{debug, error};
use std::path::PathBuf;
use std::process::ExitCode;

/// Count the 4-connected regions of non-border cells in a text map
#[derive(Parser, Debug)]
#[command(name = "georegion", version, long_about = None)]
struct Args {
    /// Path to the map file
    #[arg(default_value = "map.txt")]
    map: PathBuf,

    /// Border (wall) symbol, a single ASCII character
    #[arg(short, long, default_value_t = DEFAULT_BORDER_SYMBOL as char, value_parser = parse_border)]
    border: char,

    /// Print the loaded map before the count
    #[arg(short, long, default_value_t = false)]
    print: bool,

    /// Scan for seed cells column by column
    #[arg(long, default_value_t = false)]
    column_major: bool,

    /// Enable verbose logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Args {
    fn grid_config(&self) -> GridConfig {
        // parse_border only accepts ASCII
        GridConfig::default().with_border(self.border as u8)
    }

    fn region_options(&self) -> RegionOptions {
        let order = if self.column_major {
            ScanOrder::ColumnMajor
        } else {
            ScanOrder::RowMajor
        };
        RegionOptions::new(order)
    }
}

fn parse_border(value: &str) -> Result<char, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() && c != '\n' => Ok(c),
        _ => Err(format!("border must be a single ASCII character, got '{value}'")),
    }
}

fn run(args: &Args) -> Result<usize, georegion::Error> {
    let grid = io::read_grid_file(&args.map, &args.grid_config())?;
    debug!(
        "loaded {} ({}x{})",
        args.map.display(),
        grid.width(),
        grid.height()
    );

    if args.print {
        io::write_grid(&grid, std::io::stdout().lock())?;
    }

    Ok(region::count_regions_with(&grid, &args.region_options())?)
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(count) => {
            println!("{count}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:?} failure: {e}", e.kind());
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use georegion::ErrorKind;
    use georegion_test::test_data_path;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let a = args(&["georegion"]);
        assert_eq!(a.map, PathBuf::from("map.txt"));
        assert_eq!(a.border, '#');
        assert!(!a.print && !a.column_major && !a.verbose);
        assert_eq!(a.region_options().scan_order, ScanOrder::RowMajor);
    }

    #[test]
    fn test_border_flag() {
        let a = args(&["georegion", "-b", "~", "--column-major", "islands.txt"]);
        assert_eq!(a.grid_config().border, b'~');
        assert_eq!(a.region_options().scan_order, ScanOrder::ColumnMajor);

        assert!(Args::try_parse_from(["georegion", "--border", "##"]).is_err());
        assert!(Args::try_parse_from(["georegion", "--border", "é"]).is_err());
    }

    #[test]
    fn test_run_counts_fixture() {
        let a = args(&["georegion", &test_data_path("rooms.txt")]);
        assert_eq!(run(&a).unwrap(), 3);

        let a = args(&["georegion", "-b", "~", &test_data_path("islands.txt")]);
        assert_eq!(run(&a).unwrap(), 8);
    }

    #[test]
    fn test_run_reports_failure_kinds() {
        let a = args(&["georegion", &test_data_path("no_such_map.txt")]);
        assert_eq!(run(&a).unwrap_err().kind(), ErrorKind::SourceUnavailable);

        let a = args(&["georegion", &test_data_path("ragged.txt")]);
        assert_eq!(run(&a).unwrap_err().kind(), ErrorKind::MalformedGrid);
    }
}
