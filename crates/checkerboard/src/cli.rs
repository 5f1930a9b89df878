//! Command-line arguments

use clap::{ArgAction, Parser};

use crate::config::{GeneratorConfig, OutputFormat, DEFAULT_SIZE, MAX_SIZE};

/// Print an n×n checkerboard of 0s and 1s.
#[derive(Parser, Debug)]
#[command(name = "checkerboard", author, version, about, long_about = None)]
pub struct Cli {
    /// Grid size (side length), 1 to 4096
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_SIZE,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new()
            .range(1..=MAX_SIZE as u64),
    )]
    pub size: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter for the requested verbosity. `RUST_LOG` wins over this.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

impl From<&Cli> for GeneratorConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            size: cli.size,
            format: cli.format,
            trace: cli.verbose >= 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_filter_levels() {
        let quiet = Cli::try_parse_from(["checkerboard"]).unwrap();
        assert_eq!(quiet.log_filter(), "warn");
        let loud = Cli::try_parse_from(["checkerboard", "-vvv"]).unwrap();
        assert_eq!(loud.log_filter(), "trace");
    }
}
