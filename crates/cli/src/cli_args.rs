//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate. Validation runs inside clap's value parsers, so a bad pattern or
//! length argument is reported with the usage message on stderr and exit
//! code 2 before any formatted output is produced.

use clap::Parser;
use stfmt_core::pattern::Pattern;
use stfmt_core::validation;

/// Command-line arguments for the `stfmt` binary.
///
/// # Examples
///
/// ```bash
/// stfmt SST 5 2
/// stfmt --verbose ST 1
/// ```
#[derive(Parser, Debug)]
#[command(term_width = 0)] // Just to make testing across clap features easier
#[command(about = "Expands a cyclic S/T pattern into punctuated sentences")]
pub struct Args {
    /// Pattern of `S` and `T` characters to expand, e.g. `SST`.
    ///
    /// `S` renders as "Soft" and `T` as "Tough"; the pattern repeats
    /// cyclically when a requested length exceeds it.
    #[arg(value_parser = pattern_parser)]
    pub pattern: Pattern,

    /// One or more output lengths, each a positive integer.
    ///
    /// One formatted line is printed per length, in the order given.
    /// Hyphen-led values such as `-1` are still routed to the validator
    /// rather than rejected as unknown flags, so they report the length
    /// error message.
    #[arg(required = true, num_args(1..), allow_negative_numbers = true, value_parser = length_parser)]
    pub lengths: Vec<usize>,

    /// Enable verbose (debug) logging.
    ///
    /// Diagnostic output goes to stderr and never affects the formatted
    /// result on stdout.
    #[arg(long, short = 'v', action)]
    pub verbose: bool,
}

fn pattern_parser(raw: &str) -> Result<Pattern, String> {
    validation::validate_pattern(raw).map_err(|e| e.to_string())
}

fn length_parser(raw: &str) -> Result<usize, String> {
    validation::validate_length(raw).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_args_valid_input() {
        let args = Args::parse_from(["stfmt", "SST", "5", "2"]);

        assert_eq!(args.pattern.to_string(), "SST");
        assert_eq!(args.lengths, vec![5, 2]);
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_verbose_flags() {
        let args = Args::parse_from(["stfmt", "-v", "ST", "1"]);
        assert!(args.verbose);

        let args = Args::parse_from(["stfmt", "--verbose", "ST", "1"]);
        assert!(args.verbose);
    }

    #[test]
    fn test_args_invalid_pattern() {
        let err = Args::try_parse_from(["stfmt", "STp", "1", "5"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err
            .to_string()
            .contains("Invalid character input: Character input shall contain S's and T's only"));
    }

    #[test]
    fn test_args_invalid_lengths() {
        for raw in ["0", "-1", "gr", "1.5"] {
            let err = Args::try_parse_from(["stfmt", "ST", raw]).unwrap_err();

            assert_eq!(err.kind(), ErrorKind::ValueValidation, "{raw:?}");
            assert!(
                err.to_string()
                    .contains("Invalid number input: Number shall be a positive integer"),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn test_args_negative_length_reports_length_error() {
        // A hyphen-led value must reach the validator, not parse as a flag
        let err = Args::try_parse_from(["stfmt", "ST", "-1"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err
            .to_string()
            .contains("Invalid number input: Number shall be a positive integer"));
    }

    #[test]
    fn test_args_first_invalid_length_wins() {
        // "q" fails before "5" is ever considered
        let err = Args::try_parse_from(["stfmt", "ST", "q", "5"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_args_lengths_are_required() {
        let err = Args::try_parse_from(["stfmt", "ST"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
