//! Stfmt CLI Library
//!
//! This crate provides the command-line interface for stfmt. It handles
//! argument parsing (with validation hooked into `clap`'s value parsers),
//! logging setup and output emission; all formatting logic lives in
//! `stfmt-core`.
//!
//! # Examples
//!
//! ```bash
//! # One line per length, in input order
//! stfmt SST 5 2
//!
//! # Debug logging on stderr, formatted output unchanged on stdout
//! stfmt --verbose ST 3
//! ```

pub mod cli_args;
