//! Stfmt Core Library
//!
//! This crate provides the core functionality for stfmt, a command-line tool
//! that expands a cyclic pattern of `S` and `T` symbols into grammatically
//! punctuated English sentences.
//!
//! # Key Features
//!
//! - **Pattern Model**: A validated, immutable pattern type over the fixed
//!   two-symbol alphabet, with cyclic indexing
//! - **Validation**: Pure accept-or-reject functions for pattern and length
//!   arguments
//! - **Formatting**: Expansion of a pattern to a requested length, joined
//!   into a single correctly punctuated sentence per length
//! - **Error Handling**: Fixed, descriptive error messages for the two
//!   validation failures
//!
//! # Examples
//!
//! Validating a pattern and formatting lines from it:
//!
//! ```
//! use stfmt_core::format::format_all;
//! use stfmt_core::validation::{validate_length, validate_pattern};
//!
//! let pattern = validate_pattern("SST")?;
//! let lengths = vec![validate_length("5")?, validate_length("2")?];
//!
//! let lines = format_all(&pattern, &lengths);
//! assert_eq!(lines[0], "Soft, Soft, Tough, Soft and Soft.");
//! assert_eq!(lines[1], "Soft and Soft.");
//! # Ok::<(), stfmt_core::error::Error>(())
//! ```

pub mod error;
pub mod format;
pub mod pattern;
pub mod validation;
