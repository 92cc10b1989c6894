//! Expands a validated pattern into punctuated output lines.

use itertools::Itertools;

use crate::pattern::Pattern;

/// Formats a single line of `length` words drawn cyclically from `pattern`.
///
/// Word `i` (0-based) is the display word of the symbol at `i mod len`.
/// A single word is followed by a period; for more words, all but the last
/// are joined with `", "` and the last is appended with `" and "`. There is
/// never a comma before the `and`.
///
/// The line is built in memory, so `length` is bounded by available memory
/// rather than by the function (each word contributes at most 7 bytes).
///
/// # Examples
///
/// ```
/// use stfmt_core::format::format_line;
/// use stfmt_core::validation::validate_pattern;
///
/// let pattern = validate_pattern("SST")?;
/// assert_eq!(format_line(&pattern, 5), "Soft, Soft, Tough, Soft and Soft.");
/// assert_eq!(format_line(&pattern, 1), "Soft.");
/// # Ok::<(), stfmt_core::error::Error>(())
/// ```
pub fn format_line(pattern: &Pattern, length: usize) -> String {
    let words: Vec<&str> = (0..length).map(|i| pattern.symbol_at(i).word()).collect();

    match words.as_slice() {
        // Lengths are validated to be >= 1; zero words render as nothing
        [] => String::new(),
        [only] => format!("{only}."),
        [init @ .., last] => format!("{} and {last}.", init.iter().join(", ")),
    }
}

/// Formats one line per requested length, preserving input order.
///
/// Each line is computed independently from the same pattern; no state is
/// shared between lines.
pub fn format_all(pattern: &Pattern, lengths: &[usize]) -> Vec<String> {
    lengths
        .iter()
        .map(|&length| format_line(pattern, length))
        .collect()
}
