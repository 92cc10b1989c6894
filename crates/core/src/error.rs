use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The two validation failures the tool can report.
///
/// Both carry a fixed message naming the rule that was broken. Formatting
/// itself has no failure modes once inputs pass validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid character input: Character input shall contain S's and T's only")]
    InvalidPattern,

    #[error("Invalid number input: Number shall be a positive integer")]
    InvalidLength,
}
