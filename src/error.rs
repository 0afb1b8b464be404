//! Error reporting shared by the tokenizer and the CLI wrapper.
//!
//! Diagnostics are kept lightweight on purpose. A malformed token is
//! reported by quoting the notation and pointing at the offending token
//! with a caret.

use snafu::Snafu;
use std::path::PathBuf;

pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug, Snafu)]
pub enum GameError {
  /// A token is neither a non-negative pin count nor the miss placeholder.
  #[snafu(display("{notation_line}\n{marker} malformed token \"{token}\""))]
  MalformedToken {
    notation_line: String,
    marker: String,
    token: String,
  },

  /// The game file could not be read.
  #[snafu(display("cannot read game file {}: {source}", path.display()))]
  ReadGame {
    path: PathBuf,
    source: std::io::Error,
  },
}

impl GameError {
  /// Construct a token error anchored at a specific byte offset in the notation.
  pub fn malformed_token(notation: &str, loc: usize, token: &str) -> Self {
    let notation_line = format!("'{notation}'");
    let safe_loc = loc.min(notation.len());
    let char_offset = notation[..safe_loc].chars().count() + 1; // account for opening quote
    let marker = format!("{}^", " ".repeat(char_offset));
    Self::MalformedToken {
      notation_line,
      marker,
      token: token.to_string(),
    }
  }
}
