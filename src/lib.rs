//! Crate root: wires together the scoring pipeline.
//!
//! The stages are intentionally small and composable so they can be evolved
//! independently:
//! - `tokenizer` flattens the textual notation into a throw sequence.
//! - `scorer` walks the sequence and applies the strike and spare bonuses.
//! - `error` centralises reporting shared by the stages and the CLI wrapper.

use std::fs;
use std::path::Path;

use log::debug;

pub mod error;
pub mod scorer;
pub mod tokenizer;

pub use error::{GameError, GameResult};

/// Score a game straight from its textual notation.
pub fn score_game(notation: &str) -> GameResult<u32> {
  let throws = tokenizer::tokenize(notation)?;
  debug!("tokenized {} throws", throws.len());
  let total = scorer::score(&throws);
  debug!("total score {total}");
  Ok(total)
}

/// Read a game file, strip trailing whitespace, and score its contents.
pub fn score_game_file<P: AsRef<Path>>(path: P) -> GameResult<u32> {
  let path = path.as_ref();
  let notation = fs::read_to_string(path).map_err(|source| GameError::ReadGame {
    path: path.to_path_buf(),
    source,
  })?;
  score_game(notation.trim_end())
}
