//! Notation parsing: turns the raw game text into a flat throw sequence.
//!
//! The tokenizer knows nothing about scoring. Frames in the notation only
//! bound tokenization, so they are never materialized: the `|` delimiter
//! behaves exactly like the whitespace between throw tokens, and empty or
//! whitespace-only frame segments contribute no throws.

use crate::error::{GameError, GameResult};

/// Marker for an explicit miss. Normalized to zero pins.
const MISS: &str = "_";

/// Tokenize the notation into per-throw pin counts.
///
/// Each token is a decimal pin count or the miss marker. Leading and
/// trailing delimiters and stray whitespace are tolerated. The returned
/// sequence always has odd length: a trailing 0 is appended when the
/// flattened throws come out even, which keeps the scorer's lookahead in
/// bounds for a game without a third final throw.
pub fn tokenize(notation: &str) -> GameResult<Vec<u32>> {
  let mut throws = Vec::new();
  let bytes = notation.as_bytes();
  let mut i = 0;

  while i < bytes.len() {
    if bytes[i].is_ascii_whitespace() || bytes[i] == b'|' {
      i += 1;
      continue;
    }

    let start = i;
    while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'|' {
      i += 1;
    }
    let token = &notation[start..i];

    if token == MISS {
      throws.push(0);
      continue;
    }

    if token.bytes().all(|b| b.is_ascii_digit()) {
      let value = token
        .parse::<u32>()
        .map_err(|_| GameError::malformed_token(notation, start, token))?;
      throws.push(value);
      continue;
    }

    return Err(GameError::malformed_token(notation, start, token));
  }

  if throws.len() % 2 == 0 {
    throws.push(0);
  }

  Ok(throws)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn flattens_frames_in_order() {
    let throws =
      tokenize("| 1 4 | 4 5 | 6 4 | 5 5 | 10 _ | 0 1 | 7 3 | 6 4 | 10 _ | 2 8 6 |").unwrap();
    assert_eq!(
      throws,
      vec![1, 4, 4, 5, 6, 4, 5, 5, 10, 0, 0, 1, 7, 3, 6, 4, 10, 0, 2, 8, 6]
    );
  }

  #[test]
  fn miss_marker_normalizes_to_zero() {
    assert_eq!(tokenize("| 10 _ | _ _ |").unwrap(), vec![10, 0, 0, 0, 0]);
  }

  #[test]
  fn pads_even_sequences_with_a_trailing_zero() {
    assert_eq!(tokenize("| 10 8 |").unwrap(), vec![10, 8, 0]);
  }

  #[test]
  fn odd_sequences_are_left_alone() {
    assert_eq!(tokenize("| 2 8 6 |").unwrap(), vec![2, 8, 6]);
  }

  #[test]
  fn output_length_is_always_odd() {
    let inputs = [
      "",
      "| 3 |",
      "| 1 4 |",
      "5 5 | 5 5",
      "| 10 _ | 10 _ | 10 10 10 |",
    ];
    for input in inputs {
      assert_eq!(tokenize(input).unwrap().len() % 2, 1, "input: {input:?}");
    }
  }

  #[test]
  fn tolerates_doubled_delimiters_and_blank_segments() {
    assert_eq!(tokenize("|| 1 4 |   | 4 5 |").unwrap(), vec![1, 4, 4, 5, 0]);
  }

  #[test]
  fn delimiters_at_the_edges_are_optional() {
    assert_eq!(tokenize("5 5 | 5 5").unwrap(), vec![5, 5, 5, 5, 0]);
  }

  #[test]
  fn empty_notation_tokenizes_to_a_single_padded_zero() {
    assert_eq!(tokenize("").unwrap(), vec![0]);
  }

  #[test]
  fn rejects_a_non_numeric_token() {
    let err = tokenize("| 1 4 | x 5 |").unwrap_err();
    assert!(err.to_string().contains("malformed token \"x\""));
  }

  #[test]
  fn rejects_a_miss_marker_glued_to_digits() {
    assert!(tokenize("| 1_ 4 |").is_err());
    assert!(tokenize("| _5 4 |").is_err());
  }

  #[test]
  fn rejects_negative_numbers() {
    assert!(tokenize("| -1 4 |").is_err());
  }
}
