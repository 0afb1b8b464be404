//! Scoring: walks the flat throw sequence two throws at a time.
//!
//! Frame boundaries are re-derived from the sequence itself; the notation's
//! frames never reach this module. Only the final frame is exempt from the
//! forward-looking strike bonus.

/// Pins on the deck, so also a strike's first throw and a spare's pair sum.
const ALL_PINS: u32 = 10;

/// Compute the total score for a throw sequence.
///
/// The sequence is trusted to satisfy the tokenizer's odd-length invariant
/// and to carry enough real throws for a strike or spare finish; no range
/// or shape validation happens here, and a sequence that violates the
/// invariant can panic on the lookahead indexing.
pub fn score(throws: &[u32]) -> u32 {
  let mut total = 0;
  // 1-based index of the final frame. Distinguishes only the frame whose
  // strikes earn no forward-looking bonus.
  let last_frame = throws.len().saturating_sub(1) / 2;

  let mut i = 0;
  while i + 2 < throws.len() {
    let frame = (i + 2) / 2;
    let mut pair = throws[i] + throws[i + 1];

    if throws[i] == ALL_PINS {
      // A second strike in the pair earns the next throw. Outside the
      // final frame the next-two-throws bonus applies independently, so a
      // double before the final frame counts throws[i + 2] twice.
      if throws[i + 1] == ALL_PINS {
        pair += throws[i + 2];
      }
      if frame != last_frame {
        pair += throws[i + 2] + throws[i + 3];
      }
      total += pair;
      i += 2;
      continue;
    }

    // Spare: the next throw rides along.
    if pair == ALL_PINS {
      pair += throws[i + 2];
      total += pair;
      i += 2;
      continue;
    }

    total += pair;
    i += 2;
  }

  total
}
