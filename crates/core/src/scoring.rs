//! Scoring module - points awarded for merges
//!
//! A merge of two tiles of exponent `value0` is worth `2^value0` points: the
//! displayed value of one of the tiles that got absorbed. A turn's delta is
//! the sum over all of its merges.

use crate::types::MergeEvent;

/// Points for a single merge of two `value0` tiles.
pub fn merge_points(value0: u8) -> u32 {
    1u32 << value0
}

/// Score delta of a turn, `None` when nothing merged.
pub fn score_difference(merges: &[MergeEvent]) -> Option<u32> {
    if merges.is_empty() {
        return None;
    }
    Some(
        merges
            .iter()
            .fold(0u32, |total, merge| total.saturating_add(merge_points(merge.value0))),
    )
}
