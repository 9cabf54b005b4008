//! Win detection logic.

use crate::types::{Board, Coord};
use tracing::instrument;

/// Finds the first combo whose cells all carry the same non-empty label.
///
/// Scans in the order the combos were enumerated. A single move can never
/// complete two combos in normal play without one being scanned first, but
/// a bulk-loaded board with several complete lines reports only the
/// earliest in enumeration order.
#[instrument(skip_all)]
pub fn winning_line<'a>(board: &Board, combos: &'a [Vec<Coord>]) -> Option<&'a [Coord]> {
    combos
        .iter()
        .map(Vec::as_slice)
        .find(|combo| line_complete(board, combo))
}

fn line_complete(board: &Board, combo: &[Coord]) -> bool {
    let mut labels = combo
        .iter()
        .map(|&(row, column)| board.label_at(row, column));
    match labels.next() {
        Some(Some(first)) => labels.all(|label| label == Some(first)),
        _ => false,
    }
}
