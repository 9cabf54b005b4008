//! Winning-combo precomputation.

use crate::types::Coord;

/// Enumerates every winning combo for a size × size board.
///
/// Order is fixed: rows top to bottom, columns left to right, the main
/// diagonal, then the anti-diagonal. Win scanning reports the first match
/// in this order. The total is always `2 * size + 2`.
pub fn winning_combos(size: usize) -> Vec<Vec<Coord>> {
    let mut combos = Vec::with_capacity(2 * size + 2);
    for row in 0..size {
        combos.push((0..size).map(|column| (row, column)).collect());
    }
    for column in 0..size {
        combos.push((0..size).map(|row| (row, column)).collect());
    }
    combos.push((0..size).map(|i| (i, i)).collect());
    combos.push((0..size).map(|i| (i, size - i - 1)).collect());
    combos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combo_count_is_two_n_plus_two() {
        for size in 1..=6 {
            assert_eq!(winning_combos(size).len(), 2 * size + 2);
        }
    }

    #[test]
    fn test_every_combo_spans_the_board() {
        for size in [3, 4, 5] {
            for combo in winning_combos(size) {
                assert_eq!(combo.len(), size);
            }
        }
    }

    #[test]
    fn test_enumeration_order_for_3x3() {
        let combos = winning_combos(3);
        assert_eq!(combos[0], vec![(0, 0), (0, 1), (0, 2)]);
        assert_eq!(combos[3], vec![(0, 0), (1, 0), (2, 0)]);
        assert_eq!(combos[6], vec![(0, 0), (1, 1), (2, 2)]);
        assert_eq!(combos[7], vec![(0, 2), (1, 1), (2, 0)]);
    }

    #[test]
    fn test_combos_are_distinct() {
        let combos = winning_combos(3);
        for (i, a) in combos.iter().enumerate() {
            for b in combos.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
