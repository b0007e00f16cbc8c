//! Candidate winning line generation for arbitrary side lengths.

/// A candidate winning line: `side` cell indices in board order.
pub type Line = Vec<usize>;

/// Generates every candidate winning line for a board of the given side.
///
/// Lines come out in a fixed order: the `side` rows top to bottom, the
/// `side` columns left to right, the main diagonal (stride `side + 1`
/// from index 0), then the anti-diagonal (stride `side - 1` from index
/// `side - 1`). The total is always `2 * side + 2` lines of `side`
/// indices each.
pub fn candidate_lines(side: usize) -> Vec<Line> {
    let mut lines = Vec::with_capacity(2 * side + 2);
    for row in 0..side {
        lines.push((row * side..(row + 1) * side).collect());
    }
    for col in 0..side {
        lines.push((0..side).map(|row| row * side + col).collect());
    }
    lines.push((0..side).map(|i| i * (side + 1)).collect());
    lines.push((0..side).map(|i| (i + 1) * (side - 1)).collect());
    lines
}
