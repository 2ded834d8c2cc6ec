use crate::core::square::{Square, BOARD_SIZE};

/// All 64 squares, files outer and ranks inner: a1, a2, …, a8, b1, …, h8.
///
/// Layouts that seed positions from node order rely on this order staying fixed.
#[tracing::instrument(level = "debug")]
pub fn build_board() -> Vec<Square> {
    let mut squares = Vec::with_capacity((BOARD_SIZE * BOARD_SIZE) as usize);
    for file in 0..BOARD_SIZE {
        for rank in 0..BOARD_SIZE {
            squares.push(Square::on_board(file, rank));
        }
    }
    tracing::debug!(squares = squares.len(), "board built");
    squares
}
