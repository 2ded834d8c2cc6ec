use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::coord::{Coord, KNIGHT_DELTAS};
use crate::core::square::{algebraic, Square, BOARD_SIZE};
use crate::error::{InvalidSquareError, InvalidSquareReason};

/// An undirected knight-move edge, stored with `source < target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub source: String,
    pub target: String,
}

impl Move {
    pub fn touches(&self, id: &str) -> bool {
        self.source == id || self.target == id
    }

    /// The endpoint opposite `id`, if `id` is an endpoint.
    pub fn other(&self, id: &str) -> Option<&str> {
        if self.source == id {
            Some(self.target.as_str())
        } else if self.target == id {
            Some(self.source.as_str())
        } else {
            None
        }
    }
}

/// On-board squares one knight jump away from `from`, in `KNIGHT_DELTAS` order.
pub fn knight_targets(from: Coord) -> impl Iterator<Item = Coord> {
    KNIGHT_DELTAS
        .into_iter()
        .map(move |d| from + d)
        .filter(|c| c.on_board(BOARD_SIZE))
}

/// Knight-move edges between the given squares.
///
/// Every square is validated before any edge is produced, so a malformed or
/// repeated record yields an error and never a partial edge list. Each undirected edge is emitted
/// once, from its lexicographically smaller endpoint.
///
/// Targets are named from their coordinates; they need not be present in
/// `squares`. With the output of [`crate::board::build_board`] this yields the
/// 168 edges of the full board.
#[tracing::instrument(level = "debug", skip_all, fields(squares = squares.len()))]
pub fn build_moves(squares: &[Square]) -> Result<Vec<Move>, InvalidSquareError> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for sq in squares {
        sq.validate()?;
        if !seen.insert(sq.id.as_str()) {
            return Err(InvalidSquareError {
                file: sq.file,
                rank: sq.rank,
                id: sq.id.clone(),
                reason: InvalidSquareReason::DuplicateId,
            });
        }
    }

    let mut out = Vec::new();
    for sq in squares {
        for to in knight_targets(sq.coord()) {
            let target = algebraic(to.x, to.y);
            if sq.id < target {
                out.push(Move {
                    source: sq.id.clone(),
                    target,
                });
            }
        }
    }

    tracing::debug!(edges = out.len(), "knight moves built");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::build_board;

    #[test]
    fn corner_has_two_targets() {
        let targets: Vec<Coord> = knight_targets(Coord::new(0, 0)).collect();
        assert_eq!(targets, vec![Coord::new(1, 2), Coord::new(2, 1)]);
    }

    #[test]
    fn full_board_has_168_edges() {
        let moves = build_moves(&build_board()).unwrap();
        assert_eq!(moves.len(), 168);
        assert!(moves.iter().all(|m| m.source < m.target));
    }

    #[test]
    fn out_of_range_file_is_rejected() {
        let mut board = build_board();
        board.push(Square {
            file: 8,
            rank: 0,
            id: "i1".to_owned(),
            is_dark: false,
        });
        let err = build_moves(&board).unwrap_err();
        assert_eq!(err.file, 8);
        assert_eq!(err.reason, InvalidSquareReason::FileOutOfRange);
    }

    #[test]
    fn single_square_emits_only_upward_edges() {
        // b1 also reaches a3, but "a3" < "b1" so that edge belongs to a3.
        let b1 = Square::parse("b1").unwrap();
        let moves = build_moves(std::slice::from_ref(&b1)).unwrap();
        let targets: Vec<&str> = moves.iter().map(|m| m.target.as_str()).collect();
        assert_eq!(targets, vec!["c3", "d2"]);
    }

    #[test]
    fn other_endpoint() {
        let m = Move {
            source: "a1".to_owned(),
            target: "b3".to_owned(),
        };
        assert_eq!(m.other("a1"), Some("b3"));
        assert_eq!(m.other("b3"), Some("a1"));
        assert_eq!(m.other("c2"), None);
    }
}
