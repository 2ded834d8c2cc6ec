//! The knight's move graph of a standard chessboard: 64 squares, joined wherever a
//! knight can jump between them, as plain data for a graph renderer.

pub mod board;
pub mod core;
pub mod error;
pub mod graph;
pub mod moves;
pub mod render;

pub use board::build_board;
pub use crate::core::square::Square;
pub use error::{GraphError, GraphResult, InvalidSquareError};
pub use graph::KnightGraph;
pub use moves::{build_moves, Move};
