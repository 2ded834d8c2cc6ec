//! The knight's move graph as handed to a renderer.
//!
//! Serialized shape:
//!
//! ```json
//! { "nodes": [{ "id": "a1", "isDark": false, "file": 0, "rank": 0 }, ...],
//!   "edges": [{ "source": "a1", "target": "b3" }, ...] }
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::build_board;
use crate::core::square::Square;
use crate::error::{GraphResult, InvalidSquareError};
use crate::moves::{build_moves, Move};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub is_dark: bool,
    pub file: i32,
    pub rank: i32,
}

impl From<&Square> for Node {
    fn from(sq: &Square) -> Self {
        Node {
            id: sq.id.clone(),
            is_dark: sq.is_dark,
            file: sq.file,
            rank: sq.rank,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnightGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Move>,
}

impl KnightGraph {
    /// The full 64-node, 168-edge graph.
    pub fn build() -> KnightGraph {
        let squares = build_board();
        let edges = match build_moves(&squares) {
            Ok(edges) => edges,
            Err(e) => unreachable!("board produced an invalid square: {e}"),
        };
        KnightGraph {
            nodes: squares.iter().map(Node::from).collect(),
            edges,
        }
    }

    /// The graph over caller-supplied squares.
    ///
    /// Edges may point at squares missing from `squares`; see [`build_moves`].
    pub fn from_squares(squares: &[Square]) -> Result<KnightGraph, InvalidSquareError> {
        let edges = build_moves(squares)?;
        Ok(KnightGraph {
            nodes: squares.iter().map(Node::from).collect(),
            edges,
        })
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Edges with `id` as an endpoint, in edge order.
    pub fn incident_edges<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Move> + 'a {
        self.edges.iter().filter(move |m| m.touches(id))
    }

    /// Knight neighbors of `id`, sorted.
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        let mut out: Vec<&str> = self.edges.iter().filter_map(|m| m.other(id)).collect();
        out.sort_unstable();
        out
    }

    pub fn degree(&self, id: &str) -> usize {
        self.incident_edges(id).count()
    }

    /// Whether an edge joins `a` and `b`, in either direction.
    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        self.edges
            .iter()
            .any(|m| (m.source == a && m.target == b) || (m.source == b && m.target == a))
    }

    /// Edges whose endpoints are not both nodes of this graph.
    pub fn dangling_edges(&self) -> Vec<&Move> {
        let ids: FxHashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        self.edges
            .iter()
            .filter(|m| !ids.contains(m.source.as_str()) || !ids.contains(m.target.as_str()))
            .collect()
    }

    pub fn to_json(&self) -> GraphResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> GraphResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_graph_has_no_dangling_edges() {
        let g = KnightGraph::build();
        assert_eq!(g.nodes.len(), 64);
        assert_eq!(g.edges.len(), 168);
        assert!(g.dangling_edges().is_empty());

        let e4 = g.node("e4").unwrap();
        assert_eq!((e4.file, e4.rank), (4, 3));
        assert!(e4.is_dark);
        assert!(g.node("e9").is_none());
    }

    #[test]
    fn partial_board_keeps_off_list_targets() {
        let squares = vec![Square::parse("a1").unwrap()];
        let g = KnightGraph::from_squares(&squares).unwrap();
        assert_eq!(g.edges.len(), 2);
        assert_eq!(g.dangling_edges().len(), 2);
    }

    #[test]
    fn json_uses_camel_case_is_dark() {
        let g = KnightGraph::build();
        let json = g.to_json().unwrap();
        assert!(json.contains("\"isDark\""));
        assert!(!json.contains("is_dark"));
    }
}
