//! The seam between the graph and whatever draws it.
//!
//! Layout, physics, camera and input handling all live behind [`RenderSurface`];
//! this crate only supplies the graph and a [`RenderConfig`].

pub mod config;
pub mod json;

pub use config::{EdgeStyle, LayoutKind, RenderConfig};
pub use json::JsonSurface;

use crate::error::GraphResult;
use crate::graph::KnightGraph;

/// Something that accepts a graph plus presentation settings and lays it out.
pub trait RenderSurface {
    fn render(&mut self, graph: &KnightGraph, config: &RenderConfig) -> GraphResult<()>;
}
