use std::io::Write;

use serde::Serialize;

use super::{RenderConfig, RenderSurface};
use crate::error::GraphResult;
use crate::graph::KnightGraph;

#[derive(Serialize)]
struct RenderDocument<'a> {
    config: &'a RenderConfig,
    graph: &'a KnightGraph,
}

/// Writes `{ "config": …, "graph": … }` for a front end to pick up.
///
/// Each call to [`RenderSurface::render`] writes one document followed by a newline.
pub struct JsonSurface<W: Write> {
    out: W,
    pretty: bool,
}

impl<W: Write> JsonSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out, pretty: false }
    }

    pub fn pretty(mut self, enabled: bool) -> Self {
        self.pretty = enabled;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSurface for JsonSurface<W> {
    #[tracing::instrument(level = "debug", skip_all, fields(layout = %config.layout))]
    fn render(&mut self, graph: &KnightGraph, config: &RenderConfig) -> GraphResult<()> {
        config.validate()?;
        let doc = RenderDocument { config, graph };
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.out, &doc)?;
        } else {
            serde_json::to_writer(&mut self.out, &doc)?;
        }
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        tracing::debug!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "render document written"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::LayoutKind;

    #[test]
    fn writes_one_line_per_render() {
        let g = KnightGraph::build();
        let mut surface = JsonSurface::new(Vec::new());
        surface.render(&g, &RenderConfig::default()).unwrap();
        let cfg = RenderConfig {
            layout: LayoutKind::Circle,
            ..RenderConfig::default()
        };
        surface.render(&g, &cfg).unwrap();

        let text = String::from_utf8(surface.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("\"layout\":\"circle\""));
    }

    #[test]
    fn invalid_config_writes_nothing() {
        let g = KnightGraph::build();
        let mut surface = JsonSurface::new(Vec::new());
        let cfg = RenderConfig {
            width: -1.0,
            ..RenderConfig::default()
        };
        assert!(surface.render(&g, &cfg).is_err());
        assert!(surface.into_inner().is_empty());
    }
}
