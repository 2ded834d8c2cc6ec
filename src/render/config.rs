use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Which layout the external renderer should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    /// Force-directed simulation (link, charge, center and collision forces).
    #[default]
    Force,
    /// Nodes pinned to their board position.
    Grid,
    Circle,
    Concentric,
    BreadthFirst,
    /// Force-directed simulation in three dimensions.
    Force3d,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 6] = [
        LayoutKind::Force,
        LayoutKind::Grid,
        LayoutKind::Circle,
        LayoutKind::Concentric,
        LayoutKind::BreadthFirst,
        LayoutKind::Force3d,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LayoutKind::Force => "force",
            LayoutKind::Grid => "grid",
            LayoutKind::Circle => "circle",
            LayoutKind::Concentric => "concentric",
            LayoutKind::BreadthFirst => "breadth-first",
            LayoutKind::Force3d => "force3d",
        }
    }

    /// Whether the layout is driven by a physics simulation.
    pub fn is_simulated(self) -> bool {
        matches!(self, LayoutKind::Force | LayoutKind::Force3d)
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayoutKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = LayoutKind::ALL.iter().map(|k| k.name()).collect();
                GraphError::config(format!(
                    "unknown layout {s:?} (expected one of: {})",
                    names.join(", ")
                ))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeStyle {
    #[default]
    Straight,
    Bezier,
    Haystack,
}

/// Presentation settings handed to a [`super::RenderSurface`] alongside the graph.
///
/// Missing fields in a config file take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    pub layout: LayoutKind,
    pub edge_style: EdgeStyle,
    pub width: f64,
    pub height: f64,
    /// Half the side of a node's square.
    pub node_size: f64,
    pub link_distance: f64,
    /// Many-body force; negative repels.
    pub charge_strength: f64,
    /// Collision radius as a multiple of `node_size`.
    pub collision_padding: f64,
    pub light_color: String,
    pub dark_color: String,
    pub edge_color: String,
    pub edge_width: f64,
    /// Stroke for a hovered node and its incident edges.
    pub highlight_color: String,
    pub highlight_width: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout: LayoutKind::Force,
            edge_style: EdgeStyle::Straight,
            width: 600.0,
            height: 600.0,
            node_size: 15.0,
            link_distance: 40.0,
            charge_strength: -100.0,
            collision_padding: 1.2,
            light_color: "#F0D9B5".to_owned(),
            dark_color: "#B58863".to_owned(),
            edge_color: "#15465C".to_owned(),
            edge_width: 0.5,
            highlight_color: "#4a90e2".to_owned(),
            highlight_width: 1.5,
        }
    }
}

impl RenderConfig {
    pub fn from_json_str(s: &str) -> GraphResult<Self> {
        let cfg: RenderConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> GraphResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let cfg = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), layout = %cfg.layout, "render config loaded");
        Ok(cfg)
    }

    pub fn validate(&self) -> GraphResult<()> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("nodeSize", self.node_size),
            ("linkDistance", self.link_distance),
            ("collisionPadding", self.collision_padding),
            ("edgeWidth", self.edge_width),
            ("highlightWidth", self.highlight_width),
        ];
        for (name, v) in positive {
            if !(v.is_finite() && v > 0.0) {
                return Err(GraphError::config(format!("{name} must be positive, got {v}")));
            }
        }
        if !self.charge_strength.is_finite() {
            return Err(GraphError::config("chargeStrength must be finite"));
        }
        if 2.0 * self.node_size > self.width.min(self.height) {
            return Err(GraphError::config(format!(
                "nodeSize {} does not fit a {}x{} canvas",
                self.node_size, self.width, self.height
            )));
        }

        let colors = [
            ("lightColor", &self.light_color),
            ("darkColor", &self.dark_color),
            ("edgeColor", &self.edge_color),
            ("highlightColor", &self.highlight_color),
        ];
        for (name, c) in colors {
            if !is_hex_color(c) {
                return Err(GraphError::config(format!(
                    "{name} must be #rgb or #rrggbb, got {c:?}"
                )));
            }
        }
        Ok(())
    }

    /// Fill color for a node.
    pub fn node_color(&self, is_dark: bool) -> &str {
        if is_dark {
            &self.dark_color
        } else {
            &self.light_color
        }
    }
}

fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => {
            (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}
