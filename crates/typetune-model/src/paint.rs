//! Fill descriptors reported by the host for container nodes.
//!
//! The JSON shape follows the host's paint objects:
//!
//! ```json
//! { "type": "SOLID", "visible": true, "color": { "r": 0.1, "g": 0.1, "b": 0.1 } }
//! { "type": "GRADIENT_LINEAR", "gradientStops": [{ "color": { ... }, "position": 0 }] }
//! { "type": "IMAGE" }
//! ```
//!
//! Paint types without a variant here load as [`PaintKind::Unknown`].

use serde::{Deserialize, Serialize};

/// RGB color with channels in `[0, 1]`. Alpha is ignored when present.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Gray with all three channels set to `level`.
    pub const fn gray(level: f64) -> Self {
        Self::new(level, level, level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: Rgb,
    #[serde(default)]
    pub position: f64,
}

impl GradientStop {
    pub fn new(color: Rgb, position: f64) -> Self {
        Self { color, position }
    }
}

/// Paint kind and its kind-specific data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintKind {
    Solid {
        color: Rgb,
    },
    GradientLinear {
        #[serde(rename = "gradientStops", default)]
        stops: Vec<GradientStop>,
    },
    GradientRadial {
        #[serde(rename = "gradientStops", default)]
        stops: Vec<GradientStop>,
    },
    GradientAngular {
        #[serde(rename = "gradientStops", default)]
        stops: Vec<GradientStop>,
    },
    GradientDiamond {
        #[serde(rename = "gradientStops", default)]
        stops: Vec<GradientStop>,
    },
    Image,
    Video,
    #[serde(other)]
    Unknown,
}

impl PaintKind {
    /// Color stops for the four gradient kinds.
    pub fn gradient_stops(&self) -> Option<&[GradientStop]> {
        match self {
            PaintKind::GradientLinear { stops }
            | PaintKind::GradientRadial { stops }
            | PaintKind::GradientAngular { stops }
            | PaintKind::GradientDiamond { stops } => Some(stops),
            PaintKind::Solid { .. } | PaintKind::Image | PaintKind::Video | PaintKind::Unknown => {
                None
            }
        }
    }
}

/// One entry of a node's fill list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    #[serde(flatten)]
    pub kind: PaintKind,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl Paint {
    pub fn solid(color: Rgb) -> Self {
        Self {
            kind: PaintKind::Solid { color },
            visible: true,
        }
    }

    pub fn linear_gradient(stops: Vec<GradientStop>) -> Self {
        Self {
            kind: PaintKind::GradientLinear { stops },
            visible: true,
        }
    }

    pub fn image() -> Self {
        Self {
            kind: PaintKind::Image,
            visible: true,
        }
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}
