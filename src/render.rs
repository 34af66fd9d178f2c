//! SVG rendering for wheel layouts
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes and settings
//! - `geometry`: Polar projection, open arcs and wedges
//! - `path_data`: The `d` attribute builder
//! - `svg`: SVG document generation

pub mod defaults;
pub mod geometry;
pub mod path_data;
pub mod svg;

pub use geometry::{ArcSpec, build_open_arc, build_wedge, project};
pub use path_data::{PathCommand, PathData};

use crate::layout::WheelLayout;
use crate::types::Color;

/// Colors used when drawing with inline attributes
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub stroke: Color,
    pub today: Color,
    pub lmp: Color,
    pub year_start: Color,
    pub year_end: Color,
    pub ga_tick: Color,
    /// First, second and third trimester fills
    pub trimesters: [Color; 3],
    pub center_fill: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            stroke: Color::Named("black"),
            today: Color::Rgb(37, 99, 235),
            lmp: Color::Rgb(192, 38, 211),
            year_start: Color::Rgb(220, 38, 38),
            year_end: Color::Rgb(5, 150, 105),
            ga_tick: Color::Rgb(75, 85, 99),
            trimesters: [
                Color::Rgba(124, 58, 237, 0.4),
                Color::Rgba(244, 114, 182, 0.5),
                Color::Rgba(34, 211, 238, 0.4),
            ],
            center_fill: Color::Named("white"),
        }
    }
}

/// Rendering options
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Emit class names only and leave colors to an external stylesheet
    /// instead of writing inline `stroke`/`fill` attributes
    pub css_classes: bool,
    pub palette: Palette,
}

/// Render a layout to an SVG document with default options
pub fn render(layout: &WheelLayout) -> String {
    render_with_options(layout, &RenderOptions::default())
}

/// Render a layout to an SVG document
pub fn render_with_options(layout: &WheelLayout, options: &RenderOptions) -> String {
    svg::generate_svg(layout, options)
}
