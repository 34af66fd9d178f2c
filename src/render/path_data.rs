//! SVG path data built through a fluent API.
//!
//! ```
//! use pregwheel::render::PathData;
//!
//! let d = PathData::new().m(0.0, 0.0).l(10.0, 0.0).z();
//! assert_eq!(d.to_string(), "M 0 0 L 10 0 Z");
//! ```
//!
//! Numbers are written with `f64`'s shortest round-trip `Display`, commands
//! are separated by single spaces and arc flags are written as `0`/`1`.

use std::fmt;

use crate::types::Point2D;

/// A single path command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// `M x y`
    MoveTo { x: f64, y: f64 },
    /// `L x y`
    LineTo { x: f64, y: f64 },
    /// `A rx ry x_axis_rotation large_arc sweep x y`
    Arc {
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    /// `Z`
    Close,
}

impl PathCommand {
    /// Where the pen is after this command, if the command moves it.
    fn end_point(&self) -> Option<Point2D> {
        match *self {
            PathCommand::MoveTo { x, y }
            | PathCommand::LineTo { x, y }
            | PathCommand::Arc { x, y, .. } => Some(Point2D::new(x, y)),
            PathCommand::Close => None,
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathCommand::MoveTo { x, y } => write!(f, "M {} {}", x, y),
            PathCommand::LineTo { x, y } => write!(f, "L {} {}", x, y),
            PathCommand::Arc {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => write!(
                f,
                "A {} {} {} {} {} {} {}",
                rx, ry, x_axis_rotation, large_arc as u8, sweep as u8, x, y
            ),
            PathCommand::Close => write!(f, "Z"),
        }
    }
}

/// An ordered list of path commands, rendered as an SVG `d` attribute
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to `(x, y)`
    pub fn m(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::MoveTo { x, y });
        self
    }

    /// Line to `(x, y)`
    pub fn l(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::LineTo { x, y });
        self
    }

    /// Elliptical arc to `(x, y)`
    #[allow(clippy::too_many_arguments)]
    pub fn a(
        mut self,
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        self.commands.push(PathCommand::Arc {
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            x,
            y,
        });
        self
    }

    /// Close the current subpath
    pub fn z(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// First point of the path (the initial move).
    pub fn start_point(&self) -> Option<Point2D> {
        self.commands.first().and_then(PathCommand::end_point)
    }

    /// Last explicit pen position. A trailing `Z` is skipped.
    pub fn end_point(&self) -> Option<Point2D> {
        self.commands.iter().rev().find_map(PathCommand::end_point)
    }

    /// The first arc command, if any.
    pub fn arc(&self) -> Option<&PathCommand> {
        self.commands
            .iter()
            .find(|c| matches!(c, PathCommand::Arc { .. }))
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", cmd)?;
        }
        Ok(())
    }
}
