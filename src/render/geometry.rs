//! Geometry functions: polar projection and arc path creation
//!
//! Angles follow the wheel convention: 0° points up and positive angles
//! sweep clockwise. Drawing space is SVG's, with Y growing downward.

use crate::types::{Angle, Point2D};

use super::path_data::PathData;

/// Project a polar coordinate around `center` into drawing space.
///
/// The angle is reduced into `[0, 360)` before conversion, so angles many
/// turns away from zero land on the same point as their reduced form.
pub fn project(center: Point2D, radius: f64, angle: Angle) -> Point2D {
    let rad = angle.to_screen_radians();
    Point2D::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

/// Forward sweep from `start` to `end` reduced into `[0, 360)`.
pub fn forward_delta(start: Angle, end: Angle) -> f64 {
    let delta = (end - start).raw();
    (delta % 360.0 + 360.0) % 360.0
}

/// Large-arc flag for open arcs: set when the forward sweep exceeds half a turn.
pub fn open_arc_is_large(start: Angle, end: Angle) -> bool {
    forward_delta(start, end) > Angle::HALF_TURN.raw()
}

/// Large-arc flag for wedges. Uses the raw `end - start` difference with no
/// reduction, so a negative span always yields a small arc.
pub fn wedge_is_large(start: Angle, end: Angle) -> bool {
    end - start > Angle::HALF_TURN
}

/// Create an open circular arc from `start` to `end`.
///
/// `clockwise` selects the SVG sweep flag. Equal angles produce a zero-length
/// arc whose endpoints coincide; renderers draw nothing for it.
pub fn build_open_arc(
    center: Point2D,
    radius: f64,
    start: Angle,
    end: Angle,
    clockwise: bool,
) -> PathData {
    let from = project(center, radius, start);
    let to = project(center, radius, end);

    PathData::new().m(from.x, from.y).a(
        radius,
        radius,
        0.0,
        open_arc_is_large(start, end),
        clockwise,
        to.x,
        to.y,
    )
}

/// Create a closed pie wedge between `start` and `end`.
///
/// The outline runs center → point at `end` → arc to point at `start` → close,
/// i.e. the arc is traversed from the end angle back to the start angle. This
/// is the reverse of [`build_open_arc`] and the two must not be merged.
pub fn build_wedge(
    center: Point2D,
    radius: f64,
    start: Angle,
    end: Angle,
    clockwise: bool,
) -> PathData {
    let from = project(center, radius, end);
    let to = project(center, radius, start);

    PathData::new()
        .m(center.x, center.y)
        .l(from.x, from.y)
        .a(
            radius,
            radius,
            0.0,
            wedge_is_large(start, end),
            clockwise,
            to.x,
            to.y,
        )
        .z()
}

/// A circular arc description, built fresh for each draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpec {
    pub center: Point2D,
    pub radius: f64,
    pub start: Angle,
    pub end: Angle,
    pub clockwise: bool,
}

impl ArcSpec {
    pub fn new(center: Point2D, radius: f64, start: Angle, end: Angle, clockwise: bool) -> Self {
        Self {
            center,
            radius,
            start,
            end,
            clockwise,
        }
    }

    /// Angular extent in degrees (may be negative or exceed 360).
    pub fn span(&self) -> f64 {
        (self.end - self.start).raw()
    }

    /// See [`build_open_arc`].
    pub fn open_path(&self) -> PathData {
        build_open_arc(self.center, self.radius, self.start, self.end, self.clockwise)
    }

    /// See [`build_wedge`].
    pub fn wedge_path(&self) -> PathData {
        build_wedge(self.center, self.radius, self.start, self.end, self.clockwise)
    }
}
