//! Default sizes and settings (SVG pixels unless noted)

/// Canvas width
pub const WIDTH: f64 = 1024.0;
/// Canvas height
pub const HEIGHT: f64 = 896.0;

/// Month labels sit this far inside the largest circle that fits the canvas
pub const LABEL_INSET: f64 = 40.0;
/// Outer ring radius relative to the label radius
pub const OUTER_ABOVE_LABEL: f64 = 20.0;
/// Middle ring radius relative to the outer ring
pub const MIDDLE_BELOW_OUTER: f64 = 40.0;
/// Inner ring radius relative to the outer ring
pub const INNER_BELOW_OUTER: f64 = 108.0;

pub const TICK_LONG: f64 = 32.0;
pub const TICK_SHORT: f64 = 16.0;
/// Gap between a tick's end and its label
pub const LABEL_GAP: f64 = 6.0;

/// Number of days laid around the wheel
pub const WHEEL_DAYS: i64 = 365;
/// Angular width of one day, in degrees
pub const DEGREES_PER_DAY: f64 = 360.0 / 365.0;
/// Days of the array that precede the reference date
pub const LEAD_DAYS: i64 = 70;

/// Center disc radius as a fraction of the inner ring
pub const CENTER_DISC_RATIO: f64 = 1.0 / 3.0;
pub const DAY_LABEL_FONT_SIZE: f64 = 9.0;
pub const FONT_FAMILY: &str = "system-ui, sans-serif";
pub const STROKE_WIDTH: f64 = 1.0;
pub const HIGHLIGHT_STROKE_WIDTH: f64 = 2.0;
