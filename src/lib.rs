//! Geometry for circular pregnancy wheel calendars.
//!
//! Given a reference date ("today") and a last-menstrual-period date, the
//! layout engine places 365 consecutive days around a disc at a constant
//! `360 / 365` degrees per day and derives month label arcs, day ticks,
//! gestational week ticks and trimester wedges as angles and SVG path data.
//!
//! ```
//! use chrono::NaiveDate;
//! use pregwheel::{Anchors, WheelConfig, WheelLayout};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
//! let layout = WheelLayout::compute(&WheelConfig::default(), Anchors::new(today)?)?;
//! assert_eq!(layout.days().len(), 365);
//! assert_eq!(layout.trimester_bands().len(), 3);
//! # Ok::<(), pregwheel::WheelError>(())
//! ```

pub mod calendar;
pub mod config;
pub mod errors;
pub mod layout;
pub mod log;
pub mod render;
pub mod types;

use chrono::NaiveDate;

pub use config::WheelConfig;
pub use errors::WheelError;
pub use layout::{
    AngleMapper, Anchors, DayEntry, DayTick, GaTick, Highlights, MonthArc, TickKind, TickLabel,
    Trimester, TrimesterBand, WheelLayout,
};
pub use render::{ArcSpec, PathData, RenderOptions, build_open_arc, build_wedge, project};
pub use types::{Angle, Point2D};

/// Render a wheel to SVG with the default configuration.
///
/// `lmp_date` defaults to ten weeks before `reference_date`.
pub fn render_wheel(
    reference_date: NaiveDate,
    lmp_date: Option<NaiveDate>,
) -> Result<String, WheelError> {
    let anchors = Anchors::from_optional(reference_date, lmp_date)?;
    let layout = WheelLayout::compute(&WheelConfig::default(), anchors)?;
    Ok(render::render(&layout))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_wheel_produces_a_document() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        let svg = render_wheel(today, None).unwrap();
        assert!(svg.contains("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<textPath").count(), 12);
        assert_eq!(svg.matches(r#"class="trimester "#).count(), 3);
    }

    #[test]
    fn render_wheel_propagates_date_errors() {
        let err = render_wheel(NaiveDate::MIN, None).unwrap_err();
        assert!(matches!(err, WheelError::DateOutOfRange { .. }));
    }
}
