//! Wheel configuration.
//!
//! All ring radii derive from the canvas: the month labels sit on the largest
//! circle that fits, inset by a margin, and the outer, middle and inner rings
//! are placed relative to that. Degrees per day is fixed at `360 / 365`.

use crate::errors::WheelError;
use crate::render::defaults;
use crate::types::{Point2D, check_non_negative, check_positive};

/// Constant configuration for one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct WheelConfig {
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub radius_outer: f64,
    pub radius_middle: f64,
    pub radius_inner: f64,
    pub radius_label: f64,
    pub tick_long_len: f64,
    pub tick_short_len: f64,
    /// Space between a tick's end and its label
    pub label_gap: f64,
    /// Days of the day array placed before the reference date
    pub lead_days: i64,
    degrees_per_day: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self::from_canvas(defaults::WIDTH, defaults::HEIGHT)
    }
}

impl WheelConfig {
    /// Derive a config for a `width` × `height` canvas (unchecked).
    /// Use [`WheelConfig::try_from_canvas`] for user-provided sizes.
    pub fn from_canvas(width: f64, height: f64) -> Self {
        let radius_label = width.min(height) / 2.0 - defaults::LABEL_INSET;
        let radius_outer = radius_label + defaults::OUTER_ABOVE_LABEL;
        Self {
            width,
            height,
            center_x: width / 2.0,
            center_y: height / 2.0,
            radius_outer,
            radius_middle: radius_outer - defaults::MIDDLE_BELOW_OUTER,
            radius_inner: radius_outer - defaults::INNER_BELOW_OUTER,
            radius_label,
            tick_long_len: defaults::TICK_LONG,
            tick_short_len: defaults::TICK_SHORT,
            label_gap: defaults::LABEL_GAP,
            lead_days: defaults::LEAD_DAYS,
            degrees_per_day: defaults::DEGREES_PER_DAY,
        }
    }

    /// Derive and validate a config for a `width` × `height` canvas.
    pub fn try_from_canvas(width: f64, height: f64) -> Result<Self, WheelError> {
        let config = Self::from_canvas(width, height);
        config.validate()?;
        Ok(config)
    }

    pub fn with_lead_days(mut self, lead_days: i64) -> Self {
        self.lead_days = lead_days;
        self
    }

    /// Check every size is finite, the rings are ordered and the lead fits.
    pub fn validate(&self) -> Result<(), WheelError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("radius_outer", self.radius_outer),
            ("radius_middle", self.radius_middle),
            ("radius_inner", self.radius_inner),
            ("radius_label", self.radius_label),
        ];
        for (field, value) in positive {
            check_positive(value).map_err(|source| WheelError::InvalidConfig { field, source })?;
        }

        let non_negative = [
            ("center_x", self.center_x),
            ("center_y", self.center_y),
            ("tick_long_len", self.tick_long_len),
            ("tick_short_len", self.tick_short_len),
            ("label_gap", self.label_gap),
        ];
        for (field, value) in non_negative {
            check_non_negative(value)
                .map_err(|source| WheelError::InvalidConfig { field, source })?;
        }

        if !(self.radius_inner < self.radius_middle && self.radius_middle < self.radius_outer) {
            return Err(WheelError::RadiusOrder {
                inner: self.radius_inner,
                middle: self.radius_middle,
                outer: self.radius_outer,
            });
        }

        if !(0..defaults::WHEEL_DAYS).contains(&self.lead_days) {
            return Err(WheelError::LeadDaysOutOfRange {
                lead_days: self.lead_days,
                wheel_days: defaults::WHEEL_DAYS,
            });
        }

        Ok(())
    }

    #[inline]
    pub fn degrees_per_day(&self) -> f64 {
        self.degrees_per_day
    }

    #[inline]
    pub fn center(&self) -> Point2D {
        Point2D::new(self.center_x, self.center_y)
    }

    /// Radial depth of the day ring; month-start ticks span all of it.
    #[inline]
    pub fn ring_depth(&self) -> f64 {
        self.radius_outer - self.radius_inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NumericError;

    #[test]
    fn default_matches_reference_canvas() {
        let config = WheelConfig::default();
        assert_eq!(config.center(), Point2D::new(512.0, 448.0));
        assert_eq!(config.radius_label, 408.0);
        assert_eq!(config.radius_outer, 428.0);
        assert_eq!(config.radius_middle, 388.0);
        assert_eq!(config.radius_inner, 320.0);
        assert_eq!(config.ring_depth(), 108.0);
        assert_eq!(config.lead_days, 70);
        assert_eq!(config.degrees_per_day(), 360.0 / 365.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn portrait_canvas_uses_width() {
        let config = WheelConfig::from_canvas(600.0, 800.0);
        assert_eq!(config.radius_label, 260.0);
        assert_eq!(config.center(), Point2D::new(300.0, 400.0));
    }

    #[test]
    fn tiny_canvas_is_rejected() {
        let err = WheelConfig::try_from_canvas(100.0, 100.0).unwrap_err();
        assert_eq!(
            err,
            WheelError::InvalidConfig {
                field: "radius_middle",
                source: NumericError::Negative
            }
        );
    }

    #[test]
    fn nan_canvas_is_rejected() {
        let err = WheelConfig::try_from_canvas(f64::NAN, 800.0).unwrap_err();
        assert!(matches!(err, WheelError::InvalidConfig { field: "width", .. }));
    }

    #[test]
    fn rings_must_be_ordered() {
        let mut config = WheelConfig::default();
        config.radius_middle = config.radius_outer + 1.0;
        assert!(matches!(config.validate(), Err(WheelError::RadiusOrder { .. })));
    }

    #[test]
    fn lead_must_fit_on_wheel() {
        let config = WheelConfig::default().with_lead_days(365);
        assert_eq!(
            config.validate(),
            Err(WheelError::LeadDaysOutOfRange {
                lead_days: 365,
                wheel_days: 365
            })
        );
        assert!(WheelConfig::default().with_lead_days(0).validate().is_ok());
        assert!(WheelConfig::default().with_lead_days(-1).validate().is_err());
    }
}
