//! Wheel layout: maps calendar dates onto wheel angles.
//!
//! A layout is computed in ordered passes over one fixed array of 365
//! consecutive days:
//!
//! 1. build the day array around the reference date
//! 2. month arcs for every first-of-month in the array
//! 3. one tick per day (month start / multiple of five / plain)
//! 4. gestational-age week ticks inside the pregnancy window
//! 5. three trimester wedges
//!
//! Angle 0 is the reference date. Every date's angle is its whole-day
//! distance from the reference date times [`WheelConfig::degrees_per_day`],
//! so positions stay continuous across New Year even though day-of-year
//! jumps back to 1 there.

use chrono::NaiveDate;

use crate::calendar::{
    DAYS_PER_WEEK, add_days, add_weeks, day, day_of_year, days_in_month, diff_days, diff_weeks,
    is_same_day, month_name, month0, sub_weeks,
};
use crate::config::WheelConfig;
use crate::errors::WheelError;
use crate::render::defaults::WHEEL_DAYS;
use crate::render::geometry::{ArcSpec, project};
use crate::render::path_data::PathData;
use crate::types::{Angle, Point2D};

/// LMP assumed when none is given: this many weeks before the reference date
pub const DEFAULT_LMP_WEEKS: i64 = 10;
/// First gestational week boundary, in weeks after LMP
pub const GA_START_WEEKS: i64 = 2;
/// Last gestational week boundary, in weeks after LMP
pub const GA_END_WEEKS: i64 = 44;
/// Trimester boundaries in weeks after LMP
pub const TRIMESTER_BOUNDARY_WEEKS: [i64; 4] = [2, 16, 30, 44];

/// The two dates a layout is anchored on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchors {
    /// "Today"; sits at angle 0
    pub reference_date: NaiveDate,
    /// Last menstrual period
    pub lmp_date: NaiveDate,
}

impl Anchors {
    /// Anchor on `reference_date` with the default LMP ten weeks earlier.
    pub fn new(reference_date: NaiveDate) -> Result<Self, WheelError> {
        Ok(Self {
            reference_date,
            lmp_date: sub_weeks(reference_date, DEFAULT_LMP_WEEKS)?,
        })
    }

    pub fn with_lmp(reference_date: NaiveDate, lmp_date: NaiveDate) -> Self {
        Self {
            reference_date,
            lmp_date,
        }
    }

    pub fn from_optional(
        reference_date: NaiveDate,
        lmp_date: Option<NaiveDate>,
    ) -> Result<Self, WheelError> {
        match lmp_date {
            Some(lmp_date) => Ok(Self::with_lmp(reference_date, lmp_date)),
            None => Self::new(reference_date),
        }
    }

    /// Anchor on the local calendar date. Layout never reads the clock on
    /// its own; this is for hosts that want "now".
    pub fn today() -> Result<Self, WheelError> {
        Self::new(chrono::Local::now().date_naive())
    }
}

/// One date of the day array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayEntry {
    pub date: NaiveDate,
    /// Offset from the array's first element; negative for earlier dates
    pub day_index: i64,
}

/// Build the 365-day array with `lead_days` days before `reference_date`.
pub fn build_day_array(
    reference_date: NaiveDate,
    lead_days: i64,
) -> Result<Vec<DayEntry>, WheelError> {
    let first = add_days(reference_date, -lead_days)?;
    (0..WHEEL_DAYS)
        .map(|day_index| {
            Ok(DayEntry {
                date: add_days(first, day_index)?,
                day_index,
            })
        })
        .collect()
}

/// The date → angle function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleMapper {
    reference_date: NaiveDate,
    degrees_per_day: f64,
    rotation_days: i64,
}

impl AngleMapper {
    pub fn new(reference_date: NaiveDate, degrees_per_day: f64) -> Self {
        Self {
            reference_date,
            degrees_per_day,
            rotation_days: 0,
        }
    }

    /// Turn the whole wheel by `rotation_days` days.
    pub fn with_rotation(mut self, rotation_days: i64) -> Self {
        self.rotation_days = rotation_days;
        self
    }

    pub fn rotation_days(&self) -> i64 {
        self.rotation_days
    }

    /// Offset that puts the reference date's day-of-year at angle 0.
    pub fn default_offset(&self) -> i64 {
        self.rotation_days - day_of_year(self.reference_date) as i64
    }

    /// `(day_of_year + offset) * degrees_per_day`
    pub fn angle(&self, day_of_year: i64, offset: i64) -> Angle {
        Angle(self.degrees_per_day) * (day_of_year + offset) as f64
    }

    /// Offset to pair with `date`'s own day-of-year. Equal to the default
    /// offset within the reference year; for other years it absorbs the
    /// day-of-year reset at each New Year.
    pub fn anchored_offset(&self, date: NaiveDate) -> i64 {
        let year_shift = diff_days(date, self.reference_date)
            - (day_of_year(date) as i64 - day_of_year(self.reference_date) as i64);
        self.default_offset() + year_shift
    }

    pub fn angle_of(&self, date: NaiveDate) -> Angle {
        self.angle(day_of_year(date) as i64, self.anchored_offset(date))
    }

    /// Angle of the position `days` days after `date`.
    pub fn angle_after(&self, date: NaiveDate, days: i64) -> Angle {
        self.angle(day_of_year(date) as i64 + days, self.anchored_offset(date))
    }
}

/// How long a day tick is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    /// First of the month: spans the whole day ring
    MonthStart,
    /// Day of month divisible by 5
    Long,
    Short,
}

impl TickKind {
    pub fn for_day(day_of_month: u32) -> Self {
        if day_of_month == 1 {
            TickKind::MonthStart
        } else if day_of_month % 5 == 0 {
            TickKind::Long
        } else {
            TickKind::Short
        }
    }

    pub fn length(self, config: &WheelConfig) -> f64 {
        match self {
            TickKind::MonthStart => config.ring_depth(),
            TickKind::Long => config.tick_long_len,
            TickKind::Short => config.tick_short_len,
        }
    }
}

/// Day-number label text. Multiples of five are labelled, except the 30th,
/// which would crowd the 31st and the next month's first.
pub fn day_label(date: NaiveDate) -> Option<String> {
    let d = day(date);
    (d % 5 == 0 && d != 30).then(|| d.to_string())
}

/// Highlight classes of a day tick. Any combination may be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Highlights {
    pub today: bool,
    pub lmp: bool,
    pub year_start: bool,
    pub year_end: bool,
}

impl Highlights {
    pub fn classify(date: NaiveDate, anchors: &Anchors) -> Self {
        Self {
            today: is_same_day(date, anchors.reference_date),
            lmp: is_same_day(date, anchors.lmp_date),
            year_start: month0(date) == 0 && day(date) == 1,
            year_end: month0(date) == 11 && day(date) == 31,
        }
    }

    pub fn any(&self) -> bool {
        self.today || self.lmp || self.year_start || self.year_end
    }

    pub fn class_names(&self) -> Vec<&'static str> {
        [
            (self.today, "today"),
            (self.lmp, "lmp"),
            (self.year_start, "year-start"),
            (self.year_end, "year-end"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}

/// Text placed along a tick's radial line
#[derive(Debug, Clone, PartialEq)]
pub struct TickLabel {
    pub text: String,
    /// Distance of the label's center from the wheel center
    pub distance: f64,
    pub position: Point2D,
}

/// A month's label arc
#[derive(Debug, Clone, PartialEq)]
pub struct MonthArc {
    pub id: String,
    pub start_date: NaiveDate,
    pub days_in_month: u32,
    /// Upper-case month name
    pub label: String,
    pub arc: ArcSpec,
    /// Open arc the label follows
    pub path: PathData,
}

impl MonthArc {
    pub fn start(&self) -> Angle {
        self.arc.start
    }

    pub fn end(&self) -> Angle {
        self.arc.end
    }
}

/// A radial tick for one day
#[derive(Debug, Clone, PartialEq)]
pub struct DayTick {
    pub entry: DayEntry,
    pub angle: Angle,
    pub kind: TickKind,
    pub length: f64,
    /// Endpoint on the inner ring
    pub inner: Point2D,
    /// Endpoint `length` further out
    pub outer: Point2D,
    pub label: Option<TickLabel>,
    pub highlights: Highlights,
}

/// A gestational week boundary
#[derive(Debug, Clone, PartialEq)]
pub struct GaTick {
    pub date: NaiveDate,
    /// Whole weeks since LMP + 2 weeks
    pub week: i64,
    pub angle: Angle,
    pub inner: Point2D,
    /// Endpoint on the inner ring
    pub outer: Point2D,
    pub label: TickLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trimester {
    First,
    Second,
    Third,
}

impl Trimester {
    pub const ALL: [Trimester; 3] = [Trimester::First, Trimester::Second, Trimester::Third];

    pub fn number(self) -> u8 {
        match self {
            Trimester::First => 1,
            Trimester::Second => 2,
            Trimester::Third => 3,
        }
    }
}

/// A filled trimester wedge
#[derive(Debug, Clone, PartialEq)]
pub struct TrimesterBand {
    pub trimester: Trimester,
    pub start_date: NaiveDate,
    /// Exclusive
    pub end_date: NaiveDate,
    pub arc: ArcSpec,
    pub path: PathData,
}

/// Everything needed to draw one wheel
#[derive(Debug, Clone, PartialEq)]
pub struct WheelLayout {
    config: WheelConfig,
    anchors: Anchors,
    mapper: AngleMapper,
    days: Vec<DayEntry>,
    month_arcs: Vec<MonthArc>,
    day_ticks: Vec<DayTick>,
    ga_ticks: Vec<GaTick>,
    trimester_bands: Vec<TrimesterBand>,
}

impl WheelLayout {
    pub fn compute(config: &WheelConfig, anchors: Anchors) -> Result<Self, WheelError> {
        Self::compute_rotated(config, anchors, 0)
    }

    /// Compute a layout with the whole wheel turned by `rotation_days` days.
    pub fn compute_rotated(
        config: &WheelConfig,
        anchors: Anchors,
        rotation_days: i64,
    ) -> Result<Self, WheelError> {
        config.validate()?;

        let mapper = AngleMapper::new(anchors.reference_date, config.degrees_per_day())
            .with_rotation(rotation_days);
        let days = build_day_array(anchors.reference_date, config.lead_days)?;
        crate::log::debug!(
            reference = %anchors.reference_date,
            lmp = %anchors.lmp_date,
            first = ?days.first().map(|e| e.date),
            last = ?days.last().map(|e| e.date),
            rotation_days,
            "built day array"
        );

        let month_arcs = compute_month_arcs(config, &mapper, &days);
        let day_ticks = compute_day_ticks(config, &mapper, &anchors, &days);
        let ga_ticks = compute_ga_ticks(config, &mapper, anchors.lmp_date, &days)?;
        let trimester_bands = compute_trimester_bands(config, &mapper, anchors.lmp_date)?;
        crate::log::debug!(
            months = month_arcs.len(),
            ticks = day_ticks.len(),
            ga_ticks = ga_ticks.len(),
            "layout complete"
        );

        Ok(Self {
            config: config.clone(),
            anchors,
            mapper,
            days,
            month_arcs,
            day_ticks,
            ga_ticks,
            trimester_bands,
        })
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn anchors(&self) -> &Anchors {
        &self.anchors
    }

    pub fn mapper(&self) -> &AngleMapper {
        &self.mapper
    }

    pub fn days(&self) -> &[DayEntry] {
        &self.days
    }

    pub fn month_arcs(&self) -> &[MonthArc] {
        &self.month_arcs
    }

    pub fn day_ticks(&self) -> &[DayTick] {
        &self.day_ticks
    }

    pub fn ga_ticks(&self) -> &[GaTick] {
        &self.ga_ticks
    }

    pub fn trimester_bands(&self) -> &[TrimesterBand] {
        &self.trimester_bands
    }

    pub fn angle_of(&self, date: NaiveDate) -> Angle {
        self.mapper.angle_of(date)
    }

    /// Entry for any date, indexed relative to this layout's first day.
    pub fn day_entry(&self, date: NaiveDate) -> DayEntry {
        let day_index = match self.days.first() {
            Some(first) => diff_days(date, first.date),
            None => 0,
        };
        DayEntry { date, day_index }
    }
}

fn compute_month_arcs(
    config: &WheelConfig,
    mapper: &AngleMapper,
    days: &[DayEntry],
) -> Vec<MonthArc> {
    // Every arc covers its whole month, even when the month runs past the
    // end of the day array.
    days.iter()
        .filter(|entry| day(entry.date) == 1)
        .enumerate()
        .map(|(i, entry)| {
            let days_in_month = days_in_month(entry.date);
            let arc = ArcSpec::new(
                config.center(),
                config.radius_label,
                mapper.angle_of(entry.date),
                mapper.angle_after(entry.date, i64::from(days_in_month)),
                true,
            );
            crate::log::trace!(month = %entry.date, start = %arc.start, end = %arc.end, "month arc");
            MonthArc {
                id: format!("month-arc-{}", i),
                start_date: entry.date,
                days_in_month,
                label: month_name(entry.date).to_uppercase(),
                path: arc.open_path(),
                arc,
            }
        })
        .collect()
}

fn compute_day_ticks(
    config: &WheelConfig,
    mapper: &AngleMapper,
    anchors: &Anchors,
    days: &[DayEntry],
) -> Vec<DayTick> {
    let center = config.center();
    days.iter()
        .map(|entry| {
            let angle = mapper.angle_of(entry.date);
            let kind = TickKind::for_day(day(entry.date));
            let length = kind.length(config);
            let tip = config.radius_inner + length;
            let label = day_label(entry.date).map(|text| {
                let distance = tip + config.label_gap;
                TickLabel {
                    text,
                    distance,
                    position: project(center, distance, angle),
                }
            });
            DayTick {
                entry: *entry,
                angle,
                kind,
                length,
                inner: project(center, config.radius_inner, angle),
                outer: project(center, tip, angle),
                label,
                highlights: Highlights::classify(entry.date, anchors),
            }
        })
        .collect()
}

fn compute_ga_ticks(
    config: &WheelConfig,
    mapper: &AngleMapper,
    lmp_date: NaiveDate,
    days: &[DayEntry],
) -> Result<Vec<GaTick>, WheelError> {
    let window_start = add_weeks(lmp_date, GA_START_WEEKS)?;
    let window_end = add_weeks(lmp_date, GA_END_WEEKS)?;
    let center = config.center();
    let inner_radius = (config.radius_inner - config.tick_long_len).max(0.0);
    let label_distance = (inner_radius - config.label_gap).max(0.0);

    let ticks: Vec<GaTick> = days
        .iter()
        .filter(|entry| {
            entry.date >= window_start
                && entry.date <= window_end
                && diff_days(window_start, entry.date) % DAYS_PER_WEEK == 0
        })
        .map(|entry| {
            let angle = mapper.angle_of(entry.date);
            let week = diff_weeks(entry.date, window_start);
            GaTick {
                date: entry.date,
                week,
                angle,
                inner: project(center, inner_radius, angle),
                outer: project(center, config.radius_inner, angle),
                label: TickLabel {
                    text: week.to_string(),
                    distance: label_distance,
                    position: project(center, label_distance, angle),
                },
            }
        })
        .collect();

    if ticks.is_empty() {
        crate::log::warn!(
            %lmp_date,
            %window_start,
            %window_end,
            "gestational window does not overlap the day array"
        );
    }
    Ok(ticks)
}

fn compute_trimester_bands(
    config: &WheelConfig,
    mapper: &AngleMapper,
    lmp_date: NaiveDate,
) -> Result<Vec<TrimesterBand>, WheelError> {
    Trimester::ALL
        .into_iter()
        .zip(TRIMESTER_BOUNDARY_WEEKS.windows(2))
        .map(|(trimester, bounds)| {
            let start_date = add_weeks(lmp_date, bounds[0])?;
            let end_date = add_weeks(lmp_date, bounds[1])?;
            let arc = ArcSpec::new(
                config.center(),
                config.radius_inner,
                mapper.angle_of(start_date),
                mapper.angle_of(end_date),
                false,
            );
            Ok(TrimesterBand {
                trimester,
                start_date,
                end_date,
                path: arc.wedge_path(),
                arc,
            })
        })
        .collect()
}
