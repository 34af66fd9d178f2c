//! SVG generation
//!
//! Draw order: the three rings, month labels on their guide arcs, day ticks,
//! gestational week ticks, trimester wedges, then the center disc on top.
//! Numbers are written with `f64`'s `Display`, the same format path data uses.

use svg::Document;
use svg::node::Text as TextNode;
use svg::node::element::{Circle, Group, Line, Path, Text, TextPath};

use crate::layout::{DayTick, GaTick, Highlights, MonthArc, TrimesterBand, WheelLayout};
use crate::types::{Angle, Color, Point2D};

use super::defaults;
use super::{Palette, RenderOptions};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Build the SVG document tree for `layout`.
pub fn build_document(layout: &WheelLayout, options: &RenderOptions) -> Document {
    let config = layout.config();

    let mut document = Document::new()
        .set("xmlns", SVG_NS)
        .set("width", config.width)
        .set("height", config.height)
        .set("viewBox", (0, 0, config.width, config.height));

    for (class, radius) in [
        ("ring-outer", config.radius_outer),
        ("ring-middle", config.radius_middle),
        ("ring-inner", config.radius_inner),
    ] {
        document = document.add(
            Circle::new()
                .set("class", class)
                .set("cx", config.center_x)
                .set("cy", config.center_y)
                .set("r", radius)
                .set("fill", "none")
                .set("stroke", options.palette.stroke.to_string())
                .set("stroke-width", defaults::STROKE_WIDTH),
        );
    }

    let month_arcs = layout
        .month_arcs()
        .iter()
        .fold(Group::new().set("class", "month-arcs"), |group, arc| {
            let (guide, label) = month_arc_nodes(arc);
            group.add(guide).add(label)
        });

    let day_ticks = layout
        .day_ticks()
        .iter()
        .fold(Group::new().set("class", "day-ticks"), |group, tick| {
            let group = group.add(day_tick_line(tick, options));
            match day_tick_label(tick, options) {
                Some(label) => group.add(label),
                None => group,
            }
        });

    let ga_ticks = layout
        .ga_ticks()
        .iter()
        .fold(Group::new().set("class", "ga-ticks"), |group, tick| {
            let (line, label) = ga_tick_nodes(tick, options);
            group.add(line).add(label)
        });

    let trimesters = layout
        .trimester_bands()
        .iter()
        .fold(Group::new().set("class", "trimester-sections"), |group, band| {
            group.add(trimester_wedge(band, options))
        });

    crate::log::debug!(
        months = layout.month_arcs().len(),
        ticks = layout.day_ticks().len(),
        css_classes = options.css_classes,
        "svg document built"
    );

    document
        .add(month_arcs)
        .add(day_ticks)
        .add(ga_ticks)
        .add(trimesters)
        .add(
            Circle::new()
                .set("class", "center-disc")
                .set("cx", config.center_x)
                .set("cy", config.center_y)
                .set("r", config.radius_inner * defaults::CENTER_DISC_RATIO)
                .set("fill", options.palette.center_fill.to_string()),
        )
}

/// Generate a complete SVG document for `layout`.
pub fn generate_svg(layout: &WheelLayout, options: &RenderOptions) -> String {
    build_document(layout, options).to_string()
}

/// Invisible guide path plus the month name following it
fn month_arc_nodes(arc: &MonthArc) -> (Path, Text) {
    let guide = Path::new()
        .set("id", arc.id.as_str())
        .set("d", arc.path.to_string())
        .set("fill", "none")
        .set("stroke", "transparent")
        .set("pointer-events", "none");
    let label = Text::new("").set("font-weight", "bold").add(
        TextPath::new("")
            .set("href", format!("#{}", arc.id))
            .set("startOffset", "50%")
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .add(TextNode::new(arc.label.as_str())),
    );
    (guide, label)
}

fn day_tick_line(tick: &DayTick, options: &RenderOptions) -> Line {
    let mut classes = vec!["day-tick"];
    classes.extend(tick.highlights.class_names());

    let line = Line::new()
        .set("class", classes.join(" "))
        .set("x1", tick.inner.x)
        .set("y1", tick.inner.y)
        .set("x2", tick.outer.x)
        .set("y2", tick.outer.y);
    if options.css_classes {
        return line;
    }

    let width = if tick.highlights.any() {
        defaults::HIGHLIGHT_STROKE_WIDTH
    } else {
        defaults::STROKE_WIDTH
    };
    line.set(
        "stroke",
        highlight_stroke(&tick.highlights, &options.palette).to_string(),
    )
    .set("stroke-width", width)
}

fn day_tick_label(tick: &DayTick, options: &RenderOptions) -> Option<Text> {
    let label = tick.label.as_ref()?;
    let text = radial_label(&label.text, tick.angle, label.position).set("class", "day-label");
    Some(if options.css_classes {
        text
    } else {
        text.set("fill", options.palette.stroke.to_string())
    })
}

fn ga_tick_nodes(tick: &GaTick, options: &RenderOptions) -> (Line, Text) {
    let line = Line::new()
        .set("class", "ga-tick")
        .set("x1", tick.inner.x)
        .set("y1", tick.inner.y)
        .set("x2", tick.outer.x)
        .set("y2", tick.outer.y);
    let line = if options.css_classes {
        line
    } else {
        line.set("stroke", options.palette.ga_tick.to_string())
    };
    let label = radial_label(&tick.label.text, tick.angle, tick.label.position)
        .set("class", "ga-label");
    (line, label)
}

fn trimester_wedge(band: &TrimesterBand, options: &RenderOptions) -> Path {
    let n = band.trimester.number();
    let path = Path::new()
        .set("class", format!("trimester trimester-{}", n))
        .set("d", band.path.to_string());
    if options.css_classes {
        path
    } else {
        path.set(
            "fill",
            options.palette.trimesters[usize::from(n - 1)].to_string(),
        )
    }
}

/// Small centered text turned to follow its tick
fn radial_label(content: &str, angle: Angle, position: Point2D) -> Text {
    Text::new(content)
        .set("x", position.x)
        .set("y", position.y)
        .set("font-size", defaults::DAY_LABEL_FONT_SIZE)
        .set("font-family", defaults::FONT_FAMILY)
        .set("text-anchor", "middle")
        .set("dominant-baseline", "middle")
        .set("transform", rotate_about(angle, position))
}

/// Later classes win, matching how the stylesheet orders them.
fn highlight_stroke<'a>(highlights: &Highlights, palette: &'a Palette) -> &'a Color {
    if highlights.year_end {
        &palette.year_end
    } else if highlights.year_start {
        &palette.year_start
    } else if highlights.today {
        &palette.today
    } else if highlights.lmp {
        &palette.lmp
    } else {
        &palette.stroke
    }
}

fn rotate_about(angle: Angle, pivot: Point2D) -> String {
    format!("rotate({} {} {})", angle.raw(), pivot.x, pivot.y)
}
