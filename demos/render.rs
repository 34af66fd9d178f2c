//! Print a pregnancy wheel as SVG.
//!
//! Usage: `cargo run --example render --features tracing -- [REFERENCE [LMP]] [--css]`
//! with dates as `YYYY-MM-DD`. Without a reference date the wheel is anchored
//! on today; without an LMP it is ten weeks before the reference date.

use chrono::NaiveDate;
use miette::{Context, IntoDiagnostic};
use pregwheel::render::{RenderOptions, render_with_options};
use pregwheel::{Anchors, WheelConfig, WheelLayout};

fn parse_date(arg: &str) -> miette::Result<NaiveDate> {
    NaiveDate::parse_from_str(arg, "%Y-%m-%d")
        .into_diagnostic()
        .wrap_err_with(|| format!("expected a YYYY-MM-DD date, got {arg:?}"))
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut css_classes = false;
    let mut dates = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--css" {
            css_classes = true;
        } else {
            dates.push(parse_date(&arg)?);
        }
    }

    let anchors = match dates.as_slice() {
        [] => Anchors::today()?,
        [reference] => Anchors::new(*reference)?,
        [reference, lmp] => Anchors::with_lmp(*reference, *lmp),
        _ => miette::bail!("expected at most two dates"),
    };
    let layout = WheelLayout::compute(&WheelConfig::default(), anchors)?;
    let anchors = layout.anchors();
    tracing::info!(reference = %anchors.reference_date, lmp = %anchors.lmp_date, "rendering wheel");
    let options = RenderOptions {
        css_classes,
        ..RenderOptions::default()
    };
    println!("{}", render_with_options(&layout, &options));
    Ok(())
}
