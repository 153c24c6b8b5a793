// Copyright 2026 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0

//! Renders a ring chart to a standalone SVG or HTML file.

use std::io::Write;

use anyhow::Context;
use clap::Parser;

use ringchart::{
    layout_segments, svg, Animation, ChartOptions, ColorSource, PaletteColors, RandomColors,
    Segment,
};

#[derive(Parser)]
#[command(about = "Render a ring/donut chart as SVG")]
struct Args {
    /// Segment values as percentages, comma separated.
    #[arg(value_delimiter = ',', required = true)]
    values: Vec<f64>,
    /// Colors matched to values by position; missing entries get
    /// generated colors.
    #[arg(short, long, value_delimiter = ',')]
    colors: Vec<String>,
    #[arg(long)]
    radius: Option<f64>,
    #[arg(long)]
    padding: Option<f64>,
    #[arg(long)]
    stroke_width: Option<f64>,
    /// butt, round or square; anything else behaves as round.
    #[arg(long)]
    line_cap: Option<String>,
    /// progress, inflate or none; anything else behaves as none.
    #[arg(short, long)]
    animation: Option<String>,
    #[arg(long)]
    duration_ms: Option<u64>,
    /// Cycle the rainbow palette for missing colors instead of random
    /// generation.
    #[arg(long)]
    rainbow: bool,
    #[arg(long)]
    no_legend: bool,
    /// Wrap the SVG in a page with a legend.
    #[arg(long)]
    html: bool,
    /// Write to a file instead of stdout.
    #[arg(short, long)]
    output_file: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut options = ChartOptions::default();
    if let Some(radius) = args.radius {
        options.radius = radius;
    }
    if let Some(padding) = args.padding {
        options.padding = padding;
    }
    if let Some(width) = args.stroke_width {
        options.stroke_width = width;
    }
    if let Some(cap) = args.line_cap.as_deref() {
        options.stroke_line_cap = svg::cap_from_name(cap);
    }
    if let Some(mode) = args.animation.as_deref() {
        options.animation = Animation::parse(mode);
    }
    if let Some(duration) = args.duration_ms {
        options.animation_duration_ms = duration;
    }
    options.show_legend = !args.no_legend;

    let segments: Vec<Segment> = args
        .values
        .iter()
        .enumerate()
        .map(|(i, &value)| match args.colors.get(i) {
            Some(color) => Segment::new(value).with_color(color.clone()),
            None => Segment::new(value),
        })
        .collect();

    let resolved = options.resolve();
    let mut random = RandomColors;
    let mut rainbow = PaletteColors::rainbow();
    let colors: &mut dyn ColorSource = if args.rainbow {
        &mut rainbow
    } else {
        &mut random
    };
    let layouts = layout_segments(&segments, &resolved, colors);

    let mut buf = Vec::new();
    if args.html {
        svg::write_html(&mut buf, &layouts, &resolved)?;
    } else {
        svg::write_svg(&mut buf, &layouts, &resolved)?;
    }
    match &args.output_file {
        Some(path) => {
            std::fs::write(path, &buf).with_context(|| format!("writing {path}"))?;
        }
        None => std::io::stdout().write_all(&buf)?,
    }
    Ok(())
}
