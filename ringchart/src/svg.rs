// Copyright 2026 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0

//! Static SVG and HTML output for charts.

use std::io::Write;

use kurbo::{Cap, Point};

use crate::anim::animation_frames;
use crate::layout::SegmentLayout;
use crate::options::ResolvedOptions;

/// SVG `stroke-linecap` attribute value for a cap style.
pub fn cap_name(cap: Cap) -> &'static str {
    match cap {
        Cap::Butt => "butt",
        Cap::Round => "round",
        Cap::Square => "square",
    }
}

/// Parses a cap name; unrecognized names behave as [`Cap::Round`], the
/// chart default.
pub fn cap_from_name(name: &str) -> Cap {
    match name {
        "butt" => Cap::Butt,
        "square" => Cap::Square,
        _ => Cap::Round,
    }
}

/// Path data for the ring: two half-circle arcs starting at twelve
/// o'clock, so a dasharray can sweep the full circumference.
pub fn ring_path_d(radius: f64, padding: f64) -> String {
    let start = Point::new(radius + padding / 2.0, padding / 2.0);
    let diameter = 2.0 * radius;
    format!(
        "M{} {} a {radius} {radius} 0 1 1 0 {diameter} a {radius} {radius} 0 1 1 0 -{diameter}",
        start.x, start.y
    )
}

/// Writes the chart as a standalone SVG document.
///
/// Paths are emitted in reverse input order so earlier segments paint on
/// top of later ones, matching the prepend order of the DOM renderer.
/// Each path carries its settled frame state; static output has no
/// staged reveal.
pub fn write_svg(
    out: &mut impl Write,
    layouts: &[SegmentLayout],
    options: &ResolvedOptions,
) -> std::io::Result<()> {
    let size = options.svg_size;
    writeln!(
        out,
        "<svg width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\" xmlns=\"http://www.w3.org/2000/svg\">"
    )?;
    let d = ring_path_d(options.radius, options.padding);
    for layout in layouts.iter().rev() {
        let frames = animation_frames(layout, options);
        writeln!(
            out,
            "  <path d=\"{d}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"{}\" stroke-dasharray=\"{}, {}\" style=\"transition: all {}ms ease\"/>",
            layout.color,
            frames.settled.stroke_width,
            cap_name(options.stroke_line_cap),
            frames.settled.dash_length,
            options.circumference,
            frames.duration_ms,
        )?;
    }
    writeln!(out, "</svg>")
}

/// Writes a standalone page holding the chart and, when the options ask
/// for one, a legend row per segment in input order.
pub fn write_html(
    out: &mut impl Write,
    layouts: &[SegmentLayout],
    options: &ResolvedOptions,
) -> std::io::Result<()> {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html><body><div>")?;
    write_svg(out, layouts, options)?;
    if options.show_legend {
        for layout in layouts {
            writeln!(
                out,
                "<div style=\"display: flex; align-items: center; margin-bottom: 5px;\">\
                 <div style=\"width: 20px; height: 20px; background-color: {}; margin-right: 10px;\"></div>\
                 <span>{}%</span></div>",
                layout.color, layout.value
            )?;
        }
    }
    writeln!(out, "</div></body></html>")
}
