// Copyright 2026 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0

//! End-to-end layout and rendering checks.

use std::fs::File;
use std::io::Read;

use ringchart::{
    layout_segments, svg, Animation, ChartOptions, PaletteColors, Segment,
};

fn palette() -> PaletteColors {
    PaletteColors::new(vec!["#111111".into(), "#222222".into(), "#333333".into()])
}

#[test]
fn default_chart_geometry() {
    let resolved = ChartOptions::default().resolve();
    assert_eq!(resolved.svg_size, 100.0);
    assert_eq!(resolved.max_stroke_width, 10.0);
    assert!((resolved.circumference - 251.327).abs() < 1e-3);

    let segments = [Segment::new(25.0), Segment::new(75.0)];
    let layouts = layout_segments(&segments, &resolved, &mut palette());
    assert!((layouts[0].arc_length - 62.832).abs() < 1e-3);
    assert!((layouts[1].cumulative_arc_length - resolved.circumference).abs() < 1e-9);
}

#[test]
fn unknown_animation_renders_like_none() {
    let segments = [Segment::new(30.0), Segment::new(70.0)];
    let render = |animation: Animation| {
        let options = ChartOptions {
            animation,
            ..Default::default()
        };
        let resolved = options.resolve();
        let layouts = layout_segments(&segments, &resolved, &mut palette());
        let mut out = Vec::new();
        svg::write_svg(&mut out, &layouts, &resolved).unwrap();
        String::from_utf8(out).unwrap()
    };
    assert_eq!(render(Animation::parse("spiral")), render(Animation::None));
}

#[test]
fn writes_svg_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chart.svg");
    let resolved = ChartOptions::default().resolve();
    let layouts = layout_segments(
        &[Segment::new(40.0), Segment::new(60.0)],
        &resolved,
        &mut palette(),
    );
    let mut file = File::create(&path).unwrap();
    svg::write_svg(&mut file, &layouts, &resolved).unwrap();
    drop(file);

    let mut contents = String::new();
    File::open(&path)
        .unwrap()
        .read_to_string(&mut contents)
        .unwrap();
    assert!(contents.starts_with("<svg "));
    assert!(contents.trim_end().ends_with("</svg>"));
    assert_eq!(contents.matches("<path ").count(), 2);
}

#[test]
fn clamped_width_applies_to_every_segment() {
    let options = ChartOptions {
        stroke_width: 12.0,
        ..Default::default()
    };
    let resolved = options.resolve();
    let layouts = layout_segments(
        &[
            Segment::new(50.0),
            Segment::new(50.0).with_stroke_width(40.0),
        ],
        &resolved,
        &mut palette(),
    );
    for layout in &layouts {
        assert!(layout.stroke_width <= resolved.max_stroke_width);
    }
    assert_eq!(layouts[0].stroke_width, 10.0);
    assert_eq!(layouts[1].stroke_width, 10.0);
}
