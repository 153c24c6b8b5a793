// Copyright 2026 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0

//! Converts percentage values into arc lengths along the ring.

use crate::color::ColorSource;
use crate::options::ResolvedOptions;

/// One data item, a percentage share of the ring.
#[derive(Clone, Debug, Default)]
pub struct Segment {
    /// Nominally 0-100. Out-of-range values are accepted and scale
    /// linearly; the total may exceed the circumference.
    pub value: f64,
    /// Display color; when absent or empty a generated color is used.
    pub color: Option<String>,
    /// Per-segment stroke width; zero or negative counts as unset.
    pub stroke_width: Option<f64>,
}

impl Segment {
    pub fn new(value: f64) -> Self {
        Segment {
            value,
            color: None,
            stroke_width: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }
}

/// A segment resolved against the chart options, ready to draw.
#[derive(Clone, Debug)]
pub struct SegmentLayout {
    /// The original percentage value, kept for the legend label.
    pub value: f64,
    pub color: String,
    pub stroke_width: f64,
    /// This segment's share of the circumference.
    pub arc_length: f64,
    /// Running total in input order; where this segment's stroke ends
    /// along the ring.
    pub cumulative_arc_length: f64,
}

/// Resolves segments in input order against the chart options.
///
/// Colors missing from the input are drawn from `colors`; stroke widths
/// are capped at the padding-derived ceiling.
pub fn layout_segments(
    segments: &[Segment],
    options: &ResolvedOptions,
    colors: &mut dyn ColorSource,
) -> Vec<SegmentLayout> {
    let mut cumulative = 0.0;
    segments
        .iter()
        .map(|segment| {
            let arc_length = segment.value / 100.0 * options.circumference;
            cumulative += arc_length;
            let color = match segment.color.as_deref() {
                Some(c) if !c.is_empty() => c.to_string(),
                _ => colors.next_color(),
            };
            // A non-positive per-segment width means "unset"; it falls
            // back to the chart width, never to zero.
            let stroke_width = segment
                .stroke_width
                .filter(|w| *w > 0.0)
                .map_or(options.stroke_width, |w| w.min(options.max_stroke_width));
            SegmentLayout {
                value: segment.value,
                color,
                stroke_width,
                arc_length,
                cumulative_arc_length: cumulative,
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::color::{PaletteColors, RandomColors};
    use crate::options::ChartOptions;

    fn resolved() -> ResolvedOptions {
        ChartOptions::default().resolve()
    }

    fn palette() -> PaletteColors {
        PaletteColors::new(vec!["#AAAAAA".into(), "#BBBBBB".into(), "#CCCCCC".into()])
    }

    #[test]
    fn quarter_and_three_quarters() {
        let segments = [Segment::new(25.0), Segment::new(75.0)];
        let layouts = layout_segments(&segments, &resolved(), &mut palette());
        assert!((layouts[0].arc_length - 62.832).abs() < 1e-3);
        assert!((layouts[1].arc_length - 188.496).abs() < 1e-3);
        assert!((layouts[0].cumulative_arc_length - 62.832).abs() < 1e-3);
        assert!((layouts[1].cumulative_arc_length - 251.327).abs() < 1e-3);
    }

    #[test]
    fn cumulative_is_non_decreasing_and_sums() {
        let values = [12.5, 0.0, 40.0, 7.5, 30.0];
        let segments: Vec<Segment> = values.iter().map(|&v| Segment::new(v)).collect();
        let options = resolved();
        let layouts = layout_segments(&segments, &options, &mut palette());
        let mut last = 0.0;
        for layout in &layouts {
            assert!(layout.cumulative_arc_length >= last);
            last = layout.cumulative_arc_length;
        }
        let total: f64 = values.iter().sum();
        let expected = options.circumference * total / 100.0;
        assert!((last - expected).abs() < 1e-9);
    }

    #[test]
    fn values_above_one_hundred_are_accepted() {
        let segments = [Segment::new(80.0), Segment::new(80.0)];
        let options = resolved();
        let layouts = layout_segments(&segments, &options, &mut palette());
        assert!(layouts[1].cumulative_arc_length > options.circumference);
    }

    #[test]
    fn explicit_colors_win_and_empty_falls_back() {
        let segments = [
            Segment::new(10.0).with_color("#123456"),
            Segment::new(10.0).with_color(""),
            Segment::new(10.0),
        ];
        let layouts = layout_segments(&segments, &resolved(), &mut palette());
        assert_eq!(layouts[0].color, "#123456");
        assert_eq!(layouts[1].color, "#AAAAAA");
        assert_eq!(layouts[2].color, "#BBBBBB");
    }

    #[test]
    fn generated_colors_are_well_formed() {
        let segments = [Segment::new(50.0), Segment::new(50.0)];
        let layouts = layout_segments(&segments, &resolved(), &mut RandomColors);
        for layout in &layouts {
            assert_eq!(layout.color.len(), 7);
            assert!(layout.color.starts_with('#'));
            assert!(layout.color[1..]
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn zero_stroke_width_falls_back_to_chart_width() {
        let segments = [
            Segment::new(50.0).with_stroke_width(0.0),
            Segment::new(50.0),
        ];
        let layouts = layout_segments(&segments, &resolved(), &mut palette());
        assert_eq!(layouts[0].stroke_width, 8.0);
        assert_eq!(layouts[1].stroke_width, 8.0);
    }

    #[test]
    fn segment_stroke_width_is_capped() {
        let segments = [
            Segment::new(50.0).with_stroke_width(4.0),
            Segment::new(50.0).with_stroke_width(25.0),
        ];
        let options = resolved();
        let layouts = layout_segments(&segments, &options, &mut palette());
        assert_eq!(layouts[0].stroke_width, 4.0);
        assert_eq!(layouts[1].stroke_width, options.max_stroke_width);
    }
}
