// Copyright 2026 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0

//! Chart configuration and derived render geometry.

use kurbo::{Cap, Circle, Point, Shape};

use crate::anim::Animation;

/// User-facing chart configuration.
///
/// Every field has a default, so callers override only what they care
/// about with struct-update syntax:
///
/// ```
/// use ringchart::ChartOptions;
///
/// let options = ChartOptions {
///     radius: 60.0,
///     ..Default::default()
/// };
/// assert_eq!(options.padding, 20.0);
/// ```
#[derive(Clone, Debug)]
pub struct ChartOptions {
    pub radius: f64,
    pub stroke_width: f64,
    pub stroke_line_cap: Cap,
    pub show_legend: bool,
    pub animation: Animation,
    /// Transition duration between the two animation frames.
    pub animation_duration_ms: u64,
    pub padding: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        ChartOptions {
            radius: 40.0,
            stroke_width: 8.0,
            stroke_line_cap: Cap::Round,
            show_legend: true,
            animation: Animation::Progress,
            animation_duration_ms: 500,
            padding: 20.0,
        }
    }
}

/// Options after clamping and derivation, shared by every segment of one
/// render.
#[derive(Clone, Debug)]
pub struct ResolvedOptions {
    pub radius: f64,
    pub stroke_width: f64,
    pub stroke_line_cap: Cap,
    pub show_legend: bool,
    pub animation: Animation,
    pub animation_duration_ms: u64,
    pub padding: f64,
    /// Stroke-width ceiling, half the padding, so strokes stay inside
    /// the viewBox.
    pub max_stroke_width: f64,
    /// Side length of the square bounding box.
    pub svg_size: f64,
    /// Total stroke length available along the ring.
    pub circumference: f64,
}

impl ChartOptions {
    /// Clamps the stroke width against the padding-derived ceiling and
    /// computes the geometry shared by all segments.
    pub fn resolve(&self) -> ResolvedOptions {
        let max_stroke_width = self.padding / 2.0;
        let stroke_width = if self.stroke_width > max_stroke_width {
            tracing::warn!(
                requested = self.stroke_width,
                "stroke width exceeds the maximum allowed value, adjusting to {max_stroke_width}"
            );
            max_stroke_width
        } else {
            self.stroke_width
        };
        // Exact for circles, no flattening involved.
        let circumference = Circle::new(Point::ORIGIN, self.radius).perimeter(0.0);
        ResolvedOptions {
            radius: self.radius,
            stroke_width,
            stroke_line_cap: self.stroke_line_cap,
            show_legend: self.show_legend,
            animation: self.animation,
            animation_duration_ms: self.animation_duration_ms,
            padding: self.padding,
            max_stroke_width,
            svg_size: 2.0 * self.radius + self.padding,
            circumference,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn derives_size_and_circumference() {
        let resolved = ChartOptions::default().resolve();
        assert_eq!(resolved.svg_size, 100.0);
        assert_eq!(resolved.max_stroke_width, 10.0);
        assert!((resolved.circumference - 2.0 * PI * 40.0).abs() < 1e-12);
        assert!((resolved.circumference - 251.327).abs() < 1e-3);
    }

    #[test]
    fn clamps_oversized_stroke_width() {
        let options = ChartOptions {
            stroke_width: 12.0,
            ..Default::default()
        };
        assert_eq!(options.resolve().stroke_width, 10.0);
    }

    #[test]
    fn keeps_stroke_width_under_ceiling() {
        let options = ChartOptions {
            padding: 30.0,
            ..Default::default()
        };
        let resolved = options.resolve();
        assert_eq!(resolved.stroke_width, 8.0);
        assert_eq!(resolved.max_stroke_width, 15.0);
        assert_eq!(resolved.svg_size, 110.0);
    }
}
