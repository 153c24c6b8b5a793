// Copyright 2026 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0

//! Arc layout and SVG rendering for ring/donut charts.
//!
//! The layout engine turns percentage values into cumulative arc lengths
//! along a ring, resolves per-segment colors and stroke widths, and
//! declares the endpoint states of the reveal animation. Rendering
//! backends (the static writers in [`svg`], or a DOM layer such as the
//! `ringtoy` crate) consume those results.

pub mod anim;
pub mod color;
pub mod error;
pub mod layout;
pub mod options;
pub mod svg;

pub use anim::{
    animation_frames, Animation, AnimationFrames, AnimationPhase, FrameState, SegmentAnimation,
    SETTLE_DELAY_MS,
};
pub use color::{ColorSource, PaletteColors, RandomColors};
pub use error::ChartError;
pub use layout::{layout_segments, Segment, SegmentLayout};
pub use options::{ChartOptions, ResolvedOptions};
