// Copyright 2026 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0

//! Reveal animation: two endpoint states per segment, interpolated by
//! the rendering layer's native transition mechanism.

use crate::layout::SegmentLayout;
use crate::options::ResolvedOptions;

/// Delay before the settled frame is applied, independent of the
/// configured transition duration.
pub const SETTLE_DELAY_MS: u64 = 100;

/// How segments are revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Animation {
    /// The arc sweeps in from zero length.
    #[default]
    Progress,
    /// The full arc is visible immediately and thickens in.
    Inflate,
    /// Segments appear at their final state with no staging.
    None,
}

impl Animation {
    /// Parses a mode name; unrecognized names behave as [`Animation::None`].
    pub fn parse(s: &str) -> Animation {
        match s {
            "progress" => Animation::Progress,
            "inflate" => Animation::Inflate,
            _ => Animation::None,
        }
    }
}

/// One visual endpoint state for a segment's path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameState {
    /// Visible portion of the ring, in circumference units.
    pub dash_length: f64,
    pub stroke_width: f64,
}

/// The two endpoint states of a segment's reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationFrames {
    pub initial: FrameState,
    pub settled: FrameState,
    /// Whether a delay separates the two states; unstaged frames are
    /// applied in one step.
    pub staged: bool,
    /// Transition duration governing the interpolation between states.
    pub duration_ms: u64,
}

/// Declares the endpoint states for one segment under the chart's
/// animation mode. Interpolation is the rendering layer's job.
pub fn animation_frames(layout: &SegmentLayout, options: &ResolvedOptions) -> AnimationFrames {
    let settled = FrameState {
        dash_length: layout.cumulative_arc_length,
        stroke_width: layout.stroke_width,
    };
    let (initial, staged) = match options.animation {
        Animation::Inflate => (
            FrameState {
                dash_length: layout.cumulative_arc_length,
                // Unit width seeds the thickening transition.
                stroke_width: 1.0,
            },
            true,
        ),
        Animation::Progress => (
            FrameState {
                dash_length: 0.0,
                stroke_width: layout.stroke_width,
            },
            true,
        ),
        Animation::None => (settled, false),
    };
    AnimationFrames {
        initial,
        settled,
        staged,
        duration_ms: options.animation_duration_ms,
    }
}

/// Reveal phase for one segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationPhase {
    Initial,
    Animating,
    Settled,
}

/// Two-step reveal state machine.
///
/// The caller owns the scheduling: apply [`SegmentAnimation::frame`]
/// immediately, then after [`SETTLE_DELAY_MS`] call
/// [`SegmentAnimation::advance`] and apply the new frame. Unstaged
/// frames start settled and need no timer.
#[derive(Clone, Copy, Debug)]
pub struct SegmentAnimation {
    frames: AnimationFrames,
    phase: AnimationPhase,
}

impl SegmentAnimation {
    pub fn new(frames: AnimationFrames) -> Self {
        let phase = if frames.staged {
            AnimationPhase::Initial
        } else {
            AnimationPhase::Settled
        };
        SegmentAnimation { frames, phase }
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn is_settled(&self) -> bool {
        self.phase == AnimationPhase::Settled
    }

    /// The state the rendering layer should show in the current phase.
    pub fn frame(&self) -> FrameState {
        match self.phase {
            AnimationPhase::Initial => self.frames.initial,
            AnimationPhase::Animating | AnimationPhase::Settled => self.frames.settled,
        }
    }

    /// Steps the phase and returns the frame to apply after the step.
    pub fn advance(&mut self) -> FrameState {
        self.phase = match self.phase {
            AnimationPhase::Initial => AnimationPhase::Animating,
            AnimationPhase::Animating | AnimationPhase::Settled => AnimationPhase::Settled,
        };
        self.frame()
    }

    /// Runs the machine to its end state and returns the settled frame.
    pub fn advance_to_settled(&mut self) -> FrameState {
        while !self.is_settled() {
            self.advance();
        }
        self.frame()
    }
}
