//! Motion-gesture recognition over a windowed cursor history.
//!
//! The detector watches raw per-tick cursor samples and classifies a fast
//! sweep as a shot. It keeps a short sliding window of positions and the
//! magnitudes of consecutive deltas; once the window saturates, the mean
//! magnitude is compared against a fixed threshold each tick. A qualifying
//! sweep is attributed to the placed piece under the window's start point and
//! a latch keeps the same sweep from firing twice.

use arrayvec::ArrayVec;

use crate::config::BoardConfig;
use crate::geometry::Point;
use crate::hover;
use crate::registry::{InstanceId, PieceInstance};

/// Rolling statistics over a saturated delta window.
///
/// Detection keys off `mean_magnitude` alone; the deviation and heading are
/// computed alongside it as an extension point and surfaced for display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionStats {
    /// Arithmetic mean step magnitude, units per tick.
    pub mean_magnitude: f32,
    /// Sample standard deviation of step magnitude.
    pub stddev_magnitude: f32,
    /// Mean travel heading in degrees, mathematical convention
    /// (0 = right, 90 = up on screen).
    pub mean_heading: f32,
}

/// A detected shot sweep, attributed to the piece hovered at its start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShotEvent {
    pub start: Point,
    pub end: Point,
    pub target: InstanceId,
}

/// Bounded most-recent history of cursor samples and per-step deltas.
///
/// Positions cap at [`BoardConfig::MAX_MOTION_SAMPLES`]; magnitudes and
/// headings cap one lower, so a full window holds exactly
/// [`BoardConfig::MOTION_DELTA_WINDOW`] deltas and the oldest position is the
/// start of the oldest delta.
#[derive(Clone, Debug, Default)]
pub struct MotionWindow {
    positions: ArrayVec<Point, { BoardConfig::MAX_MOTION_SAMPLES }>,
    magnitudes: ArrayVec<f32, { BoardConfig::MOTION_DELTA_WINDOW }>,
    headings: ArrayVec<f32, { BoardConfig::MOTION_DELTA_WINDOW }>,
}

impl MotionWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sample, trimming the oldest entries once the caps are hit.
    pub fn push(&mut self, position: Point) {
        if let Some(&previous) = self.positions.last() {
            let (dx, dy) = previous.delta_to(position);
            push_trimmed(&mut self.magnitudes, previous.distance_to(position));
            push_trimmed(&mut self.headings, step_heading(dx, dy));
        }
        if self.positions.is_full() {
            self.positions.remove(0);
        }
        self.positions.push(position);
    }

    /// Oldest retained sample: the start of the current delta window.
    pub fn start(&self) -> Option<Point> {
        self.positions.first().copied()
    }

    pub fn is_saturated(&self) -> bool {
        self.magnitudes.is_full()
    }

    /// Statistics over the window, or `None` until it saturates.
    pub fn stats(&self) -> Option<MotionStats> {
        if !self.is_saturated() {
            return None;
        }

        let count = self.magnitudes.len() as f32;
        let mean_magnitude = self.magnitudes.iter().sum::<f32>() / count;
        let variance = self
            .magnitudes
            .iter()
            .map(|magnitude| {
                let deviation = magnitude - mean_magnitude;
                deviation * deviation
            })
            .sum::<f32>()
            / (count - 1.0);
        let mean_heading = self.headings.iter().sum::<f32>() / count;

        Some(MotionStats {
            mean_magnitude,
            stddev_magnitude: variance.sqrt(),
            mean_heading,
        })
    }
}

fn push_trimmed<const CAP: usize>(window: &mut ArrayVec<f32, CAP>, value: f32) {
    if window.is_full() {
        window.remove(0);
    }
    window.push(value);
}

/// Heading of one step in degrees. Axis-aligned deltas take the manual
/// branches so `atan2` never sees a degenerate pair; screen y grows downward,
/// so it is negated into the mathematical convention.
fn step_heading(dx: i32, dy: i32) -> f32 {
    match (dx, dy) {
        (0, 0) => 0.0,
        (dx, 0) if dx > 0 => 0.0,
        (_, 0) => 180.0,
        (0, dy) if dy > 0 => 270.0,
        (0, _) => 90.0,
        (dx, dy) => (-dy as f32).atan2(dx as f32).to_degrees().rem_euclid(360.0),
    }
}

/// Two-state sweep detector {Idle, Shooting} keyed off one threshold crossing.
#[derive(Clone, Debug, Default)]
pub struct GestureDetector {
    window: MotionWindow,
    mid_shot: bool,
    latest: Option<ShotEvent>,
}

impl GestureDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds this tick's cursor position, returning a shot if one fires.
    ///
    /// A shot fires when the window is saturated, the mean magnitude exceeds
    /// [`BoardConfig::SHOT_THRESHOLD`], no shot is mid-flight, and the window
    /// start point hovers a placed, non-structure piece. Attribution failure
    /// does not latch, so the same sweep keeps qualifying on later ticks; the
    /// latch clears once the mean falls back below the threshold. A mean
    /// exactly at the threshold neither fires nor clears.
    pub fn observe(&mut self, cursor: Point, placed: &[PieceInstance]) -> Option<ShotEvent> {
        self.window.push(cursor);
        let stats = self.window.stats()?;

        if stats.mean_magnitude > BoardConfig::SHOT_THRESHOLD {
            if self.mid_shot {
                return None;
            }
            let start = self.window.start()?;
            let target = hover::hit_test(placed, start)?;
            if target.category().is_structure() {
                return None;
            }

            let event = ShotEvent {
                start,
                end: cursor,
                target: target.id(),
            };
            self.mid_shot = true;
            self.latest = Some(event);
            Some(event)
        } else {
            if stats.mean_magnitude < BoardConfig::SHOT_THRESHOLD {
                self.mid_shot = false;
            }
            None
        }
    }

    /// Statistics over the current window, when saturated.
    pub fn stats(&self) -> Option<MotionStats> {
        self.window.stats()
    }

    pub fn is_mid_shot(&self) -> bool {
        self.mid_shot
    }

    /// The most recent shot. Only one is retained; an older trace is
    /// discarded as soon as a new sweep fires.
    pub fn latest_shot(&self) -> Option<ShotEvent> {
        self.latest
    }
}
