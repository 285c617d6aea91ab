//! Input snapshots and uniform edge detection.
//!
//! The frontend samples every tracked channel into an [`InputSnapshot`] once
//! per tick; the [`EdgeDetector`] compares each channel against the previous
//! tick so press edges are qualified in exactly one place instead of per-key
//! comparisons scattered through the controller.

use bitflags::bitflags;
use strum::IntoEnumIterator;

use crate::geometry::Point;

/// Raw per-tick input state. Buttons and keys are level signals
/// ("currently down"); edges are derived by the [`EdgeDetector`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub cursor: Point,
    pub primary: bool,
    pub secondary: bool,
    pub rotate_cw: bool,
    pub rotate_ccw: bool,
    pub deselect: bool,
    pub quit: bool,
}

impl InputSnapshot {
    /// Snapshot with only a cursor position, all channels up.
    pub fn at(cursor: Point) -> Self {
        Self {
            cursor,
            ..Self::default()
        }
    }

    pub fn is_down(&self, channel: InputChannel) -> bool {
        match channel {
            InputChannel::Primary => self.primary,
            InputChannel::Secondary => self.secondary,
            InputChannel::RotateCw => self.rotate_cw,
            InputChannel::RotateCcw => self.rotate_ccw,
            InputChannel::Deselect => self.deselect,
            InputChannel::Quit => self.quit,
        }
    }
}

/// Identifier for each tracked button/key channel.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum InputChannel {
    Primary,
    Secondary,
    RotateCw,
    RotateCcw,
    Deselect,
    Quit,
}

impl InputChannel {
    const fn edge_flag(self) -> InputEdges {
        match self {
            InputChannel::Primary => InputEdges::PRIMARY,
            InputChannel::Secondary => InputEdges::SECONDARY,
            InputChannel::RotateCw => InputEdges::ROTATE_CW,
            InputChannel::RotateCcw => InputEdges::ROTATE_CCW,
            InputChannel::Deselect => InputEdges::DESELECT,
            InputChannel::Quit => InputEdges::QUIT,
        }
    }
}

bitflags! {
    /// Press edges detected this tick: channels that went down since the
    /// previous tick (`pressed now AND NOT pressed before`).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct InputEdges: u8 {
        const PRIMARY    = 1 << 0;
        const SECONDARY  = 1 << 1;
        const ROTATE_CW  = 1 << 2;
        const ROTATE_CCW = 1 << 3;
        const DESELECT   = 1 << 4;
        const QUIT       = 1 << 5;
    }
}

/// Qualifies press edges by remembering the previous tick's snapshot.
#[derive(Clone, Debug, Default)]
pub struct EdgeDetector {
    previous: InputSnapshot,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes this tick's snapshot and returns the channels that
    /// transitioned from released to pressed since the last call.
    pub fn advance(&mut self, snapshot: &InputSnapshot) -> InputEdges {
        let mut edges = InputEdges::empty();
        for channel in InputChannel::iter() {
            if snapshot.is_down(channel) && !self.previous.is_down(channel) {
                edges |= channel.edge_flag();
            }
        }
        self.previous = *snapshot;
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_produces_one_edge() {
        let mut detector = EdgeDetector::new();
        let mut snapshot = InputSnapshot::at(Point::new(10, 10));

        snapshot.primary = true;
        assert_eq!(detector.advance(&snapshot), InputEdges::PRIMARY);
    }

    #[test]
    fn holding_does_not_repeat_the_edge() {
        let mut detector = EdgeDetector::new();
        let mut snapshot = InputSnapshot::default();
        snapshot.rotate_cw = true;

        assert_eq!(detector.advance(&snapshot), InputEdges::ROTATE_CW);
        for _ in 0..10 {
            assert_eq!(detector.advance(&snapshot), InputEdges::empty());
        }
    }

    #[test]
    fn release_then_press_fires_again() {
        let mut detector = EdgeDetector::new();
        let mut snapshot = InputSnapshot::default();

        snapshot.deselect = true;
        assert_eq!(detector.advance(&snapshot), InputEdges::DESELECT);

        snapshot.deselect = false;
        assert_eq!(detector.advance(&snapshot), InputEdges::empty());

        snapshot.deselect = true;
        assert_eq!(detector.advance(&snapshot), InputEdges::DESELECT);
    }

    #[test]
    fn simultaneous_presses_all_qualify() {
        let mut detector = EdgeDetector::new();
        let snapshot = InputSnapshot {
            primary: true,
            quit: true,
            ..InputSnapshot::default()
        };

        let edges = detector.advance(&snapshot);
        assert!(edges.contains(InputEdges::PRIMARY));
        assert!(edges.contains(InputEdges::QUIT));
        assert!(!edges.contains(InputEdges::SECONDARY));
    }

    #[test]
    fn every_channel_has_a_distinct_flag() {
        let mut seen = InputEdges::empty();
        for channel in InputChannel::iter() {
            let flag = channel.edge_flag();
            assert!(!seen.intersects(flag));
            seen |= flag;
        }
    }
}
