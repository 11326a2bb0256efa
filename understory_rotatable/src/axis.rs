// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compass axes for resize handles and their remapping under rotation.

use core::f64::consts::PI;
use core::fmt;
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Vec2;
use thiserror::Error;

use crate::marker::{Marker, MarkerChange};

/// One of the eight resize handle directions.
///
/// The declaration order is clockwise starting at north, which is what the
/// modular arithmetic in [`Axis::rotated_by`] relies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Axis {
    /// Top edge.
    N,
    /// Top-right corner.
    Ne,
    /// Right edge.
    E,
    /// Bottom-right corner.
    Se,
    /// Bottom edge.
    S,
    /// Bottom-left corner.
    Sw,
    /// Left edge.
    W,
    /// Top-left corner.
    Nw,
}

impl Axis {
    /// All axes in clockwise order, starting at north.
    pub const ALL: [Self; 8] = [
        Self::N,
        Self::Ne,
        Self::E,
        Self::Se,
        Self::S,
        Self::Sw,
        Self::W,
        Self::Nw,
    ];

    /// Position of this axis in [`Axis::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The axis `octants` steps of 45° clockwise from this one.
    #[must_use]
    pub const fn rotated_by(self, octants: usize) -> Self {
        Self::ALL[(self.index() + octants % 8) % 8]
    }

    /// The handle directly across the box.
    #[must_use]
    pub const fn opposite(self) -> Self {
        self.rotated_by(4)
    }

    /// The axis that appears in this handle's place once the box is rotated
    /// by `rotation` radians.
    #[must_use]
    pub fn visual(self, rotation: f64) -> Self {
        self.rotated_by(octant(rotation))
    }

    /// Handle location as a fraction of the box size, from the top-left corner.
    #[must_use]
    pub const fn anchor_fraction(self) -> Vec2 {
        match self {
            Self::N => Vec2::new(0.5, 0.0),
            Self::Ne => Vec2::new(1.0, 0.0),
            Self::E => Vec2::new(1.0, 0.5),
            Self::Se => Vec2::new(1.0, 1.0),
            Self::S => Vec2::new(0.5, 1.0),
            Self::Sw => Vec2::new(0.0, 1.0),
            Self::W => Vec2::new(0.0, 0.5),
            Self::Nw => Vec2::new(0.0, 0.0),
        }
    }

    /// Returns `true` if dragging this handle moves the top edge.
    #[must_use]
    pub const fn is_north(self) -> bool {
        matches!(self, Self::N | Self::Ne | Self::Nw)
    }

    /// Returns `true` if dragging this handle moves the bottom edge.
    #[must_use]
    pub const fn is_south(self) -> bool {
        matches!(self, Self::S | Self::Se | Self::Sw)
    }

    /// Returns `true` if dragging this handle moves the right edge.
    #[must_use]
    pub const fn is_east(self) -> bool {
        matches!(self, Self::E | Self::Ne | Self::Se)
    }

    /// Returns `true` if dragging this handle moves the left edge.
    #[must_use]
    pub const fn is_west(self) -> bool {
        matches!(self, Self::W | Self::Nw | Self::Sw)
    }

    /// Lowercase compass name (`"n"`, `"ne"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::Ne => "ne",
            Self::E => "e",
            Self::Se => "se",
            Self::S => "s",
            Self::Sw => "sw",
            Self::W => "w",
            Self::Nw => "nw",
        }
    }

    /// CSS cursor name for resizing along this axis.
    #[must_use]
    pub const fn cursor(self) -> &'static str {
        match self {
            Self::N => "n-resize",
            Self::Ne => "ne-resize",
            Self::E => "e-resize",
            Self::Se => "se-resize",
            Self::S => "s-resize",
            Self::Sw => "sw-resize",
            Self::W => "w-resize",
            Self::Nw => "nw-resize",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown compass name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown resize axis")]
pub struct AxisParseError;

impl FromStr for Axis {
    type Err = AxisParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|axis| axis.as_str().eq_ignore_ascii_case(s))
            .ok_or(AxisParseError)
    }
}

/// Number of 45° steps `rotation` turns the box clockwise, in `0..8`.
#[must_use]
pub fn octant(rotation: f64) -> usize {
    let degrees = rotation * 180.0 / PI;
    if !degrees.is_finite() {
        return 0;
    }
    let mut degrees = degrees % 360.0;
    if degrees < 0.0 {
        degrees += 360.0;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "degrees is in [0, 360], so the quotient is in 0..=8"
    )]
    let steps = (degrees / 45.0).round() as usize;
    steps % 8
}

/// Which direction each resize handle appears to point for a given rotation.
///
/// Hosts use this to pick cursors: the handle declared as `ne` on a box
/// rotated by a quarter turn sits where `se` would be, so it should show the
/// `se-resize` cursor. The table must be recomputed whenever the rotation may
/// have changed, which in practice means at every resize press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandleMarkers {
    octants: usize,
}

impl HandleMarkers {
    /// Compute the table for `rotation` radians.
    #[must_use]
    pub fn for_rotation(rotation: f64) -> Self {
        Self {
            octants: octant(rotation),
        }
    }

    /// Number of 45° steps the handles are shifted by.
    #[must_use]
    pub fn octants(&self) -> usize {
        self.octants
    }

    /// The visual direction of `handle`.
    #[must_use]
    pub fn visual(&self, handle: Axis) -> Axis {
        handle.rotated_by(self.octants)
    }

    /// The declared handle currently shown at `visual`.
    #[must_use]
    pub fn handle_at(&self, visual: Axis) -> Axis {
        visual.rotated_by(8 - self.octants)
    }

    /// `(handle, visual)` pairs for all eight handles.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, Axis)> + '_ {
        Axis::ALL
            .into_iter()
            .map(|handle| (handle, self.visual(handle)))
    }

    /// One marker per handle; each replaces any previous rotated marker on
    /// that handle.
    pub fn changes(&self) -> impl Iterator<Item = MarkerChange> + '_ {
        self.iter().map(|(handle, visual)| {
            MarkerChange::set(Marker::HandleRotated { handle, visual })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clockwise_order_matches_index() {
        for (i, axis) in Axis::ALL.into_iter().enumerate() {
            assert_eq!(axis.index(), i);
        }
    }

    #[test]
    fn opposites() {
        assert_eq!(Axis::N.opposite(), Axis::S);
        assert_eq!(Axis::Se.opposite(), Axis::Nw);
        assert_eq!(Axis::E.opposite(), Axis::W);
        assert_eq!(Axis::Sw.opposite(), Axis::Ne);
        for axis in Axis::ALL {
            assert_eq!(axis.opposite().opposite(), axis);
        }
    }

    #[test]
    fn octant_rounds_to_nearest_sector() {
        assert_eq!(octant(0.0), 0);
        assert_eq!(octant(PI / 8.0 - 0.01), 0);
        assert_eq!(octant(PI / 8.0 + 0.01), 1);
        assert_eq!(octant(PI / 2.0), 2);
        assert_eq!(octant(PI), 4);
        assert_eq!(octant(-PI / 2.0), 6);
        assert_eq!(octant(-0.01), 0);
        assert_eq!(octant(2.0 * PI - 0.01), 0);
        assert_eq!(octant(f64::NAN), 0);
    }

    #[test]
    fn zero_rotation_is_identity() {
        let markers = HandleMarkers::for_rotation(0.0);
        for axis in Axis::ALL {
            assert_eq!(markers.visual(axis), axis);
            assert_eq!(axis.visual(0.0), axis);
        }
    }

    #[test]
    fn half_turn_maps_to_opposites() {
        let markers = HandleMarkers::for_rotation(PI);
        assert_eq!(markers.visual(Axis::N), Axis::S);
        assert_eq!(markers.visual(Axis::E), Axis::W);
        assert_eq!(markers.visual(Axis::Ne), Axis::Sw);
        assert_eq!(markers.visual(Axis::Nw), Axis::Se);
        for axis in Axis::ALL {
            assert_eq!(markers.visual(axis), axis.opposite());
        }
    }

    #[test]
    fn quarter_turn_shows_ne_at_se() {
        let markers = HandleMarkers::for_rotation(PI / 2.0);
        assert_eq!(markers.visual(Axis::Ne), Axis::Se);
        assert_eq!(markers.handle_at(Axis::Se), Axis::Ne);
        for axis in Axis::ALL {
            assert_eq!(markers.handle_at(markers.visual(axis)), axis);
        }
    }

    #[test]
    fn every_handle_gets_one_marker() {
        let markers = HandleMarkers::for_rotation(PI / 4.0);
        let mut seen = [false; 8];
        for change in markers.changes() {
            let Marker::HandleRotated { handle, visual } = change.marker else {
                panic!("unexpected marker {:?}", change.marker);
            };
            assert!(change.active);
            assert!(!seen[handle.index()], "{handle} marked twice");
            seen[handle.index()] = true;
            assert_eq!(visual, handle.rotated_by(1));
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn parse_and_display() {
        for axis in Axis::ALL {
            assert_eq!(axis.as_str().parse::<Axis>(), Ok(axis));
        }
        assert_eq!("SE".parse::<Axis>(), Ok(Axis::Se));
        assert_eq!("middle".parse::<Axis>(), Err(AxisParseError));
        assert_eq!(alloc::format!("{}", Axis::Nw), "nw");
        assert_eq!(Axis::Ne.cursor(), "ne-resize");
    }

    #[test]
    fn edges() {
        assert!(Axis::Nw.is_north() && Axis::Nw.is_west());
        assert!(!Axis::Nw.is_south() && !Axis::Nw.is_east());
        assert!(Axis::E.is_east() && !Axis::E.is_north() && !Axis::E.is_south());
    }
}
