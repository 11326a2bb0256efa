// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual state markers emitted for the presentation layer.
//!
//! The interaction state machines never touch a document. Instead they emit
//! [`MarkerChange`] values describing which state class should be present on
//! which node; a thin host adapter turns these into class list edits (or any
//! other styling mechanism).

use crate::axis::Axis;

/// A piece of visual state owned by the rotate/resize interactions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// The element participates in rotation.
    Rotatable,
    /// The node acting as the rotate handle.
    RotateHandle,
    /// The element is being rotated.
    Rotating,
    /// Some element in the document is being rotated.
    BodyRotating,
    /// The element is being resized.
    Resizing,
    /// The resize handle `handle` visually points towards `visual`.
    ///
    /// A handle carries at most one of these; setting one replaces any
    /// other `HandleRotated` marker on the same handle.
    HandleRotated {
        /// The declared handle the marker is placed on.
        handle: Axis,
        /// The direction the handle appears to point in.
        visual: Axis,
    },
}

/// Which node a marker belongs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerScope {
    /// The rotated/resized element itself.
    Element,
    /// The rotate handle.
    RotateHandle,
    /// The resize handle for the given axis.
    ResizeHandle(Axis),
    /// The document body.
    Body,
}

impl Marker {
    /// CSS class name for this marker.
    #[must_use]
    pub const fn class_name(&self) -> &'static str {
        match self {
            Self::Rotatable => "ui-rotatable",
            Self::RotateHandle => "ui-rotatable-handle",
            Self::Rotating => "ui-rotatable-rotating",
            Self::BodyRotating => "ui-interaction-rotatable",
            Self::Resizing => "ui-resizable-resizing",
            Self::HandleRotated { visual, .. } => match visual {
                Axis::N => "ui-resizable-rotated-n",
                Axis::Ne => "ui-resizable-rotated-ne",
                Axis::E => "ui-resizable-rotated-e",
                Axis::Se => "ui-resizable-rotated-se",
                Axis::S => "ui-resizable-rotated-s",
                Axis::Sw => "ui-resizable-rotated-sw",
                Axis::W => "ui-resizable-rotated-w",
                Axis::Nw => "ui-resizable-rotated-nw",
            },
        }
    }

    /// The node this marker is applied to.
    #[must_use]
    pub const fn scope(&self) -> MarkerScope {
        match self {
            Self::Rotatable | Self::Rotating | Self::Resizing => MarkerScope::Element,
            Self::RotateHandle => MarkerScope::RotateHandle,
            Self::BodyRotating => MarkerScope::Body,
            Self::HandleRotated { handle, .. } => MarkerScope::ResizeHandle(*handle),
        }
    }
}

/// When a marker change should take effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum MarkerTiming {
    /// Apply now.
    #[default]
    Immediate,
    /// Apply on the next turn of the host's event loop.
    ///
    /// Used when removing the body marker on rotate release so that a click
    /// handler firing right after the release still sees it.
    NextTick,
}

/// A request to add or remove a marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MarkerChange {
    /// The marker.
    pub marker: Marker,
    /// `true` to add the marker, `false` to remove it.
    pub active: bool,
    /// When to apply the change.
    pub timing: MarkerTiming,
}

impl MarkerChange {
    /// Add `marker` immediately.
    #[must_use]
    pub const fn set(marker: Marker) -> Self {
        Self {
            marker,
            active: true,
            timing: MarkerTiming::Immediate,
        }
    }

    /// Remove `marker` immediately.
    #[must_use]
    pub const fn clear(marker: Marker) -> Self {
        Self {
            marker,
            active: false,
            timing: MarkerTiming::Immediate,
        }
    }

    /// Defer this change to the next tick.
    #[must_use]
    pub const fn deferred(self) -> Self {
        Self {
            timing: MarkerTiming::NextTick,
            ..self
        }
    }
}

/// Cursor forced on the document body for the duration of a resize.
///
/// `None` restores the default cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct BodyCursor(pub Option<Axis>);

impl BodyCursor {
    /// CSS `cursor` value, empty when the cursor should be reset.
    #[must_use]
    pub const fn css(&self) -> &'static str {
        match self.0 {
            Some(axis) => axis.cursor(),
            None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names_follow_visual_axis() {
        let marker = Marker::HandleRotated {
            handle: Axis::Ne,
            visual: Axis::Se,
        };
        assert_eq!(marker.class_name(), "ui-resizable-rotated-se");
        assert_eq!(marker.scope(), MarkerScope::ResizeHandle(Axis::Ne));
    }

    #[test]
    fn body_and_element_scopes() {
        assert_eq!(Marker::BodyRotating.scope(), MarkerScope::Body);
        assert_eq!(Marker::Rotating.scope(), MarkerScope::Element);
        assert_eq!(Marker::RotateHandle.scope(), MarkerScope::RotateHandle);
    }

    #[test]
    fn deferred_keeps_marker_and_state() {
        let change = MarkerChange::clear(Marker::BodyRotating).deferred();
        assert_eq!(change.marker, Marker::BodyRotating);
        assert!(!change.active);
        assert_eq!(change.timing, MarkerTiming::NextTick);
    }

    #[test]
    fn body_cursor_uses_visual_axis() {
        assert_eq!(BodyCursor(Some(Axis::Sw)).css(), "sw-resize");
        assert_eq!(BodyCursor::default().css(), "");
    }
}
