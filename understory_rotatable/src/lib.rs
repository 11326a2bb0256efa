// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_rotatable --heading-base-level=0

//! Understory Rotatable: rotate elements with a handle, and resize them while rotated.
//!
//! Resizing is easy as long as a box is axis aligned: dragging the south-east
//! handle grows the width and height and nothing else moves. Once the box is
//! rotated about its center, the same size change also moves every corner,
//! and the handle the user sees at the bottom right may not be the one the
//! layout calls `se`. This crate contains the state machines that keep both
//! interactions predictable:
//!
//! - [`ResizeState`]: press/drag/release for resize handles. Pointer deltas are
//!   rotated into the element's own frame, handed to a [`ResizeEngine`] for
//!   the per-handle rules, and the resulting position is corrected so the
//!   handle opposite the dragged one stays put on screen.
//! - [`Rotatable`]: press/move/release for a rotate handle, with modifier
//!   snapping, a reset gesture and programmatic angle changes.
//! - [`HandleMarkers`]: which direction each resize handle appears to point
//!   for a given rotation, for cursor and styling purposes.
//!
//! Neither state machine touches a document. They return values describing
//! what to write (position, size, transform) and which visual markers to
//! toggle; the host applies them.
//!
//! ## Resizing a rotated element
//!
//! ```rust
//! use core::f64::consts::FRAC_PI_2;
//! use kurbo::{Affine, Point, Size};
//! use understory_rotatable::{
//!     Axis, AxisResizeEngine, Modifiers, PointerButton, ResizeGeometry, ResizeState,
//!     opposite_anchor,
//! };
//!
//! let size = Size::new(100.0, 100.0);
//! let geometry = ResizeGeometry::new(Point::ORIGIN, size)
//!     .with_transform(Affine::rotate_about(FRAC_PI_2, Point::new(50.0, 50.0)));
//!
//! let mut engine = AxisResizeEngine::new();
//! let mut resize = ResizeState::new();
//!
//! // Under a quarter turn the `ne` handle sits at the visual bottom right.
//! let start = resize
//!     .press(Axis::Ne, geometry, Point::new(100.0, 100.0), PointerButton::Primary, &mut engine)
//!     .unwrap();
//! assert_eq!(start.handles.visual(Axis::Ne), Axis::Se);
//!
//! let tick = resize
//!     .drag(Point::new(150.0, 150.0), Modifiers::empty(), &mut engine)
//!     .unwrap();
//! assert_eq!(tick.ui.size, Size::new(150.0, 150.0));
//!
//! // The visual top-left corner did not move.
//! let anchor = opposite_anchor(Axis::Ne, tick.ui.position, tick.ui.size, FRAC_PI_2);
//! assert!(anchor.distance(Point::ORIGIN) < 1.0);
//! ```
//!
//! ## Rotating
//!
//! ```rust
//! use kurbo::{Affine, Point, Rect};
//! use understory_rotatable::{Modifiers, PointerButton, Rotatable, RotatableOptions};
//!
//! let mut rotatable = Rotatable::new(RotatableOptions::new()).unwrap();
//! let bounds = Rect::new(0.0, 0.0, 200.0, 200.0);
//!
//! rotatable.press(bounds, Affine::IDENTITY, Point::new(100.0, 0.0), PointerButton::Primary);
//! // Holding shift snaps to 15° steps.
//! rotatable.pointer_move(Point::new(200.0, 90.0), Modifiers::SHIFT);
//! assert!((rotatable.angle().to_degrees() - 90.0).abs() < 1e-9);
//! rotatable.release();
//! ```
//!
//! The two interactions must not run on the same element at once; hosts are
//! expected to disable one while the other is active.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod anchor;
mod axis;
mod correction;
mod engine;
mod marker;
mod options;
mod resize;
mod rotate;

pub use anchor::opposite_anchor;
pub use axis::{Axis, AxisParseError, HandleMarkers, octant};
pub use correction::{resize_correction, round_hundredths};
pub use engine::{AxisResizeEngine, ProposedRect, ResizeEngine, ResizeOrigin};
pub use marker::{BodyCursor, Marker, MarkerChange, MarkerScope, MarkerTiming};
pub use options::{
    DEFAULT_SNAP_STEP, HandleParent, ResizeOptions, RotatableOptions, RotateHandle,
};
pub use resize::{
    ResizeChanges, ResizeGeometry, ResizeSnapshot, ResizeStart, ResizeState, ResizeStop,
    ResizeTick, ResizeUi,
};
pub use rotate::{
    Interaction, Rotatable, RotateEvent, RotateEvents, RotateStatus, RotateUi, RotationSnapshot,
};

pub use ui_events::keyboard::Modifiers;
pub use ui_events::pointer::PointerButton;
pub use understory_transform_decompose::{Angle, AngleError, DecomposedTransform};
