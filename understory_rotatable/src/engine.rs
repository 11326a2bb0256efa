// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between rotation-aware resizing and the resize engine it drives.
//!
//! [`ResizeState`](crate::ResizeState) does not know how a handle changes a
//! box; that is the engine's job, along with any aspect-ratio or size rules
//! it enforces. The state machine only hands the engine pointer
//! deltas that have been rotated into the element's unrotated frame, and
//! then corrects the position the engine proposes.

use kurbo::{Point, Size, Vec2};
use ui_events::keyboard::Modifiers;

use crate::axis::Axis;
use crate::resize::ResizeUi;

/// Geometry captured when a resize starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeOrigin {
    /// Position (`left`, `top`) at press time.
    pub position: Point,
    /// Size at press time.
    pub size: Size,
    /// Width over height at press time, or the configured ratio.
    pub aspect_ratio: f64,
    /// Whether a ratio was configured, which asks the engine to keep it.
    pub keep_aspect_ratio: bool,
}

/// What an engine wants the box to become.
///
/// `None` means the engine does not touch that property for the current axis
/// (for example `left` while dragging the east handle).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProposedRect {
    /// Proposed `left`.
    pub left: Option<f64>,
    /// Proposed `top`.
    pub top: Option<f64>,
    /// Proposed width.
    pub width: Option<f64>,
    /// Proposed height.
    pub height: Option<f64>,
}

/// A resize engine that turns per-axis pointer deltas into box geometry.
///
/// Only [`propose`](Self::propose) is required. The remaining methods are
/// lifecycle notifications so that plugins and listeners registered with the
/// engine keep firing; they default to doing nothing.
pub trait ResizeEngine {
    /// Propose new geometry for dragging `axis` by `delta` from the press
    /// point.
    ///
    /// `delta` is already expressed in the element's unrotated frame. The
    /// returned rect must already respect the engine's own aspect-ratio and
    /// size rules.
    fn propose(
        &mut self,
        axis: Axis,
        origin: &ResizeOrigin,
        delta: Vec2,
        modifiers: Modifiers,
    ) -> ProposedRect;

    /// A resize interaction started.
    fn start(&mut self, _ui: &ResizeUi) {}

    /// Plugin hook, called each tick once the proposed size has been taken
    /// and before rotation corrections are applied.
    fn resize(&mut self, _ui: &ResizeUi) {}

    /// The element visibly changed this tick.
    fn resized(&mut self, _ui: &ResizeUi) {}

    /// The resize interaction ended.
    fn stop(&mut self, _ui: &ResizeUi) {}

    /// Whether the engine keeps other elements sized along with the box.
    fn has_proportional_elements(&self) -> bool {
        false
    }

    /// Resize dependent elements to match `size`.
    ///
    /// Called every tick when [`has_proportional_elements`] is `true`,
    /// including ticks where nothing changed.
    ///
    /// [`has_proportional_elements`]: Self::has_proportional_elements
    fn proportionally_resize(&mut self, _size: Size) {}
}

/// A minimal engine implementing the standard handle rules.
///
/// - East grows the width by `dx`; west moves `left` by `dx` and shrinks the
///   width by the same amount.
/// - South grows the height by `dy`; north moves `top` and shrinks the height.
/// - Corners combine their two edges.
///
/// Sizes are clamped to `[min_size, max_size]`; when a west or north drag is
/// clamped the opposite edge stays put.
///
/// The origin's aspect ratio is kept while shift is held, when the origin
/// asks for it, or always after
/// [`with_aspect_ratio_lock`](Self::with_aspect_ratio_lock). A proposed
/// height wins over a proposed width. The size limits still apply afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisResizeEngine {
    min_size: Size,
    max_size: Size,
    lock_aspect_ratio: bool,
}

impl Default for AxisResizeEngine {
    fn default() -> Self {
        Self {
            min_size: Size::new(10.0, 10.0),
            max_size: Size::new(f64::INFINITY, f64::INFINITY),
            lock_aspect_ratio: false,
        }
    }
}

impl AxisResizeEngine {
    /// Engine with the default limits (at least 10×10, unbounded above).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the size limits.
    ///
    /// The limits are normalized so that `min <= max` on each axis.
    #[must_use]
    pub fn with_limits(mut self, min_size: Size, max_size: Size) -> Self {
        self.min_size = Size::new(
            min_size.width.min(max_size.width),
            min_size.height.min(max_size.height),
        );
        self.max_size = Size::new(
            min_size.width.max(max_size.width),
            min_size.height.max(max_size.height),
        );
        self
    }

    /// Always keep the origin's aspect ratio.
    #[must_use]
    pub fn with_aspect_ratio_lock(mut self, lock: bool) -> Self {
        self.lock_aspect_ratio = lock;
        self
    }

    /// Minimum size.
    #[must_use]
    pub fn min_size(&self) -> Size {
        self.min_size
    }

    /// Maximum size.
    #[must_use]
    pub fn max_size(&self) -> Size {
        self.max_size
    }
}

impl ResizeEngine for AxisResizeEngine {
    fn propose(
        &mut self,
        axis: Axis,
        origin: &ResizeOrigin,
        delta: Vec2,
        modifiers: Modifiers,
    ) -> ProposedRect {
        let ResizeOrigin {
            position,
            size,
            aspect_ratio,
            keep_aspect_ratio,
        } = *origin;
        let mut rect = ProposedRect::default();

        if axis.is_east() {
            rect.width = Some(size.width + delta.x);
        }
        if axis.is_west() {
            rect.left = Some(position.x + delta.x);
            rect.width = Some(size.width - delta.x);
        }
        if axis.is_south() {
            rect.height = Some(size.height + delta.y);
        }
        if axis.is_north() {
            rect.top = Some(position.y + delta.y);
            rect.height = Some(size.height - delta.y);
        }

        if self.lock_aspect_ratio || keep_aspect_ratio || modifiers.shift() {
            if let Some(height) = rect.height {
                rect.width = Some(height * aspect_ratio);
            } else if let Some(width) = rect.width {
                rect.height = Some(width / aspect_ratio);
            }
        }

        if let Some(width) = rect.width {
            let clamped = width.max(self.min_size.width).min(self.max_size.width);
            if axis.is_west() {
                rect.left = Some(position.x + size.width - clamped);
            }
            rect.width = Some(clamped);
        }
        if let Some(height) = rect.height {
            let clamped = height.max(self.min_size.height).min(self.max_size.height);
            if axis.is_north() {
                rect.top = Some(position.y + size.height - clamped);
            }
            rect.height = Some(clamped);
        }
        rect
    }
}
