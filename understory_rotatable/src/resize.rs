// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotation-aware resizing.
//!
//! ## Usage
//!
//! 1) On press over a resize handle, call [`ResizeState::press`] with the
//!    element's current geometry. Apply the returned handle markers and cursor.
//! 2) On every pointer move, call [`ResizeState::drag`] and write the changed
//!    properties from [`ResizeTick::changes`] to the element.
//! 3) On release, call [`ResizeState::release`].
//!
//! The pointer delta is rotated into the element's unrotated frame before the
//! [`ResizeEngine`] sees it, so the engine's per-handle rules work as if the
//! element were not rotated. The engine's proposal is then corrected so the
//! handle opposite the dragged one stays where the user sees it.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Size, Vec2};
use ui_events::keyboard::Modifiers;
use ui_events::pointer::PointerButton;
use understory_transform_decompose::decompose;

use crate::anchor::opposite_anchor;
use crate::axis::{Axis, HandleMarkers};
use crate::correction::{resize_correction, round_hundredths};
use crate::engine::{ResizeEngine, ResizeOrigin};
use crate::marker::{BodyCursor, Marker, MarkerChange};
use crate::options::ResizeOptions;

/// The element geometry a resize starts from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeGeometry {
    /// The element's current transform.
    pub transform: Affine,
    /// `left`/`top` relative to the offset parent.
    pub position: Point,
    /// Layout width and height.
    pub size: Size,
    /// Origin of the offset parent's content box in page coordinates.
    pub parent_origin: Vec2,
}

impl ResizeGeometry {
    /// Geometry for an element at `position` with `size` and no transform.
    #[must_use]
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            transform: Affine::IDENTITY,
            position,
            size,
            parent_origin: Vec2::ZERO,
        }
    }

    /// Sets the element transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Sets the offset parent's origin.
    #[must_use]
    pub fn with_parent_origin(mut self, parent_origin: Vec2) -> Self {
        self.parent_origin = parent_origin;
        self
    }
}

/// State captured at press time and read throughout the interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeSnapshot {
    /// The handle being dragged.
    pub axis: Axis,
    /// Size at press time.
    pub original_size: Size,
    /// Position at press time.
    pub original_position: Point,
    /// Pointer position at press time.
    pub original_pointer: Point,
    /// Where the opposite handle appeared at press time.
    pub anchor: Point,
    /// Element rotation in radians.
    pub rotation: f64,
    /// Width over height, `1` for degenerate sizes.
    pub aspect_ratio: f64,
    /// Origin of the offset parent.
    pub parent_origin: Vec2,
}

/// Interaction context handed to engine hooks and returned to the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeUi {
    /// The handle being dragged.
    pub axis: Axis,
    /// Position at press time.
    pub original_position: Point,
    /// Size at press time.
    pub original_size: Size,
    /// Current position.
    pub position: Point,
    /// Current size.
    pub size: Size,
}

/// Returned when a resize starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeStart {
    /// Visual direction of every handle for the current rotation.
    pub handles: HandleMarkers,
    /// Body cursor for the duration of the drag, following the visual
    /// direction of the dragged handle.
    pub cursor: BodyCursor,
    /// Interaction context.
    pub ui: ResizeUi,
}

impl ResizeStart {
    /// All marker changes to apply at start: one per handle plus the
    /// element's resizing marker.
    pub fn marker_changes(&self) -> impl Iterator<Item = MarkerChange> + '_ {
        self.handles
            .changes()
            .chain(core::iter::once(MarkerChange::set(Marker::Resizing)))
    }
}

/// Properties that changed during a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResizeChanges {
    /// New `left`, if it changed.
    pub left: Option<f64>,
    /// New `top`, if it changed.
    pub top: Option<f64>,
    /// New width, if it changed.
    pub width: Option<f64>,
    /// New height, if it changed.
    pub height: Option<f64>,
}

impl ResizeChanges {
    /// Returns `true` if nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.top.is_none() && self.width.is_none() && self.height.is_none()
    }
}

/// Result of a drag tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeTick {
    /// Properties to write to the element.
    pub changes: ResizeChanges,
    /// Interaction context after the tick.
    pub ui: ResizeUi,
}

/// Returned when a resize ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeStop {
    /// Interaction context at release.
    pub ui: ResizeUi,
    /// The element's resizing marker, to be removed.
    pub marker: MarkerChange,
    /// Body cursor reset.
    pub cursor: BodyCursor,
}

#[derive(Clone, Copy, Debug)]
struct Active {
    snapshot: ResizeSnapshot,
    position: Point,
    size: Size,
    /// Last `left`/`top` the engine asked for, independent of corrections.
    last_data: Point,
}

impl Active {
    fn ui(&self) -> ResizeUi {
        ResizeUi {
            axis: self.snapshot.axis,
            original_position: self.snapshot.original_position,
            original_size: self.snapshot.original_size,
            position: self.position,
            size: self.size,
        }
    }

    fn anchor(&self) -> Point {
        opposite_anchor(
            self.snapshot.axis,
            self.position + self.snapshot.parent_origin,
            self.size,
            self.snapshot.rotation,
        )
    }
}

/// Press/drag/release state machine for resizing a possibly rotated element.
///
/// ```rust
/// use kurbo::{Point, Size};
/// use understory_rotatable::{AxisResizeEngine, Axis, ResizeGeometry, ResizeState};
/// use understory_rotatable::{Modifiers, PointerButton};
///
/// let mut engine = AxisResizeEngine::new();
/// let mut resize = ResizeState::new();
/// let geometry = ResizeGeometry::new(Point::ORIGIN, Size::new(100.0, 100.0));
///
/// resize.press(Axis::Se, geometry, Point::new(100.0, 100.0), PointerButton::Primary, &mut engine);
/// let tick = resize
///     .drag(Point::new(150.0, 150.0), Modifiers::empty(), &mut engine)
///     .unwrap();
/// assert_eq!(tick.ui.size, Size::new(150.0, 150.0));
/// assert_eq!(tick.ui.position, Point::ORIGIN);
/// resize.release(&mut engine);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ResizeState {
    options: ResizeOptions,
    active: Option<Active>,
}

impl ResizeState {
    /// Idle state with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle state with the given options.
    #[must_use]
    pub fn with_options(options: ResizeOptions) -> Self {
        Self {
            options,
            active: None,
        }
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &ResizeOptions {
        &self.options
    }

    /// Returns `true` between press and release.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The press-time snapshot, while active.
    #[must_use]
    pub fn snapshot(&self) -> Option<&ResizeSnapshot> {
        self.active.as_ref().map(|a| &a.snapshot)
    }

    /// Current interaction context, while active.
    #[must_use]
    pub fn ui(&self) -> Option<ResizeUi> {
        self.active.as_ref().map(Active::ui)
    }

    /// Start resizing with `axis` at `pointer`.
    ///
    /// Only the primary button starts a resize; other buttons return `None`.
    /// Pressing again while active restarts from the new geometry.
    pub fn press<E: ResizeEngine + ?Sized>(
        &mut self,
        axis: Axis,
        geometry: ResizeGeometry,
        pointer: Point,
        button: PointerButton,
        engine: &mut E,
    ) -> Option<ResizeStart> {
        if button != PointerButton::Primary {
            return None;
        }
        if self.active.is_some() {
            tracing::debug!(?axis, "resize pressed while active, restarting");
        }

        let rotation = decompose(geometry.transform).rotation;
        let handles = HandleMarkers::for_rotation(rotation);
        let size = geometry.size;
        let aspect_ratio = self
            .options
            .aspect_ratio
            .unwrap_or_else(|| aspect_ratio_of(size));

        let mut active = Active {
            snapshot: ResizeSnapshot {
                axis,
                original_size: size,
                original_position: geometry.position,
                original_pointer: pointer,
                anchor: Point::ORIGIN,
                rotation,
                aspect_ratio,
                parent_origin: geometry.parent_origin,
            },
            position: geometry.position,
            size,
            last_data: geometry.position,
        };
        active.snapshot.anchor = active.anchor();

        let ui = active.ui();
        self.active = Some(active);
        tracing::debug!(
            ?axis,
            rotation,
            anchor = ?active.snapshot.anchor,
            "resize start"
        );
        engine.start(&ui);

        Some(ResizeStart {
            handles,
            cursor: BodyCursor(Some(handles.visual(axis))),
            ui,
        })
    }

    /// Process a pointer move.
    ///
    /// Returns `None` when no resize is active. The returned changes are empty
    /// when nothing moved, in which case the engine's `resized` hook is not
    /// called.
    pub fn drag<E: ResizeEngine + ?Sized>(
        &mut self,
        pointer: Point,
        modifiers: Modifiers,
        engine: &mut E,
    ) -> Option<ResizeTick> {
        let keep_aspect_ratio = self.options.aspect_ratio.is_some();
        let active = self.active.as_mut()?;
        let snapshot = active.snapshot;
        let prev_position = active.position;
        let prev_size = active.size;

        let (sin, cos) = snapshot.rotation.sin_cos();

        // Pointer movement in the element's unrotated frame.
        let raw = pointer - snapshot.original_pointer;
        let local = Vec2::new(raw.x * cos + raw.y * sin, raw.y * cos - raw.x * sin);

        let origin = ResizeOrigin {
            position: snapshot.original_position,
            size: snapshot.original_size,
            aspect_ratio: snapshot.aspect_ratio,
            keep_aspect_ratio,
        };
        let proposed = engine.propose(snapshot.axis, &origin, local, modifiers);
        tracing::trace!(?raw, ?local, ?proposed, "resize proposal");

        active.size = Size::new(
            proposed.width.unwrap_or(active.size.width),
            proposed.height.unwrap_or(active.size.height),
        );

        // The engine positions the unrotated box; rotate its incremental
        // move back into screen space. Absent left/top mean unchanged.
        let data = Point::new(
            proposed.left.unwrap_or(active.last_data.x),
            proposed.top.unwrap_or(active.last_data.y),
        );
        let diff = data - active.last_data;
        active.position.x += round_hundredths(diff.x * cos - diff.y * sin);
        active.position.y += round_hundredths(diff.y * cos + diff.x * sin);
        active.last_data = data;

        engine.resize(&active.ui());

        // Size delta is passed as start-of-tick minus new, and the vertical
        // component is subtracted; together this moves the box by
        // (R - I) * (size change / 2) which keeps its top-left corner fixed.
        let offset = resize_correction(prev_size, prev_size - active.size, snapshot.rotation);
        active.position.x += offset.x;
        active.position.y -= offset.y;

        let drift = snapshot.anchor - active.anchor();
        active.position += drift;
        tracing::trace!(?drift, position = ?active.position, size = ?active.size, "resize tick");

        let changes = ResizeChanges {
            left: (active.position.x != prev_position.x).then_some(active.position.x),
            top: (active.position.y != prev_position.y).then_some(active.position.y),
            width: (active.size.width != prev_size.width).then_some(active.size.width),
            height: (active.size.height != prev_size.height).then_some(active.size.height),
        };
        let ui = active.ui();

        if engine.has_proportional_elements() {
            engine.proportionally_resize(active.size);
        }
        if !changes.is_empty() {
            engine.resized(&ui);
        }

        Some(ResizeTick { changes, ui })
    }

    /// End the resize. Returns `None` when no resize was active.
    pub fn release<E: ResizeEngine + ?Sized>(&mut self, engine: &mut E) -> Option<ResizeStop> {
        let active = self.active.take()?;
        let ui = active.ui();
        tracing::debug!(position = ?ui.position, size = ?ui.size, "resize stop");
        engine.stop(&ui);
        Some(ResizeStop {
            ui,
            marker: MarkerChange::clear(Marker::Resizing),
            cursor: BodyCursor(None),
        })
    }
}

/// Width over height, falling back to `1` when that is not a usable ratio.
fn aspect_ratio_of(size: Size) -> f64 {
    let ratio = size.width / size.height;
    if ratio.is_finite() && ratio != 0.0 {
        ratio
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{AxisResizeEngine, ProposedRect};
    use alloc::vec::Vec;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[derive(Default)]
    struct Recording {
        inner: AxisResizeEngine,
        calls: Vec<&'static str>,
        deltas: Vec<Vec2>,
    }

    impl ResizeEngine for Recording {
        fn propose(
            &mut self,
            axis: Axis,
            origin: &ResizeOrigin,
            delta: Vec2,
            modifiers: Modifiers,
        ) -> ProposedRect {
            self.deltas.push(delta);
            self.inner.propose(axis, origin, delta, modifiers)
        }
        fn start(&mut self, _ui: &ResizeUi) {
            self.calls.push("start");
        }
        fn resize(&mut self, _ui: &ResizeUi) {
            self.calls.push("resize");
        }
        fn resized(&mut self, _ui: &ResizeUi) {
            self.calls.push("resized");
        }
        fn stop(&mut self, _ui: &ResizeUi) {
            self.calls.push("stop");
        }
        fn has_proportional_elements(&self) -> bool {
            true
        }
        fn proportionally_resize(&mut self, _size: Size) {
            self.calls.push("proportional");
        }
    }

    fn square() -> ResizeGeometry {
        ResizeGeometry::new(Point::ORIGIN, Size::new(100.0, 100.0))
    }

    #[test]
    fn non_primary_button_does_not_start() {
        let mut engine = Recording::default();
        let mut resize = ResizeState::new();
        let start = resize.press(
            Axis::Se,
            square(),
            Point::ORIGIN,
            PointerButton::Secondary,
            &mut engine,
        );
        assert!(start.is_none());
        assert!(!resize.is_active());
        assert!(engine.calls.is_empty());
    }

    #[test]
    fn drag_and_release_when_idle_are_noops() {
        let mut engine = Recording::default();
        let mut resize = ResizeState::new();
        assert!(resize.drag(Point::ORIGIN, Modifiers::empty(), &mut engine).is_none());
        assert!(resize.release(&mut engine).is_none());
        assert!(engine.calls.is_empty());
    }

    #[test]
    fn lifecycle_hooks_fire_in_order() {
        let mut engine = Recording::default();
        let mut resize = ResizeState::new();
        resize.press(Axis::E, square(), Point::new(100.0, 50.0), PointerButton::Primary, &mut engine);
        resize.drag(Point::new(120.0, 50.0), Modifiers::empty(), &mut engine);
        resize.drag(Point::new(120.0, 50.0), Modifiers::empty(), &mut engine);
        resize.release(&mut engine);
        assert_eq!(
            engine.calls,
            [
                "start",
                "resize",
                "proportional",
                "resized",
                "resize",
                "proportional",
                "stop"
            ]
        );
    }

    #[test]
    fn unchanged_tick_emits_nothing() {
        let mut engine = Recording::default();
        let mut resize = ResizeState::new();
        resize.press(Axis::S, square(), Point::new(50.0, 100.0), PointerButton::Primary, &mut engine);
        let tick = resize
            .drag(Point::new(50.0, 100.0), Modifiers::empty(), &mut engine)
            .unwrap();
        assert!(tick.changes.is_empty());
    }

    #[test]
    fn east_drag_only_changes_width() {
        let mut engine = Recording::default();
        let mut resize = ResizeState::new();
        resize.press(Axis::E, square(), Point::new(100.0, 50.0), PointerButton::Primary, &mut engine);
        let tick = resize
            .drag(Point::new(130.0, 80.0), Modifiers::empty(), &mut engine)
            .unwrap();
        assert_eq!(
            tick.changes,
            ResizeChanges {
                width: Some(130.0),
                ..ResizeChanges::default()
            }
        );
    }

    #[test]
    fn pointer_delta_is_rotated_into_local_frame() {
        let mut engine = Recording::default();
        let mut resize = ResizeState::new();
        let geometry = square().with_transform(Affine::rotate(FRAC_PI_2));
        resize.press(Axis::E, geometry, Point::ORIGIN, PointerButton::Primary, &mut engine);
        resize.drag(Point::new(0.0, 30.0), Modifiers::empty(), &mut engine);
        // Moving down on screen moves along the element's own x axis.
        let delta = engine.deltas[0];
        assert!((delta.x - 30.0).abs() < 1e-9);
        assert!(delta.y.abs() < 1e-9);
    }

    #[test]
    fn snapshot_records_press_state() {
        let mut engine = Recording::default();
        let mut resize = ResizeState::new();
        let geometry = ResizeGeometry::new(Point::new(5.0, 6.0), Size::new(40.0, 20.0))
            .with_transform(Affine::rotate(FRAC_PI_4))
            .with_parent_origin(Vec2::new(100.0, 0.0));
        let start = resize
            .press(Axis::Nw, geometry, Point::new(1.0, 2.0), PointerButton::Primary, &mut engine)
            .unwrap();
        let snapshot = *resize.snapshot().unwrap();
        assert_eq!(snapshot.axis, Axis::Nw);
        assert_eq!(snapshot.original_pointer, Point::new(1.0, 2.0));
        assert_eq!(snapshot.aspect_ratio, 2.0);
        assert!((snapshot.rotation - FRAC_PI_4).abs() < 1e-9);
        assert_eq!(start.cursor, BodyCursor(Some(Axis::N)));
        let expected = opposite_anchor(Axis::Nw, Point::new(105.0, 6.0), geometry.size, snapshot.rotation);
        assert!(snapshot.anchor.distance(expected) < 1e-9);
        assert_eq!(start.marker_changes().count(), 9);
    }

    #[test]
    fn degenerate_size_has_unit_aspect_ratio() {
        assert_eq!(aspect_ratio_of(Size::new(0.0, 0.0)), 1.0);
        assert_eq!(aspect_ratio_of(Size::new(10.0, 0.0)), 1.0);
        assert_eq!(aspect_ratio_of(Size::new(0.0, 10.0)), 1.0);
        assert_eq!(aspect_ratio_of(Size::new(30.0, 10.0)), 3.0);
    }

    #[test]
    fn configured_aspect_ratio_wins() {
        let mut engine = Recording::default();
        let mut resize = ResizeState::with_options(ResizeOptions::default().with_aspect_ratio(0.5));
        resize.press(Axis::Se, square(), Point::ORIGIN, PointerButton::Primary, &mut engine);
        assert_eq!(resize.snapshot().unwrap().aspect_ratio, 0.5);

        // A configured ratio is kept without holding shift.
        let tick = resize
            .drag(Point::new(10.0, 10.0), Modifiers::empty(), &mut engine)
            .unwrap();
        assert_eq!(tick.ui.size, Size::new(55.0, 110.0));
    }

    #[test]
    fn release_clears_snapshot() {
        let mut engine = Recording::default();
        let mut resize = ResizeState::new();
        resize.press(Axis::Se, square(), Point::ORIGIN, PointerButton::Primary, &mut engine);
        let stop = resize.release(&mut engine).unwrap();
        assert_eq!(stop.marker, MarkerChange::clear(Marker::Resizing));
        assert!(resize.snapshot().is_none());
        assert!(resize.release(&mut engine).is_none());
    }
}
