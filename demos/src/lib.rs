// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless host for the rotate and resize interactions.
//!
//! [`SimulatedElement`] stands in for a styled document node. It applies the
//! values the state machines return (transforms, positions, sizes and visual
//! markers) the way a browser adapter would, so the examples can drive full
//! interactions without a window.

use kurbo::{Affine, Point, Rect, Size, Vec2};
use understory_rotatable::{
    Axis, BodyCursor, HandleParent, MarkerChange, MarkerScope, MarkerTiming, ResizeGeometry,
    ResizeStart, ResizeStop, ResizeTick, RotateEvent,
};
use understory_transform_decompose::write_css_matrix;

const ROTATED_HANDLE_PREFIX: &str = "ui-resizable-rotated-";

/// A positioned element with a transform, class lists and resize handles.
#[derive(Clone, Debug)]
pub struct SimulatedElement {
    tag: &'static str,
    /// `left`/`top` inside the offset parent.
    pub position: Point,
    /// Layout size.
    pub size: Size,
    /// Transform applied about the element's center.
    pub transform: Affine,
    /// Origin of the offset parent on screen.
    pub parent_origin: Vec2,
    classes: Vec<&'static str>,
    body_classes: Vec<&'static str>,
    body_cursor: BodyCursor,
    rotate_handle: Option<(HandleParent, Vec<&'static str>)>,
    resize_handles: [Vec<&'static str>; 8],
    deferred: Vec<MarkerChange>,
}

impl SimulatedElement {
    /// An untransformed element.
    pub fn new(tag: &'static str, position: Point, size: Size) -> Self {
        Self {
            tag,
            position,
            size,
            transform: Affine::IDENTITY,
            parent_origin: Vec2::ZERO,
            classes: Vec::new(),
            body_classes: Vec::new(),
            body_cursor: BodyCursor::default(),
            rotate_handle: None,
            resize_handles: core::array::from_fn(|_| Vec::new()),
            deferred: Vec::new(),
        }
    }

    /// The element's transform mapped to screen space.
    pub fn screen_transform(&self) -> Affine {
        let center = self.layout_rect().center().to_vec2();
        Affine::translate(center) * self.transform * Affine::translate(-center)
    }

    /// Untransformed box on screen.
    pub fn layout_rect(&self) -> Rect {
        Rect::from_origin_size(self.position + self.parent_origin, self.size)
    }

    /// Bounding box of the transformed element on screen.
    pub fn bounds(&self) -> Rect {
        self.screen_transform().transform_rect_bbox(self.layout_rect())
    }

    /// Screen position of the given resize handle.
    pub fn handle_position(&self, axis: Axis) -> Point {
        let f = axis.anchor_fraction();
        let local = self.layout_rect().origin()
            + Vec2::new(f.x * self.size.width, f.y * self.size.height);
        self.screen_transform() * local
    }

    /// Geometry to start a resize from.
    pub fn geometry(&self) -> ResizeGeometry {
        ResizeGeometry::new(self.position, self.size)
            .with_transform(self.transform)
            .with_parent_origin(self.parent_origin)
    }

    /// The computed `transform` style.
    pub fn css_transform(&self) -> String {
        write_css_matrix(self.transform)
    }

    /// Element classes.
    pub fn classes(&self) -> &[&'static str] {
        &self.classes
    }

    /// Body classes.
    pub fn body_classes(&self) -> &[&'static str] {
        &self.body_classes
    }

    /// Body cursor style.
    pub fn body_cursor(&self) -> &'static str {
        self.body_cursor.css()
    }

    /// Classes on the rotate handle, if one exists.
    pub fn rotate_handle_classes(&self) -> Option<&[&'static str]> {
        self.rotate_handle.as_ref().map(|(_, c)| c.as_slice())
    }

    /// Where the rotate handle was attached, if one exists.
    pub fn rotate_handle_parent(&self) -> Option<HandleParent> {
        self.rotate_handle.as_ref().map(|(p, _)| *p)
    }

    /// Classes on the resize handle for `axis`.
    pub fn resize_handle_classes(&self, axis: Axis) -> &[&'static str] {
        &self.resize_handles[axis.index()]
    }

    /// Apply one marker change, queueing it if deferred.
    pub fn apply_marker(&mut self, change: MarkerChange) {
        if change.timing == MarkerTiming::NextTick {
            self.deferred.push(change);
            return;
        }
        let class = change.marker.class_name();
        let list = match change.marker.scope() {
            MarkerScope::Element => &mut self.classes,
            MarkerScope::Body => &mut self.body_classes,
            MarkerScope::RotateHandle => match self.rotate_handle.as_mut() {
                Some((_, classes)) => classes,
                None => {
                    tracing::warn!(class, "no rotate handle to mark");
                    return;
                }
            },
            MarkerScope::ResizeHandle(axis) => {
                let list = &mut self.resize_handles[axis.index()];
                list.retain(|c| !c.starts_with(ROTATED_HANDLE_PREFIX));
                list
            }
        };
        list.retain(|c| *c != class);
        if change.active {
            list.push(class);
        }
    }

    /// Run changes deferred to the next tick.
    pub fn tick(&mut self) {
        for mut change in core::mem::take(&mut self.deferred) {
            change.timing = MarkerTiming::Immediate;
            self.apply_marker(change);
        }
    }

    /// Apply rotate events in order.
    pub fn apply_rotate(&mut self, events: &[RotateEvent]) {
        for event in events {
            match *event {
                RotateEvent::CreateHandle => {
                    self.rotate_handle = Some((HandleParent::for_tag(self.tag), Vec::new()));
                }
                RotateEvent::RemoveHandle => self.rotate_handle = None,
                RotateEvent::Marker(change) => self.apply_marker(change),
                RotateEvent::Transform(transform) => self.transform = transform,
                RotateEvent::Start(ui) => tracing::info!(?ui, "rotate start"),
                RotateEvent::Rotate(ui) => tracing::debug!(?ui, "rotate"),
                RotateEvent::Stop(ui) => tracing::info!(?ui, "rotate stop"),
            }
        }
    }

    /// Apply the start of a resize.
    pub fn apply_resize_start(&mut self, start: &ResizeStart) {
        for change in start.marker_changes() {
            self.apply_marker(change);
        }
        self.body_cursor = start.cursor;
    }

    /// Apply a resize tick.
    pub fn apply_resize_tick(&mut self, tick: &ResizeTick) {
        let changes = tick.changes;
        if let Some(left) = changes.left {
            self.position.x = left;
        }
        if let Some(top) = changes.top {
            self.position.y = top;
        }
        if let Some(width) = changes.width {
            self.size.width = width;
        }
        if let Some(height) = changes.height {
            self.size.height = height;
        }
    }

    /// Apply the end of a resize.
    pub fn apply_resize_stop(&mut self, stop: &ResizeStop) {
        self.apply_marker(stop.marker);
        self.body_cursor = stop.cursor;
    }
}
