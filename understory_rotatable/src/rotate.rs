// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotating an element by dragging a handle around its center.
//!
//! ## Usage
//!
//! 1) Create a [`Rotatable`] and apply the events returned by [`Rotatable::init`].
//! 2) On press over the rotate handle, call [`Rotatable::press`] with the
//!    element's on-screen bounds and current transform.
//! 3) On every pointer move, call [`Rotatable::pointer_move`] and apply the
//!    returned events.
//! 4) On release, call [`Rotatable::release`].
//!
//! The interaction only counts as started on the first move after a press,
//! so a click on the handle without movement produces no events.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Affine, Point, Rect};
//! use understory_rotatable::{Modifiers, PointerButton, Rotatable, RotateEvent};
//!
//! let mut rotatable = Rotatable::default();
//! let bounds = Rect::new(50.0, 50.0, 150.0, 150.0);
//!
//! assert!(rotatable.press(bounds, Affine::IDENTITY, Point::new(150.0, 100.0), PointerButton::Primary));
//! let events = rotatable.pointer_move(Point::new(100.0, 150.0), Modifiers::empty());
//! assert!(events.iter().any(|e| matches!(e, RotateEvent::Start(_))));
//! assert!((rotatable.angle() - core::f64::consts::FRAC_PI_2).abs() < 1e-9);
//!
//! let events = rotatable.release();
//! assert!(events.iter().any(|e| matches!(e, RotateEvent::Stop(_))));
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Rect};
use smallvec::SmallVec;
use ui_events::keyboard::Modifiers;
use ui_events::pointer::PointerButton;
use understory_transform_decompose::{
    Angle, AngleError, DecomposedTransform, decompose, normalize_angle, normalize_radians,
};

use crate::marker::{Marker, MarkerChange};
use crate::options::{RotatableOptions, RotateHandle};

/// Events returned by a single [`Rotatable`] call.
pub type RotateEvents = SmallVec<[RotateEvent; 4]>;

/// Rotate interaction status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RotateStatus {
    /// Idle.
    #[default]
    Stop,
    /// Pressed, no movement yet.
    Start,
    /// Rotating.
    Rotate,
}

/// What caused a rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Interaction {
    /// Applying the configured angle when the element is set up.
    Init,
    /// Dragging the rotate handle.
    MouseDrag,
    /// The reset gesture.
    Reset,
    /// A programmatic angle change.
    Option,
}

/// Interaction context passed with start/rotate/stop events.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotateUi {
    /// What caused the rotation.
    pub interaction: Interaction,
    /// Element angle the change started from, in radians.
    pub start_angle: f64,
    /// Element angle after the change, in radians.
    pub angle: f64,
}

/// Output of the rotate state machine, applied by the host in order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RotateEvent {
    /// Create a rotate handle node, attached where
    /// [`HandleParent::for_tag`](crate::HandleParent::for_tag) says.
    CreateHandle,
    /// Remove the handle node created for [`RotateEvent::CreateHandle`].
    RemoveHandle,
    /// Add or remove a visual marker.
    Marker(MarkerChange),
    /// Write this transform to the element.
    Transform(Affine),
    /// A drag rotation started.
    Start(RotateUi),
    /// The angle changed.
    Rotate(RotateUi),
    /// A drag rotation ended.
    Stop(RotateUi),
}

/// State captured when the rotate handle is pressed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationSnapshot {
    /// Center of the element's on-screen bounds.
    pub center: Point,
    /// The element transform at press time.
    pub start_transform: Affine,
    /// Pointer angle around `center` at press time.
    pub start_mouse_angle: f64,
    /// Element angle at press time.
    pub start_element_angle: f64,
    /// Most recently written transform.
    pub transform: Affine,
}

/// Rotate interaction state for one element.
#[derive(Clone, Debug)]
pub struct Rotatable {
    options: RotatableOptions,
    enabled: bool,
    status: RotateStatus,
    snapshot: Option<RotationSnapshot>,
    /// Angle the last change started from; cleared when a drag ends.
    start_angle_element: Option<f64>,
}

impl Default for Rotatable {
    fn default() -> Self {
        Self::with_options(RotatableOptions::default())
    }
}

impl Rotatable {
    /// Create with `options`, normalizing the configured angle.
    pub fn new(options: RotatableOptions) -> Result<Self, AngleError> {
        let angle = normalize_radians(options.angle)?;
        Ok(Self::with_options(RotatableOptions { angle, ..options }))
    }

    fn with_options(options: RotatableOptions) -> Self {
        Self {
            options,
            enabled: true,
            status: RotateStatus::Stop,
            snapshot: None,
            start_angle_element: None,
        }
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &RotatableOptions {
        &self.options
    }

    /// Current angle in radians, in `(-π, π]`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.options.angle
    }

    /// Interaction status.
    #[must_use]
    pub fn status(&self) -> RotateStatus {
        self.status
    }

    /// The press-time snapshot, between press and release.
    #[must_use]
    pub fn snapshot(&self) -> Option<&RotationSnapshot> {
        self.snapshot.as_ref()
    }

    /// Allow the rotate handle to start interactions.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Ignore presses and reset gestures until [`enable`](Self::enable).
    ///
    /// Programmatic angle changes still apply.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Whether presses are accepted.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Decompose the element's `current` transform.
    #[must_use]
    pub fn decomposed(&self, current: Affine) -> DecomposedTransform {
        decompose(current)
    }

    /// Set up the element: markers, the handle, and the configured angle
    /// applied on top of `current`.
    pub fn init(&mut self, current: Affine) -> RotateEvents {
        self.clear();
        let mut events = RotateEvents::new();
        if self.options.handle == RotateHandle::Auto {
            events.push(RotateEvent::CreateHandle);
        }
        if self.options.handle != RotateHandle::Disabled {
            events.push(RotateEvent::Marker(MarkerChange::set(Marker::RotateHandle)));
        }
        events.push(RotateEvent::Marker(MarkerChange::set(Marker::Rotatable)));
        events.extend(self.rotate_to(Interaction::Init, current));
        events
    }

    /// Undo [`init`](Self::init).
    pub fn destroy(&mut self) -> RotateEvents {
        let mut events = RotateEvents::new();
        if self.options.handle != RotateHandle::Disabled {
            events.push(RotateEvent::Marker(MarkerChange::clear(Marker::RotateHandle)));
        }
        if self.options.handle == RotateHandle::Auto {
            events.push(RotateEvent::RemoveHandle);
        }
        if self.status == RotateStatus::Rotate {
            events.push(RotateEvent::Marker(MarkerChange::clear(Marker::BodyRotating)));
        }
        events.push(RotateEvent::Marker(MarkerChange::clear(Marker::Rotating)));
        events.push(RotateEvent::Marker(MarkerChange::clear(Marker::Rotatable)));
        self.clear();
        events
    }

    /// Rotate the element to `angle`.
    ///
    /// The element's `current` transform is rotated by the difference between
    /// the new and the old angle. Setting the angle it already has does
    /// nothing. Fails if `angle` is not a valid angle, leaving the state
    /// untouched.
    pub fn set_angle<'a>(
        &mut self,
        angle: impl Into<Angle<'a>>,
        current: Affine,
    ) -> Result<RotateEvents, AngleError> {
        let angle = normalize_angle(angle)?;
        if angle == self.options.angle {
            return Ok(RotateEvents::new());
        }
        tracing::debug!(from = self.options.angle, to = angle, "set angle");
        self.start_angle_element = Some(self.options.angle);
        self.options.angle = angle;
        Ok(self.rotate_to(Interaction::Option, current))
    }

    /// Press on the rotate handle.
    ///
    /// `bounds` is the element's live on-screen bounding box, so ancestor
    /// scrolling and transforms are accounted for. Returns `false` if the
    /// press was ignored.
    pub fn press(
        &mut self,
        bounds: Rect,
        transform: Affine,
        pointer: Point,
        button: PointerButton,
    ) -> bool {
        if !self.enabled || self.options.handle == RotateHandle::Disabled {
            return false;
        }
        if button != PointerButton::Primary {
            return false;
        }
        let center = bounds.center();
        let snapshot = RotationSnapshot {
            center,
            start_transform: transform,
            start_mouse_angle: mouse_angle(center, pointer),
            start_element_angle: self.options.angle,
            transform,
        };
        self.start_angle_element = Some(snapshot.start_element_angle);
        self.snapshot = Some(snapshot);
        self.status = RotateStatus::Start;
        tracing::debug!(?center, angle = snapshot.start_element_angle, "rotate press");
        true
    }

    /// Process a pointer move. Holding shift snaps the angle to
    /// [`snap_step`](RotatableOptions::snap_step) degrees.
    pub fn pointer_move(&mut self, pointer: Point, modifiers: Modifiers) -> RotateEvents {
        let mut events = RotateEvents::new();
        let Some(snapshot) = self.snapshot.as_mut() else {
            return events;
        };

        if self.status == RotateStatus::Start {
            events.push(RotateEvent::Marker(MarkerChange::set(Marker::BodyRotating)));
            events.push(RotateEvent::Marker(MarkerChange::set(Marker::Rotating)));
            self.status = RotateStatus::Rotate;
            events.push(RotateEvent::Start(RotateUi {
                interaction: Interaction::MouseDrag,
                start_angle: snapshot.start_element_angle,
                angle: self.options.angle,
            }));
            tracing::debug!("rotate start");
        }

        let start = snapshot.start_element_angle;
        let mut drag = mouse_angle(snapshot.center, pointer) - snapshot.start_mouse_angle;
        let step = self.options.snap_step;
        if modifiers.shift() && step > 0.0 {
            // `drag` may be a full turn off; snap the normalized angle.
            let target = fix(drag + start).to_degrees();
            drag = (step * (target / step).round()).to_radians() - start;
        }

        self.options.angle = fix(drag + start);
        snapshot.transform = Affine::rotate(drag) * snapshot.start_transform;
        tracing::trace!(drag, angle = self.options.angle, "rotate tick");

        events.push(RotateEvent::Transform(snapshot.transform));
        events.push(RotateEvent::Rotate(RotateUi {
            interaction: Interaction::MouseDrag,
            start_angle: start,
            angle: self.options.angle,
        }));
        events
    }

    /// End the interaction.
    ///
    /// A release without any movement since the press only clears the
    /// press state.
    pub fn release(&mut self) -> RotateEvents {
        let mut events = RotateEvents::new();
        let snapshot = self.snapshot;
        let status = self.status;
        let ui = self.ui(Interaction::MouseDrag);
        self.clear();

        let Some(snapshot) = snapshot.filter(|_| status == RotateStatus::Rotate) else {
            return events;
        };
        events.push(RotateEvent::Transform(snapshot.transform));
        events.push(RotateEvent::Marker(
            MarkerChange::clear(Marker::BodyRotating).deferred(),
        ));
        events.push(RotateEvent::Marker(MarkerChange::clear(Marker::Rotating)));
        events.push(RotateEvent::Stop(ui));
        tracing::debug!(angle = ui.angle, "rotate stop");
        events
    }

    /// The reset gesture on the rotate handle: rotate back to zero in one
    /// step. Ignored without a handle.
    pub fn double_click(&mut self, button: PointerButton, current: Affine) -> RotateEvents {
        if !self.enabled || self.options.handle == RotateHandle::Disabled {
            return RotateEvents::new();
        }
        if button != PointerButton::Primary {
            return RotateEvents::new();
        }
        tracing::debug!(from = self.options.angle, "rotate reset");
        self.start_angle_element = Some(self.options.angle);
        self.options.angle = 0.0;
        self.rotate_to(Interaction::Reset, current)
    }

    fn ui(&self, interaction: Interaction) -> RotateUi {
        RotateUi {
            interaction,
            start_angle: self.start_angle_element.unwrap_or(0.0),
            angle: self.options.angle,
        }
    }

    fn rotate_to(&self, interaction: Interaction, current: Affine) -> RotateEvents {
        let ui = self.ui(interaction);
        let transform = Affine::rotate(ui.angle - ui.start_angle) * current;
        let mut events = RotateEvents::new();
        events.push(RotateEvent::Transform(transform));
        events.push(RotateEvent::Rotate(ui));
        events
    }

    fn clear(&mut self) {
        self.snapshot = None;
        self.start_angle_element = None;
        self.status = RotateStatus::Stop;
    }
}

fn fix(radians: f64) -> f64 {
    normalize_radians(radians).unwrap_or(0.0)
}

/// Clockwise angle of `pointer` around `center`, zero pointing up.
fn mouse_angle(center: Point, pointer: Point) -> f64 {
    fix((pointer.x - center.x).atan2(-(pointer.y - center.y)))
}
