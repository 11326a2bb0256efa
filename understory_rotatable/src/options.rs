// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration for the rotate and resize interactions.

use understory_transform_decompose::{Angle, AngleError, normalize_angle};

/// Default snapping increment, in degrees, while the snap modifier is held.
pub const DEFAULT_SNAP_STEP: f64 = 15.0;

/// How the rotate handle is provided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotateHandle {
    /// The host creates a handle node for the element.
    #[default]
    Auto,
    /// The host supplies an existing node as the handle.
    Existing,
    /// No handle; rotation only changes through [`Rotatable::set_angle`].
    ///
    /// [`Rotatable::set_angle`]: crate::Rotatable::set_angle
    Disabled,
}

/// Where an automatically created rotate handle is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandleParent {
    /// Inside the element.
    Element,
    /// Next to the element, inside its parent.
    Parent,
}

impl HandleParent {
    /// Replaced and form elements cannot host children.
    const CHILDLESS_TAGS: [&'static str; 6] =
        ["canvas", "textarea", "input", "select", "button", "img"];

    /// Pick the attachment point for an element with the given tag name.
    ///
    /// ```rust
    /// use understory_rotatable::HandleParent;
    ///
    /// assert_eq!(HandleParent::for_tag("DIV"), HandleParent::Element);
    /// assert_eq!(HandleParent::for_tag("img"), HandleParent::Parent);
    /// ```
    #[must_use]
    pub fn for_tag(tag: &str) -> Self {
        if Self::CHILDLESS_TAGS
            .iter()
            .any(|t| t.eq_ignore_ascii_case(tag))
        {
            Self::Parent
        } else {
            Self::Element
        }
    }
}

/// Options for [`Rotatable`](crate::Rotatable).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RotatableOptions {
    /// Current angle in radians.
    pub angle: f64,
    /// How the rotate handle is provided.
    pub handle: RotateHandle,
    /// Snapping increment in degrees while the snap modifier is held.
    ///
    /// Non-positive values disable snapping.
    pub snap_step: f64,
}

impl Default for RotatableOptions {
    fn default() -> Self {
        Self {
            angle: 0.0,
            handle: RotateHandle::default(),
            snap_step: DEFAULT_SNAP_STEP,
        }
    }
}

impl RotatableOptions {
    /// Default options: no rotation, auto-created handle, 15° snapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial angle.
    ///
    /// Fails if `angle` is not a valid angle.
    pub fn with_angle<'a>(mut self, angle: impl Into<Angle<'a>>) -> Result<Self, AngleError> {
        self.angle = normalize_angle(angle)?;
        Ok(self)
    }

    /// Sets how the rotate handle is provided.
    #[must_use]
    pub fn with_handle(mut self, handle: RotateHandle) -> Self {
        self.handle = handle;
        self
    }

    /// Sets the snapping increment in degrees.
    #[must_use]
    pub fn with_snap_step(mut self, degrees: f64) -> Self {
        self.snap_step = degrees;
        self
    }
}

/// Options for [`ResizeState`](crate::ResizeState).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ResizeOptions {
    /// Fixed width/height ratio handed to the engine instead of the one
    /// measured at press time.
    pub aspect_ratio: Option<f64>,
}

impl ResizeOptions {
    /// Sets a fixed aspect ratio.
    #[must_use]
    pub fn with_aspect_ratio(mut self, ratio: f64) -> Self {
        self.aspect_ratio = Some(ratio);
        self
    }
}
