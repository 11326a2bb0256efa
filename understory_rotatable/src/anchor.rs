// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The screen point that stays fixed while a handle is dragged.

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::axis::Axis;

/// Where the handle opposite `axis` appears on screen.
///
/// `origin` is the unrotated top-left corner of the box in the coordinate
/// space the caller wants the result in (typically the box position plus its
/// offset parent's origin). The box is rotated by `rotation` radians about its
/// own center, as a CSS transform with a centered transform origin would.
///
/// While a handle is dragged, this point is what the user perceives as fixed.
///
/// ```rust
/// use core::f64::consts::FRAC_PI_2;
/// use kurbo::{Point, Size};
/// use understory_rotatable::{Axis, opposite_anchor};
///
/// let size = Size::new(100.0, 100.0);
/// let unrotated = opposite_anchor(Axis::Se, Point::ORIGIN, size, 0.0);
/// assert_eq!(unrotated, Point::ORIGIN);
///
/// // A quarter turn carries the bottom-left corner to the top-left.
/// let rotated = opposite_anchor(Axis::Ne, Point::ORIGIN, size, FRAC_PI_2);
/// assert!(rotated.distance(Point::ORIGIN) < 1e-9);
/// ```
#[must_use]
pub fn opposite_anchor(axis: Axis, origin: Point, size: Size, rotation: f64) -> Point {
    let bounds = Rect::from_origin_size(origin, size);
    let fraction = axis.opposite().anchor_fraction();
    let unrotated = origin + Vec2::new(fraction.x * size.width, fraction.y * size.height);
    Affine::rotate_about(rotation, bounds.center()) * unrotated
}
