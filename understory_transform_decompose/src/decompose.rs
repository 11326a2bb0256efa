// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading translation, scale, skew and rotation back out of an affine matrix.

use core::f64::consts::FRAC_PI_2;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Vec2};

use crate::angle::normalize_radians;

/// Squared column length below which a matrix is treated as zero-scale.
const DEGENERATE_SCALE_SQ: f64 = 1e-24;

/// The parts of a 2D affine transform, as read back from its coefficients.
///
/// All angles are in radians. `rotation` and `skew_x` are normalized into
/// `(-π, π]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecomposedTransform {
    /// Translation (`e`, `f`).
    pub translate: Vec2,
    /// Length of the image of the x basis vector.
    pub scale_x: f64,
    /// Length of the image of the y basis vector.
    pub scale_y: f64,
    /// Angle of the image of the y basis vector, measured from the y axis.
    pub skew_x: f64,
    /// Angle of the image of the x basis vector, measured from the x axis.
    pub skew_y: f64,
    /// Visual rotation of the element.
    pub rotation: f64,
}

impl DecomposedTransform {
    /// The decomposition of [`Affine::IDENTITY`].
    pub const IDENTITY: Self = Self {
        translate: Vec2::ZERO,
        scale_x: 1.0,
        scale_y: 1.0,
        skew_x: 0.0,
        skew_y: 0.0,
        rotation: 0.0,
    };

    /// Returns `true` if the rotation is not zero.
    #[must_use]
    pub fn is_rotated(&self) -> bool {
        self.rotation != 0.0
    }
}

impl Default for DecomposedTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Affine> for DecomposedTransform {
    fn from(affine: Affine) -> Self {
        decompose(affine)
    }
}

/// Split `affine` into translation, scale, skew and rotation.
///
/// The rotation is read from the image of the y basis vector `(c, d)`: for an
/// unrotated element it points straight down the y axis, so its angle minus
/// `π/2` is the visual rotation. This keeps the reading stable under
/// non-uniform scale.
///
/// A zero-scale matrix has no well-defined rotation; `0` is returned for it
/// instead of an arbitrary angle.
///
/// ```rust
/// use core::f64::consts::PI;
/// use kurbo::Affine;
/// use understory_transform_decompose::decompose;
///
/// let parts = decompose(Affine::rotate(PI / 6.0) * Affine::scale_non_uniform(2.0, 3.0));
/// assert!((parts.rotation - PI / 6.0).abs() < 1e-9);
/// assert!((parts.scale_x - 2.0).abs() < 1e-9);
/// assert!((parts.scale_y - 3.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn decompose(affine: Affine) -> DecomposedTransform {
    let [a, b, c, d, e, f] = affine.as_coeffs();

    let scale_x = (a * a + b * b).sqrt();
    let scale_y = (c * c + d * d).sqrt();

    let rotation = if c * c + d * d <= DEGENERATE_SCALE_SQ {
        tracing::debug!(?affine, "zero-scale transform, reporting rotation 0");
        0.0
    } else {
        normalize_radians(d.atan2(c) - FRAC_PI_2).unwrap_or(0.0)
    };
    let skew_y = if a * a + b * b <= DEGENERATE_SCALE_SQ {
        0.0
    } else {
        b.atan2(a)
    };

    DecomposedTransform {
        translate: Vec2::new(e, f),
        scale_x,
        scale_y,
        skew_x: rotation,
        skew_y,
        rotation,
    }
}
