// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position corrections for resizing rotated boxes.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Size, Vec2};

/// Bias added before rounding so values sitting on a binary boundary round
/// the same way on every tick.
const ROUNDING_BIAS: f64 = 1e-5;

/// Round to two decimal places.
#[must_use]
pub fn round_hundredths(value: f64) -> f64 {
    ((value + ROUNDING_BIAS) * 100.0).round() / 100.0
}

/// Offset between the rotated and unrotated placement of the reference corner
/// `(-w/2, h/2)` of a box of `size`.
fn corner_drift(size: Size, sin: f64, cos: f64) -> Vec2 {
    let x = -size.width / 2.0;
    let y = size.height / 2.0;
    let rotated_x = y * sin + x * cos;
    let rotated_y = y * cos - x * sin;
    Vec2::new(rotated_x - x, rotated_y - y)
}

/// Positional drift caused by resizing a rotated box from `initial` by `delta`.
///
/// Rotating a box about its center moves its corners; rotating a box of a
/// different size moves them by a different amount. This returns how much
/// that movement changes for the reference corner when the size goes from
/// `initial` to `initial + delta`, isolated from any translation. The result
/// is rounded to hundredths of a pixel.
///
/// Without rotation, or without a size change, the result is zero.
///
/// ```rust
/// use kurbo::{Size, Vec2};
/// use understory_rotatable::resize_correction;
///
/// let initial = Size::new(100.0, 50.0);
/// assert_eq!(resize_correction(initial, Size::new(20.0, 10.0), 0.0), Vec2::ZERO);
/// assert_eq!(resize_correction(initial, Size::ZERO, 1.0), Vec2::ZERO);
/// ```
#[must_use]
pub fn resize_correction(initial: Size, delta: Size, rotation: f64) -> Vec2 {
    let (sin, cos) = rotation.sin_cos();
    let before = corner_drift(initial, sin, cos);
    let after = corner_drift(initial + delta, sin, cos);
    let offset = after - before;
    Vec2::new(round_hundredths(offset.x), round_hundredths(offset.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn rounding_is_biased_and_two_places() {
        assert_eq!(round_hundredths(1.234_9), 1.23);
        assert_eq!(round_hundredths(1.235), 1.24);
        assert_eq!(round_hundredths(-0.0), 0.0);
        assert_eq!(round_hundredths(2.0), 2.0);
    }

    #[test]
    fn no_size_change_needs_no_correction() {
        for i in 0..16 {
            let rotation = f64::from(i) * PI / 8.0;
            let c = resize_correction(Size::new(120.0, 80.0), Size::ZERO, rotation);
            assert_eq!(c, Vec2::ZERO, "rotation {rotation}");
        }
    }

    #[test]
    fn unrotated_resize_needs_no_correction() {
        for (dw, dh) in [(10.0, 0.0), (0.0, -25.0), (-40.0, 60.0), (3.5, 7.25)] {
            let c = resize_correction(Size::new(120.0, 80.0), Size::new(dw, dh), 0.0);
            assert_eq!(c, Vec2::ZERO);
        }
    }

    #[test]
    fn quarter_turn_shrink() {
        // 100x100 shrinking to 50x50 under a quarter turn.
        let c = resize_correction(Size::new(100.0, 100.0), Size::new(-50.0, -50.0), FRAC_PI_2);
        assert_eq!(c, Vec2::new(-50.0, 0.0));
    }

    #[test]
    fn half_turn_growth() {
        let c = resize_correction(Size::new(100.0, 60.0), Size::new(20.0, 10.0), PI);
        assert_eq!(c, Vec2::new(20.0, -10.0));
    }
}
