// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading and writing the CSS `matrix(...)` transform form.

use alloc::string::String;
use core::fmt::Write as _;

use kurbo::Affine;

const IDENTITY_COEFFS: [f64; 6] = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

/// Read a computed CSS transform into an [`Affine`].
///
/// Accepts `none`, an empty string, or `matrix(a, b, c, d, e, f)`. Any other
/// input yields the identity. A coefficient that is missing or fails to parse
/// is replaced by the identity coefficient at the same index, so a partially
/// readable matrix keeps the parts that did parse.
///
/// ```rust
/// use kurbo::Affine;
/// use understory_transform_decompose::parse_css_matrix;
///
/// assert_eq!(
///     parse_css_matrix("matrix(0, 1, -1, 0, 10, 20)"),
///     Affine::new([0.0, 1.0, -1.0, 0.0, 10.0, 20.0]),
/// );
/// assert_eq!(parse_css_matrix("none"), Affine::IDENTITY);
/// ```
#[must_use]
pub fn parse_css_matrix(text: &str) -> Affine {
    let text = text.trim();
    let Some(body) = text
        .strip_prefix("matrix(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        if !text.is_empty() && text != "none" {
            tracing::debug!(transform = text, "unrecognized transform, using identity");
        }
        return Affine::IDENTITY;
    };

    let mut coeffs = IDENTITY_COEFFS;
    for (slot, value) in coeffs.iter_mut().zip(body.split(',')) {
        if let Some(parsed) = value.trim().parse::<f64>().ok().filter(|v| v.is_finite()) {
            *slot = parsed;
        }
    }
    Affine::new(coeffs)
}

/// Write an [`Affine`] in the CSS `matrix(a, b, c, d, e, f)` form.
#[must_use]
pub fn write_css_matrix(affine: Affine) -> String {
    let mut out = String::new();
    push_matrix(&mut out, affine);
    out
}

/// Write `rotate(<angle>rad) matrix(...)`.
///
/// This is the textual form of `Affine::rotate(angle) * matrix`: the rotation
/// is applied after the existing matrix, so its scale and skew are preserved.
#[must_use]
pub fn css_rotate_then_matrix(angle: f64, matrix: Affine) -> String {
    let mut out = String::new();
    let _ = write!(out, "rotate({angle}rad) ");
    push_matrix(&mut out, matrix);
    out
}

fn push_matrix(out: &mut String, affine: Affine) {
    let [a, b, c, d, e, f] = affine.as_coeffs();
    let _ = write!(out, "matrix({a}, {b}, {c}, {d}, {e}, {f})");
}
