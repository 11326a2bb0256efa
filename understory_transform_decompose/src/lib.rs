// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_transform_decompose --heading-base-level=0

//! Understory Transform Decompose: read rotation, scale and skew back out of a 2D affine.
//!
//! Interactive editors frequently receive an element's transform as an opaque
//! matrix (for example the computed `transform` of a styled node) and need to
//! know how far it is rotated before they can do anything geometric with it.
//! This crate provides the small set of helpers needed for that:
//!
//! - [`decompose`]: split a [`kurbo::Affine`] into translation, per-axis scale,
//!   skew, and a rotation angle in radians normalized into `(-π, π]`.
//! - [`normalize_angle`]: convert numeric or unit-tagged textual angles
//!   (`rad`, `grad`, `deg`, `turn`) into normalized radians.
//! - [`parse_css_matrix`] / [`write_css_matrix`]: read and write the
//!   `matrix(a, b, c, d, e, f)` form used by computed styles.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::f64::consts::FRAC_PI_2;
//! use kurbo::Affine;
//! use understory_transform_decompose::{decompose, normalize_angle, parse_css_matrix};
//!
//! let quarter_turn = Affine::rotate(FRAC_PI_2).then_translate((10.0, 0.0).into());
//! let parts = decompose(quarter_turn);
//! assert!((parts.rotation - FRAC_PI_2).abs() < 1e-9);
//! assert_eq!(parts.translate.x, 10.0);
//!
//! // Missing transforms are the identity, never an error.
//! assert_eq!(parse_css_matrix("none"), Affine::IDENTITY);
//!
//! // Unit-tagged angles are converted and normalized.
//! let half = normalize_angle("0.5turn").unwrap();
//! assert!((half - core::f64::consts::PI).abs() < 1e-12);
//! ```
//!
//! ## Degenerate input
//!
//! A zero-scale matrix has no meaningful visual rotation. Rather than
//! producing `NaN`, [`decompose`] reports a rotation of `0` in that case.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod angle;
mod css;
mod decompose;

pub use angle::{Angle, AngleError, AngleUnit, normalize_angle, normalize_radians};
pub use css::{css_rotate_then_matrix, parse_css_matrix, write_css_matrix};
pub use decompose::{DecomposedTransform, decompose};
