// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words tetradic swizzle

//! # r3bl_pigment
//!
//! Immutable color values in two interchangeable representations:
//!
//! - [`RgbColor`]: red, green, blue, alpha as normalized `f64` in `[0.0, 1.0]`.
//! - [`HslColor`]: hue (a fraction of a full turn in `[0.0, 1.0)`), saturation,
//!   lightness, alpha.
//!
//! Both implement [`TransformColor`], the shared capability set. It converts between
//! representations, computes inverses and hue harmonies, and encodes to hex. The
//! [`Color`] enum wraps either representation when the kind is only known at runtime.
//!
//! # Equality
//!
//! Two colors are equal when, after converting the right operand into the left
//! operand's representation, every channel matches once [snapped] to a fixed number
//! of decimal digits (6 by default). RGB↔HSL round trips accumulate floating point
//! error, and snapping absorbs it.
//!
//! ```
//! use r3bl_pigment::{HslColor, RgbColor, TransformColor};
//!
//! let green = HslColor::from_hue_angle(120.0, 1.0, 0.5, 1.0).unwrap();
//! assert_eq!(green.as_rgb(), RgbColor::rgb(0.0, 1.0, 0.0).unwrap());
//! assert_eq!(green, RgbColor::rgb(0.0, 1.0, 0.0).unwrap());
//! ```
//!
//! # Harmonies
//!
//! Harmonies are hue rotations at fixed saturation and lightness. They are computed
//! in HSL and lifted back into the caller's representation.
//!
//! ```
//! use r3bl_pigment::{RgbColor, TransformColor};
//!
//! let red = RgbColor::rgb(1.0, 0.0, 0.0).unwrap();
//! let split = red.split();
//! assert!(red.split_of(&split[0]));
//! assert!(red.split_include(&[split[0], split[1]]));
//! ```
//!
//! # Hex codecs
//!
//! ```
//! use r3bl_pigment::{RgbColor, TransformColor};
//!
//! let color = RgbColor::from_hex("#ff8000").unwrap();
//! assert_eq!(color.to_hex(true), "ff8000ff");
//! assert_eq!(color.to_html(false), "#ff8000");
//! assert_eq!(RgbColor::from_hex(0xff80_00ff_i64).unwrap(), color);
//! ```
//!
//! [snapped]: crate::FloatSnap::snap

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
mod macros;
pub mod color;
pub mod common;
pub mod palette;

// Re-export.
pub use color::*;
pub use common::*;
pub use palette::*;
