// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Snapping floats to a fixed number of decimal digits, so that equality checks ignore
//! the round-off that RGB↔HSL conversions accumulate. See [`FloatSnap`] for details.
//!
//! The precision is a single piece of process-wide configuration. It is read on every
//! comparison and never baked into existing color values. Writers racing against
//! readers on other threads get no ordering guarantee beyond what [`SeqCst`] gives a
//! single atomic.
//!
//! [`SeqCst`]: std::sync::atomic::Ordering::SeqCst

use crate::{DEBUG_PIGMENT_MOD, PigmentError, PigmentResult};
use std::sync::atomic::{AtomicU8, Ordering};

/// Number of decimal digits used by [`FloatSnap::snap`] until
/// [`set_snap_digits`] says otherwise.
pub const DEFAULT_SNAP_DIGITS: u8 = 6;

/// `f64` carries roughly 15-17 significant decimal digits, anything past this is noise.
pub const MAX_SNAP_DIGITS: u8 = 15;

static SNAP_DIGITS: AtomicU8 = AtomicU8::new(DEFAULT_SNAP_DIGITS);

/// Reads the current process-wide snap precision.
#[must_use]
pub fn snap_digits() -> u8 { SNAP_DIGITS.load(Ordering::SeqCst) }

/// Changes the process-wide snap precision used by every later equality check.
///
/// # Errors
///
/// Returns [`PigmentError::InvalidArgument`] if `digits` is greater than
/// [`MAX_SNAP_DIGITS`].
pub fn set_snap_digits(digits: u8) -> PigmentResult<()> {
    if digits > MAX_SNAP_DIGITS {
        return PigmentError::new_invalid_argument_result(format!(
            "snap digits must be at most {MAX_SNAP_DIGITS}, got {digits}"
        ));
    }

    let old = SNAP_DIGITS.swap(digits, Ordering::SeqCst);

    DEBUG_PIGMENT_MOD.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🎯 Snap precision changed",
            old_digits = %old,
            new_digits = %digits
        );
    });

    Ok(())
}

/// Restores [`DEFAULT_SNAP_DIGITS`].
pub fn reset_snap_digits() { SNAP_DIGITS.store(DEFAULT_SNAP_DIGITS, Ordering::SeqCst); }

pub trait FloatSnap {
    /// Rounds to the current [`snap_digits`] precision.
    #[must_use]
    fn snap(self) -> Self;

    /// Rounds to `digits` decimal digits.
    #[must_use]
    fn round_to(self, digits: u8) -> Self;
}

impl FloatSnap for f64 {
    fn snap(self) -> Self { self.round_to(snap_digits()) }

    fn round_to(self, digits: u8) -> Self {
        let scale = 10_f64.powi(i32::from(digits));
        let rounded = (self * scale).round() / scale;
        // Keep `-0.0` from surfacing after rounding a tiny negative value.
        if rounded == 0.0 { 0.0 } else { rounded }
    }
}

/// Compares two floats after snapping both of them.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn snap_eq(lhs: f64, rhs: f64) -> bool { lhs.snap() == rhs.snap() }
