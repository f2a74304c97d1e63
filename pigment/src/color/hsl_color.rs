// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words tetradic

//! HSL color representation. Hue harmonies are defined natively here.

use crate::{ChannelFloats, ColorKind, ColorSet, FloatSnap, Harmony, HslChannel,
            PigmentError, PigmentResult, RgbColor, TransformColor,
            parse_channel_selectors, snap_eq};
use std::{fmt::{Display, Formatter, Result as FmtResult},
          ops::Neg};

/// Represents a color as hue, saturation, lightness, and alpha.
///
/// - `hue` is a fraction of a full turn in `[0.0, 1.0)`. Inputs outside that range
///   wrap, so `1.25` and `-0.75` both become `0.25`.
/// - `saturation`, `lightness`, and `alpha` are in `[0.0, 1.0]`.
///
/// Equality is snapped and representation aware, see [`TransformColor::snapped_eq`].
/// Hue is not compared for achromatic colors, and saturation is not compared at
/// lightness `0.0` or `1.0`.
///
/// ```
/// use r3bl_pigment::HslColor;
///
/// let white = HslColor::new(0.3, 0.5, 1.0, 1.0).unwrap();
/// assert_eq!(white, HslColor::new(0.1, 0.9, 1.0, 1.0).unwrap());
///
/// let gray = HslColor::new(0.3, 0.0, 0.5, 1.0).unwrap();
/// assert_eq!(gray, HslColor::new(0.7, 0.0, 0.5, 1.0).unwrap());
/// assert_ne!(gray, HslColor::new(0.7, 0.2, 0.5, 1.0).unwrap());
/// ```
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "HslChannels", into = "HslChannels")]
pub struct HslColor {
    hue: f64,
    saturation: f64,
    lightness: f64,
    alpha: f64,
}

/// Serialized form of [`HslColor`]. A missing `alpha` is `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HslChannels {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    #[serde(default = "opaque_alpha")]
    pub alpha: f64,
}

pub(super) fn opaque_alpha() -> f64 { 1.0 }

impl HslColor {
    /// `hue` is wrapped into `[0.0, 1.0)`. The other channels are range checked after
    /// [snapping](FloatSnap::snap), so round off just past a bound is tolerated (and
    /// clamped) rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`PigmentError::InvalidColorFormat`] if `hue` is not finite, or if any
    /// other channel is outside `[0.0, 1.0]`.
    pub fn new(
        hue: f64,
        saturation: f64,
        lightness: f64,
        alpha: f64,
    ) -> PigmentResult<Self> {
        let channels = [saturation, lightness, alpha];
        let in_range = |it: &f64| (0.0..=1.0).contains(&it.snap());
        if hue.is_finite() && channels.iter().all(in_range) {
            Ok(Self::from_parts(hue, channels))
        } else {
            PigmentError::new_invalid_color_format_result([hue, saturation, lightness, alpha])
        }
    }

    /// `degrees / 360.0` as the hue, so `360.0` wraps to `0.0`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_hue_angle(
        degrees: f64,
        saturation: f64,
        lightness: f64,
        alpha: f64,
    ) -> PigmentResult<Self> {
        Self::new(degrees / 360.0, saturation, lightness, alpha)
    }

    /// Callers guarantee a finite hue and in range (or nearly in range) channels.
    pub(crate) fn from_parts(hue: f64, [saturation, lightness, alpha]: [f64; 3]) -> Self {
        debug_assert!(hue.is_finite(), "hue is not finite: {hue}");
        Self {
            hue: normalize_hue(hue),
            saturation: saturation.clamp(0.0, 1.0),
            lightness: lightness.clamp(0.0, 1.0),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Standard RGB to HSL conversion. Achromatic colors get hue `0.0`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_rgb(rgb: RgbColor) -> Self {
        let [red, green, blue] = rgb.rgb_channels();
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let chroma = max - min;
        let lightness = (max + min) / 2.0;

        if chroma == 0.0 {
            return Self::from_parts(0.0, [0.0, lightness, rgb.alpha()]);
        }

        let saturation = if lightness > 0.5 {
            chroma / (2.0 - max - min)
        } else {
            chroma / (max + min)
        };

        let hue = if max == red {
            // Hues just below 360° come out negative, shift them up a full turn.
            let wrap = if green < blue { 1.0 } else { 0.0 };
            (green - blue) / chroma / 6.0 + wrap
        } else if max == green {
            (blue - red) / chroma / 6.0 + 1.0 / 3.0
        } else {
            (red - green) / chroma / 6.0 + 2.0 / 3.0
        };

        Self::from_parts(hue, [saturation, lightness, rgb.alpha()])
    }

    /// One color per [`Harmony::hue_offsets`] entry, with the same saturation,
    /// lightness, and alpha as `self`.
    #[must_use]
    pub fn hue_rotations(&self, harmony: Harmony) -> ColorSet<HslColor> {
        harmony
            .hue_offsets()
            .iter()
            .map(|offset| {
                Self::from_parts(self.hue + offset, [
                    self.saturation,
                    self.lightness,
                    self.alpha,
                ])
            })
            .collect()
    }

    /// Rotates the hue by `turns` (a fraction of a full turn, may be negative).
    ///
    /// # Errors
    ///
    /// Returns [`PigmentError::InvalidColorFormat`] if `turns` is not finite.
    pub fn rotate_hue(&self, turns: f64) -> PigmentResult<Self> {
        Self::new(self.hue + turns, self.saturation, self.lightness, self.alpha)
    }

    #[must_use]
    pub fn hue(&self) -> f64 { self.hue }

    /// Hue in degrees, in `[0.0, 360.0)`.
    #[must_use]
    pub fn hue_angle(&self) -> f64 { self.hue * 360.0 }

    #[must_use]
    pub fn saturation(&self) -> f64 { self.saturation }

    #[must_use]
    pub fn lightness(&self) -> f64 { self.lightness }

    #[must_use]
    pub fn alpha(&self) -> f64 { self.alpha }

    #[must_use]
    pub fn hsl(&self) -> [f64; 3] { [self.hue, self.saturation, self.lightness] }

    #[must_use]
    pub fn hsla(&self) -> [f64; 4] {
        [self.hue, self.saturation, self.lightness, self.alpha]
    }

    #[must_use]
    pub fn to_array(&self, with_alpha: bool) -> ChannelFloats {
        if with_alpha {
            ChannelFloats::from_slice(&self.hsla())
        } else {
            ChannelFloats::from_slice(&self.hsl())
        }
    }

    #[must_use]
    pub fn channel(&self, selector: HslChannel) -> f64 {
        match selector {
            HslChannel::Hue => self.hue,
            HslChannel::Saturation => self.saturation,
            HslChannel::Lightness => self.lightness,
            HslChannel::Alpha => self.alpha,
        }
    }

    #[must_use]
    pub fn channels(&self, selectors: &[HslChannel]) -> ChannelFloats {
        selectors.iter().map(|it| self.channel(*it)).collect()
    }

    /// # Errors
    ///
    /// Returns [`PigmentError::InvalidArgument`] if `selectors` is empty or has a
    /// letter other than `h`, `s`, `l`, `a`.
    pub fn channels_from_str(&self, selectors: &str) -> PigmentResult<ChannelFloats> {
        let selectors = parse_channel_selectors::<HslChannel>(selectors)?;
        Ok(self.channels(&selectors))
    }
}

/// Wraps into `[0.0, 1.0)`. `rem_euclid` can return exactly `1.0` for tiny negative
/// inputs (the same angle as `0.0`), and `-0.0` for negative whole turns.
#[allow(clippy::float_cmp)]
fn normalize_hue(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(1.0);
    if wrapped >= 1.0 || wrapped == 0.0 { 0.0 } else { wrapped }
}

#[allow(clippy::float_cmp)]
fn hue_snap_eq(lhs: f64, rhs: f64) -> bool {
    lhs.snap().rem_euclid(1.0) == rhs.snap().rem_euclid(1.0)
}

impl TransformColor for HslColor {
    fn kind(&self) -> ColorKind { ColorKind::Hsl }

    fn as_rgb(&self) -> RgbColor { RgbColor::from_hsl(*self) }

    fn as_hsl(&self) -> HslColor { *self }

    fn lift_from_rgb(&self, rgb: RgbColor) -> Self { Self::from_rgb(rgb) }

    fn lift_from_hsl(&self, hsl: HslColor) -> Self { hsl }

    #[allow(clippy::float_cmp)]
    fn snapped_eq(&self, other: &impl TransformColor) -> bool {
        let other = other.as_hsl();
        if !(snap_eq(self.lightness, other.lightness) && snap_eq(self.alpha, other.alpha)) {
            return false;
        }

        // Black and white, saturation and hue carry no information.
        let lightness = self.lightness.snap();
        if lightness == 0.0 || lightness == 1.0 {
            return true;
        }

        if !snap_eq(self.saturation, other.saturation) {
            return false;
        }

        // Gray, hue carries no information.
        self.saturation.snap() == 0.0 || hue_snap_eq(self.hue, other.hue)
    }

    fn grayscale(&self) -> Self {
        Self::from_parts(self.hue, [0.0, self.lightness, self.alpha])
    }

    /// Exact, no snapping.
    #[allow(clippy::float_cmp)]
    fn is_grayscale(&self) -> bool { self.saturation == 0.0 }
}

impl From<RgbColor> for HslColor {
    fn from(rgb: RgbColor) -> Self { Self::from_rgb(rgb) }
}

impl PartialEq for HslColor {
    fn eq(&self, other: &Self) -> bool { self.snapped_eq(other) }
}

impl PartialEq<RgbColor> for HslColor {
    fn eq(&self, other: &RgbColor) -> bool { self.snapped_eq(other) }
}

impl Neg for HslColor {
    type Output = HslColor;

    fn neg(self) -> Self::Output { self.inverse() }
}

impl Display for HslColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "HSL Color(hue: {:?}, saturation: {:?}, lightness: {:?}, alpha: {:?})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

impl TryFrom<HslChannels> for HslColor {
    type Error = PigmentError;

    fn try_from(value: HslChannels) -> Result<Self, Self::Error> {
        let HslChannels {
            hue,
            saturation,
            lightness,
            alpha,
        } = value;
        Self::new(hue, saturation, lightness, alpha)
    }
}

impl From<HslColor> for HslChannels {
    fn from(color: HslColor) -> Self {
        Self {
            hue: color.hue,
            saturation: color.saturation,
            lightness: color.lightness,
            alpha: color.alpha,
        }
    }
}
