// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words tetradic

//! RGB color representation. Channels are normalized `f64` in `[0.0, 1.0]`.
//!
//! This is the representation that arithmetic and the hex codecs are defined on.

use crate::{ChannelFloats, ChannelInts, ColorKind, ColorSet, DEBUG_PIGMENT_MOD,
            FloatSnap, HexValue, HslColor, PigmentError, PigmentResult, RgbChannel,
            TransformColor, decode_hex_integer, decode_hex_string, decode_hex_value,
            pack_rgba, parse_channel_selectors, snap_eq, unpack_rgba};
use rand::Rng;
use smallvec::smallvec;
use std::{fmt::{Display, Formatter, Result as FmtResult},
          ops::{Add, Neg, Sub},
          str::FromStr};

/// Represents a color as normalized red, green, blue, and alpha channels.
///
/// Values are immutable, every operation returns a new [`RgbColor`]. Construction
/// never clamps: out of range input is an error.
///
/// Equality is snapped, see [`TransformColor::snapped_eq`]. It is not [`Eq`] or
/// [`Hash`], since two colors that compare equal may carry different bits.
///
/// Serializes as [`RgbChannels`]. Deserializing also accepts a hex string.
///
/// ```
/// use r3bl_pigment::RgbColor;
///
/// let color = RgbColor::rgb(0.1, 0.2, 0.3).unwrap();
/// let json = serde_json::to_string(&color).unwrap();
/// assert_eq!(json, r#"{"red":0.1,"green":0.2,"blue":0.3,"alpha":1.0}"#);
/// assert_eq!(serde_json::from_str::<RgbColor>(&json).unwrap(), color);
/// assert!(serde_json::from_str::<RgbColor>(r##""#ff0000""##).is_ok());
/// ```
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RgbRepr", into = "RgbChannels")]
pub struct RgbColor {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

/// Serialized form of [`RgbColor`]. A missing `alpha` is `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RgbChannels {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    #[serde(default = "super::hsl_color::opaque_alpha")]
    pub alpha: f64,
}

/// Either input form of [`RgbColor`].
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RgbRepr {
    Channels(RgbChannels),
    Hex(String),
}

impl RgbColor {
    /// # Errors
    ///
    /// Returns [`PigmentError::InvalidColorFormat`] if any channel is outside
    /// `[0.0, 1.0]` or is `NaN`.
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> PigmentResult<Self> {
        let channels = [red, green, blue, alpha];
        if channels.iter().all(|it| (0.0..=1.0).contains(it)) {
            Ok(Self::from_parts([red, green, blue], alpha))
        } else {
            PigmentError::new_invalid_color_format_result(channels)
        }
    }

    /// Opaque color, same as [`Self::new`] with `alpha = 1.0`.
    ///
    /// # Errors
    ///
    /// Returns [`PigmentError::InvalidColorFormat`] if any channel is out of range.
    pub fn rgb(red: f64, green: f64, blue: f64) -> PigmentResult<Self> {
        Self::new(red, green, blue, 1.0)
    }

    /// Callers guarantee that every channel is in range.
    pub(crate) fn from_parts([red, green, blue]: [f64; 3], alpha: f64) -> Self {
        debug_assert!(
            [red, green, blue, alpha]
                .iter()
                .all(|it| (0.0..=1.0).contains(it)),
            "channels out of range: {red}, {green}, {blue}, {alpha}"
        );
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Each byte divided by 255.
    #[must_use]
    pub fn from_rgba_bytes([red, green, blue, alpha]: [u8; 4]) -> Self {
        let to_unit = |byte: u8| f64::from(byte) / 255.0;
        Self::from_parts([to_unit(red), to_unit(green), to_unit(blue)], to_unit(alpha))
    }

    /// # Errors
    ///
    /// Returns [`PigmentError::InvalidColorFormat`] if any value is outside
    /// `[0, 255]`.
    pub fn from_rgba_integers(
        red: i32,
        green: i32,
        blue: i32,
        alpha: i32,
    ) -> PigmentResult<Self> {
        let ints = [red, green, blue, alpha];
        let mut bytes = [0_u8; 4];
        for (byte, int) in bytes.iter_mut().zip(ints) {
            *byte = match u8::try_from(int) {
                Ok(it) => it,
                Err(_) => return PigmentError::new_invalid_color_format_result(ints),
            };
        }
        Ok(Self::from_rgba_bytes(bytes))
    }

    /// # Errors
    ///
    /// Returns [`PigmentError::InvalidColorFormat`] if any value is outside
    /// `[0, 255]`.
    pub fn from_rgb_integers(red: i32, green: i32, blue: i32) -> PigmentResult<Self> {
        Self::from_rgba_integers(red, green, blue, 255)
    }

    /// Decodes a hex string (`#?RRGGBB[AA]`), a packed `0xRRGGBBAA` integer, or a float
    /// that rounds to one.
    ///
    /// ```
    /// use r3bl_pigment::RgbColor;
    ///
    /// let from_str = RgbColor::from_hex("ff000080").unwrap();
    /// let from_int = RgbColor::from_hex(0xff00_0080_u32).unwrap();
    /// assert_eq!(from_str, from_int);
    /// assert!(RgbColor::from_hex("#ff00").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PigmentError::InvalidColorFormat`] for malformed strings and out of
    /// range numbers.
    pub fn from_hex<'a>(value: impl Into<HexValue<'a>>) -> PigmentResult<Self> {
        decode_hex_value(value.into()).map(Self::from_rgba_bytes)
    }

    /// # Errors
    ///
    /// Returns [`PigmentError::InvalidColorFormat`] unless the whole input matches
    /// `#?RRGGBB[AA]`.
    pub fn from_hex_string(input: &str) -> PigmentResult<Self> {
        decode_hex_string(input).map(Self::from_rgba_bytes)
    }

    /// # Errors
    ///
    /// Returns [`PigmentError::InvalidColorFormat`] if `value` is outside
    /// `[0, 0xFFFFFFFF]`.
    pub fn from_hex_integer(value: i64) -> PigmentResult<Self> {
        decode_hex_integer(value).map(Self::from_rgba_bytes)
    }

    #[must_use]
    pub fn from_hex_u32(packed: u32) -> Self { Self::from_rgba_bytes(unpack_rgba(packed)) }

    /// Packs [`TransformColor::to_ints`] as `0xRRGGBBAA`.
    #[must_use]
    pub fn to_hex_u32(&self) -> u32 {
        pack_rgba(self.rgba().map(channel_to_byte))
    }

    /// Standard HSL to RGB conversion. Every channel, alpha included, is rounded to 2
    /// decimal digits so that simple conversions land on exact values. Achromatic
    /// colors keep their exact lightness, only alpha is rounded.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_hsl(hsl: HslColor) -> Self {
        let [hue, saturation, lightness] = hsl.hsl();
        let alpha = hsl.alpha().round_to(2).clamp(0.0, 1.0);

        // Achromatic.
        if saturation == 0.0 {
            return Self::from_parts([lightness; 3], alpha);
        }

        let v2 = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - saturation * lightness
        };
        let v1 = 2.0 * lightness - v2;

        let channels = [1.0 / 3.0, 0.0, -1.0 / 3.0]
            .map(|offset| hue_to_channel(v1, v2, (hue + offset).rem_euclid(1.0)))
            .map(|it| it.round_to(2).clamp(0.0, 1.0));

        Self::from_parts(channels, alpha)
    }

    /// Each channel drawn independently and uniformly from `[0.0, 1.0]`, fully opaque.
    #[must_use]
    pub fn random() -> Self {
        let mut rng = rand::rng();
        let mut channel = || rng.random_range(0.0..=1.0);
        Self::from_parts([channel(), channel(), channel()], 1.0)
    }

    /// If the largest channel lies outside `[0.0, 1.0]`, divides every channel by it.
    /// This keeps the ratios between channels (and so the hue) instead of clamping.
    #[must_use]
    pub fn suppress(channels: [f64; 3]) -> [f64; 3] {
        let max = channels.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if (0.0..=1.0).contains(&max) {
            return channels;
        }

        DEBUG_PIGMENT_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🗜️ Suppressing out of range channels",
                channels = ?channels,
                max = %max
            );
        });

        channels.map(|it| it / max)
    }

    /// Per channel sum, suppressed. Alpha is `self`'s.
    #[must_use]
    pub fn add_color(&self, other: &impl TransformColor) -> Self {
        let other = other.as_rgb();
        self.combine(|lhs, rhs| lhs + rhs, &other)
    }

    /// Per channel difference with negatives clamped to `0.0`. Alpha is `self`'s.
    #[must_use]
    pub fn subtract_color(&self, other: &impl TransformColor) -> Self {
        let other = other.as_rgb();
        self.combine(|lhs, rhs| lhs - rhs, &other)
    }

    /// Scales red, green, and blue by `scalar`, then suppresses.
    ///
    /// Negative scalars are rejected, not clamped to black.
    ///
    /// # Errors
    ///
    /// Returns [`PigmentError::InvalidArgument`] if `scalar` is negative, `NaN`, or
    /// infinite.
    pub fn multiply(&self, scalar: f64) -> PigmentResult<Self> {
        if !(scalar.is_finite() && scalar >= 0.0) {
            return PigmentError::new_invalid_argument_result(format!(
                "multiplier must be a finite non negative number, got {scalar}"
            ));
        }
        self.scale(|it| it * scalar)
    }

    /// Divides red, green, and blue by `scalar`, then suppresses. Like
    /// [`Self::multiply`], negative scalars are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`PigmentError::InvalidArgument`] if `scalar` is not a finite positive
    /// number, or so small that a channel overflows.
    pub fn divide(&self, scalar: f64) -> PigmentResult<Self> {
        if !(scalar.is_finite() && scalar > 0.0) {
            return PigmentError::new_invalid_argument_result(format!(
                "divisor must be a finite positive number, got {scalar}"
            ));
        }
        self.scale(|it| it / scalar)
    }

    /// Linear blend `channel + amount * (other - channel)` of red, green, and blue.
    /// Negative amounts extrapolate away from `other`, and any channel pushed below
    /// `0.0` is clamped before suppressing. Alpha is `self`'s.
    ///
    /// # Errors
    ///
    /// Returns [`PigmentError::InvalidArgument`] if `amount` is outside `[-1.0, 1.0]`.
    pub fn interpolate(
        &self,
        other: &impl TransformColor,
        amount: f64,
    ) -> PigmentResult<Self> {
        if !(-1.0..=1.0).contains(&amount) {
            return PigmentError::new_invalid_argument_result(format!(
                "interpolation amount must lie in [-1.0, 1.0], got {amount}"
            ));
        }
        let other = other.as_rgb();
        Ok(self.combine(|lhs, rhs| lhs + amount * (rhs - lhs), &other))
    }

    /// `1.0 - channel` for red, green, and blue.
    #[must_use]
    pub fn inverted(&self) -> Self {
        Self::from_parts(self.rgb_channels().map(|it| 1.0 - it), self.alpha)
    }

    /// # Errors
    ///
    /// Returns [`PigmentError::InvalidColorFormat`] if `alpha` is out of range.
    pub fn with_alpha(&self, alpha: f64) -> PigmentResult<Self> {
        let [red, green, blue] = self.rgb_channels();
        Self::new(red, green, blue, alpha)
    }

    #[must_use]
    pub fn red(&self) -> f64 { self.red }

    #[must_use]
    pub fn green(&self) -> f64 { self.green }

    #[must_use]
    pub fn blue(&self) -> f64 { self.blue }

    #[must_use]
    pub fn alpha(&self) -> f64 { self.alpha }

    #[must_use]
    pub fn rgb_channels(&self) -> [f64; 3] { [self.red, self.green, self.blue] }

    #[must_use]
    pub fn rgba(&self) -> [f64; 4] { [self.red, self.green, self.blue, self.alpha] }

    #[must_use]
    pub fn to_array(&self, with_alpha: bool) -> ChannelFloats {
        if with_alpha {
            ChannelFloats::from_slice(&self.rgba())
        } else {
            ChannelFloats::from_slice(&self.rgb_channels())
        }
    }

    /// Each channel times 255, truncated toward zero. The product is snapped first, so
    /// `128.0 / 255.0` maps back to `128` instead of `127`.
    #[must_use]
    pub fn channel_ints(&self, with_alpha: bool) -> ChannelInts {
        self.to_array(with_alpha)
            .into_iter()
            .map(channel_to_byte)
            .collect()
    }

    #[must_use]
    pub fn channel(&self, selector: RgbChannel) -> f64 {
        match selector {
            RgbChannel::Red => self.red,
            RgbChannel::Green => self.green,
            RgbChannel::Blue => self.blue,
            RgbChannel::Alpha => self.alpha,
        }
    }

    /// Picks channels in the order given, repeats allowed.
    #[must_use]
    pub fn channels(&self, selectors: &[RgbChannel]) -> ChannelFloats {
        selectors.iter().map(|it| self.channel(*it)).collect()
    }

    /// [`Self::channels`] with selectors spelled as letters, eg: `"bgra"`.
    ///
    /// # Errors
    ///
    /// Returns [`PigmentError::InvalidArgument`] if `selectors` is empty or has a
    /// letter other than `r`, `g`, `b`, `a`.
    pub fn channels_from_str(&self, selectors: &str) -> PigmentResult<ChannelFloats> {
        let selectors = parse_channel_selectors::<RgbChannel>(selectors)?;
        Ok(self.channels(&selectors))
    }

    fn combine(&self, op: impl Fn(f64, f64) -> f64, other: &RgbColor) -> Self {
        let [red, green, blue] = self.rgb_channels();
        let raw = [
            op(red, other.red),
            op(green, other.green),
            op(blue, other.blue),
        ];
        Self::settle(raw, self.alpha)
    }

    fn scale(&self, op: impl Fn(f64) -> f64) -> PigmentResult<Self> {
        let raw = self.rgb_channels().map(op);
        if raw.iter().all(|it| it.is_finite()) {
            Ok(Self::settle(raw, self.alpha))
        } else {
            PigmentError::new_invalid_argument_result(format!(
                "scaling {self} overflowed to {raw:?}"
            ))
        }
    }

    /// Clamps negatives to `0.0`, then suppresses.
    fn settle(raw: [f64; 3], alpha: f64) -> Self {
        let suppressed = Self::suppress(raw.map(|it| it.max(0.0)));
        Self::from_parts(suppressed.map(|it| it.clamp(0.0, 1.0)), alpha)
    }
}

fn hue_to_channel(v1: f64, v2: f64, hue: f64) -> f64 {
    if 6.0 * hue < 1.0 {
        v1 + (v2 - v1) * 6.0 * hue
    } else if 2.0 * hue < 1.0 {
        v2
    } else if 3.0 * hue < 2.0 {
        v1 + (v2 - v1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        v1
    }
}

/// `channel` is in `[0.0, 1.0]`, so the product fits in a [`u8`].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_to_byte(channel: f64) -> u8 {
    (channel * 255.0).snap().trunc().clamp(0.0, 255.0) as u8
}

impl TransformColor for RgbColor {
    fn kind(&self) -> ColorKind { ColorKind::Rgb }

    fn as_rgb(&self) -> RgbColor { *self }

    fn as_hsl(&self) -> HslColor { HslColor::from_rgb(*self) }

    fn lift_from_rgb(&self, rgb: RgbColor) -> Self { rgb }

    fn lift_from_hsl(&self, hsl: HslColor) -> Self { Self::from_hsl(hsl) }

    fn snapped_eq(&self, other: &impl TransformColor) -> bool {
        let other = other.as_rgb();
        self.rgba()
            .into_iter()
            .zip(other.rgba())
            .all(|(lhs, rhs)| snap_eq(lhs, rhs))
    }

    /// Unweighted mean of red, green, and blue.
    fn grayscale(&self) -> Self {
        let mean = (self.red + self.green + self.blue) / 3.0;
        Self::from_parts([mean.clamp(0.0, 1.0); 3], self.alpha)
    }

    /// Exact, no snapping.
    #[allow(clippy::float_cmp)]
    fn is_grayscale(&self) -> bool { self.red == self.green && self.green == self.blue }

    /// Channel rotation `(blue, red, green)` and `(green, blue, red)`. This matches a
    /// ±120° hue rotation only for fully saturated colors, and is kept as the RGB
    /// specific shortcut. Convert to [`HslColor`] for a true hue rotation.
    fn triadic(&self) -> ColorSet<Self> {
        let Self {
            red,
            green,
            blue,
            alpha,
        } = *self;
        smallvec![
            Self::from_parts([blue, red, green], alpha),
            Self::from_parts([green, blue, red], alpha),
        ]
    }
}

impl From<HslColor> for RgbColor {
    fn from(hsl: HslColor) -> Self { Self::from_hsl(hsl) }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::from_rgba_bytes([red, green, blue, u8::MAX])
    }
}

impl From<(u8, u8, u8, u8)> for RgbColor {
    fn from((red, green, blue, alpha): (u8, u8, u8, u8)) -> Self {
        Self::from_rgba_bytes([red, green, blue, alpha])
    }
}

impl From<u32> for RgbColor {
    fn from(packed: u32) -> Self { Self::from_hex_u32(packed) }
}

impl PartialEq for RgbColor {
    fn eq(&self, other: &Self) -> bool { self.snapped_eq(other) }
}

impl PartialEq<HslColor> for RgbColor {
    fn eq(&self, other: &HslColor) -> bool { self.snapped_eq(other) }
}

impl<T: TransformColor> Add<T> for RgbColor {
    type Output = RgbColor;

    fn add(self, rhs: T) -> Self::Output { self.add_color(&rhs) }
}

impl<T: TransformColor> Sub<T> for RgbColor {
    type Output = RgbColor;

    fn sub(self, rhs: T) -> Self::Output { self.subtract_color(&rhs) }
}

impl Neg for RgbColor {
    type Output = RgbColor;

    fn neg(self) -> Self::Output { self.inverse() }
}

impl Display for RgbColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "RGB Color(red: {:?}, green: {:?}, blue: {:?}, alpha: {:?})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl FromStr for RgbColor {
    type Err = PigmentError;

    fn from_str(input: &str) -> Result<Self, Self::Err> { Self::from_hex_string(input) }
}

impl TryFrom<RgbChannels> for RgbColor {
    type Error = PigmentError;

    fn try_from(value: RgbChannels) -> Result<Self, Self::Error> {
        let RgbChannels {
            red,
            green,
            blue,
            alpha,
        } = value;
        Self::new(red, green, blue, alpha)
    }
}

impl TryFrom<RgbRepr> for RgbColor {
    type Error = PigmentError;

    fn try_from(repr: RgbRepr) -> Result<Self, Self::Error> {
        match repr {
            RgbRepr::Channels(channels) => channels.try_into(),
            RgbRepr::Hex(hex) => Self::from_hex_string(&hex),
        }
    }
}

impl From<RgbColor> for RgbChannels {
    fn from(color: RgbColor) -> Self {
        let [red, green, blue, alpha] = color.rgba();
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    fn rgb(red: f64, green: f64, blue: f64) -> RgbColor {
        RgbColor::rgb(red, green, blue).unwrap()
    }

    fn assert_in_range(color: RgbColor) {
        for channel in color.rgba() {
            assert!((0.0..=1.0).contains(&channel), "{color}");
        }
    }

    #[test]
    fn test_new_accepts_bounds() {
        let color = RgbColor::new(0.0, 1.0, 0.5, 0.0).unwrap();
        assert_eq2!(color.rgba(), [0.0, 1.0, 0.5, 0.0]);
        assert_eq2!(rgb(0.1, 0.2, 0.3).alpha(), 1.0);
    }

    #[test_case(1.5, 0.0, 0.0, 1.0)]
    #[test_case(0.0, -0.1, 0.0, 1.0)]
    #[test_case(0.0, 0.0, 0.0, 1.01)]
    #[test_case(f64::NAN, 0.0, 0.0, 1.0)]
    #[test_case(0.0, f64::INFINITY, 0.0, 1.0)]
    fn test_new_rejects_out_of_range(red: f64, green: f64, blue: f64, alpha: f64) {
        let error = RgbColor::new(red, green, blue, alpha).unwrap_err();
        assert!(error.is_invalid_color_format());
    }

    #[test]
    fn test_from_hex_forms_agree() {
        let red = RgbColor::new(1.0, 0.0, 0.0, 1.0).unwrap();
        assert_eq2!(RgbColor::from_hex("ff0000ff").unwrap(), red);
        assert_eq2!(RgbColor::from_hex("#FF0000").unwrap(), red);
        assert_eq2!(RgbColor::from_hex(0xff00_00ff_i64).unwrap(), red);
        assert_eq2!(RgbColor::from_hex(4_278_190_335.4).unwrap(), red);
        assert_eq2!(RgbColor::from_hex_u32(0xff00_00ff), red);
        assert_eq2!(RgbColor::from(0xff00_00ff_u32), red);
        assert_eq2!("#ff0000".parse::<RgbColor>().unwrap(), red);
        assert_eq2!(red.to_hex_u32(), 0xff00_00ff);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(RgbColor::from_hex("red").unwrap_err().is_invalid_color_format());
        assert!(RgbColor::from_hex(-1_i64).unwrap_err().is_invalid_color_format());
        assert!(
            RgbColor::from_hex(f64::INFINITY)
                .unwrap_err()
                .is_invalid_color_format()
        );
    }

    #[test]
    fn test_from_integers() {
        let color = RgbColor::from_rgba_integers(255, 0, 51, 0).unwrap();
        assert_eq2!(color.rgba(), [1.0, 0.0, 0.2, 0.0]);
        assert_eq2!(RgbColor::from_rgb_integers(0, 0, 255).unwrap(), rgb(0.0, 0.0, 1.0));
        assert_eq2!(RgbColor::from((255, 255, 0)), rgb(1.0, 1.0, 0.0));
        assert_eq2!(RgbColor::from((0, 0, 0, 0)).alpha(), 0.0);

        assert!(RgbColor::from_rgb_integers(256, 0, 0).is_err());
        assert!(RgbColor::from_rgba_integers(0, 0, 0, -1).is_err());
    }

    #[test_case(120.0, 1.0, 0.5, [0.0, 1.0, 0.0])]
    #[test_case(0.0, 1.0, 0.5, [1.0, 0.0, 0.0])]
    #[test_case(30.0, 1.0, 0.5, [1.0, 0.5, 0.0])]
    #[test_case(240.0, 1.0, 0.25, [0.0, 0.0, 0.5])]
    #[test_case(77.0, 0.0, 0.3, [0.3, 0.3, 0.3])]
    #[test_case(0.0, 1.0, 0.333, [0.67, 0.0, 0.0])]
    fn test_from_hsl(degrees: f64, saturation: f64, lightness: f64, expected: [f64; 3]) {
        let hsl = HslColor::from_hue_angle(degrees, saturation, lightness, 0.5).unwrap();
        let color = RgbColor::from_hsl(hsl);
        assert_eq2!(color.rgb_channels(), expected);
        assert_eq2!(color.alpha(), 0.5);
    }

    #[test_case(0.0, 1.0, 0.5, 0.333, 0.33)]
    #[test_case(0.0, 0.0, 0.5, 0.333, 0.33)]
    #[test_case(0.5, 1.0, 0.5, 0.996, 1.0)]
    fn test_from_hsl_rounds_alpha(
        hue: f64,
        saturation: f64,
        lightness: f64,
        alpha: f64,
        expected: f64,
    ) {
        let hsl = HslColor::new(hue, saturation, lightness, alpha).unwrap();
        assert_eq2!(RgbColor::from_hsl(hsl).alpha(), expected);
    }

    #[test]
    fn test_constructor_and_channel_accessor() {
        let color = RgbColor::rgb(0.1, 0.2, 0.3).unwrap();
        assert_eq2!(color.rgb_channels(), [0.1, 0.2, 0.3]);
        assert_eq2!(color.rgba(), [0.1, 0.2, 0.3, 1.0]);
    }

    #[test]
    fn test_add_is_capped() {
        let red = rgb(1.0, 0.0, 0.0);
        let green = rgb(0.0, 1.0, 0.0);
        assert_eq2!(red + green, rgb(1.0, 1.0, 0.0));

        // (2.0, 1.5, 0.0) is scaled down by 2.0.
        let sum = rgb(1.0, 0.5, 0.0) + rgb(1.0, 1.0, 0.0);
        assert_eq2!(sum, rgb(1.0, 0.75, 0.0));

        // Mixed representations are converted to RGB first.
        let hsl_blue = HslColor::from_hue_angle(240.0, 1.0, 0.5, 1.0).unwrap();
        assert_eq2!(red + hsl_blue, rgb(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_subtract_clamps_at_zero() {
        let gray = rgb(0.5, 0.5, 0.5);
        let difference = gray - rgb(1.0, 0.25, 0.0);
        assert_eq2!(difference.rgb_channels(), [0.0, 0.25, 0.5]);
        assert_eq2!(gray - gray, rgb(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_arithmetic_keeps_left_alpha() {
        let translucent = RgbColor::new(0.2, 0.2, 0.2, 0.4).unwrap();
        let opaque = rgb(0.1, 0.1, 0.1);
        assert_eq2!((translucent + opaque).alpha(), 0.4);
        assert_eq2!((translucent - opaque).alpha(), 0.4);
        assert_eq2!(translucent.multiply(2.0).unwrap().alpha(), 0.4);
        assert_eq2!(translucent.interpolate(&opaque, 0.5).unwrap().alpha(), 0.4);
    }

    #[test]
    fn test_multiply_and_divide() {
        let color = rgb(0.5, 0.25, 0.1);
        assert_eq2!(color.multiply(2.0).unwrap(), rgb(1.0, 0.5, 0.2));
        // (2.0, 1.0, 0.4) is scaled down by 2.0.
        assert_eq2!(color.multiply(4.0).unwrap(), rgb(1.0, 0.5, 0.2));
        assert_eq2!(color.multiply(0.0).unwrap(), rgb(0.0, 0.0, 0.0));
        assert_eq2!(color.divide(2.0).unwrap(), rgb(0.25, 0.125, 0.05));
        assert_eq2!(color.divide(0.25).unwrap(), rgb(1.0, 0.5, 0.2));
    }

    #[test_case(-1.0)]
    #[test_case(f64::NAN)]
    #[test_case(f64::INFINITY)]
    fn test_multiply_rejects_bad_scalar(scalar: f64) {
        let error = rgb(0.5, 0.5, 0.5).multiply(scalar).unwrap_err();
        assert!(error.is_invalid_argument());
    }

    #[test_case(0.0)]
    #[test_case(-2.0)]
    #[test_case(f64::NAN)]
    #[test_case(1e-320)]
    fn test_divide_rejects_bad_scalar(scalar: f64) {
        let error = rgb(0.5, 0.5, 1.0).divide(scalar).unwrap_err();
        assert!(error.is_invalid_argument());
    }

    #[test]
    fn test_interpolate() {
        let black = rgb(0.0, 0.0, 0.0);
        let white = rgb(1.0, 1.0, 1.0);
        assert_eq2!(black.interpolate(&white, 0.25).unwrap(), rgb(0.25, 0.25, 0.25));
        assert_eq2!(black.interpolate(&white, 1.0).unwrap(), white);
        assert_eq2!(black.interpolate(&white, 0.0).unwrap(), black);

        // Negative amounts push away from the other color.
        let gray = rgb(0.5, 0.5, 0.5);
        let red = rgb(1.0, 0.0, 0.0);
        assert_eq2!(gray.interpolate(&red, -1.0).unwrap(), rgb(0.0, 1.0, 1.0));
    }

    #[test_case(1.5)]
    #[test_case(-1.01)]
    #[test_case(f64::NAN)]
    fn test_interpolate_rejects_amount(amount: f64) {
        let gray = rgb(0.5, 0.5, 0.5);
        let error = gray.interpolate(&gray, amount).unwrap_err();
        assert!(error.is_invalid_argument());
    }

    #[test]
    fn test_arithmetic_results_stay_in_range() {
        let colors = [
            rgb(1.0, 1.0, 1.0),
            rgb(0.9, 0.1, 0.7),
            rgb(0.0, 0.0, 0.0),
            rgb(0.3, 0.8, 1.0),
        ];
        for lhs in colors {
            for rhs in colors {
                assert_in_range(lhs + rhs);
                assert_in_range(lhs - rhs);
                for amount in [-1.0, -0.5, 0.0, 0.5, 1.0] {
                    assert_in_range(lhs.interpolate(&rhs, amount).unwrap());
                }
            }
            for scalar in [0.0, 0.5, 3.0, 1000.0] {
                assert_in_range(lhs.multiply(scalar).unwrap());
            }
            for scalar in [0.001, 0.5, 3.0] {
                assert_in_range(lhs.divide(scalar).unwrap());
            }
        }
    }

    #[test]
    fn test_suppress() {
        assert_eq2!(RgbColor::suppress([0.2, 0.4, 1.0]), [0.2, 0.4, 1.0]);
        assert_eq2!(RgbColor::suppress([2.0, 1.0, 0.5]), [1.0, 0.5, 0.25]);
    }

    #[test]
    fn test_triadic_is_channel_rotation() {
        let red = rgb(1.0, 0.0, 0.0);
        assert_eq2!(
            red.triadic().to_vec(),
            vec![rgb(0.0, 1.0, 0.0), rgb(0.0, 0.0, 1.0)]
        );

        // Partially saturated colors rotate channels, they are not hue rotated.
        let muted = RgbColor::new(0.8, 0.4, 0.2, 0.5).unwrap();
        let triadic = muted.triadic();
        assert_eq2!(triadic[0].rgba(), [0.2, 0.8, 0.4, 0.5]);
        assert_eq2!(triadic[1].rgba(), [0.4, 0.2, 0.8, 0.5]);
    }

    #[test]
    fn test_grayscale() {
        let color = RgbColor::new(0.3, 0.6, 0.9, 0.2).unwrap();
        assert!(!color.is_grayscale());
        let gray = color.grayscale();
        assert!(gray.is_grayscale());
        assert_eq2!(gray, RgbColor::new(0.6, 0.6, 0.6, 0.2).unwrap());
    }

    #[test]
    fn test_negation_is_inverse() {
        assert_eq2!(-rgb(1.0, 0.0, 0.0), rgb(0.0, 1.0, 1.0));
        assert_eq2!(-(-rgb(0.2, 0.3, 0.4)), rgb(0.2, 0.3, 0.4));
    }

    #[test]
    fn test_to_ints_truncates() {
        let color = RgbColor::new(0.5, 128.0 / 255.0, 1.0, 0.0).unwrap();
        assert_eq2!(color.to_ints(true).to_vec(), vec![127, 128, 255, 0]);
        assert_eq2!(color.to_hex(false), "7f80ff".to_string());
    }

    #[test_case(rgb(0.2, 0.4, 0.6))]
    #[test_case(rgb(1.0, 0.5, 0.0))]
    #[test_case(rgb(0.13, 0.57, 0.91))]
    #[test_case(rgb(0.7, 0.7, 0.7))]
    #[test_case(rgb(0.0, 0.0, 0.0))]
    #[test_case(RgbColor::new(0.25, 0.1, 0.95, 0.3).unwrap())]
    fn test_round_trip_through_hsl(color: RgbColor) {
        let round_trip = color.as_hsl().as_rgb();
        assert_eq2!(round_trip, color);
    }

    #[test_case((255, 0, 0, 255))]
    #[test_case((12, 34, 56, 78))]
    #[test_case((0, 0, 0, 0))]
    #[test_case((1, 128, 254, 255))]
    fn test_hex_round_trip(bytes: (u8, u8, u8, u8)) {
        let color = RgbColor::from(bytes);
        assert_eq2!(RgbColor::from_hex(color.to_hex(true).as_str()).unwrap(), color);
        assert_eq2!(RgbColor::from_hex_u32(color.to_hex_u32()), color);
    }

    #[test]
    fn test_random_is_opaque_and_in_range() {
        for _ in 0..100 {
            let color = RgbColor::random();
            assert_in_range(color);
            assert_eq2!(color.alpha(), 1.0);
        }
    }

    #[test]
    fn test_channels() {
        let color = RgbColor::new(0.1, 0.2, 0.3, 0.4).unwrap();
        assert_eq2!(color.channels_from_str("bgra").unwrap().to_vec(), vec![
            0.3, 0.2, 0.1, 0.4
        ]);
        assert_eq2!(color.channels_from_str("rrrr").unwrap().to_vec(), vec![0.1; 4]);
        assert_eq2!(
            color.channels(&[RgbChannel::Alpha, RgbChannel::Green]).to_vec(),
            vec![0.4, 0.2]
        );
        assert!(color.channels_from_str("rgbx").unwrap_err().is_invalid_argument());
        assert_eq2!(color.to_array(false).to_vec(), vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_with_alpha() {
        let color = rgb(0.1, 0.2, 0.3).with_alpha(0.5).unwrap();
        assert_eq2!(color.rgba(), [0.1, 0.2, 0.3, 0.5]);
        assert!(color.with_alpha(2.0).is_err());
    }

    #[test]
    fn test_equality_is_snapped() {
        let third = rgb(1.0 / 3.0, 0.0, 0.0);
        assert_eq2!(third, rgb(0.333_333_4, 0.0, 0.0));
        assert_ne!(third, rgb(0.34, 0.0, 0.0));
        assert_ne!(third, RgbColor::new(1.0 / 3.0, 0.0, 0.0, 0.5).unwrap());
    }

    #[test]
    fn test_display() {
        let color = RgbColor::new(1.0, 0.5, 0.0, 1.0).unwrap();
        assert_eq2!(
            color.to_string(),
            "RGB Color(red: 1.0, green: 0.5, blue: 0.0, alpha: 1.0)".to_string()
        );
    }

    #[test]
    fn test_serde_keeps_exact_channels() {
        let color = RgbColor::new(0.1, 0.2, 0.3, 0.45).unwrap();
        let json = serde_json::to_string(&color).unwrap();
        assert_eq2!(
            json,
            r#"{"red":0.1,"green":0.2,"blue":0.3,"alpha":0.45}"#.to_string()
        );
        let back: RgbColor = serde_json::from_str(&json).unwrap();
        assert_eq2!(back.rgba(), color.rgba());

        let opaque: RgbColor =
            serde_json::from_str(r#"{"red":0.1,"green":0.2,"blue":0.3}"#).unwrap();
        assert_eq2!(opaque.alpha(), 1.0);

        assert!(
            serde_json::from_str::<RgbColor>(r#"{"red":1.5,"green":0.0,"blue":0.0}"#)
                .is_err()
        );
    }

    #[test]
    fn test_serde_accepts_hex() {
        let color: RgbColor = serde_json::from_str(r##""#ff8000ff""##).unwrap();
        assert_eq2!(color, RgbColor::from((255, 128, 0, 255)));
        assert!(serde_json::from_str::<RgbColor>(r##""#ff80""##).is_err());
    }
}
