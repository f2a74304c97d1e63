// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words tetradic

use crate::{ChannelInts, Color, ColorKind, ColorSet, Harmony, HslColor, RgbColor,
            encode_hex};

/// The capability set shared by every color representation.
///
/// Implementors supply a handful of primitives:
/// - conversion to each concrete representation ([`as_rgb`], [`as_hsl`]),
/// - lifting a concrete value back into their own representation ([`lift_from_rgb`],
///   [`lift_from_hsl`]),
/// - snapped equality against any other color ([`snapped_eq`]),
/// - grayscale semantics ([`grayscale`], [`is_grayscale`]).
///
/// Everything else is derived here once. Each derived operation converts into the
/// representation the algorithm is defined on (RGB for inversion and hex, HSL for hue
/// harmonies), computes there, and lifts the result back, so a harmony of an
/// [`RgbColor`] is a set of [`RgbColor`]s.
///
/// # Direction of the `*_of` predicates
///
/// `a.triadic_of(&b)` asks whether **`b`'s** triadic set contains `a`, comparing in the
/// representation of `b`'s harmony members. It is not "is `b` in my set". The two agree
/// for harmonies whose offsets are closed under negation (all but
/// [`Harmony::Rectangular`]). Callers that mix representations can also observe which
/// side's snapping applies.
///
/// [`as_hsl`]: Self::as_hsl
/// [`as_rgb`]: Self::as_rgb
/// [`grayscale`]: Self::grayscale
/// [`is_grayscale`]: Self::is_grayscale
/// [`lift_from_hsl`]: Self::lift_from_hsl
/// [`lift_from_rgb`]: Self::lift_from_rgb
/// [`snapped_eq`]: Self::snapped_eq
pub trait TransformColor: Copy {
    fn kind(&self) -> ColorKind;

    /// Returns a [`RgbColor`] representation of the `self` color.
    fn as_rgb(&self) -> RgbColor;

    /// Returns a [`HslColor`] representation of the `self` color.
    fn as_hsl(&self) -> HslColor;

    /// Re-expresses `rgb` in the same representation as `self`.
    #[must_use]
    fn lift_from_rgb(&self, rgb: RgbColor) -> Self;

    /// Re-expresses `hsl` in the same representation as `self`.
    #[must_use]
    fn lift_from_hsl(&self, hsl: HslColor) -> Self;

    /// Converts `other` into `self`'s representation and compares every channel after
    /// [snapping](crate::FloatSnap::snap).
    fn snapped_eq(&self, other: &impl TransformColor) -> bool;

    #[must_use]
    fn grayscale(&self) -> Self;

    fn is_grayscale(&self) -> bool;

    /// Converts into the requested representation. Identity if `self` already is one.
    fn into_kind(&self, kind: ColorKind) -> Color {
        match kind {
            ColorKind::Rgb => Color::Rgb(self.as_rgb()),
            ColorKind::Hsl => Color::Hsl(self.as_hsl()),
        }
    }

    /// Wraps `self` in a [`Color`] without changing its representation.
    fn to_color(&self) -> Color { self.into_kind(self.kind()) }

    /// `1.0 - channel` for red, green, and blue, computed in RGB and lifted back. Alpha
    /// is unchanged.
    #[must_use]
    fn inverse(&self) -> Self { self.lift_from_rgb(self.as_rgb().inverted()) }

    fn is_inverse_of(&self, other: &impl TransformColor) -> bool {
        self.inverse().snapped_eq(other)
    }

    fn harmony(&self, harmony: Harmony) -> ColorSet<Self> {
        match harmony {
            Harmony::Triadic => self.triadic(),
            Harmony::Split => self.split(),
            Harmony::Analogous => self.analogous(),
            Harmony::Tetradic => self.tetradic(),
            Harmony::Rectangular => self.rectangular(),
            Harmony::Tertiary => self.tertiary(),
        }
    }

    /// True iff `other`'s harmony set contains `self`.
    fn harmony_of(&self, harmony: Harmony, other: &impl TransformColor) -> bool {
        other
            .harmony(harmony)
            .iter()
            .any(|member| member.snapped_eq(self))
    }

    /// True iff every color in `others` is in `self`'s harmony set. Vacuously true for
    /// an empty slice.
    fn harmony_include<T: TransformColor>(&self, harmony: Harmony, others: &[T]) -> bool {
        let members = self.harmony(harmony);
        others
            .iter()
            .all(|other| members.iter().any(|member| member.snapped_eq(other)))
    }

    fn triadic(&self) -> ColorSet<Self> { hue_harmony(self, Harmony::Triadic) }

    fn split(&self) -> ColorSet<Self> { hue_harmony(self, Harmony::Split) }

    fn analogous(&self) -> ColorSet<Self> { hue_harmony(self, Harmony::Analogous) }

    fn tetradic(&self) -> ColorSet<Self> { hue_harmony(self, Harmony::Tetradic) }

    fn rectangular(&self) -> ColorSet<Self> { hue_harmony(self, Harmony::Rectangular) }

    fn tertiary(&self) -> ColorSet<Self> { hue_harmony(self, Harmony::Tertiary) }

    fn triadic_of(&self, other: &impl TransformColor) -> bool {
        self.harmony_of(Harmony::Triadic, other)
    }

    fn split_of(&self, other: &impl TransformColor) -> bool {
        self.harmony_of(Harmony::Split, other)
    }

    fn analogous_of(&self, other: &impl TransformColor) -> bool {
        self.harmony_of(Harmony::Analogous, other)
    }

    fn tetradic_of(&self, other: &impl TransformColor) -> bool {
        self.harmony_of(Harmony::Tetradic, other)
    }

    fn rectangular_of(&self, other: &impl TransformColor) -> bool {
        self.harmony_of(Harmony::Rectangular, other)
    }

    fn tertiary_of(&self, other: &impl TransformColor) -> bool {
        self.harmony_of(Harmony::Tertiary, other)
    }

    fn triadic_include<T: TransformColor>(&self, others: &[T]) -> bool {
        self.harmony_include(Harmony::Triadic, others)
    }

    fn split_include<T: TransformColor>(&self, others: &[T]) -> bool {
        self.harmony_include(Harmony::Split, others)
    }

    fn analogous_include<T: TransformColor>(&self, others: &[T]) -> bool {
        self.harmony_include(Harmony::Analogous, others)
    }

    fn tetradic_include<T: TransformColor>(&self, others: &[T]) -> bool {
        self.harmony_include(Harmony::Tetradic, others)
    }

    fn rectangular_include<T: TransformColor>(&self, others: &[T]) -> bool {
        self.harmony_include(Harmony::Rectangular, others)
    }

    fn tertiary_include<T: TransformColor>(&self, others: &[T]) -> bool {
        self.harmony_include(Harmony::Tertiary, others)
    }

    /// Each channel times 255, truncated toward zero.
    fn to_ints(&self, with_alpha: bool) -> ChannelInts {
        self.as_rgb().channel_ints(with_alpha)
    }

    /// Lowercase hex, two digits per channel, ordered red, green, blue, [alpha].
    fn to_hex(&self, with_alpha: bool) -> String { encode_hex(&self.to_ints(with_alpha)) }

    /// [`to_hex`](Self::to_hex) with a leading `#`.
    fn to_html(&self, with_alpha: bool) -> String {
        format!("#{}", self.to_hex(with_alpha))
    }
}

/// Rotates the hue of `color` (in HSL) by each of `harmony`'s offsets and lifts every
/// result back into `color`'s representation.
pub fn hue_harmony<C: TransformColor>(color: &C, harmony: Harmony) -> ColorSet<C> {
    color
        .as_hsl()
        .hue_rotations(harmony)
        .into_iter()
        .map(|hsl| color.lift_from_hsl(hsl))
        .collect()
}
