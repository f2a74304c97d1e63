// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words tetradic

use crate::{ColorSet, HslColor, PigmentError, PigmentResult, RgbColor, TransformColor};
use std::{fmt::{Display, Formatter, Result as FmtResult},
          ops::Neg,
          str::FromStr};
use strum_macros::{AsRefStr, Display as StrumDisplay, EnumIter};

/// The two color representations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, StrumDisplay, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum ColorKind {
    Rgb,
    Hsl,
}

/// A color whose representation is only known at runtime.
///
/// Every [`TransformColor`] operation keeps the variant: the inverse of a
/// [`Color::Hsl`] is a [`Color::Hsl`], and its harmonies are too.
///
/// ```
/// use r3bl_pigment::{Color, ColorKind, TransformColor};
///
/// let red = Color::hsl(0.0, 1.0, 0.5).unwrap();
/// let cyan = -red;
/// assert_eq!(cyan.kind(), ColorKind::Hsl);
/// assert_eq!(cyan, Color::rgb(0.0, 1.0, 1.0).unwrap());
/// ```
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Rgb(RgbColor),
    Hsl(HslColor),
}

impl Color {
    /// # Errors
    ///
    /// See [`RgbColor::new`].
    pub fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> PigmentResult<Self> {
        RgbColor::new(red, green, blue, alpha).map(Self::Rgb)
    }

    /// # Errors
    ///
    /// See [`RgbColor::new`].
    pub fn rgb(red: f64, green: f64, blue: f64) -> PigmentResult<Self> {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Hue in degrees.
    ///
    /// # Errors
    ///
    /// See [`HslColor::new`].
    pub fn hsla(
        degrees: f64,
        saturation: f64,
        lightness: f64,
        alpha: f64,
    ) -> PigmentResult<Self> {
        HslColor::from_hue_angle(degrees, saturation, lightness, alpha).map(Self::Hsl)
    }

    /// Hue in degrees.
    ///
    /// # Errors
    ///
    /// See [`HslColor::new`].
    pub fn hsl(degrees: f64, saturation: f64, lightness: f64) -> PigmentResult<Self> {
        Self::hsla(degrees, saturation, lightness, 1.0)
    }

    fn map_set<T: TransformColor>(
        set: ColorSet<T>,
        wrap: impl Fn(T) -> Color,
    ) -> ColorSet<Color> {
        set.into_iter().map(wrap).collect()
    }
}

impl TransformColor for Color {
    fn kind(&self) -> ColorKind {
        match self {
            Color::Rgb(_) => ColorKind::Rgb,
            Color::Hsl(_) => ColorKind::Hsl,
        }
    }

    fn as_rgb(&self) -> RgbColor {
        match self {
            Color::Rgb(it) => *it,
            Color::Hsl(it) => it.as_rgb(),
        }
    }

    fn as_hsl(&self) -> HslColor {
        match self {
            Color::Rgb(it) => it.as_hsl(),
            Color::Hsl(it) => *it,
        }
    }

    fn lift_from_rgb(&self, rgb: RgbColor) -> Self {
        match self {
            Color::Rgb(it) => Color::Rgb(it.lift_from_rgb(rgb)),
            Color::Hsl(it) => Color::Hsl(it.lift_from_rgb(rgb)),
        }
    }

    fn lift_from_hsl(&self, hsl: HslColor) -> Self {
        match self {
            Color::Rgb(it) => Color::Rgb(it.lift_from_hsl(hsl)),
            Color::Hsl(it) => Color::Hsl(it.lift_from_hsl(hsl)),
        }
    }

    fn snapped_eq(&self, other: &impl TransformColor) -> bool {
        match self {
            Color::Rgb(it) => it.snapped_eq(other),
            Color::Hsl(it) => it.snapped_eq(other),
        }
    }

    fn grayscale(&self) -> Self {
        match self {
            Color::Rgb(it) => Color::Rgb(it.grayscale()),
            Color::Hsl(it) => Color::Hsl(it.grayscale()),
        }
    }

    fn is_grayscale(&self) -> bool {
        match self {
            Color::Rgb(it) => it.is_grayscale(),
            Color::Hsl(it) => it.is_grayscale(),
        }
    }

    /// Keeps the RGB channel rotation shortcut for [`Color::Rgb`].
    fn triadic(&self) -> ColorSet<Self> {
        match self {
            Color::Rgb(it) => Self::map_set(it.triadic(), Color::Rgb),
            Color::Hsl(it) => Self::map_set(it.triadic(), Color::Hsl),
        }
    }
}

impl From<RgbColor> for Color {
    fn from(color: RgbColor) -> Self { Color::Rgb(color) }
}

impl From<HslColor> for Color {
    fn from(color: HslColor) -> Self { Color::Hsl(color) }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool { self.snapped_eq(other) }
}

impl PartialEq<RgbColor> for Color {
    fn eq(&self, other: &RgbColor) -> bool { self.snapped_eq(other) }
}

impl PartialEq<HslColor> for Color {
    fn eq(&self, other: &HslColor) -> bool { self.snapped_eq(other) }
}

impl PartialEq<Color> for RgbColor {
    fn eq(&self, other: &Color) -> bool { self.snapped_eq(other) }
}

impl PartialEq<Color> for HslColor {
    fn eq(&self, other: &Color) -> bool { self.snapped_eq(other) }
}

impl Neg for Color {
    type Output = Color;

    fn neg(self) -> Self::Output { self.inverse() }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Color::Rgb(it) => it.fmt(f),
            Color::Hsl(it) => it.fmt(f),
        }
    }
}

/// Only hex strings are recognized, and they decode to [`Color::Rgb`].
impl FromStr for Color {
    type Err = PigmentError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        RgbColor::from_hex_string(input).map(Color::Rgb)
    }
}
