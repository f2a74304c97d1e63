// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Explicit channel selection ("swizzles"). A selector list like `"rgba"` or `"hhsl"`
//! picks channels from a color in the given order, with repetition allowed.

use crate::{PigmentError, PigmentResult};
use smallvec::SmallVec;
use strum_macros::{Display, EnumIter};

/// Float channel values, inline for the common case of four or fewer selectors.
pub type ChannelFloats = SmallVec<[f64; 4]>;

/// 8-bit channel values.
pub type ChannelInts = SmallVec<[u8; 4]>;

/// Selector list, inline for four or fewer selectors.
pub type ChannelSelectors<T> = SmallVec<[T; 4]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum RgbChannel {
    Red,
    Green,
    Blue,
    Alpha,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum HslChannel {
    Hue,
    Saturation,
    Lightness,
    Alpha,
}

impl TryFrom<char> for RgbChannel {
    type Error = PigmentError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'r' => Ok(Self::Red),
            'g' => Ok(Self::Green),
            'b' => Ok(Self::Blue),
            'a' => Ok(Self::Alpha),
            _ => PigmentError::new_invalid_argument_result(format!(
                "unknown RGB channel selector '{value}', expected one of r, g, b, a"
            )),
        }
    }
}

impl TryFrom<char> for HslChannel {
    type Error = PigmentError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'h' => Ok(Self::Hue),
            's' => Ok(Self::Saturation),
            'l' => Ok(Self::Lightness),
            'a' => Ok(Self::Alpha),
            _ => PigmentError::new_invalid_argument_result(format!(
                "unknown HSL channel selector '{value}', expected one of h, s, l, a"
            )),
        }
    }
}

/// Parses a selector string one letter at a time.
///
/// # Errors
///
/// Returns [`PigmentError::InvalidArgument`] if `selectors` is empty or contains a
/// letter that does not name a channel.
pub fn parse_channel_selectors<T>(selectors: &str) -> PigmentResult<ChannelSelectors<T>>
where
    T: TryFrom<char, Error = PigmentError>,
{
    if selectors.is_empty() {
        return PigmentError::new_invalid_argument_result("empty channel selector");
    }
    selectors.chars().map(T::try_from).collect()
}
