// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Hex string and packed integer codecs for 8-bit RGBA channels.
//!
//! - Hex strings match `^#?[0-9a-fA-F]{6}([0-9a-fA-F]{2})?$`, channels ordered red,
//!   green, blue, [alpha]. A missing alpha decodes as `ff`. Output is lowercase.
//! - Packed integers are 32-bit: bits 31-24 red, 23-16 green, 15-8 blue, 7-0 alpha.

use crate::{DEBUG_PIGMENT_MOD, PigmentError, PigmentResult};
use nom::{IResult, Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::{all_consuming, map_res, opt}};

/// Alpha used when a hex string only carries red, green, and blue.
pub const OPAQUE_ALPHA_BYTE: u8 = 0xff;

/// Anything [`RgbColor::from_hex`] knows how to decode. Fractional floats are rounded
/// to the nearest integer first.
///
/// [`RgbColor::from_hex`]: crate::RgbColor::from_hex
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HexValue<'a> {
    Str(&'a str),
    Int(i64),
    Float(f64),
}

impl<'a> From<&'a str> for HexValue<'a> {
    fn from(value: &'a str) -> Self { HexValue::Str(value) }
}

impl<'a> From<&'a String> for HexValue<'a> {
    fn from(value: &'a String) -> Self { HexValue::Str(value.as_str()) }
}

impl From<i64> for HexValue<'_> {
    fn from(value: i64) -> Self { HexValue::Int(value) }
}

impl From<u32> for HexValue<'_> {
    fn from(value: u32) -> Self { HexValue::Int(i64::from(value)) }
}

impl From<i32> for HexValue<'_> {
    fn from(value: i32) -> Self { HexValue::Int(i64::from(value)) }
}

impl From<f64> for HexValue<'_> {
    fn from(value: f64) -> Self { HexValue::Float(value) }
}

/// Decodes any [`HexValue`] into `[red, green, blue, alpha]` bytes.
///
/// # Errors
///
/// Returns [`PigmentError::InvalidColorFormat`] for malformed strings and for numbers
/// outside `[0, 0xFFFFFFFF]` (including `NaN` and infinities).
#[allow(clippy::cast_possible_truncation)]
pub fn decode_hex_value(value: HexValue<'_>) -> PigmentResult<[u8; 4]> {
    match value {
        HexValue::Str(it) => decode_hex_string(it),
        HexValue::Int(it) => decode_hex_integer(it),
        HexValue::Float(it) => {
            let rounded = it.round();
            if rounded.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&rounded) {
                decode_hex_integer(rounded as i64)
            } else {
                PigmentError::new_invalid_color_format_result(it)
            }
        }
    }
}

/// # Errors
///
/// Returns [`PigmentError::InvalidColorFormat`] unless the whole input matches
/// `#?RRGGBB[AA]`.
pub fn decode_hex_string(input: &str) -> PigmentResult<[u8; 4]> {
    match all_consuming(parse_hex_color).parse(input) {
        Ok((_, rgba)) => Ok(rgba),
        Err(error) => {
            DEBUG_PIGMENT_MOD.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "🎨 Rejected hex color string",
                    input = %input,
                    error = ?error
                );
            });
            PigmentError::new_invalid_color_format_result(input)
        }
    }
}

/// # Errors
///
/// Returns [`PigmentError::InvalidColorFormat`] if `value` is outside
/// `[0, 0xFFFFFFFF]`.
pub fn decode_hex_integer(value: i64) -> PigmentResult<[u8; 4]> {
    match u32::try_from(value) {
        Ok(packed) => Ok(unpack_rgba(packed)),
        Err(_) => PigmentError::new_invalid_color_format_result(value),
    }
}

#[must_use]
pub fn unpack_rgba(packed: u32) -> [u8; 4] { packed.to_be_bytes() }

#[must_use]
pub fn pack_rgba(rgba: [u8; 4]) -> u32 { u32::from_be_bytes(rgba) }

/// Two lowercase hex digits per byte, concatenated.
#[must_use]
pub fn encode_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

/// Parses `#?RRGGBB[AA]` into `[red, green, blue, alpha]`, leaving any trailing input
/// for the caller. Wrap it in [`all_consuming`] to reject trailing input.
///
/// # Errors
///
/// Returns a [`nom`] error if the input does not start with a hex color.
pub fn parse_hex_color(input: &str) -> IResult<&str, [u8; 4]> {
    let (input, (_, red, green, blue, alpha)) = (
        opt(tag("#")),
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
        opt(helper_fns::parse_hex_seg),
    )
        .parse(input)?;
    Ok((input, [red, green, blue, alpha.unwrap_or(OPAQUE_ALPHA_BYTE)]))
}

/// Helper functions to match and parse hex digits.
mod helper_fns {
    use super::{IResult, Parser, map_res, take_while_m_n};

    /// This function is used by [map_res] and it returns a [Result], not [IResult].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// This function is used by [take_while_m_n] and as long as it returns `true` items
    /// will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(
            take_while_m_n(2, 2, match_is_hex_digit),
            parse_str_to_hex_num,
        )
        .parse(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case("ff0000", [255, 0, 0, 255])]
    #[test_case("#ff0000", [255, 0, 0, 255])]
    #[test_case("ff0000ff", [255, 0, 0, 255])]
    #[test_case("#2F14DF80", [47, 20, 223, 128])]
    #[test_case("#00000000", [0, 0, 0, 0])]
    fn test_decode_valid_hex_string(input: &str, expected: [u8; 4]) {
        assert_eq2!(decode_hex_string(input).unwrap(), expected);
    }

    #[test_case("hhhhhh")]
    #[test_case("#ff000")]
    #[test_case("#ff00000")]
    #[test_case("#ff0000ff0")]
    #[test_case("##ff0000")]
    #[test_case("0xFFFFFFFFF")]
    #[test_case("-5")]
    #[test_case("")]
    #[test_case(" #ff0000")]
    fn test_decode_invalid_hex_string(input: &str) {
        assert!(decode_hex_string(input).unwrap_err().is_invalid_color_format());
    }

    #[test]
    fn test_parse_hex_color_leaves_remainder() {
        let mut input = String::new();
        input.push_str("#2F14DF");
        input.push('🔅');

        let Ok((remainder, rgba)) = parse_hex_color(&input) else {
            panic!();
        };
        assert_eq2!(remainder, "🔅");
        assert_eq2!(rgba, [47, 20, 223, 255]);
    }

    #[test_case(0xffff_ffff, [255, 255, 255, 255])]
    #[test_case(0xff00_00ff, [255, 0, 0, 255])]
    #[test_case(0x0000_00ff, [0, 0, 0, 255])]
    #[test_case(0, [0, 0, 0, 0])]
    fn test_decode_hex_integer(value: i64, expected: [u8; 4]) {
        assert_eq2!(decode_hex_integer(value).unwrap(), expected);
        assert_eq2!(i64::from(pack_rgba(expected)), value);
    }

    #[test_case(-5)]
    #[test_case(0x1_0000_0000)]
    fn test_decode_hex_integer_out_of_range(value: i64) {
        assert!(decode_hex_integer(value).unwrap_err().is_invalid_color_format());
    }

    #[test]
    fn test_decode_hex_value_rounds_floats() {
        assert_eq2!(
            decode_hex_value(HexValue::from(4_294_967_295.0)).unwrap(),
            [255, 255, 255, 255]
        );
        assert_eq2!(
            decode_hex_value(HexValue::from(254.6)).unwrap(),
            [0, 0, 0, 255]
        );
        assert!(decode_hex_value(HexValue::from(f64::NAN)).is_err());
        assert!(decode_hex_value(HexValue::from(-0.6)).is_err());
        assert!(decode_hex_value(HexValue::from(4_294_967_295.6)).is_err());
    }

    #[test]
    fn test_encode_hex_is_lowercase() {
        assert_eq2!(encode_hex(&[255, 0, 171]), "ff00ab".to_string());
        assert_eq2!(encode_hex(&[]), String::new());
    }
}
