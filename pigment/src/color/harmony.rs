// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words tetradic

use smallvec::SmallVec;
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter};

/// The largest harmony ([`Harmony::Tertiary`]) has this many members.
pub const MAX_HARMONY_LEN: usize = 5;

/// Colors produced by a harmony query. Every harmony fits inline, so no heap
/// allocation happens.
pub type ColorSet<T> = SmallVec<[T; MAX_HARMONY_LEN]>;

const TRIADIC: [f64; 2] = [1.0 / 3.0, 2.0 / 3.0];
const SPLIT: [f64; 2] = [-5.0 / 12.0, 5.0 / 12.0];
const ANALOGOUS: [f64; 2] = [-1.0 / 12.0, 1.0 / 12.0];
const TETRADIC: [f64; 3] = [1.0 / 4.0, 1.0 / 2.0, 3.0 / 4.0];
const RECTANGULAR: [f64; 3] = [1.0 / 6.0, 1.0 / 2.0, 2.0 / 3.0];
const TERTIARY: [f64; 5] = [1.0 / 6.0, 1.0 / 3.0, 1.0 / 2.0, 2.0 / 3.0, 5.0 / 6.0];

/// A fixed hue rotation relationship between colors. Offsets are fractions of a full
/// turn, so `1/3` is 120°.
///
/// | Harmony         | Offsets                          |
/// | :-------------- | :------------------------------- |
/// | [`Triadic`]     | +1/3, +2/3                       |
/// | [`Split`]       | −5/12, +5/12                     |
/// | [`Analogous`]   | −1/12, +1/12                     |
/// | [`Tetradic`]    | +1/4, +1/2, +3/4                 |
/// | [`Rectangular`] | +1/6, +1/2, +2/3                 |
/// | [`Tertiary`]    | +1/6, +1/3, +1/2, +2/3, +5/6     |
///
/// [`Analogous`]: Self::Analogous
/// [`Rectangular`]: Self::Rectangular
/// [`Split`]: Self::Split
/// [`Tertiary`]: Self::Tertiary
/// [`Tetradic`]: Self::Tetradic
/// [`Triadic`]: Self::Triadic
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumCount, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum Harmony {
    Triadic,
    Split,
    Analogous,
    Tetradic,
    Rectangular,
    Tertiary,
}

impl Harmony {
    #[must_use]
    pub fn hue_offsets(self) -> &'static [f64] {
        match self {
            Harmony::Triadic => &TRIADIC,
            Harmony::Split => &SPLIT,
            Harmony::Analogous => &ANALOGOUS,
            Harmony::Tetradic => &TETRADIC,
            Harmony::Rectangular => &RECTANGULAR,
            Harmony::Tertiary => &TERTIARY,
        }
    }

    /// Number of colors this harmony produces (the seed color is not included).
    #[must_use]
    pub fn size(self) -> usize { self.hue_offsets().len() }
}
