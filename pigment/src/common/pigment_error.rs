// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error types for this crate. See [`PigmentError`] for details.
//!
//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use std::fmt::Debug;

/// Type alias for results produced by this crate. [`PigmentError`] implements
/// [`miette::Diagnostic`], so `?` converts it into a [`miette::Report`] for callers
/// that work with [`miette::Result`].
pub type PigmentResult<T> = core::result::Result<T, PigmentError>;

/// Errors raised by color construction, decoding, and arithmetic.
///
/// | Variant                | Raised by                                                    |
/// | :--------------------- | :----------------------------------------------------------- |
/// | [`InvalidColorFormat`] | Out of range channels, malformed hex, unrecognized color text |
/// | [`InvalidArgument`]    | Bad scalar, interpolation amount, channel selector, or config |
///
/// Every value is constructed atomically or not at all, so there is never a partially
/// built color to recover.
///
/// [`InvalidArgument`]: Self::InvalidArgument
/// [`InvalidColorFormat`]: Self::InvalidColorFormat
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum PigmentError {
    /// The offending value is kept (in its [`Debug`] form) for diagnostics.
    #[error("Invalid color format {value}")]
    #[diagnostic(
        code(r3bl_pigment::invalid_color_format),
        help(
            "Channels must lie in [0.0, 1.0], hex strings must match \
             `#?RRGGBB[AA]`, and packed integers must lie in [0, 0xFFFFFFFF]"
        )
    )]
    InvalidColorFormat { value: String },

    #[error("Invalid argument: {message}")]
    #[diagnostic(code(r3bl_pigment::invalid_argument))]
    InvalidArgument { message: String },
}

impl PigmentError {
    pub fn invalid_color_format(value: impl Debug) -> Self {
        Self::InvalidColorFormat {
            value: format!("{value:?}"),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Shorthand for `Err(PigmentError::invalid_color_format(value))`.
    ///
    /// # Errors
    ///
    /// Always returns [`PigmentError::InvalidColorFormat`].
    pub fn new_invalid_color_format_result<T>(value: impl Debug) -> PigmentResult<T> {
        Err(Self::invalid_color_format(value))
    }

    /// Shorthand for `Err(PigmentError::invalid_argument(message))`.
    ///
    /// # Errors
    ///
    /// Always returns [`PigmentError::InvalidArgument`].
    pub fn new_invalid_argument_result<T>(message: impl Into<String>) -> PigmentResult<T> {
        Err(Self::invalid_argument(message))
    }

    #[must_use]
    pub fn is_invalid_color_format(&self) -> bool {
        matches!(self, Self::InvalidColorFormat { .. })
    }

    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
