// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod channel_selector;
pub mod color_enum;
pub mod harmony;
pub mod hex_codec;
pub mod hsl_color;
pub mod rgb_color;
pub mod transform_color;

// Re-export.
pub use channel_selector::*;
pub use color_enum::*;
pub use harmony::*;
pub use hex_codec::*;
pub use hsl_color::*;
pub use rgb_color::*;
pub use transform_color::*;
