// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod float_snap;
pub mod pigment_error;

// Re-export.
pub use float_snap::*;
pub use pigment_error::*;

/// Gates the `tracing::debug!` events emitted by this crate.
pub const DEBUG_PIGMENT_MOD: bool = true;
