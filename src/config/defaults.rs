// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Toasts**: Display and exit transition durations
//! - **Export**: CSV file naming

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// How long a toast stays fully displayed before its exit transition (ms).
pub const DEFAULT_TOAST_DISPLAY_MS: u64 = 3_000;

/// Minimum toast display time (ms).
pub const MIN_TOAST_DISPLAY_MS: u64 = 500;

/// Maximum toast display time (ms).
pub const MAX_TOAST_DISPLAY_MS: u64 = 60_000;

/// Duration of the enter and exit fade transitions (ms).
pub const DEFAULT_TOAST_TRANSITION_MS: u64 = 300;

/// Maximum transition duration (ms). Zero disables the transition.
pub const MAX_TOAST_TRANSITION_MS: u64 = 2_000;

// ==========================================================================
// Export Defaults
// ==========================================================================

/// File name used when a CSV export does not specify one.
pub const DEFAULT_EXPORT_FILENAME: &str = "export.csv";
