// SPDX-License-Identifier: MPL-2.0
//! Localization of user-facing strings.
//!
//! Translations live in embedded Fluent (`.ftl`) files, one per locale.
//! The locale is resolved from the CLI flag, then the config file, then the
//! operating system, falling back to [`fluent::DEFAULT_LOCALE`].

pub mod fluent;

pub use fluent::I18n;
