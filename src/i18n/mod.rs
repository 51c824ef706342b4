// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded at build time. The locale
//! is resolved from the CLI, then the config file, then the OS, falling back
//! to `en-US`.

pub mod fluent;
