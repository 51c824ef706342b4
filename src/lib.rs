// SPDX-License-Identifier: MPL-2.0
//! `digit_lens` is a small desktop client for a handwritten digit recognition
//! service, built with the Iced GUI framework.
//!
//! The user drops or picks an image, sees a preview, and submits it to the
//! service's `/predict` endpoint. The predicted digit is shown with its
//! confidence. Texts are localized with Fluent and preferences live in a
//! `settings.toml` file.

#![doc(html_root_url = "https://docs.rs/digit_lens/0.1.0")]

pub mod app;
pub mod error;
pub mod i18n;
pub mod prediction;
pub mod ui;

pub use app::config;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "digit_lens=info";

/// Installs the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_FILTER`].
///
/// # Errors
///
/// Returns an error if a global subscriber was already installed.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).try_init()
}
