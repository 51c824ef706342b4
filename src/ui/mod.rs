// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Widgets follow the Elm-style "state down, messages up" pattern: they
//! borrow what they render and emit their own message type, mapped by the
//! application.
//!
//! - [`upload_zone`] - Drop target, file card, progress, and submit button
//! - [`result_panel`] - Predicted digit with confidence, or the failure
//! - [`notifications`] - Toast notification system for user feedback
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod notifications;
pub mod result_panel;
pub mod theming;
pub mod upload_zone;
