// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Endpoint**: Prediction service location and request timeout
//! - **Progress**: Cosmetic progress timer while a request is in flight
//! - **Input**: Handling of bursts of dropped files

// ==========================================================================
// Endpoint Defaults
// ==========================================================================

/// Base URL of the prediction service. Requests go to `<url>/predict`.
pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:5000";

/// Default request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Minimum accepted request timeout in seconds.
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum accepted request timeout in seconds.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

// ==========================================================================
// Progress Defaults
// ==========================================================================

/// Interval between two progress ticks (milliseconds).
pub const PROGRESS_TICK_MS: u64 = 200;

/// Percentage points added per tick.
pub const PROGRESS_STEP_PERCENT: u8 = 10;

/// Highest value the timer reaches before the response arrives.
pub const PROGRESS_CAP_PERCENT: u8 = 90;

// ==========================================================================
// Input Defaults
// ==========================================================================

/// File drop events closer together than this belong to the same drop.
///
/// The windowing layer reports a multi-file drop as one event per file; only
/// the first file of a burst is taken.
pub const DROP_BURST_WINDOW_MS: u64 = 250;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_REQUEST_TIMEOUT_SECS > 0);
    assert!(MAX_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);

    assert!(PROGRESS_TICK_MS > 0);
    assert!(PROGRESS_STEP_PERCENT > 0);
    assert!(PROGRESS_CAP_PERCENT < 100);
    assert!(PROGRESS_STEP_PERCENT <= PROGRESS_CAP_PERCENT);
};
