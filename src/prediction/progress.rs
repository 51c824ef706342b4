// SPDX-License-Identifier: MPL-2.0
//! Synthetic upload progress.
//!
//! The multipart request exposes no byte-level progress, so the controller
//! advances a cosmetic percentage on a fixed timer and snaps it to 100 when
//! the request settles.

use crate::config::{PROGRESS_CAP_PERCENT, PROGRESS_STEP_PERCENT};

/// Percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Progress(u8);

impl Progress {
    pub const START: Progress = Progress(0);
    pub const COMPLETE: Progress = Progress(100);

    /// Returns the next timer value: one step further, never above the cap.
    ///
    /// A value already at or past the cap is returned unchanged so progress
    /// never decreases.
    #[must_use]
    pub fn advanced(self) -> Self {
        if self.0 >= PROGRESS_CAP_PERCENT {
            return self;
        }
        Progress(
            self.0
                .saturating_add(PROGRESS_STEP_PERCENT)
                .min(PROGRESS_CAP_PERCENT),
        )
    }

    #[must_use]
    pub fn percent(self) -> u8 {
        self.0
    }
}
