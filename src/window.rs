//! Nine-day window computation.
//!
//! [`Coverage`] holds the inclusive date range spanned by the loaded feed and
//! clamps requested start days so the whole window stays inside it.
//! [`Window`] expands a start day into consecutive day keys.

use serde::Serialize;
use thiserror::Error;

use crate::dates::{DayKey, DayKeyError};

/// Number of consecutive days shown at once.
pub const WINDOW_DAYS: usize = 9;

/// Offset from the first to the last day of a window.
pub const WINDOW_SPAN: i64 = WINDOW_DAYS as i64 - 1;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WindowError {
    #[error("Dataset coverage {min} → {max} spans fewer than 9 days")]
    CoverageTooShort { min: DayKey, max: DayKey },

    #[error(transparent)]
    Day(#[from] DayKeyError),
}

/// Inclusive day range `[min, max]` covered by a dataset.
///
/// Construction guarantees the range holds at least one full window, which
/// keeps [`Coverage::clamp_start`] total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coverage {
    min: DayKey,
    max: DayKey,
    latest_start: DayKey,
}

impl Coverage {
    pub fn new(min: DayKey, max: DayKey) -> Result<Self, WindowError> {
        if min.days_until(max) < WINDOW_SPAN {
            return Err(WindowError::CoverageTooShort { min, max });
        }
        let latest_start = max.add_days(-WINDOW_SPAN)?;
        Ok(Self {
            min,
            max,
            latest_start,
        })
    }

    pub fn min(&self) -> DayKey {
        self.min
    }

    pub fn max(&self) -> DayKey {
        self.max
    }

    /// Last start day whose window still ends on or before `max`.
    pub fn latest_start(&self) -> DayKey {
        self.latest_start
    }

    /// Start of the most recent full window, used when nothing was requested.
    pub fn default_start(&self) -> DayKey {
        self.latest_start
    }

    pub fn contains(&self, day: DayKey) -> bool {
        self.min <= day && day <= self.max
    }

    /// Clamp a requested start so `[start, start + 8]` lies inside the coverage.
    pub fn clamp_start(&self, requested: DayKey) -> DayKey {
        if requested < self.min {
            self.min
        } else if requested > self.latest_start {
            self.latest_start
        } else {
            requested
        }
    }

    /// Clamp `requested` (or use the default start) and materialize the window.
    pub fn window(&self, requested: Option<DayKey>) -> Result<Window, WindowError> {
        let start = match requested {
            Some(day) => self.clamp_start(day),
            None => self.default_start(),
        };
        Window::from_start(start)
    }
}

/// Exactly [`WINDOW_DAYS`] consecutive calendar days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Window {
    days: [DayKey; WINDOW_DAYS],
}

impl Window {
    /// Expand `start` into `[start, start + 1, …, start + 8]`. No clamping.
    pub fn from_start(start: DayKey) -> Result<Self, WindowError> {
        let mut days = [start; WINDOW_DAYS];
        for (offset, slot) in days.iter_mut().enumerate().skip(1) {
            *slot = start.add_days(offset as i64)?;
        }
        Ok(Self { days })
    }

    pub fn start(&self) -> DayKey {
        self.days[0]
    }

    pub fn end(&self) -> DayKey {
        self.days[WINDOW_DAYS - 1]
    }

    pub fn days(&self) -> &[DayKey] {
        &self.days
    }

    pub fn iter(&self) -> impl Iterator<Item = DayKey> + '_ {
        self.days.iter().copied()
    }
}
