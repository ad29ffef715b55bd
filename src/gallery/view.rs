//! Per-request window rendering model.

use serde::Serialize;

use super::{DayIndex, Gallery};
use crate::dates::DayKey;
use crate::models::FeedRecord;
use crate::window::{Coverage, Window, WINDOW_DAYS};

/// One day of a window: either a record or a placeholder.
#[derive(Debug, Clone, Copy)]
pub enum DaySlot<'a> {
    Present(&'a FeedRecord),
    Missing(DayKey),
}

impl<'a> DaySlot<'a> {
    pub fn day(&self) -> DayKey {
        match self {
            Self::Present(record) => record.date,
            Self::Missing(day) => *day,
        }
    }

    pub fn record(&self) -> Option<&'a FeedRecord> {
        match self {
            Self::Present(record) => Some(record),
            Self::Missing(_) => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }
}

/// A materialized window with lookup results for every day.
#[derive(Debug, Clone)]
pub struct WindowView<'a> {
    window: Window,
    slots: Vec<DaySlot<'a>>,
    missing: usize,
    coverage: Coverage,
    requested: Option<DayKey>,
}

impl<'a> WindowView<'a> {
    pub fn build(gallery: &'a Gallery, window: Window, requested: Option<DayKey>) -> Self {
        let index = DayIndex::build(gallery.records());
        let slots: Vec<DaySlot<'a>> = window
            .iter()
            .map(|day| match index.get(day) {
                Some(record) => DaySlot::Present(record),
                None => DaySlot::Missing(day),
            })
            .collect();
        let missing = slots.iter().filter(|slot| slot.is_missing()).count();

        Self {
            window,
            slots,
            missing,
            coverage: *gallery.coverage(),
            requested,
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn slots(&self) -> &[DaySlot<'a>] {
        &self.slots
    }

    pub fn missing(&self) -> usize {
        self.missing
    }

    pub fn coverage(&self) -> &Coverage {
        &self.coverage
    }

    pub fn requested(&self) -> Option<DayKey> {
        self.requested
    }

    /// Whether the requested start had to be moved to fit the coverage.
    pub fn was_clamped(&self) -> bool {
        self.requested
            .is_some_and(|requested| requested != self.window.start())
    }

    pub fn status_note(&self) -> String {
        status_note(&self.window, self.missing, &self.coverage)
    }

    /// Serializable form for the JSON API and `show --json`.
    pub fn summary(&self, fallback_image: &str) -> WindowSummary<'a> {
        WindowSummary {
            start: self.window.start(),
            end: self.window.end(),
            requested: self.requested,
            clamped: self.was_clamped(),
            coverage_min: self.coverage.min(),
            coverage_max: self.coverage.max(),
            missing: self.missing,
            note: self.status_note(),
            days: self
                .slots
                .iter()
                .map(|slot| SlotSummary {
                    date: slot.day(),
                    thumbnail: slot.record().map(|record| record.card_image(fallback_image)),
                    record: slot.record(),
                })
                .collect(),
        }
    }
}

/// JSON shape of a rendered window.
#[derive(Debug, Serialize)]
pub struct WindowSummary<'a> {
    pub start: DayKey,
    pub end: DayKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested: Option<DayKey>,
    pub clamped: bool,
    pub coverage_min: DayKey,
    pub coverage_max: DayKey,
    pub missing: usize,
    pub note: String,
    pub days: Vec<SlotSummary<'a>>,
}

#[derive(Debug, Serialize)]
pub struct SlotSummary<'a> {
    pub date: DayKey,
    pub thumbnail: Option<String>,
    pub record: Option<&'a FeedRecord>,
}

/// Status line describing a rendered window and its gaps.
pub fn status_note(window: &Window, missing: usize, coverage: &Coverage) -> String {
    let mut note = format!(
        "Showing {} consecutive days ({} → {}).",
        WINDOW_DAYS,
        window.start(),
        window.end()
    );
    if missing > 0 {
        let verb = if missing == 1 { "date is" } else { "dates are" };
        note.push_str(&format!(" {} {} missing in the mirror feed.", missing, verb));
    }
    note.push_str(&format!(
        " Dataset coverage: {} → {}.",
        coverage.min(),
        coverage.max()
    ));
    note
}

/// Status line shown before the user has picked a start date.
pub fn coverage_note(coverage: &Coverage) -> String {
    format!(
        "Data coverage: {} → {}. Pick a start date; the app will show the next {} consecutive calendar days.",
        coverage.min(),
        coverage.max(),
        WINDOW_DAYS
    )
}
