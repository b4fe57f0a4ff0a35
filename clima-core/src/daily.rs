//! Reduction of the 3-hour forecast list to view-sized slices.

use crate::model::ForecastEntry;

/// 3-hour entries per calendar day in the provider feed.
const ENTRIES_PER_DAY: usize = 8;

const FORECAST_DAYS: usize = 5;

/// Approximate one-entry-per-day view of the 3-hour list: every 8th entry,
/// capped at 5 results and clamped to the available length.
///
/// Known approximation carried over from the upstream feed contract: the
/// selection assumes the first entry sits near a fixed hour-of-day and
/// drifts across calendar-day boundaries when it does not.
pub fn daily_forecast(entries: &[ForecastEntry]) -> Vec<&ForecastEntry> {
    entries
        .iter()
        .step_by(ENTRIES_PER_DAY)
        .take(FORECAST_DAYS)
        .collect()
}

/// First `count` raw 3-hour entries, clamped to the available length.
pub fn upcoming(entries: &[ForecastEntry], count: usize) -> &[ForecastEntry] {
    &entries[..entries.len().min(count)]
}
