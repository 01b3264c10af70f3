use chrono::{Datelike, Utc};

/// Oldest model year offered by the vehicle pickers and the price estimator
pub const FIRST_MODEL_YEAR: u16 = 1995;

/// Latest year a clock reading is trusted for; later readings are clamped
pub const LAST_SUPPORTED_YEAR: u16 = 9999;

/// Current calendar year in UTC, clamped to
/// [`FIRST_MODEL_YEAR`]..=[`LAST_SUPPORTED_YEAR`]
pub fn current_year() -> u16 {
    clamp_year(Utc::now().year())
}

fn clamp_year(year: i32) -> u16 {
    let clamped = year.clamp(i32::from(FIRST_MODEL_YEAR), i32::from(LAST_SUPPORTED_YEAR));
    u16::try_from(clamped).unwrap_or(FIRST_MODEL_YEAR)
}

/// Model years from `current_year` down to [`FIRST_MODEL_YEAR`], newest first
pub fn model_years(current_year: u16) -> Vec<u16> {
    (FIRST_MODEL_YEAR..=current_year).rev().collect()
}
