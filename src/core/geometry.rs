use crate::domain::model::TireSize;

pub const MM_PER_INCH: f64 = 25.4;

/// Height of one sidewall in millimeters.
pub fn sidewall_height_mm(size: &TireSize) -> f64 {
    size.width() as f64 * (size.aspect_ratio() as f64 / 100.0)
}

/// Rim diameter plus both sidewalls, in millimeters.
pub fn overall_diameter_mm(size: &TireSize) -> f64 {
    size.rim_diameter() as f64 * MM_PER_INCH + 2.0 * sidewall_height_mm(size)
}

/// Signed change from `original` to `candidate`, in percent. Negative means
/// the candidate is smaller.
pub fn diameter_difference_percent(original: f64, candidate: f64) -> f64 {
    (candidate - original) / original * 100.0
}

/// Real road speed when the speedometer shows `indicated`, for a tire whose
/// diameter differs from the calibrated one by `diff_percent`.
pub fn actual_speed(indicated: f64, diff_percent: f64) -> f64 {
    indicated * (1.0 + diff_percent / 100.0)
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
