use crate::domain::model::TireSize;
use regex::Regex;
use std::sync::LazyLock;

// ASCII digits only; `\d` would also accept other Unicode digits.
static SIZE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{3})/([0-9]{2})[Rr]([0-9]{2})$").expect("tire size pattern is valid")
});

/// 解析輪胎規格字串
///
/// Accepts exactly `{3 digits}/{2 digits}R{2 digits}` after trimming, with a
/// case-insensitive `R`. Anything else yields `None`; a zero dimension is
/// rejected as well since a size is never partially specified.
pub fn parse(text: &str) -> Option<TireSize> {
    let caps = SIZE_PATTERN.captures(text.trim())?;

    let width: u32 = caps[1].parse().ok()?;
    let aspect_ratio: u32 = caps[2].parse().ok()?;
    let rim_diameter: u32 = caps[3].parse().ok()?;

    if width == 0 || aspect_ratio == 0 || rim_diameter == 0 {
        return None;
    }

    Some(TireSize::from_parts(width, aspect_ratio, rim_diameter))
}

/// Canonical notation, the inverse of [`parse`].
pub fn format(size: &TireSize) -> String {
    size.to_string()
}

/// Whitespace-free, upper-cased form used for literal size comparison.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase()
}
