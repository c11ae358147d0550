use crate::core::geometry::{diameter_difference_percent, overall_diameter_mm, round_to};
use crate::core::narrative::{self, SizeDelta};
use crate::domain::model::{SafetyTier, TireRecommendation, TireSize, UsageCategory, UsageCondition};
use std::ops::RangeInclusive;

pub const WIDTH_BOUNDS_MM: RangeInclusive<i64> = 155..=335;
pub const ASPECT_BOUNDS_PERCENT: RangeInclusive<i64> = 25..=80;
pub const RIM_BOUNDS_INCH: RangeInclusive<i64> = 14..=22;

/// Candidates further than this from the original diameter are dropped.
pub const MAX_DIFF_PERCENT: f64 = 3.5;
pub const SAFE_LIMIT_PERCENT: f64 = 1.5;
pub const MODERATE_LIMIT_PERCENT: f64 = 3.0;

pub const MAX_RECOMMENDATIONS: usize = 6;

#[derive(Debug, Clone, Copy)]
pub struct UpgradePattern {
    pub name: &'static str,
    pub width: i32,
    pub aspect_ratio: i32,
    pub rim_diameter: i32,
}

/// Fixed upgrade table, tried in this order.
pub const UPGRADE_PATTERNS: [UpgradePattern; 6] = [
    // same rim, a touch wider
    UpgradePattern {
        name: "mild-widen",
        width: 5,
        aspect_ratio: 0,
        rim_diameter: 0,
    },
    // plus-zero: wider with a lower profile to hold the diameter
    UpgradePattern {
        name: "plus-zero",
        width: 10,
        aspect_ratio: -5,
        rim_diameter: 0,
    },
    UpgradePattern {
        name: "plus-zero-wide",
        width: 20,
        aspect_ratio: -5,
        rim_diameter: 0,
    },
    // plus-one: one inch bigger rim, sidewall drops to compensate
    UpgradePattern {
        name: "plus-one",
        width: 10,
        aspect_ratio: -10,
        rim_diameter: 1,
    },
    UpgradePattern {
        name: "plus-one-wide",
        width: 20,
        aspect_ratio: -10,
        rim_diameter: 1,
    },
    // plus-two: usually only survives on tall-sidewall originals
    UpgradePattern {
        name: "plus-two",
        width: 15,
        aspect_ratio: -10,
        rim_diameter: 2,
    },
];

/// Picks one category by priority:
/// sporty > light-off-road > frequent-rain > highway > all-season.
pub fn dominant_category(conditions: &[UsageCondition]) -> UsageCategory {
    let has = |wanted: UsageCondition| conditions.contains(&wanted);

    if has(UsageCondition::Sporty) {
        UsageCategory::Performance
    } else if has(UsageCondition::LightOffRoad) {
        UsageCategory::AllTerrain
    } else if has(UsageCondition::FrequentRain) {
        UsageCategory::WetGrip
    } else if has(UsageCondition::Highway) {
        UsageCategory::Touring
    } else {
        UsageCategory::AllSeason
    }
}

/// Tier for an absolute diameter difference in percent.
pub fn classify(abs_diff_percent: f64) -> SafetyTier {
    if abs_diff_percent <= SAFE_LIMIT_PERCENT {
        SafetyTier::Safe
    } else if abs_diff_percent <= MODERATE_LIMIT_PERCENT {
        SafetyTier::Moderate
    } else {
        SafetyTier::Caution
    }
}

/// Applies a pattern, or `None` if any dimension leaves its bounds.
pub fn apply_pattern(original: &TireSize, pattern: &UpgradePattern) -> Option<TireSize> {
    let width = original.width() as i64 + pattern.width as i64;
    let aspect_ratio = original.aspect_ratio() as i64 + pattern.aspect_ratio as i64;
    let rim_diameter = original.rim_diameter() as i64 + pattern.rim_diameter as i64;

    if !WIDTH_BOUNDS_MM.contains(&width)
        || !ASPECT_BOUNDS_PERCENT.contains(&aspect_ratio)
        || !RIM_BOUNDS_INCH.contains(&rim_diameter)
    {
        return None;
    }

    Some(TireSize::from_parts(
        width as u32,
        aspect_ratio as u32,
        rim_diameter as u32,
    ))
}

/// 產生替代規格建議
///
/// Never fails for a parsed size. An empty list means no upgrade stays within
/// the diameter tolerance.
pub fn recommend(original: &TireSize, conditions: &[UsageCondition]) -> Vec<TireRecommendation> {
    let original_diameter = overall_diameter_mm(original);
    let category = dominant_category(conditions);

    let mut recommendations: Vec<TireRecommendation> = UPGRADE_PATTERNS
        .iter()
        .filter_map(|pattern| {
            let candidate = apply_pattern(original, pattern)?;
            let diameter = overall_diameter_mm(&candidate);
            let diff = round_to(diameter_difference_percent(original_diameter, diameter), 2);

            if diff.abs() > MAX_DIFF_PERCENT {
                return None;
            }

            let narrative = narrative::describe(
                SizeDelta {
                    width: pattern.width,
                    aspect_ratio: pattern.aspect_ratio,
                    rim_diameter: pattern.rim_diameter,
                },
                category,
                diff,
            );

            Some(TireRecommendation {
                size: candidate.to_string(),
                width: candidate.width(),
                aspect_ratio: candidate.aspect_ratio(),
                rim_diameter: candidate.rim_diameter(),
                overall_diameter_mm: round_to(diameter, 1),
                diameter_diff_percent: diff,
                usage_label: category.label().to_string(),
                usage_id: category,
                pros: narrative.pros,
                cons: narrative.cons,
                safety_tier: classify(diff.abs()),
            })
        })
        .collect();

    // stable: equal keys keep table order
    recommendations.sort_by(|a, b| {
        a.safety_tier.cmp(&b.safety_tier).then(
            a.diameter_diff_percent
                .abs()
                .total_cmp(&b.diameter_diff_percent.abs()),
        )
    });
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::size::parse;

    #[test]
    fn test_dominant_category_priority() {
        assert_eq!(dominant_category(&[]), UsageCategory::AllSeason);
        assert_eq!(dominant_category(&[UsageCondition::City]), UsageCategory::AllSeason);
        assert_eq!(
            dominant_category(&[UsageCondition::Highway, UsageCondition::FrequentRain]),
            UsageCategory::WetGrip
        );
        assert_eq!(
            dominant_category(&[UsageCondition::LightOffRoad, UsageCondition::Sporty]),
            UsageCategory::Performance
        );
        assert_eq!(
            dominant_category(&[UsageCondition::Highway, UsageCondition::LightOffRoad]),
            UsageCategory::AllTerrain
        );
        assert_eq!(dominant_category(&[UsageCondition::Highway]), UsageCategory::Touring);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(0.0), SafetyTier::Safe);
        assert_eq!(classify(1.5), SafetyTier::Safe);
        assert_eq!(classify(1.51), SafetyTier::Moderate);
        assert_eq!(classify(3.0), SafetyTier::Moderate);
        assert_eq!(classify(3.01), SafetyTier::Caution);
    }

    #[test]
    fn test_apply_pattern_respects_bounds() {
        let upper = parse("335/25R22").unwrap();
        assert!(UPGRADE_PATTERNS
            .iter()
            .all(|p| apply_pattern(&upper, p).is_none()));

        let low_profile = parse("205/30R18").unwrap();
        // aspect 20 is below the floor
        assert!(apply_pattern(&low_profile, &UPGRADE_PATTERNS[3]).is_none());
        assert!(apply_pattern(&low_profile, &UPGRADE_PATTERNS[0]).is_some());
    }

    #[test]
    fn test_recommend_205_55r16() {
        let original = parse("205/55R16").unwrap();
        let recs = recommend(&original, &[]);

        let sizes: Vec<&str> = recs.iter().map(|r| r.size.as_str()).collect();
        assert!(sizes.contains(&"215/50R16"));
        assert!(sizes.contains(&"225/50R16"));

        let plus_zero = recs.iter().find(|r| r.size == "215/50R16").unwrap();
        assert_eq!(plus_zero.safety_tier, SafetyTier::Moderate);
        assert_eq!(plus_zero.diameter_diff_percent, -1.66);
        assert_eq!(plus_zero.overall_diameter_mm, 621.4);

        // 220/45R18 is +3.69%, out of tolerance
        assert!(!sizes.contains(&"220/45R18"));
        assert!(recs.iter().all(|r| r.diameter_diff_percent.abs() <= MAX_DIFF_PERCENT));
    }

    #[test]
    fn test_recommend_is_sorted_by_tier_then_difference() {
        let original = parse("205/55R16").unwrap();
        let recs = recommend(&original, &[]);

        assert!(!recs.is_empty());
        for pair in recs.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                a.safety_tier < b.safety_tier
                    || (a.safety_tier == b.safety_tier
                        && a.diameter_diff_percent.abs() <= b.diameter_diff_percent.abs())
            );
        }
        assert_eq!(recs[0].size, "225/50R16");
    }

    #[test]
    fn test_tolerance_applies_to_rounded_difference() {
        // 155/52R16 is +3.5011% before rounding
        let original = parse("135/62R15").unwrap();
        let recs = recommend(&original, &[]);

        let edge = recs.iter().find(|r| r.size == "155/52R16").unwrap();
        assert_eq!(edge.diameter_diff_percent, 3.5);
        assert_eq!(edge.safety_tier, SafetyTier::Caution);
        assert_eq!(edge.overall_diameter_mm, 567.6);

        let sizes: Vec<&str> = recs.iter().map(|r| r.size.as_str()).collect();
        assert_eq!(sizes, vec!["155/57R15", "155/52R16"]);
    }

    #[test]
    fn test_recommend_can_be_empty() {
        let original = parse("335/25R22").unwrap();
        assert!(recommend(&original, &[UsageCondition::Sporty]).is_empty());
    }

    #[test]
    fn test_narrative_caps() {
        let original = parse("195/65R15").unwrap();
        for rec in recommend(&original, &[UsageCondition::FrequentRain]) {
            assert!(rec.pros.len() <= 3);
            assert!(rec.cons.len() <= 2);
        }
    }
}
