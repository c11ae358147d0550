use crate::domain::model::UsageCategory;

pub const MAX_PROS: usize = 3;
pub const MAX_CONS: usize = 2;

/// |diff| at or below this keeps the speedometer note.
const SPEEDOMETER_ACCURATE_PERCENT: f64 = 1.0;

/// Size deltas from the original to a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeDelta {
    pub width: i32,
    pub aspect_ratio: i32,
    pub rim_diameter: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Narrative {
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

impl Narrative {
    fn pro(&mut self, text: &str) {
        if self.pros.len() < MAX_PROS {
            self.pros.push(text.to_string());
        }
    }

    fn con(&mut self, text: &str) {
        if self.cons.len() < MAX_CONS {
            self.cons.push(text.to_string());
        }
    }
}

/// 產生優缺點說明
///
/// Effects are appended in a fixed order: width, rim/appearance,
/// aspect/handling, category, then the speedometer note. Whatever does not
/// fit under the caps is dropped.
pub fn describe(delta: SizeDelta, category: UsageCategory, diff_percent: f64) -> Narrative {
    let mut narrative = Narrative::default();

    match delta.width.signum() {
        1 => {
            narrative.pro("Wider contact patch improves dry grip");
            narrative.con("Slightly higher rolling resistance and fuel use");
        }
        -1 => {
            narrative.pro("Lower rolling resistance");
            narrative.con("Smaller contact patch reduces grip");
        }
        _ => {}
    }

    match delta.rim_diameter.signum() {
        1 => {
            narrative.pro("Larger wheel gives a sportier look");
            narrative.con("Larger wheels and low-profile tires cost more");
        }
        -1 => {
            narrative.pro("Smaller rims are cheaper to replace");
            narrative.con("Smaller wheel may not clear the brake calipers");
        }
        _ => {}
    }

    match delta.aspect_ratio.signum() {
        -1 => {
            narrative.pro("Stiffer sidewall sharpens steering response");
            narrative.con("Firmer ride over bumps and potholes");
        }
        1 => {
            narrative.pro("Taller sidewall softens the ride");
            narrative.con("Softer steering feel in corners");
        }
        _ => {}
    }

    match category {
        UsageCategory::Performance => {
            if delta.width > 0 || delta.aspect_ratio < 0 {
                narrative.pro("Better cornering stability for spirited driving");
            }
        }
        UsageCategory::AllTerrain => {
            if delta.aspect_ratio < 0 {
                narrative.con("Lower sidewall is more exposed on rough tracks");
            } else {
                narrative.pro("Keeps sidewall cushioning for unpaved roads");
            }
        }
        UsageCategory::WetGrip => {
            if delta.width > 0 {
                narrative.con("Wider tread needs more care against aquaplaning");
            } else {
                narrative.pro("Narrow tread clears water well");
            }
        }
        UsageCategory::Touring => {
            if delta.aspect_ratio < 0 {
                narrative.con("More tire noise at cruising speed");
            } else {
                narrative.pro("Stable and quiet at cruising speed");
            }
        }
        UsageCategory::AllSeason => {
            narrative.pro("Balanced choice for everyday driving");
        }
    }

    if diff_percent.abs() <= SPEEDOMETER_ACCURATE_PERCENT {
        narrative.pro("Speedometer stays accurate (within 1%)");
    }

    narrative
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caps_are_respected() {
        let delta = SizeDelta {
            width: 20,
            aspect_ratio: -10,
            rim_diameter: 1,
        };
        let narrative = describe(delta, UsageCategory::Performance, 0.2);
        assert_eq!(narrative.pros.len(), MAX_PROS);
        assert_eq!(narrative.cons.len(), MAX_CONS);
        assert_eq!(narrative.pros[0], "Wider contact patch improves dry grip");
        assert_eq!(narrative.pros[1], "Larger wheel gives a sportier look");
        assert_eq!(narrative.pros[2], "Stiffer sidewall sharpens steering response");
    }

    #[test]
    fn test_speedometer_note_when_room_is_left() {
        let delta = SizeDelta {
            width: 5,
            aspect_ratio: 0,
            rim_diameter: 0,
        };
        let narrative = describe(delta, UsageCategory::AllTerrain, 0.87);
        assert_eq!(
            narrative.pros,
            vec![
                "Wider contact patch improves dry grip",
                "Keeps sidewall cushioning for unpaved roads",
                "Speedometer stays accurate (within 1%)",
            ]
        );
    }

    #[test]
    fn test_no_speedometer_note_above_one_percent() {
        let delta = SizeDelta {
            width: 5,
            aspect_ratio: 0,
            rim_diameter: 0,
        };
        let narrative = describe(delta, UsageCategory::AllTerrain, -1.01);
        assert!(!narrative.pros.iter().any(|p| p.starts_with("Speedometer")));
    }

    #[test]
    fn test_wet_grip_warns_about_wider_tread() {
        let delta = SizeDelta {
            width: 10,
            aspect_ratio: -5,
            rim_diameter: 0,
        };
        let narrative = describe(delta, UsageCategory::WetGrip, -1.6);
        // width and aspect cons already fill the two slots
        assert_eq!(narrative.cons.len(), MAX_CONS);
        assert!(!narrative
            .cons
            .contains(&"Wider tread needs more care against aquaplaning".to_string()));
    }

    #[test]
    fn test_shrinking_deltas_use_their_own_effects() {
        let delta = SizeDelta {
            width: -10,
            aspect_ratio: 5,
            rim_diameter: -1,
        };
        let narrative = describe(delta, UsageCategory::Touring, 0.4);
        assert_eq!(
            narrative.pros,
            vec![
                "Lower rolling resistance",
                "Smaller rims are cheaper to replace",
                "Taller sidewall softens the ride",
            ]
        );
        // aspect con and the speedometer note are past the caps
        assert_eq!(
            narrative.cons,
            vec![
                "Smaller contact patch reduces grip",
                "Smaller wheel may not clear the brake calipers",
            ]
        );
    }

    #[test]
    fn test_category_effects_for_narrower_taller_candidates() {
        let delta = SizeDelta {
            width: -5,
            aspect_ratio: 5,
            rim_diameter: 0,
        };

        let wet = describe(delta, UsageCategory::WetGrip, 2.0);
        assert_eq!(wet.pros[2], "Narrow tread clears water well");
        assert_eq!(
            wet.cons,
            vec![
                "Smaller contact patch reduces grip",
                "Softer steering feel in corners",
            ]
        );

        let off_road = describe(delta, UsageCategory::AllTerrain, 2.0);
        assert_eq!(off_road.pros[2], "Keeps sidewall cushioning for unpaved roads");

        let touring = describe(delta, UsageCategory::Touring, 2.0);
        assert_eq!(touring.pros[2], "Stable and quiet at cruising speed");
    }
}
