use crate::core::engine::FitmentEngine;
use crate::core::geometry::actual_speed;
use crate::core::size;
use crate::core::{CatalogProduct, FitmentReport, SafetyTier, TireRecommendation, UsageCondition};
use crate::utils::error::{FitmentError, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::{BufRead, Write};

/// Longest input the size field accepts, e.g. "205/55R16".
pub const MAX_SIZE_INPUT_LEN: usize = 9;

/// Speed used for the speedometer comparison line.
const REFERENCE_SPEED_KMH: f64 = 100.0;

/// 輸入過濾：只保留 0-9、/ 與 R
///
/// Friction for the input field only. `size::parse` still decides validity.
pub fn filter_keystrokes(raw: &str) -> String {
    raw.chars()
        .filter_map(|c| match c {
            '0'..='9' | '/' | 'R' => Some(c),
            'r' => Some('R'),
            _ => None,
        })
        .take(MAX_SIZE_INPUT_LEN)
        .collect()
}

/// Prompts on `output` and reads one filtered line from `input`.
pub fn prompt_size<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<String> {
    write!(output, "Tire size (e.g. 205/55R16): ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(filter_keystrokes(&line))
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveView {
    pub report: FitmentReport,
    pub picked_size: Option<String>,
    pub products: Vec<CatalogProduct>,
}

/// Runs the shared engine and matches the picked candidate against `catalog`.
///
/// Without `pick` the top recommendation is used. A pick outside the
/// recommendation list is allowed as long as it parses.
pub fn build_view(
    engine: &FitmentEngine,
    size_text: &str,
    conditions: &[UsageCondition],
    pick: Option<&str>,
    catalog: Option<&[CatalogProduct]>,
) -> Result<InteractiveView> {
    let report = engine.analyze(size_text, conditions)?;

    let picked_size = match pick {
        Some(text) => {
            let picked = size::parse(text).ok_or_else(|| FitmentError::InvalidSize {
                input: text.trim().to_string(),
            })?;
            Some(size::format(&picked))
        }
        None => report.recommendations.first().map(|rec| rec.size.clone()),
    };

    let products = match (catalog, &picked_size) {
        (Some(products), Some(picked)) => engine.match_catalog(picked, report.usage_id, products),
        _ => Vec::new(),
    };

    Ok(InteractiveView {
        report,
        picked_size,
        products,
    })
}

fn tier_marker(tier: SafetyTier) -> &'static str {
    match tier {
        SafetyTier::Safe => "✅",
        SafetyTier::Moderate => "⚠️",
        SafetyTier::Caution => "❗",
    }
}

fn render_recommendation(out: &mut String, index: usize, rec: &TireRecommendation) {
    let _ = writeln!(
        out,
        "{}. {} {:<10} {:>7.1} mm  {:>+6.2}%  [{}]",
        index + 1,
        tier_marker(rec.safety_tier),
        rec.size,
        rec.overall_diameter_mm,
        rec.diameter_diff_percent,
        rec.safety_tier
    );
    let _ = writeln!(
        out,
        "     at {:.0} km/h indicated you drive {:.1} km/h",
        REFERENCE_SPEED_KMH,
        actual_speed(REFERENCE_SPEED_KMH, rec.diameter_diff_percent)
    );
    for pro in &rec.pros {
        let _ = writeln!(out, "     + {}", pro);
    }
    for con in &rec.cons {
        let _ = writeln!(out, "     - {}", con);
    }
}

/// Renders the text report, listing at most `limit` candidates.
///
/// The catalog section for the picked size is printed even when no
/// candidate survived, since `--pick` may name any valid size.
pub fn render_report(view: &InteractiveView, limit: usize) -> String {
    let report = &view.report;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Original size: {} ({:.1} mm)",
        report.original_size, report.original_diameter_mm
    );
    let _ = writeln!(out, "Usage profile: {}", report.usage_label);
    let _ = writeln!(out);

    if report.recommendations.is_empty() {
        let _ = writeln!(
            out,
            "No safe upgrade found for {}. Keep the original size.",
            report.original_size
        );
    }

    for (index, rec) in report.recommendations.iter().take(limit).enumerate() {
        render_recommendation(&mut out, index, rec);
    }

    let hidden = report.recommendations.len().saturating_sub(limit);
    if hidden > 0 {
        let _ = writeln!(out, "   ... {} more (use --json to see all)", hidden);
    }

    if let Some(picked) = &view.picked_size {
        let _ = writeln!(out);
        if view.products.is_empty() {
            let _ = writeln!(out, "No catalog products match {}.", picked);
        } else {
            let _ = writeln!(out, "Catalog matches for {}:", picked);
            for product in &view.products {
                let _ = writeln!(
                    out,
                    "  ★ {:.1}  {} ({})  {:.0}-{:.0}  {}",
                    product.rating,
                    product.name,
                    product.brand_id,
                    product.price_range.min,
                    product.price_range.max,
                    product.sizes.join(", ")
                );
            }
        }
    }

    out
}

pub fn render_conditions() -> String {
    let mut out = String::new();
    for condition in UsageCondition::ALL {
        let _ = writeln!(
            out,
            "{} {:<15} {}",
            condition.icon(),
            condition.id(),
            condition.label()
        );
    }
    out
}
