use crate::core::engine::FitmentEngine;
use crate::core::{CatalogProduct, FitmentReport, SafetyTier, UsageCondition};
use crate::utils::error::{ErrorCategory, FitmentError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Request from the upstream text-interpretation step, which has already
/// pulled the size string out of the user's message.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentRequest {
    pub size: String,
    #[serde(default)]
    pub conditions: Vec<UsageCondition>,
    #[serde(default = "default_include_products")]
    pub include_products: bool,
}

fn default_include_products() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    Ok,
    NoCandidates,
    InvalidSize,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentResponse {
    pub status: AgentStatus,
    pub summary: String,
    pub report: Option<FitmentReport>,
    pub products: Vec<CatalogProduct>,
    pub generated_at: DateTime<Utc>,
}

/// 自動化呼叫入口
///
/// Invalid sizes come back as an `invalid_size` response instead of an error
/// so the caller can ask the user to correct the input.
pub fn handle(
    engine: &FitmentEngine,
    request: &AgentRequest,
    catalog: &[CatalogProduct],
    limit: usize,
) -> AgentResponse {
    let generated_at = Utc::now();

    let report = match engine.analyze(&request.size, &request.conditions) {
        Ok(report) => report,
        Err(e) => return error_response(&e, generated_at),
    };

    let status = if report.recommendations.is_empty() {
        AgentStatus::NoCandidates
    } else {
        AgentStatus::Ok
    };

    let products = match report.recommendations.first() {
        Some(top) if request.include_products => {
            engine.match_catalog(&top.size, report.usage_id, catalog)
        }
        _ => Vec::new(),
    };

    tracing::info!(
        "Answered {} with {} recommendations and {} products",
        report.original_size,
        report.recommendations.len(),
        products.len()
    );

    AgentResponse {
        status,
        summary: render_summary(&report, limit),
        report: Some(report),
        products,
        generated_at,
    }
}

/// Maps a failed analysis onto the response envelope. Only input errors are
/// reported as `invalid_size`; anything else is an internal `error`.
pub fn error_response(error: &FitmentError, generated_at: DateTime<Utc>) -> AgentResponse {
    let (status, summary) = match error.category() {
        ErrorCategory::Input => {
            tracing::warn!("Rejected size from upstream: {}", error);
            (
                AgentStatus::InvalidSize,
                format!(
                    "{} {}",
                    error.user_friendly_message(),
                    error.recovery_suggestion()
                ),
            )
        }
        _ => {
            tracing::error!("Fitment analysis failed: {}", error);
            (AgentStatus::Error, error.user_friendly_message())
        }
    };

    AgentResponse {
        status,
        summary,
        report: None,
        products: Vec::new(),
        generated_at,
    }
}

/// Ranked text of the top safe and moderate candidates. Caution entries are
/// left out of the summary but stay in the structured report.
pub fn render_summary(report: &FitmentReport, limit: usize) -> String {
    let ranked: Vec<_> = report
        .recommendations
        .iter()
        .filter(|rec| rec.safety_tier != SafetyTier::Caution)
        .take(limit)
        .collect();

    let mut out = String::new();
    if ranked.is_empty() {
        let _ = write!(
            out,
            "No safe upgrade found for {}. The original size is the best fit.",
            report.original_size
        );
        return out;
    }

    let _ = writeln!(
        out,
        "Top alternatives to {} ({} profile):",
        report.original_size, report.usage_label
    );
    for (index, rec) in ranked.iter().enumerate() {
        let _ = write!(
            out,
            "{}. {} ({:+.2}% diameter, {})",
            index + 1,
            rec.size,
            rec.diameter_diff_percent,
            rec.safety_tier
        );
        if let Some(pro) = rec.pros.first() {
            let _ = write!(out, " - {}", pro);
        }
        let _ = writeln!(out);
    }
    out.trim_end().to_string()
}
