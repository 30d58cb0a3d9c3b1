//! Pure display derivations from a `PredictionResult`.
//!
//! Nothing here touches the network or mutates the result; every function
//! maps response data to the strings and buckets the renderer draws.

use crate::constants::*;
use crate::models::{MetricsSnapshot, PredictionResult};

/// Positional emphasis bucket for a ranked keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordTier {
    High,
    Mid,
    Low,
}

/// Tier for the keyword at `index`, purely by position as received:
/// the backend already ordered them strongest-first.
pub fn keyword_tier(index: usize) -> KeywordTier {
    if index < KEYWORD_TIER_HIGH_END {
        KeywordTier::High
    } else if index < KEYWORD_TIER_MID_END {
        KeywordTier::Mid
    } else {
        KeywordTier::Low
    }
}

/// Qualitative confidence label. Thresholds are inclusive at the
/// lower bound.
pub fn confidence_label(confidence: f64) -> &'static str {
    if confidence >= CONFIDENCE_VERY_HIGH {
        "Very high confidence"
    } else if confidence >= CONFIDENCE_HIGH {
        "High confidence"
    } else {
        "Moderate confidence"
    }
}

/// Numeric confidence text, always derived from the real value, never
/// from the animated gauge fill.
pub fn confidence_text(confidence: f64) -> String {
    format!("{:.1}%", confidence)
}

/// Icon for the verdict card, selected by the color theme flag.
pub fn verdict_icon(is_fake: bool) -> &'static str {
    if is_fake {
        "✗"
    } else {
        "✓"
    }
}

/// Static guidance paragraph. Boilerplate selected by the verdict, not
/// generated from keyword content.
pub fn explanation(is_fake: bool) -> &'static str {
    if is_fake {
        "The language patterns in this passage resemble known misinformation: \
         sensational phrasing, missing attribution, or emotionally loaded \
         claims. Verify it against established outlets before sharing."
    } else {
        "The language patterns in this passage are consistent with credible \
         reporting: sourced claims and neutral phrasing. Classification is \
         statistical, so confirm important stories with a second outlet."
    }
}

/// Model accuracy for the card's right column: the result's own figure
/// when present, the web-era fallback otherwise.
pub fn model_accuracy_text(result: &PredictionResult) -> String {
    match result.model_accuracy {
        Some(accuracy) => format!("{:.1}%", accuracy * 100.0),
        None => "94.2%".to_string(),
    }
}

/// Best-model accuracy string for the hero header, derived from a metrics
/// snapshot. Returns `None` when the snapshot is incoherent (missing model
/// key or accuracy field) so the caller keeps its prior value.
pub fn best_accuracy_text(metrics: &MetricsSnapshot) -> Option<String> {
    let accuracy = metrics.best_accuracy()?;
    Some(format!("{}%", (accuracy * 100.0).round() as i64))
}

/// Short plain-text summary for clipboard copy.
pub fn copy_summary(result: &PredictionResult) -> String {
    format!(
        "Verdict: {} | Confidence: {} | Model: {}",
        result.label.headline(),
        confidence_text(result.confidence),
        result.model_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Keyword, Verdict};

    fn make_result(label: Verdict, is_fake: bool, confidence: f64) -> PredictionResult {
        PredictionResult {
            label,
            confidence,
            is_fake,
            model_name: "svm".to_string(),
            model_accuracy: None,
            top_keywords: Vec::new(),
            response_time_ms: 100.0,
            ml_time_ms: None,
            gemini_time_ms: None,
            gemini: None,
            processed_text: String::new(),
        }
    }

    // ── Confidence ────────────────────────────────────────────────

    #[test]
    fn confidence_labels_at_thresholds() {
        assert_eq!(confidence_label(92.0), "Very high confidence");
        assert_eq!(confidence_label(90.0), "Very high confidence");
        assert_eq!(confidence_label(89.9), "High confidence");
        assert_eq!(confidence_label(75.0), "High confidence");
        assert_eq!(confidence_label(74.9), "Moderate confidence");
        assert_eq!(confidence_label(60.0), "Moderate confidence");
        assert_eq!(confidence_label(0.0), "Moderate confidence");
    }

    #[test]
    fn confidence_text_one_decimal() {
        assert_eq!(confidence_text(87.3), "87.3%");
        assert_eq!(confidence_text(100.0), "100.0%");
        assert_eq!(confidence_text(0.0), "0.0%");
    }

    // ── Verdict display round-trip ────────────────────────────────

    #[test]
    fn fake_result_display_facts() {
        let result = make_result(Verdict::Fake, true, 87.3);
        assert_eq!(result.label.headline(), "FAKE NEWS");
        assert_eq!(verdict_icon(result.is_fake), "✗");
        assert_eq!(confidence_text(result.confidence), "87.3%");
        assert_eq!(confidence_label(result.confidence), "High confidence");
    }

    #[test]
    fn label_authoritative_when_flags_disagree() {
        // Backend bug: label says REAL but is_fake says true. The headline
        // follows label; only the palette flag follows is_fake.
        let result = make_result(Verdict::Real, true, 55.0);
        assert_eq!(result.label.headline(), "REAL NEWS");
        assert_eq!(verdict_icon(result.is_fake), "✗");
    }

    // ── Keyword tiers ─────────────────────────────────────────────

    #[test]
    fn seven_keywords_tier_positionally() {
        let keywords: Vec<Keyword> = (0..7)
            .map(|i| Keyword {
                word: format!("w{}", i),
                score: 1.0 - i as f64 * 0.1,
            })
            .collect();
        let tiers: Vec<KeywordTier> = (0..keywords.len()).map(keyword_tier).collect();
        assert_eq!(
            tiers,
            vec![
                KeywordTier::High,
                KeywordTier::High,
                KeywordTier::High,
                KeywordTier::Mid,
                KeywordTier::Mid,
                KeywordTier::Mid,
                KeywordTier::Low,
            ]
        );
    }

    #[test]
    fn tiers_ignore_scores() {
        // Position 0 is High even with a tiny score; never re-sorted.
        assert_eq!(keyword_tier(0), KeywordTier::High);
        assert_eq!(keyword_tier(5), KeywordTier::Mid);
        assert_eq!(keyword_tier(100), KeywordTier::Low);
    }

    // ── Accuracy strings ──────────────────────────────────────────

    #[test]
    fn best_accuracy_rounds_to_whole_percent() {
        let metrics: MetricsSnapshot = serde_json::from_str(
            r#"{"best_model": "svm", "models": {"svm": {"accuracy": 0.984}}}"#,
        )
        .unwrap();
        assert_eq!(best_accuracy_text(&metrics), Some("98%".to_string()));
    }

    #[test]
    fn best_accuracy_absent_on_missing_key() {
        let metrics: MetricsSnapshot = serde_json::from_str(
            r#"{"best_model": "gone", "models": {"svm": {"accuracy": 0.984}}}"#,
        )
        .unwrap();
        assert_eq!(best_accuracy_text(&metrics), None);
    }

    #[test]
    fn model_accuracy_falls_back() {
        let mut result = make_result(Verdict::Real, false, 80.0);
        assert_eq!(model_accuracy_text(&result), "94.2%");
        result.model_accuracy = Some(0.987);
        assert_eq!(model_accuracy_text(&result), "98.7%");
    }

    // ── Copy summary ──────────────────────────────────────────────

    #[test]
    fn copy_summary_shape() {
        let result = make_result(Verdict::Fake, true, 87.3);
        assert_eq!(
            copy_summary(&result),
            "Verdict: FAKE NEWS | Confidence: 87.3% | Model: svm"
        );
    }

    #[test]
    fn explanations_differ_by_verdict() {
        assert_ne!(explanation(true), explanation(false));
    }
}
