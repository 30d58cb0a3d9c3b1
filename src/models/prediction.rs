//! Wire types for a single analysis: the verdict, its evidence, and the
//! optional secondary LLM opinion.
//!
//! All shapes mirror the backend's JSON exactly. Optional fields stay
//! `Option<T>` so a missing key is distinguishable from a present-but-null
//! one at every read site.

use serde::Deserialize;

/// Primary classifier verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Verdict {
    #[serde(rename = "REAL")]
    Real,
    #[serde(rename = "FAKE")]
    Fake,
}

impl Verdict {
    /// Display heading for the verdict card.
    pub fn headline(&self) -> &'static str {
        match self {
            Verdict::Real => "REAL NEWS",
            Verdict::Fake => "FAKE NEWS",
        }
    }
}

/// Verdict from the secondary LLM analysis, which may decline to decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum GeminiVerdict {
    #[serde(rename = "REAL")]
    Real,
    #[serde(rename = "FAKE")]
    Fake,
    #[serde(rename = "UNCERTAIN")]
    Uncertain,
}

impl GeminiVerdict {
    pub fn label(&self) -> &'static str {
        match self {
            GeminiVerdict::Real => "REAL",
            GeminiVerdict::Fake => "FAKE",
            GeminiVerdict::Uncertain => "UNCERTAIN",
        }
    }
}

impl Default for GeminiVerdict {
    fn default() -> Self {
        GeminiVerdict::Uncertain
    }
}

/// One influential token and its (unnormalized) weight.
///
/// Keyword order is significant: the backend sends strongest signals first
/// and the presenter tiers them positionally, never by re-sorting `score`.
#[derive(Debug, Clone, Deserialize)]
pub struct Keyword {
    pub word: String,
    pub score: f64,
}

/// Secondary opinion from the Gemini cross-check, when the backend ran one.
///
/// Every field defaults: on a failed cross-check the backend degrades to
/// a bare `{"gemini_available": false}` object, which must still decode.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeminiAnalysis {
    pub gemini_verdict: GeminiVerdict,
    pub gemini_confidence: f64,
    pub credibility_score: f64,
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub credibility_signals: Vec<String>,
    #[serde(default)]
    pub language_analysis: String,
    #[serde(default)]
    pub fact_check_verdict: String,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub gemini_available: bool,
}

/// The authoritative artifact of one analysis request.
///
/// `label` and `is_fake` should agree, but the backend is not trusted to
/// enforce that: `label` drives the verdict text and `is_fake` only selects
/// the color palette, so a disagreement degrades to a cosmetic mismatch
/// rather than a wrong verdict.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResult {
    pub label: Verdict,
    /// Percentage already scaled 0-100, not a 0-1 probability.
    pub confidence: f64,
    pub is_fake: bool,
    pub model_name: String,
    /// 0-1 fraction when the backend knows it, null/absent otherwise.
    #[serde(default)]
    pub model_accuracy: Option<f64>,
    #[serde(default)]
    pub top_keywords: Vec<Keyword>,
    #[serde(default)]
    pub response_time_ms: f64,
    #[serde(default)]
    pub ml_time_ms: Option<f64>,
    #[serde(default)]
    pub gemini_time_ms: Option<f64>,
    #[serde(default)]
    pub gemini: Option<GeminiAnalysis>,
    #[serde(default)]
    pub processed_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_minimal_result() {
        let json = r#"{
            "label": "REAL",
            "confidence": 76.5,
            "is_fake": false,
            "model_name": "svm",
            "model_accuracy": null,
            "top_keywords": [{"word": "officials", "score": 0.4}],
            "response_time_ms": 120,
            "processed_text": "officials said"
        }"#;
        let result: PredictionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.label, Verdict::Real);
        assert!(!result.is_fake);
        assert_eq!(result.confidence, 76.5);
        assert!(result.model_accuracy.is_none());
        assert!(result.gemini.is_none());
        assert!(result.ml_time_ms.is_none());
        assert_eq!(result.top_keywords.len(), 1);
        assert_eq!(result.top_keywords[0].word, "officials");
    }

    #[test]
    fn decode_full_result_with_gemini() {
        let json = r#"{
            "label": "FAKE",
            "confidence": 91.2,
            "is_fake": true,
            "model_name": "logistic_regression",
            "model_accuracy": 0.942,
            "top_keywords": [],
            "response_time_ms": 840,
            "ml_time_ms": 35,
            "gemini_time_ms": 805,
            "processed_text": "shocking truth",
            "gemini": {
                "gemini_verdict": "FAKE",
                "gemini_confidence": 88.0,
                "credibility_score": 12.0,
                "red_flags": ["sensational language"],
                "credibility_signals": [],
                "language_analysis": "Emotionally charged phrasing.",
                "fact_check_verdict": "Unverified",
                "recommendation": "Cross-check with established outlets.",
                "gemini_available": true
            }
        }"#;
        let result: PredictionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.label, Verdict::Fake);
        assert_eq!(result.model_accuracy, Some(0.942));
        let gemini = result.gemini.unwrap();
        assert_eq!(gemini.gemini_verdict, GeminiVerdict::Fake);
        assert_eq!(gemini.red_flags.len(), 1);
        assert!(gemini.gemini_available);
    }

    #[test]
    fn decode_degraded_gemini_stub() {
        // A failed cross-check leaves only the availability flag.
        let json = r#"{
            "label": "REAL",
            "confidence": 60.0,
            "is_fake": false,
            "model_name": "svm",
            "processed_text": "",
            "gemini": {"gemini_available": false}
        }"#;
        let result: PredictionResult = serde_json::from_str(json).unwrap();
        let gemini = result.gemini.unwrap();
        assert!(!gemini.gemini_available);
        assert_eq!(gemini.gemini_verdict, GeminiVerdict::Uncertain);
        assert!(gemini.red_flags.is_empty());
    }

    #[test]
    fn decode_rejects_unknown_label() {
        let json = r#"{
            "label": "MAYBE",
            "confidence": 50.0,
            "is_fake": false,
            "model_name": "svm",
            "model_accuracy": null,
            "processed_text": ""
        }"#;
        assert!(serde_json::from_str::<PredictionResult>(json).is_err());
    }

    #[test]
    fn verdict_headlines() {
        assert_eq!(Verdict::Real.headline(), "REAL NEWS");
        assert_eq!(Verdict::Fake.headline(), "FAKE NEWS");
    }
}
