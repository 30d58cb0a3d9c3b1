//! Startup snapshots: service readiness and the trained-model scoreboard.

use std::collections::HashMap;

use serde::Deserialize;

/// Service readiness, fetched once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemStatus {
    pub status: String,
    pub model_ready: bool,
    #[serde(default)]
    pub gemini_available: bool,
    #[serde(default)]
    pub version: String,
}

impl SystemStatus {
    /// Fallback snapshot used when the status fetch fails. Keeps the UI
    /// rendering with submission disabled instead of crashing at mount.
    pub fn offline() -> Self {
        Self {
            status: "Offline".to_string(),
            model_ready: false,
            gemini_available: false,
            version: "0.0.0".to_string(),
        }
    }
}

/// Per-model evaluation scores. Validation fields only exist for models
/// that were trained with a held-out split.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelMetric {
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub precision: Option<f64>,
    #[serde(default)]
    pub recall: Option<f64>,
    #[serde(default)]
    pub f1_score: Option<f64>,
    #[serde(default)]
    pub f1_fake_class: Option<f64>,
    #[serde(default)]
    pub val_accuracy: Option<f64>,
    #[serde(default)]
    pub val_f1: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Scoreboard across all trained models, fetched once at startup.
///
/// `best_model` should be a key of `models` but a malformed snapshot is
/// tolerated: lookups return `None` and the caller keeps its fallback.
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSnapshot {
    #[serde(default)]
    pub best_model: String,
    #[serde(default)]
    pub best_f1: f64,
    #[serde(default)]
    pub train_size: u64,
    #[serde(default)]
    pub test_size: u64,
    #[serde(default)]
    pub models: HashMap<String, ModelMetric>,
}

impl MetricsSnapshot {
    /// Accuracy of the best model, if the snapshot is coherent.
    pub fn best_accuracy(&self) -> Option<f64> {
        self.models.get(&self.best_model)?.accuracy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_status() {
        let json = r#"{
            "status": "ok",
            "model_ready": true,
            "gemini_available": false,
            "version": "1.0.0",
            "environment": "production"
        }"#;
        let status: SystemStatus = serde_json::from_str(json).unwrap();
        assert!(status.model_ready);
        assert_eq!(status.status, "ok");
    }

    #[test]
    fn offline_status_disables_model() {
        let status = SystemStatus::offline();
        assert!(!status.model_ready);
        assert_eq!(status.status, "Offline");
        assert_eq!(status.version, "0.0.0");
    }

    #[test]
    fn best_accuracy_from_coherent_snapshot() {
        let json = r#"{
            "best_model": "svm",
            "best_f1": 0.981,
            "train_size": 35000,
            "test_size": 8750,
            "models": {
                "svm": {"accuracy": 0.984, "precision": 0.98, "recall": 0.97, "f1_score": 0.981},
                "naive_bayes": {"accuracy": 0.93, "f1_score": 0.92}
            }
        }"#;
        let metrics: MetricsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.best_accuracy(), Some(0.984));
    }

    #[test]
    fn best_accuracy_missing_model_key() {
        let json = r#"{
            "best_model": "gone",
            "models": {"svm": {"accuracy": 0.984}}
        }"#;
        let metrics: MetricsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.best_accuracy(), None);
    }

    #[test]
    fn best_accuracy_missing_field() {
        let json = r#"{
            "best_model": "svm",
            "models": {"svm": {"f1_score": 0.98}}
        }"#;
        let metrics: MetricsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.best_accuracy(), None);
    }
}
