//! Application state: the single source of truth the renderer draws from.
//!
//! The current result lives here as one `Option<PredictionResult>` slot,
//! replaced wholesale on commit and cleared on reset — never mutated in
//! place. Every transition is a plain method so the whole orchestration
//! is testable without a terminal or a network.

use std::time::Instant;

use crate::constants::*;
use crate::input::{InputMode, InputState};
use crate::models::{MetricsSnapshot, PredictionResult, SystemStatus};
use crate::present;

use super::theme::Theme;

/// Which body the page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Input,
    Results,
}

/// All mutable UI state.
pub struct AppState {
    pub theme: Theme,
    pub view: View,
    pub input: InputState,

    // ── Startup snapshots ────────────────────────────────────
    /// None until the status fetch resolves (it always resolves: a failed
    /// fetch substitutes the Offline snapshot).
    pub status: Option<SystemStatus>,
    pub metrics: Option<MetricsSnapshot>,
    pub metrics_loading: bool,
    /// Derived hero figure; keeps its fallback until a coherent snapshot
    /// arrives and survives incoherent ones.
    pub best_accuracy: String,

    // ── Analysis lifecycle ───────────────────────────────────
    /// The one result slot, owned here exclusively.
    pub current_result: Option<PredictionResult>,
    pub loading: bool,
    pub network_error: Option<String>,
    /// Generation counter of the latest submission; responses tagged with
    /// an older generation are dropped.
    pub request_seq: u64,
    /// Tick at which the committed result is revealed (scroll-into-view
    /// equivalent: switch the body to the results view).
    reveal_at_tick: Option<u64>,

    // ── Cosmetic ─────────────────────────────────────────────
    pub tick: u64,
    /// Animated confidence-gauge fill, climbing toward the real value.
    pub gauge_fill: f64,
    pub results_scroll: u16,
    pub status_message: Option<(String, Instant)>,
}

impl AppState {
    pub fn new(theme: Theme, deep_scan: bool) -> Self {
        let mut input = InputState::new();
        input.deep_scan = deep_scan;
        Self {
            theme,
            view: View::Input,
            input,
            status: None,
            metrics: None,
            metrics_loading: true,
            best_accuracy: DEFAULT_BEST_ACCURACY.to_string(),
            current_result: None,
            loading: false,
            network_error: None,
            request_seq: 0,
            reveal_at_tick: None,
            tick: 0,
            gauge_fill: 0.0,
            results_scroll: 0,
            status_message: None,
        }
    }

    // ── Startup fetches ──────────────────────────────────────

    pub fn apply_status(&mut self, status: SystemStatus) {
        self.status = Some(status);
    }

    /// Metrics resolved (or failed: `None`). Either way the loading
    /// placeholder stops; the accuracy figure only changes when the
    /// snapshot is coherent.
    pub fn apply_metrics(&mut self, metrics: Option<MetricsSnapshot>) {
        self.metrics_loading = false;
        if let Some(snapshot) = metrics {
            if let Some(accuracy) = present::best_accuracy_text(&snapshot) {
                self.best_accuracy = accuracy;
            }
            self.metrics = Some(snapshot);
        }
    }

    /// Whether the backend reports a trained model. Defaults to false
    /// until (or unless) the status fetch says otherwise.
    pub fn model_ready(&self) -> bool {
        self.status.as_ref().map(|s| s.model_ready).unwrap_or(false)
    }

    // ── Analysis lifecycle ───────────────────────────────────

    /// Whether a submission would be dispatched right now.
    pub fn can_submit(&self) -> bool {
        !self.loading && self.model_ready()
    }

    /// Start a new analysis. Returns the generation number to tag the
    /// request with, or `None` when submission is gated (a request is
    /// already in flight, or the model is not ready) — the caller makes
    /// no network call in that case.
    pub fn begin_analysis(&mut self) -> Option<u64> {
        if !self.can_submit() {
            return None;
        }
        self.loading = true;
        self.network_error = None;
        self.input.validation_error = None;
        // Discard the previous session's result before the new one starts.
        self.current_result = None;
        self.view = View::Input;
        self.reveal_at_tick = None;
        self.request_seq += 1;
        Some(self.request_seq)
    }

    /// Commit a successful result. Stale generations are dropped so a
    /// superseded request can never overwrite a later submission.
    pub fn commit_result(&mut self, seq: u64, result: PredictionResult) {
        if seq != self.request_seq {
            return;
        }
        self.loading = false;
        self.network_error = None;
        self.gauge_fill = 0.0;
        self.results_scroll = 0;
        self.current_result = Some(result);
        // Post-commit side effect: reveal the results view after a short
        // settle delay, the terminal analogue of scroll-into-view.
        self.reveal_at_tick = Some(self.tick + RESULT_SETTLE_TICKS);
        // A file analysis returns to the default text layout.
        if self.input.mode == InputMode::File {
            self.input.mode = InputMode::Text;
        }
    }

    /// Record a failed analysis. No result is produced; the loading flag
    /// always clears.
    pub fn fail_analysis(&mut self, seq: u64, message: String) {
        if seq != self.request_seq {
            return;
        }
        self.loading = false;
        self.network_error = Some(message);
    }

    /// Clear the held result and return to the input view ("back to
    /// start"). Calling with no result held is a no-op.
    pub fn reset(&mut self) {
        self.current_result = None;
        self.view = View::Input;
        self.reveal_at_tick = None;
        self.results_scroll = 0;
        self.gauge_fill = 0.0;
        self.network_error = None;
    }

    // ── Ticking ──────────────────────────────────────────────

    /// Advance one UI tick: reveal a settled result, animate the gauge,
    /// expire the transient status message.
    pub fn on_tick(&mut self) {
        self.tick += 1;

        if let Some(at) = self.reveal_at_tick {
            if self.tick >= at && self.current_result.is_some() {
                self.view = View::Results;
                self.results_scroll = 0;
                self.reveal_at_tick = None;
            }
        }

        if let Some(ref result) = self.current_result {
            if self.gauge_fill < result.confidence {
                self.gauge_fill = (self.gauge_fill + GAUGE_ANIM_STEP).min(result.confidence);
            }
        }

        if let Some((_, since)) = &self.status_message {
            if since.elapsed().as_secs() >= STATUS_MESSAGE_TIMEOUT_SECS {
                self.status_message = None;
            }
        }
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    pub fn scroll_results_up(&mut self, lines: u16) {
        self.results_scroll = self.results_scroll.saturating_sub(lines);
    }

    pub fn scroll_results_down(&mut self, lines: u16) {
        self.results_scroll = self.results_scroll.saturating_add(lines);
    }
}
