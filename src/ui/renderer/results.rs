//! Results view: verdict card, evidence, optional AI cross-check panel.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::models::{GeminiAnalysis, PredictionResult};
use crate::present;
use crate::ui::state::AppState;
use crate::ui::theme::Theme;

use super::helpers;

pub fn render_results_view(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(ref result) = state.current_result else {
        // Reset raced the reveal tick; nothing to draw.
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(3)])
        .split(area);

    render_verdict_card(frame, chunks[0], state, result);
    render_details(frame, chunks[1], state, result);
}

// ── Verdict card ──────────────────────────────────────────────

fn render_verdict_card(frame: &mut Frame, area: Rect, state: &AppState, result: &PredictionResult) {
    let t = &state.theme;
    // Palette follows is_fake; the headline text follows label.
    let accent = t.verdict_accent(result.is_fake);
    let bg = t.verdict_bg(result.is_fake);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(bg))
        .title(Span::styled(
            " Classification Result ",
            Style::default().fg(t.text_dim),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let headline = Line::from(vec![
        Span::styled(
            format!(" {} ", present::verdict_icon(result.is_fake)),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            result.label.headline(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   by {}", result.model_name),
            Style::default().fg(t.text_dim),
        ),
    ]);
    frame.render_widget(Paragraph::new(headline), rows[0]);

    let confidence_line = Line::from(vec![
        Span::styled(" Confidence Score  ", Style::default().fg(t.text_dim)),
        Span::styled(
            present::confidence_text(result.confidence),
            Style::default()
                .fg(t.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ·  {}", present::confidence_label(result.confidence)),
            Style::default().fg(t.text_dim),
        ),
    ]);
    frame.render_widget(Paragraph::new(confidence_line), rows[1]);

    // The gauge fill animates; the numeric text above never does.
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(accent).bg(t.gauge_bg))
        .ratio((state.gauge_fill / 100.0).clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, rows[2].inner(ratatui::layout::Margin {
        horizontal: 1,
        vertical: 0,
    }));
}

// ── Scrollable detail section ─────────────────────────────────

fn render_details(frame: &mut Frame, area: Rect, state: &AppState, result: &PredictionResult) {
    let t = &state.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(t.border_style());
    let inner_width = area.width.saturating_sub(4) as usize;

    let lines = build_detail_lines(state, result, inner_width.max(20));
    let total = lines.len();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((state.results_scroll, 0));
    frame.render_widget(paragraph, area);
    helpers::render_scrollbar_bordered(frame, area, total, state.results_scroll as usize);
}

fn build_detail_lines<'a>(
    state: &AppState,
    result: &'a PredictionResult,
    width: usize,
) -> Vec<Line<'a>> {
    let t = &state.theme;
    let mut lines: Vec<Line> = Vec::new();

    // Key evidence chips
    if !result.top_keywords.is_empty() {
        lines.push(helpers::section_title("⚡ Key Triggers Found", t.accent));
        lines.push(helpers::keyword_chips(&result.top_keywords, t));
        lines.push(Line::default());
    }

    // Model confidence card
    lines.push(helpers::section_title("◎ Model Confidence", t.accent));
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {} certainty", present::confidence_text(result.confidence)),
            Style::default().fg(t.text_primary),
        ),
        Span::styled(
            format!(
                "  ·  {} model accuracy  ·  {}",
                present::model_accuracy_text(result),
                result.model_name
            ),
            Style::default().fg(t.text_dim),
        ),
    ]));
    lines.push(Line::default());

    // Static guidance paragraph, selected by verdict
    for wrapped in textwrap::wrap(present::explanation(result.is_fake), width) {
        lines.push(Line::from(Span::styled(
            format!("  {}", wrapped),
            Style::default().fg(t.text_dim),
        )));
    }
    lines.push(Line::default());

    // Secondary opinion: full panel when the cross-check ran, a one-line
    // note when it degraded, nothing at all when it was never attempted.
    match result.gemini.as_ref() {
        Some(gemini) if gemini.gemini_available => {
            push_gemini_panel(&mut lines, gemini, t, width);
        }
        Some(_) => {
            lines.push(helpers::section_title("✦ AI Cross-check", t.gemini_accent));
            lines.push(Line::from(Span::styled(
                "  Cross-check unavailable for this analysis.",
                Style::default().fg(t.text_muted),
            )));
            lines.push(Line::default());
        }
        None => {}
    }

    // Timing footer; each measured phase is reported independently.
    let mut timing = format!("  response {:.0} ms", result.response_time_ms);
    let mut phases: Vec<String> = Vec::new();
    if let Some(ml) = result.ml_time_ms {
        phases.push(format!("ml {:.0} ms", ml));
    }
    if let Some(g) = result.gemini_time_ms {
        phases.push(format!("gemini {:.0} ms", g));
    }
    if !phases.is_empty() {
        timing.push_str(&format!(" ({})", phases.join(" · ")));
    }
    lines.push(Line::from(Span::styled(
        timing,
        Style::default().fg(t.text_muted),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "  ⟳ Analyze another article: press n",
        Style::default().fg(t.text_dim),
    )));

    lines
}

fn push_gemini_panel<'a>(
    lines: &mut Vec<Line<'a>>,
    gemini: &'a GeminiAnalysis,
    t: &Theme,
    width: usize,
) {
    lines.push(helpers::section_title("✦ AI Cross-check", t.gemini_accent));
    lines.push(Line::from(vec![
        Span::styled("  Verdict ", Style::default().fg(t.text_dim)),
        Span::styled(
            gemini.gemini_verdict.label(),
            Style::default()
                .fg(t.gemini_accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  ·  {:.0}% confidence  ·  credibility {:.0}/100",
                gemini.gemini_confidence, gemini.credibility_score
            ),
            Style::default().fg(t.text_dim),
        ),
    ]));
    if !gemini.red_flags.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Red flags:",
            Style::default().fg(t.danger),
        )));
        for flag in &gemini.red_flags {
            lines.push(Line::from(Span::styled(
                format!("   ▪ {}", flag),
                Style::default().fg(t.text_primary),
            )));
        }
    }
    if !gemini.credibility_signals.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Credibility signals:",
            Style::default().fg(t.real_accent),
        )));
        for signal in &gemini.credibility_signals {
            lines.push(Line::from(Span::styled(
                format!("   ▪ {}", signal),
                Style::default().fg(t.text_primary),
            )));
        }
    }
    if !gemini.language_analysis.is_empty() {
        for wrapped in textwrap::wrap(&gemini.language_analysis, width) {
            lines.push(Line::from(Span::styled(
                format!("  {}", wrapped),
                Style::default().fg(t.text_dim),
            )));
        }
    }
    if !gemini.fact_check_verdict.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("  Fact check: ", Style::default().fg(t.text_dim)),
            Span::styled(
                gemini.fact_check_verdict.as_str(),
                Style::default().fg(t.text_primary),
            ),
        ]));
    }
    if !gemini.recommendation.is_empty() {
        for wrapped in textwrap::wrap(&gemini.recommendation, width) {
            lines.push(Line::from(Span::styled(
                format!("  → {}", wrapped),
                Style::default().fg(t.gemini_accent),
            )));
        }
    }
    lines.push(Line::default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Verdict;

    fn test_state() -> AppState {
        AppState::new(Theme::default_dark(), false)
    }

    fn make_result() -> PredictionResult {
        PredictionResult {
            label: Verdict::Fake,
            confidence: 87.3,
            is_fake: true,
            model_name: "svm".to_string(),
            model_accuracy: Some(0.984),
            top_keywords: Vec::new(),
            response_time_ms: 900.0,
            ml_time_ms: None,
            gemini_time_ms: None,
            gemini: None,
            processed_text: String::new(),
        }
    }

    fn flatten(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn timing_prints_gemini_without_ml() {
        let state = test_state();
        let mut result = make_result();
        result.gemini_time_ms = Some(805.0);
        let text = flatten(&build_detail_lines(&state, &result, 80));
        assert!(text.contains("response 900 ms (gemini 805 ms)"));
    }

    #[test]
    fn timing_prints_each_phase_present() {
        let state = test_state();
        let mut result = make_result();
        result.ml_time_ms = Some(35.0);
        result.gemini_time_ms = Some(805.0);
        let text = flatten(&build_detail_lines(&state, &result, 80));
        assert!(text.contains("response 900 ms (ml 35 ms · gemini 805 ms)"));

        result.gemini_time_ms = None;
        let text = flatten(&build_detail_lines(&state, &result, 80));
        assert!(text.contains("response 900 ms (ml 35 ms)"));
    }

    #[test]
    fn degraded_cross_check_shows_note() {
        let state = test_state();
        let mut result = make_result();
        result.gemini = Some(GeminiAnalysis::default());
        let text = flatten(&build_detail_lines(&state, &result, 80));
        assert!(text.contains("Cross-check unavailable for this analysis."));
        assert!(!text.contains("credibility"));
    }

    #[test]
    fn absent_cross_check_shows_nothing() {
        let state = test_state();
        let result = make_result();
        let text = flatten(&build_detail_lines(&state, &result, 80));
        assert!(!text.contains("AI Cross-check"));
    }
}
