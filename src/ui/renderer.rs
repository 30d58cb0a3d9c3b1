//! Top-level rendering: header, body dispatch, footer.

mod helpers;
mod results;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::*;
use crate::input::InputMode;
use crate::utils::{spinner_char, truncate_str};

use super::state::{AppState, View};

/// Draw one frame from the current state.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(state.theme.bg_dark)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, chunks[0], state);
    match state.view {
        View::Input => render_input_view(frame, chunks[1], state),
        View::Results => results::render_results_view(frame, chunks[1], state),
    }
    render_footer(frame, chunks[2], state);
}

// ── Header (hero) ─────────────────────────────────────────────

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(t.border_style())
        .title(Span::styled(" VERACITY — news verifier ", t.title_style()));

    let mut spans: Vec<Span> = Vec::new();
    match &state.status {
        Some(status) => {
            let (dot_color, label) = if status.model_ready {
                (t.real_accent, "online")
            } else {
                (t.danger, status.status.as_str())
            };
            spans.push(Span::styled("● ", Style::default().fg(dot_color)));
            spans.push(Span::styled(
                format!("{} (v{})", label, status.version),
                Style::default().fg(t.text_primary),
            ));
            if !status.model_ready {
                spans.push(Span::styled(
                    "  model not ready — submission disabled",
                    Style::default().fg(t.warning),
                ));
            }
            if status.gemini_available {
                spans.push(Span::styled(
                    "  ✦ AI cross-check",
                    Style::default().fg(t.gemini_accent),
                ));
            }
        }
        None => {
            spans.push(Span::styled("● ", Style::default().fg(t.text_muted)));
            spans.push(Span::styled(
                "connecting...",
                Style::default().fg(t.text_dim),
            ));
        }
    }

    spans.push(Span::raw("   "));
    if state.metrics_loading {
        spans.push(Span::styled(
            "metrics loading...",
            Style::default().fg(t.text_muted),
        ));
    } else {
        spans.push(Span::styled(
            format!("best model accuracy {}", state.best_accuracy),
            Style::default().fg(t.text_dim),
        ));
        if let Some(ref metrics) = state.metrics {
            if !metrics.best_model.is_empty() {
                spans.push(Span::styled(
                    format!("  ({}, F1 {:.3})", metrics.best_model, metrics.best_f1),
                    Style::default().fg(t.text_muted),
                ));
            }
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

// ── Input view ────────────────────────────────────────────────

fn render_input_view(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_mode_tabs(frame, chunks[0], state);
    match state.input.mode {
        InputMode::Text => render_text_entry(frame, chunks[1], state),
        InputMode::File => render_file_entry(frame, chunks[1], state),
    }
    render_input_info(frame, chunks[2], state);
    render_input_feedback(frame, chunks[3], state);
}

fn render_mode_tabs(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let active = Style::default().fg(t.accent).add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(t.text_muted);
    let (text_style, file_style) = match state.input.mode {
        InputMode::Text => (active, inactive),
        InputMode::File => (inactive, active),
    };
    let line = Line::from(vec![
        Span::styled(" ▸ Text Input ", text_style),
        Span::styled("│", Style::default().fg(t.border)),
        Span::styled(" ▸ File Upload ", file_style),
        Span::styled("  (Tab to switch)", Style::default().fg(t.text_muted)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_text_entry(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(t.border_style())
        .style(Style::default().bg(t.bg_panel));

    let paragraph = if state.input.text.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            "Paste your article content or news headline here for instant verification...",
            Style::default().fg(t.text_muted),
        )))
    } else {
        // Text::from splits the buffer on newlines; the cursor bar rides
        // the end of the last line.
        Paragraph::new(format!("{}▏", state.input.text))
            .style(Style::default().fg(t.text_primary))
    };
    frame.render_widget(paragraph.block(block).wrap(Wrap { trim: false }), area);
}

fn render_file_entry(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(t.border_style())
        .style(Style::default().bg(t.bg_panel))
        .title(Span::styled(
            " file path ",
            Style::default().fg(t.text_dim),
        ));

    let path_line: Line = if state.input.file_path.is_empty() {
        Line::from(Span::styled(
            "Type the path to a local file...",
            Style::default().fg(t.text_muted),
        ))
    } else {
        Line::from(vec![
            Span::styled(
                state.input.file_path.clone(),
                Style::default().fg(t.text_primary),
            ),
            Span::styled("▏", Style::default().fg(t.accent)),
        ])
    };

    let lines = vec![
        path_line,
        Line::default(),
        Line::from(Span::styled(
            ".txt or .csv files (max 2MB)",
            Style::default().fg(t.text_muted),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_input_info(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let deep_scan_mark = if state.input.deep_scan { "[x]" } else { "[ ]" };
    let mut spans = vec![Span::styled(
        format!(" {} Deep scan sources (Ctrl+D)", deep_scan_mark),
        Style::default().fg(if state.input.deep_scan {
            t.accent
        } else {
            t.text_dim
        }),
    )];
    if state.input.mode == InputMode::Text {
        spans.push(Span::styled(
            format!(
                "   {} / {} words",
                state.input.word_count(),
                MAX_WORDS_DISPLAY
            ),
            Style::default().fg(t.text_muted),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_input_feedback(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let line = if state.loading {
        Line::from(vec![
            Span::styled(
                format!(" {} ", spinner_char(state.tick)),
                Style::default().fg(t.accent),
            ),
            Span::styled("Analyzing...", Style::default().fg(t.text_dim)),
        ])
    } else if let Some(ref message) = state.input.validation_error {
        Line::from(Span::styled(format!(" ⚠ {}", message), t.error_style()))
    } else if let Some(ref message) = state.network_error {
        // Server messages can be arbitrarily long; keep the line readable.
        Line::from(Span::styled(
            format!(" ⚠ {}", truncate_str(message, 120)),
            t.error_style(),
        ))
    } else if !state.model_ready() {
        Line::from(Span::styled(
            " Waiting for the classification service...",
            Style::default().fg(t.text_muted),
        ))
    } else {
        Line::from(Span::styled(
            " Press F5 to analyze",
            Style::default().fg(t.text_dim),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

// ── Footer ────────────────────────────────────────────────────

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    if let Some((ref message, _)) = state.status_message {
        let line = Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(t.accent),
        ));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let hints = match state.view {
        View::Input => " F5 analyze · Tab mode · Ctrl+D deep scan · Ctrl+L clear · Esc quit",
        View::Results => " n new analysis · y copy summary · ↑/↓ scroll · Esc back · Ctrl+C quit",
    };
    let line = Line::from(Span::styled(hints, Style::default().fg(t.text_muted)));
    frame.render_widget(Paragraph::new(line), area);
}
