//! Shared rendering helpers: section titles, keyword chips, scrollbar.

use ratatui::{
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::constants::MAX_KEYWORD_CHIPS;
use crate::models::Keyword;
use crate::present::keyword_tier;
use crate::ui::theme::Theme;

/// A bold colored section heading.
pub fn section_title(title: &str, color: ratatui::style::Color) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", title),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

/// Keyword chips on one line, colored by positional tier and capped at
/// `MAX_KEYWORD_CHIPS` entries.
pub fn keyword_chips<'a>(keywords: &'a [Keyword], theme: &Theme) -> Line<'a> {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (index, keyword) in keywords.iter().take(MAX_KEYWORD_CHIPS).enumerate() {
        let color = theme.tier_color(keyword_tier(index));
        spans.push(Span::styled(
            format!(" {} ", keyword.word),
            Style::default()
                .fg(theme.bg_dark)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Render a vertical scrollbar inside a bordered area (1px vertical margin).
///
/// Only renders if `total > visible_height`.
pub fn render_scrollbar_bordered(frame: &mut Frame, area: Rect, total: usize, position: usize) {
    let visible_height = area.height.saturating_sub(2) as usize;
    if total <= visible_height {
        return;
    }
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("▲"))
        .end_symbol(Some("▼"));
    let mut scrollbar_state = ScrollbarState::new(total).position(position);
    frame.render_stateful_widget(
        scrollbar,
        area.inner(Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut scrollbar_state,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_keywords(n: usize) -> Vec<Keyword> {
        (0..n)
            .map(|i| Keyword {
                word: format!("kw{}", i),
                score: 0.5,
            })
            .collect()
    }

    #[test]
    fn chips_capped_at_max() {
        let theme = Theme::default_dark();
        let keywords = make_keywords(12);
        let line = keyword_chips(&keywords, &theme);
        // Leading raw span + (chip + spacer) per rendered keyword.
        let chip_count = line
            .spans
            .iter()
            .filter(|s| s.content.starts_with(" kw"))
            .count();
        assert_eq!(chip_count, MAX_KEYWORD_CHIPS);
    }

    #[test]
    fn chips_colored_by_positional_tier() {
        let theme = Theme::default_dark();
        let keywords = make_keywords(7);
        let line = keyword_chips(&keywords, &theme);
        let chips: Vec<&Span> = line
            .spans
            .iter()
            .filter(|s| s.content.starts_with(" kw"))
            .collect();
        assert_eq!(chips[0].style.bg, Some(theme.tier_high));
        assert_eq!(chips[2].style.bg, Some(theme.tier_high));
        assert_eq!(chips[3].style.bg, Some(theme.tier_mid));
        assert_eq!(chips[5].style.bg, Some(theme.tier_mid));
        assert_eq!(chips[6].style.bg, Some(theme.tier_low));
    }

    #[test]
    fn chips_empty_input() {
        let theme = Theme::default_dark();
        let line = keyword_chips(&[], &theme);
        assert_eq!(line.spans.len(), 1);
    }
}
