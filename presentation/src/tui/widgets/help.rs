//! Help overlay widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use tokenscope_domain::AnalysisMode;

const BINDINGS: [(&str, &str); 8] = [
    ("Enter", "Tokenize the current input"),
    ("Tab", "Switch to the next mode and re-tokenize"),
    ("Esc / Ctrl+L", "Clear input and tokens"),
    ("Backspace / Del", "Delete character"),
    ("Home / End", "Move cursor to start / end"),
    ("PgUp / PgDn", "Scroll tokens"),
    ("F1", "Toggle this help"),
    ("Ctrl+C / Ctrl+Q", "Quit"),
];

/// Widget for rendering help overlay
pub struct HelpWidget;

impl Default for HelpWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpWidget {
    pub fn new() -> Self {
        Self
    }

    fn build_help_text() -> Vec<Line<'static>> {
        let heading = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![Line::from(Span::styled("Keyboard Shortcuts", heading)), Line::from("")];

        for (key, description) in BINDINGS {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<16}", key), Style::default().fg(Color::Yellow)),
                Span::raw(description),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Modes", heading)));
        lines.push(Line::from(""));
        for mode in AnalysisMode::ALL {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<16}", mode.index()), Style::default().fg(Color::Green)),
                Span::raw(mode.label()),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press F1 or Esc to close",
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::default().fg(Color::Cyan));

        Paragraph::new(Self::build_help_text())
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_every_mode() {
        let text: String = HelpWidget::build_help_text()
            .iter()
            .flat_map(|line| line.spans.iter().map(|s| s.content.to_string()))
            .collect();
        for mode in AnalysisMode::ALL {
            assert!(text.contains(mode.label()));
        }
        assert!(text.contains("Tab"));
    }
}
