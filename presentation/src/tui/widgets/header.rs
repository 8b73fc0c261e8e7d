//! Header widget: active analysis mode, request state and endpoint

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tokenscope_domain::AnalysisMode;

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

fn mode_color(mode: AnalysisMode) -> Color {
    match mode {
        AnalysisMode::Normal => Color::Cyan,
        AnalysisMode::Search => Color::Green,
        AnalysisMode::Extended => Color::Magenta,
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (status_text, status_color) = if self.state.pending {
            ("Tokenizing…", Color::Yellow)
        } else {
            ("Ready", Color::DarkGray)
        };

        let line = Line::from(vec![
            Span::styled("◉ ", Style::default().fg(Color::Green)),
            Span::styled(
                self.state.mode.label(),
                Style::default()
                    .fg(mode_color(self.state.mode))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(status_text, Style::default().fg(status_color)),
            Span::raw(" | "),
            Span::styled(
                self.state.options.endpoint.as_str(),
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" tokenscope ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}
