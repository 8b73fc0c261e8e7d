//! Token pane: one line per token, surface then features

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

pub struct TokenListWidget<'a> {
    state: &'a TuiState,
}

impl<'a> TokenListWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn build_lines(&self) -> Vec<Line<'a>> {
        let state: &'a TuiState = self.state;
        // Align features on the widest surface
        let surface_width = state
            .rows
            .iter()
            .map(|row| row.surface.width())
            .max()
            .unwrap_or(0);
        let index_width = state.rows.len().to_string().len();

        state
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mut spans = Vec::with_capacity(4);
                if state.options.show_index {
                    spans.push(Span::styled(
                        format!("{:>width$} ", i + 1, width = index_width),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                let padding = surface_width.saturating_sub(row.surface.width());
                spans.push(Span::styled(
                    row.surface.as_str(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" ".repeat(padding + 2)));
                spans.push(Span::styled(
                    row.features.as_str(),
                    Style::default().fg(Color::White),
                ));
                Line::from(spans)
            })
            .collect()
    }
}

impl<'a> Widget for TokenListWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.state.rows.is_empty() {
            " Tokens ".to_string()
        } else {
            format!(" Tokens ({}) ", self.state.rows.len())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().fg(Color::White));

        Paragraph::new(self.build_lines())
            .block(block)
            .scroll((self.state.scroll_offset as u16, 0))
            .render(area, buf);
    }
}
