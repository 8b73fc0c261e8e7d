//! Input widget: single-line query field with a block cursor

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const PROMPT: &str = "› ";

pub struct InputWidget<'a> {
    state: &'a TuiState,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn build_line(&self, color: Color) -> Line<'a> {
        let state: &'a TuiState = self.state;
        let text = state.input.as_str();
        let cursor_pos = state.cursor_pos.min(text.len());
        let prompt = Span::styled(
            PROMPT,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        );

        if !state.input_focused {
            return Line::from(vec![prompt, Span::raw(text)]);
        }

        let cursor_style = Style::default().fg(Color::Black).bg(color);
        let (before, rest) = text.split_at(cursor_pos);
        let mut chars = rest.chars();
        let cursor_char = chars.next();
        let after = chars.as_str();

        let mut spans = vec![prompt, Span::raw(before)];
        match cursor_char {
            Some(c) => {
                spans.push(Span::styled(c.to_string(), cursor_style));
                spans.push(Span::raw(after));
            }
            None => spans.push(Span::styled(" ", cursor_style)),
        }
        Line::from(spans)
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = if self.state.input_focused {
            Color::Green
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Input ")
            .style(Style::default().fg(color));

        // Scroll offsets are terminal columns; wide characters take two
        let inner_width = area.width.saturating_sub(2) as usize;
        let (before, rest) = self.state.input.split_at(self.state.cursor_pos);
        let cursor_col = PROMPT.width() + before.width();
        let cursor_width = rest.chars().next().and_then(|c| c.width()).unwrap_or(1).max(1);
        let scroll_x = (cursor_col + cursor_width).saturating_sub(inner_width);

        Paragraph::new(self.build_line(color))
            .block(block)
            .scroll((0, scroll_x as u16))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_splits_text() {
        let mut state = TuiState::default();
        for c in "abc".chars() {
            state.insert_char(c);
        }
        state.cursor_left();
        state.input_focused = true;

        let line = InputWidget::new(&state).build_line(Color::Green);
        let contents: Vec<_> = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(contents, vec![PROMPT, "ab", "c", ""]);
    }

    fn cursor_cells(buf: &Buffer) -> usize {
        buf.content().iter().filter(|cell| cell.bg == Color::Green).count()
    }

    #[test]
    fn test_wide_input_keeps_cursor_visible() {
        let mut state = TuiState::default();
        for c in "すもももももももものうちすもも".chars() {
            state.insert_char(c);
        }
        state.input_focused = true;

        let area = Rect::new(0, 0, 24, 3);
        let mut buf = Buffer::empty(area);
        InputWidget::new(&state).render(area, &mut buf);
        assert_eq!(cursor_cells(&buf), 1);

        // The last characters typed stay on screen next to the cursor
        let line: String = (1..area.width - 1)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect();
        assert!(line.contains("す"), "{line:?}");
        assert!(line.contains("も"), "{line:?}");
    }

    #[test]
    fn test_wide_cursor_char_is_fully_visible() {
        let mut state = TuiState::default();
        for c in "すもももももももものうちすもも".chars() {
            state.insert_char(c);
        }
        state.cursor_left();
        state.input_focused = true;

        let area = Rect::new(0, 0, 24, 3);
        let mut buf = Buffer::empty(area);
        InputWidget::new(&state).render(area, &mut buf);

        // The cursor sits on the last "も"; both of its columns are inside
        let highlighted: Vec<u16> = (0..area.width)
            .filter(|&x| buf[(x, 1)].bg == Color::Green)
            .collect();
        assert!(!highlighted.is_empty());
        assert!(highlighted.iter().all(|&x| x < area.width - 1));
        assert!(highlighted.iter().any(|&x| buf[(x, 1)].symbol() == "も"));
    }

    #[test]
    fn test_cursor_at_end_renders_block() {
        let mut state = TuiState::default();
        state.insert_char('x');
        state.input_focused = true;

        let line = InputWidget::new(&state).build_line(Color::Green);
        let contents: Vec<_> = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(contents, vec![PROMPT, "x", " "]);
    }
}
