//! Status bar widget: key hints or the latest flash message

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

const KEY_HINTS: &str = "Enter:tokenize  Tab:mode  Esc:clear  PgUp/PgDn:scroll  F1:help  Ctrl+C:quit";

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let mode = self.state.mode;
        let mode_text = format!(" {} ", mode.name().to_uppercase());
        let mode_style = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let mode_width = mode_text.width() as u16;
        buf.set_line(
            area.x,
            area.y,
            &Line::from(Span::styled(mode_text, mode_style)),
            mode_width,
        );

        let (right_text, right_style) = match &self.state.flash_message {
            Some((flash, _)) => (
                flash.as_str(),
                Style::default().fg(Color::LightRed).bg(Color::DarkGray),
            ),
            None => (
                KEY_HINTS,
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ),
        };

        // Right-aligned, dropped when the terminal is too narrow
        let right_width = right_text.width() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + mode_width {
            buf.set_line(
                right_x,
                area.y,
                &Line::from(Span::styled(right_text, right_style)),
                right_width + 1,
            );
        }
    }
}
