//! Console renderer for one-shot mode

use crate::cli::commands::OutputFormat;
use colored::Colorize;
use tokenscope_application::{DisplaySurface, GatewayError};
use tokenscope_domain::{AnalysisMode, ResultSet, display_surface};
use unicode_width::UnicodeWidthStr;

/// Turn colored output off globally when the configuration disables it.
///
/// Colors are left to `colored`'s own terminal detection otherwise.
pub fn configure_color(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}

/// Collects rendered token rows as text for printing to stdout.
///
/// `Plain` gives one `surface  features` line per token with the surface
/// highlighted; `Json` gives one JSON object per line with the raw surface.
pub struct ConsoleRenderer {
    format: OutputFormat,
    show_index: bool,
    output: String,
    rendered: usize,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            show_index: false,
            output: String::new(),
            rendered: 0,
        }
    }

    pub fn with_show_index(mut self, show_index: bool) -> Self {
        self.show_index = show_index;
        self
    }

    /// Text rendered since the last clear
    pub fn output(&self) -> &str {
        &self.output
    }

    /// One-line summary printed before plain output
    pub fn format_header(text: &str, mode: AnalysisMode) -> String {
        format!("{} {} {}", "Input:".cyan().bold(), text, format!("[{}]", mode.label()).dimmed())
    }

    pub fn format_failure(error: &GatewayError) -> String {
        format!("{} {}", "Request failed:".red().bold(), error)
    }

    fn render_plain(&mut self, rows: &ResultSet) {
        let surface_width = rows
            .iter()
            .map(|row| display_surface(&row.surface).width())
            .max()
            .unwrap_or(0);

        for row in rows {
            self.rendered += 1;
            let surface = display_surface(&row.surface);
            let padding = " ".repeat(surface_width.saturating_sub(surface.width()) + 2);
            if self.show_index {
                self.output
                    .push_str(&format!("{:>4} ", self.rendered).dimmed().to_string());
            }
            self.output.push_str(&format!(
                "{}{}{}\n",
                surface.yellow().bold(),
                padding,
                row.features
            ));
        }
    }

    fn render_json(&mut self, rows: &ResultSet) {
        for row in rows {
            self.rendered += 1;
            let line = serde_json::to_string(row).unwrap_or_else(|_| "{}".to_string());
            self.output.push_str(&line);
            self.output.push('\n');
        }
    }
}

impl DisplaySurface for ConsoleRenderer {
    fn clear(&mut self) {
        self.output.clear();
        self.rendered = 0;
    }

    fn render(&mut self, rows: &ResultSet) {
        match self.format {
            OutputFormat::Plain => self.render_plain(rows),
            OutputFormat::Json => self.render_json(rows),
        }
    }
}
