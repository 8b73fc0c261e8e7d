//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tokenscope_domain::AnalysisMode;

/// Output format for one-shot mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned `surface  features` lines
    #[default]
    Plain,
    /// One JSON object per token
    Json,
}

/// CLI arguments for tokenscope
#[derive(Parser, Debug)]
#[command(name = "tokenscope")]
#[command(author, version, about = "Interactive console for a remote morphological tokenizer")]
#[command(long_about = r#"
tokenscope sends text to a tokenizer REST service and shows one line per
token: the surface form followed by its features.

Without TEXT an interactive console starts:
  Enter      tokenize the input
  Tab        switch to the next analysis mode and re-tokenize
  Esc        clear input and tokens
  F1         help

With TEXT a single request is made and the tokens are printed.

Configuration files are loaded from (in priority order):
1. --config <path>                          Explicit config file
2. ./tokenscope.toml or ./.tokenscope.toml  Project-level config
3. ~/.config/tokenscope/config.toml         Global config
TOKENSCOPE_* environment variables override files
(e.g. TOKENSCOPE_SERVICE__BASE_URL=http://host:8080/kuromoji/rest).

Example:
  tokenscope
  tokenscope "すもももももももものうち"
  tokenscope -m search --output json "関西国際空港"
"#)]
pub struct Cli {
    /// Text to tokenize once (omit to start the interactive console)
    pub text: Option<String>,

    /// Analysis mode: normal, search, extended (or 0, 1, 2)
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<AnalysisMode>,

    /// Output format for one-shot mode
    #[arg(short, long, value_enum, default_value = "plain")]
    pub output: OutputFormat,

    /// Base URL of the tokenizer service (overrides config)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// True when no text was given and the console should start
    pub fn is_interactive(&self) -> bool {
        self.text.is_none()
    }
}
