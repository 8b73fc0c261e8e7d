//! Configuration file loading for tokenscope
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `TOKENSCOPE_*` environment variables (`TOKENSCOPE_SERVICE__BASE_URL=...`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./tokenscope.toml` or `./.tokenscope.toml`
//! 4. Global config: `$XDG_CONFIG_HOME/tokenscope/config.toml`
//! 5. Default values
//!
//! CLI flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileDispatchConfig, FileDisplayConfig, FileServiceConfig, Severity,
};
pub use loader::{ConfigLoader, ConfigSources};
