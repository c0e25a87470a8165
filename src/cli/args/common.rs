//! Common CLI types shared across commands

use clap::Args;

use skyquote::frontend::DEFAULT_PROXY_URL;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized rich formatting (default)
    #[default]
    Pretty,
    /// Table format - one row per entry
    Table,
    /// JSON format - structured for scripts
    Json,
}

/// Where the client commands find a running proxy
#[derive(Debug, Clone, Args)]
pub struct ProxyArgs {
    /// Base URL of a running `skyquote serve`
    #[arg(long = "proxy", env = "SKYQUOTE_PROXY", default_value = DEFAULT_PROXY_URL, hide_env = true)]
    pub url: String,
}
