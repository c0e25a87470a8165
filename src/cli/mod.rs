//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use skyquote::config::ConfigOverrides;

pub mod args;
pub mod places;
pub mod profile;
pub mod search;
pub mod serve;
pub mod status;

pub use args::{OutputFormat, ProxyArgs};

/// SkyQuote - flight offer search proxy and quote builder
#[derive(Parser, Debug)]
#[command(name = "skyquote")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "SKYQUOTE_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "SKYQUOTE_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override local storage directory
    #[arg(long, global = true, env = "SKYQUOTE_DATA_DIR", hide_env = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true, env = "SKYQUOTE_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the search proxy
    Serve(ServeArgs),

    /// Search flight offers through a running proxy
    Search(SearchArgs),

    /// Suggest airports and cities for a partial name
    Places {
        /// Partial airport or city name
        keyword: String,

        #[command(flatten)]
        proxy: ProxyArgs,
    },

    /// Manage the company profile printed on quotes
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Show configuration status
    Status,

    /// Display version information
    Version,
}

/// Proxy server options
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Travel API client id
    #[arg(long, env = "AMADEUS_CLIENT_ID", hide_env_values = true)]
    pub client_id: Option<String>,

    /// Travel API client secret
    #[arg(long, env = "AMADEUS_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Travel API base URL
    #[arg(long, env = "AMADEUS_API_HOST", hide = true)]
    pub amadeus_host: Option<String>,

    /// Logo API key
    #[arg(long, env = "LOGO_DEV_KEY", hide_env_values = true)]
    pub logo_key: Option<String>,

    /// Logo API base URL
    #[arg(long, env = "LOGO_DEV_HOST", hide = true)]
    pub logo_host: Option<String>,
}

impl ServeArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            amadeus_host: self.amadeus_host.clone(),
            logo_key: self.logo_key.clone(),
            logo_host: self.logo_host.clone(),
            port: self.port,
        }
    }
}

/// Flight search options
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Origin IATA code
    #[arg(long)]
    pub from: String,

    /// Destination IATA code
    #[arg(long)]
    pub to: String,

    /// Departure date (YYYY-MM-DD)
    #[arg(long)]
    pub depart: String,

    /// Return date (YYYY-MM-DD), ignored with --one-way
    #[arg(long = "return")]
    pub return_date: Option<String>,

    /// Search one-way only
    #[arg(long)]
    pub one_way: bool,

    /// Option numbers to put on a quote (e.g. 1,3)
    #[arg(long, value_delimiter = ',')]
    pub select: Vec<usize>,

    /// Write the quote text to a file
    #[arg(long)]
    pub export: Option<PathBuf>,

    #[command(flatten)]
    pub proxy: ProxyArgs,
}

/// Company profile subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Save the company name, phone and logo
    Set {
        /// Company name (prompted when omitted)
        #[arg(long)]
        name: Option<String>,

        /// Contact phone (prompted when omitted)
        #[arg(long)]
        phone: Option<String>,

        /// Logo image file; the stored logo is kept when omitted
        #[arg(long)]
        logo: Option<PathBuf>,
    },

    /// Show the stored profile
    Show,
}
