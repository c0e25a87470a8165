//! Places command implementation

use std::sync::Arc;

use serde::Serialize;
use tabled::Tabled;

use skyquote::airlines::AirlineDirectory;
use skyquote::error::Result;
use skyquote::frontend::{ProxyBackend, SearchController, Suggestion};
use skyquote::output::{json, table};

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;

const NO_SUGGESTIONS: &str = "No suggestions.";

/// Display format for suggestions in table view
#[derive(Tabled, Serialize)]
struct PlaceDisplay {
    #[tabled(rename = "CODE")]
    code: String,

    #[tabled(rename = "NAME")]
    name: String,
}

impl From<&Suggestion> for PlaceDisplay {
    fn from(s: &Suggestion) -> Self {
        Self {
            code: s.iata_code.clone(),
            name: s.name.clone(),
        }
    }
}

/// Run the places command
pub async fn run(opts: &GlobalOptions, keyword: &str, proxy: &str) -> Result<()> {
    let backend = ProxyBackend::new(proxy)?;
    let controller = SearchController::new(backend, Arc::new(AirlineDirectory::embedded()?));

    let suggestions = controller.suggest(keyword).await?;

    match opts.format {
        OutputFormat::Pretty => {
            if suggestions.is_empty() {
                println!("{}", NO_SUGGESTIONS);
            }
            for suggestion in &suggestions {
                println!("{}", suggestion.label());
            }
        }
        OutputFormat::Table => {
            let rows: Vec<PlaceDisplay> = suggestions.iter().map(PlaceDisplay::from).collect();
            println!("{}", table::format_table(&rows, NO_SUGGESTIONS));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&suggestions)?);
        }
    }

    Ok(())
}
