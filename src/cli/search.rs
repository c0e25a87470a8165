//! Search command implementation
//!
//! Runs the search controller against a running proxy, prints the results
//! and, when options are selected, the quote built from them.

use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tabled::Tabled;

use skyquote::airlines::AirlineDirectory;
use skyquote::error::{Error, Result};
use skyquote::frontend::search::NO_FLIGHTS;
use skyquote::frontend::{
    FileClipboard, OfferCard, ProxyBackend, ResultsView, SearchBackend, SearchController,
    SearchForm, SelectionController,
};
use skyquote::models::{Offer, SearchResponse};
use skyquote::output::formatters::{format_price, format_stops};
use skyquote::output::{json, table};

use crate::cli::args::GlobalOptions;
use crate::cli::{OutputFormat, SearchArgs};

/// Display format for offers in table view
#[derive(Tabled)]
struct OfferDisplay {
    #[tabled(rename = "OPTION")]
    option: usize,

    #[tabled(rename = "PRICE")]
    price: String,

    #[tabled(rename = "DURATION")]
    duration: String,

    #[tabled(rename = "STOPS")]
    stops: usize,

    #[tabled(rename = "FLIGHTS")]
    flights: String,
}

impl From<&OfferCard> for OfferDisplay {
    fn from(card: &OfferCard) -> Self {
        Self {
            option: card.option_number(),
            price: format_price(&card.currency, &card.price),
            duration: card.duration.clone(),
            stops: card.stops,
            flights: card
                .segments
                .iter()
                .map(|s| {
                    format!(
                        "{}{} {} {} → {} {}",
                        s.airline_code,
                        s.flight_number,
                        s.departure_airport,
                        s.departure_clock,
                        s.arrival_airport,
                        s.arrival_clock
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// JSON shape: the search result plus the quote, when one was requested
#[derive(Serialize)]
struct SearchOutput<'a> {
    #[serde(flatten)]
    response: SearchResponse,

    #[serde(skip_serializing_if = "Option::is_none")]
    quote: Option<&'a str>,
}

fn spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Run the search command
pub async fn run(opts: &GlobalOptions, args: &SearchArgs) -> Result<()> {
    let airlines = Arc::new(AirlineDirectory::embedded()?);
    let backend = ProxyBackend::new(&args.proxy.url)?;
    let mut controller = SearchController::new(backend, airlines.clone());

    let form = SearchForm {
        origin: args.from.clone(),
        destination: args.to.clone(),
        departure_date: args.depart.clone(),
        return_date: args.return_date.clone().unwrap_or_default(),
        one_way: args.one_way,
    };

    let progress = spinner(format!(
        "Searching {} → {} on {}",
        form.origin.trim(),
        form.destination.trim(),
        form.departure_date
    ));
    controller.submit(&form).await;
    progress.finish_and_clear();

    if let ResultsView::Error(message) = controller.view() {
        if opts.format == OutputFormat::Json {
            let output = SearchOutput {
                response: SearchResponse::error(message.clone()),
                quote: None,
            };
            println!("{}", json::format_json(&output)?);
        }
        return Err(Error::Other(message.clone()));
    }

    let quote = if args.select.is_empty() && args.export.is_none() {
        None
    } else {
        Some(build_quote(opts, &controller, airlines, args)?)
    };

    match opts.format {
        OutputFormat::Pretty => print_pretty(controller.view()),
        OutputFormat::Table => {
            let rows: Vec<OfferDisplay> = match controller.view() {
                ResultsView::Offers(cards) => cards.iter().map(OfferDisplay::from).collect(),
                _ => Vec::new(),
            };
            println!("{}", table::format_table(&rows, NO_FLIGHTS));
        }
        OutputFormat::Json => {
            let offers: Vec<Offer> = controller.last_offers().offers().to_vec();
            let output = SearchOutput {
                response: SearchResponse::offers(offers),
                quote: quote.as_deref(),
            };
            println!("{}", json::format_json(&output)?);
            return Ok(());
        }
    }

    if let Some(text) = quote {
        println!("\n{}", "Quote".bold());
        println!("{}", text);
    }

    Ok(())
}

/// Resolve `--select` (1-based) into a quote, exporting it when asked
fn build_quote<B: SearchBackend>(
    opts: &GlobalOptions,
    controller: &SearchController<B>,
    airlines: Arc<AirlineDirectory>,
    args: &SearchArgs,
) -> Result<String> {
    let indices = args.select.iter().filter_map(|&n| {
        if n == 0 {
            log::warn!("Ignoring option number 0; options start at 1");
        }
        n.checked_sub(1)
    });
    let selection = controller.select(indices);

    let mut selector = SelectionController::new(airlines, opts.open_store()?);
    let text = selector
        .show(controller.last_offers(), &selection)
        .summary()
        .to_text();

    if let Some(path) = &args.export {
        selector.copy(&mut FileClipboard::new(path))?;
        eprintln!("{} Quote written to {}", "✓".green(), path.display());
    }

    Ok(text)
}

fn print_pretty(view: &ResultsView) {
    let ResultsView::Offers(cards) = view else {
        println!("{}", NO_FLIGHTS);
        return;
    };

    for card in cards {
        println!("{}", format!("OPTION {}", card.option_number()).bold());
        println!(
            "  {}  {}  {}",
            format_price(&card.currency, &card.price).green(),
            card.duration,
            format_stops(card.stops).dimmed()
        );
        for segment in &card.segments {
            println!(
                "  {} {}  {} {} → {} {}  ({})",
                segment.airline_name.cyan(),
                segment.flight_number,
                segment.departure_airport,
                segment.departure_clock,
                segment.arrival_airport,
                segment.arrival_clock,
                segment.duration
            );
        }
        println!();
    }
}
