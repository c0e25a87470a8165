//! Selected-offers summary
//!
//! Builds the quote shown in the selection dialog from the checked options,
//! with the company letterhead appended when a profile is stored, and copies
//! its visible text out.

use std::path::PathBuf;
use std::sync::Arc;

use super::html::escape_html;
use super::profile::CompanyProfile;
use super::state::{LastOffers, Selection};
use super::storage::LocalStore;
use crate::airlines::AirlineDirectory;
use crate::error::Result;
use crate::models::Offer;
use crate::output::formatters::format_iso_duration;

/// Rendered when nothing (still valid) is selected
pub const NO_SELECTION: &str = "No options selected.";

/// One segment line in the summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySegment {
    pub airline_code: String,
    pub airline_name: String,
    pub flight_number: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub duration: String,
}

impl SummarySegment {
    /// `TP TAP Air Portugal 88: GRU → LIS (9h 45m)`
    pub fn line(&self) -> String {
        format!(
            "{} {} {}: {} → {} ({})",
            self.airline_code,
            self.airline_name,
            self.flight_number,
            self.departure_airport,
            self.arrival_airport,
            self.duration
        )
    }
}

/// One selected offer in the summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOffer {
    /// 1-based position within the selection
    pub option_number: usize,
    /// Index of the offer in the results list
    pub offer_index: usize,
    pub price: String,
    pub currency: String,
    pub duration: String,
    pub stops: usize,
    pub segments: Vec<SummarySegment>,
}

impl SummaryOffer {
    fn build(option_number: usize, offer_index: usize, offer: &Offer, airlines: &AirlineDirectory) -> Self {
        Self {
            option_number,
            offer_index,
            price: offer.price.clone(),
            currency: offer.currency.clone(),
            duration: format_iso_duration(&offer.duration),
            stops: offer.stops,
            segments: offer
                .flights
                .iter()
                .map(|s| SummarySegment {
                    airline_code: s.airline.clone(),
                    airline_name: airlines.name_for(&s.airline).to_string(),
                    flight_number: s.flight_number.clone(),
                    departure_airport: s.departure_airport.clone(),
                    arrival_airport: s.arrival_airport.clone(),
                    duration: format_iso_duration(&s.duration),
                })
                .collect(),
        }
    }
}

/// Quote summary for the dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSummary {
    pub offers: Vec<SummaryOffer>,
    pub letterhead: Option<CompanyProfile>,
}

impl SelectionSummary {
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();

        for offer in &self.offers {
            html.push_str(&format!(
                "<div class=\"summary-offer\">\n  <strong>Option {}</strong><br>\n  Price: {} {}<br>\n  Duration: {}<br>\n  Stops: {}<br>\n",
                offer.option_number,
                escape_html(&offer.currency),
                escape_html(&offer.price),
                escape_html(&offer.duration),
                offer.stops
            ));
            for segment in &offer.segments {
                html.push_str(&format!("  <div>{}</div>\n", escape_html(&segment.line())));
            }
            html.push_str("</div>\n");
        }

        if self.offers.is_empty() {
            html.push_str(&format!("<em>{}</em>\n", NO_SELECTION));
        }

        if let Some(profile) = &self.letterhead {
            let logo = profile
                .logo
                .as_ref()
                .map(|src| format!(r#"<img src="{}" alt="Company logo">"#, escape_html(src)))
                .unwrap_or_default();
            html.push_str(&format!(
                "<div class=\"letterhead\">{}<strong>{}</strong><span>{}</span></div>\n",
                logo,
                escape_html(&profile.name),
                escape_html(&profile.phone)
            ));
        }

        html
    }

    /// Visible text of the rendered summary, as copied to the clipboard
    pub fn to_text(&self) -> String {
        let mut blocks: Vec<String> = self
            .offers
            .iter()
            .map(|offer| {
                let mut lines = vec![
                    format!("Option {}", offer.option_number),
                    format!("Price: {} {}", offer.currency, offer.price),
                    format!("Duration: {}", offer.duration),
                    format!("Stops: {}", offer.stops),
                ];
                lines.extend(offer.segments.iter().map(SummarySegment::line));
                lines.join("\n")
            })
            .collect();

        if blocks.is_empty() {
            blocks.push(NO_SELECTION.to_string());
        }

        if let Some(profile) = &self.letterhead {
            blocks.push(format!("{}\n{}", profile.name, profile.phone));
        }

        blocks.join("\n\n")
    }
}

/// Where a click inside the open dialog landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogClick {
    /// The dimmed area around the content
    Backdrop,
    Content,
}

/// Modal holding the current summary
#[derive(Debug, Clone, Default)]
pub struct SelectionDialog {
    open: bool,
    summary: SelectionSummary,
}

impl SelectionDialog {
    pub fn open(&mut self, summary: SelectionSummary) {
        self.summary = summary;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Backdrop clicks close the dialog; clicks inside the content do not
    pub fn click(&mut self, target: DialogClick) {
        if target == DialogClick::Backdrop {
            self.close();
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn summary(&self) -> &SelectionSummary {
        &self.summary
    }

    pub fn html(&self) -> String {
        self.summary.to_html()
    }
}

/// Text sink for copied quotes
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// In-memory clipboard
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Clipboard that writes the copied text to a file
#[derive(Debug, Clone)]
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Clipboard for FileClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        std::fs::write(&self.path, text)?;
        log::info!("Wrote quote to {}", self.path.display());
        Ok(())
    }
}

/// Selection dialog controller
pub struct SelectionController<S> {
    airlines: Arc<AirlineDirectory>,
    store: S,
    dialog: SelectionDialog,
}

impl<S: LocalStore> SelectionController<S> {
    pub fn new(airlines: Arc<AirlineDirectory>, store: S) -> Self {
        Self {
            airlines,
            store,
            dialog: SelectionDialog::default(),
        }
    }

    /// Build the summary for a selection.
    ///
    /// Stale selections and out-of-range indices contribute nothing. A
    /// stored profile that cannot be read is skipped.
    pub fn summarize(&self, last: &LastOffers, selection: &Selection) -> SelectionSummary {
        let offers = last
            .resolve(selection)
            .into_iter()
            .enumerate()
            .map(|(position, (index, offer))| {
                SummaryOffer::build(position + 1, index, offer, &self.airlines)
            })
            .collect();

        let letterhead = match CompanyProfile::load(&self.store) {
            Ok(profile) => profile,
            Err(e) => {
                log::warn!("Ignoring unreadable company profile: {}", e);
                None
            }
        };

        SelectionSummary { offers, letterhead }
    }

    /// Summarize and open the dialog
    pub fn show(&mut self, last: &LastOffers, selection: &Selection) -> &SelectionDialog {
        let summary = self.summarize(last, selection);
        self.dialog.open(summary);
        &self.dialog
    }

    /// Copy the visible summary text
    pub fn copy(&self, clipboard: &mut impl Clipboard) -> Result<()> {
        clipboard.write_text(&self.dialog.summary().to_text())
    }

    pub fn dialog(&self) -> &SelectionDialog {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut SelectionDialog {
        &mut self.dialog
    }
}
