//! Client-side offer state
//!
//! [`LastOffers`] holds the offers from the latest completed search. Every
//! completed search bumps its generation, and a [`Selection`] only resolves
//! against the generation it was taken from.

use crate::models::Offer;

/// Offers of the latest completed search, addressed by display position
#[derive(Debug, Clone, Default)]
pub struct LastOffers {
    generation: u64,
    offers: Vec<Offer>,
}

/// Checked option indices, stamped with the generation they refer to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    generation: u64,
    indices: Vec<usize>,
}

impl LastOffers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list after a successful search
    pub fn replace(&mut self, offers: Vec<Offer>) {
        self.generation += 1;
        self.offers = offers;
    }

    /// Drop the list after a failed or empty search
    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    pub fn get(&self, index: usize) -> Option<&Offer> {
        self.offers.get(index)
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    /// Stamp checked indices with the current generation
    pub fn select(&self, indices: impl IntoIterator<Item = usize>) -> Selection {
        Selection {
            generation: self.generation,
            indices: indices.into_iter().collect(),
        }
    }

    /// Resolve a selection to `(index, offer)` pairs.
    ///
    /// A selection from another generation resolves to nothing; indices past
    /// the end of the list are skipped.
    pub fn resolve<'a>(&'a self, selection: &Selection) -> Vec<(usize, &'a Offer)> {
        if selection.generation != self.generation {
            log::debug!(
                "Ignoring stale selection (generation {} != {})",
                selection.generation,
                self.generation
            );
            return Vec::new();
        }

        selection
            .indices
            .iter()
            .filter_map(|&i| self.offers.get(i).map(|offer| (i, offer)))
            .collect()
    }
}

impl Selection {
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
