//! Lookup metrics for observability.
//!
//! Counts text and word lookups, misses and default-language fallbacks.
//! A provider and all providers forked from it share one instance.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct LookupMetrics {
    /// Number of text lookups (formatted and escaped variants included)
    text_lookups: AtomicUsize,

    /// Number of word lookups
    word_lookups: AtomicUsize,

    /// Number of lookups that found nothing, even after fallback
    misses: AtomicUsize,

    /// Number of lookups answered by the default language
    fallbacks: AtomicUsize,
}

impl LookupMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_text_lookup(&self) {
        self.text_lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_word_lookup(&self) {
        self.word_lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn text_lookups(&self) -> usize {
        self.text_lookups.load(Ordering::Relaxed)
    }

    pub fn word_lookups(&self) -> usize {
        self.word_lookups.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let text_lookups = self.text_lookups();
        let word_lookups = self.word_lookups();
        let misses = self.misses();
        let total = text_lookups + word_lookups;
        let hit_rate = if total > 0 {
            (total.saturating_sub(misses) as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            text_lookups,
            word_lookups,
            misses,
            fallbacks: self.fallbacks(),
            hit_rate,
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.text_lookups.store(0, Ordering::Relaxed);
        self.word_lookups.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.fallbacks.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of the lookup counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub text_lookups: usize,
    pub word_lookups: usize,
    pub misses: usize,
    pub fallbacks: usize,

    /// Share of lookups that found an entry, as a percentage (0-100)
    pub hit_rate: f64,
}
