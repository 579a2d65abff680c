//! Word-list load metrics.
//!
//! Counts how each `load` call was answered (cache or which tier) and how
//! many tier attempts failed. Owned by a single provider, not global.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::Tier;

#[derive(Debug, Default)]
pub struct LoadMetrics {
    /// Loads answered from the per-language cache
    cache_hits: AtomicUsize,

    /// Resolutions answered by the frequency-list tier
    frequency_loads: AtomicUsize,

    /// Resolutions answered by the general word-list tier
    wordlist_loads: AtomicUsize,

    /// Resolutions answered by the embedded vocabularies
    embedded_loads: AtomicUsize,

    /// Network tier attempts that produced nothing
    tier_failures: AtomicUsize,
}

impl LoadMetrics {
    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_resolution(&self, tier: Tier) {
        let counter = match tier {
            Tier::Frequency => &self.frequency_loads,
            Tier::Wordlist => &self.wordlist_loads,
            Tier::Embedded => &self.embedded_loads,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_tier_failure(&self) {
        self.tier_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn cache_hits(&self) -> usize {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn tier_failures(&self) -> usize {
        self.tier_failures.load(Ordering::Relaxed)
    }

    /// Number of resolutions (cache misses) answered by any tier.
    pub fn resolutions(&self) -> usize {
        self.frequency_loads.load(Ordering::Relaxed)
            + self.wordlist_loads.load(Ordering::Relaxed)
            + self.embedded_loads.load(Ordering::Relaxed)
    }

    pub fn report(&self) -> LoadReport {
        let hits = self.cache_hits();
        let resolutions = self.resolutions();
        let total = hits + resolutions;
        let cache_hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        LoadReport {
            cache_hits: hits,
            frequency_loads: self.frequency_loads.load(Ordering::Relaxed),
            wordlist_loads: self.wordlist_loads.load(Ordering::Relaxed),
            embedded_loads: self.embedded_loads.load(Ordering::Relaxed),
            tier_failures: self.tier_failures(),
            cache_hit_rate,
        }
    }
}

/// Snapshot of a provider's load metrics.
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub cache_hits: usize,
    pub frequency_loads: usize,
    pub wordlist_loads: usize,
    pub embedded_loads: usize,
    pub tier_failures: usize,

    /// Cache hit rate as a percentage (0-100)
    pub cache_hit_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_empty() {
        let report = LoadMetrics::default().report();

        assert_eq!(report.cache_hits, 0);
        assert_eq!(report.tier_failures, 0);
        assert_eq!(report.cache_hit_rate, 0.0);
    }

    #[test]
    fn test_resolutions_sum_all_tiers() {
        let metrics = LoadMetrics::default();
        metrics.record_resolution(Tier::Frequency);
        metrics.record_resolution(Tier::Wordlist);
        metrics.record_resolution(Tier::Embedded);
        metrics.record_resolution(Tier::Embedded);

        assert_eq!(metrics.resolutions(), 4);
        assert_eq!(metrics.report().embedded_loads, 2);
    }

    #[test]
    fn test_cache_hit_rate() {
        let metrics = LoadMetrics::default();
        metrics.record_resolution(Tier::Embedded);
        metrics.record_cache_hit();
        metrics.record_cache_hit();
        metrics.record_cache_hit();

        let report = metrics.report();
        assert!((report.cache_hit_rate - 75.0).abs() < 0.01);
    }

    #[test]
    fn test_report_serialization() {
        let metrics = LoadMetrics::default();
        metrics.record_tier_failure();

        let json = serde_json::to_string(&metrics.report()).expect("Should serialize");
        assert!(json.contains("\"tier_failures\":1"));
        assert!(json.contains("cache_hit_rate"));
    }
}
