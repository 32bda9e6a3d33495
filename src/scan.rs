// src/scan.rs
//
// Fetch → extract → cache, one source at a time. The scanner is the only piece
// with state (the cache); extractors are pure and the shell owns the results.

use std::time::{Duration, Instant};

use chrono::Local;

use crate::{
    cache::TtlCache,
    config::options::{ScanOptions, Source},
    core::net::{Fetch, HttpFetcher, RawPage},
    data::{DataSet, Outcome, ScanResult, Snapshot},
    error::ScanError,
    progress::Progress,
    specs::{oi_spurts, unusual_volume},
};

/// Run the extractor that belongs to `source` and normalize to a DataSet.
pub fn extract_table(source: Source, page: &RawPage) -> Result<DataSet, ScanError> {
    match source {
        Source::OiSpurts      => oi_spurts::extract(page).map(DataSet::from),
        Source::UnusualVolume => unusual_volume::extract(page).map(DataSet::from),
    }
}

pub struct Scanner<F: Fetch> {
    fetcher: F,
    cache: TtlCache<Source, Snapshot>,
}

impl Scanner<HttpFetcher> {
    /// Scanner over the real network.
    pub fn http(opts: &ScanOptions) -> Result<Self, ScanError> {
        Ok(Self::new(HttpFetcher::new(opts)?, opts))
    }
}

impl<F: Fetch> Scanner<F> {
    pub fn new(fetcher: F, opts: &ScanOptions) -> Self {
        Self { fetcher, cache: TtlCache::new(opts.cache_ttl) }
    }

    pub fn fetcher(&self) -> &F { &self.fetcher }

    pub fn cache_ttl(&self) -> Duration { self.cache.ttl() }

    /// Seconds until `source`'s cached table expires, if one is cached.
    pub fn cache_remaining(&self, source: Source) -> Option<Duration> {
        self.cache.remaining(&source, Instant::now())
    }

    pub fn scan(&mut self, source: Source) -> Outcome {
        self.scan_at(source, Instant::now())
    }

    /// Serve from cache when fresh at `now`, otherwise fetch and extract.
    /// Failures are returned, never cached. A fresh entry is stamped when its
    /// fetch completes (`now` plus the time spent fetching), not when it started.
    pub fn scan_at(&mut self, source: Source, now: Instant) -> Outcome {
        if let Some(snap) = self.cache.get(&source, now) {
            logd!("Scan: {} served from cache", source.slug());
            return Ok(Snapshot { from_cache: true, ..snap.clone() });
        }

        let started = Instant::now();
        let page = self.fetcher.fetch(source.url())?;
        let table = extract_table(source, &page)?;

        let snap = Snapshot { table, fetched_at: page.fetched_at, from_cache: false };
        self.cache.insert(source, snap.clone(), now + started.elapsed());
        Ok(snap)
    }

    /// Scan `sources` in order, reporting each one.
    pub fn scan_each(
        &mut self,
        sources: &[Source],
        now: Instant,
        mut progress: Option<&mut dyn Progress>,
    ) -> Vec<(Source, Outcome)> {
        self.cache.purge_expired(now);
        if let Some(p) = progress.as_deref_mut() { p.begin(sources.len()); }

        // Each source sees the clock as of its own turn, not of the whole batch.
        let started = Instant::now();
        let out = sources
            .iter()
            .map(|&source| (source, self.scan_reported(source, now + started.elapsed(), &mut progress)))
            .collect();

        if let Some(p) = progress.as_deref_mut() { p.finish(); }
        out
    }

    /// The refresh action: OI, then volume.
    pub fn refresh(&mut self, progress: Option<&mut dyn Progress>) -> ScanResult {
        self.refresh_at(Instant::now(), progress)
    }

    pub fn refresh_at(&mut self, now: Instant, mut progress: Option<&mut dyn Progress>) -> ScanResult {
        self.cache.purge_expired(now);
        if let Some(p) = progress.as_deref_mut() { p.begin(Source::ALL.len()); }

        let started = Instant::now();
        let oi = self.scan_reported(Source::OiSpurts, now, &mut progress);
        let volume = self.scan_reported(Source::UnusualVolume, now + started.elapsed(), &mut progress);

        if let Some(p) = progress.as_deref_mut() { p.finish(); }
        ScanResult { oi, volume, finished_at: Local::now() }
    }

    fn scan_reported(
        &mut self,
        source: Source,
        now: Instant,
        progress: &mut Option<&mut dyn Progress>,
    ) -> Outcome {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching {}…", source.title()));
        }

        let outcome = self.scan_at(source, now);
        match &outcome {
            Ok(snap) => {
                logf!(
                    "Scan: {} OK rows={} cached={}",
                    source.slug(), snap.table.row_count(), snap.from_cache
                );
                if let Some(p) = progress.as_deref_mut() { p.item_done(source, snap.table.row_count()); }
            }
            Err(e) => {
                loge!("Scan: {} failed: {e}", source.slug());
                if let Some(p) = progress.as_deref_mut() { p.item_failed(source, e); }
            }
        }
        outcome
    }
}
