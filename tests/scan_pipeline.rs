// tests/scan_pipeline.rs
//
// Fetch → extract → cache against canned pages. No network.
//
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::{Duration, Instant};

use spurt_scan::config::options::{ScanOptions, Source};
use spurt_scan::core::net::{Fetch, RawPage};
use spurt_scan::error::ScanError;
use spurt_scan::progress::{NullProgress, Progress};
use spurt_scan::scan::Scanner;

const OI_PAGE: &str = "<table>\
    <thead><tr><th>Symbol</th><th>LTP</th><th>% Chg</th><th>OI</th></tr></thead>\
    <tbody>\
      <tr><td>RELIANCE</td><td>2,950.10</td><td>1.25</td><td>1,23,400</td></tr>\
      <tr><td>TCS</td><td>3,901.00</td><td>-0.40</td><td>98,100</td></tr>\
    </tbody></table>";

const VOLUME_PAGE: &str = "<table><tbody class=\"tv-data-table__tbody\">\
    <tr><td>ADANIENT</td><td>3,120.5</td><td>+2.1%</td><td>x</td><td>y</td><td>4.52</td></tr>\
    </tbody></table>";

#[derive(Clone, Copy)]
enum Canned {
    Page(&'static str),
    Slow(&'static str, Duration),
    Timeout,
}

/// Serves fixed bodies per URL and counts requests.
struct CannedFetcher {
    pages: RefCell<HashMap<String, Canned>>,
    calls: Cell<usize>,
}

impl CannedFetcher {
    fn new(oi: Canned, volume: Canned) -> Self {
        let mut pages = HashMap::new();
        pages.insert(Source::OiSpurts.url().to_string(), oi);
        pages.insert(Source::UnusualVolume.url().to_string(), volume);
        Self { pages: RefCell::new(pages), calls: Cell::new(0) }
    }

    fn set(&self, source: Source, c: Canned) {
        self.pages.borrow_mut().insert(source.url().to_string(), c);
    }

    fn calls(&self) -> usize { self.calls.get() }
}

impl Fetch for CannedFetcher {
    fn fetch(&self, url: &str) -> Result<RawPage, ScanError> {
        self.calls.set(self.calls.get() + 1);
        match self.pages.borrow().get(url).copied() {
            Some(Canned::Page(body)) => Ok(RawPage::new(url, body)),
            Some(Canned::Slow(body, delay)) => {
                std::thread::sleep(delay);
                Ok(RawPage::new(url, body))
            }
            Some(Canned::Timeout) | None => Err(ScanError::NetworkTimeout {
                url: url.to_string(),
                timeout: Duration::from_secs(10),
            }),
        }
    }
}

fn scanner(oi: Canned, volume: Canned) -> Scanner<CannedFetcher> {
    Scanner::new(CannedFetcher::new(oi, volume), &ScanOptions::default())
}

#[test]
fn identical_pages_give_identical_tables() {
    let now = Instant::now();
    let mut a = scanner(Canned::Page(OI_PAGE), Canned::Page(VOLUME_PAGE));
    let mut b = scanner(Canned::Page(OI_PAGE), Canned::Page(VOLUME_PAGE));

    let ra = a.refresh_at(now, None);
    let rb = b.refresh_at(now, None);

    for src in Source::ALL {
        assert_eq!(ra.table(src), rb.table(src), "{src:?}");
        assert!(ra.table(src).is_some_and(|t| !t.is_empty()));
    }
}

#[test]
fn one_source_timing_out_leaves_the_other_intact() {
    let mut sc = scanner(Canned::Timeout, Canned::Page(VOLUME_PAGE));
    let res = sc.refresh_at(Instant::now(), Some(&mut NullProgress));

    assert!(res.table(Source::OiSpurts).is_none());
    assert!(matches!(res.error(Source::OiSpurts), Some(ScanError::NetworkTimeout { .. })));
    assert_eq!(res.table(Source::UnusualVolume).map(|t| t.row_count()), Some(1));

    let msgs = res.messages();
    assert_eq!(msgs.len(), 1);
    assert!(msgs[0].starts_with("Error fetching OI data:"), "{}", msgs[0]);
}

#[test]
fn second_scan_within_ttl_makes_no_fetch() {
    let t0 = Instant::now();
    let mut sc = scanner(Canned::Page(OI_PAGE), Canned::Page(VOLUME_PAGE));

    let first = sc.refresh_at(t0, None);
    assert_eq!(sc.fetcher().calls(), 2);
    assert!(!first.oi.as_ref().unwrap().from_cache);

    let second = sc.refresh_at(t0 + Duration::from_secs(599), None);
    assert_eq!(sc.fetcher().calls(), 2);
    assert!(second.oi.as_ref().unwrap().from_cache);
    assert_eq!(first.table(Source::OiSpurts), second.table(Source::OiSpurts));
}

#[test]
fn expired_entries_are_fetched_again() {
    let t0 = Instant::now();
    let mut sc = scanner(Canned::Page(OI_PAGE), Canned::Page(VOLUME_PAGE));

    sc.refresh_at(t0, None);
    let later = sc.refresh_at(t0 + Duration::from_secs(601), None);

    assert_eq!(sc.fetcher().calls(), 4);
    assert!(!later.volume.as_ref().unwrap().from_cache);
}

#[test]
fn cache_entries_are_stamped_after_their_fetch() {
    // OI takes 200ms; neither entry may be aged from before that fetch finished.
    let t0 = Instant::now();
    let mut sc = scanner(
        Canned::Slow(OI_PAGE, Duration::from_millis(200)),
        Canned::Page(VOLUME_PAGE),
    );

    sc.refresh_at(t0, None);
    let later = sc.refresh_at(t0 + Duration::from_millis(600_100), None);

    assert_eq!(sc.fetcher().calls(), 2);
    assert!(later.oi.as_ref().unwrap().from_cache);
    assert!(later.volume.as_ref().unwrap().from_cache);
}

#[test]
fn failures_are_not_cached() {
    let t0 = Instant::now();
    let mut sc = scanner(Canned::Timeout, Canned::Page(VOLUME_PAGE));

    assert!(sc.scan_at(Source::OiSpurts, t0).is_err());
    assert_eq!(sc.cache_remaining(Source::OiSpurts), None);

    sc.fetcher().set(Source::OiSpurts, Canned::Page(OI_PAGE));
    let retry = sc.scan_at(Source::OiSpurts, t0 + Duration::from_secs(1)).expect("retry reaches network");
    assert!(!retry.from_cache);
    assert_eq!(sc.fetcher().calls(), 2);
}

#[test]
fn extraction_failures_surface_per_source() {
    let mut sc = scanner(Canned::Page("<p>no tables</p>"), Canned::Page("<p>nothing</p>"));
    let res = sc.refresh_at(Instant::now(), None);

    assert!(matches!(res.error(Source::OiSpurts), Some(ScanError::NoTableFound { .. })));
    assert!(matches!(res.error(Source::UnusualVolume), Some(ScanError::SelectorMiss { .. })));
    assert_eq!(res.messages().len(), 2);
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<(Source, usize)>,
    failed: Vec<Source>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, source: Source, rows: usize) { self.done.push((source, rows)); }
    fn item_failed(&mut self, source: Source, _err: &ScanError) { self.failed.push(source); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn scan_each_reports_in_order() {
    let mut sc = scanner(Canned::Page(OI_PAGE), Canned::Timeout);
    let mut rec = Recorder::default();

    let out = sc.scan_each(&Source::ALL, Instant::now(), Some(&mut rec));

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].0, Source::OiSpurts);
    assert_eq!(rec.total, 2);
    assert_eq!(rec.done, vec![(Source::OiSpurts, 2)]);
    assert_eq!(rec.failed, vec![Source::UnusualVolume]);
    assert!(rec.finished);
}
