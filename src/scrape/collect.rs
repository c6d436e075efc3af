// src/scrape/collect.rs
use std::{
    error::Error, thread, time::Duration,
    sync::{ mpsc, Arc, atomic::{ AtomicUsize, Ordering }}
};

use crate::{
    config::{consts::STAGGER_MS, options::ScrapeOptions},
    model::{Category, Listing},
    progress::Progress,
    specs::listing::{self, ListingSelectors},
    store::DataSet,
};

use super::PageSource;

/// What one scrape run produced.
pub struct ScrapeSummary {
    pub dataset: DataSet,
    /// (category, rows) in category order
    pub per_category: Vec<(String, usize)>,
    /// (category, reason) for every category that contributed nothing
    pub skipped: Vec<(String, String)>,
}

impl ScrapeSummary {
    pub fn total(&self) -> usize {
        self.dataset.row_count()
    }
}

/// Row counts per category, largest first (ties keep category order).
pub fn value_counts(per_category: &[(String, usize)]) -> Vec<(String, usize)> {
    let mut v: Vec<(String, usize)> = per_category.iter().filter(|(_, n)| *n > 0).cloned().collect();
    v.sort_by(|a, b| b.1.cmp(&a.1));
    v
}

/// Scrape every selected category into one raw listings table.
/// A failing or empty category is skipped; all of them empty is an error.
pub fn collect(
    options: &ScrapeOptions,
    source: Arc<dyn PageSource>,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ScrapeSummary, Box<dyn Error>> {
    let categories = options.categories.resolve()?;
    if categories.is_empty() {
        return Err("No categories selected".into());
    }

    let selectors = Arc::new(ListingSelectors::new()?);

    if let Some(p) = progress.as_deref_mut() {
        p.log("--- BATCH EXTRACTION STARTED ---");
        p.begin(categories.len());
    }
    logf!("Scrape: begin categories={} workers={}", categories.len(), options.workers);

    // Concurrency
    type FetchOk = (usize, Vec<Listing>);
    type FetchErr = (usize, String);

    let cats = Arc::new(categories);
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Result<FetchOk, FetchErr>>();

    let workers = options.workers.min(cats.len()).max(1);
    let pause_ms = options.pause_ms;

    for _ in 0..workers {
        let cats = Arc::clone(&cats);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();
        let source = Arc::clone(&source);
        let selectors = Arc::clone(&selectors);

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= cats.len() {
                    break;
                }
                let result = match extract_category(&cats[i], source.as_ref(), &selectors) {
                    Ok(rows) => Ok((i, rows)),
                    Err(e) => Err((i, e.to_string())),
                };
                let _ = tx.send(result);
                if pause_ms > 0 {
                    // Offset per category index so workers don't hit the site in lockstep
                    let stagger = stagger_ms(i);
                    thread::sleep(Duration::from_millis(pause_ms + stagger)); // be polite
                }
            }
        });
    }
    drop(res_tx); // main thread is sole receiver now

    // Aggregate results
    let mut per_idx: Vec<Option<Vec<Listing>>> = vec![None; cats.len()];
    let mut skipped: Vec<(usize, String)> = Vec::new();

    for _ in 0..cats.len() {
        match res_rx.recv() {
            Ok(Ok((i, rows))) if rows.is_empty() => {
                let name = &cats[i].name;
                logf!("Scrape: Skipping {name}, no rows extracted");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(name, "no rows extracted");
                }
                skipped.push((i, s!("no rows extracted")));
            }
            Ok(Ok((i, rows))) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&format!("{}: {} rows", cats[i].name, rows.len()));
                }
                per_idx[i] = Some(rows);
            }
            Ok(Err((i, msg))) => {
                let name = &cats[i].name;
                loge!("Scrape: Error in {name}: {msg}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(name, &msg);
                }
                skipped.push((i, msg));
            }
            Err(_) => break, // workers ended early; bail gracefully
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    // Category order, not arrival order
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut per_category = Vec::with_capacity(cats.len());
    for (i, cat) in cats.iter().enumerate() {
        let listings = per_idx[i].take().unwrap_or_default();
        per_category.push((cat.name.clone(), listings.len()));
        rows.extend(listings.iter().map(|l| l.to_row()));
    }
    skipped.sort_by_key(|(i, _)| *i);
    let skipped = skipped.into_iter().map(|(i, why)| (cats[i].name.clone(), why)).collect();

    if rows.is_empty() {
        loge!("Scrape: no data extracted from any category");
        return Err("No data extracted from any category.".into());
    }
    logf!("Scrape: done, {} rows", rows.len());

    Ok(ScrapeSummary {
        dataset: DataSet::new(Listing::headers(), rows),
        per_category,
        skipped,
    })
}

/// Extra pause for the worker that just fetched category `i`, below `STAGGER_MS`.
fn stagger_ms(i: usize) -> u64 {
    (i as u64 * 137) % STAGGER_MS.max(1)
}

fn extract_category(
    category: &Category,
    source: &dyn PageSource,
    selectors: &ListingSelectors,
) -> Result<Vec<Listing>, Box<dyn Error>> {
    logf!("Starting extraction for Category: {}", category.name);
    let html_doc = source.fetch(category)?;
    logf!("URL Opened: {}", source.locate(category));

    let bundle = listing::extract(&html_doc, &category.name, selectors);
    logf!("Found {} cards in {}.", bundle.cards_found, category.name);
    logf!("Finished {}. Extracted: {} rows", category.name, bundle.listings.len());
    Ok(bundle.listings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_differs_per_category_and_stays_bounded() {
        let offsets: Vec<u64> = (0..5).map(stagger_ms).collect();
        assert_eq!(offsets, vec![0, 137, 274, 411, 48]);
        assert!((0..100).all(|i| stagger_ms(i) < STAGGER_MS));
    }

    #[test]
    fn value_counts_sorted_desc_without_empties() {
        let per = vec![(s!("Sports"), 3), (s!("Tools"), 0), (s!("Toys"), 7), (s!("Cars"), 3)];
        let vc = value_counts(&per);
        assert_eq!(vc, vec![(s!("Toys"), 7), (s!("Sports"), 3), (s!("Cars"), 3)]);
    }
}
