// benches/transform.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use bg_scrape::{
    analysis,
    specs::listing::{self, ListingSelectors},
    store::DataSet,
    transform,
};

const CATEGORIES: [&str; 5] = ["Sports", "Electronics", "Tools", "Toys", "Automobiles"];

/// Synthetic raw table: a spread of prices, a few unreadable ones.
fn raw_table(n: usize) -> DataSet {
    let rows = (0..n)
        .map(|i| {
            let price = match i % 17 {
                0 => "N/A".to_string(),
                k => format!("US${},{:03}.{:02}", k / 8, (i * 37) % 1000, i % 100),
            };
            bg_scrape::row![
                CATEGORIES[i % CATEGORIES.len()],
                format!("Product number {i} with a longer descriptive name"),
                price,
                format!("{:.1}", (i % 50) as f64 / 10.0),
                i % 900,
                format!("https://www.banggood.com/p-{i}.html")
            ]
        })
        .collect();
    DataSet::new(bg_scrape::row!["Category", "Name", "Price", "Rating", "Reviews", "URL"], rows)
}

fn listing_page(cards: usize) -> String {
    let mut doc = String::from("<html><body><ul>");
    for i in 0..cards {
        doc.push_str(&format!(
            r#"<li class="product-item"><a href="/Item-p-{i}.html" title="Item {i}"><img alt="x"></a><span class="price"><em>US$</em> {i}.99</span></li>"#
        ));
    }
    doc.push_str("</ul></body></html>");
    doc
}

fn bench_pipeline(c: &mut Criterion) {
    let raw = raw_table(5_000);
    let (products, _) = transform::transform(&raw).expect("transform synthetic table");
    let page = listing_page(60);
    let sel = ListingSelectors::new().expect("selectors");

    c.bench_function("listing_extract_60", |b| {
        b.iter(|| {
            let bundle = listing::extract(black_box(&page), "Tools", &sel);
            black_box(bundle.listings.len())
        })
    });

    c.bench_function("transform_5k", |b| {
        b.iter(|| {
            let (ps, report) = transform::transform(black_box(&raw)).expect("transform");
            black_box((ps.len(), report.shape_out))
        })
    });

    c.bench_function("analysis_all_5k", |b| {
        b.iter(|| {
            let reports = analysis::run_all(black_box(&products), 5);
            black_box(reports.len())
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
