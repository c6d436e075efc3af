// tests/common/mod.rs
#![allow(dead_code)]
use std::fs;
use std::path::Path;

use bg_scrape::config::options::{AppOptions, CategorySelector, SourceKind};

pub const TOOLS_PAGE: &str = r#"
<html><body><ul>
  <li class="product-item">
    <a href="/Cordless-Drill-p-1.html" title="Cordless Drill"><img alt="drill"></a>
    <span class="price">US$45.50</span>
  </li>
  <li class="product-item">
    <a href="/Hex-Key-Set-p-2.html" title="Hex Key Set"></a>
    <span class="price"><em>US$</em> 8.99</span>
  </li>
  <li class="product-item">
    <a href="/Bench-Grinder-p-3.html" title="Bench Grinder"></a>
  </li>
</ul></body></html>
"#;

pub const TOYS_PAGE: &str = r#"
<html><body>
  <div class="p-wrap">
    <a href="/Rainbow-Kite-p-9.html"><img alt="Rainbow Kite"></a>
    <div class="price-box">US$5.10</div>
  </div>
  <div class="p-wrap">
    <a href="https://www.banggood.com/RC-Car-p-10.html" title="RC Car"></a>
    <div class="price-box">US$1,299.00</div>
  </div>
</body></html>
"#;

/// Options rooted in `dir`, reading saved Tools/Toys pages, no pauses.
pub fn options_in(dir: &Path) -> AppOptions {
    let pages = dir.join("pages");
    fs::create_dir_all(&pages).unwrap();
    fs::write(pages.join("Tools.html"), TOOLS_PAGE).unwrap();
    fs::write(pages.join("Toys.html"), TOYS_PAGE).unwrap();

    let mut opts = AppOptions::default();
    opts.scrape.categories = CategorySelector::Names(vec!["Tools".into(), "Toys".into()]);
    opts.scrape.source = SourceKind::Snapshots(pages);
    opts.scrape.pause_ms = 0;
    opts.paths.raw = dir.join("data").join("raw.csv");
    opts.paths.transformed = dir.join("data").join("products.csv");
    opts.load.db_path = dir.join("data").join("products.db");
    opts
}
