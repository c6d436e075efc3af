// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications: *where the ground truth lives in the
//! HTML* and *how to pull it out*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of category listing pages, with fixed CSS selectors
//!   and their fallbacks (`.product-item` → `.p-wrap`, `.price` → `.price-box`).
//! - **Light shaping** of results into `model::Listing` rows.
//!
//! ## What does **not** live here
//! - **Fetching**: `scrape::PageSource` hands specs a finished document.
//! - **Persistence, cleaning, numbers**: raw strings go out exactly as found;
//!   `transform` decides what they mean.
//!
//! ## Typical call chain
//! ```text
//! CLI / GUI → runner::scrape → scrape::collect → PageSource::fetch
//!                                          ↘  specs::listing::extract
//!                      store::save (outside of specs)
//! ```
//!
//! ## Testing notes
//! Specs are tested **offline** against HTML fixtures.
pub mod listing;
