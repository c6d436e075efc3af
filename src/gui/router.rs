// src/gui/router.rs
use super::pages::{ self, Page };

pub static PAGES: &[&'static dyn Page] = &[
    &pages::table::RAW,
    &pages::table::PRODUCTS,
    &pages::analysis::PRICE_DISTRIBUTION,
    &pages::analysis::RATING_PRICE,
    &pages::analysis::TOP_REVIEWED,
    &pages::analysis::BEST_VALUE,
    &pages::analysis::NAME_LENGTH,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}
