// src/specs/listing.rs
//! Scraping *spec* for category listing pages.
//!
//! Card shape (either layout):
//! ```html
//! <li class="product-item">
//!   <a href="/Some-Product-p-123.html" title="Product name"><img alt="Product name"></a>
//!   <span class="price">US$12.99</span>
//! </li>
//! ```
//! - name: link `title`, else image `alt`; cards without a name are dropped.
//! - price: stripped text of `.price` (or `.price-box`), `"N/A"` when absent.
//! - url: link `href`, made absolute against the site root; `"N/A"` without a link.
//!   A link with no `href` makes the card unusable and it is skipped.
//! - rating/reviews: not on the card; placeholders `"N/A"` / `"0"`.

use std::error::Error;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{
    BASE_URL, CARD_SELECTORS, NA, PRICE_SELECTORS, RATING_PLACEHOLDER, REVIEWS_PLACEHOLDER,
};
use crate::core::text::strip_join;
use crate::model::Listing;

/// Compiled selectors, built once per scrape run.
pub struct ListingSelectors {
    cards: Vec<Selector>,
    prices: Vec<Selector>,
    link: Selector,
    img: Selector,
}

fn parse_selector(s: &str) -> Result<Selector, Box<dyn Error>> {
    Selector::parse(s).map_err(|e| format!("Selector parse error '{s}': {e:?}").into())
}

impl ListingSelectors {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            cards: CARD_SELECTORS.iter().map(|s| parse_selector(s)).collect::<Result<_, _>>()?,
            prices: PRICE_SELECTORS.iter().map(|s| parse_selector(s)).collect::<Result<_, _>>()?,
            link: parse_selector("a")?,
            img: parse_selector("img")?,
        })
    }
}

/// Result of one page: the rows plus how many cards were seen.
pub struct ListingBundle {
    pub cards_found: usize,
    pub listings: Vec<Listing>,
}

pub fn extract(html_doc: &str, category: &str, sel: &ListingSelectors) -> ListingBundle {
    let doc = Html::parse_document(html_doc);

    // First selector that matches anything wins
    let mut cards: Vec<ElementRef> = Vec::new();
    for card_sel in &sel.cards {
        cards = doc.select(card_sel).collect();
        if !cards.is_empty() {
            break;
        }
        logd!("Listing: no cards for {:?}, trying fallback", card_sel);
    }

    let cards_found = cards.len();
    let listings = cards
        .into_iter()
        .filter_map(|card| extract_card(card, category, sel))
        .collect();

    ListingBundle { cards_found, listings }
}

fn extract_card(card: ElementRef, category: &str, sel: &ListingSelectors) -> Option<Listing> {
    let link = card.select(&sel.link).next();

    let name = link
        .and_then(|a| non_empty_attr(a, "title"))
        .or_else(|| card.select(&sel.img).next().and_then(|img| non_empty_attr(img, "alt")))?;

    let price = sel
        .prices
        .iter()
        .find_map(|ps| card.select(ps).next())
        .map(|p| strip_join(p.text()))
        .unwrap_or_else(|| s!(NA));

    let url = match link {
        Some(a) => absolute_url(a.value().attr("href")?),
        None => s!(NA),
    };

    Some(Listing {
        category: s!(category),
        name,
        price,
        rating: s!(RATING_PLACEHOLDER),
        reviews: s!(REVIEWS_PLACEHOLDER),
        url,
    })
}

fn non_empty_attr(el: ElementRef, attr: &str) -> Option<String> {
    el.value()
        .attr(attr)
        .map(|v| s!(v))
        .filter(|v| !v.is_empty())
}

/// Site-relative hrefs are joined onto the site root.
pub fn absolute_url(href: &str) -> String {
    if href.starts_with("http") {
        s!(href)
    } else {
        join!(BASE_URL, href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel() -> ListingSelectors {
        ListingSelectors::new().unwrap()
    }

    #[test]
    fn product_item_cards() {
        let doc = r#"
            <ul>
              <li class="product-item">
                <a href="/LED-Flashlight-p-1.html" title="LED Flashlight"><img alt="ignored"></a>
                <span class="price"><em>US$</em> 12.99</span>
              </li>
              <li class="product-item">
                <a href="https://www.banggood.com/Drill-p-2.html" title="Cordless Drill"></a>
              </li>
            </ul>
        "#;
        let b = extract(doc, "Tools", &sel());
        assert_eq!(b.cards_found, 2);
        assert_eq!(b.listings.len(), 2);

        let first = &b.listings[0];
        assert_eq!(first.category, "Tools");
        assert_eq!(first.name, "LED Flashlight");
        assert_eq!(first.price, "US$12.99");
        assert_eq!(first.url, "https://www.banggood.com/LED-Flashlight-p-1.html");
        assert_eq!(first.rating, "N/A");
        assert_eq!(first.reviews, "0");

        assert_eq!(b.listings[1].price, "N/A");
        assert_eq!(b.listings[1].url, "https://www.banggood.com/Drill-p-2.html");
    }

    #[test]
    fn p_wrap_fallback_and_img_alt_name() {
        let doc = r#"
            <div class="p-wrap">
              <a href="/Kite-p-9.html"><img alt="Rainbow Kite"></a>
              <div class="price-box">US$5.10</div>
            </div>
        "#;
        let b = extract(doc, "Toys", &sel());
        assert_eq!(b.cards_found, 1);
        assert_eq!(b.listings[0].name, "Rainbow Kite");
        assert_eq!(b.listings[0].price, "US$5.10");
    }

    #[test]
    fn nameless_and_hrefless_cards_are_dropped() {
        let doc = r#"
            <div class="product-item"><a href="/x.html"></a><span class="price">1</span></div>
            <div class="product-item"><a title="No href"></a></div>
            <div class="product-item"><img alt="No link at all"><span class="price">$3</span></div>
        "#;
        let b = extract(doc, "Sports", &sel());
        assert_eq!(b.cards_found, 3);
        assert_eq!(b.listings.len(), 1);
        assert_eq!(b.listings[0].name, "No link at all");
        assert_eq!(b.listings[0].url, "N/A");
    }

    #[test]
    fn attribute_text_is_kept_verbatim() {
        let doc = "<div class=\"product-item\"><a href=\"/a.html\" title=\"  LED   Flashlight\n Pro \"></a></div>\
                   <div class=\"product-item\"><a href=\"/b.html\" title=\" \"><img alt=\"Alt Name\"></a></div>";
        let b = extract(doc, "Tools", &sel());
        assert_eq!(b.listings.len(), 2);
        assert_eq!(b.listings[0].name, "  LED   Flashlight\n Pro ");
        assert_eq!(b.listings[0].name.chars().count(), 24);
        // whitespace is still a name; only an empty title falls back to alt
        assert_eq!(b.listings[1].name, " ");
    }

    #[test]
    fn page_without_cards_yields_nothing() {
        let b = extract("<html><body><p>Access denied</p></body></html>", "Toys", &sel());
        assert_eq!(b.cards_found, 0);
        assert!(b.listings.is_empty());
    }
}
