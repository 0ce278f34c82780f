//! Extraction of counts and post summaries from result pages
//!
//! The remote search page is not an API; both extractors work on the raw
//! markup. The count comes from a localized header phrase, the post list
//! from repeated item blocks on the day page.

use scraper::{Html, Selector};

/// Header block that carries the localized "N 项" result phrase
const HEADER_SELECTOR: &str = "div.search-header-filter";

/// One result entry on the day page
const ITEM_SELECTOR: &str = "div.itemDiv";

/// Anchor inside an item carrying the post link and title
const ANCHOR_SELECTOR: &str = "a";

/// Description block inside an item; the spelling matches the site's markup
const DESCRIPTION_SELECTOR: &str = ".discription";

/// Character that ends the count-relevant prefix of the header text
/// (U+9879, "item/entry" in the site's locale)
const COUNT_STOP_MARKER: char = '项';

/// One post discovered on the day result page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSummary {
    /// Link target of the post's anchor, empty when absent
    pub url: String,

    /// Title attribute of the post's anchor, empty when absent
    pub title: String,

    /// Text of the description block, empty when absent
    pub description: String,
}

/// Extracts the result count from a result page
///
/// Scans the header text left to right, accumulating ASCII digits into a
/// running total (`sum = sum * 10 + digit`) until the stop marker ends the
/// scan. Characters other than digits are skipped. When several header
/// blocks match, the last one wins.
///
/// The scan is literal about the page's phrasing: if the stop marker never
/// appears, every digit in the header text is folded into the total, and an
/// absent header yields 0. Never errors.
pub fn extract_count(document: &Html) -> i64 {
    let mut header_text = String::new();
    if let Ok(selector) = Selector::parse(HEADER_SELECTOR) {
        for element in document.select(&selector) {
            header_text = element.text().collect();
        }
    }

    let mut sum: i64 = 0;
    for ch in header_text.chars() {
        if ch == COUNT_STOP_MARKER {
            break;
        }
        if let Some(digit) = ch.to_digit(10) {
            sum = sum * 10 + i64::from(digit);
        }
    }

    sum
}

/// Extracts post summaries from a result page, in document order
///
/// Each item block contributes one record: the first anchor's `href` and
/// `title` attributes and the first description block's text, each falling
/// back to an empty string when absent. Zero matching blocks yield an empty
/// vector, never an error.
pub fn extract_items(document: &Html) -> Vec<PostSummary> {
    let mut posts = Vec::new();

    if let (Ok(item_selector), Ok(anchor_selector), Ok(description_selector)) = (
        Selector::parse(ITEM_SELECTOR),
        Selector::parse(ANCHOR_SELECTOR),
        Selector::parse(DESCRIPTION_SELECTOR),
    ) {
        for item in document.select(&item_selector) {
            let anchor = item.select(&anchor_selector).next();

            let url = anchor
                .and_then(|a| a.value().attr("href"))
                .unwrap_or("")
                .to_string();
            let title = anchor
                .and_then(|a| a.value().attr("title"))
                .unwrap_or("")
                .to_string();
            let description = item
                .select(&description_selector)
                .next()
                .map(|element| element.text().collect::<String>())
                .unwrap_or_default();

            posts.push(PostSummary {
                url,
                title,
                description,
            });
        }
    }

    posts
}
