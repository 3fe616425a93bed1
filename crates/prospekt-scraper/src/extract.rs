//! Brochure tile extraction from the listing page markup.

use std::sync::LazyLock;

use prospekt_core::{capture_timestamp, BrochureRecord, UNKNOWN};
use scraper::{ElementRef, Html, Selector};

use crate::dates::parse_date_range;

/// One listing tile.
const ENTRY_SELECTOR: &str = ".letak-description";
const TITLE_SELECTOR: &str = ".grid-item-content strong";
const LOGO_SELECTOR: &str = ".grid-logo picture img";
const VALIDITY_SELECTOR: &str = ".grid-item-content small.hidden-sm";

const LAZY_SRC_ATTR: &str = "data-src";
const SRC_ATTR: &str = "src";
const ALT_ATTR: &str = "alt";
const SHOP_NAME_NOISE: &str = "Logo";

static ENTRY: LazyLock<Selector> = LazyLock::new(|| compile(ENTRY_SELECTOR));
static TITLE: LazyLock<Selector> = LazyLock::new(|| compile(TITLE_SELECTOR));
static LOGO: LazyLock<Selector> = LazyLock::new(|| compile(LOGO_SELECTOR));
static VALIDITY: LazyLock<Selector> = LazyLock::new(|| compile(VALIDITY_SELECTOR));

fn compile(selector: &str) -> Selector {
    Selector::parse(selector).expect("valid CSS selector")
}

/// Extracts one [`BrochureRecord`] per listing tile, in document order.
///
/// Tiles are never skipped: a missing sub-node yields the field's sentinel
/// so the completeness check can report it.
#[must_use]
pub fn extract_brochures(html: &str) -> Vec<BrochureRecord> {
    let document = Html::parse_document(html);
    let records: Vec<BrochureRecord> = document.select(&ENTRY).map(extract_entry).collect();
    tracing::info!(count = records.len(), "extracted brochure entries");
    records
}

fn extract_entry(entry: ElementRef<'_>) -> BrochureRecord {
    let title = entry
        .select(&TITLE)
        .next()
        .map_or_else(|| UNKNOWN.to_string(), stripped_text);

    let logo = entry.select(&LOGO).next();
    let thumbnail = logo.map_or_else(String::new, |img| {
        let attrs = img.value();
        attrs
            .attr(LAZY_SRC_ATTR)
            .or_else(|| attrs.attr(SRC_ATTR))
            .unwrap_or_default()
            .trim()
            .to_string()
    });
    let shop_name = logo.map_or_else(
        || UNKNOWN.to_string(),
        |img| {
            img.value()
                .attr(ALT_ATTR)
                .unwrap_or_default()
                .replace(SHOP_NAME_NOISE, "")
                .trim()
                .to_string()
        },
    );

    let validity_text = entry
        .select(&VALIDITY)
        .next()
        .map(stripped_text)
        .unwrap_or_default();
    let (valid_from, valid_to) = parse_date_range(&validity_text);

    let record = BrochureRecord {
        title,
        thumbnail,
        shop_name,
        valid_from,
        valid_to,
        parsed_time: capture_timestamp(),
    };
    tracing::debug!(?record, "extracted brochure");
    record
}

/// Text content with every text node trimmed and blank nodes dropped.
fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
