// src/core/html.rs
//
// DOM access for the table extractor: parse markup, resolve the user's
// selector, walk header cells / rows / data cells inside one element.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};

// Compile-time constant selectors; parse failure here is a bug.
static TH: LazyLock<Selector> = LazyLock::new(|| Selector::parse("th").expect("`th` selector"));
static TR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("`tr` selector"));
static TD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").expect("`td` selector"));

pub fn parse_document(markup: &str) -> Html {
    Html::parse_document(markup)
}

pub fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::InvalidSelector {
        selector: s!(css),
        reason: e.to_string(),
    })
}

/// First element matching `css` in document order. Further matches are ignored.
pub fn locate<'a>(doc: &'a Html, css: &str) -> Result<ElementRef<'a>> {
    let selector = parse_selector(css)?;
    let mut matches = doc.select(&selector);
    let first = matches
        .next()
        .ok_or_else(|| ScrapeError::SelectorNotFound { selector: s!(css) })?;
    logd!(
        "Locate: `{css}` → <{}> ({} more match(es) ignored)",
        first.value().name(),
        matches.count()
    );
    Ok(first)
}

/// Descendants of `scope` matching `sel`, in document order. `scope` itself is excluded.
pub fn select_within<'a, 'b>(scope: ElementRef<'a>, sel: &'b Selector) -> impl Iterator<Item = ElementRef<'a>> {
    let own = scope.id();
    scope.select(sel).filter(move |el| el.id() != own)
}

/// Every `th` under `scope`, whichever row it sits in.
pub fn header_cells<'a>(scope: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    select_within(scope, &TH)
}

pub fn rows<'a>(scope: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    select_within(scope, &TR)
}

/// `td` cells of one row; `th` cells are not data.
pub fn data_cells<'a>(row: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    select_within(row, &TD)
}

/// All text under the element, surrounding whitespace trimmed.
pub fn cell_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
