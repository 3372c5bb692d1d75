// src/core/html.rs
//! Small helpers over `scraper` shared by the page specs.

use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::normalize_ws;
use crate::error::ParseError;

pub fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|_| ParseError::InvalidSelector(css.to_string()))
}

/// First element matching `css`, or `MissingElement`.
pub fn require<'a>(doc: &'a Html, css: &str) -> Result<ElementRef<'a>, ParseError> {
    doc.select(&selector(css)?)
        .next()
        .ok_or_else(|| ParseError::MissingElement { selector: css.to_string() })
}

/// Visible text of an element, whitespace-normalized.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// `href` of the first `<a>` inside `el`.
pub fn first_href(el: ElementRef<'_>, anchor: &Selector) -> Option<String> {
    el.select(anchor)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(|h| h.trim().to_string())
}
