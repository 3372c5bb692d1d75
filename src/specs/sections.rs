// src/specs/sections.rs
//! Scraping *spec* for the league page (`leaguePage?championship=…`).
//!
//! The page holds one `table.matrix`. Inside it every `<h2>` names a section
//! and the `<li><a href=…>` entries after it (until the next `<h2>`) are the
//! leagues of that section.

use scraper::Html;

use crate::core::html::{require, selector, text_of};
use crate::data::{LeagueLink, LeagueSection};
use crate::error::ParseError;

pub fn parse_doc(html_doc: &str) -> Result<Vec<LeagueSection>, ParseError> {
    let doc = Html::parse_document(html_doc);
    let table = require(&doc, "table.matrix")?;
    let heads_and_items = selector("h2, li")?;
    let anchor = selector("a")?;

    let mut sections: Vec<LeagueSection> = Vec::new();
    let mut current: Option<usize> = None;

    for el in table.select(&heads_and_items) {
        if el.value().name() == "h2" {
            let name = text_of(el);
            // Repeated headings merge into the first one.
            let idx = match sections.iter().position(|s| s.name == name) {
                Some(i) => i,
                None => {
                    sections.push(LeagueSection { name, leagues: Vec::new() });
                    sections.len() - 1
                }
            };
            current = Some(idx);
            continue;
        }

        let Some(idx) = current else {
            continue; // list items before the first heading
        };
        let Some(a) = el.select(&anchor).next() else {
            continue;
        };
        let Some(href) = a.value().attr("href") else {
            continue;
        };
        sections[idx].leagues.push(LeagueLink {
            name: text_of(a),
            url: href.trim().to_string(),
        });
    }

    log::info!(
        "Sections: {} sections, {} leagues",
        sections.len(),
        sections.iter().map(|s| s.leagues.len()).sum::<usize>()
    );
    Ok(sections)
}
