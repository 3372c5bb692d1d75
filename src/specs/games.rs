// src/specs/games.rs
//! Scraping *spec* for a team page: the game list and the iCal link.
//!
//! The team page carries two `table.result-set` tables; the first is the
//! league table, the **second** is the team's schedule:
//!
//! `Tag | Datum | Zeit | Halle (link) | Nr. | Heim | Gast | Tore | …`
//!
//! The site prints day and date once per match day, so blank cells inherit
//! the previous row's values. Games without a result are kept with
//! `GameResult::NoResult`.

use reqwest::Url;
use scraper::{ElementRef, Html};

use crate::core::html::{first_href, selector, text_of};
use crate::core::net;
use crate::data::{GameRecord, GameResult};
use crate::error::ParseError;

const GAME_TABLE: &str = "table.result-set";
pub const ICAL_LINK: &str = "a.picto-ical-add";
const MIN_CELLS: usize = 7;
const RESULT_COL: usize = 7;

pub fn parse_doc(html_doc: &str, base: &Url, section: &str, league: &str) -> Result<Vec<GameRecord>, ParseError> {
    let doc = Html::parse_document(html_doc);
    let table = doc
        .select(&selector(GAME_TABLE)?)
        .nth(1)
        .ok_or_else(|| ParseError::MissingElement { selector: format!("{GAME_TABLE} (2nd)") })?;
    let tr = selector("tr")?;
    let td = selector("td")?;
    let anchor = selector("a")?;

    let mut out = Vec::new();
    let mut last_day = String::new();
    let mut last_date = String::new();

    for tr_el in table.select(&tr) {
        let cells: Vec<ElementRef<'_>> = tr_el.select(&td).collect();
        if cells.is_empty() {
            continue; // header row
        }
        if cells.len() < MIN_CELLS {
            return Err(ParseError::MissingCell { row: out.len() + 1, column: cells.len() });
        }

        let day = inherit(text_of(cells[0]), &mut last_day);
        let date = inherit(text_of(cells[1]), &mut last_date);

        let sports_hall_url = match first_href(cells[3], &anchor) {
            Some(href) => match net::resolve(base, &href) {
                Ok(url) => url.to_string(),
                Err(_) => {
                    log::warn!("Games: unresolvable hall link `{href}`");
                    href
                }
            },
            None => String::new(),
        };

        let result = cells
            .get(RESULT_COL)
            .map(|c| GameResult::parse(&text_of(*c)))
            .unwrap_or(GameResult::NoResult);

        out.push(GameRecord {
            day,
            date,
            time: text_of(cells[2]),
            sports_hall: text_of(cells[3]),
            sports_hall_url,
            nr: text_of(cells[4]),
            home_team: text_of(cells[5]),
            guest_team: text_of(cells[6]),
            result,
            section: section.to_string(),
            league: league.to_string(),
        });
    }

    log::info!(
        "Games: {} games ({} without result)",
        out.len(),
        out.iter().filter(|g| !g.result.is_played()).count()
    );
    Ok(out)
}

/// href of the "add to calendar" link.
pub fn parse_ical_link(html_doc: &str) -> Result<String, ParseError> {
    let doc = Html::parse_document(html_doc);
    doc.select(&selector(ICAL_LINK)?)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(|h| h.trim().to_string())
        .ok_or_else(|| ParseError::MissingElement { selector: ICAL_LINK.to_string() })
}

fn inherit(value: String, last: &mut String) -> String {
    if value.is_empty() {
        last.clone()
    } else {
        *last = value.clone();
        value
    }
}
