// src/specs/standings.rs
//! Scraping *spec* for a league's standings page.
//!
//! Location: the first `table.result-set`. Header row uses `<th>`; each data
//! row has 10+ cells:
//!
//! | idx | content                         |
//! |-----|---------------------------------|
//! | 0   | trend icon (ignored)            |
//! | 1   | rank (blank on ties)            |
//! | 2   | team, `<a href>` to team page   |
//! | 3–6 | played, won, drawn, lost        |
//! | 7   | goals `scored:received`         |
//! | 8   | goal difference (`+12`, `-4`)   |
//! | 9   | points `plus:minus`             |

use scraper::{ElementRef, Html};

use crate::core::html::{first_href, require, selector, text_of};
use crate::core::sanitize::parse_int;
use crate::data::TeamStandingRow;
use crate::error::ParseError;

const MIN_CELLS: usize = 10;

pub fn parse_doc(html_doc: &str, section: &str, league: &str) -> Result<Vec<TeamStandingRow>, ParseError> {
    let doc = Html::parse_document(html_doc);
    let table = require(&doc, "table.result-set")?;
    let tr = selector("tr")?;
    let td = selector("td")?;
    let anchor = selector("a")?;

    let mut out = Vec::new();
    let mut last_rank = 0u32;

    for tr_el in table.select(&tr) {
        let cells: Vec<ElementRef<'_>> = tr_el.select(&td).collect();
        if cells.is_empty() {
            continue; // header row
        }
        let row = out.len() + 1;
        if cells.len() < MIN_CELLS {
            return Err(ParseError::MissingCell { row, column: cells.len() });
        }

        let rank_text = text_of(cells[1]);
        let rank = if rank_text.trim_end_matches('.').is_empty() {
            last_rank
        } else {
            number(row, 1, rank_text.trim_end_matches('.'))?
        };
        last_rank = rank;

        let (goals_scored, goals_received) = pair(row, 7, &text_of(cells[7]))?;

        out.push(TeamStandingRow {
            section: section.to_string(),
            league: league.to_string(),
            rank,
            team: text_of(cells[2]),
            url: first_href(cells[2], &anchor).unwrap_or_default(),
            played: number(row, 3, &text_of(cells[3]))?,
            won: number(row, 4, &text_of(cells[4]))?,
            drawn: number(row, 5, &text_of(cells[5]))?,
            lost: number(row, 6, &text_of(cells[6]))?,
            goals_scored,
            goals_received,
            goal_difference: number(row, 8, &text_of(cells[8]))?,
            points: text_of(cells[9]),
        });
    }

    log::info!("Standings: {league}: {} teams", out.len());
    Ok(out)
}

fn number<T: std::str::FromStr>(row: usize, column: usize, value: &str) -> Result<T, ParseError> {
    parse_int(value).ok_or_else(|| ParseError::InvalidNumber {
        row,
        column,
        value: value.to_string(),
    })
}

/// `250:231` → (250, 231)
fn pair(row: usize, column: usize, value: &str) -> Result<(u32, u32), ParseError> {
    let bad = || ParseError::InvalidNumber { row, column, value: value.to_string() };
    let (a, b) = value.split_once(':').ok_or_else(bad)?;
    match (parse_int(a), parse_int(b)) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(bad()),
    }
}
