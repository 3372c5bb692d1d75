// src/data.rs
//
// Canonical records scraped from the site, plus the in-memory spreadsheet
// shape the exporter writes.
//
// Records keep the site's text where the site is the ground truth (points,
// dates, times) and parse numbers where a spreadsheet should sum them.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::config::consts::NO_RESULT;

/// A league link listed under a section heading on the league page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeagueLink {
    pub name: String,
    pub url: String,
}

/// An `<h2>` grouping on the league page (e.g. "Männer", "Jugend").
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeagueSection {
    pub name: String,
    pub leagues: Vec<LeagueLink>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamStandingRow {
    pub section: String,
    pub league: String,
    pub rank: u32,
    pub team: String,
    /// Site-relative link to the team's page.
    pub url: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_scored: u32,
    pub goals_received: u32,
    pub goal_difference: i32,
    /// As printed, e.g. `14:2`.
    pub points: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Played { home: u32, guest: u32 },
    NoResult,
}

impl GameResult {
    /// `25:23` (optionally followed by a half-time score) → `Played`;
    /// blank, `-:-`, or anything else → `NoResult`.
    pub fn parse(text: &str) -> Self {
        let t = text.split_whitespace().next().unwrap_or("");
        let Some((h, g)) = t.split_once(':') else {
            return Self::NoResult;
        };
        match (h.trim().parse(), g.trim().parse()) {
            (Ok(home), Ok(guest)) => Self::Played { home, guest },
            _ => Self::NoResult,
        }
    }

    pub fn is_played(&self) -> bool {
        matches!(self, Self::Played { .. })
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Played { home, guest } => write!(f, "{home}:{guest}"),
            Self::NoResult => f.write_str(NO_RESULT),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub day: String,
    /// `dd.mm.yyyy` as printed.
    pub date: String,
    pub time: String,
    pub sports_hall: String,
    /// Absolute URL of the hall page (empty if the site had no link).
    pub sports_hall_url: String,
    pub nr: String,
    pub home_team: String,
    pub guest_team: String,
    pub result: GameResult,
    pub section: String,
    pub league: String,
}

impl GameRecord {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%d.%m.%Y").ok()
    }

    /// Saturday of the weekend this game falls on; `None` for weekday games.
    pub fn weekend(&self) -> Option<NaiveDate> {
        let date = self.parsed_date()?;
        match date.weekday() {
            Weekday::Sat => Some(date),
            Weekday::Sun => Some(date - Duration::days(1)),
            _ => None,
        }
    }

    pub fn is_home_game_of(&self, team: &str) -> bool {
        self.home_team == team
    }
}

/* ---------------- Spreadsheet shape ---------------- */

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
    Empty,
}

impl Cell {
    pub fn text<S: Into<String>>(s: S) -> Self {
        let s = s.into();
        if s.is_empty() { Cell::Empty } else { Cell::Text(s) }
    }
}

impl From<u32> for Cell {
    fn from(v: u32) -> Self { Cell::Int(v.into()) }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self { Cell::Int(v.into()) }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self { Cell::text(v) }
}

impl From<String> for Cell {
    fn from(v: String) -> Self { Cell::text(v) }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SheetData {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl SheetData {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), rows: Vec::new() }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }
}

/// Ordered sheets, each an ordered sequence of rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpreadsheetDocument {
    pub sheets: Vec<SheetData>,
}

impl SpreadsheetDocument {
    pub fn sheet(&self, name: &str) -> Option<&SheetData> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn total_rows(&self) -> usize {
        self.sheets.iter().map(|s| s.rows.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_on(date: &str) -> GameRecord {
        GameRecord {
            day: String::new(),
            date: date.into(),
            time: String::new(),
            sports_hall: String::new(),
            sports_hall_url: String::new(),
            nr: String::new(),
            home_team: "A".into(),
            guest_team: "B".into(),
            result: GameResult::NoResult,
            section: String::new(),
            league: String::new(),
        }
    }

    #[test]
    fn result_parsing() {
        assert_eq!(GameResult::parse(" 25:23 "), GameResult::Played { home: 25, guest: 23 });
        assert_eq!(GameResult::parse("30:28 (15:14)"), GameResult::Played { home: 30, guest: 28 });
        assert_eq!(GameResult::parse(""), GameResult::NoResult);
        assert_eq!(GameResult::parse("-:-"), GameResult::NoResult);
        assert_eq!(GameResult::parse("abgesagt"), GameResult::NoResult);
        assert_eq!(GameResult::NoResult.to_string(), NO_RESULT);
        assert_eq!(GameResult::Played { home: 1, guest: 0 }.to_string(), "1:0");
    }

    #[test]
    fn weekend_is_saturday_of_sat_or_sun() {
        // 14.09.2024 was a Saturday.
        let sat = NaiveDate::from_ymd_opt(2024, 9, 14).unwrap();
        assert_eq!(game_on("14.09.2024").weekend(), Some(sat));
        assert_eq!(game_on("15.09.2024").weekend(), Some(sat));
        assert_eq!(game_on("18.09.2024").weekend(), None);
        assert_eq!(game_on("").weekend(), None);
    }

    #[test]
    fn empty_text_is_empty_cell() {
        assert_eq!(Cell::from(""), Cell::Empty);
        assert_eq!(Cell::from("x"), Cell::Text("x".into()));
        assert_eq!(Cell::from(-3i32), Cell::Int(-3));
    }
}
