// src/ods.rs
//! Spreadsheet export.
//!
//! Layout:
//! - one standings sheet per section, named after the section;
//! - one games sheet per configured team, named `Games <team>`.
//!
//! Every sheet starts with a header row; every data row has exactly the
//! header's width so a read-back yields the same grid.

use std::collections::HashSet;
use std::path::Path;

use spreadsheet_ods::{Sheet, Value, WorkBook};

use crate::{
    config::{consts::SHEET_NAME_MAX, options::ExportOptions},
    core::sanitize::sanitize_sheet_name,
    data::{Cell, GameRecord, SheetData, SpreadsheetDocument, TeamStandingRow},
    error::WriteError,
    file,
    scrape::Collected,
};

pub const STANDINGS_HEADERS: [&str; 11] = [
    "Rank", "Team", "League", "Played", "Won", "Drawn", "Lost",
    "Goals", "Goals Against", "Goal Difference", "Points",
];

pub const GAMES_HEADERS: [&str; 11] = [
    "Weekend", "Day", "Date", "Time", "Sports Hall", "Sports Hall URL",
    "Nr", "Home Team", "Guest Team", "Result", "League",
];

pub fn build_document(collected: &Collected, export: &ExportOptions) -> SpreadsheetDocument {
    let mut names = SheetNames::default();
    let mut doc = SpreadsheetDocument::default();

    for section in &collected.sections {
        let mut sheet = SheetData::new(names.unique(&section.name));
        sheet.push_row(header_row(&STANDINGS_HEADERS));
        for row in collected.standings.iter().filter(|r| r.section == section.name) {
            sheet.push_row(standings_row(row));
        }
        doc.sheets.push(sheet);
    }

    if doc.sheets.is_empty() {
        let mut sheet = SheetData::new(names.unique("Standings"));
        sheet.push_row(header_row(&STANDINGS_HEADERS));
        doc.sheets.push(sheet);
    }

    for schedule in &collected.games {
        let team = &schedule.team;
        let mut sheet = SheetData::new(names.unique(&format!("Games {team}")));
        sheet.push_row(header_row(&GAMES_HEADERS));
        for game in &schedule.games {
            if export.home_only && !game.is_home_game_of(team) {
                continue;
            }
            sheet.push_row(game_row(game));
        }
        doc.sheets.push(sheet);
    }

    doc
}

fn header_row(headers: &[&str]) -> Vec<Cell> {
    headers.iter().map(|h| Cell::from(*h)).collect()
}

pub fn standings_row(row: &TeamStandingRow) -> Vec<Cell> {
    vec![
        row.rank.into(),
        row.team.as_str().into(),
        row.league.as_str().into(),
        row.played.into(),
        row.won.into(),
        row.drawn.into(),
        row.lost.into(),
        row.goals_scored.into(),
        row.goals_received.into(),
        row.goal_difference.into(),
        row.points.as_str().into(),
    ]
}

pub fn game_row(game: &GameRecord) -> Vec<Cell> {
    let weekend = game
        .weekend()
        .map(|d| d.format("%d-%m-%Y").to_string())
        .unwrap_or_default();
    vec![
        weekend.into(),
        game.day.as_str().into(),
        game.date.as_str().into(),
        game.time.as_str().into(),
        game.sports_hall.as_str().into(),
        game.sports_hall_url.as_str().into(),
        game.nr.as_str().into(),
        game.home_team.as_str().into(),
        game.guest_team.as_str().into(),
        game.result.to_string().into(),
        game.league.as_str().into(),
    ]
}

/// Sanitized, unique sheet names: `Männer`, `Männer (2)`, …
///
/// Names are compared case-insensitively (spreadsheet apps do) and a suffixed
/// name still fits in `SHEET_NAME_MAX` chars.
#[derive(Default)]
struct SheetNames {
    taken: HashSet<String>,
}

impl SheetNames {
    fn unique(&mut self, raw: &str) -> String {
        let stem = sanitize_sheet_name(raw);
        let mut name = stem.clone();
        let mut n = 1;
        while self.taken.contains(&name.to_lowercase()) {
            n += 1;
            let suffix = format!(" ({n})");
            let keep = SHEET_NAME_MAX.saturating_sub(suffix.chars().count());
            let cut: String = stem.chars().take(keep).collect();
            name = format!("{}{suffix}", cut.trim_end());
        }
        self.taken.insert(name.to_lowercase());
        name
    }
}

/* ---------------- I/O ---------------- */

/// Write `doc` to `path` as ODS. The file appears only once fully written.
pub fn write(doc: &SpreadsheetDocument, path: &Path) -> Result<(), WriteError> {
    let mut book = to_workbook(doc);
    file::write_atomic(path, |tmp| {
        spreadsheet_ods::write_ods(&mut book, tmp).map_err(|source| WriteError::Ods {
            path: tmp.to_path_buf(),
            source,
        })
    })?;
    log::info!("Wrote {} ({} sheets, {} rows)", path.display(), doc.sheets.len(), doc.total_rows());
    Ok(())
}

/// Read an ODS file back into the in-memory shape. Rows are padded to the
/// sheet's used width.
pub fn read(path: &Path) -> Result<SpreadsheetDocument, WriteError> {
    let book = spreadsheet_ods::read_ods(path).map_err(|source| WriteError::Ods {
        path: path.to_path_buf(),
        source,
    })?;

    let mut doc = SpreadsheetDocument::default();
    for idx in 0..book.num_sheets() {
        let sheet = book.sheet(idx);
        let (rows, cols) = sheet.used_grid_size();
        let mut data = SheetData::new(sheet.name().to_string());
        for r in 0..rows {
            data.push_row((0..cols).map(|c| from_value(sheet.value(r, c))).collect());
        }
        doc.sheets.push(data);
    }
    Ok(doc)
}

fn to_workbook(doc: &SpreadsheetDocument) -> WorkBook {
    let mut book = WorkBook::new_empty();
    for data in &doc.sheets {
        let mut sheet = Sheet::new(data.name.as_str());
        for (r, row) in data.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = (r as u32, c as u32);
                match cell {
                    Cell::Text(s) => sheet.set_value(r, c, s.as_str()),
                    Cell::Int(n) => sheet.set_value(r, c, *n as f64),
                    Cell::Empty => {}
                }
            }
        }
        book.push_sheet(sheet);
    }
    book
}

fn from_value(value: &Value) -> Cell {
    match value {
        Value::Text(s) => Cell::text(s.clone()),
        Value::Number(n) if n.fract() == 0.0 => Cell::Int(*n as i64),
        Value::Number(n) => Cell::Text(n.to_string()),
        Value::Empty => Cell::Empty,
        other => {
            log::warn!("ODS: unexpected cell value {other:?}");
            Cell::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{GameResult, LeagueSection};
    use crate::scrape::TeamSchedule;

    fn standing(section: &str, team: &str) -> TeamStandingRow {
        TeamStandingRow {
            section: section.into(),
            league: "Verbandsliga".into(),
            rank: 1,
            team: team.into(),
            url: "/team".into(),
            played: 2,
            won: 1,
            drawn: 0,
            lost: 1,
            goals_scored: 50,
            goals_received: 49,
            goal_difference: 1,
            points: "2:2".into(),
        }
    }

    fn game(home: &str, guest: &str, date: &str) -> GameRecord {
        GameRecord {
            day: "Sa.".into(),
            date: date.into(),
            time: "17:00".into(),
            sports_hall: "Halle".into(),
            sports_hall_url: String::new(),
            nr: "1".into(),
            home_team: home.into(),
            guest_team: guest.into(),
            result: GameResult::NoResult,
            section: "Männer".into(),
            league: "Verbandsliga".into(),
        }
    }

    fn collected() -> Collected {
        Collected {
            sections: vec![
                LeagueSection { name: "Männer".into(), leagues: vec![] },
                LeagueSection { name: "Frauen".into(), leagues: vec![] },
            ],
            standings: vec![standing("Männer", "A"), standing("Frauen", "F"), standing("Männer", "B")],
            games: vec![TeamSchedule {
                team: "A".into(),
                games: vec![game("A", "B", "14.09.2024"), game("B", "A", "18.09.2024")],
                ical_href: None,
            }],
        }
    }

    #[test]
    fn one_sheet_per_section_plus_games() {
        let doc = build_document(&collected(), &ExportOptions::default());
        let names: Vec<_> = doc.sheets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Männer", "Frauen", "Games A"]);

        let men = doc.sheet("Männer").unwrap();
        assert_eq!(men.rows.len(), 3);
        assert_eq!(men.rows[1][1], Cell::Text("A".into()));
        assert_eq!(men.rows[2][1], Cell::Text("B".into()));
        assert!(doc.sheets.iter().all(|s| s.rows.iter().all(|r| r.len() == s.rows[0].len())));
    }

    #[test]
    fn games_sheet_has_weekend_and_no_result_marker() {
        let doc = build_document(&collected(), &ExportOptions::default());
        let games = doc.sheet("Games A").unwrap();
        assert_eq!(games.rows.len(), 3);
        assert_eq!(games.rows[1][0], Cell::Text("14-09-2024".into()));
        assert_eq!(games.rows[2][0], Cell::Empty);
        assert_eq!(games.rows[1][9], Cell::Text("-:-".into()));
    }

    #[test]
    fn home_only_drops_away_games() {
        let mut export = ExportOptions::default();
        export.home_only = true;
        let doc = build_document(&collected(), &export);
        let games = doc.sheet("Games A").unwrap();
        assert_eq!(games.rows.len(), 2);
        assert_eq!(games.rows[1][7], Cell::Text("A".into()));
    }

    #[test]
    fn duplicate_sheet_names_get_suffix() {
        let mut names = SheetNames::default();
        assert_eq!(names.unique("Männer"), "Männer");
        assert_eq!(names.unique("Männer"), "Männer (2)");
        assert_eq!(names.unique("a/b"), "a_b");
    }

    #[test]
    fn suffixed_names_stay_within_limit() {
        let mut names = SheetNames::default();
        let long = "Bezirksliga Männer Staffel Nord-West";
        let first = names.unique(long);
        let second = names.unique(long);
        assert_eq!(first, "Bezirksliga Männer Staffel Nord");
        assert_eq!(second, "Bezirksliga Männer Staffel (2)");
        assert!(second.chars().count() <= SHEET_NAME_MAX);
    }

    #[test]
    fn generated_name_is_not_reused() {
        let mut names = SheetNames::default();
        let got: Vec<_> = ["X", "X", "X (2)", "x"].iter().map(|n| names.unique(n)).collect();
        assert_eq!(got, ["X", "X (2)", "X (2) (2)", "x (3)"]);
    }

    #[test]
    fn empty_collection_still_has_a_sheet() {
        let doc = build_document(&Collected::default(), &ExportOptions::default());
        assert_eq!(doc.sheets.len(), 1);
        assert_eq!(doc.sheets[0].rows.len(), 1);
    }
}
