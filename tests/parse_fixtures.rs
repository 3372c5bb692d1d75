// tests/parse_fixtures.rs
//
// Page specs against captured fixtures.
//
mod common;

use common::fixture;
use hvsa_scrape::data::GameResult;
use hvsa_scrape::error::ParseError;
use hvsa_scrape::specs::{games, sections, standings};
use reqwest::Url;

fn base() -> Url {
    Url::parse("https://hvsa-handball.liga.nu").unwrap()
}

#[test]
fn league_page_sections_and_links() {
    let secs = sections::parse_doc(&fixture("league_page.html")).unwrap();
    let names: Vec<_> = secs.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Männer", "Frauen"]);
    assert_eq!(secs[0].leagues.len(), 1);
    assert_eq!(secs[0].leagues[0].name, "Bezirksliga Männer");
    // entities decoded
    assert!(secs[0].leagues[0].url.ends_with("&group=101"));
}

#[test]
fn standings_rows_match_fixture_in_document_order() {
    let rows = standings::parse_doc(&fixture("standings_men.html"), "Männer", "Bezirksliga Männer").unwrap();
    let teams: Vec<_> = rows.iter().map(|r| r.team.as_str()).collect();
    assert_eq!(teams, ["HSV Haldensleben", "TSV Wefensleben", "SV Irxleben"]);

    let tsv = &rows[1];
    assert_eq!(tsv.rank, 2);
    assert_eq!((tsv.played, tsv.won, tsv.drawn, tsv.lost), (6, 4, 1, 1));
    assert_eq!((tsv.goals_scored, tsv.goals_received), (170, 160));
    assert_eq!(tsv.goal_difference, 10);
    assert_eq!(tsv.points, "9:3");
    assert!(tsv.url.contains("teamPortrait?teamtable=12"));
    assert_eq!(rows[2].goal_difference, -20);
}

#[test]
fn games_without_score_are_marked_not_omitted() {
    let games = games::parse_doc(&fixture("team_page.html"), &base(), "Männer", "Bezirksliga Männer").unwrap();
    assert_eq!(games.len(), 4);
    assert_eq!(games[0].result, GameResult::Played { home: 27, guest: 29 });
    assert_eq!(games[1].result, GameResult::Played { home: 24, guest: 30 });
    assert_eq!(games[2].result, GameResult::NoResult);
    assert_eq!(games[3].result, GameResult::NoResult);
    assert_eq!(games[3].result.to_string(), "-:-");

    assert_eq!(games[0].nr, "1001");
    assert_eq!(games[0].home_team, "TSV Wefensleben");
    assert!(games[0].sports_hall_url.starts_with("https://hvsa-handball.liga.nu/cgi-bin/"));
    assert_eq!(games[2].day, "Mi.");
    assert!(games[2].weekend().is_none());
}

#[test]
fn ical_link_on_team_page() {
    let href = games::parse_ical_link(&fixture("team_page.html")).unwrap();
    assert!(href.ends_with("/ical?teamtable=12"));
}

#[test]
fn malformed_pages_are_parse_errors() {
    let doc = fixture("malformed.html");
    assert!(matches!(sections::parse_doc(&doc), Err(ParseError::MissingElement { .. })));
    assert!(matches!(standings::parse_doc(&doc, "", ""), Err(ParseError::MissingElement { .. })));
    assert!(matches!(games::parse_doc(&doc, &base(), "", ""), Err(ParseError::MissingElement { .. })));
}
