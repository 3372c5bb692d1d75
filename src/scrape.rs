// src/scrape.rs
//! Fetch + parse orchestration for one championship.
//!
//! `Hvsa` owns the fetcher and knows which page leads to which: league page →
//! league standings pages → team pages. All work is sequential, one request at
//! a time; the first failure aborts.

use crate::{
    config::options::{NetOptions, ScrapeOptions},
    core::net::Fetcher,
    data::{GameRecord, LeagueSection, TeamStandingRow},
    error::{Error, ParseError, Result},
    progress::Progress,
    specs,
};

/// Everything scraped in one run, in site order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Collected {
    pub sections: Vec<LeagueSection>,
    pub standings: Vec<TeamStandingRow>,
    /// In configured team order.
    pub games: Vec<TeamSchedule>,
}

/// One team's page, parsed once for both the games table and the iCal link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamSchedule {
    pub team: String,
    pub games: Vec<GameRecord>,
    pub ical_href: Option<String>,
}

impl Collected {
    pub fn find_team(&self, team: &str) -> Option<&TeamStandingRow> {
        self.standings.iter().find(|row| row.team == team)
    }

    pub fn schedule(&self, team: &str) -> Option<&TeamSchedule> {
        self.games.iter().find(|s| s.team == team)
    }

    pub fn game_rows(&self) -> usize {
        self.games.iter().map(|s| s.games.len()).sum()
    }
}

pub struct Hvsa {
    fetcher: Fetcher,
    league: String,
    year: String,
}

impl Hvsa {
    pub fn new(net: &NetOptions, scrape: &ScrapeOptions) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(net)?,
            league: scrape.league.clone(),
            year: scrape.year.clone(),
        })
    }

    pub fn league_sections(&self) -> Result<Vec<LeagueSection>> {
        let url = self.fetcher.league_page_url(&self.league, &self.year)?;
        log::info!("Fetching league page {} {}", self.league, self.year);
        let page = self.fetcher.get(&url)?;
        Ok(specs::sections::parse_doc(&page)?)
    }

    /// Standings of every league in `section`, concatenated in page order.
    pub fn section_standings(
        &self,
        section: &LeagueSection,
        progress: &mut dyn Progress,
    ) -> Result<Vec<TeamStandingRow>> {
        let mut rows = Vec::new();
        for league in &section.leagues {
            let url = self.fetcher.resolve(&league.url)?;
            let page = self.fetcher.get(&url)?;
            rows.extend(specs::standings::parse_doc(&page, &section.name, &league.name)?);
            progress.item_done(&league.name);
        }
        Ok(rows)
    }

    fn team_page(&self, row: &TeamStandingRow) -> Result<String> {
        if row.url.is_empty() {
            return Err(Error::NotFound { kind: "team page link for", name: row.team.clone() });
        }
        let url = self.fetcher.resolve(&row.url)?;
        Ok(self.fetcher.get(&url)?)
    }

    pub fn team_games(&self, row: &TeamStandingRow) -> Result<TeamSchedule> {
        log::info!("Fetching games of {}", row.team);
        let page = self.team_page(row)?;
        let games = specs::games::parse_doc(&page, self.fetcher.base(), &row.section, &row.league)?;
        let ical_href = specs::games::parse_ical_link(&page).ok();
        if ical_href.is_none() {
            log::debug!("No iCal link on the page of {}", row.team);
        }
        Ok(TeamSchedule { team: row.team.clone(), games, ical_href })
    }

    /// Raw iCal file of the team's schedule, from the link found by `team_games`.
    pub fn team_ical(&self, schedule: &TeamSchedule) -> Result<Vec<u8>> {
        let href = schedule.ical_href.as_deref().ok_or_else(|| ParseError::MissingElement {
            selector: specs::games::ICAL_LINK.to_string(),
        })?;
        let url = self.fetcher.resolve(href)?;
        Ok(self.fetcher.get_bytes(&url)?)
    }

    /// Run the whole scrape for `opts`. Nothing is written here.
    pub fn collect(&self, opts: &ScrapeOptions, progress: &mut dyn Progress) -> Result<Collected> {
        let sections: Vec<LeagueSection> = self
            .league_sections()?
            .into_iter()
            .filter(|s| opts.wants_section(&s.name))
            .collect();

        for wanted in &opts.sections {
            if !sections.iter().any(|s| s.name == wanted.trim()) {
                return Err(Error::NotFound { kind: "section", name: wanted.clone() });
            }
        }

        progress.begin(sections.iter().map(|s| s.leagues.len()).sum::<usize>() + opts.teams.len());

        let mut standings = Vec::new();
        for section in &sections {
            progress.log(&format!("Section {}", section.name));
            standings.extend(self.section_standings(section, progress)?);
        }

        let mut collected = Collected { sections, standings, games: Vec::new() };

        for team in &opts.teams {
            let team = team.trim();
            let row = collected
                .find_team(team)
                .ok_or_else(|| Error::NotFound { kind: "team", name: team.to_string() })?;
            let schedule = self.team_games(row)?;
            progress.item_done(team);
            collected.games.push(schedule);
        }

        progress.finish();
        Ok(collected)
    }
}
