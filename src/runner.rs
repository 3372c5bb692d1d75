// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::AppOptions,
    data::LeagueSection,
    error::{Error, Result},
    file, ods,
    progress::Progress,
    scrape::Hvsa,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub standings_rows: usize,
    pub game_rows: usize,
}

/// fetch → parse → accumulate → export. Output is written only after every
/// page was fetched and parsed, so a failed fetch or parse leaves no file behind.
///
/// With `--ics` the calendar is written first and the workbook last: a run
/// that exits non-zero never leaves a workbook, though a calendar may remain
/// if the workbook write itself fails.
pub fn run(opts: &AppOptions, progress: &mut dyn Progress) -> Result<RunSummary> {
    opts.validate()?;
    let hvsa = Hvsa::new(&opts.net, &opts.scrape)?;

    let collected = match hvsa.collect(&opts.scrape, progress) {
        Ok(c) => c,
        Err(e) => {
            progress.finish();
            return Err(e);
        }
    };

    // Fetch the calendar before writing anything, so it can still abort cleanly.
    let ical = match (&opts.export.ics, opts.scrape.teams.first()) {
        (Some(path), Some(team)) => {
            let schedule = collected
                .schedule(team.trim())
                .ok_or_else(|| Error::NotFound { kind: "team", name: team.clone() })?;
            Some((path.clone(), hvsa.team_ical(schedule)?))
        }
        (Some(_), None) => {
            log::warn!("--ics given but no team configured; skipping calendar");
            None
        }
        _ => None,
    };

    let mut files_written = Vec::new();
    if let Some((path, bytes)) = ical {
        file::write_bytes(&path, &bytes)?;
        log::info!("Wrote {}", path.display());
        files_written.push(path);
    }

    let doc = ods::build_document(&collected, &opts.export);
    let out = opts.export.out_path();
    ods::write(&doc, &out)?;
    progress.log(&format!("Wrote {}", out.display()));
    files_written.insert(0, out);

    Ok(RunSummary {
        files_written,
        standings_rows: collected.standings.len(),
        game_rows: collected.game_rows(),
    })
}

/// Sections and their leagues, for `--list-sections`.
pub fn list_sections(opts: &AppOptions) -> Result<Vec<LeagueSection>> {
    opts.validate()?;
    Hvsa::new(&opts.net, &opts.scrape)?.league_sections()
}
