// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::config::consts::DEFAULT_CONFIG_FILE;
use crate::config::options::AppOptions;
use crate::error::Result;
use crate::progress::Progress;

/// Scrape HVSA handball standings and schedules into an ODS spreadsheet
#[derive(Parser, Debug)]
#[command(name = "hvsa_scrape", version, about, long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Output .ods file (a trailing slash means directory)
    #[arg(short, long)]
    pub out: Option<String>,

    /// Season, e.g. 2024/25
    #[arg(long)]
    pub year: Option<String>,

    /// Championship id, e.g. West, Nord, HVSA
    #[arg(long)]
    pub league: Option<String>,

    /// Section to scrape (repeatable; default: all)
    #[arg(long = "section")]
    pub sections: Vec<String>,

    /// Team whose schedule to export (repeatable)
    #[arg(long = "team")]
    pub teams: Vec<String>,

    /// Only keep the team's home games
    #[arg(long)]
    pub home_only: bool,

    /// Also download the first team's iCal file to this path
    #[arg(long)]
    pub ics: Option<PathBuf>,

    /// List sections and leagues, then exit
    #[arg(long)]
    pub list_sections: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Config file values, overridden by whatever was given on the command line.
    pub fn resolve_options(&self) -> Result<AppOptions> {
        let mut opts = AppOptions::load(&self.config)?;
        if let Some(out) = &self.out {
            opts.export.set_path(out);
        }
        if let Some(year) = &self.year {
            opts.scrape.year = year.clone();
        }
        if let Some(league) = &self.league {
            opts.scrape.league = league.clone();
        }
        if !self.sections.is_empty() {
            opts.scrape.sections = self.sections.clone();
        }
        if !self.teams.is_empty() {
            opts.scrape.teams = self.teams.clone();
        }
        if self.home_only {
            opts.export.home_only = true;
        }
        if self.ics.is_some() {
            opts.export.ics = self.ics.clone();
        }
        Ok(opts)
    }
}

/// Prints progress lines to stderr.
struct StderrProgress {
    total: usize,
    done: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, name: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {name}", self.done, self.total);
    }
}

pub fn run(args: Args) -> Result<()> {
    let opts = args.resolve_options()?;

    if args.list_sections {
        for section in crate::runner::list_sections(&opts)? {
            println!("{}", section.name);
            for league in &section.leagues {
                println!("  {}", league.name);
            }
        }
        return Ok(());
    }

    let mut progress = StderrProgress { total: 0, done: 0 };
    let summary = crate::runner::run(&opts, &mut progress)?;
    println!(
        "{} standings rows, {} games → {}",
        summary.standings_rows,
        summary.game_rows,
        summary
            .files_written
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "hvsa_scrape",
            "--config", "/nonexistent/hvsa.toml",
            "--year", "2023/24",
            "--section", "Männer",
            "--team", "TSV Wefensleben",
            "--home-only",
            "-o", "tables/west",
        ]);
        let opts = args.resolve_options().unwrap();
        assert_eq!(opts.scrape.year, "2023/24");
        assert_eq!(opts.scrape.sections, vec!["Männer"]);
        assert_eq!(opts.scrape.teams, vec!["TSV Wefensleben"]);
        assert!(opts.export.home_only);
        assert_eq!(opts.export.out_path(), PathBuf::from("tables/west.ods"));
    }
}
