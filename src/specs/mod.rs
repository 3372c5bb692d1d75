// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific parsing for the nuLiga handball site. Each spec focuses on one
//! page and encodes *where the ground truth lives in the HTML* and *how to
//! extract it*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of already-fetched pages (league page, league
//!   standings page, team page).
//! - **Light shaping** of results into the records in `data`.
//!
//! ## What does **not** live here
//! - **Networking**: pages are fetched by `scrape` through `core::net`.
//! - **Export formatting**: sheet layout is decided by `ods`.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::Hvsa::collect_* → core::net::Fetcher::get
//!                                  ↘ specs::<page>::parse_doc
//! runner → ods::build_document → ods::write
//! ```
//!
//! ## Conventions & invariants
//! - Rows come out in **document order**; nothing here sorts.
//! - A missing anchor element (`table.matrix`, `table.result-set`) means the
//!   markup changed and is a `ParseError`, never an empty result.
//! - An anchor element with no data rows is a legitimate empty result.
//!
//! ## Current specs
//! - `sections` – section headings and league links on `leaguePage`.
//! - `standings` – the league table on a league's page.
//! - `games` – a team's game list (and iCal link) on its team page.
//!
//! Specs are testable **offline** against captured fixtures.
pub mod games;
pub mod sections;
pub mod standings;
