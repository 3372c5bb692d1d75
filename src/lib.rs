// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod file;
pub mod log;
pub mod ods;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod specs;

pub use error::{Error, Result};
