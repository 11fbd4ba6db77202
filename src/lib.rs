//! bikeshare_rs
//!
//! A small Rust library for exploring US bike-share trip data (Chicago, New York City,
//! Washington). Pairs with the interactive `bikeshare` CLI.
//!
//! ### Features
//! - Load a city's trip CSV and filter it by start month and/or day of week
//! - Most common travel times, stations and start/end combinations
//! - Total and mean trip duration
//! - User type, gender and birth-year breakdowns (when the dataset carries them)
//! - Paginated raw-row viewer
//!
//! ### Example
//! ```no_run
//! use bikeshare_rs::{City, FilterSelection, Month};
//!
//! let selection = FilterSelection { city: City::Chicago, month: Some(Month::March), day: None };
//! let mut out = std::io::stdout();
//! let trips = bikeshare_rs::storage::load_data("data", &selection, &mut out)?;
//! bikeshare_rs::report::all(&mut out, &trips)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod browser;
pub mod error;
pub mod filter;
pub mod models;
pub mod prompt;
pub mod report;
pub mod stats;
pub mod storage;

pub use error::BikeshareError;
pub use models::{City, FilterSelection, Month, Trip, TripTable};
pub use prompt::Console;
