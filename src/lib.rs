//! apodview - NASA Astronomy Picture of the Day, nine days at a time.
//!
//! Loads a mirror of the APOD archive once, then serves (or prints) windows
//! of nine consecutive calendar days clamped to the dataset's coverage, with
//! placeholders for days the mirror is missing.

pub mod cli;
pub mod config;
pub mod dates;
pub mod facts;
pub mod feed;
pub mod gallery;
pub mod models;
pub mod server;
pub mod services;
pub mod window;
