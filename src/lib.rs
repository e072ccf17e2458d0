//! Load a time column and an amplitude column from two numeric files and
//! show them as a line chart.
//!
//! The viewer runs three steps in order:
//! [`data::loader::load_file`] → [`plot::compose`] → [`display::show`].
//! [`signal`] produces the input files.

pub mod app;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod plot;
pub mod signal;
pub mod ui;
