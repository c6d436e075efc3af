// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod analysis;
pub mod chart;
pub mod csv;
pub mod file;
pub mod gui;
pub mod model;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod sql;
pub mod store;
pub mod transform;
