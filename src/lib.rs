// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod csv;
pub mod error;
pub mod file;
pub mod item;
pub mod money;
pub mod normalize;
pub mod params;
pub mod runner;
pub mod scrape;
pub mod sink;
pub mod split;
pub mod store;
