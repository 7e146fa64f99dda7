// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod file;
pub mod flatten;
pub mod logging;
pub mod model;
pub mod progress;
pub mod scrape;

pub use crate::core::{Transport, TransportError, UreqClient};
pub use flatten::{flatten, FlatRecord};
pub use model::{RawShot, ResultId, Session};
pub use scrape::{harvest, Harvest, HarvestError};
