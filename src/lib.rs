#![doc = include_str!("../README.md")]

pub mod api;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod log;
pub mod macros;
pub mod runtime;
pub mod selectors;
pub mod tools;
pub mod types;


pub use api::{discover, discover_blocking, extract_html, extract_site, Components};
pub use config::{Config, DiscoverOptions};
pub use document::Document;
pub use error::{Result, SiteFactsError};
pub use tools::patterns::{PatternConfig, PatternLibrary};
pub use types::*;
