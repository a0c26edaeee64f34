// Shared types
pub mod types;

// Extraction core
pub mod aggregate;
pub mod clean;
pub mod dedupe;
pub mod extract;
pub mod page;
pub mod patterns;
pub mod validate;

// Site discovery shell
pub mod batch;
pub mod fetch;
pub mod report;
