// Download service for ingested text files — resolves a digest id to the text
// file some ingestion pipeline left on disk and serves it over HTTP.

pub mod config;
pub mod error;
pub mod logging;
pub mod server;
pub mod store;
