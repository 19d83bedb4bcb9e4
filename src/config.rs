use std::path::PathBuf;

use serde::Deserialize;

/// Maximum bytes a downloadable text file may have (50 MiB).
pub const MAX_TEXT_FILE_BYTES: u64 = 50 * 1024 * 1024;

/// Suffix a file name must carry to be considered for download.
pub const TEXT_FILE_SUFFIX: &str = ".txt";

/// Top-level configuration for the download service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Directory under which each digest id maps to a subdirectory.
    pub digest_root: PathBuf,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            digest_root: PathBuf::from("/tmp/ingest"),
            bind_addr: "127.0.0.1:8080".to_string(),
        }
    }
}
