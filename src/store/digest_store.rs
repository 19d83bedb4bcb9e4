// Resolution and validation of digest directories — the read path behind the
// download endpoint.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{error, warn};

use crate::config::{MAX_TEXT_FILE_BYTES, TEXT_FILE_SUFFIX};
use crate::error::DownloadError;
use crate::store::validate::validate_content;

/// A text file loaded from a digest directory, ready to serve.
#[derive(Debug, Clone)]
pub struct StoredText {
    pub filename: String,
    pub content: String,
}

/// Read-only accessor for digest directories.
///
/// The directories are owned and populated by the ingestion pipeline; this
/// type never creates, mutates, or deletes anything under the root.
pub struct DigestStore {
    root: PathBuf,
}

impl DigestStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory a digest id resolves to.
    // TODO: digest ids are joined into the path unvalidated, so an id with
    // separators escapes the root. Reject path separators before exposing
    // this service beyond trusted callers.
    pub fn digest_dir(&self, digest_id: &str) -> PathBuf {
        self.root.join(digest_id)
    }

    /// Load the text file for `digest_id`.
    ///
    /// Runs every check before any byte is handed back: directory existence,
    /// candidate selection, a size check against filesystem metadata before
    /// the read, and content validation after it.
    pub async fn load(&self, digest_id: &str) -> Result<StoredText, DownloadError> {
        let directory = self.digest_dir(digest_id);

        if let Err(e) = fs::metadata(&directory).await {
            if e.kind() == ErrorKind::NotFound {
                warn!("digest directory not found digest_id={}", digest_id);
                return Err(DownloadError::NotFound(
                    "Digest directory not found".to_string(),
                ));
            }
            error!(
                "digest directory inaccessible digest_id={} err={}",
                digest_id, e
            );
            return Err(DownloadError::from_io(e));
        }

        let (filename, file_path) = match self.first_text_file(digest_id, &directory).await? {
            Some(found) => found,
            None => {
                warn!("no text file in digest directory digest_id={}", digest_id);
                return Err(DownloadError::NotFound(
                    "No text file found for this digest".to_string(),
                ));
            }
        };

        // Size check against metadata, before anything is read into memory.
        let file_size = fs::metadata(&file_path)
            .await
            .map_err(|e| {
                error!("file stat failed digest_id={} err={}", digest_id, e);
                DownloadError::from_io(e)
            })?
            .len();
        if file_size > MAX_TEXT_FILE_BYTES {
            error!(
                "file exceeds size limit digest_id={} size={}",
                digest_id, file_size
            );
            return Err(DownloadError::TooLarge);
        }

        let content = fs::read_to_string(&file_path).await.map_err(|e| {
            error!("file read failed digest_id={} err={}", digest_id, e);
            DownloadError::from_io(e)
        })?;

        if let Some(reason) = validate_content(&content) {
            error!(
                "content validation failed digest_id={} reason={}",
                digest_id, reason
            );
            return Err(DownloadError::Unprocessable(reason));
        }

        Ok(StoredText { filename, content })
    }

    /// First entry whose name ends with the text suffix, in listing order.
    ///
    /// Listing order is whatever the filesystem returns, so with multiple
    /// candidates the selection is unspecified.
    async fn first_text_file(
        &self,
        digest_id: &str,
        directory: &Path,
    ) -> Result<Option<(String, PathBuf)>, DownloadError> {
        let mut entries = fs::read_dir(directory).await.map_err(|e| {
            error!(
                "digest directory listing failed digest_id={} err={}",
                digest_id, e
            );
            DownloadError::from_io(e)
        })?;

        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            error!(
                "digest directory listing failed digest_id={} err={}",
                digest_id, e
            );
            DownloadError::from_io(e)
        })? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(TEXT_FILE_SUFFIX) {
                return Ok(Some((name, entry.path())));
            }
        }

        Ok(None)
    }
}
