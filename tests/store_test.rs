// DigestStore behavior, exercised without the HTTP layer.

use std::fs;
use std::path::Path;

use ingest_serve::config::MAX_TEXT_FILE_BYTES;
use ingest_serve::error::DownloadError;
use ingest_serve::store::digest_store::DigestStore;

fn write_digest_file(root: &Path, digest_id: &str, filename: &str, content: &[u8]) {
    let dir = root.join(digest_id);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(filename), content).unwrap();
}

#[tokio::test]
async fn test_load_returns_filename_and_content() {
    let tmp_dir = tempfile::tempdir().unwrap();
    write_digest_file(tmp_dir.path(), "d1", "extract.txt", b"line one\nline two\n");

    let store = DigestStore::new(tmp_dir.path());
    let stored = store.load("d1").await.unwrap();

    assert_eq!(stored.filename, "extract.txt");
    assert_eq!(stored.content, "line one\nline two\n");
}

#[tokio::test]
async fn test_missing_directory() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let store = DigestStore::new(tmp_dir.path());

    let err = store.load("absent").await.unwrap_err();
    assert!(matches!(err, DownloadError::NotFound(_)));
    assert_eq!(err.to_string(), "Digest directory not found");
}

#[tokio::test]
async fn test_directory_without_candidates() {
    let tmp_dir = tempfile::tempdir().unwrap();
    write_digest_file(tmp_dir.path(), "d1", "image.png", b"\x89PNG");

    let store = DigestStore::new(tmp_dir.path());
    let err = store.load("d1").await.unwrap_err();

    assert!(matches!(err, DownloadError::NotFound(_)));
    assert_eq!(err.to_string(), "No text file found for this digest");
}

#[tokio::test]
async fn test_empty_content_rejected() {
    let tmp_dir = tempfile::tempdir().unwrap();
    write_digest_file(tmp_dir.path(), "d1", "empty.txt", b"");

    let store = DigestStore::new(tmp_dir.path());
    let err = store.load("d1").await.unwrap_err();

    assert!(matches!(err, DownloadError::Unprocessable(_)));
    assert_eq!(err.to_string(), "File is empty");
}

#[tokio::test]
async fn test_oversized_file_rejected_before_read() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let dir = tmp_dir.path().join("d1");
    fs::create_dir_all(&dir).unwrap();

    let file = fs::File::create(dir.join("huge.txt")).unwrap();
    file.set_len(MAX_TEXT_FILE_BYTES + 1).unwrap();

    let store = DigestStore::new(tmp_dir.path());
    let err = store.load("d1").await.unwrap_err();

    assert!(matches!(err, DownloadError::TooLarge));
}

#[tokio::test]
async fn test_candidate_must_end_with_txt() {
    let tmp_dir = tempfile::tempdir().unwrap();
    write_digest_file(tmp_dir.path(), "d1", "archive.txt.gz", b"not text");
    write_digest_file(tmp_dir.path(), "d1", "report.txt", b"quarterly numbers");

    let store = DigestStore::new(tmp_dir.path());
    let stored = store.load("d1").await.unwrap();

    assert_eq!(stored.filename, "report.txt");
    assert_eq!(stored.content, "quarterly numbers");
}

#[tokio::test]
async fn test_digest_dir_joins_identifier() {
    let store = DigestStore::new("/var/ingest");
    assert_eq!(
        store.digest_dir("abc123"),
        Path::new("/var/ingest").join("abc123")
    );
}
