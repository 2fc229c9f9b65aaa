use crate::PreviewStore;

use face_enroll_core::PreviewProvider;

use std::{fs, path::Path};

use tempfile::TempDir;

/// WHAT: Creating a preview writes a file and returns its file URL
/// WHY: The terminal shows the URL so the photo can be opened
#[test]
#[allow(clippy::unwrap_used)]
fn given_jpeg_when_creating_preview_then_file_written() {
    // Given: An empty store
    let dir = TempDir::new().unwrap();
    let store = PreviewStore::new(dir.path().join("previews")).unwrap();

    // When: Publishing a JPEG
    let url = store.create(b"jpeg-bytes", "image/jpeg").unwrap();

    // Then: A .jpg file with the bytes exists behind the URL
    let path = Path::new(url.strip_prefix("file://").unwrap());
    assert!(path.extension().is_some_and(|ext| ext == "jpg" || ext == "jpeg"));
    assert_eq!(fs::read(path).unwrap(), b"jpeg-bytes");
    assert_eq!(store.live_count(), 1);
}

/// WHAT: Revoking deletes the file, and a second revoke does nothing
/// WHY: Previews must not pile up in the cache directory
#[test]
#[allow(clippy::unwrap_used)]
fn given_preview_when_revoking_twice_then_deleted_once() {
    // Given: A published preview
    let dir = TempDir::new().unwrap();
    let store = PreviewStore::new(dir.path()).unwrap();
    let url = store.create(b"png", "image/png").unwrap();
    let path = Path::new(url.strip_prefix("file://").unwrap()).to_path_buf();

    // When: Revoking twice
    store.revoke(&url);
    store.revoke(&url);

    // Then: File gone, nothing live
    assert!(!path.exists());
    assert_eq!(store.live_count(), 0);
}

/// WHAT: Revoking a URL the store did not create deletes nothing
/// WHY: Only the store's own files may be removed
#[test]
#[allow(clippy::unwrap_used)]
fn given_foreign_file_when_revoking_then_untouched() {
    // Given: A file the store never created
    let dir = TempDir::new().unwrap();
    let store = PreviewStore::new(dir.path()).unwrap();
    let foreign = dir.path().join("keep.txt");
    fs::write(&foreign, b"keep").unwrap();

    // When: Revoking its URL
    store.revoke(&format!("file://{}", foreign.display()));
    store.revoke("https://example.com/x.png");

    // Then: Still there
    assert!(foreign.exists());
}

/// WHAT: Unknown media types still get a file
/// WHY: Any image/* the workflow accepted must be previewable
#[test]
#[allow(clippy::unwrap_used)]
fn given_unknown_image_type_when_creating_then_generic_extension() {
    // Given: An exotic image type
    let dir = TempDir::new().unwrap();
    let store = PreviewStore::new(dir.path()).unwrap();

    // When
    let url = store.create(b"raw", "image/x-exotic").unwrap();

    // Then
    assert!(url.ends_with(".img"));
}
